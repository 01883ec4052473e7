use eframe::egui::{self, Align, Frame, Layout, Margin, RichText, Rounding, Stroke};

use crate::layout::ShellTheme;

#[derive(Clone, Debug)]
pub struct StatCardProps {
    pub title: String,
    pub value: String,
    pub change: String,
    pub caption: String,
    pub icon: Option<String>,
}

#[derive(Clone, Debug)]
pub struct CardProps {
    pub title: String,
    pub description: Option<String>,
}

fn card_frame(theme: &ShellTheme) -> Frame {
    Frame::none()
        .fill(theme.surface_background)
        .stroke(Stroke::new(1.0, theme.border))
        .rounding(Rounding::same(10.0))
        .inner_margin(Margin::same(18.0))
}

/// Tarjeta con cabecera (título y descripción opcional) y contenido libre.
pub fn draw_card<R>(
    ui: &mut egui::Ui,
    theme: &ShellTheme,
    props: &CardProps,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    card_frame(theme)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.strong(RichText::new(&props.title).color(theme.text_primary).size(16.0));
            if let Some(description) = props.description.as_ref() {
                ui.small(RichText::new(description).color(theme.text_muted));
            }
            ui.add_space(12.0);
            add_contents(ui)
        })
        .inner
}

pub fn draw_stat_card(ui: &mut egui::Ui, theme: &ShellTheme, props: &StatCardProps) {
    card_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(&props.title).color(theme.text_primary).size(13.0));
            if let Some(icon) = props.icon.as_ref() {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(icon).color(theme.text_muted).size(16.0));
                });
            }
        });
        ui.add_space(6.0);
        ui.label(
            RichText::new(&props.value)
                .strong()
                .size(24.0)
                .color(theme.text_primary),
        );
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label(RichText::new(&props.change).color(theme.success).size(11.0).strong());
            ui.label(RichText::new(&props.caption).color(theme.text_muted).size(11.0));
        });
    });
}
