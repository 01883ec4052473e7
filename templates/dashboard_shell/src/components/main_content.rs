use eframe::egui::{self, RichText};

use crate::layout::{main_surface_frame, LayoutConfig, ShellTheme};

#[derive(Clone, Debug, Default)]
pub struct MainContentProps {
    pub title: String,
    pub subtitle: Option<String>,
    /// Ruta de migas mostrada sobre el título.
    pub breadcrumb: Option<String>,
}

pub trait MainContentModel {
    fn theme(&self) -> ShellTheme;
    fn props(&self) -> MainContentProps;
    fn show_content(&mut self, ui: &mut egui::Ui);
}

pub fn draw_main_content(
    ctx: &egui::Context,
    layout: &LayoutConfig,
    model: &mut dyn MainContentModel,
) {
    let theme = model.theme();
    let props = model.props();
    let compact = layout.is_compact(ctx.screen_rect().width());

    egui::CentralPanel::default()
        .frame(main_surface_frame(&theme, compact))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("dashboard_main_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if let Some(breadcrumb) = props.breadcrumb.as_ref() {
                        ui.small(RichText::new(breadcrumb).color(theme.text_muted));
                    }
                    ui.heading(
                        RichText::new(&props.title)
                            .strong()
                            .size(28.0)
                            .color(theme.text_primary),
                    );
                    if let Some(subtitle) = props.subtitle.as_ref() {
                        ui.add_space(4.0);
                        ui.label(RichText::new(subtitle).color(theme.text_muted));
                    }
                    ui.add_space(20.0);
                    model.show_content(ui);
                });
        });
}
