use dashboard_shell::{
    components::{draw_card, draw_stat_card, CardProps, MainContentModel, MainContentProps, StatCardProps},
    layout::ShellTheme,
};
use eframe::egui::{self, RichText};

use crate::state::{dashboard::Stat, ActivityEntry, AppState};

use super::layout_bridge;

/// Columnas de la rejilla de indicadores según el ancho disponible.
pub fn stat_columns(available_width: f32) -> usize {
    if available_width >= 960.0 {
        4
    } else if available_width >= 560.0 {
        2
    } else {
        1
    }
}

fn stat_props(stat: &Stat) -> StatCardProps {
    StatCardProps {
        title: stat.title.to_string(),
        value: stat.value.to_string(),
        change: stat.change.to_string(),
        caption: "desde el mes pasado".to_string(),
        icon: Some(stat.icon.to_string()),
    }
}

fn draw_stats(ui: &mut egui::Ui, theme: &ShellTheme, stats: &[Stat]) {
    let columns = stat_columns(ui.available_width());
    for row in stats.chunks(columns) {
        ui.columns(columns, |cols| {
            for (col, stat) in cols.iter_mut().zip(row) {
                draw_stat_card(col, theme, &stat_props(stat));
            }
        });
        ui.add_space(8.0);
    }
}

fn draw_overview(ui: &mut egui::Ui, theme: &ShellTheme) {
    let props = CardProps {
        title: "Resumen".to_string(),
        description: None,
    };
    draw_card(ui, theme, &props, |ui| {
        ui.add_sized(
            [ui.available_width(), 240.0],
            egui::Label::new(
                RichText::new("Aquí irían tus gráficos y visualizaciones").color(theme.text_muted),
            ),
        );
    });
}

fn draw_activity(ui: &mut egui::Ui, theme: &ShellTheme, activity: &[ActivityEntry]) {
    let props = CardProps {
        title: "Actividad Reciente".to_string(),
        description: Some("Últimas acciones en tu cuenta".to_string()),
    };
    draw_card(ui, theme, &props, |ui| {
        for entry in activity {
            ui.horizontal(|ui| {
                let (dot, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
                ui.painter().circle_filled(dot.center(), 4.0, theme.accent);
                ui.vertical(|ui| {
                    ui.label(RichText::new(entry.description).color(theme.text_primary));
                    ui.small(RichText::new(entry.age_label()).color(theme.text_muted));
                });
            });
            ui.add_space(6.0);
        }
    });
}

impl MainContentModel for AppState {
    fn theme(&self) -> ShellTheme {
        layout_bridge::shell_theme(&self.theme)
    }

    fn props(&self) -> MainContentProps {
        MainContentProps {
            title: "Dashboard".to_string(),
            subtitle: Some("Bienvenido de vuelta. Aquí está un resumen de tu negocio.".to_string()),
            breadcrumb: Some(
                self.active_link_label()
                    .map(str::to_string)
                    .unwrap_or_else(|| self.current_path.clone()),
            ),
        }
    }

    fn show_content(&mut self, ui: &mut egui::Ui) {
        let theme = layout_bridge::shell_theme(&self.theme);
        draw_stats(ui, &theme, &self.stats);
        ui.add_space(8.0);

        if ui.available_width() >= 960.0 {
            ui.columns(2, |cols| {
                draw_overview(&mut cols[0], &theme);
                draw_activity(&mut cols[1], &theme, &self.activity);
            });
        } else {
            draw_overview(ui, &theme);
            ui.add_space(8.0);
            draw_activity(ui, &theme, &self.activity);
        }
    }
}
