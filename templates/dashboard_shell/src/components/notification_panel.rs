use eframe::egui::{self, Align, Color32, Frame, Layout, Margin, RichText, Sense, Stroke};

use crate::layout::{draw_backdrop, panel_stroke, LayoutConfig, ShellTheme};

#[derive(Clone, Debug)]
pub struct NotificationPanelProps {
    pub open: bool,
    pub title: String,
    /// Resumen bajo el título, p. ej. "3 sin leer".
    pub summary: String,
    /// Etiqueta de la acción "marcar todas"; `None` la oculta.
    pub mark_all_label: Option<String>,
    pub body: NotificationPanelBody,
}

impl Default for NotificationPanelProps {
    fn default() -> Self {
        Self {
            open: false,
            title: "Notificaciones".to_string(),
            summary: String::new(),
            mark_all_label: None,
            body: NotificationPanelBody::Empty {
                message: "No tienes notificaciones".to_string(),
            },
        }
    }
}

/// Contenido de la lista: un marcador de vacío o las filas, nunca ambos.
#[derive(Clone, Debug, PartialEq)]
pub enum NotificationPanelBody {
    Empty { message: String },
    Items(Vec<NotificationRow>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct NotificationRow {
    pub id: String,
    pub tone: NotificationTone,
    pub title: String,
    pub message: String,
    pub age: String,
    pub unread: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationTone {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationTone {
    pub fn icon(self) -> &'static str {
        match self {
            NotificationTone::Success => "✔",
            NotificationTone::Warning | NotificationTone::Error => "⚠",
            NotificationTone::Info => "ℹ",
        }
    }

    pub fn color(self, theme: &ShellTheme) -> Color32 {
        match self {
            NotificationTone::Success => theme.success,
            NotificationTone::Warning => theme.warning,
            NotificationTone::Error => theme.danger,
            NotificationTone::Info => theme.info,
        }
    }
}

pub trait NotificationPanelModel {
    fn theme(&self) -> ShellTheme;
    fn props(&self) -> NotificationPanelProps;
    fn on_close(&mut self);
    fn on_mark_all_read(&mut self);
    fn on_notification_clicked(&mut self, notification_id: &str);
}

pub fn draw_notification_panel(
    ctx: &egui::Context,
    layout: &LayoutConfig,
    model: &mut dyn NotificationPanelModel,
) {
    let theme = model.theme();
    let props = model.props();
    if !props.open {
        return;
    }

    if draw_backdrop(ctx, "dashboard_notifications_backdrop", &theme, layout) {
        model.on_close();
        return;
    }

    let screen = ctx.screen_rect();
    let width = layout.notification_panel_width(screen.width());
    let height = screen.height() - layout.topbar_height;

    egui::Area::new(egui::Id::new("dashboard_notifications_panel"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::pos2(
            screen.right() - width,
            screen.top() + layout.topbar_height,
        ))
        .show(ctx, |ui| {
            Frame::none()
                .fill(theme.surface_background)
                .stroke(panel_stroke(&theme))
                .show(ui, |ui| {
                    ui.set_width(width);
                    ui.set_height(height);
                    ui.spacing_mut().item_spacing.y = 0.0;

                    draw_panel_header(ui, &theme, &props, model);

                    if let Some(label) = props.mark_all_label.as_ref() {
                        Frame::none()
                            .inner_margin(Margin::symmetric(16.0, 8.0))
                            .show(ui, |ui| {
                                let button = egui::Button::new(
                                    RichText::new(format!("✔ {}", label)).size(12.0),
                                )
                                .frame(false);
                                if ui.add(button).clicked() {
                                    model.on_mark_all_read();
                                }
                            });
                        ui.separator();
                    }

                    egui::ScrollArea::vertical()
                        .id_source("dashboard_notifications_scroll")
                        .auto_shrink([false, false])
                        .show(ui, |ui| match &props.body {
                            NotificationPanelBody::Empty { message } => {
                                draw_empty_state(ui, &theme, message);
                            }
                            NotificationPanelBody::Items(rows) => {
                                for row in rows {
                                    if notification_row(ui, &theme, row).clicked() {
                                        model.on_notification_clicked(&row.id);
                                    }
                                    ui.separator();
                                }
                            }
                        });
                });
        });
}

fn draw_panel_header(
    ui: &mut egui::Ui,
    theme: &ShellTheme,
    props: &NotificationPanelProps,
    model: &mut dyn NotificationPanelModel,
) {
    Frame::none()
        .inner_margin(Margin::symmetric(16.0, 12.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.strong(RichText::new(&props.title).size(18.0).color(theme.text_primary));
                    ui.small(RichText::new(&props.summary).color(theme.text_muted));
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let close = ui
                        .add(egui::Button::new(RichText::new("✖").size(14.0)).frame(false))
                        .on_hover_text("Cerrar notificaciones");
                    if close.clicked() {
                        model.on_close();
                    }
                });
            });
        });
    ui.separator();
}

fn draw_empty_state(ui: &mut egui::Ui, theme: &ShellTheme, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(RichText::new("🔔").size(40.0).color(theme.text_muted));
        ui.add_space(12.0);
        ui.label(RichText::new(message).color(theme.text_muted));
        ui.add_space(48.0);
    });
}

fn notification_row(ui: &mut egui::Ui, theme: &ShellTheme, row: &NotificationRow) -> egui::Response {
    let fill = if row.unread {
        theme.accent_soft.gamma_multiply(0.5)
    } else {
        Color32::TRANSPARENT
    };

    let inner = Frame::none()
        .fill(fill)
        .stroke(Stroke::NONE)
        .inner_margin(Margin::symmetric(16.0, 12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_top(|ui| {
                ui.label(
                    RichText::new(row.tone.icon())
                        .size(18.0)
                        .color(row.tone.color(theme)),
                );
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.strong(RichText::new(&row.title).color(theme.text_primary));
                        if row.unread {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                let (rect, _) =
                                    ui.allocate_exact_size(egui::vec2(8.0, 8.0), Sense::hover());
                                ui.painter().circle_filled(rect.center(), 4.0, theme.accent);
                            });
                        }
                    });
                    ui.label(RichText::new(&row.message).color(theme.text_muted));
                    ui.small(RichText::new(format!("🕑 {}", row.age)).color(theme.text_muted));
                });
            });
        });

    let response = inner.response.interact(Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}
