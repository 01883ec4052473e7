use eframe::egui::{self, Color32, Id, Margin, Order, Sense, Stroke};

/// Conjunto mínimo de tokens de estilo utilizados por los componentes del shell.
#[derive(Clone, Debug)]
pub struct ShellTheme {
    pub root_background: Color32,
    pub surface_background: Color32,
    pub header_background: Color32,
    pub border: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub accent_soft: Color32,
    pub accent_text: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub danger: Color32,
    pub info: Color32,
    pub backdrop: Color32,
}

impl Default for ShellTheme {
    fn default() -> Self {
        Self {
            root_background: Color32::from_rgb(24, 26, 30),
            surface_background: Color32::from_rgb(32, 34, 38),
            header_background: Color32::from_rgb(40, 42, 48),
            border: Color32::from_rgba_unmultiplied(70, 72, 78, 160),
            text_primary: Color32::from_rgb(232, 233, 239),
            text_muted: Color32::from_rgb(172, 176, 184),
            accent: Color32::from_rgb(65, 148, 245),
            accent_soft: Color32::from_rgb(48, 86, 128),
            accent_text: Color32::from_rgb(248, 249, 251),
            success: Color32::from_rgb(34, 197, 94),
            warning: Color32::from_rgb(234, 179, 8),
            danger: Color32::from_rgb(220, 38, 38),
            info: Color32::from_rgb(59, 130, 246),
            backdrop: Color32::from_rgba_unmultiplied(12, 12, 14, 200),
        }
    }
}

/// Medidas y puntos de corte del layout del panel.
#[derive(Clone, Debug)]
pub struct LayoutConfig {
    pub topbar_height: f32,
    pub sidebar_width: f32,
    pub notification_width: f32,
    /// Ancho de ventana a partir del cual el menú lateral queda fijo.
    pub pinned_breakpoint: f32,
    /// Por debajo de este ancho el panel de notificaciones ocupa toda la ventana.
    pub compact_breakpoint: f32,
    pub indent_per_level: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            topbar_height: 64.0,
            sidebar_width: 256.0,
            notification_width: 384.0,
            pinned_breakpoint: 1024.0,
            compact_breakpoint: 640.0,
            indent_per_level: 32.0,
        }
    }
}

impl LayoutConfig {
    pub fn sidebar_pinned(&self, screen_width: f32) -> bool {
        screen_width >= self.pinned_breakpoint
    }

    /// Ventanas estrechas: panel de notificaciones a pantalla completa y márgenes reducidos.
    pub fn is_compact(&self, screen_width: f32) -> bool {
        screen_width < self.compact_breakpoint
    }

    pub fn notification_panel_width(&self, screen_width: f32) -> f32 {
        if self.is_compact(screen_width) {
            screen_width
        } else {
            self.notification_width.min(screen_width)
        }
    }
}

/// Envoltorio utilitario que pinta un panel principal centralizado.
pub(crate) fn main_surface_frame(theme: &ShellTheme, compact: bool) -> egui::Frame {
    let margin = if compact {
        Margin::same(12.0)
    } else {
        Margin {
            left: 24.0,
            right: 24.0,
            top: 24.0,
            bottom: 18.0,
        }
    };
    egui::Frame::none()
        .fill(theme.root_background)
        .inner_margin(margin)
}

/// Pinta un velo sobre el área situada bajo el topbar y devuelve `true` si se
/// hizo clic sobre él.
pub(crate) fn draw_backdrop(
    ctx: &egui::Context,
    id: &str,
    theme: &ShellTheme,
    layout: &LayoutConfig,
) -> bool {
    let screen = ctx.screen_rect();
    let area = egui::Rect::from_min_max(
        egui::pos2(screen.left(), screen.top() + layout.topbar_height),
        screen.max,
    );

    egui::Area::new(Id::new(id))
        .order(Order::Middle)
        .fixed_pos(area.min)
        .show(ctx, |ui| {
            let (rect, response) = ui.allocate_exact_size(area.size(), Sense::click());
            ui.painter().rect_filled(rect, 0.0, theme.backdrop);
            response.clicked()
        })
        .inner
}

pub(crate) fn panel_stroke(theme: &ShellTheme) -> Stroke {
    Stroke::new(1.0, theme.border)
}
