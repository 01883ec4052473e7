use crate::state::AppState;
use dashboard_shell::components::{
    draw_main_content, draw_notification_panel, draw_sidebar, draw_topbar,
};
use eframe::egui;

pub mod home;
pub mod layout_bridge;
pub mod notifications;
pub mod sidebar;
pub mod theme;
pub mod topbar;

/// Dibuja el shell completo. El menú fijo debe registrarse antes del panel central.
pub fn draw_ui(ctx: &egui::Context, state: &mut AppState) {
    let layout = state.layout.clone();
    draw_topbar(ctx, &layout, state);
    draw_sidebar(ctx, &layout, state);
    draw_main_content(ctx, &layout, state);
    draw_notification_panel(ctx, &layout, state);
}
