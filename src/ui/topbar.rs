use dashboard_shell::{
    components::{TopbarModel, TopbarProps, UserMenuItem},
    layout::ShellTheme,
};

use crate::state::AppState;

use super::layout_bridge;

pub const USER_MENU_PROFILE: &str = "profile";
pub const USER_MENU_SETTINGS: &str = "settings";
pub const USER_MENU_LOGOUT: &str = "logout";

fn user_menu() -> Vec<UserMenuItem> {
    vec![
        UserMenuItem::new(USER_MENU_PROFILE, "Perfil").with_icon("👤"),
        UserMenuItem::new(USER_MENU_SETTINGS, "Configuración").with_icon("⚙"),
        UserMenuItem::new(USER_MENU_LOGOUT, "Cerrar sesión")
            .with_icon("⎋")
            .destructive(),
    ]
}

impl TopbarModel for AppState {
    fn theme(&self) -> ShellTheme {
        layout_bridge::shell_theme(&self.theme)
    }

    fn props(&self) -> TopbarProps {
        TopbarProps {
            company_name: self.config.company_name().to_string(),
            company_logo: self.config.company_logo.clone(),
            user_name: self.config.user_name().to_string(),
            user_email: self.config.user_email().to_string(),
            user_avatar: self.config.user_avatar.clone(),
            badge: self.shell.badge_label(),
            account_label: "Mi Cuenta".to_string(),
            user_menu: user_menu(),
        }
    }

    fn on_menu_toggle(&mut self) {
        self.shell.toggle_menu();
    }

    fn on_notifications_toggle(&mut self) {
        self.shell.toggle_notifications();
    }

    // Las entradas de cuenta sólo se registran; no hay sesión que cerrar.
    fn on_user_menu_item(&mut self, item_id: &str) {
        log::info!("menú de usuario: {}", item_id);
    }
}
