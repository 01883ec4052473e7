pub mod clock;
pub mod dashboard;
pub mod navigation;
pub mod notifications;
pub mod shell;

pub use clock::{Clock, SystemClock};
pub use dashboard::{ActivityEntry, Stat};
pub use navigation::{MenuError, NavigationMenu};
pub use notifications::{NotificationFeed, NotificationKind};
pub use shell::ShellVisibility;

use crate::{
    config::AppConfig,
    ui::theme::{self, ThemeTokens},
};
use chrono::{DateTime, Utc};
use dashboard_shell::{
    components::shortcuts::{presets, ShortcutManager},
    layout::LayoutConfig,
    AppShell,
};

/// Estado completo del panel. Cada celda tiene un único dueño y sólo cambia a
/// través de los métodos de este tipo o de los modelos que contiene.
pub struct AppState {
    /// Configuración de presentación (marca, usuario, tema).
    pub config: AppConfig,
    /// Tokens visuales derivados del preset configurado.
    pub theme: ThemeTokens,
    /// Medidas y puntos de corte de los paneles del shell.
    pub layout: LayoutConfig,
    /// Paneles abiertos y contador de no leídas del topbar.
    pub shell: ShellVisibility,
    /// Árbol del menú lateral y grupos desplegados.
    pub navigation: NavigationMenu,
    /// Notificaciones y su estado de lectura.
    pub notifications: NotificationFeed,
    /// Ruta actual del enrutador interno.
    pub current_path: String,
    pub stats: Vec<Stat>,
    pub activity: Vec<ActivityEntry>,
    pub shortcuts: ShortcutManager,
    clock: Box<dyn Clock>,
}

impl AppState {
    pub fn from_config(config: AppConfig, clock: Box<dyn Clock>) -> Result<Self, MenuError> {
        let menu = config.menu.clone().unwrap_or_else(navigation::default_menu);
        let expanded = config
            .expanded_groups
            .clone()
            .unwrap_or_else(navigation::default_expanded_groups);
        let navigation = NavigationMenu::new(menu, &expanded)?;

        let notifications = NotificationFeed::new(notifications::seed_notifications(clock.now()));
        let shell = ShellVisibility::new(notifications.unread_count());

        let mut shortcuts = ShortcutManager::new();
        shortcuts.add_many(presets::shell_shortcuts());

        log::info!(
            "panel iniciado en '{}' con {} notificaciones sin leer",
            config.start_path,
            notifications.unread_count()
        );
        log::debug!(
            "grupos desplegados al inicio: {:?}",
            navigation.expansion().expanded_ids().collect::<Vec<_>>()
        );

        Ok(Self {
            theme: ThemeTokens::from_preset(config.theme),
            layout: LayoutConfig::default(),
            shell,
            navigation,
            notifications,
            current_path: config.start_path.clone(),
            stats: dashboard::default_stats(),
            activity: dashboard::default_activity(),
            shortcuts,
            clock,
            config,
        })
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn navigate(&mut self, path: impl Into<String>) {
        let path = path.into();
        log::info!("navegando de '{}' a '{}'", self.current_path, path);
        self.current_path = path;
    }

    /// Navega al destino del enlace `link_id`. Ids desconocidos o de grupo se ignoran.
    pub fn select_link(&mut self, link_id: &str) -> bool {
        match self.navigation.href_of(link_id) {
            Some(href) => {
                let href = href.to_string();
                self.navigate(href);
                true
            }
            None => false,
        }
    }

    pub fn toggle_group(&mut self, group_id: &str) {
        self.navigation.toggle_expanded(group_id);
    }

    pub fn mark_notification_read(&mut self, notification_id: &str) {
        self.notifications.mark_read(notification_id, &mut self.shell);
    }

    pub fn mark_all_notifications_read(&mut self) {
        self.notifications.mark_all_read(&mut self.shell);
    }

    /// Etiqueta del enlace activo para la ruta actual.
    pub fn active_link_label(&self) -> Option<&str> {
        self.navigation
            .tree()
            .leaf_for_path(&self.current_path)
            .map(|link| link.label.as_str())
    }

    pub fn handle_shortcut(&mut self, shortcut_id: &str) {
        match shortcut_id {
            presets::TOGGLE_MENU => self.shell.toggle_menu(),
            presets::TOGGLE_NOTIFICATIONS => self.shell.toggle_notifications(),
            presets::CLOSE_OVERLAYS => {
                self.shell.close_menu();
                self.shell.close_notifications();
            }
            other => log::debug!("atajo sin acción: {}", other),
        }
    }
}

impl AppShell for AppState {
    fn init(&mut self, cc: &eframe::CreationContext<'_>) {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        theme::apply(&cc.egui_ctx, &self.theme);
    }

    fn update(&mut self, ctx: &eframe::egui::Context) {
        for shortcut_id in self.shortcuts.pressed(ctx) {
            self.handle_shortcut(&shortcut_id);
        }
        crate::ui::draw_ui(ctx, self);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::state::{clock::FixedClock, navigation::MenuEntry};
    use chrono::TimeZone;

    pub(crate) fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    pub(crate) fn test_state() -> AppState {
        AppState::from_config(AppConfig::default(), Box::new(FixedClock(fixed_now()))).unwrap()
    }

    #[test]
    fn badge_starts_at_unread_count() {
        let state = test_state();
        assert_eq!(state.notifications.unread_count(), 3);
        assert_eq!(state.shell.unread_badge(), 3);
    }

    #[test]
    fn badge_follows_every_read_change() {
        let mut state = test_state();

        state.mark_notification_read("1");
        assert_eq!(state.shell.unread_badge(), 2);
        assert_eq!(state.shell.unread_badge(), state.notifications.unread_count());

        state.mark_notification_read("missing");
        assert_eq!(state.shell.unread_badge(), 2);

        state.mark_all_notifications_read();
        assert!(state.notifications.notifications().iter().all(|n| n.read));
        assert_eq!(state.shell.unread_badge(), 0);
    }

    #[test]
    fn notification_panel_visibility_never_touches_read_state() {
        let mut state = test_state();
        let before = state.notifications.notifications().to_vec();

        state.shell.toggle_notifications();
        assert!(state.shell.notifications_open());
        assert_eq!(state.shell.unread_badge(), 3);

        state.shell.close_notifications();
        assert_eq!(state.notifications.notifications(), before.as_slice());
        assert_eq!(state.shell.unread_badge(), 3);
    }

    #[test]
    fn selecting_links_drives_the_router() {
        let mut state = test_state();
        assert_eq!(state.current_path, "/");
        assert_eq!(state.active_link_label(), Some("Inicio"));

        assert!(state.select_link("inventory"));
        assert_eq!(state.current_path, "/products/inventory");
        assert_eq!(state.active_link_label(), Some("Inventario"));

        assert!(!state.select_link("products"));
        assert!(!state.select_link("missing"));
        assert_eq!(state.current_path, "/products/inventory");
    }

    #[test]
    fn shortcuts_map_to_shell_actions() {
        let mut state = test_state();

        state.handle_shortcut(presets::TOGGLE_MENU);
        state.handle_shortcut(presets::TOGGLE_NOTIFICATIONS);
        assert!(state.shell.menu_open());
        assert!(state.shell.notifications_open());

        state.handle_shortcut(presets::CLOSE_OVERLAYS);
        assert!(!state.shell.menu_open());
        assert!(!state.shell.notifications_open());
        assert_eq!(state.shell.unread_badge(), 3);
    }

    #[test]
    fn configured_menu_replaces_seed() {
        let config = AppConfig {
            menu: Some(vec![
                MenuEntry::link("start", "Inicio", "/"),
                MenuEntry::group(
                    "reports",
                    "Reportes",
                    vec![MenuEntry::link("daily", "Diario", "/reports/daily")],
                ),
            ]),
            expanded_groups: Some(vec!["reports".into()]),
            start_path: "/reports/daily".into(),
            ..AppConfig::default()
        };

        let state = AppState::from_config(config, Box::new(FixedClock(fixed_now()))).unwrap();
        assert!(state.navigation.is_expanded("reports"));
        assert_eq!(state.active_link_label(), Some("Diario"));
    }

    #[test]
    fn invalid_configured_menu_fails_at_startup() {
        let config = AppConfig {
            menu: Some(vec![MenuEntry::group("empty", "Vacío", Vec::new())]),
            ..AppConfig::default()
        };
        let result = AppState::from_config(config, Box::new(FixedClock(fixed_now())));
        assert_eq!(result.err(), Some(MenuError::EmptyGroup("empty".into())));

        let config = AppConfig {
            expanded_groups: Some(vec!["orders".into()]),
            ..AppConfig::default()
        };
        let result = AppState::from_config(config, Box::new(FixedClock(fixed_now())));
        assert_eq!(result.err(), Some(MenuError::UnknownGroup("orders".into())));
    }
}
