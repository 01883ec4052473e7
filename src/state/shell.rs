use super::notifications::UnreadObserver;

/// Estado propio del marco de la aplicación: paneles abiertos y contador del
/// topbar. Los dos paneles son independientes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShellVisibility {
    menu_open: bool,
    notifications_open: bool,
    unread_badge: usize,
}

impl ShellVisibility {
    pub fn new(initial_unread: usize) -> Self {
        Self {
            unread_badge: initial_unread,
            ..Default::default()
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn notifications_open(&self) -> bool {
        self.notifications_open
    }

    pub fn unread_badge(&self) -> usize {
        self.unread_badge
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        log::debug!("menú lateral abierto: {}", self.menu_open);
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn toggle_notifications(&mut self) {
        self.notifications_open = !self.notifications_open;
        log::debug!("panel de notificaciones abierto: {}", self.notifications_open);
    }

    pub fn close_notifications(&mut self) {
        self.notifications_open = false;
    }

    /// Texto del contador; oculto en cero y limitado a "9+".
    pub fn badge_label(&self) -> Option<String> {
        match self.unread_badge() {
            0 => None,
            n if n > 9 => Some("9+".to_string()),
            n => Some(n.to_string()),
        }
    }
}

impl UnreadObserver for ShellVisibility {
    fn unread_changed(&mut self, unread: usize) {
        self.unread_badge = unread;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_toggle_independently() {
        let mut shell = ShellVisibility::new(3);

        shell.toggle_menu();
        assert!(shell.menu_open());
        assert!(!shell.notifications_open());

        shell.toggle_notifications();
        assert!(shell.menu_open());
        assert!(shell.notifications_open());

        shell.close_menu();
        assert!(!shell.menu_open());
        assert!(shell.notifications_open());

        shell.close_notifications();
        assert!(!shell.notifications_open());
    }

    #[test]
    fn opening_panels_keeps_badge() {
        let mut shell = ShellVisibility::new(3);
        shell.toggle_notifications();
        shell.toggle_menu();
        shell.close_notifications();
        assert_eq!(shell.unread_badge(), 3);
    }

    #[test]
    fn badge_label_caps_at_nine() {
        let mut shell = ShellVisibility::new(0);
        assert_eq!(shell.badge_label(), None);

        shell.unread_changed(3);
        assert_eq!(shell.badge_label().as_deref(), Some("3"));

        shell.unread_changed(9);
        assert_eq!(shell.badge_label().as_deref(), Some("9"));

        shell.unread_changed(12);
        assert_eq!(shell.badge_label().as_deref(), Some("9+"));
    }
}
