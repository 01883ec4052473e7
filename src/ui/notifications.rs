use dashboard_shell::{
    components::{
        NotificationPanelBody, NotificationPanelModel, NotificationPanelProps, NotificationRow,
        NotificationTone,
    },
    layout::ShellTheme,
};

use crate::state::{
    notifications::{relative_age, NotificationListView},
    AppState, NotificationKind,
};

use super::layout_bridge;

fn tone(kind: NotificationKind) -> NotificationTone {
    match kind {
        NotificationKind::Info => NotificationTone::Info,
        NotificationKind::Success => NotificationTone::Success,
        NotificationKind::Warning => NotificationTone::Warning,
        NotificationKind::Error => NotificationTone::Error,
    }
}

impl NotificationPanelModel for AppState {
    fn theme(&self) -> ShellTheme {
        layout_bridge::shell_theme(&self.theme)
    }

    fn props(&self) -> NotificationPanelProps {
        let now = self.now();
        let body = match self.notifications.list_view() {
            NotificationListView::Empty => NotificationPanelBody::Empty {
                message: "No tienes notificaciones".to_string(),
            },
            NotificationListView::Items(items) => NotificationPanelBody::Items(
                items
                    .iter()
                    .map(|notification| NotificationRow {
                        id: notification.id.clone(),
                        tone: tone(notification.kind),
                        title: notification.title.clone(),
                        message: notification.message.clone(),
                        age: relative_age(notification.timestamp, now).to_string(),
                        unread: !notification.read,
                    })
                    .collect(),
            ),
        };

        NotificationPanelProps {
            open: self.shell.notifications_open(),
            title: "Notificaciones".to_string(),
            summary: format!("{} sin leer", self.notifications.unread_count()),
            mark_all_label: self
                .notifications
                .has_unread()
                .then(|| "Marcar todas como leídas".to_string()),
            body,
        }
    }

    fn on_close(&mut self) {
        self.shell.close_notifications();
    }

    fn on_mark_all_read(&mut self) {
        self.mark_all_notifications_read();
    }

    fn on_notification_clicked(&mut self, notification_id: &str) {
        self.mark_notification_read(notification_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{tests::test_state, NotificationFeed};

    fn rows(props: &NotificationPanelProps) -> &[NotificationRow] {
        match &props.body {
            NotificationPanelBody::Items(rows) => rows.as_slice(),
            NotificationPanelBody::Empty { .. } => &[],
        }
    }

    #[test]
    fn rows_carry_relative_ages() {
        let state = test_state();
        let props = NotificationPanelModel::props(&state);

        let ages: Vec<&str> = rows(&props).iter().map(|row| row.age.as_str()).collect();
        assert_eq!(ages, vec!["Hace 5m", "Hace 30m", "Hace 2h"]);
        assert_eq!(props.summary, "3 sin leer");
        assert!(props.mark_all_label.is_some());
    }

    #[test]
    fn clicking_a_row_marks_only_that_row() {
        let mut state = test_state();
        state.on_notification_clicked("2");

        let props = NotificationPanelModel::props(&state);
        let unread: Vec<bool> = rows(&props).iter().map(|row| row.unread).collect();
        assert_eq!(unread, vec![true, false, true]);
        assert_eq!(props.summary, "2 sin leer");
        assert_eq!(state.shell.unread_badge(), 2);
    }

    #[test]
    fn mark_all_hides_the_action() {
        let mut state = test_state();
        state.on_mark_all_read();

        let props = NotificationPanelModel::props(&state);
        assert!(props.mark_all_label.is_none());
        assert!(rows(&props).iter().all(|row| !row.unread));
        assert_eq!(state.shell.unread_badge(), 0);
    }

    #[test]
    fn empty_feed_renders_placeholder() {
        let mut state = test_state();
        state.notifications = NotificationFeed::new(Vec::new());

        let props = NotificationPanelModel::props(&state);
        assert_eq!(
            props.body,
            NotificationPanelBody::Empty {
                message: "No tienes notificaciones".to_string()
            }
        );
        assert!(props.mark_all_label.is_none());
    }

    #[test]
    fn closing_keeps_read_state() {
        let mut state = test_state();
        state.shell.toggle_notifications();
        NotificationPanelModel::on_close(&mut state);

        assert!(!state.shell.notifications_open());
        assert_eq!(state.notifications.unread_count(), 3);
    }
}
