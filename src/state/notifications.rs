use chrono::{DateTime, Duration, Utc};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    // Los datos de demostración no incluyen errores.
    #[allow(dead_code)]
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    pub fn new(
        id: impl Into<String>,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            message: message.into(),
            timestamp,
            read: false,
        }
    }
}

/// Recibe el nuevo número de notificaciones sin leer cada vez que cambia.
///
/// Es la única vía por la que el contador del topbar se actualiza.
pub trait UnreadObserver {
    fn unread_changed(&mut self, unread: usize);
}

/// Rama de render de la lista: marcador de vacío o filas.
#[derive(Debug, PartialEq, Eq)]
pub enum NotificationListView<'a> {
    Empty,
    Items(&'a [Notification]),
}

/// Lista de notificaciones en orden de llegada con su estado de lectura.
#[derive(Clone, Debug, Default)]
pub struct NotificationFeed {
    notifications: Vec<Notification>,
}

impl NotificationFeed {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    #[cfg(test)]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn has_unread(&self) -> bool {
        self.notifications.iter().any(|n| !n.read)
    }

    pub fn list_view(&self) -> NotificationListView<'_> {
        if self.notifications.is_empty() {
            NotificationListView::Empty
        } else {
            NotificationListView::Items(&self.notifications)
        }
    }

    /// Marca como leída la notificación `id`. Un `id` desconocido no hace nada.
    ///
    /// Devuelve `true` si el estado cambió; sólo entonces se avisa al observador.
    pub fn mark_read(&mut self, id: &str, observer: &mut dyn UnreadObserver) -> bool {
        let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) else {
            log::debug!("notificación '{}' no encontrada", id);
            return false;
        };
        if notification.read {
            return false;
        }
        notification.read = true;
        let unread = self.unread_count();
        log::info!("notificación '{}' leída; quedan {} sin leer", id, unread);
        observer.unread_changed(unread);
        true
    }

    /// Marca todas como leídas y siempre avisa al observador con cero.
    pub fn mark_all_read(&mut self, observer: &mut dyn UnreadObserver) -> usize {
        let mut changed = 0;
        for notification in self.notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            changed += 1;
        }
        log::info!("{} notificaciones marcadas como leídas", changed);
        observer.unread_changed(0);
        changed
    }
}

/// Antigüedad aproximada de un instante respecto a `now`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelativeAge {
    Now,
    Minutes(i64),
    Hours(i64),
    Days(i64),
}

impl fmt::Display for RelativeAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeAge::Now => f.write_str("Ahora"),
            RelativeAge::Minutes(m) => write!(f, "Hace {}m", m),
            RelativeAge::Hours(h) => write!(f, "Hace {}h", h),
            RelativeAge::Days(d) => write!(f, "Hace {}d", d),
        }
    }
}

/// Umbrales con división truncada: <60 s, <60 min, <24 h y días.
pub fn relative_age(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> RelativeAge {
    let seconds = (now - timestamp).num_seconds().max(0);
    if seconds < 60 {
        return RelativeAge::Now;
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return RelativeAge::Minutes(minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return RelativeAge::Hours(hours);
    }
    RelativeAge::Days(hours / 24)
}

/// Notificaciones de demostración relativas al instante de construcción.
pub fn seed_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![
        Notification::new(
            "1",
            NotificationKind::Success,
            "Tarea completada",
            "El reporte mensual ha sido generado exitosamente",
            now - Duration::minutes(5),
        ),
        Notification::new(
            "2",
            NotificationKind::Warning,
            "Acción requerida",
            "Tienes 3 documentos pendientes de aprobación",
            now - Duration::minutes(30),
        ),
        Notification::new(
            "3",
            NotificationKind::Info,
            "Actualización del sistema",
            "Nueva versión disponible. Actualiza para obtener las últimas mejoras",
            now - Duration::hours(2),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Default)]
    struct Badge {
        value: Option<usize>,
        calls: usize,
    }

    impl UnreadObserver for Badge {
        fn unread_changed(&mut self, unread: usize) {
            self.value = Some(unread);
            self.calls += 1;
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn ago(seconds: i64) -> DateTime<Utc> {
        now() - Duration::seconds(seconds)
    }

    #[test]
    fn relative_age_buckets() {
        assert_eq!(relative_age(ago(45), now()), RelativeAge::Now);
        assert_eq!(relative_age(ago(125), now()), RelativeAge::Minutes(2));
        assert_eq!(relative_age(ago(7265), now()), RelativeAge::Hours(2));
        assert_eq!(relative_age(ago(90_000), now()), RelativeAge::Days(1));
    }

    #[test]
    fn relative_age_boundaries_truncate() {
        assert_eq!(relative_age(ago(59), now()), RelativeAge::Now);
        assert_eq!(relative_age(ago(60), now()), RelativeAge::Minutes(1));
        assert_eq!(relative_age(ago(3599), now()), RelativeAge::Minutes(59));
        assert_eq!(relative_age(ago(3600), now()), RelativeAge::Hours(1));
        assert_eq!(relative_age(ago(86_399), now()), RelativeAge::Hours(23));
        assert_eq!(relative_age(ago(86_400), now()), RelativeAge::Days(1));
    }

    #[test]
    fn relative_age_clamps_future_timestamps() {
        assert_eq!(relative_age(ago(-300), now()), RelativeAge::Now);
    }

    #[test]
    fn relative_age_labels() {
        assert_eq!(RelativeAge::Now.to_string(), "Ahora");
        assert_eq!(RelativeAge::Minutes(5).to_string(), "Hace 5m");
        assert_eq!(RelativeAge::Hours(2).to_string(), "Hace 2h");
        assert_eq!(RelativeAge::Days(3).to_string(), "Hace 3d");
    }

    #[test]
    fn seed_is_unread_and_ordered() {
        let feed = NotificationFeed::new(seed_notifications(now()));
        let ids: Vec<&str> = feed.notifications().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(feed.unread_count(), 3);
        assert_eq!(
            relative_age(feed.notifications()[2].timestamp, now()),
            RelativeAge::Hours(2)
        );
    }

    #[test]
    fn mark_read_updates_one_record_and_notifies() {
        let mut feed = NotificationFeed::new(seed_notifications(now()));
        let mut badge = Badge::default();

        assert!(feed.mark_read("2", &mut badge));
        assert!(feed.notifications()[1].read);
        assert!(!feed.notifications()[0].read);
        assert_eq!(badge.value, Some(2));

        assert!(!feed.mark_read("2", &mut badge));
        assert_eq!(badge.calls, 1);
        assert_eq!(feed.unread_count(), 2);
    }

    #[test]
    fn mark_read_keeps_order() {
        let mut feed = NotificationFeed::new(seed_notifications(now()));
        let mut badge = Badge::default();
        feed.mark_read("1", &mut badge);
        let ids: Vec<&str> = feed.notifications().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn mark_read_unknown_id_is_a_no_op() {
        let mut feed = NotificationFeed::new(seed_notifications(now()));
        let before = feed.notifications().to_vec();
        let mut badge = Badge::default();

        assert!(!feed.mark_read("404", &mut badge));
        assert_eq!(feed.notifications(), before.as_slice());
        assert_eq!(badge.calls, 0);
    }

    #[test]
    fn mark_all_read_clears_everything_and_resets_badge() {
        let mut feed = NotificationFeed::new(seed_notifications(now()));
        let mut badge = Badge::default();
        feed.mark_read("3", &mut badge);

        assert_eq!(feed.mark_all_read(&mut badge), 2);
        assert!(feed.notifications().iter().all(|n| n.read));
        assert_eq!(feed.unread_count(), 0);
        assert_eq!(badge.value, Some(0));

        assert_eq!(feed.mark_all_read(&mut badge), 0);
        assert_eq!(badge.value, Some(0));
    }

    #[test]
    fn list_view_branches_are_exclusive() {
        let empty = NotificationFeed::default();
        assert_eq!(empty.list_view(), NotificationListView::Empty);
        assert!(!empty.has_unread());

        let feed = NotificationFeed::new(seed_notifications(now()));
        match feed.list_view() {
            NotificationListView::Items(items) => assert_eq!(items.len(), 3),
            NotificationListView::Empty => panic!("una lista con elementos no debe mostrarse vacía"),
        }
    }
}
