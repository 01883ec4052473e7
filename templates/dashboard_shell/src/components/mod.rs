pub mod card;
pub mod main_content;
pub mod notification_panel;
pub mod shortcuts;
pub mod sidebar;
pub mod topbar;

pub use card::{draw_card, draw_stat_card, CardProps, StatCardProps};
pub use main_content::{draw_main_content, MainContentModel, MainContentProps};
pub use notification_panel::{
    draw_notification_panel, NotificationPanelBody, NotificationPanelModel,
    NotificationPanelProps, NotificationRow, NotificationTone,
};
pub use shortcuts::{Shortcut, ShortcutManager, ShortcutModifiers};
pub use sidebar::{draw_sidebar, MenuNode, MenuNodeKind, SidebarModel, SidebarProps};
pub use topbar::{draw_topbar, TopbarModel, TopbarProps, UserMenuItem};
