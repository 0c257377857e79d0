pub mod buttons;
pub mod cards;
pub mod layout;
pub mod modal;
pub mod sidebar;

pub use buttons::Button;
pub use cards::{Card, InfoItem};
pub use layout::Layout;
pub use modal::{use_notifier, use_notifier_provider, NotificationModal, Notifier};
pub use sidebar::Sidebar;
