//! Shared layout and UI components.

pub mod chat_panel;
pub mod layout;
pub mod sidebar;
pub mod spinner;

pub use chat_panel::ChatPanel;
pub use layout::DashboardLayout;
pub use sidebar::Sidebar;
pub use spinner::Spinner;
