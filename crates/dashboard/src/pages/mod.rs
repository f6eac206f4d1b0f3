//! Dashboard screens.

pub mod apikeys;
pub mod app_create;
pub mod app_detail;
pub mod apps;
pub mod auth;
pub mod google_callback;
pub mod home;
pub mod models;
pub mod not_found;
pub mod providers;
pub mod settings;

pub use apikeys::ApiKeysPage;
pub use app_create::AppCreatePage;
pub use app_detail::AppDetailPage;
pub use apps::AppsPage;
pub use auth::AuthPage;
pub use google_callback::GoogleCallbackPage;
pub use home::HomePage;
pub use models::ModelsPage;
pub use not_found::NotFoundPage;
pub use providers::ProvidersPage;
pub use settings::SettingsPage;
