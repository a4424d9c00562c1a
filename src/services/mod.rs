pub mod api_client;
pub mod auth_service;
pub mod story_service;
pub mod view_loader;
pub mod notification_service;

pub use api_client::ApiClient;
pub use view_loader::fetch_view;
