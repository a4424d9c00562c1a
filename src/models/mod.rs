pub mod route;
pub mod story;
pub mod auth;
pub mod push;

pub use route::{Route, View};
pub use story::{Story, StoryFilter, StoriesResponse};
pub use auth::{LoginRequest, LoginResponse, LoginResult, RegisterRequest, ApiMessage};
pub use push::PushSubscriptionJson;
