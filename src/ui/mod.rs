pub mod app;
pub mod avatar;
pub mod chat;
pub mod header;

pub use app::HealthConnectApp;
