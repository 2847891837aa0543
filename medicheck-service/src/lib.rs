pub mod config;
pub mod pages;
pub mod service;

pub use config::ServiceConfig;
pub use service::{AppState, build_router, create_app};
