pub mod config;
pub mod error;
pub mod event;
pub mod traits;
pub mod types;

pub use config::ApiConfig;
pub use error::{NodeflowError, Result};
pub use event::EventBus;
pub use types::*;
