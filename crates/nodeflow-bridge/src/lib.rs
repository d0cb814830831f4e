pub mod api;
pub mod fallback;
pub mod offline;

pub use api::{select_config, ApiBridge};
pub use fallback::offline_response;
pub use offline::OfflineBridge;
