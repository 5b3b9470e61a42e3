// Trackmail - API Core
//
// Sends and schedules transactional email through Plunk and tracks opens
// with an embedded pixel. State is in-memory and lives for the process.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
