// HTTP routes
pub mod bulk;
pub mod emails;
pub mod health;
pub mod tracking;

pub use bulk::*;
pub use emails::*;
pub use health::*;
pub use tracking::*;
