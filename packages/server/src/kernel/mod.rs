//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod jobs;
pub mod test_dependencies;
pub mod traits;

pub use deps::{PlunkAdapter, ServerDeps};
pub use test_dependencies::{MockEmailProvider, TestDependencies};
pub use traits::*;
