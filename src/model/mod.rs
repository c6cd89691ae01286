pub mod config;
pub mod modal;
pub mod selection;
pub mod task;

pub use config::*;
pub use modal::*;
pub use selection::*;
pub use task::*;
