pub mod commands;
pub mod error;
pub mod logging;
pub mod options;
pub mod registry;

pub use error::{HostError, HostResult};
pub use logging::DebugLogger;
pub use options::HostOptions;
pub use registry::{CommandHandler, CommandRegistry};
