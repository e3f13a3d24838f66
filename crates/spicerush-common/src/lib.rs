pub mod errors;
pub mod types;

pub use errors::{ConfigError, HostError, SpiceRushError};
pub use types::Orientation;

pub type Result<T> = std::result::Result<T, SpiceRushError>;
