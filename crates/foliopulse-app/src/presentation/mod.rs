pub mod bootstrap;
pub mod error;

pub use error::CommandError;
