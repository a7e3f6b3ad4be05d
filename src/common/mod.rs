pub mod config;
pub mod errors;
mod macros;

pub use config::*;
pub use errors::*;
