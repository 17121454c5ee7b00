pub mod config;
pub mod error;
pub mod extract;
pub mod server;
pub mod veo;

pub use error::{Error, Result};
