pub mod backend;
pub mod config;
pub mod error;
pub mod messages;
pub mod relay;
pub mod server;
pub mod surface;

pub use error::{Error, Result};
