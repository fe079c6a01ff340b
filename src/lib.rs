pub mod client;
pub mod config;
pub mod error;
pub mod image;
pub mod llm;
pub mod prompt;
pub mod server;

pub use error::{Error, Result};
