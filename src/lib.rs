pub mod classifier;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod preprocess;
pub mod responses;
pub mod server;

pub use error::{Error, Result};
