//! Common utilities shared by the setup, menu and test runner layers

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use error::{Error, Result};
