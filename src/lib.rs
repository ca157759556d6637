//! Swap test launcher
//!
//! Bootstraps the build toolchain when it is missing and runs the swap
//! integration scenarios or the unit test suite on request.

pub mod cli;
pub mod common;
pub mod setup;
pub mod testing;

pub use cli::{Cancellation, Launcher, Outcome};
pub use common::{Error, Result};
