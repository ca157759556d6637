//! Integration scenarios and test runner invocation

mod config;
mod runner;

pub use config::*;
pub use runner::{CommandRunner, TestInvocation, TestRunner};

#[cfg(test)]
pub(crate) mod mock;
