//! Test runner invocation
//!
//! Builds the runner command line for a menu selection and delegates to the
//! runner process. Its output and exit status pass through untouched.

use std::process::ExitStatus;

use async_trait::async_trait;

use crate::common::config::RunnerConfig;
use crate::common::Result;
use crate::setup::installer::run_inherited;

/// Flag after which arguments go to the test harness rather than the runner
const HARNESS_SEPARATOR: &str = "--";
/// Show program output instead of capturing it
const NO_CAPTURE_FLAG: &str = "--nocapture";
/// Also run tests marked `#[ignore]`
const INCLUDE_IGNORED_FLAG: &str = "--include-ignored";

/// One test runner invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestInvocation {
    /// Test name filter; `None` runs the default set
    pub filter: Option<String>,
    pub show_output: bool,
    pub include_ignored: bool,
}

impl TestInvocation {
    /// Scenario run with output visible and ignored tests included
    pub fn flagged(filter: &str) -> Self {
        Self {
            filter: Some(filter.to_string()),
            show_output: true,
            include_ignored: true,
        }
    }

    /// Default test set with default flags
    pub fn plain() -> Self {
        Self {
            filter: None,
            show_output: false,
            include_ignored: false,
        }
    }

    /// Arguments passed to the runner program
    pub fn args(&self, runner: &RunnerConfig) -> Vec<String> {
        let mut args = runner.args.clone();
        if let Some(filter) = &self.filter {
            args.push(filter.clone());
        }

        let mut harness = Vec::new();
        if self.show_output {
            harness.push(NO_CAPTURE_FLAG.to_string());
        }
        if self.include_ignored {
            harness.push(INCLUDE_IGNORED_FLAG.to_string());
        }
        if !harness.is_empty() {
            args.push(HARNESS_SEPARATOR.to_string());
            args.extend(harness);
        }
        args
    }
}

/// Runs test invocations
#[async_trait]
pub trait TestRunner: Send + Sync {
    async fn run(&self, invocation: &TestInvocation) -> Result<ExitStatus>;
}

/// Runner that spawns the configured program with inherited stdio
pub struct CommandRunner {
    config: RunnerConfig,
}

impl CommandRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl TestRunner for CommandRunner {
    async fn run(&self, invocation: &TestInvocation) -> Result<ExitStatus> {
        let args = invocation.args(&self.config);
        tracing::info!(program = %self.config.program, ?args, "Starting test runner");
        run_inherited(&self.config.program, &args).await
    }
}
