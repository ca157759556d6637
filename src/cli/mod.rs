//! Interactive session
//!
//! Drives the whole flow: toolchain check, optional install, scenario menu,
//! notice gate and test run. Declined prompts come back as an [`Outcome`]
//! so the caller decides how the process exits.

pub mod menu;
pub mod prompt;

use tokio::io::AsyncBufRead;

use crate::common::config::Config;
use crate::common::Result;
use crate::setup::detector::Platform;
use crate::setup::installer::Installer;
use crate::setup::probe::ToolchainProbe;
use crate::setup::{self, SetupOutcome};
use crate::testing::{MenuChoice, TestInvocation, TestRunner};
use prompt::Console;

/// Why a session stopped before running tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cancellation {
    /// Toolchain installation was declined
    InstallDeclined,
    /// The manual-configuration notice was not confirmed
    NoticeDeclined { scenario: &'static str },
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The test runner ran and exited with this code
    TestsRan { exit_code: i32 },
    /// Menu answer was not a valid choice; nothing ran
    NoTestRun,
    Cancelled(Cancellation),
}

impl Outcome {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::TestsRan { exit_code } => *exit_code,
            Outcome::NoTestRun => 0,
            Outcome::Cancelled(_) => 1,
        }
    }
}

/// External collaborators of a session
pub struct Launcher<'a> {
    pub config: &'a Config,
    pub probe: &'a dyn ToolchainProbe,
    pub installer: &'a dyn Installer,
    pub runner: &'a dyn TestRunner,
}

impl Launcher<'_> {
    /// Run one interactive session
    pub async fn run<R, W>(&self, console: &mut Console<R, W>, platform: &Platform) -> Result<Outcome>
    where
        R: AsyncBufRead + Unpin,
        W: std::io::Write,
    {
        let setup = setup::ensure_toolchain(
            console,
            platform,
            &self.config.toolchain,
            self.probe,
            self.installer,
        )
        .await?;
        if setup == SetupOutcome::Declined {
            return Ok(Outcome::Cancelled(Cancellation::InstallDeclined));
        }

        console.say("")?;
        for line in menu::menu_lines() {
            console.say(line)?;
        }
        console.say("Enter your choice (1-5):")?;

        let answer = console.read_line().await?.unwrap_or_default();
        let invocation = match MenuChoice::parse(&answer) {
            Some(MenuChoice::Scenario(scenario)) => {
                if !menu::notice_gate(console, scenario).await? {
                    console.say("Exiting...")?;
                    return Ok(Outcome::Cancelled(Cancellation::NoticeDeclined {
                        scenario: scenario.name,
                    }));
                }
                console.say(format!("Running {} test ({})...", scenario.name, scenario.filter))?;
                TestInvocation::flagged(scenario.filter)
            }
            Some(MenuChoice::AllUnitTests) => {
                console.say("Running all unit tests...")?;
                TestInvocation::plain()
            }
            None => {
                tracing::debug!(answer = %answer, "Ignoring invalid menu choice");
                console.say(format!("Invalid choice: '{}'. No tests were run.", answer))?;
                return Ok(Outcome::NoTestRun);
            }
        };

        let status = self.runner.run(&invocation).await?;
        tracing::debug!(?status, "Test runner finished");
        Ok(Outcome::TestsRan {
            exit_code: status.code().unwrap_or(1),
        })
    }
}
