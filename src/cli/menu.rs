//! Scenario menu and manual-configuration notice

use colored::Colorize;
use tokio::io::AsyncBufRead;

use super::prompt::Console;
use crate::common::Result;
use crate::testing::{all_scenarios, Scenario, ALL_UNIT_TESTS_CHOICE};

/// Exact answer that unlocks a scenario run
pub const NOTICE_CONFIRMATION: &str = "yes";

/// Menu lines, in display order
pub fn menu_lines() -> Vec<String> {
    let mut lines = vec!["Select a test to run:".to_string()];
    for scenario in all_scenarios() {
        lines.push(format!("  {}) {}", scenario.choice, scenario.name));
    }
    lines.push(format!("  {}) all unit tests", ALL_UNIT_TESTS_CHOICE));
    lines
}

/// Rows for `--list`
pub fn scenario_table() -> Vec<String> {
    let mut rows = vec![format!("{:<3} {:<27} {:<18} {}", "#", "SCENARIO", "FILTER", "FILE")];
    for s in all_scenarios() {
        rows.push(format!("{:<3} {:<27} {:<18} {}", s.choice, s.name, s.filter, s.file));
    }
    rows.push(format!("{:<3} {:<27} {:<18} {}", ALL_UNIT_TESTS_CHOICE, "all unit tests", "-", "-"));
    rows
}

/// Warn that the scenario's test file needs manual edits and require an
/// exact "yes" to continue
pub async fn notice_gate<R, W>(console: &mut Console<R, W>, scenario: &Scenario) -> Result<bool>
where
    R: AsyncBufRead + Unpin,
    W: std::io::Write,
{
    console.say("")?;
    console.say(format!(
        "The {} test reads its settings from {}.",
        scenario.name, scenario.file
    ))?;
    console.say(
        format!(
            "IMPORTANT: update the variables in {} before running this test.",
            scenario.file
        )
        .bold(),
    )?;
    console
        .require_literal(
            &format!("Type '{}' to continue:", NOTICE_CONFIRMATION),
            NOTICE_CONFIRMATION,
        )
        .await
}
