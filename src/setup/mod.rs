//! Toolchain detection and installation
//!
//! Checks whether the toolchain is reachable and, when it is not, asks for
//! consent and installs it with the method the host platform supports.

pub mod detector;
pub mod installer;
pub mod probe;
pub mod registry;

use tokio::io::AsyncBufRead;

use crate::cli::prompt::Console;
use crate::common::config::ToolchainConfig;
use crate::common::Result;
use detector::Platform;
use installer::Installer;
use probe::ToolchainProbe;

/// State of the toolchain after setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    /// Already present; no prompt was shown
    AlreadyInstalled,
    /// Installation was attempted with the user's consent
    InstallAttempted,
    /// The user declined installation
    Declined,
}

/// Make sure the toolchain is present, installing it with consent
///
/// Installer failures are logged and do not stop the session; only an
/// unsupported platform is an error.
pub async fn ensure_toolchain<R, W>(
    console: &mut Console<R, W>,
    platform: &Platform,
    toolchain: &ToolchainConfig,
    probe: &dyn ToolchainProbe,
    installer: &dyn Installer,
) -> Result<SetupOutcome>
where
    R: AsyncBufRead + Unpin,
    W: std::io::Write,
{
    let status = probe.probe(&toolchain.command);
    console.say(probe::status_line(&toolchain.command, &status))?;
    if status.is_present() {
        return Ok(SetupOutcome::AlreadyInstalled);
    }

    let question = format!(
        "{} is required to run the tests. Do you want to install it? (y/n)",
        toolchain.command
    );
    if !console.confirm(&question).await? {
        console.say("Installation cancelled.")?;
        return Ok(SetupOutcome::Declined);
    }

    let method = registry::install_method_for(platform, toolchain)?;
    tracing::info!(%platform, %method, "Installing toolchain");
    console.say(format!("Installing {} using {}...", toolchain.command, method))?;

    match installer.install(&method).await {
        Ok(status) if status.success() => {}
        Ok(status) => tracing::warn!(%method, ?status, "Toolchain installer exited unsuccessfully"),
        Err(e) => tracing::warn!(%method, error = %e, "Toolchain installation failed"),
    }

    Ok(SetupOutcome::InstallAttempted)
}
