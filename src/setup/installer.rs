//! Toolchain installation
//!
//! Defines the Installer capability and the system implementation that
//! shells out to the package manager or the upstream install script.

use crate::common::{Error, Result};
use async_trait::async_trait;
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

/// Installation method for the toolchain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallMethod {
    /// Fetch an install script over HTTPS and run it with `sh`
    RemoteScript { url: String },
    /// Use system package manager
    PackageManager {
        manager: PackageManager,
        package: String,
    },
}

impl fmt::Display for InstallMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallMethod::RemoteScript { url } => write!(f, "install script from {}", url),
            InstallMethod::PackageManager { manager, package } => {
                write!(f, "{}", manager.install_command(package).join(" "))
            }
        }
    }
}

/// Package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Pacman,
}

impl PackageManager {
    /// Get the non-interactive install command line for a package
    pub fn install_command(&self, package: &str) -> Vec<String> {
        match self {
            PackageManager::Pacman => ["sudo", "pacman", "-S", "--noconfirm", package]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Capability to install the toolchain
///
/// The returned status is informational; callers do not verify that the
/// toolchain became available.
#[async_trait]
pub trait Installer: Send + Sync {
    async fn install(&self, method: &InstallMethod) -> Result<ExitStatus>;
}

/// Installer that performs real network and package manager operations
pub struct SystemInstaller;

#[async_trait]
impl Installer for SystemInstaller {
    async fn install(&self, method: &InstallMethod) -> Result<ExitStatus> {
        match method {
            InstallMethod::RemoteScript { url } => {
                let script = tempfile::Builder::new()
                    .prefix("swaptest-install-")
                    .suffix(".sh")
                    .tempfile()?;
                download_script(url, script.path()).await?;
                let script_path = script.path().display().to_string();
                run_inherited("sh", &[script_path]).await
            }
            InstallMethod::PackageManager { manager, package } => {
                let argv = manager.install_command(package);
                run_inherited(&argv[0], &argv[1..]).await
            }
        }
    }
}

/// Download an install script with progress reporting
///
/// The client refuses plain HTTP and anything below TLS 1.2.
pub async fn download_script(url: &str, dest: &Path) -> Result<()> {
    let client = reqwest::Client::builder()
        .https_only(true)
        .min_tls_version(reqwest::tls::Version::TLS_1_2)
        .user_agent("swaptest")
        .build()
        .map_err(|e| Error::script_download(url, e))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::script_download(url, e))?;

    if !response.status().is_success() {
        return Err(Error::script_download(
            url,
            format!("server returned status {}", response.status()),
        ));
    }

    let total_size = response.content_length().unwrap_or(0);

    let pb = download_progress(total_size);

    let mut file = std::fs::File::create(dest)?;

    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::script_download(url, e))?;
        std::io::Write::write_all(&mut file, &chunk)?;
        downloaded += chunk.len() as u64;
        pb.set_position(downloaded);
    }

    pb.finish_and_clear();

    tracing::debug!(url, bytes = downloaded, dest = %dest.display(), "Install script downloaded");
    Ok(())
}

/// Progress bar for a download of known size, spinner otherwise
///
/// Draws to stderr so the interactive transcript on stdout stays clean.
fn download_progress(total_size: u64) -> ProgressBar {
    if total_size > 0 {
        let pb = ProgressBar::new(total_size);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                .map(|style| style.progress_chars("=> "))
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner} Downloading... {bytes}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb
    }
}

/// Run a command with inherited stdio and wait for it to exit
pub async fn run_inherited(program: &str, args: &[String]) -> Result<ExitStatus> {
    let command_line = std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ");
    tracing::debug!(command = %command_line, "Running command");

    let status = tokio::process::Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| Error::command_spawn(&command_line, &e))?;

    tracing::debug!(command = %command_line, ?status, "Command exited");
    Ok(status)
}
