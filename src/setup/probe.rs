//! Toolchain presence check

use std::path::PathBuf;

/// Result of looking up the toolchain command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolchainStatus {
    /// Resolvable on PATH at the given location
    Present { path: PathBuf },
    /// Not resolvable; installation is offered
    Absent,
}

impl ToolchainStatus {
    pub fn is_present(&self) -> bool {
        matches!(self, ToolchainStatus::Present { .. })
    }
}

/// Looks up whether a command is reachable
pub trait ToolchainProbe {
    fn probe(&self, command: &str) -> ToolchainStatus;
}

/// Probe that searches the current PATH
pub struct PathProbe;

impl ToolchainProbe for PathProbe {
    fn probe(&self, command: &str) -> ToolchainStatus {
        match which::which(command) {
            Ok(path) => {
                tracing::debug!(command, path = %path.display(), "Toolchain found");
                ToolchainStatus::Present { path }
            }
            Err(e) => {
                tracing::debug!(command, error = %e, "Toolchain not found");
                ToolchainStatus::Absent
            }
        }
    }
}

/// Human-readable status line for a probe result
pub fn status_line(command: &str, status: &ToolchainStatus) -> String {
    match status {
        ToolchainStatus::Present { path } => {
            format!("{} is installed ({})", command, path.display())
        }
        ToolchainStatus::Absent => format!("{} is not installed", command),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_command_is_absent() {
        let status = PathProbe.probe("swaptest-no-such-toolchain-4f1c");
        assert_eq!(status, ToolchainStatus::Absent);
        assert!(!status.is_present());
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_is_present() {
        assert!(PathProbe.probe("sh").is_present());
    }

    #[test]
    fn test_status_lines() {
        let present = ToolchainStatus::Present {
            path: PathBuf::from("/usr/bin/cargo"),
        };
        assert_eq!(
            status_line("cargo", &present),
            "cargo is installed (/usr/bin/cargo)"
        );
        assert_eq!(
            status_line("cargo", &ToolchainStatus::Absent),
            "cargo is not installed"
        );
    }
}
