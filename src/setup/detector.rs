//! Host platform detection
//!
//! Classifies the host from the shell's `OSTYPE` signal (falling back to the
//! compile-time target OS when the shell did not export it) and, on Linux,
//! the `ID` field of `/etc/os-release`.

use std::fmt;
use std::path::Path;

use crate::common::paths::OS_RELEASE_PATH;

/// Detected host platform
///
/// Linux distributions carry their os-release `ID` verbatim; only the exact
/// lowercase IDs of supported distributions map to named variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    Debian,
    Ubuntu,
    Arch,
    Manjaro,
    Darwin,
    /// Linux distribution not in the supported set
    Other(String),
    Unknown,
}

impl Platform {
    /// Detect the current host platform
    pub fn detect() -> Self {
        let ostype = std::env::var("OSTYPE").ok();
        let family = HostFamily::from_signal(ostype.as_deref().unwrap_or(std::env::consts::OS));
        let platform = match family {
            Some(HostFamily::Linux) => read_os_release_id(Path::new(OS_RELEASE_PATH))
                .map(|id| Platform::from_id(&id))
                .unwrap_or(Platform::Unknown),
            Some(HostFamily::Darwin) => Platform::Darwin,
            None => Platform::Unknown,
        };
        tracing::debug!(?ostype, %platform, "Detected host platform");
        platform
    }

    /// Map an os-release `ID` to a platform
    pub fn from_id(id: &str) -> Self {
        match id {
            "debian" => Platform::Debian,
            "ubuntu" => Platform::Ubuntu,
            "arch" => Platform::Arch,
            "manjaro" => Platform::Manjaro,
            other => Platform::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Debian => write!(f, "debian"),
            Platform::Ubuntu => write!(f, "ubuntu"),
            Platform::Arch => write!(f, "arch"),
            Platform::Manjaro => write!(f, "manjaro"),
            Platform::Darwin => write!(f, "darwin"),
            Platform::Other(id) => write!(f, "{}", id),
            Platform::Unknown => write!(f, "unknown"),
        }
    }
}

/// Operating system family derived from the platform-type signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostFamily {
    Linux,
    Darwin,
}

impl HostFamily {
    /// Classify an `OSTYPE`-style value (`linux-gnu`, `darwin23`) or a Rust
    /// target OS name (`linux`, `macos`)
    pub fn from_signal(signal: &str) -> Option<Self> {
        if signal.starts_with("linux") {
            Some(HostFamily::Linux)
        } else if signal.starts_with("darwin") || signal == "macos" {
            Some(HostFamily::Darwin)
        } else {
            None
        }
    }
}

/// Read the `ID` field of an os-release file
pub fn read_os_release_id(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_os_release_id(&content),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Could not read os-release");
            None
        }
    }
}

/// Extract the `ID` field from os-release content, stripping optional quotes
pub fn parse_os_release_id(content: &str) -> Option<String> {
    content
        .lines()
        .filter_map(|line| line.trim().strip_prefix("ID="))
        .map(|value| value.trim().trim_matches(['"', '\'']).to_string())
        .find(|id| !id.is_empty())
}
