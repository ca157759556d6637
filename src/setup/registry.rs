//! Platform to install method table
//!
//! Debian-family and macOS hosts run the upstream install script; Arch-family
//! hosts use pacman. Everything else is unsupported.

use super::detector::Platform;
use super::installer::{InstallMethod, PackageManager};
use crate::common::config::ToolchainConfig;
use crate::common::{Error, Result};

/// Pick the install method for a platform
pub fn install_method_for(platform: &Platform, toolchain: &ToolchainConfig) -> Result<InstallMethod> {
    match platform {
        Platform::Debian | Platform::Ubuntu | Platform::Darwin => Ok(InstallMethod::RemoteScript {
            url: toolchain.script_url.clone(),
        }),
        Platform::Arch | Platform::Manjaro => Ok(InstallMethod::PackageManager {
            manager: PackageManager::Pacman,
            package: toolchain.package.clone(),
        }),
        Platform::Other(_) | Platform::Unknown => {
            Err(Error::UnsupportedPlatform(platform.to_string()))
        }
    }
}
