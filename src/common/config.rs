//! Configuration file handling

use serde::Deserialize;
use std::path::Path;

use super::paths::config_path;
use super::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    /// Toolchain detection and installation settings
    #[serde(default)]
    pub toolchain: ToolchainConfig,

    /// Test runner settings
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// Toolchain the test suite depends on
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ToolchainConfig {
    /// Command that must be resolvable on PATH
    #[serde(default = "default_command")]
    pub command: String,

    /// Package name used with the system package manager
    #[serde(default = "default_package")]
    pub package: String,

    /// Remote install script, fetched over HTTPS only
    #[serde(default = "default_script_url")]
    pub script_url: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            package: default_package(),
            script_url: default_script_url(),
        }
    }
}

fn default_command() -> String {
    "cargo".to_string()
}
fn default_package() -> String {
    "rust".to_string()
}
fn default_script_url() -> String {
    "https://sh.rustup.rs".to_string()
}

/// Test runner invocation
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RunnerConfig {
    /// Test runner executable
    #[serde(default = "default_program")]
    pub program: String,

    /// Arguments placed before the scenario filter
    #[serde(default = "default_runner_args")]
    pub args: Vec<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_runner_args(),
        }
    }
}

fn default_program() -> String {
    "cargo".to_string()
}
fn default_runner_args() -> Vec<String> {
    vec!["test".to_string()]
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Ok(Self::default())
    }

    /// Load configuration from an explicit path, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| super::Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| super::Error::ConfigParse(e.to_string()))
    }
}
