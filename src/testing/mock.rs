//! Recording stand-ins for the probe, installer and test runner

use std::path::PathBuf;
use std::process::ExitStatus;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{TestInvocation, TestRunner};
use crate::common::Result;
use crate::setup::installer::{InstallMethod, Installer};
use crate::setup::probe::{ToolchainProbe, ToolchainStatus};

/// Build an exit status carrying `code`
pub fn exit_status(code: i32) -> ExitStatus {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        ExitStatus::from_raw(code << 8)
    }
    #[cfg(windows)]
    {
        use std::os::windows::process::ExitStatusExt;
        ExitStatus::from_raw(code as u32)
    }
}

pub struct StaticProbe(ToolchainStatus);

impl StaticProbe {
    pub fn present() -> Self {
        Self(ToolchainStatus::Present {
            path: PathBuf::from("/usr/bin/cargo"),
        })
    }

    pub fn absent() -> Self {
        Self(ToolchainStatus::Absent)
    }
}

impl ToolchainProbe for StaticProbe {
    fn probe(&self, _command: &str) -> ToolchainStatus {
        self.0.clone()
    }
}

pub struct MockInstaller {
    status: ExitStatus,
    calls: Mutex<Vec<InstallMethod>>,
}

impl MockInstaller {
    pub fn new(status: ExitStatus) -> Self {
        Self {
            status,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<InstallMethod> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Installer for MockInstaller {
    async fn install(&self, method: &InstallMethod) -> Result<ExitStatus> {
        self.calls.lock().unwrap().push(method.clone());
        Ok(self.status)
    }
}

pub struct MockRunner {
    status: ExitStatus,
    calls: Mutex<Vec<TestInvocation>>,
}

impl MockRunner {
    pub fn new(status: ExitStatus) -> Self {
        Self {
            status,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<TestInvocation> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TestRunner for MockRunner {
    async fn run(&self, invocation: &TestInvocation) -> Result<ExitStatus> {
        self.calls.lock().unwrap().push(invocation.clone());
        Ok(self.status)
    }
}
