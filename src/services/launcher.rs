/// Browser and application launching
///
/// Both spawn a child process and return as soon as it starts.

use crate::error::{AssistantError, Result};
use crate::services::{BrowserLauncher, ProcessLauncher};
use log::debug;
use std::process::{Child, Command};

/// Opens URLs with the platform's default handler
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

#[cfg(target_os = "macos")]
fn opener(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn opener(url: &str) -> Command {
    let mut cmd = Command::new("cmd");
    // The empty string is the window title `start` expects first
    cmd.args(["/C", "start", "", url]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

impl BrowserLauncher for SystemBrowser {
    fn open_url(&self, url: &str) -> Result<()> {
        debug!("Opening {}", url);
        let child = opener(url)
            .spawn()
            .map_err(|e| AssistantError::Launch(e.to_string()))?;
        reap(child);
        Ok(())
    }
}

/// Starts programs found on PATH
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
    fn launch(&self, application: &str) -> Result<()> {
        debug!("Launching {}", application);
        let child = Command::new(application)
            .spawn()
            .map_err(|e| AssistantError::Launch(e.to_string()))?;
        reap(child);
        Ok(())
    }
}

// Wait on the child off-thread so it doesn't linger as a zombie
fn reap(mut child: Child) {
    std::thread::spawn(move || {
        let _ = child.wait();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_missing_program_fails() {
        let result = SystemLauncher.launch("definitely-not-a-real-program-4821");
        match result {
            Err(AssistantError::Launch(_)) => {}
            other => panic!("Expected Launch error, got {:?}", other),
        }
    }
}
