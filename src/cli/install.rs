//! Install Action Module
//!
//! The deferred operation attached to a catalog entry's "Install" option.
//! Each action is a small struct holding its own snapshot of the entry's
//! name and link, captured at graph-build time, so actions built in a loop
//! can never alias each other's data.

use std::process::Command;

use log::debug;

use crate::interaction::{Action, ActionOutcome};

/// Installs one catalog entry with cargo when invoked.
pub struct InstallAction {
    name: String,
    link: String,
}

impl InstallAction {
    pub fn new(name: &str, link: &str) -> Self {
        Self {
            name: name.to_string(),
            link: link.to_string(),
        }
    }

    /// The cargo arguments for this entry. Entries published on crates.io
    /// install by name; everything else is treated as a git repository.
    fn install_args(&self) -> Vec<String> {
        if self.link.contains("crates.io") {
            vec!["install".to_string(), self.name.clone()]
        } else {
            vec![
                "install".to_string(),
                "--git".to_string(),
                self.link.clone(),
            ]
        }
    }

    /// Human-readable form of the command, used as the option description.
    pub fn describe(&self) -> String {
        format!("cargo {}", self.install_args().join(" "))
    }
}

impl Action for InstallAction {
    fn invoke(&self) -> ActionOutcome {
        let args = self.install_args();
        debug!("running cargo {}", args.join(" "));

        match Command::new("cargo").args(&args).output() {
            Ok(output) if output.status.success() => {
                ActionOutcome::success("Package installed! Have fun :)")
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr).to_string();
                ActionOutcome::failure("Error installing the selected package.", stderr)
            }
            Err(e) => ActionOutcome::failure(
                "Could not run cargo. Is it on your PATH?",
                e.to_string(),
            ),
        }
    }
}
