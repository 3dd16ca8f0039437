//! Installing the bundled `.agent` folder into a project.
//!
//! - [`state`] answers "is it installed, and what is in it" without side effects.
//! - [`copy`] copies a tree under a [`CopyPolicy`].
//! - [`orchestrator`] combines the two into the init/update state machine.
//! - [`report`] turns orchestrator events into terminal output.

pub mod copy;
pub mod orchestrator;
pub mod report;
pub mod state;

pub use copy::{copy_tree, CopyPolicy, CopyReport};
pub use orchestrator::{InstallOptions, Installer, Outcome, Preview};
pub use report::{ConsoleReporter, Event, Reporter};
pub use state::{check_installed, describe_status, InstallStatus, InstallationState, Manifest};
