//! Host abstraction layer
//!
//! Commands never touch the terminal, the process table or file-manager
//! settings directly. They go through the [`Host`] trait, which an
//! embedding file manager implements over its own command executor, UI
//! loop and settings object.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Commands                           │
//! │   (pick, pick_dir, grep)                │
//! └────────────────┬────────────────────────┘
//!                  │ Uses trait
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      Host                               │
//! │  (execute, run_foreground, settings,    │
//! │   navigation, notify)                   │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ TerminalHost  │  │ File manager      │
//! │ (fzjump bin)  │  │ bindings          │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Implementing a Host
//!
//! ```no_run
//! use std::path::Path;
//! use fzjump::ui::{ExecutionResult, Host, MessageLevel, Result, SettingValue};
//!
//! struct MyHost;
//!
//! impl Host for MyHost {
//!     fn execute(&self, _cmd: &str) -> Result<ExecutionResult> {
//!         Ok(ExecutionResult::new(1, ""))
//!     }
//!     fn run_foreground(&self, _program: &str, _args: &[String]) -> Result<()> {
//!         Ok(())
//!     }
//!     fn get_setting(&self, _name: &str) -> Option<SettingValue> {
//!         None
//!     }
//!     fn set_setting(&self, _name: &str, _value: SettingValue) -> Result<()> {
//!         Ok(())
//!     }
//!     fn change_directory(&self, _path: &Path) -> Result<()> {
//!         Ok(())
//!     }
//!     fn select_file(&self, _path: &Path) -> Result<()> {
//!         Ok(())
//!     }
//!     fn request_redraw(&self) {}
//!     fn notify(&self, message: &str, _level: MessageLevel) {
//!         eprintln!("{message}");
//!     }
//! }
//! ```

mod error;
mod traits;
mod types;

pub mod output;
pub mod terminal;

#[cfg(test)]
pub mod mock;

pub use error::{HostError, Result};
pub use output::{MessageLevel, OutputWriter, StderrWriter};
pub use terminal::TerminalHost;
pub use traits::Host;
pub use types::{ExecutionResult, SettingValue, settings};
