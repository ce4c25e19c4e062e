//! `addressbook` - A single-user contact directory
//!
//! This library provides the name to phone-number directory, its on-disk
//! format, and the interactive menu session that edits it.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod contact;
pub mod directory;
pub mod error;
pub mod logging;
pub mod session;
pub mod ui;

pub use config::Config;
pub use contact::Contact;
pub use directory::{Directory, DirectoryStats};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use session::Session;
pub use ui::{ConsoleUserInterface, UserInterface};
