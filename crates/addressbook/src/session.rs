//! The interactive menu loop.
//!
//! A [`Session`] owns the directory and the path it persists to, and drives
//! one [`UserInterface`] until the user exits or input runs out.

use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::contact::Contact;
use crate::directory::Directory;
use crate::error::Result;
use crate::ui::{
    MenuChoice, UserInterface, CHOICE_PROMPT, INVALID_CHOICE_MESSAGE, NAME_PROMPT, PHONE_PROMPT,
    SEARCH_PROMPT,
};

/// State of one interactive session.
#[derive(Debug)]
pub struct Session {
    directory: Directory,
    path: PathBuf,
}

impl Session {
    /// Create a session over an already populated directory.
    pub fn new(directory: Directory, path: impl Into<PathBuf>) -> Self {
        Self {
            directory,
            path: path.into(),
        }
    }

    /// Load the contact file at `path` and start a session over it.
    ///
    /// A missing file starts the session with an empty directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or decoded.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut directory = Directory::new();
        directory.load(&path)?;

        info!(
            "Opened {} with {} contacts",
            path.display(),
            directory.len()
        );
        Ok(Self::new(directory, path))
    }

    /// The directory this session edits.
    #[must_use]
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Path the directory is saved to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run the menu loop until the user exits.
    ///
    /// Every added contact is saved before the menu is shown again. End of
    /// input ends the session the same way as choosing exit.
    ///
    /// # Errors
    ///
    /// Returns an error if saving fails or the interface cannot read or write.
    /// Contacts added before a failed save stay in memory only.
    pub fn run(&mut self, ui: &mut dyn UserInterface) -> Result<()> {
        loop {
            match self.step(ui) {
                Ok(ControlFlow::Continue(())) => {}
                Ok(ControlFlow::Break(())) => break,
                Err(err) if err.is_input_closed() => {
                    debug!("Input closed, ending session");
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        info!("Session ended with {} contacts", self.directory.len());
        Ok(())
    }

    fn step(&mut self, ui: &mut dyn UserInterface) -> Result<ControlFlow<()>> {
        ui.display_menu()?;
        let choice = ui.get_user_input(CHOICE_PROMPT)?;

        match MenuChoice::parse(&choice) {
            MenuChoice::Add => {
                let name = ui.get_user_input(NAME_PROMPT)?;
                let phone_number = ui.get_user_input(PHONE_PROMPT)?;
                self.directory.add(Contact::new(name, phone_number));
                self.directory.save(&self.path)?;
            }
            MenuChoice::Search => {
                let query = ui.get_user_input(SEARCH_PROMPT)?;
                let results = self.directory.search(&query);
                ui.display_contacts(&results)?;
            }
            MenuChoice::Exit => return Ok(ControlFlow::Break(())),
            MenuChoice::Invalid => {
                debug!("Unrecognized menu choice {:?}", choice);
                ui.display_message(INVALID_CHOICE_MESSAGE)?;
            }
        }

        Ok(ControlFlow::Continue(()))
    }
}
