//! Presentation layer for the interactive session.
//!
//! The session only talks to a [`UserInterface`], so any medium (a terminal,
//! a scripted test double, a GUI) can drive the same directory logic.

mod console;

pub use console::ConsoleUserInterface;

use crate::error::Result;

/// Prompt shown before reading a menu choice.
pub const CHOICE_PROMPT: &str = "Select the option: ";

/// Prompt for a new contact's name.
pub const NAME_PROMPT: &str = "Enter the name: ";

/// Prompt for a new contact's phone number.
pub const PHONE_PROMPT: &str = "Enter the phone number: ";

/// Prompt for a search query.
pub const SEARCH_PROMPT: &str = "Enter the 'name/phone': ";

/// Message shown for an unrecognized menu choice.
pub const INVALID_CHOICE_MESSAGE: &str = "Oops! Please choose the correct option.";

/// Message shown when a search returns nothing.
pub const NO_MATCHES_MESSAGE: &str = "Sorry! No matches found.";

/// Capabilities a presentation medium must provide.
pub trait UserInterface {
    /// Show the menu of available options.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn display_menu(&mut self) -> Result<()>;

    /// Show `prompt` and read one line of input, without its line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InputClosed`] at end of input, or an I/O error.
    fn get_user_input(&mut self, prompt: &str) -> Result<String>;

    /// Show search results, or a "no matches" message when there are none.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn display_contacts(&mut self, contacts: &[(String, String)]) -> Result<()>;

    /// Show a status message.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn display_message(&mut self, message: &str) -> Result<()>;
}

/// A parsed menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add a contact.
    Add,
    /// Search contacts.
    Search,
    /// Leave the session.
    Exit,
    /// Anything else.
    Invalid,
}

impl MenuChoice {
    /// Interpret a line typed at the menu prompt.
    ///
    /// Matching is exact except for `exit`, which ignores case.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input {
            "1" => Self::Add,
            "2" => Self::Search,
            "3" => Self::Exit,
            other if other.to_lowercase() == "exit" => Self::Exit,
            _ => Self::Invalid,
        }
    }
}
