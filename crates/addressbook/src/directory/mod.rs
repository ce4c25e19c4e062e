//! The in-memory contact directory and its file persistence.
//!
//! A [`Directory`] maps each contact name to one phone number. It is read
//! from and written to a single flat file in the format described in
//! [`codec`]; every load and save opens, fully reads or writes, and closes
//! that file.

pub mod codec;

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::contact::Contact;
use crate::error::{Error, Result};

/// Name to phone-number mapping.
///
/// Names are unique; adding an existing name replaces its phone number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    entries: BTreeMap<String, String>,
}

impl Directory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a contact, overwriting any existing phone number for its name.
    ///
    /// This only changes memory; call [`Directory::save`] to persist.
    pub fn add(&mut self, contact: Contact) {
        let (name, phone_number) = contact.into_pair();
        if let Some(previous) = self.entries.insert(name, phone_number) {
            debug!("Replaced phone number {:?}", previous);
        }
    }

    /// Look up the phone number stored for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Number of contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory holds no contacts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, phone_number)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, phone)| (name.as_str(), phone.as_str()))
    }

    /// Write the whole directory to `path`, replacing any existing file.
    ///
    /// Missing parent directories are created. The write is not atomic.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let bytes = codec::encode(&self.entries)?;
        std::fs::write(path, &bytes).map_err(|source| Error::file_write(path, source))?;

        debug!(
            "Saved {} contacts ({} bytes) to {}",
            self.entries.len(),
            bytes.len(),
            path.display()
        );
        Ok(())
    }

    /// Replace the directory contents with those stored at `path`.
    ///
    /// A missing file yields an empty directory and is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or decoded.
    /// The current contents are left untouched in that case.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let bytes = match std::fs::read(path).map_err(|source| Error::file_read(path, source)) {
            Ok(bytes) => bytes,
            Err(err) if err.is_not_found() => {
                debug!("No contact file at {}, starting empty", path.display());
                self.entries.clear();
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        self.entries = codec::decode(&bytes, path)?;
        debug!(
            "Loaded {} contacts from {}",
            self.entries.len(),
            path.display()
        );
        Ok(())
    }

    /// Find contacts matching `query`.
    ///
    /// An entry matches when the query is a case-insensitive substring of the
    /// name, or a case-sensitive substring of the phone number. The empty
    /// query matches every entry. Results follow directory iteration order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<(String, String)> {
        let lowered = query.to_lowercase();

        let results: Vec<(String, String)> = self
            .entries
            .iter()
            .filter(|(name, phone)| {
                name.to_lowercase().contains(&lowered) || phone.contains(query)
            })
            .map(|(name, phone)| (name.clone(), phone.clone()))
            .collect();

        debug!("Search {:?} matched {} contacts", query, results.len());
        results
    }

    /// Collect statistics about the directory and its file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but its metadata cannot be read.
    pub fn stats(&self, path: impl AsRef<Path>) -> Result<DirectoryStats> {
        let path = path.as_ref();

        let (file_exists, file_size_bytes) = match std::fs::metadata(path) {
            Ok(meta) => (true, meta.len()),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => (false, 0),
            Err(source) => return Err(Error::file_read(path, source)),
        };

        Ok(DirectoryStats {
            contacts: self.entries.len(),
            file_exists,
            file_size_bytes,
        })
    }
}

impl Extend<Contact> for Directory {
    fn extend<T: IntoIterator<Item = Contact>>(&mut self, iter: T) {
        for contact in iter {
            self.add(contact);
        }
    }
}

impl FromIterator<Contact> for Directory {
    fn from_iter<T: IntoIterator<Item = Contact>>(iter: T) -> Self {
        let mut directory = Self::new();
        directory.extend(iter);
        directory
    }
}

/// Statistics about the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryStats {
    /// Number of contacts held in memory.
    pub contacts: usize,
    /// Whether the contact file exists.
    pub file_exists: bool,
    /// Size of the contact file in bytes.
    pub file_size_bytes: u64,
}
