//! The contact value type.

/// A name and phone number pair.
///
/// Neither field is validated; empty strings are allowed. A contact cannot
/// be changed once built, and only its two fields are ever persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contact {
    name: String,
    phone_number: String,
}

impl Contact {
    /// Create a new contact.
    #[must_use]
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Display name, also the directory key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form phone number.
    #[must_use]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Split the contact into its `(name, phone_number)` pair.
    #[must_use]
    pub fn into_pair(self) -> (String, String) {
        (self.name, self.phone_number)
    }
}
