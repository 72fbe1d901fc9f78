/// Contacts every new phonebook starts with, in display order.
pub const SEED_CONTACTS: [(&str, &str); 6] = [
    ("Dr.Charles Conner", "cdconner@captechu.edu"),
    ("Andrew Mehri", "aamehri@captehu.edu"),
    ("Mohamed 'Ghazy' Shehata", "mshehata@captechu.edu"),
    ("Dr.Richard Hansen", "rhhansen@captechu.edu"),
    ("President Kyra Milbourne", "kmilbourne@captechu.edu"),
    ("Dr.Christopher Gorham", "clgorham@captechu.edu"),
];

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Contact {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn apply(&mut self, update: ContactUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
    }
}

/// Replacement fields for an existing contact. `None` keeps the current value.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl ContactUpdate {
    /// Builds an update from raw prompt answers; an empty answer leaves that field alone.
    pub fn from_input(name: String, email: String) -> Self {
        ContactUpdate {
            name: Some(name).filter(|n| !n.is_empty()),
            email: Some(email).filter(|e| !e.is_empty()),
        }
    }

    pub fn is_noop(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}
