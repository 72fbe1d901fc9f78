pub mod contact;

pub use contact::{Contact, ContactUpdate};

/// Menu entries, keyed by the number the user types.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    AddContact,
    RemoveContact,
    ViewPhonebook,
    EditContact,
    Exit,
    Invalid(i64),
}

impl From<i64> for Command {
    fn from(choice: i64) -> Self {
        match choice {
            1 => Command::AddContact,
            2 => Command::RemoveContact,
            3 => Command::ViewPhonebook,
            4 => Command::EditContact,
            5 => Command::Exit,
            other => Command::Invalid(other),
        }
    }
}

impl Command {
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }
}
