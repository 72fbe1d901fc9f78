pub use crate::cli::{Session, command, console::Console, display_contact, display_phonebook, run_app};
pub use crate::config::Config;
pub use crate::domain::{
    Command,
    contact::{self, Contact, ContactUpdate, SEED_CONTACTS},
};
pub use crate::errors::AppError;
pub use crate::store::{self, PhonebookStore};
