pub mod command;
pub mod console;
pub mod run;

pub use run::{Session, run_app};

use crate::domain::Contact;
use crate::store::PhonebookStore;

pub const MENU: &str = "Phonebook Application\n\
    \t1. Add Contact to Phonebook\n\
    \t2. Remove Contact from Phonebook\n\
    \t3. View Phonebook\n\
    \t4. Edit Contact\n\
    \t5. Exit\n\
    Enter your choice: ";

const INDEX_WIDTH: usize = 3;
const NAME_WIDTH: usize = 30;
const EMAIL_WIDTH: usize = 30;

// OUTPUT FUNCTIONS
pub fn display_contact(index: usize, contact: &Contact) -> String {
    // Columns are padded but never truncated; long values push the row wider.
    format!(
        "{:<iw$}{:<nw$}{:<ew$}",
        index,
        contact.name,
        contact.email,
        iw = INDEX_WIDTH,
        nw = NAME_WIDTH,
        ew = EMAIL_WIDTH
    )
}

pub fn display_phonebook(store: &PhonebookStore) -> String {
    if store.is_empty() {
        return "\nNo contacts available.\n\n".to_string();
    }

    let mut output = String::from("\nContact List:\n");
    for (index, contact) in store.iter() {
        output.push_str(&display_contact(index, contact));
        output.push('\n');
    }
    output
}
