use crate::{
    cli::{MENU, console::Console, display_phonebook},
    config::Config,
    domain::{Command, Contact, ContactUpdate},
    errors::AppError,
    logger,
    store::PhonebookStore,
};
use log::{debug, error, info};
use std::io::{self, BufRead, Write};

pub fn run_app() -> Result<(), AppError> {
    let config = Config::load();
    logger::init(config.log_level);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());

    let mut session = Session::new(PhonebookStore::new(), console);
    info!("phonebook opened with {} contacts", session.store().len());

    session.run().inspect_err(|e| error!("{e}"))
}

/// One run of the menu loop over a phonebook.
pub struct Session<R, W> {
    store: PhonebookStore,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: PhonebookStore, console: Console<R, W>) -> Self {
        Self { store, console }
    }

    pub fn store(&self) -> &PhonebookStore {
        &self.store
    }

    pub fn into_parts(self) -> (PhonebookStore, Console<R, W>) {
        (self.store, self.console)
    }

    /// Shows the menu until the user exits or input runs out.
    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) => return Ok(()),
                Err(AppError::EndOfInput) => {
                    debug!("input closed, ending session");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// One menu cycle. Returns `false` once the user picked Exit.
    pub fn step(&mut self) -> Result<bool, AppError> {
        self.console.prompt(&format!("\n{MENU}"))?;
        let choice = self.console.read_int()?;
        let command = Command::from(choice);
        debug!("menu choice {choice} -> {command:?}");

        let outcome = match command {
            Command::AddContact => self.add_contact(),
            Command::RemoveContact => self.remove_contact(),
            Command::ViewPhonebook => self.view_phonebook(),
            Command::EditContact => self.edit_contact(),
            Command::Exit => {
                self.console.say("\nClosing the phonebook.\n")?;
                return Ok(false);
            }
            Command::Invalid(value) => Err(AppError::InvalidMenuChoice(value)),
        };

        match outcome {
            Ok(()) => Ok(true),
            Err(e) if e.is_recoverable() => {
                info!("{e:?}");
                self.report(&e)?;
                Ok(true)
            }
            Err(e) => Err(e),
        }
    }

    fn report(&mut self, err: &AppError) -> Result<(), AppError> {
        match err {
            AppError::InvalidMenuChoice(_) => self.console.say(&format!("\n{err}\n")),
            _ => self.console.say(&format!("\n{err}\n\n")),
        }
    }

    pub fn add_contact(&mut self) -> Result<(), AppError> {
        let name = self.console.ask("Enter new contact name: ")?;
        let email = self.console.ask("Enter new contact email: ")?;

        self.store.add_contact(Contact::new(name, email));
        debug!("contact added at index {}", self.store.len());

        self.console.say("\nContact has been added to the phonebook.\n\n")
    }

    pub fn remove_contact(&mut self) -> Result<(), AppError> {
        if self.store.is_empty() {
            return Err(AppError::EmptyStore("remove"));
        }

        self.view_phonebook()?;
        self.console.prompt("Enter the contact number to remove: ")?;
        let index = self.console.read_int()?;

        let removed = self.store.remove_contact(index)?;
        debug!("removed {:?} from index {index}", removed.name);

        self.console.say("\nContact has been removed from your phonebook.\n\n")
    }

    pub fn view_phonebook(&mut self) -> Result<(), AppError> {
        let listing = display_phonebook(&self.store);
        self.console.say(&listing)
    }

    pub fn edit_contact(&mut self) -> Result<(), AppError> {
        if self.store.is_empty() {
            return Err(AppError::EmptyStore("edit"));
        }

        self.view_phonebook()?;
        self.console.prompt("Enter the contact number to edit: ")?;
        let index = self.console.read_int()?;

        // Reject a bad index before asking for replacement values
        self.store.position(index, "edit")?;
        self.console.say(&format!("Editing contact {index}\n"))?;

        let name = self.console.ask("Enter new name or press enter to leave unchanged: ")?;
        let email = self.console.ask("Enter new email or press enter to leave unchanged: ")?;
        let update = ContactUpdate::from_input(name, email);
        if update.is_noop() {
            debug!("contact {index} left unchanged");
        }

        self.store.edit_contact(index, update)?;
        self.console.say("\nContact updated successfully.\n\n")
    }
}
