pub mod memory;

use crate::domain::contact::{Contact, ContactUpdate, SEED_CONTACTS};
use crate::errors::AppError;

pub use memory::{PhonebookIter, PhonebookStore};
