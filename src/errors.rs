use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    /// Stdin was closed while waiting for input.
    EndOfInput,
    /// Remove or edit was requested on an empty phonebook. Holds the verb.
    EmptyStore(&'static str),
    InvalidIndex(i64),
    InvalidMenuChoice(i64),
}

impl AppError {
    /// Errors the menu loop reports to the user and then carries on from.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::EmptyStore(_) | AppError::InvalidIndex(_) | AppError::InvalidMenuChoice(_)
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing the terminal: {}", e)
            }
            AppError::EndOfInput => {
                write!(f, "Input stream closed")
            }
            AppError::EmptyStore(verb) => {
                write!(f, "Your phonebook is currently empty, no contacts to {}.", verb)
            }
            AppError::InvalidIndex(index) => {
                write!(f, "{} is an invalid contact number.", index)
            }
            AppError::InvalidMenuChoice(_) => {
                write!(f, "Not a valid option. Please enter a valid option.")
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}
