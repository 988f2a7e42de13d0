use std::fmt::Display;

pub use calendar_date::Error as DateError;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure to read or run a command, the message is meant to be displayed
/// to the user before moving on to the next command.
#[derive(Clone, Debug)]
pub enum Error {
    /// The date argument is malformed or out of range.
    Date(DateError),
    /// The first word of the line is not a known command.
    UnknownCommand(String),
    /// `Add` was called without an event name.
    MissingEvent,
}

impl From<DateError> for Error {
    fn from(err: DateError) -> Self {
        Self::Date(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(err) => write!(f, "{err}"),
            Self::UnknownCommand(cmd) => write!(f, "Unknown command: {cmd}"),
            Self::MissingEvent => write!(f, "Missing event name"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Date(err) => Some(err),
            _ => None,
        }
    }
}
