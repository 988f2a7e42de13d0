//! Line-oriented commands over an [`EventStore`].
//!
//! Each line holds a command name followed by its arguments, separated by
//! whitespace:
//!
//! - `Add <date> <event>`
//! - `Del <date>` or `Del <date> <event>`
//! - `Find <date>`
//! - `Print`

use calendar_date::DateValue;

use crate::error::{Error, Result};
use crate::store::EventStore;

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add { date: DateValue, event: String },
    DeleteEvent { date: DateValue, event: String },
    DeleteDate { date: DateValue },
    Find { date: DateValue },
    Print,
}

impl Command {
    /// Parse a line, returns `None` if it is blank.
    ///
    /// Words after the expected arguments are ignored.
    ///
    /// ```
    /// use event_log::{Command, DateValue};
    ///
    /// let date = DateValue::new(2017, 1, 1).unwrap();
    /// let cmd = Command::parse("Add 2017-01-01 party").unwrap();
    /// assert_eq!(cmd, Some(Command::Add { date, event: "party".to_string() }));
    /// assert_eq!(Command::parse("   ").unwrap(), None);
    /// assert!(Command::parse("Add 2017-13-01 party").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();

        let Some(name) = words.next() else {
            return Ok(None);
        };

        // A missing date reads as an empty one, which is then reported as
        // malformed.
        let mut date = || DateValue::parse(words.next().unwrap_or_default());

        let cmd = match name {
            "Add" => {
                let date = date()?;
                let event = words.next().ok_or(Error::MissingEvent)?;
                Self::Add { date, event: event.to_string() }
            }
            "Del" => {
                let date = date()?;

                match words.next() {
                    Some(event) => Self::DeleteEvent { date, event: event.to_string() },
                    None => Self::DeleteDate { date },
                }
            }
            "Find" => Self::Find { date: date()? },
            "Print" => Self::Print,
            other => {
                #[cfg(feature = "log")]
                log::warn!("unknown command `{other}`");

                return Err(Error::UnknownCommand(other.to_string()));
            }
        };

        Ok(Some(cmd))
    }

    /// Run the command on the store and return lines of output.
    ///
    /// ```
    /// use event_log::{Command, EventStore};
    ///
    /// let mut store = EventStore::new();
    /// let add = Command::parse("Add 2017-01-01 party").unwrap().unwrap();
    /// assert!(add.execute(&mut store).is_empty());
    ///
    /// let del = Command::parse("Del 2017-01-01").unwrap().unwrap();
    /// assert_eq!(del.execute(&mut store), ["Deleted 1 events"]);
    /// ```
    pub fn execute(self, store: &mut EventStore) -> Vec<String> {
        match self {
            Self::Add { date, event } => {
                store.add_event(date, event);
                Vec::new()
            }
            Self::DeleteEvent { date, event } => {
                let msg = if store.delete_event(date, &event) {
                    "Deleted successfully"
                } else {
                    "Event not found"
                };

                vec![msg.to_string()]
            }
            Self::DeleteDate { date } => {
                vec![format!("Deleted {} events", store.delete_date(date))]
            }
            Self::Find { date } => store.find(date).iter().cloned().collect(),
            Self::Print => store
                .dump()
                .map(|(date, event)| format!("{date} {event}"))
                .collect(),
        }
    }
}

/// Parse and run a line, errors are turned into a message line so that the
/// caller can move on to the next line.
///
/// ```
/// use event_log::{run_line, EventStore};
///
/// let mut store = EventStore::new();
/// assert_eq!(run_line(&mut store, "Add 2017-1-1 party"), Vec::<String>::new());
/// assert_eq!(run_line(&mut store, "Print"), ["2017-01-01 party"]);
/// assert_eq!(run_line(&mut store, "Find abcd"), ["Wrong date format: abcd"]);
/// assert_eq!(run_line(&mut store, "Sing"), ["Unknown command: Sing"]);
/// ```
pub fn run_line(store: &mut EventStore, line: &str) -> Vec<String> {
    match Command::parse(line) {
        Ok(Some(cmd)) => cmd.execute(store),
        Ok(None) => Vec::new(),
        Err(err) => {
            #[cfg(feature = "log")]
            log::debug!("could not run `{line}`: {err}");

            vec![err.to_string()]
        }
    }
}
