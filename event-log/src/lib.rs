#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod command;
pub mod error;
pub mod store;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::command::{run_line, Command};
pub use crate::error::{Error, Result};
pub use crate::store::EventStore;
pub use calendar_date::DateValue;
