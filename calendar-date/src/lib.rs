#![doc = include_str!("../README.md")]

#[macro_use]
extern crate pest_derive;

pub mod date;
pub mod error;

mod parser;


pub use date::DateValue;
pub use error::{Error, Result};
pub use parser::parse;
