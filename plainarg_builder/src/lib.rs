//! Builder module for `plainarg`.
//! See [documentation root](https://docs.rs/plainarg/latest/plainarg/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;
mod wrap;

pub use api::*;
pub use model::*;
pub use parser::{
    ConfigError, ConsoleInterface, ErrorHint, GeneralParser, Outcome, ParseError, UserInterface,
};
pub use wrap::{wrap, Lines};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
