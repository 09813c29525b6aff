mod base;
mod interface;
mod middleware;
mod printer;

pub use base::{ConfigError, ParseError};
pub use interface::{ConsoleInterface, ErrorHint, UserInterface};
pub use middleware::{GeneralParser, Outcome};

pub(crate) use base::*;
pub(crate) use printer::*;

#[cfg(test)]
pub(crate) use interface::util;
