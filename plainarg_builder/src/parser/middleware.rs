use std::env;

use crate::api::Bindings;
use crate::parser::base::*;
use crate::parser::interface::{ErrorHint, UserInterface};
use crate::parser::printer::Printer;

/// The result of running the command line parser.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The tokens were parsed; the values of all parameters are available.
    Parsed(Bindings),
    /// The help switch (`-h` or `--help`) was encountered, and the help message has been printed.
    Help,
    /// The tokens could not be parsed, and the error has been printed.
    Failed(ParseError),
}

impl Outcome {
    /// The process exit code this outcome calls for, if any.
    ///
    /// `Parsed` continues with the program (`None`), `Help` exits successfully (`Some(0)`), and `Failed` exits with an error (`Some(1)`).
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Outcome::Parsed(_) => None,
            Outcome::Help => Some(0),
            Outcome::Failed(_) => Some(1),
        }
    }
}

/// The configured command line parser.
/// Built via [`CommandLineParser::build`](crate::CommandLineParser::build).
///
/// Parsing consumes the `GeneralParser`, so each parser parses at most once.
pub struct GeneralParser {
    parser: Parser,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for GeneralParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneralParser")
            .field("program", &self.printer.program())
            .finish()
    }
}

impl GeneralParser {
    pub(crate) fn new(
        parser: Parser,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            parser,
            printer,
            user_interface,
        }
    }

    /// Run the command line parser against the input tokens.
    ///
    /// The tokens are processed left to right in a single pass, writing onto the parameters as they are matched.
    ///
    /// If the help switch (`-h` or `--help`) is encountered, the parser prints the help message and stops, returning [`Outcome::Help`].
    /// If the parser encounters an error (ex: an unknown option, a missing value, etc), it prints the error followed by a hint, and returns [`Outcome::Failed`].
    /// Neither case exits the process; see [`GeneralParser::parse`] for that.
    ///
    /// ### Example
    /// ```
    /// # use plainarg_builder as plainarg;
    /// use plainarg::{CommandLineParser, Outcome};
    ///
    /// let mut clp = CommandLineParser::new("program");
    /// let filename = clp.required("filename", "The input file.").unwrap();
    /// let parser = clp.build();
    ///
    /// let bindings = match parser.parse_tokens(vec!["in.txt"].as_slice()) {
    ///     Outcome::Parsed(bindings) => bindings,
    ///     outcome => panic!("unexpected {outcome:?}"),
    /// };
    /// assert_eq!(bindings.get(&filename), "in.txt");
    /// ```
    pub fn parse_tokens(self, tokens: &[&str]) -> Outcome {
        let GeneralParser {
            parser,
            printer,
            user_interface,
        } = self;

        match parser.consume(tokens) {
            Ok(Action::Complete(bindings)) => Outcome::Parsed(bindings),
            Ok(Action::PrintHelp) => {
                printer.print_help(&*user_interface);
                Outcome::Help
            }
            Err(parse_error) => {
                user_interface.print_error(parse_error.clone());
                user_interface.print_error_hint(ErrorHint::new(printer.program()));
                Outcome::Failed(parse_error)
            }
        }
    }

    /// Run the command line parser against the Cli [`env::args`], excluding the program name.
    ///
    /// Behaves like [`GeneralParser::parse_tokens`], except that the process exits instead of returning when help is requested (with code `0`) or when an error is encountered (with code `1`).
    pub fn parse(self) -> Bindings {
        let command_input: Vec<String> = env::args().skip(1).collect();
        let outcome = self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        );

        match outcome {
            Outcome::Parsed(bindings) => bindings,
            Outcome::Help => std::process::exit(0),
            Outcome::Failed(_) => std::process::exit(1),
        }
    }
}
