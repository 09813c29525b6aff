use crate::constant::*;
use crate::parser::ParseError;
use crate::wrap;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Lays out the two columns of the help message: the parameter name, then its description.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    indent: usize,
    left: usize,
    right: usize,
}

impl ColumnRenderer {
    /// Produce a renderer which fits the description column into the total width, if known.
    pub(crate) fn guided(total_width: Option<usize>) -> Self {
        let total_width = total_width.unwrap_or(DEFAULT_TERMINAL_WIDTH);
        let non_right = MAIN_INDENT + NAME_COLUMN_WIDTH;

        if non_right + MINIMUM_DESCRIPTION_WIDTH <= total_width {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_right} fit within the total {total_width}.  Selecting description: {}.", total_width - non_right);
            }

            Self::new(MAIN_INDENT, NAME_COLUMN_WIDTH, total_width - non_right)
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_right} do not fit within the total {total_width}.  Selecting description: {MINIMUM_DESCRIPTION_WIDTH}.");
            }

            Self::new(MAIN_INDENT, NAME_COLUMN_WIDTH, MINIMUM_DESCRIPTION_WIDTH)
        }
    }

    pub(crate) fn new(indent: usize, left: usize, right: usize) -> Self {
        Self {
            indent,
            left,
            right,
        }
    }

    pub(crate) fn render(&self, left: &str, right: &str) -> Vec<String> {
        let indent = self.indent;
        let left_column_width = self.left;
        let mut out = Vec::default();
        let mut parts = wrap(right, self.right).map(|part| part.trim_end_matches('\n').to_string());

        // A name that fills its column pushes the description onto the following line.
        if left.chars().count() >= left_column_width {
            out.push(format!("{:indent$}{left}", ""));
        } else {
            match parts.next() {
                Some(part) => out.push(format!("{:indent$}{left:left_column_width$}{part}", "")),
                None => out.push(format!("{:indent$}{left}", "")),
            }
        }

        for part in parts {
            out.push(format!("{:indent$}{:left_column_width$}{part}", "", ""));
        }

        out.into_iter()
            .map(|line| line.trim_end().to_string())
            .collect()
    }
}

/// The hint which follows a parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorHint {
    program: String,
}

impl ErrorHint {
    pub(crate) fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl std::fmt::Display for ErrorHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "See {p} --{HELP_NAME} for more information",
            p = self.program
        )
    }
}

/// The output sink of the command line parser.
///
/// The default sink is the console: the help message goes to `stdout`, while errors go to `stderr`.
/// Supply a custom sink via [`CommandLineParser::build_with_interface`](crate::CommandLineParser::build_with_interface).
pub trait UserInterface {
    /// Print one line of the help message.
    fn print(&self, message: String);
    /// Print a parse error.
    fn print_error(&self, error: ParseError);
    /// Print the hint which follows a parse error.
    fn print_error_hint(&self, hint: ErrorHint);
}

/// The console [`UserInterface`].
#[derive(Debug, Default)]
pub struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("{error}");
    }

    fn print_error_hint(&self, hint: ErrorHint) {
        eprintln!("{hint}");
    }
}
