pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_MESSAGE: &str = "Show this help message and exit.";

pub(crate) const SEPARATOR: &str = "--";
pub(crate) const SEPARATOR_MESSAGE: &str = "Treat all remaining arguments as positional.";

// Layout of the help message columns.
pub(crate) const MAIN_INDENT: usize = 2;
pub(crate) const NAME_COLUMN_WIDTH: usize = 24;
pub(crate) const DEFAULT_TERMINAL_WIDTH: usize = 80;
// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_DESCRIPTION_WIDTH: usize = 17;
