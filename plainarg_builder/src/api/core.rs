use crate::api::{Handle, Slot};
use crate::model::Arity;
use crate::parser::{
    ArgumentParameter, ConfigError, ConsoleInterface, GeneralParser, OptionParameter, Parser,
    Printer, UserInterface,
};

/// The base command line parser.
///
/// Parameters are declared one by one, each declaration handing back a [`Handle`] to the parameter's value.
/// Declarations are checked as they are made (ex: a repeated option name), so a mis-configured parser never reaches parsing.
///
/// ### Example
/// ```
/// # use plainarg_builder as plainarg;
/// use plainarg::{CommandLineParser, Outcome};
///
/// let mut clp = CommandLineParser::new("program");
/// let verbose = clp.flag("verbose", Some('v'), "Be loud.").unwrap();
/// let items = clp.rest("item", "The items.", false).unwrap();
/// let parser = clp.build();
///
/// match parser.parse_tokens(vec!["a", "-v", "b"].as_slice()) {
///     Outcome::Parsed(bindings) => {
///         assert!(*bindings.get(&verbose));
///         assert_eq!(bindings.get(&items), &vec!["a".to_string(), "b".to_string()]);
///     }
///     outcome => panic!("unexpected {outcome:?}"),
/// }
/// ```
#[derive(Debug)]
pub struct CommandLineParser {
    program: String,
    about: Option<String>,
    parser: Parser,
}

impl CommandLineParser {
    /// Create a command line parser.
    ///
    /// The help flag (`-h`, `--help`) is always declared.
    ///
    /// ### Example
    /// ```
    /// # use plainarg_builder as plainarg;
    /// use plainarg::{CommandLineParser, Outcome};
    ///
    /// let parser = CommandLineParser::new("program").build();
    ///
    /// assert_eq!(parser.parse_tokens(vec!["--help"].as_slice()), Outcome::Help);
    /// ```
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: None,
            parser: Parser::new(),
        }
    }

    /// Document the about message for this command line parser.
    /// If repeated, only the final message will apply.
    ///
    /// The about message is printed underneath the usage summary of the help message.
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Declare a flag: `--NAME` (or `-S`), taking no value.
    ///
    /// The flag is `false` unless it appears on the Cli.
    ///
    /// ### Example
    /// ```
    /// # use plainarg_builder as plainarg;
    /// use plainarg::{CommandLineParser, ConfigError};
    ///
    /// let mut clp = CommandLineParser::new("program");
    /// clp.flag("verbose", Some('v'), "Be loud.").unwrap();
    ///
    /// assert_eq!(
    ///     clp.flag("verbose", None, "Be loud, again.").unwrap_err(),
    ///     ConfigError::DuplicateName("verbose".to_string()),
    /// );
    /// ```
    pub fn flag(
        &mut self,
        name: impl AsRef<str>,
        short: Option<char>,
        description: impl AsRef<str>,
    ) -> Result<Handle<bool>, ConfigError> {
        let index = self
            .parser
            .add_flag(name.as_ref(), short, description.as_ref())?;
        Ok(self.handle(index))
    }

    /// Declare a value option: `--NAME VALUE` (or `-S VALUE`), without a default.
    ///
    /// The option is `None` unless it appears on the Cli.
    /// If it appears multiple times, the final value applies.
    pub fn option(
        &mut self,
        name: impl AsRef<str>,
        short: Option<char>,
        description: impl AsRef<str>,
    ) -> Result<Handle<Option<String>>, ConfigError> {
        let index = self.parser.add_value(
            name.as_ref(),
            short,
            description.as_ref(),
            Slot::MaybeText(None),
        )?;
        Ok(self.handle(index))
    }

    /// Declare a value option: `--NAME VALUE` (or `-S VALUE`), with a default.
    ///
    /// The option is `default` unless it appears on the Cli.
    /// If it appears multiple times, the final value applies.
    pub fn option_with_default(
        &mut self,
        name: impl AsRef<str>,
        short: Option<char>,
        description: impl AsRef<str>,
        default: impl Into<String>,
    ) -> Result<Handle<String>, ConfigError> {
        let index = self.parser.add_value(
            name.as_ref(),
            short,
            description.as_ref(),
            Slot::Text(default.into()),
        )?;
        Ok(self.handle(index))
    }

    /// Declare a required positional argument, taking precisely one value.
    ///
    /// Positional arguments are matched in the order they are declared.
    pub fn required(
        &mut self,
        name: impl AsRef<str>,
        description: impl AsRef<str>,
    ) -> Result<Handle<String>, ConfigError> {
        let index = self.parser.add_positional(
            name.as_ref(),
            description.as_ref(),
            Arity::One,
            Slot::Text(String::default()),
        )?;
        Ok(self.handle(index))
    }

    /// Declare an optional positional argument, taking zero or one value, without a default.
    ///
    /// This must be the final positional argument.
    pub fn optional(
        &mut self,
        name: impl AsRef<str>,
        description: impl AsRef<str>,
    ) -> Result<Handle<Option<String>>, ConfigError> {
        let index = self.parser.add_positional(
            name.as_ref(),
            description.as_ref(),
            Arity::ZeroOrOne,
            Slot::MaybeText(None),
        )?;
        Ok(self.handle(index))
    }

    /// Declare an optional positional argument, taking zero or one value, with a default.
    ///
    /// This must be the final positional argument.
    ///
    /// ### Example
    /// ```
    /// # use plainarg_builder as plainarg;
    /// use plainarg::{CommandLineParser, ConfigError};
    ///
    /// let mut clp = CommandLineParser::new("program");
    /// clp.optional_with_default("stuff", "Some stuff.", "d").unwrap();
    ///
    /// assert_eq!(
    ///     clp.required("filename", "The input file.").unwrap_err(),
    ///     ConfigError::PositionalAfterVariable {
    ///         name: "filename".to_string(),
    ///         previous: "stuff".to_string(),
    ///     },
    /// );
    /// ```
    pub fn optional_with_default(
        &mut self,
        name: impl AsRef<str>,
        description: impl AsRef<str>,
        default: impl Into<String>,
    ) -> Result<Handle<String>, ConfigError> {
        let index = self.parser.add_positional(
            name.as_ref(),
            description.as_ref(),
            Arity::ZeroOrOne,
            Slot::Text(default.into()),
        )?;
        Ok(self.handle(index))
    }

    /// Declare a variadic positional argument, collecting all remaining positional values.
    ///
    /// When `at_least_one`, the argument is required to match a value.
    /// This must be the final positional argument.
    pub fn rest(
        &mut self,
        name: impl AsRef<str>,
        description: impl AsRef<str>,
        at_least_one: bool,
    ) -> Result<Handle<Vec<String>>, ConfigError> {
        let arity = if at_least_one {
            Arity::OneOrMore
        } else {
            Arity::ZeroOrMore
        };
        let index = self.parser.add_positional(
            name.as_ref(),
            description.as_ref(),
            arity,
            Slot::Texts(Vec::default()),
        )?;
        Ok(self.handle(index))
    }

    fn handle<T>(&self, index: usize) -> Handle<T> {
        Handle::new(self.parser.identity(), index)
    }

    /// Build the command line parser, printing to a custom [`UserInterface`].
    pub fn build_with_interface(self, user_interface: Box<dyn UserInterface>) -> GeneralParser {
        let CommandLineParser {
            program,
            about,
            parser,
        } = self;
        let printer = Printer::terminal(
            program,
            about,
            parser.named().iter().map(OptionParameter::from).collect(),
            parser
                .positionals()
                .iter()
                .map(ArgumentParameter::from)
                .collect(),
        );
        GeneralParser::new(parser, printer, user_interface)
    }

    /// Build the command line parser, printing to the console.
    ///
    /// Configuration errors are reported by the declarations themselves, so building cannot fail.
    pub fn build(self) -> GeneralParser {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }
}
