use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::{Bindings, Slot};
use crate::constant::*;
use crate::model::Arity;

// Each parser gets its own identity, so that handles cannot be read against another parser's bindings.
static NEXT_IDENTITY: AtomicUsize = AtomicUsize::new(0);

/// Error in the configuration of the command line parser.
///
/// These are programming errors; they are raised at the declaration which introduces them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The long name is already declared.
    #[error("Config error: Cannot duplicate the parameter '--{0}'.")]
    DuplicateName(String),
    /// The short name is already declared.
    #[error("Config error: Cannot duplicate the short parameter '-{0}'.")]
    DuplicateShortName(char),
    /// A positional argument is declared after an optional or variadic positional argument.
    #[error("Config error: Cannot declare the positional argument '{name}' after the optional/variadic positional argument '{previous}'.")]
    PositionalAfterVariable {
        /// The name of the rejected positional argument.
        name: String,
        /// The name of the optional/variadic positional argument declared before it.
        previous: String,
    },
    /// The long name can never be matched on the Cli.
    #[error("Config error: Invalid parameter name '{0}'.")]
    InvalidName(String),
    /// The short name can never be matched on the Cli.
    #[error("Config error: Invalid short parameter name '{0}'.")]
    InvalidShortName(char),
}

/// Error in the Cli input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A `--NAME` token does not match any option.
    #[error("Unknown option {0}")]
    UnknownOption(String),
    /// A character of a `-N` token does not match any option.
    #[error("Unknown short option -{0}")]
    UnknownShortOption(char),
    /// A `--NAME` value option is the final token.
    #[error("Option --{0} requires an argument")]
    MissingValue(String),
    /// A `-N` value option is the final token.
    #[error("Option -{0} requires an argument")]
    MissingShortValue(char),
    /// A positional token is left over after all positional arguments are matched.
    #[error("Too many arguments.")]
    TooManyArguments,
    /// A required positional argument is not matched.
    #[error("Missing value for {0}.")]
    MissingPositional(String),
}

/// What happens when a named argument is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Binding {
    Help,
    Flag(usize),
    Value(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NamedArgument {
    pub(crate) name: String,
    pub(crate) short: Option<char>,
    pub(crate) description: String,
    pub(crate) binding: Binding,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PositionalArgument {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) arity: Arity,
    pub(crate) slot: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Action {
    Complete(Bindings),
    PrintHelp,
}

enum Step {
    Next,
    Help,
}

// Ephemeral, lives for the duration of one `Parser::consume`.
struct ParserState<'t> {
    tokens: VecDeque<&'t str>,
    positionals: VecDeque<PositionalArgument>,
    // Set by the first `--`; never unset.
    ignore_dashes: bool,
    // Whether the variadic positional at the head of `positionals` has matched a token.
    variadic_matched: bool,
}

/// The registry of declared arguments, and the engine which parses tokens against them.
#[derive(Debug)]
pub(crate) struct Parser {
    identity: usize,
    named: Vec<NamedArgument>,
    long_names: HashMap<String, usize>,
    short_names: HashMap<char, usize>,
    positionals: Vec<PositionalArgument>,
    slots: Vec<Slot>,
}

impl Parser {
    pub(crate) fn new() -> Self {
        let mut parser = Self {
            identity: NEXT_IDENTITY.fetch_add(1, Ordering::Relaxed),
            named: Vec::default(),
            long_names: HashMap::default(),
            short_names: HashMap::default(),
            positionals: Vec::default(),
            slots: Vec::default(),
        };

        if parser
            .insert_named(HELP_NAME, Some(HELP_SHORT), HELP_MESSAGE, Binding::Help)
            .is_err()
        {
            unreachable!("internal error - the help flag must register onto an empty parser");
        }

        parser
    }

    pub(crate) fn identity(&self) -> usize {
        self.identity
    }

    pub(crate) fn named(&self) -> &[NamedArgument] {
        &self.named
    }

    pub(crate) fn positionals(&self) -> &[PositionalArgument] {
        &self.positionals
    }

    /// Declare a flag, returning the index of its slot.
    pub(crate) fn add_flag(
        &mut self,
        name: &str,
        short: Option<char>,
        description: &str,
    ) -> Result<usize, ConfigError> {
        let slot = self.slots.len();
        self.insert_named(name, short, description, Binding::Flag(slot))?;
        self.slots.push(Slot::Switch(false));
        Ok(slot)
    }

    /// Declare a value option, returning the index of its slot.
    pub(crate) fn add_value(
        &mut self,
        name: &str,
        short: Option<char>,
        description: &str,
        initial: Slot,
    ) -> Result<usize, ConfigError> {
        let slot = self.slots.len();
        self.insert_named(name, short, description, Binding::Value(slot))?;
        self.slots.push(initial);
        Ok(slot)
    }

    /// Declare a positional argument, returning the index of its slot.
    pub(crate) fn add_positional(
        &mut self,
        name: &str,
        description: &str,
        arity: Arity,
        initial: Slot,
    ) -> Result<usize, ConfigError> {
        // Only the final positional argument may be something other than precisely one.
        if let Some(previous) = self.positionals.last() {
            if previous.arity != Arity::One {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Rejecting positional '{name}' after '{}' ({}).", previous.name, previous.arity);
                }

                return Err(ConfigError::PositionalAfterVariable {
                    name: name.to_string(),
                    previous: previous.name.clone(),
                });
            }
        }

        let slot = self.slots.len();
        self.positionals.push(PositionalArgument {
            name: name.to_string(),
            description: description.to_string(),
            arity,
            slot,
        });
        self.slots.push(initial);
        Ok(slot)
    }

    fn insert_named(
        &mut self,
        name: &str,
        short: Option<char>,
        description: &str,
        binding: Binding,
    ) -> Result<(), ConfigError> {
        if name.is_empty() || name.starts_with('-') {
            return Err(ConfigError::InvalidName(name.to_string()));
        }

        if self.long_names.contains_key(name) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Rejecting duplicate '--{name}'.");
            }

            return Err(ConfigError::DuplicateName(name.to_string()));
        }

        if let Some(s) = short {
            if s == '-' || s.is_whitespace() {
                return Err(ConfigError::InvalidShortName(s));
            }

            if self.short_names.contains_key(&s) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Rejecting duplicate '-{s}'.");
                }

                return Err(ConfigError::DuplicateShortName(s));
            }

            self.short_names.insert(s, self.named.len());
        }

        self.long_names.insert(name.to_string(), self.named.len());
        self.named.push(NamedArgument {
            name: name.to_string(),
            short,
            description: description.to_string(),
            binding,
        });
        Ok(())
    }

    /// Run the single pass over the tokens, writing onto the slots.
    pub(crate) fn consume(mut self, tokens: &[&str]) -> Result<Action, ParseError> {
        let mut state = ParserState {
            tokens: tokens.iter().copied().collect(),
            positionals: std::mem::take(&mut self.positionals).into(),
            ignore_dashes: false,
            variadic_matched: false,
        };

        while let Some(token) = state.tokens.pop_front() {
            let step = if state.ignore_dashes || !token.starts_with('-') {
                self.match_positional(token, &mut state)?
            } else if token == SEPARATOR {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Separator found; treating the remaining tokens as positional.");
                }

                state.ignore_dashes = true;
                Step::Next
            } else if let Some(name) = token.strip_prefix("--") {
                self.match_option(name, &mut state)?
            } else {
                self.match_option_short(&token[1..], &mut state)?
            };

            if let Step::Help = step {
                return Ok(Action::PrintHelp);
            }
        }

        if let Some(positional) = state.positionals.front() {
            // A variadic head which has matched is satisfied, whatever its arity.
            let matched = positional.arity.is_variadic() && state.variadic_matched;

            if positional.arity.is_required() && !matched {
                return Err(ParseError::MissingPositional(positional.name.clone()));
            }
        }

        Ok(Action::Complete(Bindings::new(self.identity, self.slots)))
    }

    fn match_positional(
        &mut self,
        token: &str,
        state: &mut ParserState,
    ) -> Result<Step, ParseError> {
        let positional = state
            .positionals
            .front()
            .ok_or(ParseError::TooManyArguments)?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Matched '{token}' to positional '{}'.", positional.name);
        }

        self.slots[positional.slot].capture(token);

        if positional.arity.is_variadic() {
            state.variadic_matched = true;
        } else {
            state.positionals.pop_front();
            state.variadic_matched = false;
        }

        Ok(Step::Next)
    }

    fn match_option(&mut self, name: &str, state: &mut ParserState) -> Result<Step, ParseError> {
        let index = *self
            .long_names
            .get(name)
            .ok_or_else(|| ParseError::UnknownOption(name.to_string()))?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Matched '--{name}' to {:?}.", self.named[index].binding);
        }

        match self.named[index].binding {
            Binding::Help => Ok(Step::Help),
            Binding::Flag(slot) => {
                self.slots[slot].switch_on();
                Ok(Step::Next)
            }
            Binding::Value(slot) => {
                let value = state
                    .tokens
                    .pop_front()
                    .ok_or_else(|| ParseError::MissingValue(name.to_string()))?;
                self.slots[slot].capture(value);
                Ok(Step::Next)
            }
        }
    }

    fn match_option_short(
        &mut self,
        cluster: &str,
        state: &mut ParserState,
    ) -> Result<Step, ParseError> {
        for single in cluster.chars() {
            let index = *self
                .short_names
                .get(&single)
                .ok_or(ParseError::UnknownShortOption(single))?;

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Matched '-{single}' to {:?}.", self.named[index].binding);
            }

            match self.named[index].binding {
                Binding::Help => return Ok(Step::Help),
                Binding::Flag(slot) => self.slots[slot].switch_on(),
                Binding::Value(slot) => {
                    // The value is always the next token, never the rest of this cluster.
                    let value = state
                        .tokens
                        .pop_front()
                        .ok_or(ParseError::MissingShortValue(single))?;
                    self.slots[slot].capture(value);
                    return Ok(Step::Next);
                }
            }
        }

        Ok(Step::Next)
    }
}


#[cfg(test)]
mod tests {
    use super::test::*;
    use super::*;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn random_arity() -> Arity {
        match thread_rng().gen_range(0..4) {
            0 => Arity::One,
            1 => Arity::ZeroOrOne,
            2 => Arity::ZeroOrMore,
            3 => Arity::OneOrMore,
            _ => unreachable!("internal error - impossible gen_range()"),
        }
    }

    fn initial(arity: Arity) -> Slot {
        match arity {
            Arity::One => text(""),
            Arity::ZeroOrOne => maybe(None),
            Arity::ZeroOrMore | Arity::OneOrMore => texts(vec![]),
        }
    }

    #[test]
    fn parser_empty() {
        // Setup
        let parser = Parser::new();

        // Execute
        let result = parser.consume(&[]).unwrap();

        // Verify
        assert_eq!(complete(result), vec![]);
    }

    #[test]
    fn parser_identity() {
        assert_ne!(Parser::new().identity(), Parser::new().identity());
    }

    #[rstest]
    #[case(vec![], false)]
    #[case(vec!["--flag"], true)]
    #[case(vec!["-f"], true)]
    #[case(vec!["-f", "--flag"], true)]
    #[case(vec!["-ff"], true)]
    fn parser_flag(#[case] tokens: Vec<&str>, #[case] expected: bool) {
        // Setup
        let mut parser = Parser::new();
        parser.add_flag("flag", Some('f'), "").unwrap();

        // Execute
        let result = parser.consume(tokens.as_slice()).unwrap();

        // Verify
        assert_eq!(complete(result), vec![Slot::Switch(expected)]);
    }

    #[rstest]
    #[case(vec![], None)]
    #[case(vec!["--value", "1"], Some("1"))]
    #[case(vec!["-v", "1"], Some("1"))]
    #[case(vec!["-v", "1", "--value", "2"], Some("2"))]
    #[case(vec!["--value", "-f"], Some("-f"))]
    #[case(vec!["--value", "--"], Some("--"))]
    #[case(vec!["-v", "--value"], Some("--value"))]
    fn parser_value(#[case] tokens: Vec<&str>, #[case] expected: Option<&str>) {
        // Setup
        let mut parser = Parser::new();
        parser.add_value("value", Some('v'), "", maybe(None)).unwrap();

        // Execute
        let result = parser.consume(tokens.as_slice()).unwrap();

        // Verify
        assert_eq!(complete(result), vec![maybe(expected)]);
    }

    #[rstest]
    #[case(vec![], "default")]
    #[case(vec!["--value", "1"], "1")]
    #[case(vec!["--value", ""], "")]
    fn parser_value_default(#[case] tokens: Vec<&str>, #[case] expected: &str) {
        // Setup
        let mut parser = Parser::new();
        parser.add_value("value", None, "", text("default")).unwrap();

        // Execute
        let result = parser.consume(tokens.as_slice()).unwrap();

        // Verify
        assert_eq!(complete(result), vec![text(expected)]);
    }

    #[rstest]
    #[case(vec!["-abc", "val"], true, true, Some("val"))]
    #[case(vec!["-cab", "val"], false, false, Some("val"))]
    #[case(vec!["-ac", "val"], true, false, Some("val"))]
    #[case(vec!["-ba"], true, true, None)]
    #[case(vec!["-"], false, false, None)]
    fn parser_short_bundle(
        #[case] tokens: Vec<&str>,
        #[case] expected_a: bool,
        #[case] expected_b: bool,
        #[case] expected_c: Option<&str>,
    ) {
        // Setup
        let mut parser = Parser::new();
        parser.add_flag("apple", Some('a'), "").unwrap();
        parser.add_flag("banana", Some('b'), "").unwrap();
        parser.add_value("carrot", Some('c'), "", maybe(None)).unwrap();

        // Execute
        let result = parser.consume(tokens.as_slice()).unwrap();

        // Verify
        assert_eq!(
            complete(result),
            vec![
                Slot::Switch(expected_a),
                Slot::Switch(expected_b),
                maybe(expected_c),
            ]
        );
    }

    #[test]
    fn parser_short_value_ignores_cluster_tail() {
        // Setup
        let mut parser = Parser::new();
        parser.add_value("carrot", Some('c'), "", maybe(None)).unwrap();
        parser.add_flag("verbose", Some('v'), "").unwrap();

        // Execute
        let result = parser.consume(vec!["-cvalue"].as_slice());

        // Verify
        assert_matches!(result, Err(ParseError::MissingShortValue('c')));
    }

    #[rstest]
    #[case(vec!["-cv", "x"], "x", false)]
    #[case(vec!["-cv", "x", "-v"], "x", true)]
    fn parser_short_value_stops_cluster(
        #[case] tokens: Vec<&str>,
        #[case] expected_c: &str,
        #[case] expected_v: bool,
    ) {
        // Setup
        let mut parser = Parser::new();
        parser.add_value("carrot", Some('c'), "", maybe(None)).unwrap();
        parser.add_flag("verbose", Some('v'), "").unwrap();

        // Execute
        let result = parser.consume(tokens.as_slice()).unwrap();

        // Verify
        assert_eq!(
            complete(result),
            vec![maybe(Some(expected_c)), Slot::Switch(expected_v)]
        );
    }

    #[rstest]
    #[case(vec!["in.txt"], "in.txt", None, vec![])]
    #[case(vec!["in.txt", "a"], "in.txt", Some("a"), vec![])]
    #[case(vec!["in.txt", "a", "b"], "in.txt", Some("a"), vec!["b"])]
    #[case(vec!["in.txt", "a", "b", "c"], "in.txt", Some("a"), vec!["b", "c"])]
    fn parser_positionals(
        #[case] tokens: Vec<&str>,
        #[case] expected_first: &str,
        #[case] expected_second: Option<&str>,
        #[case] expected_rest: Vec<&str>,
    ) {
        // Setup
        let mut parser = Parser::new();
        parser.add_positional("first", "", Arity::One, text("")).unwrap();
        parser.add_positional("second", "", Arity::One, maybe(None)).unwrap();
        parser.add_positional("rest", "", Arity::ZeroOrMore, texts(vec![])).unwrap();

        // Execute
        let result = parser.consume(tokens.as_slice());

        // Verify
        match expected_second {
            Some(_) => assert_eq!(
                complete(result.unwrap()),
                vec![
                    text(expected_first),
                    maybe(expected_second),
                    texts(expected_rest),
                ]
            ),
            None => assert_matches!(result, Err(ParseError::MissingPositional(name)) if name == "second"),
        }
    }

    #[rstest]
    #[case(Arity::ZeroOrOne, vec![], None)]
    #[case(Arity::ZeroOrOne, vec!["a"], Some(vec!["a"]))]
    #[case(Arity::ZeroOrMore, vec![], None)]
    #[case(Arity::ZeroOrMore, vec!["a", "b"], Some(vec!["a", "b"]))]
    #[case(Arity::OneOrMore, vec!["a"], Some(vec!["a"]))]
    #[case(Arity::OneOrMore, vec!["a", "b", "c"], Some(vec!["a", "b", "c"]))]
    fn parser_positional_arity(
        #[case] arity: Arity,
        #[case] tokens: Vec<&str>,
        #[case] expected: Option<Vec<&str>>,
    ) {
        // Setup
        let mut parser = Parser::new();
        parser.add_positional("item", "", arity, initial(arity)).unwrap();

        // Execute
        let result = parser.consume(tokens.as_slice()).unwrap();

        // Verify
        let expected = match (arity, expected) {
            (Arity::ZeroOrOne, values) => maybe(values.map(|v| v[0])),
            (_, values) => texts(values.unwrap_or_default()),
        };
        assert_eq!(complete(result), vec![expected]);
    }

    #[rstest]
    #[case(Arity::One)]
    #[case(Arity::OneOrMore)]
    fn parser_positional_missing(#[case] arity: Arity) {
        // Setup
        let mut parser = Parser::new();
        parser.add_positional("filename", "", arity, initial(arity)).unwrap();

        // Execute
        let result = parser.consume(&[]);

        // Verify
        assert_matches!(result, Err(ParseError::MissingPositional(name)) if name == "filename");
    }

    #[rstest]
    #[case(vec!["a"])]
    #[case(vec!["a", "b"])]
    fn parser_too_many(#[case] extra: Vec<&str>) {
        // Setup
        let mut parser = Parser::new();
        parser.add_positional("filename", "", Arity::One, text("")).unwrap();
        let mut tokens = vec!["in.txt"];
        tokens.extend(extra);

        // Execute
        let result = parser.consume(tokens.as_slice());

        // Verify
        assert_matches!(result, Err(ParseError::TooManyArguments));
    }

    #[rstest]
    #[case(vec!["--", "-f"], false, vec!["-f"])]
    #[case(vec!["-f", "--", "-f"], true, vec!["-f"])]
    #[case(vec!["--", "--"], false, vec!["--"])]
    #[case(vec!["--", "--", "--flag", "x"], false, vec!["--", "--flag", "x"])]
    #[case(vec!["a", "--", "-h"], false, vec!["a", "-h"])]
    fn parser_separator(
        #[case] tokens: Vec<&str>,
        #[case] expected_flag: bool,
        #[case] expected_items: Vec<&str>,
    ) {
        // Setup
        let mut parser = Parser::new();
        parser.add_flag("flag", Some('f'), "").unwrap();
        parser.add_positional("item", "", Arity::ZeroOrMore, texts(vec![])).unwrap();

        // Execute
        let result = parser.consume(tokens.as_slice()).unwrap();

        // Verify
        assert_eq!(
            complete(result),
            vec![Slot::Switch(expected_flag), texts(expected_items)]
        );
    }

    #[rstest]
    #[case(vec!["--help"])]
    #[case(vec!["-h"])]
    #[case(vec!["-fh"])]
    #[case(vec!["--help", "1", "2", "3"])]
    #[case(vec!["-h", "--unknown"])]
    #[case(vec!["1", "-h"])]
    fn parser_help(#[case] tokens: Vec<&str>) {
        // Setup
        let mut parser = Parser::new();
        parser.add_flag("flag", Some('f'), "").unwrap();
        parser.add_positional("variable", "", random_arity(), text("")).unwrap();

        // Execute
        let result = parser.consume(tokens.as_slice()).unwrap();

        // Verify
        assert_eq!(result, Action::PrintHelp);
    }

    #[rstest]
    #[case(vec!["--unknown"], ParseError::UnknownOption("unknown".to_string()))]
    #[case(vec!["--flag=1"], ParseError::UnknownOption("flag=1".to_string()))]
    #[case(vec!["--Flag"], ParseError::UnknownOption("Flag".to_string()))]
    #[case(vec!["-x"], ParseError::UnknownShortOption('x'))]
    #[case(vec!["-fx"], ParseError::UnknownShortOption('x'))]
    #[case(vec!["--value"], ParseError::MissingValue("value".to_string()))]
    #[case(vec!["-v"], ParseError::MissingShortValue('v'))]
    #[case(vec!["-fv"], ParseError::MissingShortValue('v'))]
    #[case(vec!["--unknown", "-h"], ParseError::UnknownOption("unknown".to_string()))]
    fn parser_error(#[case] tokens: Vec<&str>, #[case] expected: ParseError) {
        // Setup
        let mut parser = Parser::new();
        parser.add_flag("flag", Some('f'), "").unwrap();
        parser.add_value("value", Some('v'), "", maybe(None)).unwrap();

        // Execute
        let result = parser.consume(tokens.as_slice());

        // Verify
        assert_eq!(result, Err(expected));
    }

    #[rstest]
    #[case("help", None)]
    #[case("other", Some('h'))]
    fn parser_duplicate_help(#[case] name: &str, #[case] short: Option<char>) {
        let mut parser = Parser::new();
        let result = parser.add_flag(name, short, "");
        assert_matches!(
            result,
            Err(ConfigError::DuplicateName(_)) | Err(ConfigError::DuplicateShortName('h'))
        );
    }

    #[test]
    fn parser_duplicate_option() {
        // Setup
        let mut parser = Parser::new();
        parser.add_flag("flag", None, "").unwrap();

        // Execute
        let result = parser.add_value("flag", None, "", maybe(None));

        // Verify
        assert_matches!(result, Err(ConfigError::DuplicateName(name)) if name == "flag");
    }

    #[test]
    fn parser_duplicate_option_short() {
        // Setup
        let mut parser = Parser::new();
        parser.add_flag("flagA", Some('f'), "").unwrap();

        // Execute
        let result = parser.add_flag("flagB", Some('f'), "");

        // Verify
        assert_matches!(result, Err(ConfigError::DuplicateShortName('f')));
        // The rejected declaration leaves no trace.
        assert_eq!(parser.named().len(), 2);
        assert!(parser.consume(vec!["--flagB"].as_slice()).is_err());
    }

    #[rstest]
    #[case("")]
    #[case("-flag")]
    #[case("--flag")]
    fn parser_invalid_name(#[case] name: &str) {
        let mut parser = Parser::new();
        let result = parser.add_flag(name, None, "");
        assert_matches!(result, Err(ConfigError::InvalidName(_)));
    }

    #[rstest]
    #[case('-')]
    #[case(' ')]
    fn parser_invalid_short_name(#[case] short: char) {
        let mut parser = Parser::new();
        let result = parser.add_flag("flag", Some(short), "");
        assert_matches!(result, Err(ConfigError::InvalidShortName(_)));
    }

    #[test]
    fn parser_positional_names_may_repeat() {
        // Setup
        let mut parser = Parser::new();
        parser.add_positional("file", "", Arity::One, text("")).unwrap();
        parser.add_positional("file", "", Arity::One, text("")).unwrap();

        // Execute
        let result = parser.consume(vec!["a", "b"].as_slice()).unwrap();

        // Verify
        assert_eq!(complete(result), vec![text("a"), text("b")]);
    }

    #[rstest]
    #[case(Arity::ZeroOrOne)]
    #[case(Arity::ZeroOrMore)]
    #[case(Arity::OneOrMore)]
    fn parser_positional_after_variable(#[case] arity: Arity) {
        // Setup
        let mut parser = Parser::new();
        parser.add_positional("first", "", arity, initial(arity)).unwrap();
        let next = random_arity();

        // Execute
        let result = parser.add_positional("second", "", next, initial(next));

        // Verify
        assert_matches!(
            result,
            Err(ConfigError::PositionalAfterVariable { name, previous }) if name == "second" && previous == "first"
        );
    }
}
