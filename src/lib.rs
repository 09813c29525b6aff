//! `plainarg` is a small, declarative command line parser for Rust.
//!
//! The program declares the parameters it accepts, runs the parser once, and reads back the parsed values.
//! `plainarg` deliberately keeps to a short list of concerns:
//! * *Options vs. arguments*:
//! Options are named (`--name` or `-n`), and may appear anywhere on the Cli.
//! Arguments are positional, and are matched in the order they are declared.
//! * *Strings in, strings out*:
//! Values are handed back as `String`s; converting them is up to the program.
//! * *Basic UX*:
//! A generated help message, and a single line error (followed by a hint) when parsing fails.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/sample.rs")]
//! ```
//!
//! This generates the following Cli program:
//! ```console
//! $ sample -h
//! Usage: sample OPTION* filename stuff?
//! A program which does things.
//!
//! Options:
//!   filename                The input file.
//!   stuff                   Some stuff.
//!   -h, --help              Show this help message and exit.
//!   -s, --some-option SOME_OPTION
//!                           Some option.
//!   -f, --a-flag            A flag.
//!   --                      Treat all remaining arguments as positional.
//!
//! $ sample in.txt -fs abc
//! filename: in.txt
//! stuff: d
//! some-option: Some("abc")
//! a-flag: true
//!
//! $ sample
//! Missing value for filename.
//! See sample --help for more information
//! ```
//!
//! # Declaring parameters
//! Configure `plainarg` by starting with a [`CommandLineParser`] and declaring parameters on it.
//! Each declaration returns a [`Handle`], which is the key to reading the parameter's value after parsing.
//!
//! | Declaration | Cli syntax | Value |
//! |-|-|-|
//! | [`CommandLineParser::flag`] | `--NAME` | `bool` |
//! | [`CommandLineParser::option`] | `--NAME VALUE` | `Option<String>` |
//! | [`CommandLineParser::option_with_default`] | `--NAME VALUE` | `String` |
//! | [`CommandLineParser::required`] | `VALUE` | `String` |
//! | [`CommandLineParser::optional`] | `[VALUE]` | `Option<String>` |
//! | [`CommandLineParser::optional_with_default`] | `[VALUE]` | `String` |
//! | [`CommandLineParser::rest`] | `VALUE*` or `VALUE+` | `Vec<String>` |
//!
//! Declarations are validated as they are made.
//! A repeated name, a repeated short name, or a positional argument following an optional/variadic one, is rejected with a [`ConfigError`].
//!
//! ### Arity
//! Each positional argument has an [`Arity`]: precisely one value, zero or one, zero or more, or one or more.
//! Only the final positional argument may be something other than precisely one.
//!
//! # Parsing
//! [`CommandLineParser::build`] produces a [`GeneralParser`], which parses exactly once.
//! * [`GeneralParser::parse`] reads the process arguments, exiting when help is requested (code `0`) or parsing fails (code `1`).
//! * [`GeneralParser::parse_tokens`] parses the given tokens, returning an [`Outcome`] instead of exiting.
//!
//! The tokens are processed left to right, in a single pass:
//! * `--` switches the parser into positional-only mode; every remaining token is treated as a positional argument.
//! * `--NAME` matches an option by name; a value option takes the following token as its value.
//! * `-abc` is a cluster of short options; flags may be bundled, while a value option takes the following token and ends the cluster.
//! * Anything else is matched to the next positional argument.
//!
//! Options may repeat, in which case the final value applies.
//!
//! # Reading values
//! ```
//! use plainarg::{CommandLineParser, Outcome};
//!
//! let mut clp = CommandLineParser::new("program");
//! let items = clp.rest("item", "The items.", true).unwrap();
//! let parser = clp.build();
//!
//! match parser.parse_tokens(vec!["1", "--", "-2"].as_slice()) {
//!     Outcome::Parsed(bindings) => {
//!         assert_eq!(bindings.get(&items), &vec!["1".to_string(), "-2".to_string()]);
//!     }
//!     outcome => panic!("unexpected {outcome:?}"),
//! }
//! ```
//!
//! # Output
//! The help message and errors are printed through a [`UserInterface`], the console by default.
//! Use [`CommandLineParser::build_with_interface`] to direct them elsewhere.
//! Help descriptions are wrapped to the terminal width via [`wrap`].
//!
//! # Features
//! * `tracing_debug`: emit debug logs of the parser's decisions via [`tracing`](https://docs.rs/tracing/latest/tracing/).
pub use plainarg_builder::*;
