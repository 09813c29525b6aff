use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::model::Arity;
use crate::parser::base::{Binding, NamedArgument, PositionalArgument};
use crate::parser::interface::{ColumnRenderer, UserInterface};
use crate::wrap;

pub(crate) struct OptionParameter {
    name: String,
    short: Option<char>,
    takes_value: bool,
    help: String,
}

impl OptionParameter {
    #[cfg(test)]
    fn basic(name: &str, short: Option<char>, takes_value: bool, help: &str) -> Self {
        Self {
            name: name.to_string(),
            short,
            takes_value,
            help: help.to_string(),
        }
    }

    fn flags(&self) -> String {
        let grammar = if self.takes_value {
            format!(" {}", self.name.to_ascii_uppercase().replace('-', "_"))
        } else {
            "".to_string()
        };

        match self.short {
            Some(s) => format!("-{s}, --{n}{grammar}", n = self.name),
            None => format!("--{n}{grammar}", n = self.name),
        }
    }
}

impl From<&NamedArgument> for OptionParameter {
    fn from(value: &NamedArgument) -> Self {
        let takes_value = match value.binding {
            Binding::Help | Binding::Flag(_) => false,
            Binding::Value(_) => true,
        };

        OptionParameter {
            name: value.name.clone(),
            short: value.short,
            takes_value,
            help: value.description.clone(),
        }
    }
}

pub(crate) struct ArgumentParameter {
    name: String,
    arity: Arity,
    help: String,
}

impl ArgumentParameter {
    #[cfg(test)]
    fn basic(name: &str, arity: Arity, help: &str) -> Self {
        Self {
            name: name.to_string(),
            arity,
            help: help.to_string(),
        }
    }
}

impl From<&PositionalArgument> for ArgumentParameter {
    fn from(value: &PositionalArgument) -> Self {
        ArgumentParameter {
            name: value.name.clone(),
            arity: value.arity,
            help: value.description.clone(),
        }
    }
}

pub(crate) struct Printer {
    program: String,
    about: Option<String>,
    options: Vec<OptionParameter>,
    arguments: Vec<ArgumentParameter>,
    terminal_width: Option<usize>,
}

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(
            "program".to_string(),
            None,
            vec![OptionParameter::basic(
                HELP_NAME,
                Some(HELP_SHORT),
                false,
                HELP_MESSAGE,
            )],
            Vec::default(),
            None,
        )
    }

    pub(crate) fn terminal(
        program: String,
        about: Option<String>,
        options: Vec<OptionParameter>,
        arguments: Vec<ArgumentParameter>,
    ) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(program, about, options, arguments, terminal_width)
    }

    pub(crate) fn new(
        program: String,
        about: Option<String>,
        options: Vec<OptionParameter>,
        arguments: Vec<ArgumentParameter>,
        terminal_width: Option<usize>,
    ) -> Self {
        Self {
            program,
            about,
            options,
            arguments,
            terminal_width,
        }
    }

    pub(crate) fn program(&self) -> &str {
        &self.program
    }

    pub(crate) fn print_help(&self, user_interface: &(impl UserInterface + ?Sized)) {
        let mut summary = vec!["OPTION*".to_string()];

        for ArgumentParameter { name, arity, .. } in &self.arguments {
            summary.push(format!("{name}{}", arity.suffix()));
        }

        user_interface.print(format!(
            "Usage: {p} {s}",
            p = self.program,
            s = summary.join(" ")
        ));

        if let Some(about) = &self.about {
            let width = std::cmp::max(
                self.terminal_width.unwrap_or(DEFAULT_TERMINAL_WIDTH),
                MINIMUM_DESCRIPTION_WIDTH,
            );

            for line in wrap(about, width) {
                user_interface.print(line.trim_end_matches('\n').to_string());
            }
        }

        user_interface.print("".to_string());
        user_interface.print("Options:".to_string());
        let column_renderer = ColumnRenderer::guided(self.terminal_width);

        for ArgumentParameter { name, help, .. } in &self.arguments {
            for line in column_renderer.render(name, help) {
                user_interface.print(line);
            }
        }

        for option in &self.options {
            for line in column_renderer.render(&option.flags(), &option.help) {
                user_interface.print(line);
            }
        }

        for line in column_renderer.render(SEPARATOR, SEPARATOR_MESSAGE) {
            user_interface.print(line);
        }
    }
}
