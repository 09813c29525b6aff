/// The cardinality of tokens matched by a positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Precisely one value; required.
    One,
    /// `?`: Zero or one value.
    ZeroOrOne,
    /// `*`: May be any number of values, including `0`.
    ZeroOrMore,
    /// `+`: At least one value must be specified.
    OneOrMore,
}

impl Arity {
    /// Whether this arity keeps accepting tokens once matched.
    pub fn is_variadic(&self) -> bool {
        matches!(self, Arity::ZeroOrMore | Arity::OneOrMore)
    }

    /// Whether at least one token must be matched.
    pub fn is_required(&self) -> bool {
        matches!(self, Arity::One | Arity::OneOrMore)
    }

    /// The suffix used to describe this arity in the usage summary.
    pub fn suffix(&self) -> &'static str {
        match self {
            Arity::One => "",
            Arity::ZeroOrOne => "?",
            Arity::ZeroOrMore => "*",
            Arity::OneOrMore => "+",
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
