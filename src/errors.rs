/*!
Error types for the two failure domains: mistakes in the declared options
(a programmer problem, fatal at startup) and mistakes in the parsed input
(a user problem, reported with a hint towards the help flags).
*/

use core::fmt;

use thiserror::Error;

use crate::option::OptionSpec;

/// The hint appended to every parse error.
pub const HELP_HINT: &str = "Use -h, --help or --Help for help.";

/**
A mistake in the declared options or program metadata, raised while building
the registry or while rendering the help text. These are not expected to be
caught and recovered at runtime.
*/
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("the command mnemonic/name must be set")]
    MissingCommandName,

    #[error("neither a short nor a long key was provided\noption: {option:?}")]
    NoKeys { option: OptionSpec },

    #[error("long keys must be at least 2 characters\noption: {option:?}")]
    ShortLongKey { option: OptionSpec },

    #[error("the usage of an option must be set\noption: {option:?}")]
    MissingUsage { option: OptionSpec },

    #[error("two options share the short key -{key}\nfirst: {existing:?}\nsecond: {option:?}")]
    DuplicateShortKey {
        key: char,
        existing: OptionSpec,
        option: OptionSpec,
    },

    #[error("two options share the long key --{key}\nfirst: {existing:?}\nsecond: {option:?}")]
    DuplicateLongKey {
        key: String,
        existing: OptionSpec,
        option: OptionSpec,
    },

    #[error("more than one list option was declared\nfirst: {existing:?}\nsecond: {option:?}")]
    SecondList {
        existing: OptionSpec,
        option: OptionSpec,
    },

    #[error("the long key --{key} is too wide for the help layout")]
    LongKeyTooWide { key: String },
}

/// The specific way a token list failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("a key was expected, check for stray spaces\nreceived: {token}")]
    KeyExpected { token: String },

    #[error("key could not be found\nbad key: {token}")]
    UnknownKey { token: String },

    #[error("the long key --{key} needs a double dash")]
    LongKeySingleDash { key: String },

    #[error("the short key -{key} must not be used with a double dash")]
    ShortKeyDoubleDash { key: String },

    #[error("received the key {key} while a value was still expected")]
    KeyWhileValueExpected { key: String },

    #[error("the argument {key} was used more than once but is not repeatable")]
    Repeated { key: String },

    #[error("the key {key} does not take a value, format: ... --key ...")]
    KeyTakesNoValue { key: String },

    #[error("the key --{key} was used without its value, format: ... --key=value ...")]
    MissingValue { key: String },

    #[error("short keys take their value as the next token, format: ... -k value ...")]
    ShortKeyWithEquals { key: String },

    #[error("list values are positional and are not given by key\nkey: {key}")]
    ListKeyed { key: String },

    #[error(
        "expected a value, got a key; look for spaces and check whether the key accepts a value\n\
         malformed value: {token}"
    )]
    MalformedValue { token: String },

    #[error("the input ended while a value was still expected for {key}")]
    UnfinishedValue { key: String },
}

/**
A mistake in the user's input, raised during token parsing.

Carries a [`kind`](ParseError::kind) describing the failure and, when the
parser's verbose-error capture is enabled (the default), a diagnostic
[`context`](ParseError::context) naming the option or last completed argument
involved. The rendered message always ends with [`HELP_HINT`].
*/
#[derive(Debug, Clone)]
pub struct ParseError {
    kind: ParseErrorKind,
    context: Option<String>,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    pub(crate) fn with_context(mut self, context: String) -> Self {
        self.context = Some(context);
        self
    }

    #[must_use]
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Verbose diagnostic detail, absent when capture is disabled.
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(context) = &self.context {
            write!(f, "\n{context}")?;
        }
        write!(f, "\n{HELP_HINT}")
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
