/*!
The parse entry point and the token state machine.

The machine is small but the corners are sharp: a short-form key-value pair
arrives split across two tokens, long-form pairs arrive glued with `=`, the
same option may resolve through either key, and once the positional list
starts it swallows every remaining token no matter what it looks like. The
engine tracks one of two states per token, `ExpectingKey` or
`ExpectingValue`, plus the last completed argument for diagnostics.
*/

use tracing::{debug, trace};

use crate::errors::{ConfigError, ParseError, ParseErrorKind};
use crate::help::HELP_KEYS;
use crate::option::{OptionSpec, ProgramMetadata, Usage};
use crate::registry::OptionRegistry;
use crate::results::Matches;

/**
The outcome of one parse invocation.

A reserved help flag anywhere in the input wins over every other validation,
including malformed tokens before it, and produces [`Help`](Self::Help) with
the pre-rendered text. Printing it and exiting is the caller's decision; the
parser itself never touches the process.
*/
#[derive(Debug)]
pub enum ParseOutcome<'a> {
    /// A reserved help flag was present; carries the rendered help text.
    Help(&'a str),

    /// The input parsed cleanly.
    Args(Matches<'a>),
}

impl<'a> ParseOutcome<'a> {
    #[must_use]
    pub fn is_help(&self) -> bool {
        matches!(self, Self::Help(_))
    }

    /// The matches, unless help was requested.
    #[must_use]
    pub fn args(self) -> Option<Matches<'a>> {
        match self {
            Self::Help(_) => None,
            Self::Args(matches) => Some(matches),
        }
    }
}

/**
A validated parser, ready to be handed the raw argument vector (excluding the
program's own invocation name). Construction validates the declarations and
pre-renders the help text; parsing itself keeps no state on `self`, so one
parser can serve any number of [`parse`](Self::parse) calls.
*/
#[derive(Debug, Clone)]
pub struct ArgsParser {
    registry: OptionRegistry,
    verbose_errors: bool,
}

impl ArgsParser {
    pub fn new(
        metadata: ProgramMetadata,
        specs: Vec<OptionSpec>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            registry: OptionRegistry::new(metadata, specs)?,
            verbose_errors: true,
        })
    }

    /// Control whether parse errors capture verbose diagnostic context
    /// (the offending declaration, the last completed argument). On by
    /// default; production builds may want it off.
    #[must_use]
    pub fn verbose_errors(mut self, enabled: bool) -> Self {
        self.verbose_errors = enabled;
        self
    }

    #[must_use]
    pub fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    /// The help text rendered at construction time.
    #[must_use]
    pub fn help_text(&self) -> &str {
        self.registry.help_text()
    }

    /// Parse a token list. An empty input always succeeds with no results.
    pub fn parse<I>(&self, tokens: I) -> Result<ParseOutcome<'_>, ParseError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();

        // The help check comes before everything else, even before malformed
        // tokens earlier in the list.
        if tokens
            .iter()
            .any(|token| HELP_KEYS.contains(&token.as_str()))
        {
            debug!("help flag found, short-circuiting the parse");
            return Ok(ParseOutcome::Help(self.registry.help_text()));
        }

        let mut engine = Engine::new(&self.registry, self.verbose_errors);
        for token in &tokens {
            engine.feed(token)?;
        }
        let matches = engine.finish()?;

        debug!(tokens = tokens.len(), "parse complete");
        Ok(ParseOutcome::Args(matches))
    }
}

#[derive(Debug, Clone, Copy)]
enum State {
    ExpectingKey,
    ExpectingValue { owner: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dash {
    Single,
    Double,
}

struct Engine<'a> {
    registry: &'a OptionRegistry,
    matches: Matches<'a>,
    state: State,
    /// Set once the positional list starts receiving values; never cleared.
    active_list: Option<usize>,
    last_completed: Option<usize>,
    verbose: bool,
}

impl<'a> Engine<'a> {
    fn new(registry: &'a OptionRegistry, verbose: bool) -> Self {
        Self {
            registry,
            matches: Matches::new(registry),
            state: State::ExpectingKey,
            active_list: None,
            last_completed: None,
            verbose,
        }
    }

    fn feed(&mut self, token: &str) -> Result<(), ParseError> {
        trace!(token, "processing token");

        // Once the list has started, everything belongs to it, dashes and
        // all, until the input ends.
        if let Some(index) = self.active_list {
            self.matches.record(index, token.to_owned());
            return Ok(());
        }

        match self.state {
            State::ExpectingValue { owner } => self.value_token(owner, token),
            State::ExpectingKey => {
                if let Some(body) = token.strip_prefix("--") {
                    self.key_token(body, Dash::Double)
                } else if let Some(body) = token.strip_prefix('-') {
                    self.key_token(body, Dash::Single)
                } else {
                    self.positional_token(token)
                }
            }
        }
    }

    fn value_token(&mut self, owner: usize, token: &str) -> Result<(), ParseError> {
        if token.starts_with('-') {
            // A registered key in value position gets the more pointed error;
            // anything else dash-shaped is just a malformed value.
            let body = token.trim_start_matches('-');
            let key = body.split_once('=').map_or(body, |(key, _)| key);
            let kind = match self.registry.lookup(key) {
                Some(_) => ParseErrorKind::KeyWhileValueExpected { key: key.to_owned() },
                None => ParseErrorKind::MalformedValue {
                    token: token.to_owned(),
                },
            };
            let error = ParseError::new(kind);
            return Err(match self.last_argument_context() {
                Some(context) => error.with_context(context),
                None => error,
            });
        }

        self.matches.record(owner, token.to_owned());
        self.last_completed = Some(owner);
        self.state = State::ExpectingKey;
        Ok(())
    }

    fn positional_token(&mut self, token: &str) -> Result<(), ParseError> {
        match self.registry.list_index() {
            None => Err(ParseError::new(ParseErrorKind::KeyExpected {
                token: token.to_owned(),
            })),
            Some(index) => {
                trace!("first positional value, list mode begins");
                self.matches.record(index, token.to_owned());
                self.active_list = Some(index);
                Ok(())
            }
        }
    }

    fn key_token(&mut self, body: &str, dash: Dash) -> Result<(), ParseError> {
        let (key, value) = match body.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (body, None),
        };

        let Some(index) = self.registry.lookup(key) else {
            return Err(ParseError::new(ParseErrorKind::UnknownKey {
                token: body.to_owned(),
            }));
        };
        let spec = &self.registry.specs()[index];

        // Dash-count cross-checks run against the key the token actually
        // resolved to, which is the only way to catch a mistaken dash count
        // once the key is already matched.
        let matched_long = spec.long_key() == Some(key);
        match dash {
            Dash::Single if matched_long => {
                return Err(self.spec_error(
                    ParseErrorKind::LongKeySingleDash { key: key.to_owned() },
                    spec,
                ));
            }
            Dash::Double if !matched_long => {
                return Err(self.spec_error(
                    ParseErrorKind::ShortKeyDoubleDash { key: key.to_owned() },
                    spec,
                ));
            }
            _ => {}
        }

        if self.matches.occurrences(index) > 0 && !spec.is_repeatable() {
            return Err(self.spec_error(
                ParseErrorKind::Repeated {
                    key: spec.display_key(),
                },
                spec,
            ));
        }

        match self.registry.usage_of(index) {
            Usage::List => Err(self.spec_error(
                ParseErrorKind::ListKeyed { key: key.to_owned() },
                spec,
            )),

            Usage::Key => {
                if value.is_some() {
                    return Err(self.spec_error(
                        ParseErrorKind::KeyTakesNoValue { key: key.to_owned() },
                        spec,
                    ));
                }
                self.matches.record(index, String::new());
                self.last_completed = Some(index);
                Ok(())
            }

            Usage::KeyValue => match dash {
                Dash::Double => match value {
                    Some(value) => {
                        self.matches.record(index, value.to_owned());
                        self.last_completed = Some(index);
                        Ok(())
                    }
                    None => Err(self.spec_error(
                        ParseErrorKind::MissingValue { key: key.to_owned() },
                        spec,
                    )),
                },
                Dash::Single => {
                    if value.is_some() {
                        return Err(self.spec_error(
                            ParseErrorKind::ShortKeyWithEquals { key: key.to_owned() },
                            spec,
                        ));
                    }
                    self.state = State::ExpectingValue { owner: index };
                    Ok(())
                }
            },
        }
    }

    fn finish(self) -> Result<Matches<'a>, ParseError> {
        if let State::ExpectingValue { owner } = self.state {
            let spec = &self.registry.specs()[owner];
            return Err(self.spec_error(
                ParseErrorKind::UnfinishedValue {
                    key: spec.display_key(),
                },
                spec,
            ));
        }
        Ok(self.matches)
    }

    fn spec_error(&self, kind: ParseErrorKind, spec: &OptionSpec) -> ParseError {
        let error = ParseError::new(kind);
        match self.verbose {
            true => error.with_context(format!("option: {spec:?}")),
            false => error,
        }
    }

    fn last_argument_context(&self) -> Option<String> {
        if !self.verbose {
            return None;
        }
        self.last_completed
            .and_then(|index| self.matches.get(index))
            .map(|argument| format!("last argument: {argument:?}"))
    }
}
