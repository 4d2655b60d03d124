/*!
Value objects describing the accepted command line: one [`OptionSpec`] per
accepted argument, plus one [`ProgramMetadata`] for the overall program
identity. Both are configured with chainable consuming setters and are never
mutated again once handed to a registry.
*/

/// How an option combines with the tokens around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Usage {
    /// A bare key with no value: `-k` or `--Key-Word`.
    Key,

    /// A key with exactly one value: `-k value` or `--Key-Word=value`.
    KeyValue,

    /// A space delimited list of values at the end of the command. At most
    /// one list option may exist per registry, and it is addressed by
    /// position rather than by key.
    List,
}

/**
The declaration of a single accepted argument.

The supported forms, selected by [`Usage`], are:

1. `-k`
2. `--Key-Word`
3. `-k value`
4. `--Key-Word=value`
5. `... values...` (the trailing list)

Here the short key is `k` and the long key is `Key-Word`. The description and
the example strings only feed the generated help; the examples fall back to
`{value}` placeholders when not set.

Three keys are reserved: `-h`, `--help` and `--Help` print the help and stop
all further processing.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSpec {
    pub(crate) short: Option<char>,
    pub(crate) long: Option<String>,
    pub(crate) usage: Option<Usage>,
    pub(crate) repeatable: bool,
    pub(crate) exclusive: bool,
    pub(crate) description: String,
    pub(crate) short_example: Option<String>,
    pub(crate) long_example: Option<String>,
    pub(crate) list_example: Option<String>,
}

const VALUE_PLACEHOLDER: &str = "{value}";
const LIST_PLACEHOLDER: &str = "{value} {value} {value}";

impl OptionSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the single-character short key.
    #[must_use]
    pub fn short(mut self, key: char) -> Self {
        self.short = Some(key);
        self
    }

    /// Set the long key. Long keys must be at least 2 characters; the
    /// registry rejects shorter ones.
    #[must_use]
    pub fn long(mut self, key: impl Into<String>) -> Self {
        self.long = Some(key.into());
        self
    }

    /// Set the usage kind. The registry rejects specs that never set one.
    #[must_use]
    pub fn usage(mut self, usage: Usage) -> Self {
        self.usage = Some(usage);
        self
    }

    /// Allow the option to appear more than once on the command line.
    #[must_use]
    pub fn repeatable(mut self, repeatable: bool) -> Self {
        self.repeatable = repeatable;
        self
    }

    /// Mark the option as meant to be used on its own. This only changes how
    /// the help examples are phrased; it is not enforced during parsing.
    #[must_use]
    pub fn exclusive(mut self, exclusive: bool) -> Self {
        self.exclusive = exclusive;
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Example value shown after the short key in the generated help.
    #[must_use]
    pub fn short_example(mut self, example: impl Into<String>) -> Self {
        self.short_example = Some(example.into());
        self
    }

    /// Example value shown after `--Long-Key=` in the generated help.
    #[must_use]
    pub fn long_example(mut self, example: impl Into<String>) -> Self {
        self.long_example = Some(example.into());
        self
    }

    /// Example list shown for a list option in the generated help.
    #[must_use]
    pub fn list_example(mut self, example: impl Into<String>) -> Self {
        self.list_example = Some(example.into());
        self
    }

    #[must_use]
    pub fn short_key(&self) -> Option<char> {
        self.short
    }

    #[must_use]
    pub fn long_key(&self) -> Option<&str> {
        self.long.as_deref()
    }

    #[must_use]
    pub fn usage_kind(&self) -> Option<Usage> {
        self.usage
    }

    #[must_use]
    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    #[must_use]
    pub fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    pub(crate) fn short_example_text(&self) -> &str {
        self.short_example.as_deref().unwrap_or(VALUE_PLACEHOLDER)
    }

    pub(crate) fn long_example_text(&self) -> &str {
        self.long_example.as_deref().unwrap_or(VALUE_PLACEHOLDER)
    }

    pub(crate) fn list_example_text(&self) -> &str {
        self.list_example.as_deref().unwrap_or(LIST_PLACEHOLDER)
    }

    /// The most recognizable key form, for diagnostics.
    pub(crate) fn display_key(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) => format!("--{long}"),
            (None, Some(short)) => format!("-{short}"),
            (None, None) => "the list argument".to_owned(),
        }
    }
}

/**
The program identity used by the generated help: the command mnemonic, an
optional display name (the command mnemonic is used when unset), and optional
description, author and version lines.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramMetadata {
    pub(crate) command: String,
    pub(crate) display_name: String,
    pub(crate) description: String,
    pub(crate) author: String,
    pub(crate) version: String,
}

impl ProgramMetadata {
    /// `command` is the mnemonic used to invoke the program; it appears in
    /// every generated example. The registry rejects an empty one.
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Self::default()
        }
    }

    /// Human-readable name for the help title box.
    #[must_use]
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The name shown in the help title box.
    #[must_use]
    pub fn title(&self) -> &str {
        match self.display_name.is_empty() {
            true => &self.command,
            false => &self.display_name,
        }
    }
}
