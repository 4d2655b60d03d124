/*!
The accumulated results of one parse: a [`ReceivedArgument`] per option that
actually appeared, queryable through [`Matches`] by option identity, by short
key, or by long key. Every lookup route for the same option resolves to the
same `ReceivedArgument`, so identity comparisons by callers hold regardless
of which key form they query with.
*/

use crate::option::OptionSpec;
use crate::registry::OptionRegistry;

/**
Everything received for one option: the owning spec and the values in input
order, one entry per occurrence. Occurrences of a bare-key option contribute
an empty string each, so `values().len()` is always the occurrence count.
Values are stored exactly as they arrived; nothing is trimmed or coerced.
*/
#[derive(Debug, Clone)]
pub struct ReceivedArgument<'a> {
    spec: &'a OptionSpec,
    values: Vec<String>,
}

impl<'a> ReceivedArgument<'a> {
    pub(crate) fn new(spec: &'a OptionSpec) -> Self {
        Self {
            spec,
            values: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, value: String) {
        self.values.push(value);
    }

    #[must_use]
    pub fn spec(&self) -> &'a OptionSpec {
        self.spec
    }

    /// All received values, in input order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The first received value. For a bare-key option this is `Some("")`.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// How many times the option appeared.
    #[must_use]
    pub fn count(&self) -> usize {
        self.values.len()
    }
}

/// The read-only query surface over one parse invocation.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    registry: &'a OptionRegistry,
    received: Vec<Option<ReceivedArgument<'a>>>,
}

impl<'a> Matches<'a> {
    pub(crate) fn new(registry: &'a OptionRegistry) -> Self {
        Self {
            registry,
            received: registry.specs().iter().map(|_| None).collect(),
        }
    }

    /// Append a value for the spec at `index`, creating its argument on the
    /// first occurrence.
    pub(crate) fn record(&mut self, index: usize, value: String) {
        let spec = &self.registry.specs()[index];
        self.received[index]
            .get_or_insert_with(|| ReceivedArgument::new(spec))
            .push(value);
    }

    pub(crate) fn get(&self, index: usize) -> Option<&ReceivedArgument<'a>> {
        self.received[index].as_ref()
    }

    pub(crate) fn occurrences(&self, index: usize) -> usize {
        self.received[index].as_ref().map_or(0, ReceivedArgument::count)
    }

    /// Whether the given option appeared at all.
    #[must_use]
    pub fn is_passed(&self, spec: &OptionSpec) -> bool {
        self.result(spec).is_some()
    }

    /// Presence by either key form: a long key, or a single-character short
    /// key given as a one-character string.
    #[must_use]
    pub fn is_key_passed(&self, key: &str) -> bool {
        self.result_for_key(key).is_some()
    }

    #[must_use]
    pub fn is_short_passed(&self, key: char) -> bool {
        self.short_result(key).is_some()
    }

    #[must_use]
    pub fn is_long_passed(&self, key: &str) -> bool {
        self.long_result(key).is_some()
    }

    /// The result for an option, looked up by identity.
    #[must_use]
    pub fn result(&self, spec: &OptionSpec) -> Option<&ReceivedArgument<'a>> {
        self.registry.index_of(spec).and_then(|index| self.get(index))
    }

    /// The result for either key form, as [`is_key_passed`](Self::is_key_passed).
    #[must_use]
    pub fn result_for_key(&self, key: &str) -> Option<&ReceivedArgument<'a>> {
        self.registry.lookup(key).and_then(|index| self.get(index))
    }

    #[must_use]
    pub fn short_result(&self, key: char) -> Option<&ReceivedArgument<'a>> {
        self.result_for_key(key.to_string().as_str())
    }

    #[must_use]
    pub fn long_result(&self, key: &str) -> Option<&ReceivedArgument<'a>> {
        self.result_for_key(key)
            .filter(|argument| argument.spec().long_key() == Some(key))
    }

    /// The result for the positional list option, if one was declared and
    /// received any values.
    #[must_use]
    pub fn list_result(&self) -> Option<&ReceivedArgument<'a>> {
        self.registry.list_index().and_then(|index| self.get(index))
    }

    /// Every option that appeared, in declaration order.
    pub fn passed(&self) -> impl Iterator<Item = &ReceivedArgument<'a>> {
        self.received.iter().flatten()
    }
}
