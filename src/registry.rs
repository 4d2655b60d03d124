/*!
The option registry: validates a collection of [`OptionSpec`]s once, builds
the key namespace used for parse-time lookup, and pre-renders the help text.
Everything in here is immutable after construction and safe to share
read-only across any number of parses.
*/

use std::collections::HashMap;

use tracing::debug;

use crate::errors::ConfigError;
use crate::help;
use crate::option::{OptionSpec, ProgramMetadata, Usage};

/**
A validated set of option declarations.

Short keys and long keys live in a single namespace: every declared short-key
string and long-key string maps to its spec, which is what makes duplicate
detection and parse-time lookup a single hash probe. The help text is
rendered once, here, and never changes for the registry's lifetime.
*/
#[derive(Debug, Clone)]
pub struct OptionRegistry {
    metadata: ProgramMetadata,
    specs: Vec<OptionSpec>,
    usages: Vec<Usage>,
    keys: HashMap<String, usize>,
    list_index: Option<usize>,
    help: String,
}

impl OptionRegistry {
    pub fn new(
        metadata: ProgramMetadata,
        specs: Vec<OptionSpec>,
    ) -> Result<Self, ConfigError> {
        if metadata.command.is_empty() {
            return Err(ConfigError::MissingCommandName);
        }

        let mut keys: HashMap<String, usize> = HashMap::new();
        let mut usages = Vec::with_capacity(specs.len());
        let mut list_index: Option<usize> = None;

        for (index, spec) in specs.iter().enumerate() {
            let usage = validate_spec(spec, &specs, &keys)?;

            if usage == Usage::List {
                if let Some(existing) = list_index {
                    return Err(ConfigError::SecondList {
                        existing: specs[existing].clone(),
                        option: spec.clone(),
                    });
                }
                list_index = Some(index);
            }

            if let Some(short) = spec.short {
                keys.insert(short.to_string(), index);
            }
            if let Some(long) = &spec.long {
                keys.insert(long.clone(), index);
            }

            usages.push(usage);
        }

        let help = help::render(&metadata, &specs)?;

        debug!(options = specs.len(), "built option registry");

        Ok(Self {
            metadata,
            specs,
            usages,
            keys,
            list_index,
            help,
        })
    }

    #[must_use]
    pub fn metadata(&self) -> &ProgramMetadata {
        &self.metadata
    }

    #[must_use]
    pub fn specs(&self) -> &[OptionSpec] {
        &self.specs
    }

    /// The help text rendered at construction time.
    #[must_use]
    pub fn help_text(&self) -> &str {
        &self.help
    }

    /// Resolve a short-key string or long-key string to its spec index.
    pub(crate) fn lookup(&self, key: &str) -> Option<usize> {
        self.keys.get(key).copied()
    }

    pub(crate) fn usage_of(&self, index: usize) -> Usage {
        self.usages[index]
    }

    pub(crate) fn list_index(&self) -> Option<usize> {
        self.list_index
    }

    pub(crate) fn index_of(&self, spec: &OptionSpec) -> Option<usize> {
        self.specs.iter().position(|candidate| candidate == spec)
    }
}

fn validate_spec(
    spec: &OptionSpec,
    specs: &[OptionSpec],
    keys: &HashMap<String, usize>,
) -> Result<Usage, ConfigError> {
    if spec.short.is_none() && spec.long.is_none() && spec.usage != Some(Usage::List) {
        return Err(ConfigError::NoKeys {
            option: spec.clone(),
        });
    }

    if let Some(long) = &spec.long
        && long.chars().count() == 1
    {
        return Err(ConfigError::ShortLongKey {
            option: spec.clone(),
        });
    }

    let usage = spec.usage.ok_or_else(|| ConfigError::MissingUsage {
        option: spec.clone(),
    })?;

    if let Some(short) = spec.short
        && let Some(&existing) = keys.get(short.to_string().as_str())
    {
        return Err(ConfigError::DuplicateShortKey {
            key: short,
            existing: specs[existing].clone(),
            option: spec.clone(),
        });
    }

    if let Some(long) = &spec.long
        && let Some(&existing) = keys.get(long.as_str())
    {
        return Err(ConfigError::DuplicateLongKey {
            key: long.clone(),
            existing: specs[existing].clone(),
            option: spec.clone(),
        });
    }

    Ok(usage)
}
