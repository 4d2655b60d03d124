use quibble::{ArgsParser, ConfigError, OptionSpec, ProgramMetadata, Usage};

fn metadata() -> ProgramMetadata {
    ProgramMetadata::new("ColColorize")
}

fn build(specs: Vec<OptionSpec>) -> Result<ArgsParser, ConfigError> {
    ArgsParser::new(metadata(), specs)
}

#[test]
fn empty_command_name_is_rejected() {
    let result = ArgsParser::new(ProgramMetadata::new(""), Vec::new());
    assert!(matches!(result, Err(ConfigError::MissingCommandName)));

    // A display name is no substitute for the command mnemonic.
    let result = ArgsParser::new(
        ProgramMetadata::new("").display_name("Fancy Name"),
        Vec::new(),
    );
    assert!(matches!(result, Err(ConfigError::MissingCommandName)));
}

#[test]
fn empty_option_list_is_fine() {
    assert!(build(Vec::new()).is_ok());
}

#[test]
fn option_without_any_key_is_rejected() {
    let result = build(vec![OptionSpec::new().usage(Usage::Key)]);
    assert!(matches!(result, Err(ConfigError::NoKeys { .. })));

    // The missing-keys check fires before the missing-usage check.
    let result = build(vec![OptionSpec::new()]);
    assert!(matches!(result, Err(ConfigError::NoKeys { .. })));
}

#[test]
fn list_option_needs_no_keys() {
    assert!(build(vec![OptionSpec::new().usage(Usage::List)]).is_ok());
}

#[test]
fn one_character_long_key_is_rejected() {
    let result = build(vec![OptionSpec::new().long("A").usage(Usage::Key)]);
    assert!(matches!(result, Err(ConfigError::ShortLongKey { .. })));

    // It fires even when a valid short key is present, and before the
    // missing-usage check.
    let result = build(vec![OptionSpec::new().short('a').long("A")]);
    assert!(matches!(result, Err(ConfigError::ShortLongKey { .. })));
}

#[test]
fn unset_usage_is_rejected() {
    let result = build(vec![OptionSpec::new().short('a').long("A1")]);
    assert!(matches!(result, Err(ConfigError::MissingUsage { .. })));
}

#[test]
fn duplicate_short_key_names_both_options() {
    let result = build(vec![
        OptionSpec::new().short('a').long("A1").usage(Usage::Key),
        OptionSpec::new().short('a').long("A2").usage(Usage::Key),
    ]);

    match result {
        Err(ConfigError::DuplicateShortKey { key, existing, option }) => {
            assert_eq!(key, 'a');
            assert_eq!(existing.long_key(), Some("A1"));
            assert_eq!(option.long_key(), Some("A2"));
        }
        other => panic!("expected a duplicate short key error, got {other:?}"),
    }
}

#[test]
fn duplicate_long_key_names_both_options() {
    let result = build(vec![
        OptionSpec::new().short('a').long("Same").usage(Usage::Key),
        OptionSpec::new().short('b').long("Same").usage(Usage::Key),
    ]);

    match result {
        Err(ConfigError::DuplicateLongKey { key, existing, option }) => {
            assert_eq!(key, "Same");
            assert_eq!(existing.short_key(), Some('a'));
            assert_eq!(option.short_key(), Some('b'));
        }
        other => panic!("expected a duplicate long key error, got {other:?}"),
    }
}

#[test]
fn duplicate_error_message_mentions_both_declarations() {
    let error = build(vec![
        OptionSpec::new().short('a').long("First").usage(Usage::Key),
        OptionSpec::new().short('a').long("Second").usage(Usage::Key),
    ])
    .unwrap_err();

    let message = error.to_string();
    assert!(message.contains("First"), "missing first spec: {message}");
    assert!(message.contains("Second"), "missing second spec: {message}");
}

#[test]
fn second_list_option_is_rejected() {
    let result = build(vec![
        OptionSpec::new().usage(Usage::List),
        OptionSpec::new().usage(Usage::List),
    ]);
    assert!(matches!(result, Err(ConfigError::SecondList { .. })));
}

#[test]
fn a_full_declaration_set_builds() {
    let result = build(vec![
        OptionSpec::new()
            .short('b')
            .long("Set-Background")
            .usage(Usage::KeyValue)
            .repeatable(true)
            .description("Sets the background colour."),
        OptionSpec::new()
            .short('t')
            .long("Set-Text")
            .usage(Usage::KeyValue),
        OptionSpec::new()
            .long("Use-Defaults")
            .usage(Usage::Key)
            .exclusive(true),
        OptionSpec::new().usage(Usage::List),
    ]);
    assert!(result.is_ok());
}

#[test]
fn overlong_long_key_fails_at_render_time() {
    // 39 characters still fits the widest key column; 40 does not.
    let result = build(vec![
        OptionSpec::new().long("K".repeat(39)).usage(Usage::Key),
    ]);
    assert!(result.is_ok());

    let result = build(vec![
        OptionSpec::new().long("K".repeat(40)).usage(Usage::Key),
    ]);
    assert!(matches!(result, Err(ConfigError::LongKeyTooWide { .. })));
}
