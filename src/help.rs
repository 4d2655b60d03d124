/*!
Help text rendering: a pure function of the program metadata and the option
list, computed once when the registry is built.

All measurements are mono-font cells. The layout is a fixed 100-cell line: a
framed title box, optional description and author/version lines, then one
block per option. Each block is a key column padded to a fixed width with a
word-wrapped info column to its right (description, a usage sentence, and
example lines built from the command mnemonic). The reserved help flags come
first; the list option, if any, always comes last behind an extra blank line.
*/

use joinery::JoinableIterator;
use lazy_format::lazy_format;
use textwrap::{Options, WordSplitter, WrapAlgorithm};

use crate::errors::ConfigError;
use crate::option::{OptionSpec, ProgramMetadata, Usage};

const LINE_WIDTH: usize = 100;
const NAME_MARGIN: usize = 5;
const BASE_KEY_COLUMN: usize = 40;
const EXTRA_KEY_SPACE: usize = 10;
const LEFT_MARGIN: usize = 2;
const KEY_DESCRIPTION_GAP: usize = 3;

const LIST_KEY: &str = "[SPACE DELIMITED LIST]";
const LIST_USAGE: &str = "List, a space delimited list of values at the end of the command.";
const EXAMPLE_PREFIX: &str = "Example: ";
const HELP_DESCRIPTION: &str = "Use to print this help.";

/// The reserved keys that print the help and stop all further processing.
pub const HELP_KEYS: [&str; 3] = ["-h", "--help", "--Help"];

/// Render the full help text, one newline-terminated line at a time.
pub(crate) fn render(
    metadata: &ProgramMetadata,
    specs: &[OptionSpec],
) -> Result<String, ConfigError> {
    let mut lines = Vec::new();

    title_box(&mut lines, metadata);
    program_description(&mut lines, metadata);
    program_detail(&mut lines, metadata);
    help_flags_block(&mut lines, metadata);

    let list = specs
        .iter()
        .find(|spec| spec.usage == Some(Usage::List));

    for spec in specs {
        if spec.usage != Some(Usage::List) {
            option_block(&mut lines, metadata, spec)?;
        }
    }

    // The list block always goes last, behind an extra separating line.
    if let Some(spec) = list {
        lines.push(String::new());
        option_block(&mut lines, metadata, spec)?;
    }

    let mut text = String::with_capacity(lines.iter().map(|line| line.len() + 1).sum());
    for line in lines {
        text.push_str(&line);
        text.push('\n');
    }
    Ok(text)
}

/// Greedy space-delimited wrapping: words join a line while the joined
/// length plus one separating space stays within `width`; overlong words are
/// left whole on their own line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let options = Options::new(width)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .word_splitter(WordSplitter::NoHyphenation)
        .break_words(false);

    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

fn title_box(lines: &mut Vec<String>, metadata: &ProgramMetadata) {
    let name_space = LINE_WIDTH - NAME_MARGIN * 2;

    lines.push("=".repeat(LINE_WIDTH));
    for line in wrap(metadata.title(), name_space) {
        lines.push(center_in_rule(&line));
    }
    lines.push("=".repeat(LINE_WIDTH));
}

fn center_in_rule(line: &str) -> String {
    let length = line.chars().count();
    let left = (LINE_WIDTH.saturating_sub(length)) / 2;
    let right = LINE_WIDTH.saturating_sub(length + left);

    format!(
        "{} {line} {}",
        "=".repeat(left.saturating_sub(1)),
        "=".repeat(right.saturating_sub(1)),
    )
}

fn program_description(lines: &mut Vec<String>, metadata: &ProgramMetadata) {
    if !metadata.description.is_empty() {
        lines.extend(wrap(&metadata.description, LINE_WIDTH));
    }
}

/// `By {author}, version {version}.` with either half independently
/// omittable; the punctuation adjusts to whichever halves are present.
fn program_detail(lines: &mut Vec<String>, metadata: &ProgramMetadata) {
    let author = &metadata.author;
    let version = &metadata.version;

    let mut detail = String::new();

    if !author.is_empty() {
        detail.push_str("By ");
        detail.push_str(author);
        detail.push_str(if version.is_empty() { "." } else { ", " });
    }

    if !version.is_empty() {
        detail.push_str(if author.is_empty() { "Version " } else { "version " });
        detail.push_str(version);
        detail.push('.');
    }

    if !detail.is_empty() {
        lines.extend(wrap(&detail, LINE_WIDTH));
    }
}

fn help_flags_block(lines: &mut Vec<String>, metadata: &ProgramMetadata) {
    lines.push(String::new());

    let column = pad_key_column(format!(
        "{}{}",
        " ".repeat(LEFT_MARGIN),
        HELP_KEYS.iter().join_with(", "),
    ));
    let width = LINE_WIDTH - column.chars().count();

    let mut info = wrap(HELP_DESCRIPTION, width);
    info.extend(wrap(
        &format!("{EXAMPLE_PREFIX}{} -h", metadata.command),
        width,
    ));

    merge_block(lines, column, info);
}

fn option_block(
    lines: &mut Vec<String>,
    metadata: &ProgramMetadata,
    spec: &OptionSpec,
) -> Result<(), ConfigError> {
    let usage = spec.usage.ok_or_else(|| ConfigError::MissingUsage {
        option: spec.clone(),
    })?;

    lines.push(String::new());

    let column = key_column(spec, usage)?;
    let width = LINE_WIDTH - column.chars().count();

    let mut info = Vec::new();
    if !spec.description.is_empty() {
        info.extend(wrap(&spec.description, width));
    }
    info.extend(wrap(&usage_sentence(spec, usage), width));
    examples(&mut info, metadata, spec, usage, width);

    merge_block(lines, column, info);
    Ok(())
}

/// The key column: `  -x, --Long-Key   ` padded out to the base column
/// width. A long long-key may stretch the column up to a bounded maximum,
/// past which the declaration is unrenderable.
fn key_column(spec: &OptionSpec, usage: Usage) -> Result<String, ConfigError> {
    if usage == Usage::List {
        return Ok(pad_key_column(format!(
            "{}{LIST_KEY}",
            " ".repeat(LEFT_MARGIN)
        )));
    }

    let mut column = match spec.short {
        Some(short) => format!("{}-{short}, ", " ".repeat(LEFT_MARGIN)),
        None => " ".repeat(LEFT_MARGIN + "-x, ".len()),
    };

    if let Some(long) = &spec.long {
        column.push_str("--");
        column.push_str(long);
        column.push_str(&" ".repeat(KEY_DESCRIPTION_GAP));

        if column.chars().count() > BASE_KEY_COLUMN + EXTRA_KEY_SPACE {
            return Err(ConfigError::LongKeyTooWide { key: long.clone() });
        }
    }

    Ok(pad_key_column(column))
}

fn pad_key_column(mut column: String) -> String {
    while column.chars().count() < BASE_KEY_COLUMN {
        column.push(' ');
    }
    column
}

fn usage_sentence(spec: &OptionSpec, usage: Usage) -> String {
    let base = match usage {
        Usage::Key => "Key",
        Usage::KeyValue => "Key-value pair",
        Usage::List => return format!("Usage: {LIST_USAGE}"),
    };

    let mut sentence = format!("Usage: {base}");
    if spec.repeatable {
        sentence.push_str(", Repeatable");
    }
    if spec.exclusive {
        sentence.push_str(", Exclusive");
    }
    sentence.push('.');
    sentence
}

/// One example line per declared key form, built from the command mnemonic.
/// Exclusive options drop the surrounding `...` since nothing else belongs
/// on their command line.
fn examples(
    info: &mut Vec<String>,
    metadata: &ProgramMetadata,
    spec: &OptionSpec,
    usage: Usage,
    width: usize,
) {
    let command = &metadata.command;
    let lead = if spec.exclusive { " " } else { " ... " };
    let trail = if spec.exclusive { "" } else { " ..." };

    if usage == Usage::List {
        let example = spec.list_example_text();
        info.extend(wrap(&format!("{EXAMPLE_PREFIX}{command}{lead}{example}"), width));
        return;
    }

    if let Some(short) = spec.short {
        let body = lazy_format!(match (usage) {
            Usage::KeyValue => ("-{short} {example}", example = spec.short_example_text()),
            _ => "-{short}",
        });
        info.extend(wrap(
            &format!("{EXAMPLE_PREFIX}{command}{lead}{body}{trail}"),
            width,
        ));
    }

    if let Some(long) = &spec.long {
        let body = lazy_format!(match (usage) {
            Usage::KeyValue => ("--{long}={example}", example = spec.long_example_text()),
            _ => "--{long}",
        });
        info.extend(wrap(
            &format!("{EXAMPLE_PREFIX}{command}{lead}{body}{trail}"),
            width,
        ));
    }
}

/// Attach the info column to the key column: the first info line rides on
/// the key line, the rest are indented to the column width.
fn merge_block(lines: &mut Vec<String>, column: String, info: Vec<String>) {
    let indent = " ".repeat(column.chars().count());
    let mut info = info.into_iter();

    match info.next() {
        None => lines.push(column),
        Some(first) => {
            lines.push(format!("{column}{first}"));
            lines.extend(info.map(|line| format!("{indent}{line}")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_line_punctuation() {
        let mut lines = Vec::new();
        program_detail(
            &mut lines,
            &ProgramMetadata::new("prog").author("Ada").version("2.1"),
        );
        assert_eq!(lines, ["By Ada, version 2.1."]);

        let mut lines = Vec::new();
        program_detail(&mut lines, &ProgramMetadata::new("prog").author("Ada"));
        assert_eq!(lines, ["By Ada."]);

        let mut lines = Vec::new();
        program_detail(&mut lines, &ProgramMetadata::new("prog").version("2.1"));
        assert_eq!(lines, ["Version 2.1."]);

        let mut lines = Vec::new();
        program_detail(&mut lines, &ProgramMetadata::new("prog"));
        assert!(lines.is_empty());
    }

    #[test]
    fn title_lines_are_full_width() {
        let mut lines = Vec::new();
        title_box(&mut lines, &ProgramMetadata::new("prog").display_name("Name"));

        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert_eq!(line.chars().count(), LINE_WIDTH);
        }
        assert!(lines[1].contains(" Name "));
    }

    #[test]
    fn key_column_width_limit() {
        let widest = OptionSpec::new().long("K".repeat(39)).usage(Usage::Key);
        let column = key_column(&widest, Usage::Key).unwrap();
        assert_eq!(column.chars().count(), BASE_KEY_COLUMN + EXTRA_KEY_SPACE);

        let too_wide = OptionSpec::new().long("K".repeat(40)).usage(Usage::Key);
        assert!(matches!(
            key_column(&too_wide, Usage::Key),
            Err(ConfigError::LongKeyTooWide { .. })
        ));
    }

    #[test]
    fn greedy_wrap_fills_to_the_width() {
        let wrapped = wrap("aa bb cc dd", 5);
        assert_eq!(wrapped, ["aa bb", "cc dd"]);

        let wrapped = wrap("overlong-word ok", 5);
        assert_eq!(wrapped, ["overlong-word", "ok"]);
    }
}
