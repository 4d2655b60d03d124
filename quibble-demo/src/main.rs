use std::process::ExitCode;

use anyhow::Context;
use quibble::{ArgsParser, OptionSpec, ParseOutcome, ProgramMetadata, Usage};

/// Stable handles into the option list, in declaration order. The parser
/// itself only ever deals in `OptionSpec` identity; indexing results by an
/// enum like this is purely a consumer-side convenience.
#[derive(Debug, Clone, Copy)]
enum Opt {
    Background,
    Text,
    Reset,
    Configs,
}

fn metadata() -> ProgramMetadata {
    ProgramMetadata::new("ColColorize")
        .display_name("Set Console Colours")
        .description("This program set the colours used by this console.")
        .author("Max Whitehouse")
        .version("1.0.0")
}

fn options() -> Vec<OptionSpec> {
    vec![
        OptionSpec::new()
            .short('b')
            .long("Set-Background")
            .usage(Usage::KeyValue)
            .repeatable(true)
            .description(
                "This command sets the background colour of the console using an RGB 0-255 \
                 triplet.",
            )
            .short_example("(0,0,0)")
            .long_example("(0,0,0)"),
        OptionSpec::new()
            .short('t')
            .long("Set-Text")
            .usage(Usage::KeyValue)
            .description(
                "This command sets the text colour if the console using an RGB 0-255 triplet.",
            ),
        OptionSpec::new()
            .long("Use-Defaults")
            .usage(Usage::Key)
            .exclusive(true)
            .description(
                "This command tells the console revert to its default colour scheme. This \
                 should be used on its own.",
            ),
        OptionSpec::new().usage(Usage::List).description(
            "This will take the path to json files and read a \"Set Console Colours\" \
             configuration file.",
        ),
    ]
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let specs = options();
    let parser = ArgsParser::new(metadata(), specs.clone())
        .context("invalid option declarations")?;

    let tokens: Vec<String> = std::env::args().skip(1).collect();

    let args = match parser.parse(tokens) {
        Ok(ParseOutcome::Help(text)) => {
            print!("{text}");
            return Ok(ExitCode::SUCCESS);
        }
        Ok(ParseOutcome::Args(args)) => args,
        Err(error) => {
            eprintln!("{error}");
            return Ok(ExitCode::from(2));
        }
    };

    for (opt, label) in [
        (Opt::Background, "background"),
        (Opt::Text, "text"),
        (Opt::Reset, "reset"),
        (Opt::Configs, "configs"),
    ] {
        match args.result(&specs[opt as usize]) {
            Some(argument) => println!("{label}: {:?}", argument.values()),
            None => println!("{label}: not passed"),
        }
    }

    Ok(ExitCode::SUCCESS)
}
