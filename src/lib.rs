/*!
A declarative command-line argument parser; quibble is a more forgiving way
to wire up (command-line) options by hand.

The caller declares the accepted command line up front: one [`OptionSpec`] per
accepted argument plus one [`ProgramMetadata`] for the program identity. An
[`ArgsParser`] validates those declarations once, pre-renders the help text
from them, and can then be handed the raw argument vector:

- a reserved help flag (`-h`, `--help`, `--Help`) anywhere in the input
  short-circuits everything else and yields [`ParseOutcome::Help`] with the
  pre-rendered text, letting the caller decide to print and exit;
- otherwise a small state machine walks the tokens, distinguishing bare keys,
  `--key=value` pairs, `-k value` pairs split across two tokens, and the
  trailing space-delimited positional list, and the accumulated values come
  back as a queryable [`Matches`].

Values are never coerced; everything stays text. Mistakes in the declarations
surface as [`ConfigError`] at construction, mistakes in the input as
[`ParseError`] during parsing.

```
use quibble::{ArgsParser, OptionSpec, ParseOutcome, ProgramMetadata, Usage};

let parser = ArgsParser::new(
    ProgramMetadata::new("greet").description("Greets people."),
    vec![
        OptionSpec::new().short('n').long("Name").usage(Usage::KeyValue),
        OptionSpec::new().long("Loud").usage(Usage::Key),
    ],
)?;

match parser.parse(["--Name=World", "--Loud"])? {
    ParseOutcome::Help(text) => print!("{text}"),
    ParseOutcome::Args(args) => {
        assert_eq!(args.long_result("Name").and_then(|arg| arg.value()), Some("World"));
        assert!(args.is_long_passed("Loud"));
    }
}
# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

pub mod errors;
pub mod help;
pub mod option;
pub mod parser;
pub mod registry;
pub mod results;

pub use errors::{ConfigError, ParseError, ParseErrorKind};
pub use option::{OptionSpec, ProgramMetadata, Usage};
pub use parser::{ArgsParser, ParseOutcome};
pub use registry::OptionRegistry;
pub use results::{Matches, ReceivedArgument};
