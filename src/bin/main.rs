use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use std::io::stdin;
use std::path::PathBuf;
use tracing::debug;
use wordplay::{count_substrings, shift_text, unshift_text, WordplayConfig, DEFAULT_DICTIONARY};

/// Caesar shifts and dictionary substring counts.
#[derive(Parser)]
#[command(name = "wordplay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON config file with `dictionary` and `default_shift`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shift every letter forward. Reads one line from stdin if TEXT is omitted.
    Shift {
        /// Places to shift; may be negative. Defaults to the configured shift.
        #[arg(short, long, allow_negative_numbers = true)]
        shift: Option<i64>,
        text: Option<String>,
    },

    /// Undo a shift. Reads one line from stdin if TEXT is omitted.
    Unshift {
        #[arg(short, long, allow_negative_numbers = true)]
        shift: Option<i64>,
        text: Option<String>,
    },

    /// Count dictionary words contained in each word of a phrase.
    Count {
        /// Reads one line from stdin if omitted.
        phrase: Option<String>,

        /// Print the counts as a JSON object.
        #[arg(long)]
        json: bool,
    },

    /// Print the two sample results.
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();

    let config = WordplayConfig::load_or_default(cli.config.as_deref())?;
    debug!(?config, "using config");

    match cli.command {
        Commands::Shift { shift, text } => {
            let text = text_or_line(text)?;
            println!("{}", shift_text(&text, resolve_shift(shift, &config)));
        }
        Commands::Unshift { shift, text } => {
            let text = text_or_line(text)?;
            println!("{}", unshift_text(&text, resolve_shift(shift, &config)));
        }
        Commands::Count { phrase, json } => {
            let phrase = text_or_line(phrase)?;
            let counts = count_substrings(&phrase, &config.dictionary);
            if json {
                println!("{}", serde_json::to_string(&counts)?);
            } else {
                println!("{}", counts);
            }
        }
        Commands::Demo => run_demo(),
    }

    Ok(())
}

/// Uses `arg` if given, otherwise reads a single line from stdin.
fn text_or_line(arg: Option<String>) -> wordplay::Result<String> {
    if let Some(text) = arg {
        return Ok(text);
    }
    let mut input = String::new();
    stdin().read_line(&mut input)?;
    Ok(strip_line_ending(&input).to_string())
}

/// Drops the trailing `\n` or `\r\n` left by `read_line`.
fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

fn resolve_shift(arg: Option<i64>, config: &WordplayConfig) -> i64 {
    arg.unwrap_or(config.default_shift)
}

fn run_demo() {
    println!("{}", "Caesar shift".bold().cyan());
    println!("  shift_text(\"What a string!\", 5) -> {:?}", shift_text("What a string!", 5));

    println!("\n{}", "Substring counts".bold().cyan());
    println!("  dictionary: {:?}", DEFAULT_DICTIONARY);
    println!("  count_substrings(\"below\") -> {}", count_substrings("below", &DEFAULT_DICTIONARY));
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("hello\n", "hello"; "unix newline")]
    #[test_case("hello\r\n", "hello"; "windows newline")]
    #[test_case("hello", "hello"; "no newline at eof")]
    #[test_case("  spaced out  \n", "  spaced out  "; "inner and trailing spaces kept")]
    #[test_case("\n", ""; "empty line")]
    fn line_ending_is_stripped(line: &str, expected: &str) {
        assert_eq!(strip_line_ending(line), expected);
    }

    #[test]
    fn shift_falls_back_to_config() {
        let config = WordplayConfig { default_shift: 13, ..WordplayConfig::default() };
        assert_eq!(resolve_shift(None, &config), 13);
        assert_eq!(resolve_shift(Some(-2), &config), -2);
    }

    #[test]
    fn shift_subcommand_parses_without_shift() {
        let cli = Cli::try_parse_from(["wordplay", "shift", "abc"]).unwrap();
        match cli.command {
            Commands::Shift { shift, text } => {
                assert_eq!(shift, None);
                assert_eq!(text.as_deref(), Some("abc"));
            }
            _ => panic!("expected shift subcommand"),
        }
    }

    #[test]
    fn unshift_subcommand_takes_negative_shift() {
        let cli = Cli::try_parse_from(["wordplay", "unshift", "-s", "-3", "xyz"]).unwrap();
        match cli.command {
            Commands::Unshift { shift, text } => {
                assert_eq!(shift, Some(-3));
                assert_eq!(text.as_deref(), Some("xyz"));
            }
            _ => panic!("expected unshift subcommand"),
        }
    }
}
