mod request;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};

use layoutfix_config::Config;
use layoutfix_keyboard::{Language, LayoutRegistry};
use layoutfix_logger::{self as logger, LogLevel};
use request::TransformRequest;

/// Exit status for requests rejected before the transform runs.
const EXIT_INVALID_REQUEST: i32 = 2;

/// Fix text typed with the wrong keyboard layout
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text to fix (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Layout the text was typed in
    #[arg(short, long, value_name = "TAG")]
    from: Option<Language>,

    /// Layout the text was meant for
    #[arg(short, long, value_name = "TAG")]
    to: Option<Language>,

    /// Exchange the source and target layouts
    #[arg(short, long)]
    swap: bool,

    /// Read the text from the clipboard
    #[arg(short, long, conflicts_with = "text")]
    paste: bool,

    /// Copy the result to the clipboard instead of printing it
    #[arg(short, long)]
    copy: bool,

    /// List supported layout pairs and exit
    #[arg(long)]
    list: bool,

    /// Echo log messages to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let result = run(Cli::parse());
    if let Err(err) = &result {
        logger::error(format!("{:#}", err));
    }
    result
}

fn run(cli: Cli) -> Result<()> {
    // Fall back to defaults on a broken config; the reason is logged below
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    init_logger(&config, cli.verbose);
    if let Some(err) = config_error {
        logger::warn(format!("Using default config: {:#}", err));
    }

    if cli.list {
        print_pairs();
        return Ok(());
    }

    let text = read_text(&cli)?;
    let mut request = TransformRequest::new(
        text,
        cli.from.unwrap_or(config.general.lang_from),
        cli.to.unwrap_or(config.general.lang_to),
    );
    if cli.swap {
        request.swap();
    }

    if let Some((code, message)) = rejection(&request) {
        logger::warn(format!("Rejected request: {}", message));
        eprintln!("Error: {}", message);
        std::process::exit(code);
    }

    logger::debug(format!(
        "Transforming {} chars {} -> {}",
        request.text.chars().count(),
        request.lang_from,
        request.lang_to
    ));
    let output = request.run()?;

    if cli.copy || config.general.copy_to_clipboard {
        layoutfix_clipboard::copy(&output)?;
        logger::info("Copied result to clipboard");
        eprintln!("Transformed text copied to clipboard");
    } else {
        write_output(io::stdout().lock(), &output)?;
    }

    Ok(())
}

fn init_logger(config: &Config, verbose: bool) {
    let (min_level, level_error) = resolve_min_level(&config.logging.min_level, verbose);
    let path = config
        .log_file_path()
        .unwrap_or_else(|_| std::env::temp_dir().join("layoutfix.log"));
    logger::init(path, min_level, verbose);

    if let Some(err) = level_error {
        logger::warn(format!("{}, using {}", err, min_level.to_str()));
    }
}

/// Level to log at, plus the parse error when the configured level is unknown.
fn resolve_min_level(setting: &str, verbose: bool) -> (LogLevel, Option<String>) {
    let parsed = setting.parse::<LogLevel>();
    let level = if verbose {
        LogLevel::Debug
    } else {
        *parsed.as_ref().unwrap_or(&LogLevel::Info)
    };
    (level, parsed.err())
}

/// Exit status and message for a request that must not be run.
fn rejection(request: &TransformRequest) -> Option<(i32, String)> {
    request
        .validate()
        .err()
        .map(|err| (EXIT_INVALID_REQUEST, err.to_string()))
}

fn read_text(cli: &Cli) -> Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    if cli.paste {
        return layoutfix_clipboard::paste();
    }

    read_input(io::stdin().lock())
}

/// Read all of `reader` as the text to fix, trailing newline included.
fn read_input(mut reader: impl Read) -> Result<String> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("Failed to read standard input")?;
    Ok(text)
}

/// Write the result exactly as produced, without a trailing newline of its own.
fn write_output(mut writer: impl Write, output: &str) -> Result<()> {
    writer.write_all(output.as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn print_pairs() {
    for (from, to) in LayoutRegistry::global().pairs() {
        println!("{} -> {}  ({} → {})", from, to, from.label(), to.label());
    }
}
