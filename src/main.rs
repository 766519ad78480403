//! changelog-complete CLI
//!
//! Entry point for the command-line tool.
//!
//! Exit codes:
//! - 0: At least one element is admissible at the cursor position
//! - 1: No element is admissible at the cursor position
//! - 2: Tool error (config error, unreadable file, unknown format, etc.)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tracing::Level;

use changelog_complete::output::{
    CompletionReport, JsonWriter, SuggestionWriter, TextWriter,
};
use changelog_complete::rules;
use changelog_complete::{
    ChangelogFormat, Config, CursorTarget, Rule, analyze_context, get_suggestions,
};

/// Default config file name used when --config is not explicitly provided.
const DEFAULT_CONFIG_FILE: &str = "changelog-complete.toml";

#[derive(Parser, Debug)]
#[command(name = "changelog-complete")]
#[command(about = "Structure-aware completion for Liquibase changelog files", long_about = None)]
struct Args {
    /// Changelog file to complete in
    #[arg(required_unless_present = "describe")]
    file: Option<PathBuf>,

    /// Cursor line (1-based); defaults to the end of the file
    #[arg(long, requires = "column", conflicts_with = "offset")]
    line: Option<usize>,

    /// Cursor column (1-based)
    #[arg(long, requires = "line", conflicts_with = "offset")]
    column: Option<usize>,

    /// Cursor as a flat byte offset into the file
    #[arg(long)]
    offset: Option<usize>,

    /// Override format detection (xml, yaml, json)
    #[arg(long)]
    format: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override output format (text, json)
    #[arg(long)]
    output: Option<String>,

    /// Describe an element's templates (e.g., --describe createTable)
    #[arg(long)]
    describe: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(has_suggestions) => {
            if !has_suggestions {
                std::process::exit(1);
            }
            // exit 0 is implicit
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(2);
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();
}

/// Run one completion request.
///
/// Returns `Ok(true)` if at least one element was admissible at the cursor
/// position, `Ok(false)` if none was, or `Err` on tool errors.
fn run(args: Args) -> Result<bool> {
    // Handle --describe early exit
    if let Some(ref element) = args.describe {
        describe_element(element)?;
        return Ok(true);
    }

    let config = load_config(&args.config)?;

    let file = args
        .file
        .clone()
        .context("a changelog file is required")?;
    let text = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let format = resolve_format(&args, &file)?;
    let cursor_target = resolve_cursor_target(&args, &text)?;
    let cursor = cursor_target.resolve(&text);

    let snapshot = analyze_context(format, &text, cursor_target);

    // Configured exclusions are applied to the table, not the snapshot, so
    // the filter itself stays a pure function of (snapshot, rules).
    let table: Vec<Rule> = rules::builtin(format)
        .iter()
        .filter(|rule| !config.is_excluded(rule.name))
        .copied()
        .collect();
    let suggestions = get_suggestions(&snapshot, &table);

    let report = CompletionReport::new(
        &file.to_string_lossy().replace('\\', "/"),
        format,
        &cursor,
        &snapshot,
        &suggestions,
    );

    let output_format = match args.output {
        Some(ref fmt) => fmt.clone(),
        None => config.output.format.clone(),
    };
    let writer: Box<dyn SuggestionWriter> = match output_format.as_str() {
        "text" => Box::new(TextWriter),
        "json" => Box::new(JsonWriter),
        other => anyhow::bail!("Unknown output format '{}'. Valid values: text, json", other),
    };

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writer
        .emit(&report, &mut handle)
        .context("Failed to write suggestions")?;

    eprintln!(
        "changelog-complete: {} suggestion(s)",
        report.suggestions.len()
    );

    Ok(!report.suggestions.is_empty())
}

/// Load configuration from file.
///
/// If `config_path` is `Some`, the user explicitly passed `--config` and the file
/// must exist (error if not found). If `None`, the default config path is used;
/// a missing default config file is not an error (falls back to defaults with a warning).
fn load_config(config_path: &Option<PathBuf>) -> Result<Config> {
    match config_path {
        Some(path) => {
            // User explicitly provided --config; file must exist.
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Config::from_file(path).context("Failed to load configuration")
        }
        None => {
            // Using default config path; missing file is OK.
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                Config::from_file(&default_path).context("Failed to load configuration")
            } else {
                eprintln!(
                    "Warning: Config file {} not found, using defaults",
                    default_path.display()
                );
                Ok(Config::default())
            }
        }
    }
}

/// Determine the changelog format from --format or the file extension.
fn resolve_format(args: &Args, file: &PathBuf) -> Result<ChangelogFormat> {
    if let Some(ref fmt) = args.format {
        return fmt
            .parse::<ChangelogFormat>()
            .map_err(|_| anyhow::anyhow!("Unknown format '{}'. Valid values: xml, yaml, json", fmt));
    }
    ChangelogFormat::from_extension(file).with_context(|| {
        format!(
            "Cannot detect changelog format of {}; pass --format",
            file.display()
        )
    })
}

/// Turn the CLI cursor flags into a [`CursorTarget`].
///
/// Line and column are 1-based on the command line; zero is rejected at the
/// boundary. With no cursor flags at all, completion runs at the end of the
/// file.
fn resolve_cursor_target(args: &Args, text: &str) -> Result<CursorTarget> {
    if let Some(offset) = args.offset {
        return Ok(CursorTarget::Offset(offset));
    }
    match (args.line, args.column) {
        (Some(line), Some(column)) => {
            if line == 0 || column == 0 {
                anyhow::bail!("--line and --column are 1-based");
            }
            Ok(CursorTarget::LineColumn {
                line: line - 1,
                character: column - 1,
            })
        }
        _ => Ok(CursorTarget::Offset(text.len())),
    }
}

fn describe_element(name: &str) -> Result<()> {
    // The vocabulary is shared across formats; documentation and placement
    // come from whichever table lists the element first.
    let Some(rule) = ChangelogFormat::iter()
        .find_map(|format| rules::builtin(format).iter().find(|r| r.name == name))
    else {
        anyhow::bail!("Unknown element: {}", name);
    };

    println!("Element: {}", rule.name);
    println!("Documentation: {}", rule.documentation);
    println!("Allowed in: {}", rule.allowed_in.join(", "));
    if !rule.disallowed_in.is_empty() {
        println!("Never offered in: {}", rule.disallowed_in.join(", "));
    }

    for format in ChangelogFormat::iter() {
        if let Some(rule) = rules::builtin(format).iter().find(|r| r.name == name) {
            println!();
            println!("Template ({}):", format);
            println!("{}", rule.template);
        }
    }

    Ok(())
}
