//! freqhist CLI
//!
//! Counts value frequencies in a file or stdin and renders them as a bar chart.
#![allow(clippy::uninlined_format_args)]

mod render;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use freqhist_core::{BarChart, BarOrder, ChartConfig, FrequencyMap, Value, ValueKind};
use freqhist_io::{FrequencyWriter, InputFormat, MappedFileReader, OutputFormat};
use std::collections::HashSet;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("I/O error: {0}")]
    FreqhistIo(#[from] freqhist_io::Error),

    #[error("Core error: {0}")]
    Core(#[from] freqhist_core::Error),

    #[error("unsupported output extension for {0} (expected .csv or .json)")]
    OutputFormat(PathBuf),
}

/// Input layout selection.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Pick from the file extension (.json is JSON, anything else tokens)
    Auto,
    /// Whitespace-separated tokens
    Tokens,
    /// One value per line
    Lines,
    /// JSON array of numbers or strings
    Json,
}

/// Value kind selection.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    /// Narrowest kind all values parse as
    Auto,
    /// Whole numbers
    Int,
    /// Real numbers
    Float,
    /// Labels
    Text,
}

/// Bar order selection.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Order {
    /// Order of first occurrence
    FirstSeen,
    /// Ascending by value
    Value,
    /// Descending by count
    Count,
}

impl From<Kind> for ValueKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Auto => ValueKind::Auto,
            Kind::Int => ValueKind::Integer,
            Kind::Float => ValueKind::Float,
            Kind::Text => ValueKind::Text,
        }
    }
}

impl From<Order> for BarOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::FirstSeen => BarOrder::FirstSeen,
            Order::Value => BarOrder::Value,
            Order::Count => BarOrder::Count,
        }
    }
}

/// Count value frequencies and draw them as a histogram.
#[derive(Parser)]
#[command(name = "freqhist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Input file; reads stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Input layout
    #[arg(short, long, value_enum, default_value = "auto")]
    format: Format,

    /// Value kind
    #[arg(short, long, value_enum, default_value = "auto")]
    kind: Kind,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the frequency table
    Count {
        #[command(flatten)]
        input: InputArgs,

        /// Row order
        #[arg(long, value_enum, default_value = "first-seen")]
        order: Order,

        /// Only show the N most frequent values
        #[arg(long)]
        top: Option<usize>,

        /// Also write the table to a .csv or .json file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Draw the histogram in the terminal
    Plot {
        #[command(flatten)]
        input: InputArgs,

        /// Chart configuration file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Chart title
        #[arg(long)]
        title: Option<String>,

        /// Horizontal axis label
        #[arg(long)]
        x_label: Option<String>,

        /// Vertical axis label
        #[arg(long)]
        y_label: Option<String>,

        /// Bar order
        #[arg(long, value_enum)]
        order: Option<Order>,

        /// Length of the longest bar in characters
        #[arg(short, long, default_value = "50")]
        width: usize,
    },

    /// Summarize an input without drawing it
    Info {
        #[command(flatten)]
        input: InputArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Count {
            input,
            order,
            top,
            output,
        } => {
            let map = count_input(&input, std::io::stdin().lock())?;
            let entries = select_entries(&map, order.into(), top);

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for (value, count) in &entries {
                writeln!(out, "{}\t{}", value, count)?;
            }

            if let Some(path) = output {
                let format = output_format(&path)?;
                let mut writer = FrequencyWriter::create(&path)?;
                writer.write(entries.iter().copied(), format)?;
                log::info!("wrote {} rows to {}", entries.len(), path.display());
            }
        }

        Commands::Plot {
            input,
            config,
            title,
            x_label,
            y_label,
            order,
            width,
        } => {
            let base = match config {
                Some(path) => freqhist_io::load_chart_config(path)?,
                None => ChartConfig::default(),
            };
            let chart_config = apply_overrides(base, title, x_label, y_label, order);

            let map = count_input(&input, std::io::stdin().lock())?;
            let chart = BarChart::from_frequencies(&map, &chart_config)?;
            print!("{}", render::render_text(&chart, width));
        }

        Commands::Info { input } => {
            let map = count_input(&input, std::io::stdin().lock())?;

            println!("Values: {}", map.total());
            println!("Distinct: {}", map.len());
            if let Some((value, _)) = map.iter().next() {
                println!("Kind: {}", value.kind());
            }
            if let Some((value, count)) = map.most_common(1).first() {
                println!("Most common: {} ({} occurrences)", value, count);
            }
            let sorted = map.sorted_by_key();
            if let (Some((min, _)), Some((max, _))) = (sorted.first(), sorted.last()) {
                println!("Range: {} - {}", min, max);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Command-line flags take precedence over the configuration file.
fn apply_overrides(
    mut config: ChartConfig,
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    order: Option<Order>,
) -> ChartConfig {
    if let Some(title) = title {
        config.title = title;
    }
    if let Some(label) = x_label {
        config.x_label = label;
    }
    if let Some(label) = y_label {
        config.y_label = label;
    }
    if let Some(order) = order {
        config.order = order.into();
    }
    config
}

/// Reads the input and counts it. `stdin` is read when no path or "-" is given.
fn count_input<R: Read>(args: &InputArgs, stdin: R) -> Result<FrequencyMap<Value>> {
    let start = Instant::now();
    let kind = ValueKind::from(args.kind);

    let values = match args.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let format = resolve_format(args.format, Some(path));
            let reader = MappedFileReader::open(path)?;
            log::info!("reading {} ({} bytes)", path.display(), reader.len());
            reader.values(format, kind)?
        }
        _ => {
            log::info!("reading stdin");
            freqhist_io::read_values(stdin, resolve_format(args.format, None), kind)?
        }
    };

    let map = FrequencyMap::count_parallel(&values);
    log::info!(
        "counted {} values ({} distinct) in {:.2?}",
        map.total(),
        map.len(),
        start.elapsed()
    );
    Ok(map)
}

/// `Format::Auto` follows the file extension; stdin defaults to tokens.
fn resolve_format(format: Format, path: Option<&Path>) -> InputFormat {
    match format {
        Format::Auto => path.map_or(InputFormat::Tokens, InputFormat::from_path),
        Format::Tokens => InputFormat::Tokens,
        Format::Lines => InputFormat::Lines,
        Format::Json => InputFormat::Json,
    }
}

fn output_format(path: &Path) -> Result<OutputFormat> {
    OutputFormat::from_path(path).ok_or_else(|| CliError::OutputFormat(path.to_path_buf()))
}

fn ordered_entries(map: &FrequencyMap<Value>, order: BarOrder) -> Vec<(&Value, u64)> {
    match order {
        BarOrder::FirstSeen => map.iter().collect(),
        BarOrder::Value => map.sorted_by_key(),
        BarOrder::Count => map.sorted_by_count(),
    }
}

/// Entries in `order`, limited to the `top` most frequent values when given.
fn select_entries(
    map: &FrequencyMap<Value>,
    order: BarOrder,
    top: Option<usize>,
) -> Vec<(&Value, u64)> {
    let mut entries = ordered_entries(map, order);
    if let Some(n) = top {
        let keep: HashSet<&Value> = map.most_common(n).into_iter().map(|(v, _)| v).collect();
        entries.retain(|(v, _)| keep.contains(v));
    }
    entries
}
