//! tablekit - forgiving CSV and text file helpers

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use tablekit::config::{Config, OutputFormat};
use tablekit::output::render_to_stdout;
use tablekit::{column_average, random_sample, Workspace};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Load a CSV, save its head, sample it and average a column
#[derive(Parser, Debug)]
#[command(name = "tablekit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file to load, relative to the base directory
    file: Option<PathBuf>,

    /// Directory that input files are resolved against
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,

    /// Rows to keep when saving the head of the table
    #[arg(long, default_value_t = 5)]
    head: usize,

    /// Rows to draw for the random sample
    #[arg(long, default_value_t = 3)]
    sample: usize,

    /// Seed for the random sample
    #[arg(long)]
    seed: Option<u64>,

    /// Column to average (defaults to the first numeric column)
    #[arg(short, long)]
    column: Option<String>,

    /// Preview format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliOutputFormat,

    /// Text file to read, extend and write back
    #[arg(long)]
    text: Option<PathBuf>,

    /// Line appended to the text file's lines
    #[arg(long, default_value = "Ice Cream")]
    append: String,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(csv_file) = cli.file else {
        println!("{}", Cli::command().render_usage());
        return Ok(());
    };

    let config = Config::new(csv_file)
        .with_base_dir(cli.base_dir)
        .with_head_rows(cli.head)
        .with_sample_size(cli.sample)
        .with_seed(cli.seed)
        .with_average_column(cli.column)
        .with_output_format(cli.format.into())
        .with_text_file(cli.text)
        .with_append_line(cli.append);

    run_demo(&config)
}

/// `<stem><suffix>.<ext>` in the working directory
fn derived_name(path: &Path, suffix: &str, ext: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    PathBuf::from(format!("{}{}.{}", stem, suffix, ext))
}

fn run_demo(config: &Config) -> Result<()> {
    info!(file = %config.csv_file.display(), base_dir = %config.base_dir.display(), "starting");
    let workspace = Workspace::new(&config.base_dir);

    // CSV
    let table = workspace.load_csv(&config.csv_file);
    if let Some(table) = &table {
        render_to_stdout(table, config.output_format, Some(config.head_rows))?;
        workspace.save_csv(
            Some(&table.head(config.head_rows)),
            derived_name(&config.csv_file, "_head", "csv"),
        );
    }

    let sample = random_sample(table.as_ref(), config.sample_size, config.seed);
    if let Some(sample) = &sample {
        render_to_stdout(sample, config.output_format, None)?;
    }

    let column = config.average_column.clone().or_else(|| {
        table
            .as_ref()
            .and_then(|t| t.first_numeric_column())
            .map(|c| c.name.clone())
    });
    match column {
        Some(column) => {
            column_average(table.as_ref(), &column);
        }
        None if table.is_some() => println!("No numeric column to average."),
        None => println!("No data to average."),
    }

    println!("Entries in '{}':", workspace.base_dir().display());
    workspace.list_dir();

    // TXT
    if let Some(text_file) = &config.text_file {
        let lines = workspace.read_txt(text_file).filter(|lines| !lines.is_empty());
        if let Some(mut lines) = lines {
            lines.push(config.append_line.clone());
            let updated = derived_name(text_file, "_updated", "txt");
            workspace.write_txt(&lines, &updated);
            println!("Total lines in file: {}", workspace.count_lines(&updated));
        }
    }

    Ok(())
}
