//! Configuration handling for tablekit

use std::path::PathBuf;

/// Format used to preview tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Settings for one demonstration run
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file to load
    pub csv_file: PathBuf,
    /// Directory that relative read paths resolve against
    pub base_dir: PathBuf,
    /// Rows kept when saving the head of the table
    pub head_rows: usize,
    /// Rows drawn by the random sample
    pub sample_size: usize,
    /// Seed for the random sample; entropy when absent
    pub seed: Option<u64>,
    /// Column to average; the first numeric column when absent
    pub average_column: Option<String>,
    /// Preview format
    pub output_format: OutputFormat,
    /// Optional text file for the line-list steps
    pub text_file: Option<PathBuf>,
    /// Line appended to the text file's lines before writing them back
    pub append_line: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_file: PathBuf::new(),
            base_dir: PathBuf::from("."),
            head_rows: 5,
            sample_size: 3,
            seed: None,
            average_column: None,
            output_format: OutputFormat::default(),
            text_file: None,
            append_line: "Ice Cream".to_string(),
        }
    }
}

impl Config {
    pub fn new(csv_file: PathBuf) -> Self {
        Self {
            csv_file,
            ..Default::default()
        }
    }

    pub fn with_base_dir(mut self, dir: PathBuf) -> Self {
        self.base_dir = dir;
        self
    }

    pub fn with_head_rows(mut self, rows: usize) -> Self {
        self.head_rows = rows;
        self
    }

    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample_size = size;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_average_column(mut self, column: Option<String>) -> Self {
        self.average_column = column;
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn with_text_file(mut self, file: Option<PathBuf>) -> Self {
        self.text_file = file;
        self
    }

    pub fn with_append_line(mut self, line: impl Into<String>) -> Self {
        self.append_line = line.into();
        self
    }
}
