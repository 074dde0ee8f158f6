use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use latex_sexpr::{Expression, escape_keyword, escape_string, render_latex, render_sexpr};
use log::{debug, info};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Output form for a rendered tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Latex,
    Sexpr,
}

/// latex-sexpr - Re-render LaTeX expression trees
#[derive(Parser, Debug)]
#[command(name = "latex-sexpr")]
#[command(about = "Render a JSON-encoded LaTeX expression tree as LaTeX or as a Janet s-expression")]
#[command(version)]
pub struct CliArgs {
    /// JSON file holding the expression tree; stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "sexpr")]
    pub format: OutputFormat,

    /// Print TEXT as a quoted string literal instead of rendering a tree
    #[arg(long, value_name = "TEXT", conflicts_with_all = ["escape_keyword", "input"])]
    pub escape_string: Option<String>,

    /// Print NAME as a keyword instead of rendering a tree
    #[arg(long, value_name = "NAME", conflicts_with = "input")]
    pub escape_keyword: Option<String>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Where the JSON tree is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

/// What a single invocation does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Render {
        input: InputSource,
        format: OutputFormat,
    },
    EscapeString(String),
    EscapeKeyword(String),
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub action: Action,
    pub log_level: LogLevel,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        let action = if let Some(text) = args.escape_string {
            Action::EscapeString(text)
        } else if let Some(name) = args.escape_keyword {
            Action::EscapeKeyword(name)
        } else {
            let input = match args.input {
                Some(path) if path.as_os_str() != "-" => InputSource::File(path),
                _ => InputSource::Stdin,
            };
            Action::Render {
                input,
                format: args.format,
            }
        };

        CliConfig {
            action,
            log_level: args.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();
    Ok(CliConfig::from(args))
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logger")?;
    Ok(())
}

fn read_input(input: &InputSource) -> Result<String> {
    match input {
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read expression tree from stdin")?;
            Ok(buf)
        }
        InputSource::File(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read expression tree from {}", path.display())),
    }
}

/// Decode a JSON expression tree
pub fn parse_tree(json: &str) -> Result<Expression> {
    serde_json::from_str(json).context("Invalid expression tree")
}

/// Render a tree in the requested format
pub fn render(expr: &Expression, format: OutputFormat) -> String {
    match format {
        OutputFormat::Latex => render_latex(expr),
        OutputFormat::Sexpr => render_sexpr(expr),
    }
}

/// Carry out an action and return the text to print
pub fn execute(action: &Action) -> Result<String> {
    match action {
        Action::EscapeString(text) => Ok(escape_string(text)),
        Action::EscapeKeyword(name) => Ok(escape_keyword(name)),
        Action::Render { input, format } => {
            let json = read_input(input)?;
            debug!("Read {} bytes of JSON", json.len());
            let expr = parse_tree(&json)?;
            Ok(render(&expr, *format))
        }
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    info!("Running {:?}", config.action);

    let output = execute(&config.action)?;
    println!("{}", output);
    Ok(())
}
