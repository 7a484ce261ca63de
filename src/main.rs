use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use mdbundle::{CommonMark, Config, Options, Wkhtmltopdf, bundle};

#[derive(Parser)]
#[command(name = "mdbundle", version)]
#[command(about = "Concatenate a directory of Markdown files into one PDF")]
struct Cli {
    /// Directory containing the Markdown files
    input_dir: PathBuf,

    /// Output PDF file
    #[arg(short, long, default_value = "concatenated.pdf")]
    output: PathBuf,

    /// Document title (overrides the config file)
    #[arg(short, long)]
    title: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// File name pattern to collect (default: *.md)
    #[arg(short, long)]
    pattern: Option<String>,

    /// wkhtmltopdf binary to run
    #[arg(long)]
    engine: Option<String>,

    /// Also write the intermediate HTML document
    #[arg(long)]
    html: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e:#}");
                return ExitCode::FAILURE;
            }
        },
        None => Config::compiled_default(),
    };
    if let Some(title) = cli.title {
        config.document.title = title;
    }
    if let Some(pattern) = cli.pattern {
        config.input.pattern = pattern;
    }
    if let Some(engine) = cli.engine {
        config.engine.program = engine;
    }

    let mut options = Options::from_config(&cli.input_dir, &cli.output, &config);
    options.html_output = cli.html;
    let engine = Wkhtmltopdf::from_config(&config.engine);

    match bundle(&options, &CommonMark, &engine) {
        Ok(report) => {
            println!("{}", report.message());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
