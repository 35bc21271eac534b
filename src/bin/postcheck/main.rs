use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use spdlog::{info, warn};

use postcheck::checker::run_check;
use postcheck::config::Config;
use postcheck::logger::configure_logger;
use postcheck::post::Language;

use crate::config::open_config;
use crate::new_post::new_post_cmd;

mod config;
mod new_post;

const CFG_FILE_NAME: &str = "postcheck.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path. If empty, postcheck.toml is looked up in the current and user config directories
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the es/ and en/ posts. Overrides paths.content_dir
    #[arg(long, global = true)]
    content_dir: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Plain text report, without colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the posts of both languages (default)
    Check,
    /// Create a Spanish/English post pair linked to each other
    New(NewArgs),
}

#[derive(clap::Args, Debug)]
struct NewArgs {
    /// Title of the Spanish post
    #[arg(long)]
    title_es: String,

    /// Title of the English post
    #[arg(long)]
    title_en: String,

    /// Name of the author. If empty, OS user real name is being used
    #[arg(short, long)]
    author: Option<String>,

    /// Post generation options
    #[arg(short, long, value_enum, default_value_t = PostOutput::Stdout)]
    output: PostOutput,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Human readable, grouped by file
    Text,
    /// Machine readable, for CI
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PostOutput {
    /// Writes both posts to the stdout
    Stdout,
    /// Writes both posts into the content directory
    File,
}

fn check_cmd(config: &Config, format: OutputFormat, use_colors: bool) -> Result<ExitCode> {
    if let OutputFormat::Text = format {
        println!("Validating blog posts...");
    }

    let outcome = run_check(config)?;

    match format {
        OutputFormat::Text => {
            for language in Language::ALL {
                println!("Found {} {} posts", outcome.posts.count(language), language.name());
            }
            println!();
            print!("{}", outcome.report.render_text(use_colors));
        }
        OutputFormat::Json => {
            println!("{}", outcome.report.render_json()?);
        }
    }

    Ok(outcome.report.exit_code())
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let (mut config, config_path) = open_config(args.config.as_deref())?;
    if let Some(content_dir) = args.content_dir {
        config.paths.content_dir = content_dir;
    }

    if let Err(err) = configure_logger(&config, args.verbose) {
        warn!("Error creating logger sinks. Using default logger instead. Desc={}", err);
    }

    match config_path {
        Some(path) => info!("Config read from {}", path.display()),
        None => info!("No {} found, using defaults", CFG_FILE_NAME),
    }

    match args.command.unwrap_or(Command::Check) {
        Command::Check => check_cmd(&config, args.format, !args.no_color),
        Command::New(new_args) => {
            new_post_cmd(&config, new_args)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
