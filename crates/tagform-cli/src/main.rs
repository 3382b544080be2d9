use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;
use tagform_config::Config;
use tagform_engine::{Escape, Options, render_file};

const DEFAULT_OUTPUT: &str = "index.html";

#[derive(Parser, Debug)]
#[command(name = "tagform", version)]
#[command(about = "Render a content-model checked page description to indented HTML")]
struct Cli {
    /// Description file to render
    input: PathBuf,

    /// Where to write the document [default: config `output`, else ./index.html]
    output: Option<PathBuf>,

    /// Alias to render [default: the last alias in the file]
    #[arg(long, value_name = "NAME")]
    entry: Option<String>,

    /// Treat unknown attributes and mistyped values as errors
    #[arg(long)]
    strict_attributes: bool,

    /// Escape text and attribute values instead of writing them verbatim
    #[arg(long)]
    escape_text: bool,

    /// Print the resolved document tree as JSON to stdout
    #[arg(long)]
    emit_tree: bool,

    /// Configuration file [default: ~/.config/tagform/config.toml]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("Failed to process {}: {err:#}", cli.input.display());
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    // RUST_LOG is parsed last so it wins over the flag
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let output = output_path(cli.output.as_deref(), &config);
    let options = options(cli, &config);
    log::debug!("rendering {} with {options:?}", cli.input.display());

    let document = render_file(&cli.input, &output, &options)?;

    let message = format!(
        "Successfully processed {} → {}",
        cli.input.display(),
        output.display()
    );
    if cli.emit_tree {
        let json = serde_json::to_string_pretty(&document).context("serialising document tree")?;
        println!("{json}");
        // Keep stdout pure JSON
        eprintln!("{message}");
    } else {
        println!("{message}");
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => Ok(config),
            None => bail!("config file not found: {}", path.display()),
        },
        None => {
            log::debug!("config path: {}", Config::config_path().display());
            Ok(Config::load()?.unwrap_or_default())
        }
    }
}

/// Command line beats config, config beats `./index.html`.
fn output_path(cli_output: Option<&Path>, config: &Config) -> PathBuf {
    cli_output
        .map(Path::to_path_buf)
        .or_else(|| config.output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
}

fn options(cli: &Cli, config: &Config) -> Options {
    let escape = if cli.escape_text || config.escape_text {
        Escape::Html
    } else {
        Escape::None
    };
    Options {
        entry: cli.entry.clone().or_else(|| config.entry.clone()),
        strict_attributes: cli.strict_attributes || config.strict_attributes,
        escape,
    }
}
