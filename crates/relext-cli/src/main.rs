use anyhow::{Context, Result};
use clap::Parser;
use relext_config::Config;
use relext_engine::{io, parse_bytes, render};
use std::path::PathBuf;

/// Convert relext text into HTML between two template fragments
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Input text file [default: input.relext]
    input: Option<PathBuf>,

    /// Output HTML file [default: output.html]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fragment written before the rendered blocks [default: pre.txt]
    #[arg(long)]
    pre: Option<PathBuf>,

    /// Fragment written after the rendered blocks [default: post.txt]
    #[arg(long)]
    post: Option<PathBuf>,

    /// Config file; must exist when given [default: ~/.config/relext/config.toml]
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Flags win over the config file, which wins over built-in defaults.
    fn resolve(self, config: Config) -> Config {
        Config {
            input: self.input.unwrap_or(config.input),
            output: self.output.unwrap_or(config.output),
            pre: self.pre.unwrap_or(config.pre),
            post: self.post.unwrap_or(config.post),
        }
    }
}

fn load_config(explicit: Option<&PathBuf>) -> Result<Config> {
    match explicit {
        Some(path) => {
            log::info!("Loading config from {}", path.display());
            Config::load_from_path(path)?
                .with_context(|| format!("Config file not found: {}", path.display()))
        }
        None => {
            let config = Config::load()?;
            if config.is_none() {
                log::debug!(
                    "No config file at {}, using defaults",
                    Config::config_path().display()
                );
            }
            Ok(config.unwrap_or_default())
        }
    }
}

fn run(paths: &Config) -> Result<()> {
    let input = io::read_input(&paths.input)
        .with_context(|| format!("Failed to read input {}", paths.input.display()))?;
    let pre = io::read_template(&paths.pre)
        .with_context(|| format!("Failed to read template {}", paths.pre.display()))?;
    let post = io::read_template(&paths.post)
        .with_context(|| format!("Failed to read template {}", paths.post.display()))?;
    log::info!("Read {} bytes from {}", input.len(), paths.input.display());

    let document = parse_bytes(&input);
    log::info!("Parsed {} blocks", document.len());

    let html = render(document, &pre, &post);
    io::write_output(&paths.output, &html)
        .with_context(|| format!("Failed to write output {}", paths.output.display()))?;
    log::info!("Wrote {} bytes to {}", html.len(), paths.output.display());

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let paths = cli.resolve(config);

    run(&paths)
}
