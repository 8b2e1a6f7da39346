//! mandr — a CLI TL;DR pages viewer.
//!
//! Reads pages from an extracted tldr archive (`tldr-main/` by default):
//!
//! - `mandr --cmd tar` — show the page for `tar`, searching every platform
//! - `mandr --platform osx --lang de --cmd open` — one platform, translated
//! - `mandr --platform linux --list-cmds` — list the available pages

use anyhow::{Context, Result};
use clap::Parser;
use mandr::config::{DEFAULT_ROOT, LOG_ENV};
use mandr::error::EXIT_FAILURE;
use mandr::selector::ANY_PLATFORM;
use mandr::{list, ColorChoice, Config, Error, Resolver};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mandr",
    about = "A CLI TL;DR pages viewer",
    arg_required_else_help = true
)]
struct Cli {
    /// Select TL;DR page language (two-letter code; `en` is the default set)
    #[arg(long)]
    lang: Option<String>,

    /// Select platform specific TL;DR page, or `any` to search all platforms
    #[arg(long, default_value = ANY_PLATFORM)]
    platform: String,

    /// Command name
    #[arg(long)]
    cmd: Option<String>,

    /// List the commands available for the selected platform
    #[arg(long)]
    list_cmds: bool,

    /// Directory holding the extracted TL;DR archive
    #[arg(long, env = "MANDR_ROOT", default_value = DEFAULT_ROOT)]
    root: PathBuf,

    /// When to colorize output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err
                .downcast_ref::<Error>()
                .map_or(EXIT_FAILURE, Error::exit_code);
            ExitCode::from(code)
        }
    }
}

/// Logs go to stderr so they never interleave with page output.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .try_init()
        .ok();
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::new(
        cli.root.clone(),
        cli.lang.as_deref(),
        &cli.platform,
        cli.color,
    )?;

    // Render everything before writing so a failure leaves stdout empty.
    let mut output = String::new();

    if let Some(ref cmd) = cli.cmd {
        output.push_str(&show_page(&config, cmd)?);
    }

    if cli.list_cmds {
        let names = list::list_commands(&config.root, &config.platform, &config.language)?;
        output.push_str(&list::format_listing(&names, config.palette));
    }

    if cli.cmd.is_none() && !cli.list_cmds {
        return Err(Error::InvalidSelector("no command name was specified".to_string()).into());
    }

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write to stdout")?;
    Ok(())
}

/// Resolve, read and render one page.
fn show_page(config: &Config, cmd: &str) -> Result<String> {
    let resolver = Resolver::new(&config.root);
    let path = resolver.resolve(cmd, &config.platform, &config.language)?;
    tracing::debug!(path = %path.display(), "rendering page");

    let page = mandr::read_page(&path)?;
    let text = mandr::render(&page, config.palette)
        .with_context(|| format!("failed to render {}", path.display()))?;
    Ok(text)
}
