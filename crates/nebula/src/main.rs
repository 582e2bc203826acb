//! nebula - Nebula Motors landing page server and content tools

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nebula_core::{catalog, SiteConfig};
use nebula_web::ServeOptions;
use std::net::IpAddr;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::Section;

#[derive(Parser)]
#[command(
    name = "nebula",
    version,
    about = "Nebula Motors landing page",
    long_about = "Serves the Nebula Motors landing page (Leptos WASM bundle) and its small JSON API,\n\
                  and inspects the page content and presentation settings.\n\
                  \n\
                  Examples:\n\
                    nebula                           # Serve on 127.0.0.1:3000 (default)\n\
                    nebula serve --port 8080 --open  # Custom port, open browser\n\
                    nebula content --section models  # Print the model lineup\n\
                    nebula config --defaults         # Print a starter nebula.toml\n\
                    nebula preview --width 500 --progress 0.1\n\
                  \n\
                  Frontend Workflow:\n\
                    cd crates/nebula-web && trunk build --release\n\
                    nebula serve --dist crates/nebula-web/dist\n\
                  \n\
                  Environment Variables:\n\
                    NEBULA_CONFIG                    # Path to nebula.toml\n\
                    NEBULA_PORT                      # Server port\n\
                    NEBULA_DIST                      # Built frontend directory\n\
                    NEBULA_NO_COLOR                  # Disable ANSI colors\n\
                    RUST_LOG                         # Log filter (default: info)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Path to site config (TOML)
    #[arg(long, global = true, env = "NEBULA_CONFIG")]
    config: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "NEBULA_NO_COLOR")]
    no_color: bool,
}

/// Options for `serve`, also used when no subcommand is given
#[derive(Parser, Debug, Clone, PartialEq)]
struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,
    /// Port for web server
    #[arg(long, env = "NEBULA_PORT", default_value = "3000")]
    port: u16,
    /// Built frontend directory (trunk dist)
    #[arg(long, env = "NEBULA_DIST", default_value = "crates/nebula-web/dist")]
    dist: PathBuf,
    /// Open the page in the default browser
    #[arg(long)]
    open: bool,
}

impl ServeArgs {
    /// Defaults plus `NEBULA_PORT` / `NEBULA_DIST`, as if `serve` had no flags
    fn from_env() -> Result<Self> {
        ServeArgs::try_parse_from(["nebula"]).context("Invalid NEBULA_PORT or NEBULA_DIST")
    }
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the landing page (default)
    Serve(ServeArgs),
    /// Print page content
    Content {
        /// Only this section
        #[arg(long, short = 's', value_enum)]
        section: Option<Section>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective site config as TOML
    Config {
        /// Ignore --config and print built-in defaults
        #[arg(long)]
        defaults: bool,
    },
    /// Show menu state and header color for a viewport width and scroll progress
    Preview {
        /// Viewport width in logical px
        #[arg(long, short = 'w')]
        width: f64,
        /// Scroll progress (0.0 - 1.0)
        #[arg(long, short = 'p', default_value = "0")]
        progress: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.no_color);

    let mode = match cli.mode {
        Some(mode) => mode,
        None => Mode::Serve(ServeArgs::from_env()?),
    };

    // `config --defaults` must work even when the file is broken
    if let Mode::Config { defaults: true } = mode {
        print!("{}", cli::render_config(&SiteConfig::default())?);
        return Ok(());
    }

    let config = load_config(cli.config.as_deref())?;

    match mode {
        Mode::Serve(args) => run_serve(config, args).await?,
        Mode::Content { section, json } => {
            let catalog = catalog();
            if json {
                println!("{}", cli::render_json(&catalog, section)?);
            } else {
                let sections = match section {
                    Some(s) => vec![s],
                    None => vec![
                        Section::Nav,
                        Section::Models,
                        Section::Technology,
                        Section::About,
                        Section::Testimonials,
                    ],
                };
                println!("{}", catalog.brand);
                for s in sections {
                    println!();
                    println!("{:?}", s);
                    println!("{}", cli::render_section(&catalog, s, cli.no_color));
                }
            }
        }
        Mode::Config { .. } => print!("{}", cli::render_config(&config)?),
        Mode::Preview { width, progress } => {
            print!("{}", cli::render_preview(&config, width, progress));
        }
    }

    Ok(())
}

fn init_tracing(quiet: bool, no_color: bool) {
    let default = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&std::path::Path>) -> Result<SiteConfig> {
    SiteConfig::load_or_default(path).map_err(|e| {
        let hint = e.suggestion();
        let err = anyhow::Error::new(e);
        match hint {
            Some(h) => err.context(format!("Could not load site config ({})", h)),
            None => err.context("Could not load site config"),
        }
    })
}

async fn run_serve(config: SiteConfig, args: ServeArgs) -> Result<()> {
    let ServeArgs {
        host,
        port,
        dist,
        open,
    } = args;
    let has_bundle = dist.join("index.html").is_file();
    if has_bundle {
        info!(dist = %dist.display(), "Frontend bundle found");
    } else {
        warn!(dist = %dist.display(), "Frontend bundle missing, run 'trunk build' in crates/nebula-web");
    }

    let options = ServeOptions {
        host,
        port,
        dist: Some(dist),
    };

    if open {
        let url = format!("http://{}", options.addr());
        if let Err(e) = open::that(&url) {
            warn!("Failed to open browser at {}: {}", url, e);
        }
    }

    nebula_web::run(config, options)
        .await
        .context("Web server exited with an error")
}
