//! viddl-nav
//!
//! ```text
//!   config.toml ──▶ SiteConfig ──▶ PlatformRegistry ──▶ RouteTable
//!                                                          │
//!            request path ──▶ resolve ──▶ interceptor ──▶ HTML shell
//! ```
//!
//! Subcommands:
//! - `routes`  : print the route table
//! - `resolve` : show which route a path lands on
//! - `render`  : write the shell with a path's metadata applied
//! - `serve`   : prerender server

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use viddl_nav::config::loader::load_or_default;
use viddl_nav::observability::{logging, metrics};
use viddl_nav::routing::RouteTarget;
use viddl_nav::{HttpServer, Site};

#[derive(Parser)]
#[command(name = "viddl-nav")]
#[command(about = "Route table and SEO metadata for viddl.me", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, env = "VIDDL_NAV_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table in resolution order
    Routes {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the route a path resolves to
    Resolve { path: String },
    /// Render the HTML shell with a path's metadata
    Render {
        path: String,
        /// Shell template (defaults to server.shell_path, then the built-in shell)
        #[arg(long)]
        shell: Option<PathBuf>,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Run the prerender server
    Serve {
        /// Override server.bind_address
        #[arg(short, long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = load_or_default(cli.config.as_deref())?;

    logging::init(&config.observability);
    tracing::debug!(config = ?cli.config, "Configuration loaded");

    match cli.command {
        Commands::Routes { json } => {
            let site = Site::bootstrap(config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(site.routes().as_ref())?);
            } else {
                for (index, route) in site.routes().iter().enumerate() {
                    let target = match &route.target {
                        RouteTarget::View { view, .. } => format!("{:?}", view),
                        RouteTarget::Redirect { to } => format!("-> {}", to),
                    };
                    let title = route.meta.as_ref().map(|m| m.title.as_str()).unwrap_or("");
                    println!("{:>2}  {:<24} {:<10} {}", index, route.path.to_string(), target, title);
                }
            }
        }
        Commands::Resolve { path } => {
            let site = Site::bootstrap(config)?;
            let resolved = site.routes().resolve(&path);
            println!("route:     {}", resolved.route.label());
            println!("path:      {}", resolved.location.full_path());
            if let Some(from) = &resolved.redirected_from {
                println!("redirect:  {} -> {}", from.full_path(), resolved.location.full_path());
            }
            println!("title:     {}", site.interceptor().effective_title(&resolved.route));
            println!("canonical: {}", site.interceptor().canonical_url(&resolved));
        }
        Commands::Render { path, shell, out } => {
            if shell.is_some() {
                config.server.shell_path = shell;
            }
            let site = Site::bootstrap(config)?;
            let page = site.render(&site.load_shell()?, &path);
            match out {
                Some(out) => std::fs::write(out, page.html)?,
                None => print!("{}", page.html),
            }
        }
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind_address = bind;
            }
            let bind_address = config.server.bind_address.clone();

            if config.observability.metrics_enabled {
                match config.observability.metrics_address.parse() {
                    Ok(addr) => metrics::init_metrics(addr),
                    Err(_) => tracing::error!(
                        metrics_address = %config.observability.metrics_address,
                        "Failed to parse metrics address"
                    ),
                }
            }

            let site = Site::bootstrap(config)?;
            let shell = site.load_shell()?;

            let listener = TcpListener::bind(&bind_address).await?;
            tracing::info!(address = %listener.local_addr()?, "Listening for connections");

            HttpServer::new(site, shell).run(listener).await?;
            tracing::info!("Shutdown complete");
        }
    }

    Ok(())
}
