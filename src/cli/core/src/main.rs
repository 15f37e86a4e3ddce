/* src/cli/core/src/main.rs */

mod config;
mod render;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use pagestat_server::{ContentTree, ReportServer, load_content_tree};
use pagestat_server_axum::IntoAxumRouter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use config::{PagestatConfig, find_pagestat_config, load_pagestat_config};

#[derive(Parser)]
#[command(name = "pagestat", about = "Unactivated page statistics per market and locale")]
struct Cli {
  /// Emit logs as JSON lines on stderr
  #[arg(long, global = true)]
  log_json: bool,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Print the unactivated page report for a project path
  Report {
    /// Project path, e.g. /projects/content/site
    project: String,
    /// Path to pagestat.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Content export JSON (overrides content.file)
    #[arg(long)]
    content: Option<PathBuf>,
    /// Segment stripped from the project path (overrides content.projects_segment)
    #[arg(long)]
    segment: Option<String>,
    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,
  },
  /// Serve reports over HTTP
  Serve {
    /// Path to pagestat.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Content export JSON (overrides content.file)
    #[arg(long)]
    content: Option<PathBuf>,
    /// Listen port (overrides server.port)
    #[arg(short, long)]
    port: Option<u16>,
  },
}

fn init_tracing(json: bool, default_level: &str) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  if json {
    tracing_subscriber::registry()
      .with(filter)
      .with(fmt::layer().json().with_writer(std::io::stderr))
      .init();
  } else {
    tracing_subscriber::registry()
      .with(filter)
      .with(fmt::layer().with_writer(std::io::stderr))
      .init();
  }
}

/// Resolve config (explicit, auto-detected, or defaults) and the directory it anchors.
/// A missing config is only an error when it was passed explicitly.
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, PagestatConfig)> {
  if let Some(path) = explicit {
    let config = load_pagestat_config(&path)?;
    let base = path.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    return Ok((base, config));
  }

  let cwd = std::env::current_dir().context("failed to get cwd")?;
  match find_pagestat_config(&cwd) {
    Ok(path) => {
      let config = load_pagestat_config(&path)?;
      let base = path.parent().map_or_else(|| cwd.clone(), Path::to_path_buf);
      Ok((base, config))
    }
    Err(e) => {
      tracing::debug!(error = %e, "no pagestat.toml, using defaults");
      Ok((cwd, PagestatConfig::default()))
    }
  }
}

fn load_tree(
  flag: Option<PathBuf>,
  config: &PagestatConfig,
  base: &Path,
) -> Result<(PathBuf, ContentTree)> {
  let Some(path) = flag.or_else(|| config.content_file(base)) else {
    bail!("no content file: pass --content or set content.file in pagestat.toml");
  };
  let tree =
    load_content_tree(&path).with_context(|| format!("failed to load {}", path.display()))?;
  Ok((path, tree))
}

fn run_report(
  project: &str,
  config: Option<PathBuf>,
  content: Option<PathBuf>,
  segment: Option<String>,
  json: bool,
) -> Result<()> {
  let (base, cfg) = resolve_config(config)?;
  let segment = segment.unwrap_or_else(|| cfg.content.projects_segment.clone());

  if !json {
    ui::banner("report");
  }
  let (path, tree) = load_tree(content, &cfg, &base)?;
  if !json {
    ui::arrow(&format!("reading {}", path.display()));
  }

  let parts = ReportServer::new(tree).projects_segment(segment).into_parts();
  let report = parts.report(Some(project));

  if json {
    println!("{}", serde_json::to_string_pretty(&report)?);
    return Ok(());
  }

  ui::blank();
  if report.is_empty() {
    ui::warn(&format!("no markets found under {project}"));
  } else {
    print!("{}", render::render_table(&report));
    ui::blank();
    ui::ok(&format!("{} markets, {} unactivated pages", report.len(), report.total()));
  }
  Ok(())
}

async fn run_serve(
  config: Option<PathBuf>,
  content: Option<PathBuf>,
  port: Option<u16>,
) -> Result<()> {
  let (base, mut cfg) = resolve_config(config)?;
  if let Some(port) = port {
    cfg.server.port = port;
  }

  ui::banner("serve");
  let (path, tree) = load_tree(content, &cfg, &base)?;
  ui::arrow(&format!("reading {}", path.display()));
  ui::ok(&format!("serving on http://{}/_pagestat/report", cfg.server_addr()));

  ReportServer::new(tree)
    .projects_segment(cfg.content.projects_segment.clone())
    .serve(&cfg.server_addr())
    .await
    .map_err(|e| anyhow!("server error: {e}"))
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Command::Report { project, config, content, segment, json } => {
      init_tracing(cli.log_json, "warn");
      run_report(&project, config, content, segment, json)?;
    }
    Command::Serve { config, content, port } => {
      init_tracing(cli.log_json, "info");
      run_serve(config, content, port).await?;
    }
  }

  Ok(())
}
