//! `huddle`: print activity feeds, notifications and activity pages.
//!
//! # Usage
//!
//! ```text
//! huddle feed --scope-type project --scope-id pr1 --page project
//! huddle notifications --unread --mark-read
//! huddle show a1 --json
//! huddle render feed.json --page space
//! ```
//!
//! Settings come from `huddle.toml` (or `--config`), then `HUDDLE_*`
//! environment variables, then flags.

mod output;
mod preview;
mod routes;
mod settings;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use huddle_activities::{Error as RenderError, Page, Renderer};
use huddle_client::{ActivityQuery, ApiClient, ScopeType, case};
use huddle_core::FeedEntry;
use routes::CompanyRoutes;
use serde::Serialize;
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "huddle", version, about = "Render huddle activity feeds")]
struct Args {
  /// Path to a TOML config file.
  #[arg(short, long, value_name = "FILE", default_value = "huddle.toml")]
  config: PathBuf,

  /// Base URL of the huddle API.
  #[arg(long, env = "HUDDLE_URL")]
  url: Option<String>,

  /// API bearer token.
  #[arg(long, env = "HUDDLE_TOKEN", hide_env_values = true)]
  token: Option<String>,

  /// Company slug used in rendered links.
  #[arg(long)]
  company: Option<String>,

  /// Print render descriptions as JSON.
  #[arg(long, global = true)]
  json: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Show the activity feed of a company, space, goal or project.
  Feed {
    #[arg(long, value_enum)]
    scope_type: Scope,
    #[arg(long)]
    scope_id:   String,
    /// Only these actions (repeatable).
    #[arg(long = "action")]
    actions:    Vec<String>,
    /// The page the feed is embedded in.
    #[arg(long, value_parser = parse_page)]
    page:       Option<Page>,
  },
  /// List notifications.
  Notifications {
    #[arg(long, default_value_t = 1)]
    page_number: u32,
    #[arg(long, default_value_t = 20)]
    per_page:    u32,
    /// Hide notifications that were already read.
    #[arg(long)]
    unread:      bool,
    /// Mark the listed unread notifications as read.
    #[arg(long)]
    mark_read:   bool,
  },
  /// Show the standalone page of one activity.
  Show { id: String },
  /// Render a JSON array of feed entries from a file, without the API.
  Render {
    file: PathBuf,
    #[arg(long, value_parser = parse_page)]
    page: Option<Page>,
  },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Scope {
  Company,
  Space,
  Goal,
  Project,
}

impl From<Scope> for ScopeType {
  fn from(scope: Scope) -> Self {
    match scope {
      Scope::Company => Self::Company,
      Scope::Space => Self::Space,
      Scope::Goal => Self::Goal,
      Scope::Project => Self::Project,
    }
  }
}

fn parse_page(s: &str) -> Result<Page, String> {
  s.parse()
    .map_err(|_| format!("unknown page `{s}` (company, space, goal, project, profile)"))
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  // Flags override environment, which overrides the config file.
  let mut settings = Settings::load(&args.config)?;
  if let Some(url) = args.url {
    settings.base_url = url;
  }
  if let Some(token) = args.token {
    settings.token = token;
  }
  if let Some(company) = args.company {
    settings.company = company;
  }

  let routes = CompanyRoutes::new(&settings.company);
  let renderer = Renderer::new(&routes);

  let client = ApiClient::new(settings.api()).context("failed to build API client")?;
  run(&client, &renderer, args.command, args.json).await
}

async fn run(
  client: &ApiClient,
  renderer: &Renderer<'_>,
  command: Command,
  json: bool,
) -> Result<()> {
  match command {
    Command::Feed {
      scope_type,
      scope_id,
      actions,
      page,
    } => {
      let query = ActivityQuery {
        scope_id,
        scope_type: scope_type.into(),
        actions,
      };
      let entries = client
        .get_activities(&query)
        .await
        .context("fetching activities")?;
      print_feed(renderer, &entries, page, json)
    }

    Command::Notifications {
      page_number,
      per_page,
      unread,
      mark_read,
    } => {
      let notifications = client
        .get_notifications(page_number, per_page)
        .await
        .context("fetching notifications")?;

      let mut views = Vec::new();
      for n in notifications.iter().filter(|n| !unread || !n.read) {
        let view = renderer
          .notification(&n.activity)
          .with_context(|| format!("rendering notification {}", n.id))?;
        if json {
          views.push(view);
        } else {
          println!("{}", output::notification(&view, n.read));
        }
      }
      if json {
        print_json(&views)?;
      }

      if mark_read {
        for n in notifications.iter().filter(|n| !n.read) {
          client
            .mark_notification_as_read(&n.id)
            .await
            .with_context(|| format!("marking notification {} as read", n.id))?;
        }
        tracing::info!("marked unread notifications as read");
      }
      Ok(())
    }

    Command::Show { id } => {
      let activity = client
        .get_activity(&id)
        .await
        .with_context(|| format!("fetching activity {id}"))?;

      match renderer.page(&activity) {
        Ok(view) if json => print_json(&view),
        Ok(view) => {
          println!("{}", output::page(&view));
          Ok(())
        }
        // Variants without a page fall back to their feed row.
        Err(RenderError::NotImplemented { .. }) => {
          let view = renderer.feed_item(&activity, None)?;
          if json {
            print_json(&view)
          } else {
            println!("{}", output::feed_item(&view));
            Ok(())
          }
        }
        Err(e) => Err(e).with_context(|| format!("rendering activity {id}")),
      }
    }

    Command::Render { file, page } => render_file(renderer, &file, page, json),
  }
}

fn render_file(
  renderer: &Renderer<'_>,
  file: &Path,
  page: Option<Page>,
  json: bool,
) -> Result<()> {
  let raw = std::fs::read_to_string(file)
    .with_context(|| format!("reading {}", file.display()))?;
  let value: serde_json::Value =
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", file.display()))?;
  // Accept both API (snake_case) and app (camelCase) dumps.
  let entries: Vec<FeedEntry> =
    serde_json::from_value(case::to_camel_keys(value)).context("decoding feed entries")?;
  print_feed(renderer, &entries, page, json)
}

fn print_feed(
  renderer: &Renderer<'_>,
  entries: &[FeedEntry],
  page: Option<Page>,
  json: bool,
) -> Result<()> {
  let views = entries
    .iter()
    .map(|e| renderer.feed_item(e, page))
    .collect::<Result<Vec<_>, _>>()
    .context("rendering feed")?;

  if json {
    return print_json(&views);
  }
  for view in &views {
    println!("{}\n", output::feed_item(view));
  }
  Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
  let out = serde_json::to_string_pretty(value).context("serialising output")?;
  println!("{out}");
  Ok(())
}
