//! `vows` — command-line dashboard for the wedding RSVP server.
//!
//! # Usage
//!
//! ```
//! vows --url http://localhost:8080 stats
//! vows list
//! vows messages
//! vows submit --name "Alia" --attendance yes --guests 2 --message "Tahniah!"
//! ```

mod client;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client::{ApiClient, ApiConfig, SubmitOutcome};
use serde::Deserialize;
use vows_core::{
  display::response_rows,
  validate::{self, RsvpForm},
};

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "vows", about = "Dashboard for the wedding RSVP server")]
struct Args {
  /// Path to a TOML config file (url).
  #[arg(short, long, value_name = "FILE")]
  config: Option<std::path::PathBuf>,

  /// Base URL of the vows server (default: http://localhost:8080).
  #[arg(long, env = "VOWS_URL")]
  url: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Aggregate response counts.
  Stats,
  /// Every submission, newest first.
  List,
  /// Guest messages, newest first.
  Messages,
  /// Time remaining until the event.
  Countdown,
  /// Submit an RSVP.
  Submit {
    #[arg(long)]
    name:       String,
    /// "yes" or "no".
    #[arg(long)]
    attendance: String,
    #[arg(long)]
    guests:     i64,
    #[arg(long)]
    message:    Option<String>,
  },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let api_config = ApiConfig {
    base_url: args
      .url
      .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
      .unwrap_or_else(|| "http://localhost:8080".to_string()),
  };

  let client = ApiClient::new(api_config)?;

  match args.command {
    Command::Stats => print_stats(&client).await,
    Command::List => print_list(&client).await,
    Command::Messages => print_messages(&client).await,
    Command::Countdown => print_countdown(&client).await,
    Command::Submit { name, attendance, guests, message } => {
      submit(&client, RsvpForm { name, attendance, guests, message }).await
    }
  }
}

// ─── Commands ─────────────────────────────────────────────────────────────────

async fn print_stats(client: &ApiClient) -> Result<()> {
  let stats = client.stats().await?;
  println!("Total responses      {}", stats.total_responses);
  println!("Attending            {}", stats.attending);
  println!("Not attending        {}", stats.not_attending);
  println!("Total guests         {}", stats.total_guests);
  println!("Attendance rate      {}%", stats.attending_percentage);
  Ok(())
}

async fn print_list(client: &ApiClient) -> Result<()> {
  let rsvps = client.list_rsvps().await?;
  if rsvps.is_empty() {
    println!("No responses yet.");
    return Ok(());
  }

  println!(
    "{:<24} {:<10} {:>6}  {:<12} MESSAGE",
    "NAME", "ATTENDING", "GUESTS", "DATE"
  );
  for row in response_rows(&rsvps) {
    println!(
      "{:<24} {:<10} {:>6}  {:<12} {}",
      row.name,
      row.attendance.as_str(),
      row.guests.map_or_else(|| "-".to_string(), |g| g.to_string()),
      row.submitted_on,
      row.message.as_deref().unwrap_or(""),
    );
  }
  Ok(())
}

async fn print_messages(client: &ApiClient) -> Result<()> {
  let cards = client.messages().await?;
  if cards.is_empty() {
    println!("No messages yet.");
    return Ok(());
  }

  for card in cards {
    println!(
      "[{}] {} ({})\n    {}",
      card.avatar_initial, card.name, card.relative_time, card.message
    );
  }
  Ok(())
}

async fn print_countdown(client: &ApiClient) -> Result<()> {
  let c = client.countdown().await?;
  if c.is_over() {
    println!("The big day has arrived!");
  } else {
    println!(
      "{} days, {} hours, {} minutes, {} seconds to go",
      c.days, c.hours, c.minutes, c.seconds
    );
  }
  Ok(())
}

async fn submit(client: &ApiClient, form: RsvpForm) -> Result<()> {
  // Validate locally first so obvious mistakes never leave the machine.
  if let Err(violations) = validate::validate(&form) {
    eprintln!("Submission rejected:");
    for (field, message) in violations.iter() {
      eprintln!("  {field}: {message}");
    }
    anyhow::bail!("invalid submission");
  }

  match client.submit(&form).await? {
    SubmitOutcome::Accepted(rsvp) => {
      println!("Recorded RSVP {} for {}.", rsvp.id, rsvp.name);
    }
    SubmitOutcome::Rejected(errors) => {
      eprintln!("Server rejected the submission:");
      for (field, message) in errors {
        eprintln!("  {field}: {message}");
      }
      anyhow::bail!("invalid submission");
    }
  }
  Ok(())
}
