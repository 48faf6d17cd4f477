//! Async HTTP client wrapping the vows JSON API.

use std::{collections::BTreeMap, time::Duration};

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, StatusCode};
use vows_core::{
  countdown::Countdown, display::MessageCard, rsvp::Rsvp, stats::RsvpStats,
  validate::RsvpForm,
};

/// Connection settings for the vows API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// What the server made of a submission.
pub enum SubmitOutcome {
  Accepted(Rsvp),
  Rejected(BTreeMap<String, String>),
}

/// Async HTTP client for the vows JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/api{}",
      self.config.base_url.trim_end_matches('/'),
      path
    )
  }

  // ── RSVPs ─────────────────────────────────────────────────────────────────

  /// `GET /api/rsvps`
  pub async fn list_rsvps(&self) -> Result<Vec<Rsvp>> {
    let resp = self
      .client
      .get(self.url("/rsvps"))
      .send()
      .await
      .context("GET /rsvps failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET /rsvps → {}", resp.status()));
    }
    resp.json().await.context("deserialising RSVPs")
  }

  /// `GET /api/rsvps/stats`
  pub async fn stats(&self) -> Result<RsvpStats> {
    let resp = self
      .client
      .get(self.url("/rsvps/stats"))
      .send()
      .await
      .context("GET /rsvps/stats failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET /rsvps/stats → {}", resp.status()));
    }
    resp.json().await.context("deserialising stats")
  }

  /// `POST /api/rsvps`
  ///
  /// A 422 is not an error at this layer: the per-field messages come back
  /// as [`SubmitOutcome::Rejected`] for the caller to print.
  pub async fn submit(&self, form: &RsvpForm) -> Result<SubmitOutcome> {
    let resp = self
      .client
      .post(self.url("/rsvps"))
      .json(form)
      .send()
      .await
      .context("POST /rsvps failed")?;

    match resp.status() {
      StatusCode::CREATED => {
        let rsvp = resp.json().await.context("deserialising RSVP")?;
        Ok(SubmitOutcome::Accepted(rsvp))
      }
      StatusCode::UNPROCESSABLE_ENTITY => {
        #[derive(serde::Deserialize)]
        struct Rejection {
          errors: BTreeMap<String, String>,
        }
        let rejection: Rejection =
          resp.json().await.context("deserialising rejection")?;
        Ok(SubmitOutcome::Rejected(rejection.errors))
      }
      status => Err(anyhow!("POST /rsvps → {status}")),
    }
  }

  // ── Messages & countdown ──────────────────────────────────────────────────

  /// `GET /api/messages`
  pub async fn messages(&self) -> Result<Vec<MessageCard>> {
    let resp = self
      .client
      .get(self.url("/messages"))
      .send()
      .await
      .context("GET /messages failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET /messages → {}", resp.status()));
    }
    resp.json().await.context("deserialising messages")
  }

  /// `GET /api/countdown`
  pub async fn countdown(&self) -> Result<Countdown> {
    let resp = self
      .client
      .get(self.url("/countdown"))
      .send()
      .await
      .context("GET /countdown failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET /countdown → {}", resp.status()));
    }
    resp.json().await.context("deserialising countdown")
  }
}
