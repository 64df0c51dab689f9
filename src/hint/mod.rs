//! Hint provider boundary.
//!
//! Providers may fail in any way they like; [`request_hint`] turns every
//! failure into one of two canned strings so the game never stalls on a hint.

pub mod gemini;

pub use gemini::{GeminiConfig, GeminiHintProvider};

use std::{future::Future, pin::Pin, sync::Arc, time::Duration};

use thiserror::Error;
use tracing::{debug, warn};

use crate::game::HintRequest;

pub const FALLBACK_TOO_HIGH: &str = "Too high, try smaller!";
pub const FALLBACK_TOO_LOW: &str = "Too low, think bigger!";

pub type HintFuture<'a> = Pin<Box<dyn Future<Output = Result<String, HintError>> + Send + 'a>>;

#[derive(Debug, Error)]
pub enum HintError {
    #[error("hint request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("hint service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("hint service returned no text")]
    EmptyResponse,

    #[error("hint request timed out after {0:?}")]
    Timeout(Duration),

    #[error("hints are disabled")]
    Disabled,
}

pub trait HintProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn hint<'a>(&'a self, request: &'a HintRequest) -> HintFuture<'a>;
}

/// Provider used when no API key is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineHintProvider;

impl HintProvider for OfflineHintProvider {
    fn name(&self) -> &'static str {
        "offline"
    }

    fn hint<'a>(&'a self, _request: &'a HintRequest) -> HintFuture<'a> {
        Box::pin(async { Err::<String, _>(HintError::Disabled) })
    }
}

/// Gemini when configured, canned hints otherwise.
pub fn build_provider(config: Option<GeminiConfig>) -> Arc<dyn HintProvider> {
    match config {
        Some(config) => Arc::new(GeminiHintProvider::new(config)),
        None => {
            warn!("no Gemini API key configured, hints will be canned");
            Arc::new(OfflineHintProvider)
        }
    }
}

pub fn fallback_hint(guess: u8, target: u8) -> &'static str {
    if guess > target {
        FALLBACK_TOO_HIGH
    } else {
        FALLBACK_TOO_LOW
    }
}

/// Ask `provider` for a hint, bounded by `timeout`. Always returns a
/// non-empty string.
pub async fn request_hint(
    provider: &dyn HintProvider,
    request: &HintRequest,
    timeout: Duration,
) -> String {
    let result = match tokio::time::timeout(timeout, provider.hint(request)).await {
        Ok(result) => result,
        Err(_) => Err(HintError::Timeout(timeout)),
    };

    match result {
        Ok(text) if !text.trim().is_empty() => {
            debug!(provider = provider.name(), attempt = request.attempt, "hint received");
            text.trim().to_string()
        }
        Ok(_) => fallback(provider, request, &HintError::EmptyResponse),
        Err(err) => fallback(provider, request, &err),
    }
}

fn fallback(provider: &dyn HintProvider, request: &HintRequest, err: &HintError) -> String {
    if matches!(err, HintError::Disabled) {
        debug!(provider = provider.name(), "using canned hint");
    } else {
        warn!(provider = provider.name(), attempt = request.attempt, error = %err, "hint failed, using fallback");
    }
    fallback_hint(request.guess, request.target).to_string()
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    fn request(guess: u8, target: u8) -> HintRequest {
        HintRequest {
            guess,
            target,
            attempt: 1,
            player_name: "Merlin".to_string(),
        }
    }

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn test_build_provider_picks_by_config() {
        assert_eq!(build_provider(None).name(), "offline");
        assert_eq!(build_provider(Some(GeminiConfig::new("key"))).name(), "gemini");
    }

    #[test]
    fn test_fallback_hint_direction() {
        assert_eq!(fallback_hint(80, 50), FALLBACK_TOO_HIGH);
        assert_eq!(fallback_hint(20, 50), FALLBACK_TOO_LOW);
    }

    #[tokio::test]
    async fn test_failed_provider_falls_back_to_too_high() {
        let text = request_hint(&FailingHintProvider, &request(80, 50), TIMEOUT).await;
        assert_eq!(text, FALLBACK_TOO_HIGH);
        assert!(!text.is_empty());
    }

    #[tokio::test]
    async fn test_failed_provider_falls_back_to_too_low() {
        let text = request_hint(&FailingHintProvider, &request(3, 50), TIMEOUT).await;
        assert_eq!(text, FALLBACK_TOO_LOW);
    }

    #[tokio::test]
    async fn test_offline_provider_uses_fallback() {
        let text = request_hint(&OfflineHintProvider, &request(99, 1), TIMEOUT).await;
        assert_eq!(text, FALLBACK_TOO_HIGH);
    }

    #[tokio::test]
    async fn test_blank_reply_uses_fallback() {
        let provider = ScriptedHintProvider::new("   ");
        let text = request_hint(&provider, &request(10, 50), TIMEOUT).await;
        assert_eq!(text, FALLBACK_TOO_LOW);
    }

    #[tokio::test]
    async fn test_reply_is_trimmed() {
        let provider = ScriptedHintProvider::new("  Colder than a dragon's heart.\n");
        let text = request_hint(&provider, &request(10, 50), TIMEOUT).await;
        assert_eq!(text, "Colder than a dragon's heart.");
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_stalled_provider_times_out() {
        let text =
            request_hint(&StalledHintProvider, &request(90, 50), Duration::from_millis(20)).await;
        assert_eq!(text, FALLBACK_TOO_HIGH);
    }
}
