//! Provider dispatch: one normalized request in, plain text or a typed
//! failure out.
//!
//! [`Dispatcher`] looks the provider up in the static registry, refuses to
//! touch the network when no credential is configured, issues exactly one
//! POST through its [`HttpTransport`], and maps the answer:
//!
//! ```text
//! no credential        → DispatchError::MissingCredential   (no call made)
//! transport failure    → DispatchError::Transport
//! non-2xx status       → DispatchError::Provider            (raw body kept)
//! 2xx, text found      → Ok(text)
//! 2xx, text not found  → Ok("")
//! ```
//!
//! No retries and no caching.

use std::sync::Arc;

use thiserror::Error;

use crate::config::{ApiKeys, AppConfig};
use crate::llm::prompt;
use crate::llm::provider::ProviderId;
use crate::llm::transport::{HttpTransport, ReqwestTransport, TransportError};

// ---------------------------------------------------------------------------
// ProcessingRequest
// ---------------------------------------------------------------------------

/// What to send, with which instruction, to which provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingRequest {
    pub content: String,
    pub instruction: String,
    pub provider: ProviderId,
}

impl ProcessingRequest {
    pub fn new(
        content: impl Into<String>,
        instruction: impl Into<String>,
        provider: ProviderId,
    ) -> Self {
        Self {
            content: content.into(),
            instruction: instruction.into(),
            provider,
        }
    }

    /// Request that uses a file's basename as the content.
    pub fn for_filename(
        basename: &str,
        instruction: impl Into<String>,
        provider: ProviderId,
    ) -> Self {
        Self::new(prompt::filename_context(basename), instruction, provider)
    }
}

// ---------------------------------------------------------------------------
// DispatchError
// ---------------------------------------------------------------------------

/// Coarse classification of a failed dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Missing credential; nothing was sent.
    Configuration,
    /// The provider answered with a non-success status.
    Provider,
    /// No answer at all.
    Transport,
}

/// Errors returned by [`Dispatcher::dispatch`].
///
/// The `Display` text is what the user sees, always qualified with the
/// provider's display name.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("{provider} credential not configured")]
    MissingCredential { provider: &'static str },

    #[error("{provider} API error: {body}")]
    Provider {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("{provider} request failed: {error}")]
    Transport {
        provider: &'static str,
        error: TransportError,
    },
}

impl DispatchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            DispatchError::MissingCredential { .. } => FailureKind::Configuration,
            DispatchError::Provider { .. } => FailureKind::Provider,
            DispatchError::Transport { .. } => FailureKind::Transport,
        }
    }
}

/// `Ok(text)` on success (possibly empty), `Err` with a provider-qualified
/// message otherwise.
pub type ProviderResult = Result<String, DispatchError>;

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Routes [`ProcessingRequest`]s to the configured providers.
pub struct Dispatcher {
    transport: Arc<dyn HttpTransport>,
    keys: ApiKeys,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn HttpTransport>, keys: ApiKeys) -> Self {
        Self { transport, keys }
    }

    /// Dispatcher using the real network and the credentials from `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(ReqwestTransport::new()), config.api_keys.clone())
    }

    /// Send `request` to its provider and return the answer text.
    pub async fn dispatch(&self, request: &ProcessingRequest) -> ProviderResult {
        let profile = request.provider.profile();

        let key = self
            .keys
            .key_for(request.provider)
            .ok_or(DispatchError::MissingCredential {
                provider: profile.display_name,
            })?;

        let text = prompt::compose(&request.instruction, &request.content);
        let http_request = profile.build_request(key, &text);

        log::debug!(
            "dispatch: {} ({} chars of model-facing text)",
            request.provider,
            text.chars().count()
        );

        let response = self
            .transport
            .post_json(http_request)
            .await
            .map_err(|error| DispatchError::Transport {
                provider: profile.display_name,
                error,
            })?;

        if !response.is_success() {
            log::warn!(
                "dispatch: {} answered with status {}",
                request.provider,
                response.status
            );
            return Err(DispatchError::Provider {
                provider: profile.display_name,
                status: response.status,
                body: response.text,
            });
        }

        match response.json.as_ref().and_then(|body| profile.text_of(body)) {
            Some(answer) => Ok(answer.to_string()),
            None => {
                log::debug!(
                    "dispatch: {} response had no text at the expected path",
                    request.provider
                );
                Ok(String::new())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
