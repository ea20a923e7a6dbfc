//! Lesson suggestion providers.
//!
//! A provider proposes a short next step for the current lesson given the
//! concept and what is on the board. Providers are free to call out to a
//! remote service; the session path never depends on one succeeding, so
//! [`suggest_or_fallback`] is the entry point the app uses.

use crate::board::BoardItem;
use crate::storage::BoxFuture;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

/// Shown whenever a provider fails or returns nothing usable.
pub const FALLBACK_SUGGESTION: &str =
    "Try asking your students what they notice about the board!";

/// Who said a line in the suggestion conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    Teacher,
    Assistant,
}

/// One line of the running suggestion conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

/// Everything a provider gets to work with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    /// The concept being taught, e.g. "fractions".
    pub concept: String,
    /// Items currently on the board.
    pub board_contents: Vec<BoardItem>,
    /// Prior turns, oldest first.
    pub history: Vec<ChatTurn>,
}

impl SuggestionRequest {
    pub fn new(concept: impl Into<String>, board_contents: Vec<BoardItem>) -> Self {
        Self {
            concept: concept.into(),
            board_contents,
            history: Vec::new(),
        }
    }
}

/// Provider errors.
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("Suggestion service unavailable: {0}")]
    Unavailable(String),
    #[error("Suggestion request rejected: {0}")]
    Rejected(String),
}

/// Trait for suggestion backends.
#[cfg(not(target_arch = "wasm32"))]
pub trait SuggestionProvider: Send + Sync {
    /// Produce one suggestion for the request.
    fn suggest(&self, request: &SuggestionRequest) -> BoxFuture<'_, Result<String, SuggestError>>;
}

/// Trait for suggestion backends (WASM version without Send + Sync).
#[cfg(target_arch = "wasm32")]
pub trait SuggestionProvider {
    /// Produce one suggestion for the request.
    fn suggest(&self, request: &SuggestionRequest) -> BoxFuture<'_, Result<String, SuggestError>>;
}

/// Ask the provider, falling back to the canned line on any failure.
///
/// Never errors: a dead or misbehaving provider costs the teacher one
/// generic suggestion, not a broken lesson.
pub async fn suggest_or_fallback(
    provider: &dyn SuggestionProvider,
    request: &SuggestionRequest,
) -> String {
    match provider.suggest(request).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            log::warn!("suggestion provider returned an empty suggestion");
            FALLBACK_SUGGESTION.to_string()
        }
        Err(e) => {
            log::warn!("suggestion provider failed: {e}");
            FALLBACK_SUGGESTION.to_string()
        }
    }
}

/// Offline provider rotating through a fixed phrase list.
///
/// Phrases may contain a `{concept}` placeholder.
pub struct CannedSuggestions {
    phrases: Vec<String>,
    next: AtomicUsize,
}

impl Default for CannedSuggestions {
    fn default() -> Self {
        Self::new(vec![
            "Ask a student to come up and add one item about {concept}.".to_string(),
            "Draw a quick sketch of {concept} and have students guess what it is.".to_string(),
            "Have the class sort the board items into two groups.".to_string(),
            "Pick one item on the board and ask: how does this relate to {concept}?".to_string(),
        ])
    }
}

impl CannedSuggestions {
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            next: AtomicUsize::new(0),
        }
    }
}

impl SuggestionProvider for CannedSuggestions {
    fn suggest(&self, request: &SuggestionRequest) -> BoxFuture<'_, Result<String, SuggestError>> {
        let concept = request.concept.clone();
        Box::pin(async move {
            if self.phrases.is_empty() {
                return Err(SuggestError::Unavailable("no phrases configured".to_string()));
            }
            let index = self.next.fetch_add(1, Ordering::Relaxed) % self.phrases.len();
            Ok(self.phrases[index].replace("{concept}", &concept))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::block_on;

    struct FailingProvider;

    impl SuggestionProvider for FailingProvider {
        fn suggest(
            &self,
            _request: &SuggestionRequest,
        ) -> BoxFuture<'_, Result<String, SuggestError>> {
            Box::pin(async { Err(SuggestError::Unavailable("connection refused".to_string())) })
        }
    }

    struct BlankProvider;

    impl SuggestionProvider for BlankProvider {
        fn suggest(
            &self,
            _request: &SuggestionRequest,
        ) -> BoxFuture<'_, Result<String, SuggestError>> {
            Box::pin(async { Ok("   ".to_string()) })
        }
    }

    #[test]
    fn test_failing_provider_yields_fixed_fallback() {
        let request = SuggestionRequest::new("fractions", Vec::new());
        let text = block_on(suggest_or_fallback(&FailingProvider, &request));
        assert_eq!(text, FALLBACK_SUGGESTION);
    }

    #[test]
    fn test_blank_suggestion_yields_fallback() {
        let request = SuggestionRequest::new("fractions", Vec::new());
        let text = block_on(suggest_or_fallback(&BlankProvider, &request));
        assert_eq!(text, FALLBACK_SUGGESTION);
    }

    #[test]
    fn test_canned_provider_rotates_and_substitutes() {
        let provider = CannedSuggestions::new(vec![
            "First: {concept}".to_string(),
            "Second".to_string(),
        ]);
        let request = SuggestionRequest::new("fractions", Vec::new());

        assert_eq!(
            block_on(suggest_or_fallback(&provider, &request)),
            "First: fractions"
        );
        assert_eq!(block_on(suggest_or_fallback(&provider, &request)), "Second");
        // Wraps around.
        assert_eq!(
            block_on(suggest_or_fallback(&provider, &request)),
            "First: fractions"
        );
    }

    #[test]
    fn test_empty_phrase_list_falls_back() {
        let provider = CannedSuggestions::new(Vec::new());
        let request = SuggestionRequest::new("fractions", Vec::new());
        assert_eq!(
            block_on(suggest_or_fallback(&provider, &request)),
            FALLBACK_SUGGESTION
        );
    }
}
