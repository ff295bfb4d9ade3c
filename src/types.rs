//! Common types and data structures

use serde::Deserialize;
use std::time::Instant;

/// A single quote returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    pub content: String,
    pub author: String,
}

/// Response envelope of `search/quotes`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuoteResponse {
    // `null` and a missing field both mean no results
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<Quote>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Quote>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Quote>>::deserialize(deserializer)?.unwrap_or_default())
}

/// What the search screen is currently showing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Results(Vec<Quote>),
}

/// Result of asking the controller to search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A fetch was issued with this sequence number
    Submitted(u64),
    /// The query was blank; nothing happened apart from the notice
    EmptyQuery,
}

/// Transient notification shown as a toast
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub raised_at: Instant,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            raised_at: Instant::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_ignores_unknown_fields() {
        let json = r#"{"count":1,"results":[{"_id":"x","content":"C1","author":"A1","tags":[]}]}"#;
        let response: QuoteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.results,
            vec![Quote {
                content: "C1".into(),
                author: "A1".into()
            }]
        );
    }

    #[test]
    fn missing_or_null_results_are_empty() {
        let missing: QuoteResponse = serde_json::from_str("{}").unwrap();
        let null: QuoteResponse = serde_json::from_str(r#"{"results":null}"#).unwrap();
        assert!(missing.results.is_empty());
        assert!(null.results.is_empty());
    }

    #[test]
    fn empty_results_differ_from_idle() {
        assert_ne!(ViewState::Results(Vec::new()), ViewState::Idle);
        assert_eq!(ViewState::default(), ViewState::Idle);
    }
}
