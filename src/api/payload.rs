//! JSON request and response bodies of the REST API

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct RankRequest<'a> {
    pub ranking: &'a [String],
}

#[derive(Debug, Clone, Serialize)]
pub struct StarRequest {
    pub starred: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemsRequest<'a> {
    pub items: &'a [String],
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationRequest {
    pub location: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupRequest {
    pub group: u64,
}

/// `{"ok": bool}` answers, e.g. the deliberation status
#[derive(Debug, Clone, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

/// Error body the server sends with non-2xx statuses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: String,
}

impl ErrorBody {
    /// Pull the message out of a body, falling back to the raw text
    pub fn message_from(body: &str) -> String {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) if !parsed.error.is_empty() => parsed.error,
            _ => body.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_request_shape() {
        let ranking = vec!["a".to_string(), "b".to_string()];
        let json = serde_json::to_string(&RankRequest { ranking: &ranking }).unwrap();
        assert_eq!(json, r#"{"ranking":["a","b"]}"#);
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(
            ErrorBody::message_from(r#"{"error": "deliberation has started"}"#),
            "deliberation has started"
        );
        assert_eq!(ErrorBody::message_from("plain text\n"), "plain text");
    }
}
