//! Response envelopes and error bodies

use serde::Deserialize;

/// Lists and single objects arrive either bare or wrapped in `{"data": ...}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(data) => data,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    /// Human-readable message from an error response, falling back to the
    /// raw body.
    pub(crate) fn extract(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        parsed
            .message
            .or(parsed.error)
            .filter(|m| !m.trim().is_empty())
            .or_else(|| {
                let raw = body.trim();
                (!raw.is_empty()).then(|| raw.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_accepts_both_shapes() {
        let wrapped: Envelope<Vec<u32>> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        let bare: Envelope<Vec<u32>> = serde_json::from_str("[3]").unwrap();
        assert_eq!(wrapped.into_inner(), vec![1, 2]);
        assert_eq!(bare.into_inner(), vec![3]);
    }

    #[test]
    fn test_error_message_sources() {
        assert_eq!(ErrorBody::extract(r#"{"message":"Space is occupied"}"#).as_deref(), Some("Space is occupied"));
        assert_eq!(ErrorBody::extract(r#"{"error":"Not found"}"#).as_deref(), Some("Not found"));
        assert_eq!(ErrorBody::extract("Bad Gateway").as_deref(), Some("Bad Gateway"));
        assert_eq!(ErrorBody::extract("  "), None);
    }
}
