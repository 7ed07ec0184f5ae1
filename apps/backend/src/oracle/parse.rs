//! Strict parsing of model completions into response schemas.
//!
//! Models are instructed to answer with exactly one JSON object, but in
//! practice wrap it in markdown fences or stray prose. The parser peels
//! the outermost object out of the reply and then insists it matches the
//! target serde type; anything less is an error, never a coercion.

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("reply contains no JSON object")]
    NoJsonObject,
    #[error("reply is not valid JSON for the expected schema: {0}")]
    Schema(String),
}

/// Extract the single JSON object from a model reply and deserialize it.
pub fn parse_reply<T: DeserializeOwned>(raw: &str) -> Result<T, ParseError> {
    let candidate = extract_object(raw).ok_or(ParseError::NoJsonObject)?;
    serde_json::from_str(candidate).map_err(|e| ParseError::Schema(e.to_string()))
}

/// Slice out the outermost `{ ... }` of the reply, tolerating markdown
/// fences and surrounding prose.
fn extract_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Reply {
        word: String,
        count: u8,
    }

    #[test]
    fn parses_a_bare_object() {
        let reply: Reply = parse_reply(r#"{"word": "overruled", "count": 3}"#).unwrap();
        assert_eq!(reply.word, "overruled");
        assert_eq!(reply.count, 3);
    }

    #[test]
    fn parses_a_fenced_object() {
        let raw = "```json\n{\"word\": \"sustained\", \"count\": 1}\n```";
        let reply: Reply = parse_reply(raw).unwrap();
        assert_eq!(reply.word, "sustained");
    }

    #[test]
    fn parses_an_object_wrapped_in_prose() {
        let raw = "Here is your object:\n{\"word\": \"gavel\", \"count\": 2}\nHope it helps!";
        let reply: Reply = parse_reply(raw).unwrap();
        assert_eq!(reply.word, "gavel");
    }

    #[test]
    fn rejects_replies_without_an_object() {
        let err = parse_reply::<Reply>("I'd rather not answer in JSON.").unwrap_err();
        assert!(matches!(err, ParseError::NoJsonObject));
    }

    #[test]
    fn rejects_schema_mismatches() {
        let err = parse_reply::<Reply>(r#"{"word": "gavel"}"#).unwrap_err();
        assert!(matches!(err, ParseError::Schema(_)));
    }

    #[test]
    fn rejects_wrong_field_types() {
        let err = parse_reply::<Reply>(r#"{"word": "gavel", "count": "two"}"#).unwrap_err();
        assert!(matches!(err, ParseError::Schema(_)));
    }
}
