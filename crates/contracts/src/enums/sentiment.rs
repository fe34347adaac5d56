use serde::{Deserialize, Serialize};

/// Tone classification produced by the server's message analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
    Unknown,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
            Sentiment::Unknown => "unknown",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            Sentiment::Positive => "success",
            Sentiment::Neutral => "primary",
            Sentiment::Negative => "error",
            Sentiment::Unknown => "neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&Sentiment::Negative).unwrap(), "\"negative\"");
        assert_eq!(
            serde_json::from_str::<Sentiment>("\"unknown\"").unwrap(),
            Sentiment::Unknown
        );
    }
}
