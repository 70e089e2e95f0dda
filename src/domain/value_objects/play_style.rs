//! Play style chosen before requesting an attribute suggestion

use serde::{Deserialize, Serialize};

/// How the player intends to play, as understood by the suggestion service
///
/// The wire strings are the service's contract and stay in its language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayStyle {
    #[serde(rename = "ofensivo")]
    Offensive,
    #[serde(rename = "defensivo")]
    Defensive,
    #[serde(rename = "versatil")]
    Versatile,
}

impl std::fmt::Display for PlayStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlayStyle::Offensive => "offensive",
            PlayStyle::Defensive => "defensive",
            PlayStyle::Versatile => "versatile",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&PlayStyle::Offensive).unwrap(),
            "\"ofensivo\""
        );
        let parsed: PlayStyle = serde_json::from_str("\"versatil\"").unwrap();
        assert_eq!(parsed, PlayStyle::Versatile);
    }
}
