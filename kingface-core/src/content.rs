//! Post content validation

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Maximum length for post bodies (8KB)
const MAX_BODY_LEN: usize = 8192;

/// Kind of content a post carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Image,
    Video,
    Audio,
}

impl ContentKind {
    /// Parse the wire value ("text", "image", "video", "audio").
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "audio" => Ok(Self::Audio),
            other => Err(ValidationError::InvalidVariant {
                field: "content_type",
                value: other.to_owned(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }
}

/// Validated post body.
///
/// Empty bodies are allowed so a post can be media-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostBody(String);

impl PostBody {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.len() > MAX_BODY_LEN {
            return Err(ValidationError::TooLong {
                field: "content",
                max: MAX_BODY_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for PostBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_kinds() {
        assert_eq!(ContentKind::parse("text").unwrap(), ContentKind::Text);
        assert_eq!(ContentKind::parse("image").unwrap(), ContentKind::Image);
        assert_eq!(ContentKind::parse("video").unwrap(), ContentKind::Video);
        assert_eq!(ContentKind::parse("audio").unwrap(), ContentKind::Audio);
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = ContentKind::parse("gif").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidVariant { .. }));
    }

    #[test]
    fn kind_round_trips_as_str() {
        for kind in [
            ContentKind::Text,
            ContentKind::Image,
            ContentKind::Video,
            ContentKind::Audio,
        ] {
            assert_eq!(ContentKind::parse(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn kind_serde_wire_format() {
        let json = serde_json::to_string(&ContentKind::Image).unwrap();
        assert_eq!(json, "\"image\"");
    }

    #[test]
    fn body_rules() {
        assert!(PostBody::new("").is_ok());
        assert!(PostBody::new("gm").is_ok());

        let body_8k = "a".repeat(8192);
        assert!(PostBody::new(&body_8k).is_ok());

        let over = "a".repeat(8193);
        let err = PostBody::new(&over).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 8192, .. }));
    }
}
