use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Html,
    Markdown,
}

/// Body of `POST /v1/send`.
#[derive(Debug, Clone, Serialize)]
pub struct SendEmailRequest {
    pub to: String,
    pub subject: String,
    pub body: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
}

impl SendEmailRequest {
    pub fn html(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            content_type: ContentType::Html,
        }
    }
}

/// What Plunk sent back, tagged by whether it parsed as JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum PlunkResponse {
    Structured(Value),
    Raw(String),
}

impl PlunkResponse {
    pub fn from_body(text: &str) -> Self {
        match serde_json::from_str(text) {
            Ok(value) => PlunkResponse::Structured(value),
            Err(_) => PlunkResponse::Raw(text.to_string()),
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, PlunkResponse::Raw(_))
    }
}

// Raw text is reported as `{"error": text}`.
impl Serialize for PlunkResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PlunkResponse::Structured(value) => value.serialize(serializer),
            PlunkResponse::Raw(text) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", text)?;
                map.end()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlunkReply {
    pub status: u16,
    pub body: PlunkResponse,
}

impl PlunkReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
