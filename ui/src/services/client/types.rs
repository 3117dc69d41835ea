use serde::{Deserialize, Serialize};

/// Body of a completed execution call, as declared by the server's content type
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(serde_json::Value),
    Text(String),
}

impl ResponseBody {
    /// Parse a raw body according to the response content type.
    ///
    /// Bodies declared as JSON must parse, an empty one included; everything
    /// else is kept as text.
    pub fn from_content(content_type: Option<&str>, raw: String) -> Result<Self, serde_json::Error> {
        let declares_json = content_type
            .map(|ct| ct.to_ascii_lowercase().contains("json"))
            .unwrap_or(false);

        if declares_json {
            serde_json::from_str(&raw).map(ResponseBody::Json)
        } else {
            Ok(ResponseBody::Text(raw))
        }
    }

    /// Human readable rendition used by the result panels
    pub fn display(&self) -> String {
        match self {
            ResponseBody::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            ResponseBody::Text(text) => text.clone(),
        }
    }
}

/// Successful response from one of the execution endpoints
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExecutionResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl ExecutionResponse {
    pub fn new(status: u16, body: ResponseBody) -> Self {
        Self { status, body }
    }
}

/// How an execution call failed
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never produced a response
    Network,
    /// The server answered with a non-success status
    Http,
    /// The server declared JSON but the body did not parse
    Parse,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Network => "network",
            FailureKind::Http => "http",
            FailureKind::Parse => "parse",
        }
    }
}

/// Failure details handed to the error renderers
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExecutionFailure {
    pub kind: FailureKind,
    pub status: Option<u16>,
    pub message: String,
    pub body: Option<String>,
}

impl ExecutionFailure {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Network,
            status: None,
            message: message.into(),
            body: None,
        }
    }

    pub fn http(status: u16, message: impl Into<String>, body: Option<String>) -> Self {
        Self {
            kind: FailureKind::Http,
            status: Some(status),
            message: message.into(),
            body,
        }
    }

    pub fn parse(status: u16, message: impl Into<String>, body: String) -> Self {
        Self {
            kind: FailureKind::Parse,
            status: Some(status),
            message: message.into(),
            body: Some(body),
        }
    }
}
