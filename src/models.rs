use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Key/value parameters as sent by the calculator pages
pub type Params = Map<String, Value>;

// POST /explain request body
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct ExplainRequest {
    // any JSON value, anything but a known tag string is rejected with 400
    #[serde(default)]
    pub scenario: Option<Value>,
    #[serde(default)]
    pub inputs: Params,
    #[serde(default)]
    pub results: Params,
}

// POST /explain success body
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ExplainResponse {
    pub explanation: String,
}

// Body of every 4xx/5xx response
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

// Gemini generateContent request format
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

// Gemini generateContent response format, only the fields we read
#[derive(Deserialize, Clone, Debug, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    // first candidate's text, None for a blocked prompt or empty candidate list
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}
