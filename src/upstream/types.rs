use serde::{Deserialize, Serialize};

/// Fixed instruction attached to every transcription request.
pub const TRANSCRIBE_INSTRUCTION: &str =
    "Transcribe this audio to Arabic text. Output only the transcription without any additional text.";

/// Body of a generateContent call
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// A request part: inline audio or an instruction string
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Part {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Text {
        text: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// Base64-encoded audio bytes
    pub data: String,
}

impl GenerateContentRequest {
    /// Build a transcription request: inline audio first, then the fixed
    /// instruction, matching the upstream's expected part order.
    pub fn transcription(mime_type: &str, audio_b64: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: mime_type.to_string(),
                            data: audio_b64.to_string(),
                        },
                    },
                    Part::Text {
                        text: TRANSCRIBE_INSTRUCTION.to_string(),
                    },
                ],
            }],
        }
    }
}

/// generateContent response, reduced to the fields the client reads
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Extraction path the upstream documents: first candidate, first part.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}
