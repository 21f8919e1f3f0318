//! Request body types for the JIRA v3 REST API.
use serde::Serialize;

/// Envelope for `POST /issue/{key}/comment`.
#[derive(Debug, Serialize)]
pub struct CommentRequest {
    pub body: CommentDoc,
}

/// Minimal rich-text document accepted by the v3 comment endpoint.
#[derive(Debug, Serialize)]
pub struct CommentDoc {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub version: u8,
    pub content: Vec<Paragraph>,
}

#[derive(Debug, Serialize)]
pub struct Paragraph {
    #[serde(rename = "type")]
    pub paragraph_type: String,
    pub content: Vec<TextRun>,
}

#[derive(Debug, Serialize)]
pub struct TextRun {
    #[serde(rename = "type")]
    pub text_type: String,
    pub text: String,
}

impl CommentRequest {
    /// Wrap plain comment text in a version 1 document holding exactly one
    /// paragraph with one text run. The text is inserted verbatim; no
    /// markdown or rich-text interpretation happens server-side for it.
    pub fn from_text(text: &str) -> Self {
        Self {
            body: CommentDoc {
                doc_type: "doc".to_string(),
                version: 1,
                content: vec![Paragraph {
                    paragraph_type: "paragraph".to_string(),
                    content: vec![TextRun {
                        text_type: "text".to_string(),
                        text: text.to_string(),
                    }],
                }],
            },
        }
    }
}
