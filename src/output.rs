use serde::Serialize;

use crate::{Segment, Stats, Transcript};

pub const MISSING_IDENTIFIER_MESSAGE: &str = "Missing or invalid YouTube URL / videoId";
pub const INTERNAL_ERROR_MESSAGE: &str = "Runtime safe error handled";
pub const SUMMARY_STYLE: &str = "real_extractive_narrative";
pub const SUMMARY_DETAIL_LEVEL: &str = "high";

/// Terminal result of one extraction request
#[derive(Debug, Clone)]
pub enum Response {
    /// Neither a video ID nor a recognizable URL was supplied
    MissingIdentifier,
    /// The video has no usable captions
    Unavailable { video_id: String },
    Available(Box<Extraction>),
    /// Internal failure; details are logged, never reported
    Failed,
}

#[derive(Debug, Clone)]
pub struct Extraction {
    pub video_id: String,
    pub language: String,
    pub transcript: Transcript,
    pub summary: String,
}

impl Response {
    pub fn available(video_id: String, language: String, transcript: Transcript, summary: String) -> Self {
        Response::Available(Box::new(Extraction {
            video_id,
            language,
            transcript,
            summary,
        }))
    }

    /// HTTP status the transport should report
    pub fn status_code(&self) -> u16 {
        match self {
            Response::MissingIdentifier => 400,
            Response::Failed => 500,
            Response::Unavailable { .. } | Response::Available(_) => 200,
        }
    }

    pub fn body<'a>(&'a self, developer: &'a str) -> Body<'a> {
        match self {
            Response::MissingIdentifier => Body::Error(ErrorBody {
                success: false,
                error: MISSING_IDENTIFIER_MESSAGE,
                developer,
            }),
            Response::Failed => Body::Error(ErrorBody {
                success: false,
                error: INTERNAL_ERROR_MESSAGE,
                developer,
            }),
            Response::Unavailable { video_id } => Body::Transcript(TranscriptBody {
                success: true,
                video_id,
                transcript: TranscriptSection::Unavailable { available: false },
                summary: None,
                developer,
            }),
            Response::Available(extraction) => {
                let t = &extraction.transcript;
                Body::Transcript(TranscriptBody {
                    success: true,
                    video_id: &extraction.video_id,
                    transcript: TranscriptSection::Available {
                        available: true,
                        language: &extraction.language,
                        stats: t.stats,
                        text: TextSection {
                            full: &t.full_text,
                            paragraphs: &t.paragraphs,
                        },
                        segments: &t.segments,
                    },
                    summary: Some(SummarySection {
                        style: SUMMARY_STYLE,
                        detail_level: SUMMARY_DETAIL_LEVEL,
                        content: &extraction.summary,
                    }),
                    developer,
                })
            }
        }
    }
}

/// JSON envelope for a [`Response`]
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Body<'a> {
    Error(ErrorBody<'a>),
    Transcript(TranscriptBody<'a>),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub success: bool,
    pub error: &'a str,
    pub developer: &'a str,
}

#[derive(Debug, Serialize)]
pub struct TranscriptBody<'a> {
    pub success: bool,
    #[serde(rename = "videoId")]
    pub video_id: &'a str,
    pub transcript: TranscriptSection<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummarySection<'a>>,
    pub developer: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TranscriptSection<'a> {
    Unavailable {
        available: bool,
    },
    Available {
        available: bool,
        language: &'a str,
        stats: Stats,
        text: TextSection<'a>,
        segments: &'a [Segment],
    },
}

#[derive(Debug, Serialize)]
pub struct TextSection<'a> {
    pub full: &'a str,
    pub paragraphs: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct SummarySection<'a> {
    pub style: &'a str,
    pub detail_level: &'a str,
    pub content: &'a str,
}

/// Render the response as pretty JSON
pub fn render_json(response: &Response, developer: &str) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&response.body(developer))
}

/// Render the response as plain text: summary, then one paragraph per block
pub fn render_text(response: &Response) -> String {
    match response {
        Response::MissingIdentifier => MISSING_IDENTIFIER_MESSAGE.to_string(),
        Response::Failed => INTERNAL_ERROR_MESSAGE.to_string(),
        Response::Unavailable { video_id } => format!("No transcript available for {video_id}"),
        Response::Available(extraction) => {
            let mut blocks = Vec::with_capacity(extraction.transcript.paragraphs.len() + 1);
            if !extraction.summary.is_empty() {
                blocks.push(format!("Summary: {}", extraction.summary));
            }
            blocks.extend(extraction.transcript.paragraphs.iter().cloned());
            blocks.join("\n\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_response() -> Response {
        let segments = vec![Segment::new("Hello world"), Segment::new("This is a test")];
        Response::available(
            "dQw4w9WgXcQ".to_string(),
            "en".to_string(),
            Transcript {
                full_text: "Hello world This is a test".to_string(),
                paragraphs: vec!["Hello world This is a test".to_string()],
                stats: Stats {
                    words: 6,
                    segments: 2,
                    estimated_speaking_minutes: 1,
                },
                segments,
            },
            String::new(),
        )
    }

    fn to_value(response: &Response) -> serde_json::Value {
        serde_json::to_value(response.body("@dev")).unwrap()
    }

    #[test]
    fn test_missing_identifier_body() {
        let response = Response::MissingIdentifier;
        assert_eq!(response.status_code(), 400);
        assert_eq!(
            to_value(&response),
            json!({
                "success": false,
                "error": MISSING_IDENTIFIER_MESSAGE,
                "developer": "@dev"
            })
        );
    }

    #[test]
    fn test_failed_body_is_generic() {
        let response = Response::Failed;
        assert_eq!(response.status_code(), 500);
        assert_eq!(to_value(&response)["error"], INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_unavailable_body() {
        let response = Response::Unavailable {
            video_id: "dQw4w9WgXcQ".to_string(),
        };
        assert_eq!(response.status_code(), 200);
        assert_eq!(
            to_value(&response),
            json!({
                "success": true,
                "videoId": "dQw4w9WgXcQ",
                "transcript": { "available": false },
                "developer": "@dev"
            })
        );
    }

    #[test]
    fn test_available_body() {
        let response = sample_response();
        assert_eq!(response.status_code(), 200);
        assert_eq!(
            to_value(&response),
            json!({
                "success": true,
                "videoId": "dQw4w9WgXcQ",
                "transcript": {
                    "available": true,
                    "language": "en",
                    "stats": { "words": 6, "segments": 2, "estimated_speaking_minutes": 1 },
                    "text": {
                        "full": "Hello world This is a test",
                        "paragraphs": ["Hello world This is a test"]
                    },
                    "segments": [{ "text": "Hello world" }, { "text": "This is a test" }]
                },
                "summary": {
                    "style": SUMMARY_STYLE,
                    "detail_level": SUMMARY_DETAIL_LEVEL,
                    "content": ""
                },
                "developer": "@dev"
            })
        );
    }

    #[test]
    fn test_render_text() {
        assert_eq!(render_text(&sample_response()), "Hello world This is a test");
        assert_eq!(
            render_text(&Response::Unavailable {
                video_id: "abc".to_string()
            }),
            "No transcript available for abc"
        );
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&Response::MissingIdentifier, "@dev").unwrap();
        assert!(json.contains("\"success\": false"));
    }
}
