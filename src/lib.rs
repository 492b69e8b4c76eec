pub mod config;
pub mod error;
pub mod output;
pub mod youtube;

pub use error::{Endpoint, ParseContext, TranscriptError};

use serde::Serialize;

/// Complete caption transcript for a video, one cue text per line
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub video_id: String,
    pub language: String,
    pub lines: Vec<String>,
}

/// Extract video ID from various YouTube URL formats
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();

    // Bare 11-character video ID
    if regex::Regex::new(r"^[a-zA-Z0-9_-]{11}$").unwrap().is_match(input) {
        return Some(input.to_string());
    }

    // youtu.be/ID, youtube.com/v/ID, /u/N/ID, /embed/ID, /shorts/ID, ?v=ID, &v=ID
    let re = regex::Regex::new(r"(?:youtu\.be/|/v/|/u/\d+/|/embed/|/shorts/|[?&]v=)([a-zA-Z0-9_-]+)").unwrap();
    let caps = re.captures(input)?;

    // Accept the captured segment only at exactly 11 characters; a longer
    // token is not a video ID, not a prefix of one
    let candidate = &caps[1];
    if candidate.len() == 11 { Some(candidate.to_string()) } else { None }
}
