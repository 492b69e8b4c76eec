use crate::Transcript;

/// Render transcript as plain text, one cue per line
pub fn render_text(transcript: &Transcript) -> String {
    transcript.lines.join("\n")
}

/// Render transcript as pretty-printed JSON
pub fn render_json(transcript: &Transcript) -> String {
    serde_json::to_string_pretty(transcript).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_transcript() -> Transcript {
        Transcript {
            video_id: "test1234567".to_string(),
            language: "en".to_string(),
            lines: vec!["Hello world".to_string(), "This is a test".to_string()],
        }
    }

    #[test]
    fn test_render_text() {
        assert_eq!(render_text(&sample_transcript()), "Hello world\nThis is a test");
    }

    #[test]
    fn test_render_text_empty() {
        let t = Transcript {
            video_id: "empty123456".to_string(),
            language: "en".to_string(),
            lines: vec![],
        };
        assert_eq!(render_text(&t), "");
    }

    #[test]
    fn test_render_json() {
        let rendered = render_json(&sample_transcript());
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["video_id"], "test1234567");
        assert_eq!(value["language"], "en");
        assert_eq!(value["lines"][1], "This is a test");
    }
}
