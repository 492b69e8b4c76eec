use std::fmt;

use thiserror::Error;

/// Which HTTP endpoint a transport failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    WatchPage,
    CaptionTrack,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::WatchPage => write!(f, "watch page"),
            Endpoint::CaptionTrack => write!(f, "caption track"),
        }
    }
}

/// Which scraped payload failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseContext {
    CaptionsJson,
    CaptionXml,
}

impl fmt::Display for ParseContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseContext::CaptionsJson => write!(f, "captions JSON"),
            ParseContext::CaptionXml => write!(f, "caption XML"),
        }
    }
}

/// Failure modes of the transcript pipeline, one variant per cause
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("no YouTube video ID in input: {0:?}")]
    InvalidInput(String),

    #[error("{endpoint} request failed: {source}")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    #[error("captions metadata not found in watch page")]
    CaptionsNotFound,

    #[error("malformed {context}: {message}")]
    Parse { context: ParseContext, message: String },

    #[error("no caption track for language code {0:?}")]
    LanguageNotFound(String),
}

impl TranscriptError {
    pub(crate) fn parse(context: ParseContext, detail: impl fmt::Display) -> Self {
        TranscriptError::Parse {
            context,
            message: detail.to_string(),
        }
    }
}
