use log::debug;
use serde::Deserialize;

use crate::error::{Endpoint, ParseContext, TranscriptError};
use crate::{Transcript, extract_video_id};

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Marker immediately preceding the caption track array in the watch-page HTML
const CAPTIONS_MARKER: &str = r#""captions":{"playerCaptionsTracklistRenderer":{"captionTracks":"#;

#[derive(Debug, Deserialize)]
struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    base_url: String,
    #[serde(rename = "languageCode")]
    language_code: String,
}

/// Fetch the caption transcript for a raw URL or video ID input
pub async fn fetch_transcript(
    client: &reqwest::Client,
    input: &str,
    lang: &str,
) -> Result<Transcript, TranscriptError> {
    let video_id =
        extract_video_id(input).ok_or_else(|| TranscriptError::InvalidInput(input.to_string()))?;
    fetch_captions(client, &video_id, lang).await
}

/// Fetch the caption transcript for an already-validated video ID
pub async fn fetch_captions(
    client: &reqwest::Client,
    video_id: &str,
    lang: &str,
) -> Result<Transcript, TranscriptError> {
    let watch_url = format!("https://www.youtube.com/watch?v={video_id}");
    debug!("Fetching watch page: {watch_url}");
    let page_html = get_text(client, &watch_url, Endpoint::WatchPage).await?;

    let caption_url = extract_caption_url(&page_html, lang)?;
    debug!("Fetching caption track: {caption_url}");
    let caption_xml = get_text(client, &caption_url, Endpoint::CaptionTrack).await?;

    let lines = parse_caption_xml(&caption_xml)?;
    debug!("Parsed {} caption lines", lines.len());

    Ok(Transcript {
        video_id: video_id.to_string(),
        language: lang.to_string(),
        lines,
    })
}

async fn get_text(
    client: &reqwest::Client,
    url: &str,
    endpoint: Endpoint,
) -> Result<String, TranscriptError> {
    let transport = |source| TranscriptError::Transport { endpoint, source };
    client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await
        .map_err(transport)?
        .error_for_status()
        .map_err(transport)?
        .text()
        .await
        .map_err(transport)
}

/// Locate the caption track array in the watch-page HTML and return the URL
/// of the track matching `lang` exactly
fn extract_caption_url(html: &str, lang: &str) -> Result<String, TranscriptError> {
    let at = html.find(CAPTIONS_MARKER).ok_or(TranscriptError::CaptionsNotFound)?;
    let tail = &html[at + CAPTIONS_MARKER.len()..];

    // The track array sits at the head of the tail; the rest of the page
    // follows it and is not valid JSON, so parse exactly one value
    let mut values = serde_json::Deserializer::from_str(tail).into_iter::<Vec<CaptionTrack>>();
    let tracks = match values.next() {
        Some(Ok(tracks)) => tracks,
        Some(Err(err)) => return Err(TranscriptError::parse(ParseContext::CaptionsJson, err)),
        None => {
            return Err(TranscriptError::parse(
                ParseContext::CaptionsJson,
                "nothing after captions marker",
            ));
        }
    };

    tracks
        .into_iter()
        .find(|track| track.language_code == lang)
        .map(|track| track.base_url)
        .ok_or_else(|| TranscriptError::LanguageNotFound(lang.to_string()))
}

/// Collect the text content of every `<text>` cue, in document order,
/// skipping cues with no content
fn parse_caption_xml(xml: &str) -> Result<Vec<String>, TranscriptError> {
    use quick_xml::Reader;
    use quick_xml::events::Event;

    let mut reader = Reader::from_str(xml);
    let mut lines = Vec::new();
    let mut in_cue = false;
    let mut cue_text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"text" => {
                in_cue = true;
                cue_text.clear();
            }
            Ok(Event::Text(ref e)) if in_cue => {
                let unescaped = e
                    .unescape()
                    .map_err(|err| TranscriptError::parse(ParseContext::CaptionXml, err))?;
                cue_text.push_str(&unescaped);
            }
            Ok(Event::End(ref e)) if e.name().as_ref() == b"text" => {
                in_cue = false;
                if !cue_text.is_empty() {
                    lines.push(std::mem::take(&mut cue_text));
                }
            }
            Ok(Event::Empty(_)) => {
                // Self-closing <text .../> carries no cue text
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(TranscriptError::parse(ParseContext::CaptionXml, err)),
            _ => {}
        }
    }

    Ok(lines)
}
