use eyre::Result;
use log::{debug, error, info};

use crate::assemble::assemble;
use crate::captions::{parse_segments, select_language};
use crate::config::{EntityMode, Tuning};
use crate::output::Response;
use crate::summarize::summarize;
use crate::youtube::CaptionProvider;
use crate::{Query, resolve_video_id};

/// Settings that shape a single extraction
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub tuning: Tuning,
    pub entity_mode: EntityMode,
    /// Used when the query names no language
    pub default_lang: Option<String>,
}

/// Run one request end to end.
///
/// Internal failures are logged and reported as [`Response::Failed`].
pub async fn run<P: CaptionProvider>(provider: &P, query: &Query, options: &Options) -> Response {
    match extract(provider, query, options).await {
        Ok(response) => response,
        Err(e) => {
            error!("Extraction failed: {e:?}");
            Response::Failed
        }
    }
}

async fn extract<P: CaptionProvider>(provider: &P, query: &Query, options: &Options) -> Result<Response> {
    let Some(video_id) = resolve_video_id(query) else {
        debug!("No video ID in query {query:?}");
        return Ok(Response::MissingIdentifier);
    };
    debug!("Resolved video ID: {video_id}");

    let Some(list) = provider.caption_list(&video_id).await? else {
        return Ok(unavailable(video_id, "caption list request failed"));
    };

    let preferred = query.lang.as_deref().or(options.default_lang.as_deref());
    let Some(lang) = select_language(&list, preferred) else {
        return Ok(unavailable(video_id, "no caption languages listed"));
    };
    debug!("Using caption language: {lang}");

    let Some(xml) = provider.transcript(&video_id, &lang).await? else {
        return Ok(unavailable(video_id, "transcript request failed"));
    };

    let segments = parse_segments(&xml, &options.tuning, options.entity_mode);
    if segments.is_empty() {
        return Ok(unavailable(video_id, "no caption segments"));
    }
    debug!("Parsed {} segments", segments.len());

    let transcript = assemble(segments, &options.tuning);
    let summary = summarize(&transcript.full_text, &options.tuning);

    info!(
        "Transcript for {video_id}: lang={lang} words={} segments={}",
        transcript.stats.words, transcript.stats.segments
    );
    Ok(Response::available(video_id, lang, transcript, summary))
}

fn unavailable(video_id: String, reason: &str) -> Response {
    info!("No transcript for {video_id}: {reason}");
    Response::Unavailable { video_id }
}
