use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::{Segment, text_len, words};
use crate::config::{EntityMode, Tuning};

static TEXT_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<text[^>]*>(.*?)</text>").expect("Invalid text element regex"));

static LANG_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"lang_code="([^"]+)""#).expect("Invalid lang_code regex"));

/// First `lang_code="..."` value in a caption-list document
pub fn first_lang_code(doc: &str) -> Option<String> {
    LANG_CODE.captures(doc).map(|caps| caps[1].to_string())
}

/// Every language listed in a caption-list document, in document order.
///
/// Falls back to scanning the raw text when the document is not well-formed XML.
pub fn list_languages(doc: &str) -> Vec<String> {
    match lang_codes_from_xml(doc) {
        Ok(langs) => langs,
        Err(e) => {
            debug!("Caption list is not well-formed XML ({e}), scanning raw text");
            LANG_CODE
                .captures_iter(doc)
                .map(|caps| caps[1].to_string())
                .collect()
        }
    }
}

fn lang_codes_from_xml(doc: &str) -> Result<Vec<String>, quick_xml::Error> {
    use quick_xml::Reader;
    use quick_xml::events::Event;

    let mut reader = Reader::from_str(doc);
    let mut langs = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(ref e) | Event::Empty(ref e) => {
                for attr in e.attributes().flatten() {
                    if attr.key.as_ref() == b"lang_code" {
                        let value = attr.unescape_value()?;
                        if !value.is_empty() {
                            langs.push(value.into_owned());
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(langs)
}

/// Pick the caption language for a request.
///
/// A preferred language is used only when the list contains it; otherwise the
/// first `lang_code` in the document wins.
pub fn select_language(doc: &str, preferred: Option<&str>) -> Option<String> {
    if let Some(preferred) = preferred {
        if list_languages(doc).iter().any(|lang| lang == preferred) {
            return Some(preferred.to_string());
        }
        debug!("Preferred language {preferred} not listed, using first available");
    }
    first_lang_code(doc)
}

/// Decode a caption body into a single trimmed line
pub fn decode_entities(raw: &str, mode: EntityMode) -> String {
    let basic = raw.replace("&amp;", "&").replace("&lt;", "<").replace("&gt;", ">");
    let decoded = match mode {
        EntityMode::Basic => basic,
        EntityMode::Html => html_escape::decode_html_entities(&basic).into_owned(),
    };
    words(&decoded).collect::<Vec<_>>().join(" ")
}

/// Extract caption segments from a timed-text document, in document order.
///
/// Segments no longer than `min_segment_chars` UTF-16 units after decoding are dropped.
pub fn parse_segments(xml: &str, tuning: &Tuning, mode: EntityMode) -> Vec<Segment> {
    TEXT_ELEMENT
        .captures_iter(xml)
        .map(|caps| decode_entities(&caps[1], mode))
        .filter(|text| text_len(text) > tuning.min_segment_chars)
        .map(Segment::new)
        .collect()
}
