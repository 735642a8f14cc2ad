use crate::models::AiSource;

/// One detection rule: file-name marker (lowercase), content marker (brand casing)
struct SourceMarker {
    filename: &'static str,
    content: &'static str,
    source: AiSource,
}

/// Evaluated top to bottom, first hit wins. Reordering changes results.
const SOURCE_MARKERS: [SourceMarker; 4] = [
    SourceMarker { filename: "claude", content: "Claude", source: AiSource::Claude },
    SourceMarker { filename: "gemini", content: "Gemini", source: AiSource::Gemini },
    SourceMarker { filename: "grok", content: "Grok", source: AiSource::Grok },
    SourceMarker { filename: "chatgpt", content: "ChatGPT", source: AiSource::Gpt },
];

/// Used when no marker matches
pub const DEFAULT_SOURCE: AiSource = AiSource::Claude;

/// Guess which service produced a transcript from its file name and text.
///
/// Plain case-sensitive substring checks, not a format parser.
pub fn detect_source(filename: &str, content: &str) -> AiSource {
    SOURCE_MARKERS
        .iter()
        .find(|m| filename.contains(m.filename) || content.contains(m.content))
        .map(|m| m.source)
        .unwrap_or(DEFAULT_SOURCE)
}
