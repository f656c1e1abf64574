use super::recognition::SpeechSegment;

/// Joins the top alternative of each segment with single spaces.
///
/// Segments without alternatives are skipped. No segments yields an empty
/// string, which is a valid transcript and not a failure.
pub fn assemble_transcript(segments: &[SpeechSegment]) -> String {
    segments
        .iter()
        .filter_map(|segment| segment.alternatives.first())
        .map(|alternative| alternative.transcript.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
