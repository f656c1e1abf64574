use speech_relay::domain::{SpeechAlternative, SpeechSegment, assemble_transcript};

#[test]
fn given_two_segments_when_assembling_then_joins_with_single_space() {
    let segments = vec![
        SpeechSegment::single("Hello", Some(0.9)),
        SpeechSegment::single("world", Some(0.8)),
    ];

    assert_eq!(assemble_transcript(&segments), "Hello world");
}

#[test]
fn given_no_segments_when_assembling_then_returns_empty_string() {
    assert_eq!(assemble_transcript(&[]), "");
}

#[test]
fn given_surrounding_whitespace_when_assembling_then_result_is_trimmed() {
    let segments = vec![
        SpeechSegment::single(" Hello", None),
        SpeechSegment::single("world ", None),
    ];

    assert_eq!(assemble_transcript(&segments), "Hello world");
}

#[test]
fn given_multiple_alternatives_when_assembling_then_uses_first() {
    let segments = vec![SpeechSegment {
        alternatives: vec![
            SpeechAlternative {
                transcript: "recognise speech".to_string(),
                confidence: Some(0.9),
            },
            SpeechAlternative {
                transcript: "wreck a nice beach".to_string(),
                confidence: Some(0.1),
            },
        ],
    }];

    assert_eq!(assemble_transcript(&segments), "recognise speech");
}

#[test]
fn given_segment_without_alternatives_when_assembling_then_it_is_skipped() {
    let segments = vec![
        SpeechSegment::single("Hello", None),
        SpeechSegment::default(),
        SpeechSegment::single("again", None),
    ];

    assert_eq!(assemble_transcript(&segments), "Hello again");
}
