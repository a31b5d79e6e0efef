//! End-to-end tests of the analysis pipeline against the trained engine.

mod common;

use common::engine;
use disaster_triage::analysis::{extract_location, EMPTY_TEXT_MESSAGE};
use disaster_triage::ml::training::SEVERITY_TRAINING_SET;
use disaster_triage::ml::ML_CONFIDENCE;
use disaster_triage::models::{UrgencyTier, LOCATION_NOT_SPECIFIED};
use disaster_triage::AppError;
use strum::IntoEnumIterator;

#[test]
fn test_flood_terms_resolve_to_flood() {
    for text in [
        "The river has burst its banks",
        "Heavy rain since morning",
        "water everywhere in the streets",
        "Whole village inundated",
    ] {
        let assessment = engine().analyze(text).unwrap();
        assert_eq!(assessment.disaster_type, "FLOOD", "text: {text}");
    }
}

#[test]
fn test_earlier_category_takes_priority() {
    // flood outranks fire in lexicon order
    let assessment = engine().analyze("fire near the river").unwrap();
    assert_eq!(assessment.disaster_type, "FLOOD");

    let assessment = engine().analyze("smoke from the hills").unwrap();
    assert_eq!(assessment.disaster_type, "FIRE");
}

#[test]
fn test_no_category_is_emergency() {
    let assessment = engine().analyze("something happened").unwrap();
    assert_eq!(assessment.disaster_type, "Emergency");
}

#[test]
fn test_critical_keywords_win() {
    for text in [
        "people trapped, some information",
        "someone is dying, need blankets",
        "urgent report of damage",
        "immediate evacuation needed",
        "please help now",
        "critical condition, question about shelter",
    ] {
        let assessment = engine().analyze(text).unwrap();
        assert_eq!(assessment.urgency, UrgencyTier::Critical, "text: {text}");
        assert_eq!(assessment.actions[0], "🚨 CALL EMERGENCY SERVICES: 112/108");
    }
}

#[test]
fn test_urgency_tiers() {
    let cases = [
        ("we are stranded on the roof", UrgencyTier::High),
        ("some damage to the school", UrgencyTier::Medium),
        ("a question about the shelter", UrgencyTier::Low),
        ("all quiet here", UrgencyTier::Medium),
    ];
    for (text, expected) in cases {
        let assessment = engine().analyze(text).unwrap();
        assert_eq!(assessment.urgency, expected, "text: {text}");
        assert_eq!(assessment.actions.len(), 4);
    }
}

#[test]
fn test_needs_are_bounded_and_never_empty() {
    let texts = [
        "",
        "nothing useful",
        "trapped and injured, hungry, homeless, must evacuate",
        "need food",
        "🌊🌊🌊",
    ];
    for text in texts {
        let Ok(assessment) = engine().analyze(text) else {
            continue;
        };
        assert!(!assessment.needs.is_empty(), "text: {text}");
        assert!(assessment.needs.len() <= 3, "text: {text}");
    }

    let assessment = engine()
        .analyze("trapped and injured, hungry, homeless, must evacuate")
        .unwrap();
    assert_eq!(
        assessment.needs,
        vec!["Rescue Teams", "Medical Aid", "Food & Water"]
    );

    let assessment = engine().analyze("nothing useful").unwrap();
    assert_eq!(assessment.needs, vec!["Assessment teams needed"]);
}

#[test]
fn test_location_extraction() {
    let assessment = engine().analyze("people trapped at Kochi").unwrap();
    assert_eq!(assessment.location, "Kochi");

    let assessment = engine().analyze("flooding in Navi Mumbai").unwrap();
    assert_eq!(assessment.location, "Navi Mumbai");

    let assessment = engine().analyze("people trapped at the station").unwrap();
    assert_eq!(assessment.location, LOCATION_NOT_SPECIFIED);

    assert_eq!(extract_location("shelter near Guwahati"), Some("Guwahati".to_string()));
}

#[test]
fn test_empty_text_rejected() {
    match engine().analyze("") {
        Err(AppError::Validation(message)) => assert_eq!(message, EMPTY_TEXT_MESSAGE),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_training_example_round_trip() {
    let assessment = engine()
        .analyze("flood water rising help emergency")
        .unwrap();

    assert_eq!(assessment.ml_analysis.ml_disaster_type, "FLOOD");
    assert_eq!(assessment.ml_analysis.ml_confidence, ML_CONFIDENCE);
    // "emergency" is the only urgency keyword present
    assert_eq!(assessment.urgency, UrgencyTier::High);
    assert_eq!(assessment.disaster_type, "FLOOD");
}

#[test]
fn test_severity_training_examples() {
    let expected_labels = [
        (10, "🔥 CRITICAL (ML Prediction)"),
        (9, "🔥 CRITICAL (ML Prediction)"),
        (8, "🔴 HIGH (ML Prediction)"),
        (7, "🔴 HIGH (ML Prediction)"),
        (6, "🟡 MEDIUM (ML Prediction)"),
        (5, "🟡 MEDIUM (ML Prediction)"),
        (3, "🟢 LOW (ML Prediction)"),
        (2, "🟢 LOW (ML Prediction)"),
        (1, "🟢 LOW (ML Prediction)"),
    ];
    assert_eq!(SEVERITY_TRAINING_SET.len(), expected_labels.len());

    for ((text, score), (expected_score, label)) in SEVERITY_TRAINING_SET.iter().zip(expected_labels) {
        assert_eq!(*score, expected_score);

        let ml = engine().analyze(text).unwrap().ml_analysis;
        assert_eq!(ml.severity_score, format!("{score}/10"), "text: {text}");
        assert_eq!(ml.ml_severity, label, "text: {text}");
    }
}

#[test]
fn test_statistical_layer_never_fails() {
    for text in ["x", "?", " ", "ß", "🌊", "12", "zzzz qqqq", "a b c d e"] {
        let assessment = engine().analyze(text).unwrap();
        let ml = &assessment.ml_analysis;

        assert!(!ml.ml_disaster_type.is_empty());
        assert!(
            ml.severity_score.ends_with("/10") || ml.severity_score == "Calculating...",
            "text: {text}, score: {}",
            ml.severity_score
        );
        assert!(!ml.sentiment.is_empty());
        assert!(!ml.emotion_score.is_empty());
    }
}

#[test]
fn test_severity_bucketing_is_monotonic() {
    let mut previous = UrgencyTier::from_severity_score(i32::MIN).rank();
    for score in -5..=15 {
        let rank = UrgencyTier::from_severity_score(score).rank();
        assert!(rank >= previous, "score {score} dropped a tier");
        previous = rank;
    }

    let ranks: Vec<u8> = UrgencyTier::iter().map(|t| t.rank()).collect();
    assert_eq!(ranks, vec![3, 2, 1, 0]);
}

#[test]
fn test_sentiment_labels() {
    let assessment = engine().analyze("This is terrible, water everywhere").unwrap();
    assert_eq!(assessment.ml_analysis.sentiment, "🚨 EXTREME PANIC DETECTED");
    assert_eq!(assessment.ml_analysis.emotion_score, "100% negative");

    let assessment = engine().analyze("road closed at Kochi").unwrap();
    assert_eq!(assessment.ml_analysis.sentiment, "📊 FACTUAL/NEUTRAL REPORT");
}
