// tests/engine_properties.rs
//
// Behavioural properties of the scoring engine through its public API.

use std::sync::Arc;
use std::thread;

use lexicon_sentiment::{
    AnalyzeError, DominantEmotion, EmotionLabel, Lexicon, PolarityLabel, Sentiment,
    SentimentEngine,
};
use lexicon_sentiment::tokenize::normalize;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn engine(pairs: &[(&str, PolarityLabel)]) -> SentimentEngine {
    SentimentEngine::new(Lexicon::from_pairs(pairs.iter().map(|(w, l)| (*w, *l))))
}

#[test]
fn unmatched_text_is_neutral_with_zero_scores() {
    let e = engine(&[("good", PolarityLabel::Positive)]);
    let r = e.analyze("the quick brown fox jumps over the lazy dog").unwrap();
    assert_eq!(r.sentiment, Sentiment::Neutral);
    assert_eq!(r.positive_score, 0.0);
    assert_eq!(r.negative_score, 0.0);
    for (label, v) in r.emotions.iter() {
        assert_eq!(v, 0.0, "{label} should be zero");
    }
    assert_eq!(r.dominant_emotion, DominantEmotion::Neutral);
    assert_eq!(r.dominant_emotion_score, 1.0);
}

#[test]
fn negation_flips_polarity() {
    let e = engine(&[("great", PolarityLabel::Positive)]);
    let acc = e.accumulate("not great").unwrap();
    assert_eq!(acc.negative_count, 1);
    assert_eq!(acc.positive_count, 0);
    assert_eq!(e.analyze("not great").unwrap().sentiment, Sentiment::Negative);
}

#[test]
fn repeated_matches_are_counted() {
    let e = engine(&[("good", PolarityLabel::Positive), ("bad", PolarityLabel::Negative)]);
    let acc = e.accumulate("good bad good").unwrap();
    assert_eq!(acc.positive_count, 2);
    assert_eq!(acc.negative_count, 1);

    let r = e.analyze("good bad good").unwrap();
    assert!((r.positive_score - 2.0 / 3.0).abs() < 1e-12);
    assert!((r.negative_score - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(r.sentiment, Sentiment::Positive);
    assert_eq!(r.dominant_emotion, DominantEmotion::Positive);
}

#[test]
fn fuzzy_tolerance_follows_length() {
    let e = engine(&[("happy", PolarityLabel::Positive)]);
    assert_eq!(e.analyze("haapy").unwrap().sentiment, Sentiment::Positive);
    assert_eq!(e.analyze("hxpzy").unwrap().sentiment, Sentiment::Neutral);
}

#[test]
fn fuzzy_match_takes_emotion_from_lexicon_key() {
    let e = engine(&[("terrified", PolarityLabel::Negative)]);
    let r = e.analyze("I was terified").unwrap();
    assert_eq!(r.sentiment, Sentiment::Negative);
    assert_eq!(r.emotions.fear, 1.0);
}

#[test]
fn repeat_collapse_normalizes_both_forms() {
    assert_eq!(normalize("sooooo"), "soo");
    assert_eq!(normalize("soo"), "soo");

    let e = engine(&[("soo", PolarityLabel::Positive)]);
    assert_eq!(e.accumulate("sooooo").unwrap().positive_count, 1);
    assert_eq!(e.accumulate("soo").unwrap().positive_count, 1);
}

#[test]
fn empty_text_is_rejected() {
    let e = engine(&[]);
    assert_eq!(e.analyze("").unwrap_err(), AnalyzeError::EmptyInput);
    assert_eq!(e.analyze("   ").unwrap_err(), AnalyzeError::EmptyInput);
}

#[test]
fn interjections_contribute_without_lexicon() {
    let e = engine(&[]);
    let r = e.analyze("ugh, crap. wow!").unwrap();
    // ugh + crap negative, wow positive
    assert_eq!(r.sentiment, Sentiment::Negative);
    assert!((r.negative_score - 2.0 / 3.0).abs() < 1e-12);
    // ugh/crap fall back to anger, wow maps to surprise
    assert!((r.emotions.anger - 2.0 / 3.0).abs() < 1e-12);
    assert!((r.emotions.surprise - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn degraded_lexicon_scores_everything_neutral() {
    let e = SentimentEngine::new(Lexicon::load(None));
    let r = e.analyze("I love this amazing wonderful product").unwrap();
    assert_eq!(r.sentiment, Sentiment::Neutral);
    assert_eq!(r.positive_score + r.negative_score, 0.0);
}

#[test]
fn embedded_lexicon_end_to_end() {
    let e = SentimentEngine::new(Lexicon::embedded());
    let r = e
        .analyze("Sooooo happy with this, not disappointed at all!")
        .unwrap();
    // happy -> positive/joy, "not disappointed" -> positive/sadness
    assert_eq!(r.sentiment, Sentiment::Positive);
    assert_eq!(r.positive_score, 1.0);
    assert_eq!(r.emotions.get(EmotionLabel::Joy), 0.5);
    assert_eq!(r.emotions.get(EmotionLabel::Sadness), 0.5);
}

/// Random words drawn from matching, fuzzy-matching and unmatched vocab.
fn random_text(rng: &mut StdRng) -> String {
    const VOCAB: &[&str] = &[
        "good", "bad", "goood", "baad", "not", "never", "happy", "haapy", "sad", "sed", "wow",
        "oh", "ugh", "terrible", "the", "a", "product", "!!!", "42", "isn't", "scared",
    ];
    let n = rng.random_range(1..20);
    (0..n)
        .map(|_| VOCAB[rng.random_range(0..VOCAB.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn randomized_invariants_and_idempotence() {
    let e = engine(&[
        ("good", PolarityLabel::Positive),
        ("bad", PolarityLabel::Negative),
        ("happy", PolarityLabel::Positive),
        ("sad", PolarityLabel::Negative),
        ("terrible", PolarityLabel::Negative),
        ("scared", PolarityLabel::Negative),
    ]);
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..300 {
        let text = random_text(&mut rng);
        let r1 = e.analyze(&text).unwrap();
        let r2 = e.analyze(&text).unwrap();
        assert_eq!(r1, r2, "non-deterministic for {text:?}");

        assert!(r1.positive_score >= 0.0 && r1.negative_score >= 0.0);
        assert!(r1.positive_score + r1.negative_score <= 1.0 + 1e-12);

        let acc = e.accumulate(&text).unwrap();
        if acc.total() == 0 {
            assert_eq!(r1.sentiment, Sentiment::Neutral);
            assert_eq!(r1.positive_score, 0.0);
            assert_eq!(r1.negative_score, 0.0);
        }
        if acc.emotions.total() > 0 {
            assert!((r1.emotions.sum() - 1.0).abs() < 1e-9, "emotions for {text:?}");
        } else {
            assert_eq!(r1.emotions.sum(), 0.0);
        }
    }
}

#[test]
fn concurrent_analyses_share_one_engine() {
    let e = Arc::new(SentimentEngine::new(Lexicon::embedded()));
    let expected = e.analyze("great but not happy, ugh").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let e = Arc::clone(&e);
            thread::spawn(move || {
                (0..50)
                    .map(|_| e.analyze("great but not happy, ugh").unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for h in handles {
        for r in h.join().unwrap() {
            assert_eq!(r, expected);
        }
    }
}
