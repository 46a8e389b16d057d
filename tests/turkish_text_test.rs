use trnlp::prelude::*;

fn sample_lexicon() -> Lexicon {
    Lexicon::from_frequencies([
        ("merhaba", 120),
        ("dünya", 80),
        ("kitap", 60),
        ("okul", 40),
        ("güzel", 35),
        ("bugün", 30),
        ("hava", 25),
        ("çok", 20),
        ("ve", 500),
        ("bir", 450),
    ])
}

#[test]
fn test_detect_correct_and_syllabicate_a_sentence() {
    let lexicon = sample_lexicon();
    let text = "Bugün hava çok güzel, merhaba dünya!";

    let tokens = tokenize(text);
    assert_eq!(
        tokens,
        vec!["bugün", "hava", "çok", "güzel", "merhaba", "dünya"]
    );

    let report = LanguageDetector::new(&lexicon).detect(&tokens).unwrap();
    assert_eq!(report.total, 6);
    // "çok" is three characters and counts; nothing here is too short.
    assert_eq!(report.matches, 6);
    assert!(report.is_turkish);

    let corrected = auto_correct(&["bgün", "hva", "gzel"], &lexicon);
    assert_eq!(corrected, vec!["bugün", "hava", "güzel"]);

    let syllables = syllabicate_sentence(text);
    assert_eq!(syllables.len(), tokens.len());
    assert_eq!(syllables[0], vec!["bu", "gün"]);
    assert_eq!(syllables[1], vec!["ha", "va"]);
    for (word, parts) in tokens.iter().zip(&syllables) {
        assert_eq!(&parts.concat(), word);
    }
}

#[test]
fn test_english_text_is_not_turkish() {
    let lexicon = sample_lexicon();
    assert!(!is_turkish("the quick brown fox jumps over the lazy dog", &lexicon).unwrap());
}

#[test]
fn test_short_words_dilute_the_ratio() {
    let lexicon = sample_lexicon();
    // "ve" is in the lexicon but too short to match.
    let report = LanguageDetector::new(&lexicon)
        .detect("kitap ve okul ve")
        .unwrap();
    assert_eq!(report.matches, 2);
    assert_eq!(report.total, 4);
    assert!(!report.is_turkish);
}

#[test]
fn test_correction_details() {
    let lexicon = sample_lexicon();
    let corrector = SpellCorrector::new(&lexicon);

    let correction = corrector.correction("mehraba");
    assert_eq!(correction.corrected, "merhaba");
    assert_eq!(correction.distance, Some(1));
    assert_eq!(correction.frequency, 120);
    assert!(correction.is_changed());

    let correction = corrector.correction("zzzzzzzzzz");
    assert_eq!(correction.corrected, "zzzzzzzzzz");
    assert_eq!(correction.distance, None);
}

#[test]
fn test_parallel_batch_matches_sequential() {
    let lexicon = sample_lexicon();
    let corrector = SpellCorrector::new(&lexicon);
    let words: Vec<String> = ["mehraba", "dnya", "ktap", "okl", "xqxqxqxq", "bir"]
        .iter()
        .cycle()
        .take(60)
        .map(|w| w.to_string())
        .collect();

    assert_eq!(
        corrector.auto_correct_parallel(&words),
        corrector.auto_correct(&words)
    );
}

#[test]
fn test_config_drives_components() {
    let lexicon = sample_lexicon();
    let config = TrnlpConfig::from_json(
        r#"{ "detector": { "threshold": 0.3 }, "corrector": { "max_distance": 1 } }"#,
    )
    .unwrap();

    let detector = LanguageDetector::with_config(&lexicon, config.detector).unwrap();
    assert!(detector.is_turkish("kitap hello world").unwrap());

    let corrector = SpellCorrector::with_config(&lexicon, config.corrector).unwrap();
    assert_eq!(corrector.correct("ktp"), "ktp");
    assert_eq!(corrector.correct("ktap"), "kitap");
}

#[test]
fn test_hyphenate() {
    assert_eq!(hyphenate("Merhaba", "-"), "mer-ha-ba");
    assert_eq!(hyphenate("", "-"), "");
}
