use std::time::Duration;

use lamina::{Lamina, LaminaConfig, LaminaError, Palette};

use crate::helpers::{m_spans, raw};

#[test]
fn build_without_sources_is_invalid() {
    let err = Lamina::builder().build().err().expect("must fail");
    assert!(matches!(err, LaminaError::InvalidArg(_)));
}

#[test]
fn duplicate_source_names_are_rejected() {
    let err = Lamina::builder()
        .with_source(m_spans("ner", vec![]))
        .with_source(m_spans("ner", vec![]))
        .build()
        .err()
        .expect("must fail");
    match err {
        LaminaError::InvalidArg(msg) => assert!(msg.contains("ner")),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn zero_timeouts_are_rejected() {
    let e1 = Lamina::builder()
        .with_source(m_spans("a", vec![]))
        .source_timeout(Duration::ZERO)
        .build()
        .err()
        .expect("must fail");
    assert!(matches!(e1, LaminaError::InvalidArg(_)));

    let e2 = Lamina::builder()
        .with_source(m_spans("a", vec![]))
        .request_timeout(Duration::ZERO)
        .build()
        .err()
        .expect("must fail");
    assert!(matches!(e2, LaminaError::InvalidArg(_)));
}

#[test]
fn palette_with_bad_alpha_is_rejected() {
    let err = Lamina::builder()
        .with_source(m_spans("a", vec![]))
        .palette(Palette::new().with_alpha(1.5))
        .build()
        .err()
        .expect("must fail");
    assert!(matches!(err, LaminaError::InvalidArg(_)));
}

#[test]
fn config_replaces_every_field() {
    let cfg = LaminaConfig {
        palette: Palette::resume_default(),
        source_timeout: Duration::from_secs(3),
        request_timeout: Some(Duration::from_secs(7)),
    };
    let lamina = Lamina::builder()
        .with_source(m_spans("a", vec![raw("abc", 0, 3, "SKILLS", 0.5)]))
        .config(cfg.clone())
        .build()
        .unwrap();
    assert_eq!(lamina.config(), &cfg);
}

#[test]
fn source_keys_follow_registration_order() {
    let lamina = Lamina::builder()
        .with_source(m_spans("b", vec![]))
        .with_source(m_spans("a", vec![]))
        .build()
        .unwrap();
    let keys: Vec<&str> = lamina.source_keys().iter().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["b", "a"]);
}
