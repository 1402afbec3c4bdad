use super::*;

#[test]
fn empty_json_gives_defaults() {
    let cfg = SceneConfig::from_json("{}").unwrap();
    assert_eq!(cfg, SceneConfig::default());
    assert_eq!(cfg.tick_period_ms(), 40);
    assert_eq!(cfg.frame_period_ms(), 16);
}

#[test]
fn partial_json_overrides_fields() {
    let cfg =
        SceneConfig::from_json(r#"{"initial_speed": 40, "initial_effect": "greyscale"}"#).unwrap();
    assert_eq!(cfg.initial_speed, 40.0);
    assert_eq!(cfg.initial_effect, PostEffect::Greyscale);
    assert_eq!(cfg.fade_length, 48.0);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = SceneConfig::from_json(r#"{"sped": 3}"#).unwrap_err();
    assert!(matches!(err, OverlookError::Serde(_)));
}

#[test]
fn validate_rejects_inconsistent_values() {
    let bad = [
        SceneConfig {
            min_speed: 50.0,
            max_speed: 10.0,
            ..SceneConfig::default()
        },
        SceneConfig {
            tick_hz: 0,
            ..SceneConfig::default()
        },
        SceneConfig {
            fade_length: 0.0,
            ..SceneConfig::default()
        },
        SceneConfig {
            glitch_probability: 1.5,
            ..SceneConfig::default()
        },
        SceneConfig {
            stop_length: f64::NAN,
            ..SceneConfig::default()
        },
    ];
    for cfg in bad {
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, OverlookError::Validation(_)), "{cfg:?}");
    }
}
