use super::*;

#[test]
fn defaults_match_documented_values() {
    let p = StimulusParams::default();
    assert_eq!(p.ppd, 72.0);
    assert_eq!(p.intensity_targets, [0.5, 0.5]);
    assert_eq!(p.contexts, ["black".to_string(), "white".to_string()]);
    assert_eq!(p.target_size, 0.5);
    assert_eq!(p.n_surrounds, 5);
    assert_eq!(p.intensity_background, 0.3);
    p.validate().unwrap();
}

#[test]
fn partial_json_fills_in_defaults() {
    let p = StimulusParams::from_json_str(
        r#"{"ppd": 24, "contexts": ["white", "black"], "n_surrounds": 3}"#,
    )
    .unwrap();
    assert_eq!(p.ppd, 24.0);
    assert_eq!(p.contexts, ["white".to_string(), "black".to_string()]);
    assert_eq!(p.n_surrounds, 3);
    assert_eq!(p.target_size, TARGET_SIZE);
    assert_eq!(p.intensity_contexts, ContextTable::default());
}

#[test]
fn json_rejects_unknown_fields_and_contexts() {
    assert!(matches!(
        StimulusParams::from_json_str(r#"{"pdd": 24}"#),
        Err(StimError::Validation(_))
    ));
    assert!(matches!(
        StimulusParams::from_json_str(r#"{"contexts": ["black", "grey"]}"#),
        Err(StimError::UnknownContext(_))
    ));
}

#[test]
fn validate_rejects_degenerate_geometry() {
    let p = StimulusParams::default().with_n_surrounds(0);
    assert!(matches!(p.validate(), Err(StimError::Geometry(_))));
    let p = StimulusParams::default().with_target_size(0.0);
    assert!(matches!(p.validate(), Err(StimError::Geometry(_))));
    let p = StimulusParams::default().with_ppd(-1.0);
    assert!(matches!(p.validate(), Err(StimError::Geometry(_))));
}

#[test]
fn json_surround_count_must_be_positive() {
    for json in [r#"{"n_surrounds": -1}"#, r#"{"n_surrounds": 0}"#] {
        assert!(
            matches!(StimulusParams::from_json_str(json), Err(StimError::Geometry(_))),
            "{json}"
        );
    }
    assert!(matches!(
        StimulusParams::from_json_str(r#"{"n_surrounds": 2.5}"#),
        Err(StimError::Validation(_))
    ));
    assert!(matches!(
        StimulusParams::from_json_str(r#"{"n_surrounds": -1"#),
        Err(StimError::Validation(_))
    ));
}

#[test]
fn swapped_contexts_only_swaps_contexts() {
    let p = StimulusParams::default().with_intensity_targets(0.4, 0.6);
    let s = p.swapped_contexts();
    assert_eq!(s.contexts, ["white".to_string(), "black".to_string()]);
    assert_eq!(s.intensity_targets, [0.4, 0.6]);
    assert_eq!(s.swapped_contexts(), p);
}

#[test]
fn params_round_trip_through_json() {
    let p = StimulusParams::default().with_n_surrounds(2);
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(StimulusParams::from_json_str(&json).unwrap(), p);
}
