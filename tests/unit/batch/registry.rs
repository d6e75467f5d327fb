use super::*;

fn params() -> StimulusParams {
    StimulusParams::default().with_ppd(8.0)
}

#[test]
fn names_round_trip_through_from_str() {
    for v in Variant::ALL {
        assert_eq!(v.name().parse::<Variant>().unwrap(), v);
        assert_eq!(v.to_string(), v.name());
    }
    assert!(matches!(
        "mondrian".parse::<Variant>(),
        Err(StimError::Validation(_))
    ));
}

#[test]
fn registry_excludes_on_demand_variants() {
    assert_eq!(REGISTRY.len(), 13);
    for v in [
        Variant::CheckerboardSmallest,
        Variant::Cross,
        Variant::CrossPolarity,
    ] {
        assert!(!REGISTRY.contains(&v));
    }
}

#[test]
fn gen_all_produces_every_registered_variant() {
    let out = gen_all(&params()).unwrap();
    assert_eq!(out.len(), REGISTRY.len());
    for v in REGISTRY {
        let stim = &out[v.name()];
        assert_eq!(stim.shape(), (44, 88), "{v}");
        stim.validate().unwrap();
    }
}

#[test]
fn gen_all_rejects_invalid_params_up_front() {
    let p = params().with_contexts("black", "purple");
    assert!(matches!(gen_all(&p), Err(StimError::UnknownContext(_))));
}

#[test]
fn gen_selected_fails_on_first_broken_builder() {
    let p = params().with_n_surrounds(4);
    let err = gen_selected(&p, &[Variant::Sbc, Variant::Cross]).unwrap_err();
    assert!(matches!(err, StimError::Index(_)));
    assert_eq!(gen_selected(&p, &[Variant::Sbc]).unwrap().len(), 1);
}

#[test]
fn duplicate_requests_are_rejected() {
    let err = gen_selected(&params(), &[Variant::Strip, Variant::Strip]).unwrap_err();
    assert!(matches!(err, StimError::Validation(_)));
}

#[test]
fn thread_count_must_be_positive() {
    let opts = BatchOptions { threads: Some(0) };
    assert!(gen_selected_with(&params(), &[Variant::Sbc], &opts).is_err());

    let opts = BatchOptions { threads: Some(2) };
    let out = gen_selected_with(&params(), &[Variant::Sbc, Variant::Whites], &opts).unwrap();
    assert_eq!(
        out.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["sbc", "whites"]
    );
}
