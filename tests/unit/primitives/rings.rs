use super::*;

fn spec(radii: Vec<f64>) -> RingSpec {
    RingSpec {
        visual_size: Size::new(2.0, 2.0),
        radii,
        intensity_frames: vec![1.0, 0.0],
        target_indices: vec![1],
        intensity_target: 0.5,
        intensity_background: 0.3,
    }
}

#[test]
fn frames_are_labeled_from_the_center_outward() {
    // 2x2 units at 4 ppd: 8x8 pixels, frames 2 px wide.
    let stim = rectangular_generalized(4.0, &spec(vec![0.25, 0.5, 0.75, 1.0])).unwrap();
    let frames = stim.mask(FRAME_MASK).unwrap();
    assert_eq!(stim.shape(), (8, 8));
    assert_eq!(frames[[3, 3]], 1);
    assert_eq!(frames[[4, 4]], 1);
    assert_eq!(frames[[2, 4]], 2);
    assert_eq!(frames[[1, 6]], 3);
    assert_eq!(frames[[0, 0]], 4);
    assert_eq!(frames[[7, 7]], 4);
}

#[test]
fn target_frame_is_painted_and_masked() {
    let stim = rectangular_generalized(4.0, &spec(vec![0.25, 0.5, 0.75, 1.0])).unwrap();
    let targets = stim.mask(TARGET_MASK).unwrap();
    assert_eq!(targets.iter().filter(|&&l| l == 1).count(), 4);
    assert_eq!(stim.image[[3, 4]], 0.5);
    // Frame 2 takes the second intensity, frame 3 wraps to the first.
    assert_eq!(stim.image[[2, 4]], 0.0);
    assert_eq!(stim.image[[1, 6]], 1.0);
}

#[test]
fn pixels_past_last_radius_are_background() {
    let stim = rectangular_generalized(4.0, &spec(vec![0.25, 0.5])).unwrap();
    assert_eq!(stim.mask(FRAME_MASK).unwrap()[[0, 0]], 0);
    assert_eq!(stim.image[[0, 0]], 0.3);
}

#[test]
fn invalid_radii_and_targets_are_rejected() {
    assert!(matches!(
        rectangular_generalized(4.0, &spec(vec![0.5, 0.25])),
        Err(StimError::Geometry(_))
    ));
    assert!(matches!(
        rectangular_generalized(4.0, &spec(vec![])),
        Err(StimError::Geometry(_))
    ));
    let mut bad_target = spec(vec![0.25, 0.5]);
    bad_target.target_indices = vec![3];
    assert!(matches!(
        rectangular_generalized(4.0, &bad_target),
        Err(StimError::Index(_))
    ));
}

#[test]
fn two_sided_stacks_renumbered_halves() {
    let stim = square_two_sided(
        4.0,
        &TwoSidedSpec {
            visual_size: Size::new(4.0, 2.0),
            target_radius: 0.25,
            surround_radius: 0.5,
            intensity_targets: [0.5, 0.6],
            intensity_surrounds: [0.0, 1.0],
            intensity_background: 0.3,
        },
    )
    .unwrap();
    assert_eq!(stim.shape(), (8, 16));
    assert_eq!(stim.visual_size, Size::new(4.0, 2.0));
    let frames = stim.mask(FRAME_MASK).unwrap();
    assert_eq!(frames[[4, 4]], 1);
    assert_eq!(frames[[4, 12]], 3);
    assert_eq!(frames[[2, 10]], 4);
    assert_eq!(stim.mask(TARGET_MASK).unwrap()[[4, 12]], 2);
    assert_eq!(stim.image[[4, 4]], 0.5);
    assert_eq!(stim.image[[4, 12]], 0.6);
    assert_eq!(stim.image[[2, 2]], 0.0);
    assert_eq!(stim.image[[2, 10]], 1.0);
    assert_eq!(stim.image[[0, 0]], 0.3);
}

#[test]
fn two_sided_splits_an_odd_column_count() {
    let stim = square_two_sided(
        2.0,
        &TwoSidedSpec {
            visual_size: Size::new(3.5, 2.0),
            target_radius: 0.25,
            surround_radius: 1.0,
            intensity_targets: [0.5, 0.5],
            intensity_surrounds: [0.0, 1.0],
            intensity_background: 0.3,
        },
    )
    .unwrap();
    assert_eq!(stim.shape(), (4, 7));
    assert_eq!(stim.visual_size, Size::new(3.5, 2.0));
    stim.validate().unwrap();
    // Right half owns the extra column.
    assert_eq!(stim.image[[1, 3]], 1.0);
    assert_eq!(stim.image[[1, 2]], 0.0);
}
