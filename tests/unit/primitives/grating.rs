use super::*;

fn grating(targets: Vec<isize>) -> WhiteSpec {
    WhiteSpec {
        visual_size: Size::new(3.0, 1.5),
        bar_width: 0.5,
        target_indices: targets,
        target_height: 0.5,
        intensity_bars: vec![0.0, 1.0],
        intensity_targets: vec![0.5],
    }
}

#[test]
fn negative_indices_count_from_the_right() {
    assert_eq!(resolve_bar_index(0, 6).unwrap(), 0);
    assert_eq!(resolve_bar_index(-1, 6).unwrap(), 5);
    assert_eq!(resolve_bar_index(-6, 6).unwrap(), 0);
    assert!(matches!(resolve_bar_index(6, 6), Err(StimError::Index(_))));
    assert!(matches!(resolve_bar_index(-7, 6), Err(StimError::Index(_))));
}

#[test]
fn bars_alternate_left_to_right() {
    let stim = white(4.0, &grating(vec![])).unwrap();
    assert_eq!(stim.shape(), (6, 12));
    let bars = stim.mask(BAR_MASK).unwrap();
    assert_eq!(bars[[0, 0]], 1);
    assert_eq!(bars[[5, 3]], 2);
    assert_eq!(bars[[3, 11]], 6);
    assert_eq!(stim.image[[0, 0]], 0.0);
    assert_eq!(stim.image[[0, 2]], 1.0);
}

#[test]
fn target_is_centered_in_its_bar() {
    let stim = white(4.0, &grating(vec![-2])).unwrap();
    let targets = stim.mask(TARGET_MASK).unwrap();
    // Bar 4 spans columns 8..10; the target spans rows 2..4.
    assert_eq!(targets.iter().filter(|&&l| l == 1).count(), 4);
    assert_eq!(targets[[2, 8]], 1);
    assert_eq!(targets[[3, 9]], 1);
    assert_eq!(targets[[1, 8]], 0);
    assert_eq!(stim.image[[2, 8]], 0.5);
    assert_eq!(stim.image[[1, 8]], 0.0);
}

#[test]
fn out_of_range_target_bar_fails() {
    assert!(matches!(
        white(4.0, &grating(vec![6])),
        Err(StimError::Index(_))
    ));
}
