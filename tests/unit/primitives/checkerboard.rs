use super::*;

fn board(targets: Vec<(usize, usize)>) -> CheckerboardSpec {
    CheckerboardSpec {
        board_shape: (3, 4),
        check_size: 0.5,
        target_indices: targets,
        intensity_checks: vec![1.0, 0.0],
        intensity_targets: vec![0.5, 0.6],
    }
}

#[test]
fn board_shape_is_derived_by_rounding() {
    assert_eq!(board_shape_for(Size::new(11.0, 5.5), 0.5).unwrap(), (11, 22));
    assert!(board_shape_for(Size::new(0.1, 0.1), 0.5).is_err());
    assert!(board_shape_for(Size::new(1.0, 1.0), 0.0).is_err());
}

#[test]
fn checks_are_labeled_row_major() {
    let stim = checkerboard(4.0, &board(vec![])).unwrap();
    assert_eq!(stim.shape(), (6, 8));
    assert_eq!(stim.visual_size, Size::new(2.0, 1.5));
    let checks = stim.mask(CHECKER_MASK).unwrap();
    assert_eq!(checks[[0, 0]], 1);
    assert_eq!(checks[[1, 1]], 1);
    assert_eq!(checks[[0, 2]], 2);
    assert_eq!(checks[[2, 0]], 5);
    assert_eq!(checks[[5, 7]], 12);
}

#[test]
fn top_left_check_takes_first_intensity() {
    let stim = checkerboard(4.0, &board(vec![])).unwrap();
    assert_eq!(stim.image[[0, 0]], 1.0);
    assert_eq!(stim.image[[0, 2]], 0.0);
    assert_eq!(stim.image[[2, 2]], 1.0);
}

#[test]
fn targets_replace_their_checks() {
    let stim = checkerboard(4.0, &board(vec![(1, 1), (2, 3)])).unwrap();
    let targets = stim.mask(TARGET_MASK).unwrap();
    assert_eq!(targets[[2, 2]], 1);
    assert_eq!(targets[[5, 7]], 2);
    assert_eq!(targets.iter().filter(|&&l| l > 0).count(), 8);
    assert_eq!(stim.image[[3, 3]], 0.5);
    assert_eq!(stim.image[[4, 6]], 0.6);
}

#[test]
fn out_of_board_target_is_an_index_error() {
    assert!(matches!(
        checkerboard(4.0, &board(vec![(3, 0)])),
        Err(StimError::Index(_))
    ));
    assert!(matches!(
        checkerboard(4.0, &board(vec![(0, 4)])),
        Err(StimError::Index(_))
    ));
}
