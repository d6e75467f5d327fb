use super::*;

#[test]
fn radii_have_2n_plus_1_strictly_increasing_entries() {
    for n in 0..8 {
        let r = radii(0.5, n);
        assert_eq!(r.len(), 2 * n + 1);
        assert_eq!(r[0], 0.25);
        assert!(r.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn coarse_radii_take_every_other_entry() {
    assert_eq!(coarse_radii(0.5, 2), vec![0.25, 0.75, 1.25]);
    assert_eq!(coarse_radii(0.5, 5).last().copied(), Some(2.75));
}

#[test]
fn visual_size_width_follows_aspect_ratio() {
    for n in 0..6 {
        for aspect in [1.0, 1.5, 2.0] {
            let s = visual_size(0.5, n, aspect);
            assert_eq!(s.height, 0.5 * (2 * n + 1) as f64);
            assert_eq!(s.width, aspect * s.height);
        }
    }
}

#[test]
fn default_visual_size_is_5_5_by_11() {
    let s = visual_size(0.5, 5, ASPECT_RATIO);
    assert_eq!((s.height, s.width), (5.5, 11.0));
    let h = half_visual_size(0.5, 5);
    assert_eq!((h.height, h.width), (5.5, 5.5));
}

#[test]
fn split_halves_tile_the_pixel_grid() {
    let full = visual_size(0.5, 5, ASPECT_RATIO);
    let [left, right] = split_visual_size(full, 15.0).unwrap();
    let (rows, cols) = pixel_shape(full, 15.0).unwrap();
    assert_eq!((rows, cols), (83, 165));
    assert_eq!(pixel_shape(left, 15.0).unwrap(), (83, 82));
    assert_eq!(pixel_shape(right, 15.0).unwrap(), (83, 83));

    let [left, right] = split_visual_size(full, 16.0).unwrap();
    assert_eq!(left, right);
    assert_eq!(pixel_shape(left, 16.0).unwrap(), (88, 88));
}

#[test]
fn checkerboard_columns_flank_the_midline() {
    let n = 5;
    let black = checkerboard_target_columns(n, "black").unwrap();
    let white = checkerboard_target_columns(n, "white").unwrap();
    assert_eq!(black, ColumnPair { left: 5, right: 15 });
    assert_eq!(white, ColumnPair { left: 6, right: 16 });

    // Mirror symmetry about the board midline (22 columns).
    let n_cols = 4 * n + 2;
    assert_eq!(black.left + white.right, n_cols - 1);
    assert_eq!(white.left + black.right, n_cols - 1);
}

#[test]
fn checkerboard_columns_reject_unknown_context() {
    let err = checkerboard_target_columns(5, "background").unwrap_err();
    assert!(matches!(err, StimError::UnknownContext(_)));
}

#[test]
fn whites_indices_are_one_bar_apart() {
    let black = whites_target_indices(5, "black").unwrap();
    let white = whites_target_indices(5, "white").unwrap();
    assert_eq!(black, BarPair { left: 6, right: -6 });
    assert_eq!(white, BarPair { left: 7, right: -5 });
    assert!(whites_target_indices(5, "grey").is_err());
}

#[test]
fn bar_parity_flips_with_n() {
    assert!(bars_start_with_first_context(5));
    assert!(!bars_start_with_first_context(4));
}

#[test]
fn geometry_check_rejects_degenerate_inputs() {
    assert!(check_geometry(0.5, 0).is_err());
    assert!(check_geometry(0.0, 3).is_err());
    assert!(check_geometry(-1.0, 3).is_err());
    assert!(check_geometry(f64::INFINITY, 3).is_err());
    check_geometry(0.5, 1).unwrap();
}
