//! stimgen builds parametrized luminance-pattern stimuli for lightness perception studies.
//!
//! Every builder takes one [`StimulusParams`] and returns a [`StimulusBundle`]: an
//! intensity image plus the label masks it was assembled from. Four families are
//! provided, each with variants that shrink or cut down the surround:
//!
//! - simultaneous brightness contrast ([`sbc`], [`sbc_separate`], [`sbc_smallest`])
//! - bullseye rings ([`bullseye`], [`bullseye_high_freq`], [`bullseye_separate`])
//! - White's effect gratings ([`whites`], [`whites_narrow`], [`whites_separate`], [`strip`])
//! - checkerboards ([`checkerboard`], [`checkerboard_narrow`], [`checkerboard_separate`],
//!   [`checkerboard_smallest`], [`cross`], [`cross_polarity`])
//!
//! [`gen_all`] generates the registered set in parallel and [`write_batch`] saves it as
//! grayscale PNGs with a JSON manifest.
#![deny(unsafe_code)]
#![deny(missing_docs)]

mod batch;
mod compose;
mod config;
mod context;
mod export;
mod foundation;
mod geometry;
mod primitives;
mod variants;

pub use crate::foundation::core::{
    Axis, BAR_MASK, CHECKER_MASK, FRAME_MASK, Image, LabelMask, Point, Size,
    StimulusBundle, TARGET_MASK, max_label, pixel_center, pixel_shape,
};
pub use crate::foundation::error::{StimError, StimResult};

pub use crate::config::params::{
    INTENSITY_BACKGROUND, INTENSITY_TARGET, N_SURROUNDS, PPD, StimulusParams, TARGET_SIZE,
};
pub use crate::context::resolve::{ResolvedContext, resolve, resolve_one};
pub use crate::context::table::ContextTable;
pub use crate::geometry::layout::{
    ASPECT_RATIO, BarPair, ColumnPair, checkerboard_target_columns, coarse_radii,
    half_visual_size, radii, split_visual_size, units_per_side, visual_size,
    whites_target_indices,
};

pub use crate::compose::masks::{
    clear, corner_mask, flanker_mask, inner_ring_mask, label_regions, select,
    separation_mask, switch_polarity, union,
};
pub use crate::compose::spatial::{
    flip, join_halves, pad_to_shape, pad_to_visual_size, rotate, stack,
};
pub use crate::primitives::checkerboard::{CheckerboardSpec, checkerboard as checkerboard_board};
pub use crate::primitives::grating::{WhiteSpec, white};
pub use crate::primitives::rings::{
    RingSpec, TwoSidedSpec, rectangular_generalized, square_two_sided,
};

pub use crate::variants::bullseye::{bullseye, bullseye_high_freq, bullseye_separate};
pub use crate::variants::checkerboard::{
    CORNERS_LEFT, CORNERS_RIGHT, CROSS_N_SURROUNDS, FLANKERS_LEFT, FLANKERS_RIGHT,
    checkerboard, checkerboard_narrow, checkerboard_separate, checkerboard_smallest, cross,
    cross_polarity,
};
pub use crate::variants::sbc::{sbc, sbc_separate, sbc_smallest};
pub use crate::variants::whites::{strip, whites, whites_narrow, whites_separate};

pub use crate::batch::registry::{
    BatchOptions, REGISTRY, Variant, VariantFn, gen_all, gen_selected, gen_selected_with,
};
pub use crate::export::png::{ManifestEntry, mask_to_luma8, save_png, to_luma8, write_batch};
