use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;

use crate::config::params::StimulusParams;
use crate::foundation::core::StimulusBundle;
use crate::foundation::error::{StimError, StimResult};
use crate::variants::{bullseye, checkerboard, sbc, whites};

/// Signature shared by every variant builder.
pub type VariantFn = fn(&StimulusParams) -> StimResult<StimulusBundle>;

/// Every stimulus builder the crate knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    /// [`sbc`](crate::sbc).
    Sbc,
    /// [`sbc_separate`](crate::sbc_separate).
    SbcSeparate,
    /// [`sbc_smallest`](crate::sbc_smallest).
    SbcSmallest,
    /// [`bullseye`](crate::bullseye).
    Bullseye,
    /// [`bullseye_high_freq`](crate::bullseye_high_freq).
    BullseyeHighFreq,
    /// [`bullseye_separate`](crate::bullseye_separate).
    BullseyeSeparate,
    /// [`whites`](crate::whites).
    Whites,
    /// [`whites_narrow`](crate::whites_narrow).
    WhitesNarrow,
    /// [`whites_separate`](crate::whites_separate).
    WhitesSeparate,
    /// [`strip`](crate::strip).
    Strip,
    /// [`checkerboard`](crate::checkerboard).
    Checkerboard,
    /// [`checkerboard_separate`](crate::checkerboard_separate).
    CheckerboardSeparate,
    /// [`checkerboard_narrow`](crate::checkerboard_narrow).
    CheckerboardNarrow,
    /// [`checkerboard_smallest`](crate::checkerboard_smallest).
    CheckerboardSmallest,
    /// [`cross`](crate::cross).
    Cross,
    /// [`cross_polarity`](crate::cross_polarity).
    CrossPolarity,
}

/// Variants produced by [`gen_all`], in output order.
///
/// `checkerboard_smallest`, `cross` and `cross_polarity` are built on demand only.
pub const REGISTRY: [Variant; 13] = [
    Variant::Sbc,
    Variant::SbcSeparate,
    Variant::SbcSmallest,
    Variant::Bullseye,
    Variant::BullseyeHighFreq,
    Variant::BullseyeSeparate,
    Variant::Whites,
    Variant::WhitesNarrow,
    Variant::WhitesSeparate,
    Variant::Strip,
    Variant::Checkerboard,
    Variant::CheckerboardSeparate,
    Variant::CheckerboardNarrow,
];

impl Variant {
    /// Every variant, registered or not.
    pub const ALL: [Variant; 16] = [
        Variant::Sbc,
        Variant::SbcSeparate,
        Variant::SbcSmallest,
        Variant::Bullseye,
        Variant::BullseyeHighFreq,
        Variant::BullseyeSeparate,
        Variant::Whites,
        Variant::WhitesNarrow,
        Variant::WhitesSeparate,
        Variant::Strip,
        Variant::Checkerboard,
        Variant::CheckerboardSeparate,
        Variant::CheckerboardNarrow,
        Variant::CheckerboardSmallest,
        Variant::Cross,
        Variant::CrossPolarity,
    ];

    /// Registry name, also used as the output file stem.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Sbc => "sbc",
            Variant::SbcSeparate => "sbc_separate",
            Variant::SbcSmallest => "sbc_smallest",
            Variant::Bullseye => "bullseye",
            Variant::BullseyeHighFreq => "bullseye_high_freq",
            Variant::BullseyeSeparate => "bullseye_separate",
            Variant::Whites => "whites",
            Variant::WhitesNarrow => "whites_narrow",
            Variant::WhitesSeparate => "whites_separate",
            Variant::Strip => "strip",
            Variant::Checkerboard => "checkerboard",
            Variant::CheckerboardSeparate => "checkerboard_separate",
            Variant::CheckerboardNarrow => "checkerboard_narrow",
            Variant::CheckerboardSmallest => "checkerboard_smallest",
            Variant::Cross => "cross",
            Variant::CrossPolarity => "cross_polarity",
        }
    }

    /// Builder function for this variant.
    pub fn builder(self) -> VariantFn {
        match self {
            Variant::Sbc => sbc::sbc,
            Variant::SbcSeparate => sbc::sbc_separate,
            Variant::SbcSmallest => sbc::sbc_smallest,
            Variant::Bullseye => bullseye::bullseye,
            Variant::BullseyeHighFreq => bullseye::bullseye_high_freq,
            Variant::BullseyeSeparate => bullseye::bullseye_separate,
            Variant::Whites => whites::whites,
            Variant::WhitesNarrow => whites::whites_narrow,
            Variant::WhitesSeparate => whites::whites_separate,
            Variant::Strip => whites::strip,
            Variant::Checkerboard => checkerboard::checkerboard,
            Variant::CheckerboardSeparate => checkerboard::checkerboard_separate,
            Variant::CheckerboardNarrow => checkerboard::checkerboard_narrow,
            Variant::CheckerboardSmallest => checkerboard::checkerboard_smallest,
            Variant::Cross => checkerboard::cross,
            Variant::CrossPolarity => checkerboard::cross_polarity,
        }
    }

    /// Run this variant's builder.
    pub fn generate(self, params: &StimulusParams) -> StimResult<StimulusBundle> {
        (self.builder())(params)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = StimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| StimError::validation(format!("unknown stimulus variant '{s}'")))
    }
}

/// Worker settings for batch generation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

/// Generate every variant in [`REGISTRY`].
pub fn gen_all(params: &StimulusParams) -> StimResult<BTreeMap<String, StimulusBundle>> {
    gen_selected(params, &REGISTRY)
}

/// Generate `variants` with the default worker settings.
pub fn gen_selected(
    params: &StimulusParams,
    variants: &[Variant],
) -> StimResult<BTreeMap<String, StimulusBundle>> {
    gen_selected_with(params, variants, &BatchOptions::default())
}

/// Generate `variants` in parallel, keyed by variant name.
///
/// Parameters are validated once up front; the first failing builder aborts the batch.
#[tracing::instrument(level = "info", skip_all, fields(count = variants.len()))]
pub fn gen_selected_with(
    params: &StimulusParams,
    variants: &[Variant],
    opts: &BatchOptions,
) -> StimResult<BTreeMap<String, StimulusBundle>> {
    params.validate()?;
    for (i, v) in variants.iter().enumerate() {
        if variants[..i].contains(v) {
            return Err(StimError::validation(format!(
                "variant '{v}' requested more than once"
            )));
        }
    }

    let pool = build_thread_pool(opts.threads)?;
    let generated = pool.install(|| {
        variants
            .par_iter()
            .map(|&v| v.generate(params).map(|stim| (v, stim)))
            .collect::<Vec<_>>()
    });

    let mut out = BTreeMap::new();
    for item in generated {
        let (variant, stim) = item?;
        tracing::debug!(variant = variant.name(), shape = ?stim.shape(), "generated");
        out.insert(variant.name().to_string(), stim);
    }
    Ok(out)
}

fn build_thread_pool(threads: Option<usize>) -> StimResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(StimError::validation(
            "batch 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| StimError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/batch/registry.rs"]
mod tests;
