//! Property binding: uniform vector tracks and split per-axis tracks.
//!
//! Split ("separate dimensions") properties drive each component with its own
//! standalone scalar track instead of one multi-component keyframe stream.
//! Binding attempts every axis regardless of earlier failures and reports
//! success if any axis bound; a failed axis keeps holding whatever the
//! caller's buffer already contains.

use log::warn;

use crate::animator::{animator_for_track, TrackAnimator};
use crate::builder::VectorTrackBuilder;
use crate::data::RawKeyframe;
use crate::error::BuildError;
use crate::lookup::SegmentLookup;

/// Composite animator for split properties: one optional width-1
/// sub-animator per component.
#[derive(Debug)]
pub struct SplitVectorAnimator {
    axes: Vec<Option<Box<dyn TrackAnimator>>>,
}

impl SplitVectorAnimator {
    pub fn with_width(vec_len: usize) -> Self {
        Self {
            axes: (0..vec_len).map(|_| None).collect(),
        }
    }

    fn set_axis(&mut self, axis: usize, animator: Box<dyn TrackAnimator>) {
        debug_assert_eq!(animator.vec_len(), 1);
        self.axes[axis] = Some(animator);
    }

    /// Number of components that ended up with a sub-animator.
    pub fn bound_axes(&self) -> usize {
        self.axes.iter().filter(|a| a.is_some()).count()
    }
}

impl TrackAnimator for SplitVectorAnimator {
    fn seek(&mut self, time: f32, dst: &mut [f32]) -> bool {
        debug_assert_eq!(dst.len(), self.axes.len());
        let mut changed = false;
        for (axis, slot) in self.axes.iter_mut().enumerate() {
            if let Some(animator) = slot {
                changed |= animator.seek(time, &mut dst[axis..axis + 1]);
            }
        }
        changed
    }

    fn vec_len(&self) -> usize {
        self.axes.len()
    }
}

/// Binds a regular (uniform) vector property: one keyframe stream carrying
/// all components together. Fails whole, never partially.
pub fn bind_vector_property<V, L, D, S>(
    records: &[RawKeyframe<V>],
    builder: &VectorTrackBuilder<L, D>,
    lookup: S,
) -> Result<Box<dyn TrackAnimator>, BuildError>
where
    L: Fn(&V) -> Option<usize>,
    D: Fn(&V, &mut [f32]) -> bool,
    S: SegmentLookup + 'static,
{
    let track = builder.build(records)?;
    Ok(animator_for_track(track, lookup))
}

/// Binds a split vector property: one optional scalar channel per axis.
///
/// Every axis bind runs even after an earlier axis failed (each success
/// registers a sub-animator on the composite), and the per-axis results
/// combine with a non-short-circuit OR. Returns the composite plus whether
/// any axis bound. An axis whose channel probes a width other than one
/// counts as a failed bind.
pub fn bind_split_vector_property<V, L, D, S, F>(
    axes: &[Option<&[RawKeyframe<V>]>],
    builder: &VectorTrackBuilder<L, D>,
    mut mk_lookup: F,
) -> (SplitVectorAnimator, bool)
where
    L: Fn(&V) -> Option<usize>,
    D: Fn(&V, &mut [f32]) -> bool,
    S: SegmentLookup + 'static,
    F: FnMut() -> S,
{
    let mut split = SplitVectorAnimator::with_width(axes.len());
    let mut any_bound = false;

    for (axis, channel) in axes.iter().enumerate() {
        let bound = match channel {
            Some(records) => match builder.build(records) {
                Ok(track) if track.vec_len() == 1 => {
                    split.set_axis(axis, animator_for_track(track, mk_lookup()));
                    true
                }
                Ok(track) => {
                    warn!(
                        "split axis {} probed width {}, expected 1; axis left unbound",
                        axis,
                        track.vec_len()
                    );
                    false
                }
                Err(err) => {
                    warn!("split axis {} failed to bind: {}", axis, err);
                    false
                }
            },
            None => false,
        };
        any_bound |= bound;
    }

    (split, any_bound)
}
