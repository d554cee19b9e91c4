//! Track animators: seek-time evaluation with change detection.

use crate::lookup::SegmentLookup;
use crate::track::VectorTrack;

/// Components blended per batched step in the interpolated path.
const LANES: usize = 4;

/// Seek-driven property animator over a caller-owned output buffer.
///
/// `seek` writes the evaluated value into `dst` and reports whether any
/// component differs from what the buffer previously held. Callers pass the
/// same buffer every frame; downstream work keys off the returned flag.
pub trait TrackAnimator: std::fmt::Debug {
    fn seek(&mut self, time: f32, dst: &mut [f32]) -> bool;

    /// Component count this animator writes; `dst.len()` must equal it.
    fn vec_len(&self) -> usize;
}

/// Constant-vector animator: the whole track collapsed to one value, so no
/// lookup is ever consulted.
#[derive(Debug)]
pub struct StaticAnimator {
    value: Vec<f32>,
}

impl StaticAnimator {
    pub fn new(value: Vec<f32>) -> Self {
        Self { value }
    }
}

impl TrackAnimator for StaticAnimator {
    fn seek(&mut self, _time: f32, dst: &mut [f32]) -> bool {
        write_chunk(&self.value, dst)
    }

    fn vec_len(&self) -> usize {
        self.value.len()
    }
}

/// Interpolating keyframe animator; owns its track and lookup service
/// exclusively and immutably after construction.
pub struct VectorAnimator<L> {
    track: VectorTrack,
    lookup: L,
}

impl<L> std::fmt::Debug for VectorAnimator<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorAnimator")
            .field("track", &self.track)
            .finish_non_exhaustive()
    }
}

impl<L: SegmentLookup> VectorAnimator<L> {
    pub fn new(track: VectorTrack, lookup: L) -> Self {
        Self { track, lookup }
    }

    pub fn track(&self) -> &VectorTrack {
        &self.track
    }
}

impl<L: SegmentLookup> TrackAnimator for VectorAnimator<L> {
    fn seek(&mut self, time: f32, dst: &mut [f32]) -> bool {
        let info = self.lookup.lerp_info(self.track.keyframes(), time);
        let vec_len = self.track.vec_len();
        debug_assert_eq!(dst.len(), vec_len);
        debug_assert!(info.left as usize + vec_len <= self.track.storage().len());
        debug_assert!(info.right as usize + vec_len <= self.track.storage().len());

        if info.constant {
            return write_chunk(self.track.chunk(info.left), dst);
        }

        lerp_into(
            self.track.chunk(info.left),
            self.track.chunk(info.right),
            info.weight,
            dst,
        )
    }

    fn vec_len(&self) -> usize {
        self.track.vec_len()
    }
}

/// Copies `src` into `dst` if they differ. The comparison happens before the
/// overwrite, so the flag reflects the buffer's previous contents.
fn write_chunk(src: &[f32], dst: &mut [f32]) -> bool {
    if dst[..] != src[..] {
        dst.copy_from_slice(src);
        return true;
    }
    false
}

/// Blends `v0` toward `v1` into `dst`, returning whether any component moved.
///
/// Components go through fixed-width batches with a scalar tail for widths
/// that are not a multiple of `LANES`; both paths apply the same formula, so
/// batching never changes numeric results or the changed flag.
fn lerp_into(v0: &[f32], v1: &[f32], weight: f32, dst: &mut [f32]) -> bool {
    let len = dst.len();
    let mut changed = false;
    let mut i = 0;

    while i + LANES <= len {
        for j in i..i + LANES {
            let new_val = v0[j] + (v1[j] - v0[j]) * weight;
            changed |= new_val != dst[j];
            dst[j] = new_val;
        }
        i += LANES;
    }

    while i < len {
        let new_val = v0[i] + (v1[i] - v0[i]) * weight;
        changed |= new_val != dst[i];
        dst[i] = new_val;
        i += 1;
    }

    changed
}

/// Selects the runtime variant for a built track: tracks whose values all
/// deduped onto one chunk get the constant animator, everything else
/// interpolates through the lookup service.
pub fn animator_for_track<L>(track: VectorTrack, lookup: L) -> Box<dyn TrackAnimator>
where
    L: SegmentLookup + 'static,
{
    if track.unique_count() == 1 {
        Box::new(StaticAnimator::new(track.chunk(0).to_vec()))
    } else {
        Box::new(VectorAnimator::new(track, lookup))
    }
}
