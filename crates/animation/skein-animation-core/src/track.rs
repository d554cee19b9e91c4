//! Built track data: keyframes plus consolidated value storage.
//!
//! Vector values of one track live in a single contiguous arena, one
//! fixed-width chunk per unique value; keyframes hold element offsets into
//! it rather than owning buffers:
//!
//! ```text
//! storage:  [     vec0     ][     vec1     ] ... [     vecN     ]
//!            <-  vec_len ->  <-  vec_len ->       <-  vec_len ->
//!           ^               ^                    ^
//! keyframes[].value_idx ----+------ ... ---------+
//! ```
//!
//! Consecutive keyframes with identical values share one chunk.

use crate::data::Easing;

/// A built keyframe: stamp, easing to the next keyframe, and the element
/// offset of its value chunk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub stamp: f32,
    pub easing: Easing,
    /// Element offset into track storage, always a multiple of the vector
    /// width, with `value_idx + vec_len <= storage.len()`.
    pub value_idx: u32,
}

/// Immutable keyframe track with deduplicated contiguous value storage.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorTrack {
    keyframes: Vec<Keyframe>,
    storage: Vec<f32>,
    vec_len: usize,
}

impl VectorTrack {
    pub(crate) fn new(keyframes: Vec<Keyframe>, storage: Vec<f32>, vec_len: usize) -> Self {
        debug_assert!(vec_len > 0);
        debug_assert_eq!(storage.len() % vec_len, 0);
        debug_assert!(keyframes
            .iter()
            .all(|kf| kf.value_idx as usize + vec_len <= storage.len()));
        Self {
            keyframes,
            storage,
            vec_len,
        }
    }

    /// Component count of every value in this track.
    #[inline]
    pub fn vec_len(&self) -> usize {
        self.vec_len
    }

    #[inline]
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    #[inline]
    pub fn storage(&self) -> &[f32] {
        &self.storage
    }

    /// Number of physically stored unique values.
    #[inline]
    pub fn unique_count(&self) -> usize {
        self.storage.len() / self.vec_len
    }

    /// The value chunk starting at element offset `idx`.
    #[inline]
    pub fn chunk(&self, idx: u32) -> &[f32] {
        &self.storage[idx as usize..idx as usize + self.vec_len]
    }
}
