//! Storage builder: raw records in, immutable `VectorTrack` out.

use log::debug;

use crate::data::RawKeyframe;
use crate::error::BuildError;
use crate::track::{Keyframe, VectorTrack};

/// Builds `VectorTrack`s from raw records using two strategies bound once at
/// construction: a width probe (the first record decides the track width)
/// and a data extractor (fills one chunk per record).
pub struct VectorTrackBuilder<L, D> {
    probe_len: L,
    parse_data: D,
}

/// Worst-case element count, checked against the `u32` offset range before
/// anything is allocated.
fn checked_total(vec_len: usize, count: usize) -> Result<usize, BuildError> {
    vec_len
        .checked_mul(count)
        .filter(|total| u32::try_from(*total).is_ok())
        .ok_or(BuildError::SizeOverflow)
}

impl<L, D> VectorTrackBuilder<L, D> {
    pub fn new(probe_len: L, parse_data: D) -> Self {
        Self {
            probe_len,
            parse_data,
        }
    }

    /// Consumes the ordered records and produces an immutable track.
    ///
    /// Storage is sized for the worst case (every record unique), filled one
    /// chunk per record, then shrunk to the unique prefix. Runs of identical
    /// consecutive values collapse onto one stored chunk: the comparison is
    /// against the immediately preceding chunk only, element-wise and exact.
    /// Any record failure aborts the whole build.
    pub fn build<V>(&self, records: &[RawKeyframe<V>]) -> Result<VectorTrack, BuildError>
    where
        L: Fn(&V) -> Option<usize>,
        D: Fn(&V, &mut [f32]) -> bool,
    {
        let first = records.first().ok_or(BuildError::MissingOrInvalidKeyframe)?;
        let vec_len = (self.probe_len)(&first.value)
            .filter(|len| *len > 0)
            .ok_or(BuildError::MissingOrInvalidKeyframe)?;

        let total = checked_total(vec_len, records.len())?;

        let mut storage = vec![0.0f32; total];
        let mut keyframes = Vec::with_capacity(records.len());
        let mut unique = 0usize;

        for rec in records {
            let mut idx = unique * vec_len;
            if !(self.parse_data)(&rec.value, &mut storage[idx..idx + vec_len]) {
                return Err(BuildError::MissingOrInvalidKeyframe);
            }

            if unique > 0 && storage[idx - vec_len..idx] == storage[idx..idx + vec_len] {
                // Repeating value: reuse the previous chunk's offset.
                idx -= vec_len;
            } else {
                unique += 1;
            }

            keyframes.push(Keyframe {
                stamp: rec.stamp,
                easing: rec.easing,
                value_idx: idx as u32,
            });
        }

        // Tail dedup may have stored fewer chunks than records.
        storage.truncate(unique * vec_len);
        storage.shrink_to_fit();

        debug!(
            "built track: {} keyframes, {} unique values, width {}",
            keyframes.len(),
            unique,
            vec_len
        );

        Ok(VectorTrack::new(keyframes, storage, vec_len))
    }
}
