//! Construction errors.

use thiserror::Error;

/// Errors produced while building a track from raw keyframe records.
///
/// Both kinds abort the build; no partial track or animator is ever handed
/// out, so the caller keeps whatever default value it holds. Evaluation is
/// infallible once construction succeeds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A record's width could not be probed or its data could not be
    /// extracted (also raised for an empty record list).
    #[error("missing or invalid keyframe record")]
    MissingOrInvalidKeyframe,
    /// `vec_len * keyframe_count` does not fit the u32 offset range.
    #[error("keyframe value storage overflows the offset range")]
    SizeOverflow,
}
