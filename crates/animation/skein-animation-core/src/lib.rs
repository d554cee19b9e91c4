//! Skein animation core (engine-agnostic).
//!
//! Builds compact keyframe tracks for vector-valued properties and evaluates
//! them on demand: consolidated per-track value storage with tail dedup,
//! constant and interpolated seek paths, and a changed/unchanged signal that
//! downstream consumers use to skip redundant work. Time-to-segment lookup is
//! a pluggable service (lookup.rs); raw-format parsing stays in the host.

pub mod animator;
pub mod binding;
pub mod builder;
pub mod data;
pub mod error;
pub mod lookup;
pub mod track;

// Re-exports for consumers (hosts/adapters)
pub use animator::{animator_for_track, StaticAnimator, TrackAnimator, VectorAnimator};
pub use binding::{bind_split_vector_property, bind_vector_property, SplitVectorAnimator};
pub use builder::VectorTrackBuilder;
pub use data::{
    json_scalar_data, json_scalar_len, json_vec_data, json_vec_len, Easing, RawKeyframe, Vec2,
};
pub use error::BuildError;
pub use lookup::{LerpInfo, SegmentLookup};
pub use track::{Keyframe, VectorTrack};
