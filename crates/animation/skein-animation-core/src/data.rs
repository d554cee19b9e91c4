//! Raw keyframe records and the canonical JSON value strategies.
//!
//! Records are what an authoring/parsing layer hands to the builder: a time
//! stamp, an opaque value payload, and an easing descriptor. The payload's
//! structure is only touched through the pluggable probe/extract strategies
//! (builder.rs), so hosts with their own document model can reuse the core
//! with different payload types.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// 2D control point for cubic-bezier easing (normalized 0..1 domain).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// Per-keyframe easing descriptor, opaque to the core; only the segment
/// lookup service interprets it. `out` shapes the departure from this
/// keyframe, `in` the arrival at the next one; `hold` marks a stepped
/// segment.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Easing {
    #[serde(default)]
    #[serde(rename = "in")]
    pub r#in: Option<Vec2>,
    #[serde(default)]
    #[serde(rename = "out")]
    pub r#out: Option<Vec2>,
    #[serde(default)]
    pub hold: bool,
}

/// One raw keyframe record as authored. Records arrive ordered by stamp;
/// the core assumes but does not re-validate that order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RawKeyframe<V = JsonValue> {
    /// Time stamp in seconds.
    pub stamp: f32,
    pub value: V,
    #[serde(default)]
    pub easing: Easing,
}

/// Width probe for uniform JSON array payloads.
pub fn json_vec_len(v: &JsonValue) -> Option<usize> {
    v.as_array().map(|a| a.len())
}

/// Extracts a JSON array payload of exactly `dst.len()` numbers.
pub fn json_vec_data(v: &JsonValue, dst: &mut [f32]) -> bool {
    let Some(arr) = v.as_array() else {
        return false;
    };
    if arr.len() != dst.len() {
        return false;
    }
    for (slot, item) in dst.iter_mut().zip(arr) {
        match item.as_f64() {
            Some(x) => *slot = x as f32,
            None => return false,
        }
    }
    true
}

/// Width probe for scalar payloads: a bare number or a one-element array
/// (authoring tools emit both spellings).
pub fn json_scalar_len(v: &JsonValue) -> Option<usize> {
    match v {
        JsonValue::Number(_) => Some(1),
        JsonValue::Array(a) if a.len() == 1 && a[0].is_number() => Some(1),
        _ => None,
    }
}

/// Extracts a scalar payload into a one-element slice.
pub fn json_scalar_data(v: &JsonValue, dst: &mut [f32]) -> bool {
    if dst.len() != 1 {
        return false;
    }
    let num = match v {
        JsonValue::Array(a) if a.len() == 1 => a[0].as_f64(),
        other => other.as_f64(),
    };
    match num {
        Some(x) => {
            dst[0] = x as f32;
            true
        }
        None => false,
    }
}
