use std::cell::Cell;

use serde_json::{json, Value as JsonValue};
use skein_animation_core::{
    bind_split_vector_property, bind_vector_property, json_scalar_data, json_scalar_len,
    json_vec_data, json_vec_len, BuildError, Easing, Keyframe, LerpInfo, RawKeyframe,
    SegmentLookup, TrackAnimator, VectorTrackBuilder,
};

fn kf(stamp: f32, value: JsonValue) -> RawKeyframe {
    RawKeyframe {
        stamp,
        value,
        easing: Easing::default(),
    }
}

/// Scripted lookup shared by every sub-animator in these tests.
struct TableLookup(Vec<(f32, LerpInfo)>);

impl SegmentLookup for TableLookup {
    fn lerp_info(&mut self, _keyframes: &[Keyframe], time: f32) -> LerpInfo {
        self.0
            .iter()
            .find(|(t, _)| *t == time)
            .map(|(_, info)| *info)
            .expect("query time not scripted")
    }
}

/// it should attempt every axis even after an earlier axis fails to bind
#[test]
fn all_axes_attempted_despite_failure() {
    let probes = Cell::new(0usize);
    let builder = VectorTrackBuilder::new(
        |v: &JsonValue| {
            probes.set(probes.get() + 1);
            json_scalar_len(v)
        },
        json_scalar_data,
    );

    let bad = vec![kf(0.0, json!("not a number"))];
    let y = vec![kf(0.0, json!(0.0)), kf(1.0, json!(1.0))];
    let z = vec![kf(0.0, json!(5.0)), kf(1.0, json!(6.0))];
    let axes = [Some(bad.as_slice()), Some(y.as_slice()), Some(z.as_slice())];

    let (split, any) =
        bind_split_vector_property(&axes, &builder, || TableLookup(Vec::new()));

    // The first axis failed, but both remaining channels were still probed
    // and bound: one probe per attempted axis.
    assert!(any);
    assert_eq!(probes.get(), 3);
    assert_eq!(split.bound_axes(), 2);
    assert_eq!(split.vec_len(), 3);
}

/// it should report false and leave the buffer untouched when nothing binds
#[test]
fn no_axis_bound_is_inert() {
    let builder = VectorTrackBuilder::new(json_scalar_len, json_scalar_data);
    let bad = vec![kf(0.0, json!(null))];
    let axes = [None, Some(bad.as_slice())];

    let (mut split, any) =
        bind_split_vector_property(&axes, &builder, || TableLookup(Vec::new()));
    assert!(!any);
    assert_eq!(split.bound_axes(), 0);

    let mut dst = [7.0, 7.0];
    assert!(!split.seek(0.5, &mut dst));
    assert_eq!(dst, [7.0, 7.0]);
}

/// it should route each bound axis into its own component of the buffer
#[test]
fn axes_write_their_own_components() {
    let builder = VectorTrackBuilder::new(json_scalar_len, json_scalar_data);

    // x ramps 0 -> 10; y is unanimated; z holds 5 (dedupes to a constant).
    let x = vec![kf(0.0, json!(0.0)), kf(1.0, json!(10.0))];
    let z = vec![kf(0.0, json!(5.0)), kf(1.0, json!([5.0]))];
    let axes = [Some(x.as_slice()), None, Some(z.as_slice())];

    let (mut split, any) = bind_split_vector_property(&axes, &builder, || {
        TableLookup(vec![(0.5, LerpInfo::blend(0, 1, 0.5))])
    });
    assert!(any);
    assert_eq!(split.bound_axes(), 2);

    let mut dst = [0.0, -1.0, 0.0];
    assert!(split.seek(0.5, &mut dst));
    assert_eq!(dst, [5.0, -1.0, 5.0]);

    // Second identical seek settles.
    assert!(!split.seek(0.5, &mut dst));
}

/// it should leave an axis unbound when its channel probes a non-scalar width
#[test]
fn non_scalar_axis_is_rejected() {
    // Vector strategies would happily build a width-2 track; the split
    // binder must refuse to register it on a single component.
    let builder = VectorTrackBuilder::new(json_vec_len, json_vec_data);
    let wide = vec![kf(0.0, json!([1.0, 2.0])), kf(1.0, json!([3.0, 4.0]))];
    let axes = [Some(wide.as_slice())];

    let (split, any) =
        bind_split_vector_property(&axes, &builder, || TableLookup(Vec::new()));
    assert!(!any);
    assert_eq!(split.bound_axes(), 0);
}

/// it should surface builder errors unchanged through the uniform bind path
#[test]
fn uniform_bind_propagates_build_errors() {
    let builder = VectorTrackBuilder::new(json_vec_len, json_vec_data);

    let records = vec![kf(0.0, json!([1, 2])), kf(1.0, json!("x"))];
    let err = bind_vector_property(&records, &builder, TableLookup(Vec::new())).unwrap_err();
    assert_eq!(err, BuildError::MissingOrInvalidKeyframe);

    let records = vec![
        kf(0.0, json!([0.0, 0.0])),
        kf(1.0, json!([2.0, 4.0])),
    ];
    let mut animator = bind_vector_property(
        &records,
        &builder,
        TableLookup(vec![(0.5, LerpInfo::blend(0, 2, 0.5))]),
    )
    .unwrap();

    let mut dst = [0.0, 0.0];
    assert!(animator.seek(0.5, &mut dst));
    assert_eq!(dst, [1.0, 2.0]);
}
