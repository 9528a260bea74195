//! Integration tests for playback range computation.

use actionkit_action::Action;
use actionkit_core::limits::{MAX_FRAME, MIN_FRAME};
use actionkit_core::{CurveModifier, ModifierKind};

fn keyed_action(keys: &[(&str, &[f32])]) -> Action {
    let mut action = Action::new("Wave");
    for (path, frames) in keys {
        let id = action.create_channel(path, 0, None).unwrap();
        action
            .update_channel(id, |c| {
                for &f in frames.iter() {
                    c.keys.set(f, 1.0);
                }
            })
            .unwrap();
    }
    action
}

#[test]
fn empty_action_scans_to_zero() {
    let action = Action::new("Empty");
    assert_eq!(action.scan_curve_extent(false), (0.0, 0.0));
    assert_eq!(action.scan_curve_extent(true), (0.0, 0.0));
    assert_eq!(action.effective_range(), (0.0, 0.0));
}

#[test]
fn scan_spans_all_channels() {
    let action = keyed_action(&[("location", &[10.0, 20.0]), ("scale", &[1.0, 15.0])]);
    assert_eq!(action.effective_range(), (1.0, 20.0));
}

#[test]
fn keyless_channels_do_not_pull_range_to_zero() {
    let mut action = keyed_action(&[("location", &[10.0, 20.0])]);
    action.create_channel("scale", 0, None).unwrap();
    assert_eq!(action.scan_curve_extent(false), (10.0, 20.0));
}

#[test]
fn modifiers_widen_only_on_request() {
    let mut action = keyed_action(&[("location", &[10.0, 20.0]), ("scale", &[5.0, 8.0])]);
    let scale = action.find_channel("scale", 0).unwrap().unwrap().id();
    action
        .update_channel(scale, |c| {
            c.modifiers.push(CurveModifier::new(ModifierKind::Cycles {
                before: false,
                after: true,
            }))
        })
        .unwrap();

    assert_eq!(action.scan_curve_extent(false), (5.0, 20.0));
    assert_eq!(action.scan_curve_extent(true), (5.0, MAX_FRAME));
    assert_eq!(action.effective_range(), (5.0, 20.0));

    action
        .update_channel(scale, |c| {
            c.modifiers.push(CurveModifier::new(ModifierKind::Noise))
        })
        .unwrap();
    assert_eq!(action.scan_curve_extent(true), (MIN_FRAME, MAX_FRAME));
}

#[test]
fn restricted_modifier_contributes_its_window() {
    let mut action = keyed_action(&[("location", &[10.0, 20.0])]);
    let id = action.channels()[0].id();
    action
        .update_channel(id, |c| {
            c.modifiers
                .push(CurveModifier::restricted(ModifierKind::Noise, 0.0, 50.0))
        })
        .unwrap();
    assert_eq!(action.scan_curve_extent(true), (0.0, 50.0));
}

#[test]
fn explicit_range_round_trips() {
    let mut action = keyed_action(&[("location", &[10.0, 20.0])]);

    action.set_effective_range(5.0, 2.0).unwrap();
    assert_eq!(action.effective_range(), (5.0, 5.0));

    action.set_effective_range(2.0, 8.0).unwrap();
    action.set_start(10.0).unwrap();
    assert_eq!(action.effective_range(), (10.0, 10.0));

    action.set_end(4.0).unwrap();
    assert_eq!(action.effective_range(), (4.0, 4.0));
    assert_eq!(action.curve_frame_range(), (10.0, 20.0));
}

#[test]
fn enabling_blank_range_seeds_from_curves() {
    let mut action = keyed_action(&[("location", &[10.0, 20.0])]);
    assert!(!action.uses_explicit_range());

    action.enable_explicit_range(true);
    assert_eq!(action.effective_range(), (10.0, 20.0));

    action.set_end(30.0).unwrap();
    action.enable_explicit_range(false);
    assert_eq!(action.effective_range(), (10.0, 20.0));
    action.enable_explicit_range(true);
    assert_eq!(action.effective_range(), (10.0, 30.0));
}

#[test]
fn non_finite_frames_leave_range_untouched() {
    let mut action = keyed_action(&[("location", &[10.0, 20.0])]);
    action.set_effective_range(2.0, 8.0).unwrap();

    assert!(action.set_effective_range(f32::NAN, 5.0).is_err());
    assert!(action.set_start(f32::NEG_INFINITY).is_err());
    assert!(action.set_end(f32::NAN).is_err());
    let (start, end) = action.effective_range();
    assert_eq!((start, end), (2.0, 8.0));
    assert!(end >= start);
}

#[test]
fn cyclic_flag_is_independent_of_range() {
    let mut action = keyed_action(&[("location", &[10.0, 20.0])]);
    action.set_cyclic(true);
    assert!(action.is_cyclic());
    assert!(!action.uses_explicit_range());
    assert_eq!(action.effective_range(), (10.0, 20.0));
}
