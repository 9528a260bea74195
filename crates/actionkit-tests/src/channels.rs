//! Integration tests for channel and group management.
//!
//! Builds rig-like actions and checks the grouping layout that channel
//! editors rely on when they walk a group by adjacency.

use actionkit_action::{Action, ActionChange};
use actionkit_core::{ActionError, ChannelId, GroupId};

// ── Helpers ────────────────────────────────────────────────────

fn bone_path(bone: &str, prop: &str) -> String {
    format!("pose.bones[\"{bone}\"].{prop}")
}

/// Channels for three bones, created interleaved so grouping has work to do.
fn build_rig() -> Action {
    let mut action = Action::new("Run");
    for index in 0..3 {
        for bone in ["hips", "thigh.L", "thigh.R"] {
            action
                .create_channel(&bone_path(bone, "location"), index, Some(bone))
                .unwrap();
        }
    }
    action.create_channel("color", 0, None).unwrap();
    action.take_changes();
    action
}

fn group_id(action: &Action, name: &str) -> GroupId {
    action.find_group(name).unwrap().id()
}

fn members(action: &Action, group: GroupId) -> Vec<ChannelId> {
    action.group_channels(group).map(|c| c.id()).collect()
}

// ── Layout ─────────────────────────────────────────────────────

#[test]
fn interleaved_creation_yields_contiguous_groups() {
    let action = build_rig();
    assert!(action.validate().is_ok());

    for bone in ["hips", "thigh.L", "thigh.R"] {
        let group = group_id(&action, bone);
        let indices: Vec<u32> = action
            .group_channels(group)
            .map(|c| c.array_index())
            .collect();
        assert_eq!(indices, vec![0, 1, 2], "group {bone}");
    }
    assert_eq!(action.channels().last().unwrap().data_path(), "color");
}

#[test]
fn group_walk_matches_back_references() {
    let action = build_rig();
    for group in action.groups() {
        let by_walk = members(&action, group.id());
        let by_ref: Vec<ChannelId> = action
            .channels()
            .iter()
            .filter(|c| c.group() == Some(group.id()))
            .map(|c| c.id())
            .collect();
        assert_eq!(by_walk, by_ref);
    }
}

#[test]
fn duplicate_channel_is_rejected_even_in_other_group() {
    let mut action = build_rig();
    let path = bone_path("hips", "location");
    let err = action.create_channel(&path, 1, Some("thigh.L")).unwrap_err();
    assert!(matches!(err, ActionError::DuplicateChannel { array_index: 1, .. }));
    assert!(!action.has_pending_changes());
}

// ── Group removal ──────────────────────────────────────────────

#[test]
fn removing_middle_group_keeps_others_intact() {
    let mut action = build_rig();
    let hips = group_id(&action, "hips");
    let left = group_id(&action, "thigh.L");
    let right = group_id(&action, "thigh.R");
    let left_members = members(&action, left);
    let hips_members = members(&action, hips);
    let right_members = members(&action, right);

    action.remove_group(left).unwrap();
    assert!(action.validate().is_ok());
    assert_eq!(members(&action, hips), hips_members);
    assert_eq!(members(&action, right), right_members);

    let tail: Vec<ChannelId> = action.channels()[action.channels().len() - 3..]
        .iter()
        .map(|c| c.id())
        .collect();
    assert_eq!(tail, left_members);
    assert!(action.group(left).is_none());
}

#[test]
fn relocated_channels_can_be_regrouped_by_recreation() {
    let mut action = build_rig();
    let left = group_id(&action, "thigh.L");
    action.remove_group(left).unwrap();

    let stray = action
        .find_channel(&bone_path("thigh.L", "location"), 0)
        .unwrap()
        .unwrap()
        .id();
    action.remove_channel(stray).unwrap();
    action
        .create_channel(&bone_path("thigh.L", "location"), 0, Some("thigh.L"))
        .unwrap();

    let regrouped = group_id(&action, "thigh.L");
    assert_ne!(regrouped, left);
    assert_eq!(members(&action, regrouped).len(), 1);
    assert!(action.validate().is_ok());
}

// ── Channel removal ────────────────────────────────────────────

#[test]
fn removing_every_channel_of_a_group_leaves_empty_group() {
    let mut action = build_rig();
    let hips = group_id(&action, "hips");
    for id in members(&action, hips) {
        action.remove_channel(id).unwrap();
    }
    assert!(action.group(hips).is_some());
    assert_eq!(action.group_channels(hips).count(), 0);

    let id = action
        .create_channel(&bone_path("hips", "rotation_euler"), 0, Some("hips"))
        .unwrap();
    assert_eq!(action.channels()[0].id(), id);
    assert!(action.validate().is_ok());
}

#[test]
fn stale_channel_handle_is_not_found() {
    let mut action = build_rig();
    let id = action.channels()[0].id();
    action.remove_channel(id).unwrap();
    assert!(action.remove_channel(id).unwrap_err().is_not_found());
    assert!(action.update_channel(id, |c| c.mute = true).is_err());
}

#[test]
fn handle_from_another_action_is_not_found() {
    let mut a = build_rig();
    let mut b = Action::new("Other");
    let foreign = b.create_channel("location", 0, None).unwrap();
    let before = a.channels().len();

    assert!(a.remove_channel(foreign).is_err());
    assert_eq!(a.channels().len(), before);
}

#[test]
fn clear_then_rebuild() {
    let mut action = build_rig();
    action.clear_channels();
    assert_eq!(
        action.take_changes().as_slice(),
        &[ActionChange::ChannelsCleared { count: 10 }]
    );
    assert_eq!(action.groups().len(), 3);

    action
        .create_channel(&bone_path("thigh.R", "location"), 0, Some("thigh.R"))
        .unwrap();
    action
        .create_channel(&bone_path("hips", "location"), 0, Some("hips"))
        .unwrap();
    let order: Vec<&str> = action.channels().iter().map(|c| c.data_path()).collect();
    assert_eq!(
        order,
        vec![
            "pose.bones[\"hips\"].location",
            "pose.bones[\"thigh.R\"].location"
        ]
    );
}
