use super::*;

const EPS: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn stages_are_ordered() {
    assert!(DoorStage::Door < DoorStage::Axe);
    assert!(DoorStage::Axe < DoorStage::Face);
    assert!(DoorStage::Face < DoorStage::Exit);
}

#[test]
fn boundaries_hand_over_without_gaps() {
    for (k, before, after) in [
        (2.0, DoorStage::Door, DoorStage::Axe),
        (4.0, DoorStage::Axe, DoorStage::Face),
        (6.0, DoorStage::Face, DoorStage::Exit),
    ] {
        let boundary = k / 7.0;
        let left = stage_and_relative_progress(boundary - EPS);
        assert_eq!(left.stage, before);
        assert!(close(left.relative, 1.0));

        let right = stage_and_relative_progress(boundary + EPS);
        assert_eq!(right.stage, after);
        assert!(close(right.relative, 0.0));
    }
}

#[test]
fn exact_boundary_belongs_to_the_next_stage() {
    let at = stage_and_relative_progress(2.0 / 7.0 + 1e-12);
    assert_eq!(at.stage, DoorStage::Axe);
    assert!(close(at.relative, 0.0));
}

#[test]
fn endpoints_and_out_of_range_inputs_clamp() {
    let start = stage_and_relative_progress(0.0);
    assert_eq!(start.stage, DoorStage::Door);
    assert_eq!(start.relative, 0.0);

    let end = stage_and_relative_progress(1.0);
    assert_eq!(end.stage, DoorStage::Exit);
    assert!(close(end.relative, 1.0));

    assert_eq!(stage_and_relative_progress(-3.0), start);
    assert_eq!(stage_and_relative_progress(7.0), end);
}

#[test]
fn hidden_near_the_section_edges() {
    assert!(door_layout(0.0).is_none());
    assert!(door_layout(0.01).is_none());
    assert!(door_layout(0.99).is_none());
    assert!(door_layout(1.5).is_none());
    assert!(door_layout(f64::NAN).is_none());
    assert!(door_layout(0.5).is_some());
}

#[test]
fn door_grows_then_holds() {
    let mid_door = door_layout(1.0 / 7.0).unwrap();
    assert_eq!(mid_door.stage.stage, DoorStage::Door);
    assert!(close(mid_door.door_size_em, 4.5));
    assert!(close(mid_door.bottom_offset_pc, 17.5));
    assert!(!mid_door.show_axe);

    let axe = door_layout(3.0 / 7.0).unwrap();
    assert!(close(axe.door_size_em, 9.0));
    assert!(close(axe.bottom_offset_pc, 45.0));
    assert!(axe.show_axe);
    assert!(!axe.show_face);
}

#[test]
fn offsets_follow_a_triangle() {
    // Middle of the axe stage sits on the plateau.
    let axe = door_layout(3.0 / 7.0).unwrap();
    assert!(close(axe.axe_offset_em, 3.5));
    assert_eq!(axe.face_offset_em, 0.0);

    // A sixth of the way into the face stage is halfway up the ramp.
    let face = door_layout((4.0 + 2.0 / 6.0) / 7.0).unwrap();
    assert!(close(face.axe_offset_em, 2.5));
    assert!(close(face.face_offset_em, 1.75));
    assert!(face.show_face);
}

#[test]
fn exit_slides_everything_up() {
    let exit = door_layout(6.5 / 7.0).unwrap();
    assert_eq!(exit.stage.stage, DoorStage::Exit);
    assert!(close(exit.bottom_offset_pc, 0.5 * 55.0 + 45.0));
    assert_eq!(exit.axe_offset_em, 0.0);
    assert!(exit.show_axe && exit.show_face);
}
