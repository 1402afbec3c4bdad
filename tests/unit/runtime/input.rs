use super::*;
use crate::{
    render::post::PostEffect,
    runtime::config::SceneConfig,
    runtime::controller::{ProgressController, SceneTimeline},
};

fn controller() -> ProgressController {
    let timeline = SceneTimeline::new(1472.0, 96.0, 48.0).unwrap();
    ProgressController::new(timeline, &SceneConfig::default(), 0)
}

fn visible() -> ViewportBounds {
    ViewportBounds::new(100.0, 452.0, 800.0)
}

#[test]
fn key_codes_map_to_keys() {
    assert_eq!(Key::from_code("ArrowLeft"), Key::Left);
    assert_eq!(Key::from_code("ArrowRight"), Key::Right);
    assert_eq!(Key::from_code("Space"), Key::Space);
    assert_eq!(Key::from_code("Digit7"), Key::Digit(7));
    assert_eq!(Key::from_code("KeyG"), Key::CycleEffect);
    assert_eq!(Key::from_code("Digit10"), Key::Other);
    assert_eq!(Key::from_code("KeyQ"), Key::Other);
}

#[test]
fn arrows_change_speed_by_one() {
    let mut c = controller();
    handle_key(&mut c, KeyEvent::on_body(Key::Right), visible());
    handle_key(&mut c, KeyEvent::on_body(Key::Right), visible());
    handle_key(&mut c, KeyEvent::on_body(Key::Left), visible());
    assert_eq!(c.speed(), 11.0);
}

#[test]
fn space_toggles_only_from_the_body() {
    let mut c = controller();
    let from_input = KeyEvent {
        key: Key::Space,
        target_is_body: false,
    };
    let r = handle_key(&mut c, from_input, visible());
    assert_eq!(r, KeyResponse::default());
    assert!(c.is_moving());

    let r = handle_key(&mut c, KeyEvent::on_body(Key::Space), visible());
    assert!(r.handled && r.prevent_default);
    assert!(!c.is_moving());
}

#[test]
fn keys_are_ignored_off_screen() {
    let mut c = controller();
    let hidden = ViewportBounds::new(900.0, 1252.0, 800.0);
    let r = handle_key(&mut c, KeyEvent::on_body(Key::Right), hidden);
    assert!(!r.handled);
    assert_eq!(c.speed(), 10.0);
}

#[test]
fn digits_jump_and_effect_key_cycles() {
    let mut c = controller();
    handle_key(&mut c, KeyEvent::on_body(Key::Digit(9)), visible());
    assert_eq!(c.progress(), 1472.0);
    handle_key(&mut c, KeyEvent::on_body(Key::CycleEffect), visible());
    assert_eq!(c.effect(), PostEffect::Greyscale);
    let r = handle_key(&mut c, KeyEvent::on_body(Key::Digit(12)), visible());
    assert!(!r.handled);
}
