use super::*;

const D: f64 = 1472.0;

fn timeline() -> SceneTimeline {
    SceneTimeline::new(D, 96.0, 48.0).unwrap()
}

fn controller() -> ProgressController {
    ProgressController::new(timeline(), &SceneConfig::default(), 0)
}

#[test]
fn timeline_lengths() {
    let t = timeline();
    assert_eq!(t.total_scene_length(), 1616.0);
    assert_eq!(t.cycle_length(), 1664.0);
    assert!(SceneTimeline::new(0.0, 96.0, 48.0).is_err());
    assert!(SceneTimeline::new(D, -1.0, 48.0).is_err());
    assert!(SceneTimeline::new(D, 96.0, 0.0).is_err());
}

#[test]
fn alpha_and_stage_at_documented_points() {
    let t = timeline();

    let s = calculate_progress_alpha_and_stage(D - 1.0, &t);
    assert_eq!(s.stage, DriveStage::Main);
    assert_eq!(s.alpha, 1.0);
    assert_eq!(s.progress, D - 1.0);

    let s = calculate_progress_alpha_and_stage(D + 48.0, &t);
    assert_eq!(s.stage, DriveStage::Hotel);
    assert_eq!(s.alpha, 1.0);
    assert_eq!(s.progress, D);

    let s = calculate_progress_alpha_and_stage(D + 96.0 + 24.0, &t);
    assert_eq!(s.stage, DriveStage::FadeOut);
    assert!((s.alpha - 0.5).abs() < 1e-6);
    assert_eq!(s.progress, D);

    let s = calculate_progress_alpha_and_stage(1616.0 + 24.0, &t);
    assert_eq!(s.stage, DriveStage::FadeIn);
    assert!((s.alpha - 0.5).abs() < 1e-6);
    assert_eq!(s.progress, 0.0);
}

#[test]
fn stage_boundaries_are_continuous_in_alpha() {
    let t = timeline();
    let at = |p| calculate_progress_alpha_and_stage(p, &t);

    assert_eq!(at(D).stage, DriveStage::Hotel);
    assert_eq!(at(D + 96.0).stage, DriveStage::FadeOut);
    assert_eq!(at(D + 96.0).alpha, 1.0);
    assert_eq!(at(1616.0).stage, DriveStage::FadeIn);
    assert_eq!(at(1616.0).alpha, 0.0);
    assert!(at(1615.999).alpha < 1e-3);
    // End of fade-in meets the start of the next loop.
    assert!((at(1663.999).alpha - 1.0).abs() < 1e-3);
    assert_eq!(at(1664.0).stage, DriveStage::Main);
    assert_eq!(at(1664.0).progress, 0.0);
}

#[test]
fn loop_parity_through_wrap() {
    let t = timeline();
    for p in [0.0, 10.5, D - 1.0, D + 30.0, 1600.0, 1650.0] {
        assert_eq!(
            calculate_progress_alpha_and_stage(p, &t),
            calculate_progress_alpha_and_stage(p + t.cycle_length(), &t)
        );
    }

    let mut a = controller();
    let mut b = controller();
    a.set_progress(321.0);
    b.set_progress(321.0 + t.cycle_length());
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn tick_advances_by_speed_and_elapsed_time() {
    let mut c = controller();
    c.tick(1000);
    assert!((c.progress() - 10.0).abs() < 1e-9);
    c.tick(1500);
    assert!((c.progress() - 15.0).abs() < 1e-9);
}

#[test]
fn paused_ticks_only_refresh_the_timestamp() {
    let mut c = controller();
    c.toggle_moving();
    c.tick(5000);
    assert_eq!(c.progress(), 0.0);
    assert_eq!(c.last_update_ms(), 5000);

    // Resuming does not replay the paused time.
    c.toggle_moving();
    c.tick(6000);
    assert!((c.progress() - 10.0).abs() < 1e-9);
}

#[test]
fn speed_is_clamped_at_tick_time_only() {
    let mut c = controller();
    for _ in 0..20 {
        c.speed_down();
    }
    assert_eq!(c.speed(), -10.0);
    assert_eq!(c.effective_speed(), 5.0);
    c.tick(1000);
    assert!((c.progress() - 5.0).abs() < 1e-9);

    for _ in 0..200 {
        c.speed_up();
    }
    assert_eq!(c.effective_speed(), 100.0);
}

#[test]
fn end_of_scene_fires_once_per_forward_crossing() {
    let mut c = controller();
    c.set_progress(1610.0);
    assert!(c.tick(1000).scene_completed);
    assert!(!c.tick(2000).scene_completed);
    assert!(!c.tick(3000).scene_completed);

    // Wrapping past the end of the cycle is not a completion.
    c.set_progress(1660.0);
    let out = c.tick(4000);
    assert!(!out.scene_completed);
    assert!((c.progress() - 6.0).abs() < 1e-9);
    assert_eq!(c.snapshot().stage, DriveStage::Main);
}

#[test]
fn digit_jumps_never_fire_end_of_scene() {
    let mut c = controller();
    c.set_progress(1640.0);
    c.jump_to_digit(2).unwrap();
    assert!((c.progress() - 2.0 * D / 9.0).abs() < 1e-9);
    assert!(!c.tick(1000).scene_completed);

    c.jump_to_digit(9).unwrap();
    assert_eq!(c.progress(), D);
    assert_eq!(c.snapshot().stage, DriveStage::Hotel);
    assert!(!c.tick(1001).scene_completed);

    assert!(c.jump_to_digit(10).is_err());
}

#[test]
fn long_ticks_still_report_completion() {
    let mut c = controller();
    for _ in 0..200 {
        c.speed_up();
    }
    let out = c.tick(100_000);
    assert!(out.scene_completed);
    assert!(c.progress() < timeline().cycle_length());
}

#[test]
fn effect_cycles_through_all_modes() {
    let mut c = controller();
    assert_eq!(c.effect(), PostEffect::None);
    assert_eq!(c.cycle_effect(), PostEffect::Greyscale);
    assert_eq!(c.cycle_effect(), PostEffect::RgbSplit);
    assert_eq!(c.cycle_effect(), PostEffect::RectRgbSplit);
    assert_eq!(c.cycle_effect(), PostEffect::None);
}

#[test]
fn inverted_speed_bounds_do_not_panic() {
    let config = SceneConfig {
        min_speed: 50.0,
        max_speed: 10.0,
        ..SceneConfig::default()
    };
    let mut c = ProgressController::new(timeline(), &config, 0);
    assert_eq!(c.effective_speed(), 10.0);
    c.tick(1000);
    assert!((c.progress() - 10.0).abs() < 1e-9);
}
