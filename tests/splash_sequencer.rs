use freshcart::ui::splash::{
    bar_extent, SplashFrame, SplashSequencer, AMBIENT_DELAY_MS, LOGO_FADE_MS, LOGO_SCALE_FROM,
    LOOP_PERIOD_MS, TITLE_DELAY_MS, TITLE_FADE_MS,
};
use std::time::Duration;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn started() -> SplashSequencer {
    let mut sequencer = SplashSequencer::new();
    sequencer.start();
    sequencer
}

// -- Entrance phase -----------------------------------------------------------

#[test]
fn entrance_opacities_are_monotonic() {
    let mut sequencer = started();
    let mut last_logo = 0.0f32;
    let mut last_title = 0.0f32;
    for t in (0..=2000).step_by(25) {
        let frame = sequencer.sample(ms(t));
        assert!(
            frame.logo_opacity >= last_logo,
            "logo opacity regressed at {t}ms"
        );
        assert!(
            frame.title_opacity >= last_title,
            "title opacity regressed at {t}ms"
        );
        last_logo = frame.logo_opacity;
        last_title = frame.title_opacity;
    }
    assert_eq!(last_logo, 1.0);
    assert_eq!(last_title, 1.0);
}

#[test]
fn logo_fade_completes_at_documented_duration() {
    let mut sequencer = started();
    assert!(sequencer.sample(ms(LOGO_FADE_MS / 2)).logo_opacity < 1.0);
    assert_eq!(sequencer.sample(ms(LOGO_FADE_MS)).logo_opacity, 1.0);
}

#[test]
fn title_fade_respects_delay_and_duration() {
    let mut sequencer = started();
    let title_start = LOGO_FADE_MS + TITLE_DELAY_MS;
    assert!(sequencer.sample(ms(title_start)).title_opacity < 0.01);
    assert_eq!(
        sequencer.sample(ms(title_start + TITLE_FADE_MS)).title_opacity,
        1.0
    );
}

#[test]
fn scale_starts_low_and_settles_to_one() {
    let mut sequencer = started();
    let first = sequencer.sample(ms(0));
    assert!((first.logo_scale - LOGO_SCALE_FROM).abs() < 1e-4);
    assert_eq!(sequencer.sample(ms(LOGO_FADE_MS)).logo_scale, 1.0);
}

// -- Ambient phase ------------------------------------------------------------

#[test]
fn ambient_phase_waits_for_its_delay() {
    let mut sequencer = started();
    let before = sequencer.sample(ms(AMBIENT_DELAY_MS - 100));
    assert!(!before.ambient_active);
    assert_eq!(before.loop_progress, 0.0);

    let after = sequencer.sample(ms(AMBIENT_DELAY_MS));
    assert!(after.ambient_active);
}

#[test]
fn loop_progress_is_periodic() {
    let mut sequencer = started();
    for t in [700u64, 1234, 2990, 5000] {
        let a = sequencer.sample(ms(t)).loop_progress;
        let b = sequencer.sample(ms(t + LOOP_PERIOD_MS)).loop_progress;
        assert!(
            (a - b).abs() < 1e-3,
            "loop progress not periodic at {t}ms: {a} vs {b}"
        );
    }
}

// -- Cancellation -------------------------------------------------------------

#[test]
fn stop_freezes_the_frame() {
    let mut sequencer = started();
    let frozen = sequencer.sample(ms(400));
    sequencer.stop();
    assert_eq!(sequencer.sample(ms(800)), frozen);
    assert_eq!(sequencer.sample(ms(10_000)), frozen);
}

#[test]
fn stop_before_ambient_delay_cancels_the_pending_loop() {
    let mut sequencer = started();
    sequencer.sample(ms(300));
    sequencer.stop();
    let frame = sequencer.sample(ms(AMBIENT_DELAY_MS + 500));
    assert!(!frame.ambient_active);
    assert_eq!(frame.loop_progress, 0.0);
}

#[test]
fn start_after_stop_is_a_noop() {
    let mut sequencer = started();
    sequencer.stop();
    sequencer.start();
    assert!(!sequencer.is_running());
    assert_eq!(sequencer.sample(ms(500)), SplashFrame::default());
}

#[test]
fn sampling_before_start_returns_the_initial_frame() {
    let mut sequencer = SplashSequencer::new();
    assert_eq!(sequencer.sample(ms(500)), SplashFrame::default());
}

// -- Derived geometry ---------------------------------------------------------

#[test]
fn bar_extent_stays_within_the_track() {
    let track = 40u16;
    for step in 0..=20 {
        let progress = step as f32 / 20.0;
        let (offset, width) = bar_extent(progress, track);
        assert!(width >= 1);
        assert!(offset + width <= track, "bar escaped track at {progress}");
    }
}

#[test]
fn bar_sweeps_from_left_edge_to_right_edge() {
    let track = 40u16;
    let (start_offset, _) = bar_extent(0.0, track);
    assert_eq!(start_offset, 0);
    let (end_offset, end_width) = bar_extent(1.0, track);
    assert_eq!(end_offset + end_width, track);
}

#[test]
fn entrance_complete_matches_documented_timings() {
    let total = LOGO_FADE_MS + TITLE_DELAY_MS + TITLE_FADE_MS;
    assert!(!SplashSequencer::entrance_complete(ms(total - 1)));
    assert!(SplashSequencer::entrance_complete(ms(total)));
}
