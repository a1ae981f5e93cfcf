//! Two-phase animation choreography for the splash screen.
//!
//! The entrance phase runs once: the logo fades in (ease-out) while its
//! scale settles from [`LOGO_SCALE_FROM`] to 1.0 with a slight overshoot,
//! then the title fades in after a fixed delay. The ambient phase begins
//! [`AMBIENT_DELAY_MS`] after `start()` regardless of entrance progress
//! and loops forever until stopped.
//!
//! Sampling is a pure function of elapsed time, so intermediate frames
//! are reproducible without a real clock.

use std::time::Duration;

pub const LOGO_FADE_MS: u64 = 1000;
pub const TITLE_DELAY_MS: u64 = 200;
pub const TITLE_FADE_MS: u64 = 400;
pub const AMBIENT_DELAY_MS: u64 = 600;
pub const LOOP_PERIOD_MS: u64 = 1500;
pub const LOGO_SCALE_FROM: f32 = 0.8;

const BAR_MIN_RATIO: f32 = 0.15;
const BAR_MAX_RATIO: f32 = 0.35;

/// One sampled frame of the choreography, all values normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplashFrame {
    pub logo_opacity: f32,
    pub logo_scale: f32,
    pub title_opacity: f32,
    pub loop_progress: f32,
    pub ambient_active: bool,
}

impl Default for SplashFrame {
    fn default() -> Self {
        Self {
            logo_opacity: 0.0,
            logo_scale: LOGO_SCALE_FROM,
            title_opacity: 0.0,
            loop_progress: 0.0,
            ambient_active: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    Idle,
    Running,
    Stopped,
}

/// Owns the choreography clock state. `start` once, `sample` per tick,
/// `stop` on unmount.
#[derive(Debug)]
pub struct SplashSequencer {
    phase: Phase,
    last: SplashFrame,
}

impl Default for SplashSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashSequencer {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            last: SplashFrame::default(),
        }
    }

    /// Begins the choreography. A start after `stop` is a no-op.
    pub fn start(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Running;
        }
    }

    /// Halts entrance and ambient animation. If the ambient phase has not
    /// begun yet, its pending start is cancelled with it.
    pub fn stop(&mut self) {
        self.phase = Phase::Stopped;
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Samples the choreography at `elapsed` since `start()`.
    ///
    /// Once stopped (or never started), returns the last frame unchanged.
    pub fn sample(&mut self, elapsed: Duration) -> SplashFrame {
        if self.phase != Phase::Running {
            return self.last;
        }

        let ms = elapsed.as_secs_f32() * 1000.0;

        let logo_t = unit(ms / LOGO_FADE_MS as f32);
        let title_start = (LOGO_FADE_MS + TITLE_DELAY_MS) as f32;
        let title_t = unit((ms - title_start) / TITLE_FADE_MS as f32);

        let (ambient_active, loop_progress) = if ms >= AMBIENT_DELAY_MS as f32 {
            let period = LOOP_PERIOD_MS as f32;
            let phase = ((ms - AMBIENT_DELAY_MS as f32) % period) / period;
            (true, ease_in_out(phase))
        } else {
            (false, 0.0)
        };

        let frame = SplashFrame {
            logo_opacity: ease_out(logo_t),
            logo_scale: if logo_t >= 1.0 { 1.0 } else { settle(logo_t) },
            title_opacity: ease_out(title_t),
            loop_progress,
            ambient_active,
        };
        self.last = frame;
        frame
    }

    /// True once every entrance sub-animation has settled at `elapsed`.
    pub fn entrance_complete(elapsed: Duration) -> bool {
        elapsed.as_millis() as u64 >= LOGO_FADE_MS + TITLE_DELAY_MS + TITLE_FADE_MS
    }
}

/// Derived display geometry for the progress indicator: a pure
/// interpolation of loop-progress. The width pulses between a minimum and
/// maximum share of the track while the offset sweeps across it.
pub fn bar_extent(loop_progress: f32, track_width: u16) -> (u16, u16) {
    let progress = loop_progress.clamp(0.0, 1.0);
    let track = f32::from(track_width);
    let pulse = 1.0 - (2.0 * progress - 1.0).abs();
    let width = (track * (BAR_MIN_RATIO + (BAR_MAX_RATIO - BAR_MIN_RATIO) * pulse))
        .max(1.0)
        .min(track);
    let offset = (track - width) * progress;
    (offset as u16, width as u16)
}

fn unit(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Damped settle from [`LOGO_SCALE_FROM`] toward 1.0 with a slight
/// overshoot. Exact constants are tuning, not contract.
fn settle(t: f32) -> f32 {
    use std::f32::consts::PI;
    let depth = 1.0 - LOGO_SCALE_FROM;
    1.0 - depth * ((-5.0 * t).exp() * (0.75 * PI * t).cos())
}
