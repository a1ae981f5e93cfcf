mod sequencer;
mod view;

pub use sequencer::{
    bar_extent, SplashFrame, SplashSequencer, AMBIENT_DELAY_MS, LOGO_FADE_MS, LOGO_SCALE_FROM,
    LOOP_PERIOD_MS, TITLE_DELAY_MS, TITLE_FADE_MS,
};
pub use view::draw;

use std::time::Instant;

/// Minimum dwell before the splash hands over to onboarding.
pub const SPLASH_DWELL_MS: u64 = 2800;

/// Splash screen: a logo lockup and a progress indicator, driven entirely
/// by the sequencer. No inputs besides mount and unmount.
pub struct SplashScreen {
    sequencer: SplashSequencer,
    mounted_at: Instant,
    frame: SplashFrame,
}

impl SplashScreen {
    pub fn mount() -> Self {
        let mut sequencer = SplashSequencer::new();
        sequencer.start();
        Self {
            sequencer,
            mounted_at: Instant::now(),
            frame: SplashFrame::default(),
        }
    }

    /// Re-samples the choreography; called on every UI tick.
    pub fn on_tick(&mut self) {
        self.frame = self.sequencer.sample(self.mounted_at.elapsed());
    }

    /// Cancels pending and running animation. Ticks after this point no
    /// longer mutate the frame.
    pub fn unmount(&mut self) {
        self.sequencer.stop();
    }

    pub fn frame(&self) -> SplashFrame {
        self.frame
    }

    /// Entrance settled and the minimum dwell elapsed.
    pub fn ready_to_advance(&self) -> bool {
        let elapsed = self.mounted_at.elapsed();
        self.sequencer.is_running()
            && SplashSequencer::entrance_complete(elapsed)
            && elapsed.as_millis() as u64 >= SPLASH_DWELL_MS
    }
}
