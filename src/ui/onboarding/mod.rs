mod view;

pub use view::draw;

use crate::ui::callbacks::{fire, NavCallback};

/// Copy for one onboarding page.
pub struct OnboardingPage {
    pub hero: &'static [&'static str],
    pub headline: &'static str,
    pub body: &'static str,
}

pub const PAGES: &[OnboardingPage] = &[
    OnboardingPage {
        hero: &[
            r"   .-~~~-.   ",
            r"  ( fresh )  ",
            r"   `-._.-'   ",
            r"  \_______/  ",
        ],
        headline: "Fresh picks, every day",
        body: "Fruit, veg and pantry staples sourced from local stores near you.",
    },
    OnboardingPage {
        hero: &[
            r"    ______   ",
            r"   /|_||_\`.__",
            r"  (   _    _ _\",
            r"  =`-(_)--(_)-'",
        ],
        headline: "Lightning delivery",
        body: "A courier brings your basket to your door in under thirty minutes.",
    },
    OnboardingPage {
        hero: &[
            r"   o---o---o ",
            r"   |   |   | ",
            r"   o---o---* ",
            r"             ",
        ],
        headline: "Track every step",
        body: "Watch your order move from the shelf to your street, live.",
    },
];

/// Presentational onboarding screen.
///
/// Renders static copy for whichever page the navigator mounts, with two
/// optional no-arg hooks. Which page is visible is not this screen's
/// decision.
#[derive(Default)]
pub struct OnboardingScreen {
    pub on_skip: Option<NavCallback>,
    pub on_next: Option<NavCallback>,
}

impl OnboardingScreen {
    pub fn press_next(&mut self) {
        fire(&mut self.on_next);
    }

    pub fn press_skip(&mut self) {
        fire(&mut self.on_skip);
    }
}
