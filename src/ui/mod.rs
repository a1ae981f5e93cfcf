pub mod app;
mod callbacks;
pub mod events;
mod footer;
mod header;
mod layout;
pub mod mvi;
pub mod nav;
pub mod onboarding;
pub mod probe;
mod render;
pub mod runtime;
pub mod splash;
mod terminal_guard;
pub mod theme;
pub mod welcome;

pub use callbacks::{fire, NavCallback};
