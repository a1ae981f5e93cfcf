use ratatui::style::Color;

/// Ambient light/dark signal the theme is derived from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Resolved palette snapshot.
///
/// Derived once per render from the [`ColorScheme`] and passed down by
/// value; never mutated in place, never read from a global.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent: Color,
    pub accent_glow: Color,
    pub dot_active: Color,
    pub dot_inactive: Color,
    pub button_fg: Color,
    pub button_bg: Color,
    pub status_ok: Color,
    pub status_error: Color,
}

impl Theme {
    /// Total mapping from the binary scheme to a complete palette.
    pub fn resolve(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => Self {
                background: Color::Rgb(0x12, 0x17, 0x12),
                surface: Color::Rgb(0x1a, 0x22, 0x1a),
                text_primary: Color::Rgb(0xe8, 0xf0, 0xe8),
                text_secondary: Color::Rgb(0x9a, 0xa8, 0x9a),
                accent: Color::Rgb(0x4a, 0xd6, 0x6d),
                accent_glow: Color::Rgb(0x1f, 0x4d, 0x2e),
                dot_active: Color::Rgb(0x5c, 0xe0, 0x7c),
                dot_inactive: Color::Rgb(0x3a, 0x45, 0x3a),
                button_fg: Color::Rgb(0x0d, 0x12, 0x0d),
                button_bg: Color::Rgb(0x3f, 0xc2, 0x5f),
                status_ok: Color::Rgb(0x22, 0xc5, 0x5e),
                status_error: Color::Rgb(0xef, 0x44, 0x44),
            },
            ColorScheme::Light => Self {
                background: Color::Rgb(0xf6, 0xfa, 0xf6),
                surface: Color::Rgb(0xea, 0xf2, 0xea),
                text_primary: Color::Rgb(0x17, 0x24, 0x17),
                text_secondary: Color::Rgb(0x55, 0x66, 0x55),
                accent: Color::Rgb(0x1e, 0x8e, 0x3e),
                accent_glow: Color::Rgb(0xc8, 0xe8, 0xd0),
                dot_active: Color::Rgb(0x16, 0x7a, 0x33),
                dot_inactive: Color::Rgb(0xc0, 0xcc, 0xc0),
                button_fg: Color::Rgb(0xfb, 0xfe, 0xfb),
                button_bg: Color::Rgb(0x1f, 0x96, 0x41),
                status_ok: Color::Rgb(0x16, 0xa3, 0x4a),
                status_error: Color::Rgb(0xdc, 0x26, 0x26),
            },
        }
    }
}

/// Linear mix between two RGB colors, `t` clamped to [0, 1].
///
/// Terminal cells have no alpha channel, so opacity is rendered by
/// blending the foreground toward the background.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(fr, fg, fb), Color::Rgb(tr, tg, tb)) => {
            let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t) as u8;
            Color::Rgb(mix(fr, tr), mix(fg, tg), mix(fb, tb))
        }
        _ => to,
    }
}
