use crate::ui::theme::ColorScheme;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "freshcart", version, about = "Grocery delivery front-of-funnel, in your terminal")]
pub struct Cli {
    /// Path to an alternative config file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Force a color scheme instead of the configured one.
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Log filter directive (tracing EnvFilter syntax).
    #[arg(long, default_value = "info")]
    pub log_filter: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for ColorScheme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ColorScheme::Light,
            ThemeArg::Dark => ColorScheme::Dark,
        }
    }
}
