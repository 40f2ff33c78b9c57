use std::path::PathBuf;

use clap::Parser;

use crate::pipeline::adjust::{
    Adjustment, DEFAULT_HIGHLIGHT_DESATURATE, DEFAULT_HIGHLIGHT_HUE, DEFAULT_HIGHLIGHT_LIGHTEN,
    DEFAULT_HIGHLIGHT_SATURATE,
};

/// Default location of the pywal color scheme.
pub const DEFAULT_SCHEME_PATH: &str = "~/.cache/wal/colors.json";

/// Generate highlight colors (8-15) from the 8 base colors of a pywal scheme.
#[derive(Parser, Debug)]
#[command(
    name = "palbright",
    version,
    about,
    after_help = format!("Default pywal path: {DEFAULT_SCHEME_PATH}")
)]
pub struct Args {
    /// Path to the colors.json generated by pywal
    pub file: Option<PathBuf>,

    /// Write the result to this file instead of overwriting the input
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print the result to stdout instead of writing a file
    #[arg(long, conflicts_with = "out")]
    pub dry_run: bool,

    /// Print a colored terminal preview of the palette
    #[arg(long)]
    pub preview: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Hue rotation in degrees for highlights
    #[arg(long, value_parser = finite_f32, default_value_t = DEFAULT_HIGHLIGHT_HUE, allow_negative_numbers = true, help_heading = "Highlight colors (9-15)")]
    pub hihue: f32,

    /// Lighten amount for highlights
    #[arg(long, value_parser = finite_f32, default_value_t = DEFAULT_HIGHLIGHT_LIGHTEN, allow_negative_numbers = true, help_heading = "Highlight colors (9-15)")]
    pub hilight: f32,

    /// Desaturation for highlights
    #[arg(long, value_parser = finite_f32, default_value_t = DEFAULT_HIGHLIGHT_DESATURATE, allow_negative_numbers = true, help_heading = "Highlight colors (9-15)")]
    pub hidesat: f32,

    /// Saturation for highlights
    #[arg(long, value_parser = finite_f32, default_value_t = DEFAULT_HIGHLIGHT_SATURATE, allow_negative_numbers = true, help_heading = "Highlight colors (9-15)")]
    pub hisat: f32,

    /// Hue rotation in degrees for normal colors
    #[arg(long, value_parser = finite_f32, default_value_t = 0.0, allow_negative_numbers = true, help_heading = "Normal colors (0-7)")]
    pub nhue: f32,

    /// Lighten amount for normal colors
    #[arg(long, value_parser = finite_f32, default_value_t = 0.0, allow_negative_numbers = true, help_heading = "Normal colors (0-7)")]
    pub nlight: f32,

    /// Desaturation for normal colors
    #[arg(long, value_parser = finite_f32, default_value_t = 0.0, allow_negative_numbers = true, help_heading = "Normal colors (0-7)")]
    pub ndesat: f32,

    /// Saturation for normal colors
    #[arg(long, value_parser = finite_f32, default_value_t = 0.0, allow_negative_numbers = true, help_heading = "Normal colors (0-7)")]
    pub nsat: f32,
}

/// Parse an adjustment amount, rejecting `inf` and `NaN`.
fn finite_f32(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|err| format!("{err}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("expected a finite number, got '{s}'"))
    }
}

impl Args {
    /// Tint applied to the base colors.
    pub fn normal(&self) -> Adjustment {
        Adjustment::new(self.nhue, self.nlight, self.ndesat, self.nsat)
    }

    /// Adjustment that derives the bright colors.
    pub fn highlight(&self) -> Adjustment {
        Adjustment::new(self.hihue, self.hilight, self.hidesat, self.hisat)
    }

    /// Where the result is written. `None` without an input file.
    pub fn save_path(&self) -> Option<PathBuf> {
        self.out.clone().or_else(|| self.file.clone())
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
