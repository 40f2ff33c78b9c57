use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::pipeline::adjust::Adjustment;
use crate::pipeline::derive::{derive_palette, AnsiPalette};
use crate::pipeline::slots::{slot_index, slot_name, BASE_COUNT, SLOT_COUNT};

/// Key of the cursor accent in the `special` table.
pub const CURSOR_KEY: &str = "cursor";

/// A pywal-style `colors.json` document.
///
/// Key order is preserved so a rewritten file diffs cleanly against the
/// original. Top-level keys other than the three below are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    #[serde(default)]
    pub wallpaper: String,
    #[serde(default)]
    pub special: IndexMap<String, String>,
    #[serde(default)]
    pub colors: IndexMap<String, String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl ColorScheme {
    /// Read and parse a color scheme file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to open color scheme: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("invalid color scheme JSON: {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize as pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(self).context("failed to encode color scheme")?;
        json.push('\n');
        Ok(json)
    }

    /// Write the scheme to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write color scheme to {}", path.display()))?;
        Ok(())
    }

    /// File name of the wallpaper, for display.
    pub fn wallpaper_name(&self) -> &str {
        self.wallpaper.rsplit('/').next().unwrap_or(self.wallpaper.as_str())
    }

    /// Parse the base slots `color0`..`color7`.
    pub fn base_palette(&self) -> Result<[Color; BASE_COUNT]> {
        let mut base = [Color::new(0, 0, 0); BASE_COUNT];
        for (i, slot) in base.iter_mut().enumerate() {
            let key = slot_name(i);
            let hex = self
                .colors
                .get(&key)
                .with_context(|| format!("missing base color '{key}'"))?;
            *slot = Color::from_hex(hex).with_context(|| format!("invalid color '{key}'"))?;
        }
        Ok(base)
    }

    /// Write a derived palette back into the document.
    ///
    /// Base slots whose stored value already encodes the same color keep
    /// their original spelling. Derived slots and the cursor are always
    /// written as `#rrggbb`. Keys that are not slot names are left alone.
    pub fn apply(&mut self, palette: &AnsiPalette) {
        for key in self.colors.keys().filter(|k| slot_index(k).is_none()) {
            log::debug!("leaving '{key}' untouched: not a palette slot");
        }
        for i in 0..BASE_COUNT {
            set_base_color(&mut self.colors, slot_name(i), palette.slots[i]);
        }
        for i in BASE_COUNT..SLOT_COUNT {
            self.colors.insert(slot_name(i), palette.slots[i].to_hex());
        }
        self.special.insert(CURSOR_KEY.to_string(), palette.cursor.to_hex());
    }

    /// Derive the bright slots and cursor accent in place.
    pub fn derive(&mut self, normal: &Adjustment, highlight: &Adjustment) -> Result<AnsiPalette> {
        let base = self.base_palette()?;
        let palette = derive_palette(&base, normal, highlight);
        self.apply(&palette);
        Ok(palette)
    }
}

fn set_base_color(map: &mut IndexMap<String, String>, key: String, color: Color) {
    let unchanged = map
        .get(&key)
        .and_then(|hex| Color::from_hex(hex).ok())
        .is_some_and(|current| current == color);
    if !unchanged {
        map.insert(key, color.to_hex());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "wallpaper": "/home/user/Pictures/forest.jpg",
        "alpha": "100",
        "special": {
            "background": "#1A1B26",
            "foreground": "#c0caf5",
            "cursor": "#c0caf5"
        },
        "colors": {
            "color0": "#1A1B26",
            "color1": "#f7768e",
            "color2": "#9ece6a",
            "color3": "#e0af68",
            "color4": "#7aa2f7",
            "color5": "#bb9af7",
            "color6": "#7dcfff",
            "color7": "#a9b1d6",
            "color8": "#414868",
            "color9": "#f7768e",
            "color10": "#9ece6a",
            "color11": "#e0af68",
            "color12": "#7aa2f7",
            "color13": "#bb9af7",
            "color14": "#7dcfff",
            "color15": "#c0caf5"
        }
    }"##;

    fn sample() -> ColorScheme {
        ColorScheme::from_json(SAMPLE).unwrap()
    }

    #[test]
    fn parses_document() {
        let scheme = sample();
        assert_eq!(scheme.wallpaper, "/home/user/Pictures/forest.jpg");
        assert_eq!(scheme.special.len(), 3);
        assert_eq!(scheme.colors.len(), 16);
        assert_eq!(scheme.extra.get("alpha"), Some(&serde_json::json!("100")));
    }

    #[test]
    fn wallpaper_name_is_last_component() {
        assert_eq!(sample().wallpaper_name(), "forest.jpg");

        let bare = ColorScheme {
            wallpaper: "forest.jpg".into(),
            ..Default::default()
        };
        assert_eq!(bare.wallpaper_name(), "forest.jpg");
    }

    #[test]
    fn base_palette_reads_first_eight() {
        let base = sample().base_palette().unwrap();
        assert_eq!(base[0], Color::new(0x1a, 0x1b, 0x26));
        assert_eq!(base[7].to_hex(), "#a9b1d6");
    }

    #[test]
    fn missing_base_slot_is_an_error() {
        let mut scheme = sample();
        scheme.colors.shift_remove("color3");
        let err = scheme.base_palette().unwrap_err().to_string();
        assert!(err.contains("color3"), "unexpected error: {err}");
    }

    #[test]
    fn invalid_base_slot_is_an_error() {
        let mut scheme = sample();
        scheme.colors.insert("color5".into(), "purple".into());
        let err = format!("{:#}", scheme.base_palette().unwrap_err());
        assert!(err.contains("invalid color 'color5'"), "unexpected error: {err}");
    }

    #[test]
    fn bright_slots_are_not_parsed() {
        let mut scheme = sample();
        scheme.colors.insert("color12".into(), "not a color".into());
        assert!(scheme
            .derive(&Adjustment::default(), &Adjustment::highlight_default())
            .is_ok());
        assert!(scheme.colors["color12"].starts_with('#'));
    }

    #[test]
    fn derive_rewrites_bright_slots_and_cursor() {
        let mut scheme = sample();
        let palette = scheme
            .derive(&Adjustment::default(), &Adjustment::highlight_default())
            .unwrap();

        for i in 8..16 {
            assert_eq!(scheme.colors[&slot_name(i)], palette.slots[i].to_hex());
        }
        assert_eq!(scheme.special[CURSOR_KEY], palette.cursor.to_hex());
        assert_eq!(scheme.special["background"], "#1A1B26");
        assert_eq!(scheme.special["foreground"], "#c0caf5");
    }

    #[test]
    fn untinted_base_keeps_original_spelling() {
        let mut scheme = sample();
        scheme
            .derive(&Adjustment::default(), &Adjustment::highlight_default())
            .unwrap();
        assert_eq!(scheme.colors["color0"], "#1A1B26");
    }

    #[test]
    fn derived_slots_are_rewritten_in_canonical_form() {
        let mut scheme = sample();
        let expected = sample()
            .derive(&Adjustment::default(), &Adjustment::highlight_default())
            .unwrap();
        // same colors, non-canonical spelling
        scheme.colors.insert("color9".into(), expected.slots[9].to_hex()[1..].to_uppercase());
        scheme.colors.insert("color15".into(), expected.slots[15].to_hex()[1..].to_string());
        scheme.special.insert(CURSOR_KEY.into(), expected.cursor.to_hex().to_uppercase());

        scheme
            .derive(&Adjustment::default(), &Adjustment::highlight_default())
            .unwrap();

        assert_eq!(scheme.colors["color9"], expected.slots[9].to_hex());
        assert_eq!(scheme.colors["color15"], expected.slots[15].to_hex());
        assert_eq!(scheme.special[CURSOR_KEY], expected.cursor.to_hex());
    }

    #[test]
    fn malformed_slot_key_is_preserved() {
        let mut scheme = sample();
        scheme.colors.insert("colorX".into(), "#123456".into());
        scheme
            .derive(&Adjustment::new(10.0, 0.0, 0.0, 0.0), &Adjustment::highlight_default())
            .unwrap();
        assert_eq!(scheme.colors["colorX"], "#123456");
        assert_ne!(scheme.colors["color1"], "#f7768e");
    }

    #[test]
    fn missing_bright_slots_are_added_in_order() {
        let mut scheme = sample();
        for i in 8..16 {
            scheme.colors.shift_remove(&slot_name(i));
        }
        scheme.special.shift_remove(CURSOR_KEY);
        scheme
            .derive(&Adjustment::default(), &Adjustment::highlight_default())
            .unwrap();

        let keys: Vec<&str> = scheme.colors.keys().map(String::as_str).collect();
        let expected: Vec<String> = (0..16).map(slot_name).collect();
        assert_eq!(keys, expected);
        assert!(scheme.special.contains_key(CURSOR_KEY));
    }

    #[test]
    fn json_keeps_key_order_and_extra_fields() {
        let json = sample().to_json().unwrap();
        assert!(json.ends_with("}\n"));

        let wallpaper = json.find("\"wallpaper\"").unwrap();
        let special = json.find("\"special\"").unwrap();
        let colors = json.find("\"colors\"").unwrap();
        assert!(wallpaper < special && special < colors);
        assert!(json.contains("\"alpha\": \"100\""));

        let reparsed = ColorScheme::from_json(&json).unwrap();
        assert_eq!(reparsed, sample());
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = ColorScheme::load(Path::new("/nonexistent/colors.json")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("failed to open color scheme"), "got: {msg}");
        assert!(msg.contains("/nonexistent/colors.json"), "got: {msg}");
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.json");
        let scheme = sample();
        scheme.save(&path).unwrap();
        assert_eq!(ColorScheme::load(&path).unwrap(), scheme);
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("colors.json");
        let err = sample().save(&path).unwrap_err().to_string();
        assert!(err.contains("failed to write color scheme"), "got: {err}");
    }
}
