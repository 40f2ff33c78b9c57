use crate::color::Color;
use crate::pipeline::adjust::Adjustment;
use crate::pipeline::slots::{slot_name, BASE_COUNT, SLOT_COUNT};

/// Slot 8 (bright black) is slot 0 lightened by this much.
pub const BRIGHT_BLACK_LIGHTEN: f32 = 0.05;

/// The cursor accent is slot 2 lightened and saturated by these amounts.
pub const CURSOR_ADJUSTMENT: Adjustment = Adjustment::new(0.0, 0.10, 0.0, 0.10);

/// Slot the cursor accent derives from.
pub const CURSOR_SOURCE: usize = 2;

/// The full 16-slot ANSI palette plus the cursor accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsiPalette {
    /// ANSI colors 0-15.
    pub slots: [Color; SLOT_COUNT],
    pub cursor: Color,
}

impl AnsiPalette {
    /// Base slots 0-7.
    pub fn base(&self) -> [Color; BASE_COUNT] {
        let mut base = [Color::new(0, 0, 0); BASE_COUNT];
        base.copy_from_slice(&self.slots[..BASE_COUNT]);
        base
    }
}

/// Tint pass. Applies `normal` to every base slot if any of its fields is
/// non-zero, otherwise returns the base unchanged.
pub fn tint(base: &[Color; BASE_COUNT], normal: &Adjustment) -> [Color; BASE_COUNT] {
    if !normal.is_active() {
        return *base;
    }
    log::info!("applying tint to base colors: {normal:?}");
    base.map(|c| normal.apply(c))
}

/// Derive the full palette from the 8 base colors.
///
/// Runs as two passes: the gated tint over slots 0-7, then the bright slots
/// and cursor accent read only from the tinted snapshot.
pub fn derive_palette(
    base: &[Color; BASE_COUNT],
    normal: &Adjustment,
    highlight: &Adjustment,
) -> AnsiPalette {
    let tinted = tint(base, normal);

    let mut slots = [Color::new(0, 0, 0); SLOT_COUNT];
    slots[..BASE_COUNT].copy_from_slice(&tinted);

    slots[BASE_COUNT] = bright_black(tinted[0]);
    for n in BASE_COUNT + 1..SLOT_COUNT {
        slots[n] = highlight.apply(tinted[n - BASE_COUNT]);
        log::debug!(
            "{} = {} from {}",
            slot_name(n),
            slots[n],
            slot_name(n - BASE_COUNT)
        );
    }
    log::debug!("{} = {} from {}", slot_name(BASE_COUNT), slots[BASE_COUNT], slot_name(0));

    let cursor = cursor_accent(tinted[CURSOR_SOURCE]);
    log::debug!("cursor = {cursor} from {}", slot_name(CURSOR_SOURCE));

    AnsiPalette { slots, cursor }
}

/// Slot 8 rule. Independent of any adjustment flag.
pub fn bright_black(color0: Color) -> Color {
    Adjustment::new(0.0, BRIGHT_BLACK_LIGHTEN, 0.0, 0.0).apply(color0)
}

/// Cursor rule. Independent of any adjustment flag.
pub fn cursor_accent(color2: Color) -> Color {
    CURSOR_ADJUSTMENT.apply(color2)
}
