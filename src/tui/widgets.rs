use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::color::Color as AppColor;
use crate::pipeline::derive::AnsiPalette;

const SLOT_NAMES: [&str; 8] = ["Blk", "Red", "Grn", "Yel", "Blu", "Mag", "Cyn", "Wht"];
const SWATCH_WIDTH: usize = 8;

/// Rows the widget needs, borders included.
pub const PALETTE_HEIGHT: u16 = 10;

/// A widget that renders the 16-color ANSI palette as an 8x2 grid of colored
/// swatches with their hex values, followed by the cursor accent.
pub struct PaletteWidget<'a> {
    palette: &'a AnsiPalette,
    title: &'a str,
}

impl<'a> PaletteWidget<'a> {
    pub fn new(palette: &'a AnsiPalette, title: &'a str) -> Self {
        Self { palette, title }
    }
}

fn to_color(c: &AppColor) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Choose black or white foreground for readable text on the given background.
fn contrast_fg(c: &AppColor) -> Color {
    if c.relative_luminance() > 0.4 {
        Color::Black
    } else {
        Color::White
    }
}

fn slot_name(index: usize) -> &'static str {
    SLOT_NAMES[index % 8]
}

fn swatch(label: &str, c: &AppColor) -> Span<'static> {
    Span::styled(
        format!("{label:^SWATCH_WIDTH$}"),
        Style::default().bg(to_color(c)).fg(contrast_fg(c)),
    )
}

/// Build a row of colored swatches, each labeled with its color name.
fn build_swatch_row(slots: &[AppColor], start: usize) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (offset, c) in slots[start..start + 8].iter().enumerate() {
        spans.push(swatch(slot_name(start + offset), c));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Build a row of hex values below the swatches.
fn build_hex_row(slots: &[AppColor], start: usize) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for c in &slots[start..start + 8] {
        spans.push(Span::styled(
            format!("{:^SWATCH_WIDTH$}", c.to_hex()),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

impl Widget for PaletteWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title(self.title);
        let inner = block.inner(area);
        block.render(area, buf);

        let slots = &self.palette.slots;
        let cursor = &self.palette.cursor;
        let lines = vec![
            Line::from("  Normal"),
            build_swatch_row(slots, 0),
            build_hex_row(slots, 0),
            Line::from("  Bright"),
            build_swatch_row(slots, 8),
            build_hex_row(slots, 8),
            Line::from(""),
            Line::from(vec![
                Span::raw("  "),
                swatch("Cursor", cursor),
                Span::raw(format!("  {}", cursor.to_hex())),
            ]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
