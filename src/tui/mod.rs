pub mod widgets;

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Position;
use ratatui::{Terminal, TerminalOptions, Viewport};

use crate::pipeline::derive::AnsiPalette;
use widgets::{PaletteWidget, PALETTE_HEIGHT};

/// Draw the palette inline below the current cursor line.
///
/// Does nothing when stdout is not a terminal.
pub fn preview(palette: &AnsiPalette, title: &str) -> Result<()> {
    if !io::stdout().is_terminal() {
        log::warn!("stdout is not a terminal, skipping preview");
        return Ok(());
    }

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(PALETTE_HEIGHT),
        },
    )
    .context("failed to set up preview")?;

    terminal
        .draw(|frame| {
            let area = frame.area();
            frame.render_widget(PaletteWidget::new(palette, title), area);
            // park the cursor on the last row so the next newline lands below
            frame.set_cursor_position(Position::new(area.x, area.bottom().saturating_sub(1)));
        })
        .context("failed to draw preview")?;
    println!();
    Ok(())
}
