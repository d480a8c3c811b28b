use std::io::Write;

use crate::domain::Grid;
use crate::error::Result;

/// ANSI: clear the screen and move the cursor home
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Sink for rendered generations.
///
/// Implementations receive an immutable view of the engine's grid and must
/// not hold on to it past the call.
pub trait Renderer {
    /// Draw one full frame: the grid followed by the frame counter
    fn draw(&mut self, grid: &Grid, frame: u64) -> Result<()>;

    /// Announce that the run settled on a fixed point
    fn stable(&mut self, frame: u64) -> Result<()>;
}

/// Draws frames as text on any `Write` target (stdout in the binary)
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

/// Format a grid as rows of `#` (alive) and `.` (dead)
pub fn grid_to_text(grid: &Grid) -> String {
    let (height, width) = grid.dimensions();
    let mut text = String::with_capacity(height * (width + 1));
    for row in grid.rows() {
        text.extend(row.iter().map(|cell| cell.glyph()));
        text.push('\n');
    }
    text
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, grid: &Grid, frame: u64) -> Result<()> {
        // One buffered write per frame keeps the redraw from flickering
        let mut frame_text = String::from(CLEAR_SCREEN);
        frame_text.push_str(&grid_to_text(grid));
        frame_text.push('\n');
        frame_text.push_str(&format!("Frame: {frame}\n"));

        self.out.write_all(frame_text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn stable(&mut self, _frame: u64) -> Result<()> {
        writeln!(self.out, "System is stable. Stopping.")?;
        self.out.flush()?;
        Ok(())
    }
}
