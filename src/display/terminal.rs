//! Terminal emulation of the character panel.
//!
//! Draws a framed copy of the panel with ANSI escapes and redraws it in place
//! after every change, so the face can be watched without the hardware.

use std::io::{IsTerminal, Stdout, Write};

use crate::display::{CharGrid, Display, DisplayError};
use crate::face::LAYOUT;

const CLEAR_SCREEN: &str = "\x1b[2J";
const HOME: &str = "\x1b[H";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// A display that draws the panel on a terminal.
pub struct TerminalDisplay<W: Write> {
    out: W,
    grid: CharGrid,
    backlight: bool,
    /// Address shown in the frame title
    address: u16,
}

impl TerminalDisplay<Stdout> {
    /// Open the terminal panel on stdout.
    ///
    /// Fails when stdout is not an interactive terminal.
    pub fn open(address: u16) -> Result<Self, DisplayError> {
        let out = std::io::stdout();
        if !out.is_terminal() {
            return Err(DisplayError::NotATerminal);
        }
        Ok(Self::with_writer(out, address))
    }
}

impl<W: Write> TerminalDisplay<W> {
    /// Draw the panel into any writer.
    pub fn with_writer(out: W, address: u16) -> Self {
        Self {
            out,
            grid: CharGrid::new(LAYOUT.columns, LAYOUT.rows),
            backlight: false,
            address,
        }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn redraw(&mut self) -> Result<(), DisplayError> {
        let width = self.grid.columns() as usize;
        let title = format!(" lcd@{:#04x} ", self.address);
        let border = "-".repeat(width.saturating_sub(title.len()));

        let mut frame = String::new();
        frame.push_str(HOME);
        frame.push_str(&format!("+{title}{border}+\n"));
        for line in self.grid.lines() {
            if self.backlight {
                frame.push_str(&format!("|{line}|\n"));
            } else {
                frame.push_str(&format!("|{DIM}{line}{RESET}|\n"));
            }
        }
        frame.push_str(&format!("+{}+\n", "-".repeat(width)));

        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Display for TerminalDisplay<W> {
    fn initialize(&mut self, columns: u8, rows: u8) -> Result<(), DisplayError> {
        self.grid.resize(columns, rows);
        self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        self.redraw()
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        self.backlight = on;
        self.redraw()
    }

    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), DisplayError> {
        self.grid.set_cursor(column, row);
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<(), DisplayError> {
        self.grid.write(text);
        self.redraw()
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.grid.clear();
        self.redraw()
    }
}
