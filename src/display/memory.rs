//! Headless in-memory display.
//!
//! Keeps the panel contents in a `CharGrid`. A recording display also keeps
//! every call made to it, so tests can inspect how the contents got there;
//! the plain display keeps nothing but the grid and can run indefinitely.

use crate::display::{CharGrid, Display, DisplayError};
use crate::face::LAYOUT;

/// One call made to a display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayOp {
    Initialize { columns: u8, rows: u8 },
    Backlight(bool),
    Cursor { column: u8, row: u8 },
    Write(String),
    Clear,
}

/// A display that renders into memory.
#[derive(Debug, Clone)]
pub struct MemoryDisplay {
    grid: CharGrid,
    backlight: bool,
    initialized: bool,
    /// Recorded calls, when recording is enabled
    ops: Option<Vec<DisplayOp>>,
}

impl MemoryDisplay {
    /// Create a blank display with the panel geometry.
    pub fn new() -> Self {
        Self {
            grid: CharGrid::new(LAYOUT.columns, LAYOUT.rows),
            backlight: false,
            initialized: false,
            ops: None,
        }
    }

    /// Create a blank display that records every call made to it.
    pub fn recording() -> Self {
        Self {
            ops: Some(Vec::new()),
            ..Self::new()
        }
    }

    pub fn char_at(&self, column: u8, row: u8) -> Option<char> {
        self.grid.char_at(column, row)
    }

    /// Panel contents, one string per row.
    pub fn lines(&self) -> Vec<String> {
        self.grid.lines()
    }

    pub fn backlight(&self) -> bool {
        self.backlight
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Every call recorded so far, oldest first. Always empty unless the
    /// display was created with `recording`.
    pub fn ops(&self) -> &[DisplayOp] {
        self.ops.as_deref().unwrap_or(&[])
    }

    /// Forget the recorded calls, keeping the contents.
    pub fn clear_ops(&mut self) {
        if let Some(ops) = &mut self.ops {
            ops.clear();
        }
    }

    fn record(&mut self, op: DisplayOp) {
        if let Some(ops) = &mut self.ops {
            ops.push(op);
        }
    }
}

impl Default for MemoryDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for MemoryDisplay {
    fn initialize(&mut self, columns: u8, rows: u8) -> Result<(), DisplayError> {
        self.record(DisplayOp::Initialize { columns, rows });
        self.grid.resize(columns, rows);
        self.initialized = true;
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        self.record(DisplayOp::Backlight(on));
        self.backlight = on;
        Ok(())
    }

    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), DisplayError> {
        self.record(DisplayOp::Cursor { column, row });
        self.grid.set_cursor(column, row);
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<(), DisplayError> {
        self.record(DisplayOp::Write(text.to_string()));
        self.grid.write(text);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.record(DisplayOp::Clear);
        self.grid.clear();
        Ok(())
    }
}
