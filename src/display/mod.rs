//! Display collaborator for the idle face.
//!
//! The face only needs a narrow capability set from a character display:
//! geometry, backlight, cursor positioning, writes and a clear. Real panel
//! drivers sit behind the `Display` trait; this module ships a headless
//! in-memory backend and a terminal emulation of the panel.

pub mod grid;
pub mod memory;
pub mod terminal;

use thiserror::Error;

// Re-export commonly used types
pub use grid::CharGrid;
pub use memory::{DisplayOp, MemoryDisplay};
pub use terminal::TerminalDisplay;

/// Default bus address of the display backpack, followed by its fallback.
pub const DEFAULT_ADDRESSES: [u16; 2] = [0x27, 0x3F];

/// Errors that can occur talking to a display.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// No display answered at any candidate address
    #[error("no display found (tried {})", format_addresses(.tried))]
    NotFound {
        tried: Vec<u16>,
        /// Failure reported by the last address tried
        #[source]
        last: Option<Box<DisplayError>>,
    },

    /// The terminal backend needs an interactive terminal
    #[error("stdout is not a terminal")]
    NotATerminal,

    #[error("display I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Character display capabilities used by the face.
pub trait Display {
    /// Configure the logical geometry.
    fn initialize(&mut self, columns: u8, rows: u8) -> Result<(), DisplayError>;

    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError>;

    /// Move the cursor, zero-indexed.
    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), DisplayError>;

    /// Write at the cursor, advancing it.
    fn write(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Blank the whole display.
    fn clear(&mut self) -> Result<(), DisplayError>;
}

impl<D: Display + ?Sized> Display for &mut D {
    fn initialize(&mut self, columns: u8, rows: u8) -> Result<(), DisplayError> {
        (**self).initialize(columns, rows)
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        (**self).set_backlight(on)
    }

    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), DisplayError> {
        (**self).set_cursor(column, row)
    }

    fn write(&mut self, text: &str) -> Result<(), DisplayError> {
        (**self).write(text)
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        (**self).clear()
    }
}

/// Open the first display that answers.
///
/// Candidates are tried in order; each failure is logged and the next address
/// is attempted. Returns the address that opened along with the display, or
/// `NotFound` listing every address tried with the last failure as its source.
pub fn acquire<D, F>(addresses: &[u16], mut open: F) -> Result<(u16, D), DisplayError>
where
    F: FnMut(u16) -> Result<D, DisplayError>,
{
    let mut tried = Vec::with_capacity(addresses.len());
    let mut last = None;

    for &address in addresses {
        match open(address) {
            Ok(display) => {
                tracing::info!("Display opened at {:#04x}", address);
                return Ok((address, display));
            }
            Err(e) => {
                tracing::warn!("No display at {:#04x}: {}", address, e);
                tried.push(address);
                last = Some(Box::new(e));
            }
        }
    }

    Err(DisplayError::NotFound { tried, last })
}

fn format_addresses(addresses: &[u16]) -> String {
    if addresses.is_empty() {
        return "no addresses".to_string();
    }
    addresses
        .iter()
        .map(|a| format!("{a:#04x}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_uses_first_working_address() {
        let mut attempts = Vec::new();
        let (address, _display) = acquire(&DEFAULT_ADDRESSES, |a| {
            attempts.push(a);
            Ok(MemoryDisplay::new())
        })
        .unwrap();

        assert_eq!(address, 0x27);
        assert_eq!(attempts, vec![0x27]);
    }

    #[test]
    fn test_acquire_falls_back() {
        let (address, _display) = acquire(&DEFAULT_ADDRESSES, |a| {
            if a == 0x27 {
                Err(DisplayError::NotATerminal)
            } else {
                Ok(MemoryDisplay::new())
            }
        })
        .unwrap();

        assert_eq!(address, 0x3F);
    }

    #[test]
    fn test_acquire_reports_all_tried() {
        let result: Result<(u16, MemoryDisplay), _> =
            acquire(&DEFAULT_ADDRESSES, |_| Err(DisplayError::NotATerminal));

        match result {
            Err(DisplayError::NotFound { tried, .. }) => assert_eq!(tried, vec![0x27, 0x3F]),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_not_found_message_lists_addresses() {
        let err = DisplayError::NotFound {
            tried: vec![0x27, 0x3F],
            last: None,
        };
        assert_eq!(err.to_string(), "no display found (tried 0x27, 0x3f)");
    }

    #[test]
    fn test_not_found_keeps_last_failure_as_source() {
        let mut calls = 0;
        let err = acquire::<MemoryDisplay, _>(&DEFAULT_ADDRESSES, |_| {
            calls += 1;
            if calls == 1 {
                Err(DisplayError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no ack",
                )))
            } else {
                Err(DisplayError::NotATerminal)
            }
        })
        .unwrap_err();

        let source = std::error::Error::source(&err).map(|e| e.to_string());
        assert_eq!(source.as_deref(), Some("stdout is not a terminal"));

        let chain = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(
            chain,
            "no display found (tried 0x27, 0x3f): stdout is not a terminal"
        );
    }
}
