//! Character buffer shared by the software display backends.

/// A fixed-size grid of characters with a write cursor.
///
/// Writes advance the cursor along the current row; characters that fall
/// past the end of the row, or outside the grid, are dropped rather than
/// wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    columns: u8,
    rows: u8,
    cells: Vec<char>,
    cursor: (u8, u8),
}

impl CharGrid {
    /// Create a blank grid.
    pub fn new(columns: u8, rows: u8) -> Self {
        Self {
            columns,
            rows,
            cells: vec![' '; columns as usize * rows as usize],
            cursor: (0, 0),
        }
    }

    /// Change the geometry, blanking the contents.
    pub fn resize(&mut self, columns: u8, rows: u8) {
        *self = Self::new(columns, rows);
    }

    pub fn columns(&self) -> u8 {
        self.columns
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cursor(&self) -> (u8, u8) {
        self.cursor
    }

    pub fn set_cursor(&mut self, column: u8, row: u8) {
        self.cursor = (column, row);
    }

    /// Write `text` at the cursor.
    pub fn write(&mut self, text: &str) {
        for ch in text.chars() {
            let (column, row) = self.cursor;
            if column >= self.columns || row >= self.rows {
                break;
            }
            let index = row as usize * self.columns as usize + column as usize;
            self.cells[index] = ch;
            self.cursor.0 = column + 1;
        }
    }

    /// Blank every cell and home the cursor.
    pub fn clear(&mut self) {
        self.cells.fill(' ');
        self.cursor = (0, 0);
    }

    pub fn char_at(&self, column: u8, row: u8) -> Option<char> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        Some(self.cells[row as usize * self.columns as usize + column as usize])
    }

    /// Contents as one string per row.
    pub fn lines(&self) -> Vec<String> {
        if self.columns == 0 {
            return vec![String::new(); self.rows as usize];
        }
        self.cells
            .chunks(self.columns as usize)
            .map(|row| row.iter().collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_advances_cursor() {
        let mut grid = CharGrid::new(16, 2);
        grid.set_cursor(2, 1);
        grid.write("ab");

        assert_eq!(grid.char_at(2, 1), Some('a'));
        assert_eq!(grid.char_at(3, 1), Some('b'));
        assert_eq!(grid.cursor(), (4, 1));
    }

    #[test]
    fn test_write_does_not_wrap() {
        let mut grid = CharGrid::new(4, 2);
        grid.set_cursor(2, 0);
        grid.write("xyz");

        assert_eq!(grid.lines(), vec!["  xy".to_string(), "    ".to_string()]);
    }

    #[test]
    fn test_clear_blanks_and_homes() {
        let mut grid = CharGrid::new(4, 1);
        grid.set_cursor(1, 0);
        grid.write("q");
        grid.clear();

        assert_eq!(grid.lines(), vec!["    ".to_string()]);
        assert_eq!(grid.cursor(), (0, 0));
    }

    #[test]
    fn test_write_outside_grid_is_dropped() {
        let mut grid = CharGrid::new(4, 1);
        grid.set_cursor(0, 3);
        grid.write("z");

        assert_eq!(grid.lines(), vec!["    ".to_string()]);
    }

    #[test]
    fn test_out_of_range_reads() {
        let grid = CharGrid::new(16, 2);
        assert_eq!(grid.char_at(16, 0), None);
        assert_eq!(grid.char_at(0, 2), None);
    }
}
