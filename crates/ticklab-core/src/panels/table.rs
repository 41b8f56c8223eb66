//! Multiplication table panel.

use serde::{Deserialize, Serialize};

/// Default grid size.
pub const DEFAULT_SIZE: u32 = 5;

/// A size x size multiplication grid with header row and column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiplicationTable {
    pub size: u32,
}

impl MultiplicationTable {
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    pub fn value(&self, row: u32, col: u32) -> u32 {
        row * col
    }

    /// The grid as rendered cells: corner, header row, then one header cell
    /// plus `size` products per row.
    pub fn grid(&self) -> Vec<Vec<String>> {
        let mut rows = Vec::with_capacity(self.size as usize + 1);
        let mut header: Vec<String> = vec!["\u{d7}".to_string()];
        header.extend((1..=self.size).map(|i| i.to_string()));
        rows.push(header);
        for i in 1..=self.size {
            let mut row: Vec<String> = vec![i.to_string()];
            row.extend((1..=self.size).map(|j| (i * j).to_string()));
            rows.push(row);
        }
        rows
    }

    /// Plain-text rendering with aligned columns.
    pub fn render_text(&self) -> String {
        let grid = self.grid();
        let width = grid
            .iter()
            .flat_map(|row| row.iter().map(|cell| cell.chars().count()))
            .max()
            .unwrap_or(1);
        grid.iter()
            .map(|row| {
                row.iter()
                    .map(|cell| format!("{cell:>width$}"))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for MultiplicationTable {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_five_by_five() {
        let grid = MultiplicationTable::default().grid();
        assert_eq!(grid.len(), 6);
        assert!(grid.iter().all(|row| row.len() == 6));
    }

    #[test]
    fn products_are_row_times_col() {
        let table = MultiplicationTable::default();
        assert_eq!(table.value(3, 4), 12);
        let grid = table.grid();
        assert_eq!(grid[3][4], "12");
        assert_eq!(grid[5][5], "25");
    }

    #[test]
    fn headers_count_up() {
        let grid = MultiplicationTable::new(3).grid();
        assert_eq!(grid[0], vec!["\u{d7}", "1", "2", "3"]);
        assert_eq!(grid[2][0], "2");
    }

    #[test]
    fn zero_size_renders_only_the_corner() {
        let table = MultiplicationTable::new(0);
        assert_eq!(table.grid(), vec![vec!["\u{d7}".to_string()]]);
    }

    #[test]
    fn text_rendering_has_one_line_per_row() {
        let text = MultiplicationTable::default().render_text();
        assert_eq!(text.lines().count(), 6);
        assert!(text.contains("25"));
    }
}
