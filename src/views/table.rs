use std::io::{self, Write};

use crate::utils::config::{TABLE_MIN_WIDTH, TABLE_PADDING};

/// Column-aligned text table in the style of `kubectl get`
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Widths of every column except the last, which is never padded
    fn column_widths(&self) -> Vec<usize> {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        (0..columns.saturating_sub(1))
            .map(|i| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count() + TABLE_PADDING)
                    .max()
                    .unwrap_or(0)
                    .max(TABLE_MIN_WIDTH)
            })
            .collect()
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let widths = self.column_widths();
        for row in &self.rows {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                match widths.get(i) {
                    Some(width) if i + 1 < row.len() => {
                        line.push_str(&format!("{:<width$}", cell, width = *width));
                    }
                    _ => line.push_str(cell),
                }
            }
            writeln!(writer, "{}", line)?;
        }
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(table: &Table) -> String {
        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_columns_are_aligned() {
        let mut table = Table::new();
        table.push_row(["POD", "RESTARTS"]);
        table.push_row(["a-much-longer-pod-name", "3"]);

        let width = "a-much-longer-pod-name".len() + TABLE_PADDING;
        let expected = format!(
            "{:<width$}RESTARTS\n{:<width$}3\n",
            "POD",
            "a-much-longer-pod-name",
            width = width
        );
        assert_eq!(render(&table), expected);
        assert!(expected.starts_with("POD                        RESTARTS"));
    }

    #[test]
    fn test_minimum_width() {
        let mut table = Table::new();
        table.push_row(["a", "b", "c"]);
        assert_eq!(render(&table), "a         b         c\n");
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new();
        assert_eq!(render(&table), "");
    }
}
