/// One data row of the rendered table: cell strings plus a visibility flag.
/// The filter only ever touches the flag; cell content stays as loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub visible: bool,
}

impl TableRow {
    pub fn new(cells: Vec<String>) -> Self {
        TableRow { cells, visible: true }
    }

    /// The full rendered text of the row, as a search target
    pub fn text(&self) -> String {
        self.cells.join(" ")
    }
}

/// A header plus an ordered sequence of data rows. The header is kept
/// apart from the data rows, so it is never subject to filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    pub header: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl TableModel {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        TableModel {
            header,
            rows: rows.into_iter().map(TableRow::new).collect(),
        }
    }

    pub fn visible_count(&self) -> usize {
        self.rows.iter().filter(|row| row.visible).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_start_visible() {
        let table = TableModel::new(
            vec!["Name".to_string(), "Age".to_string()],
            vec![vec!["Alice".to_string(), "30".to_string()]],
        );

        assert_eq!(table.header.len(), 2);
        assert_eq!(table.rows.len(), 1);
        assert!(table.rows[0].visible);
        assert_eq!(table.visible_count(), 1);
    }

    #[test]
    fn test_row_text_joins_cells() {
        let row = TableRow::new(vec!["Alice".to_string(), "30".to_string()]);
        assert_eq!(row.text(), "Alice 30");
    }
}
