use super::model::{TableModel, TableRow};

/// Recompute the visibility of every data row from the search query.
///
/// A row stays shown iff its lowercased text contains the lowercased
/// query; the empty query matches every row. The header is stored
/// outside the data rows and is never touched. Applying the same query
/// twice without row changes yields the same visibility set.
pub fn apply_filter(table: &mut TableModel, query: &str) {
    let needle = query.to_lowercase();
    for row in &mut table.rows {
        row.visible = needle.is_empty() || row.text().to_lowercase().contains(&needle);
    }
}

/// The data rows currently shown, in document order
pub fn visible_rows(table: &TableModel) -> impl Iterator<Item = &TableRow> {
    table.rows.iter().filter(|row| row.visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> TableModel {
        TableModel::new(
            vec!["Name".to_string(), "Age".to_string()],
            vec![
                vec!["Alice".to_string(), "30".to_string()],
                vec!["Bob".to_string(), "25".to_string()],
                vec!["alice".to_string(), "40".to_string()],
            ],
        )
    }

    fn visibility(table: &TableModel) -> Vec<bool> {
        table.rows.iter().map(|row| row.visible).collect()
    }

    #[test]
    fn test_substring_match() {
        let mut table = sample_table();
        apply_filter(&mut table, "ali");
        assert_eq!(visibility(&table), vec![true, false, true]);

        // Any cell of the row is a match target, not just the first
        apply_filter(&mut table, "25");
        assert_eq!(visibility(&table), vec![false, true, false]);

        apply_filter(&mut table, "zzz");
        assert_eq!(visibility(&table), vec![false, false, false]);
    }

    #[test]
    fn test_header_is_never_filtered() {
        let mut table = sample_table();
        apply_filter(&mut table, "zzz");

        assert_eq!(table.header, vec!["Name".to_string(), "Age".to_string()]);
        assert_eq!(table.visible_count(), 0);
    }

    #[test]
    fn test_empty_query_shows_all_rows() {
        let mut table = sample_table();
        apply_filter(&mut table, "zzz");
        apply_filter(&mut table, "");

        assert_eq!(visibility(&table), vec![true, true, true]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut table = sample_table();
        apply_filter(&mut table, "ALICE");
        let uppercase = visibility(&table);

        apply_filter(&mut table, "alice");
        assert_eq!(uppercase, visibility(&table));
        assert_eq!(uppercase, vec![true, false, true]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let mut table = sample_table();
        apply_filter(&mut table, "bob");
        let first = visibility(&table);

        apply_filter(&mut table, "bob");
        assert_eq!(first, visibility(&table));
    }

    #[test]
    fn test_visible_rows_are_in_document_order() {
        let mut table = sample_table();
        apply_filter(&mut table, "ali");

        let names: Vec<String> = visible_rows(&table).map(|row| row.cells[0].clone()).collect();
        assert_eq!(names, vec!["Alice".to_string(), "alice".to_string()]);
    }
}
