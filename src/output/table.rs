//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct JobRow {
        #[tabled(rename = "ID")]
        id: i64,
        #[tabled(rename = "STATUS")]
        status: String,
    }

    #[test]
    fn test_empty_table_message() {
        let rows: Vec<JobRow> = vec![];
        assert_eq!(format_table(&rows), "No results found.");
    }

    #[test]
    fn test_table_has_headers_and_rows() {
        let rows = vec![
            JobRow {
                id: 1,
                status: "applied".to_string(),
            },
            JobRow {
                id: 2,
                status: "offer".to_string(),
            },
        ];

        let result = format_table(&rows);

        assert!(result.contains("ID"));
        assert!(result.contains("STATUS"));
        assert!(result.contains("applied"));
        assert!(result.contains("offer"));
        // Rounded corners
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }
}
