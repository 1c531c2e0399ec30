//! SQL statements for the bronze table.
//!
//! All builders take an already-quoted table name (see
//! [`ed_core::quote_table_name`]).

use ed_core::BRONZE_COLUMNS;

fn column_list() -> String {
    BRONZE_COLUMNS
        .iter()
        .map(|c| format!("\"{}\"", c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parameterized insert binding the seven columns positionally.
pub fn insert_sql(quoted_table: &str) -> String {
    let placeholders = (1..=BRONZE_COLUMNS.len())
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {quoted_table} ({}) VALUES ({placeholders})",
        column_list()
    )
}

pub fn truncate_sql(quoted_table: &str) -> String {
    format!("TRUNCATE TABLE {quoted_table}")
}

pub fn count_sql(quoted_table: &str) -> String {
    format!("SELECT COUNT(*) FROM {quoted_table}")
}

/// Up to `$1` rows, in no guaranteed order.
pub fn sample_sql(quoted_table: &str) -> String {
    format!("SELECT {} FROM {quoted_table} LIMIT $1", column_list())
}
