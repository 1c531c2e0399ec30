//! Column contract shared by the CSV file and the bronze table.

use crate::visit::DomainError;

/// Default name of the destination table.
pub const DEFAULT_BRONZE_TABLE: &str = "bronze_ed_visits";

/// Textual timestamp format used in the CSV file.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A bronze table column and its SQL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BronzeColumn {
    pub name: &'static str,
    pub sql_type: &'static str,
}

/// Columns in file order, which is also the positional bind order of the insert.
pub const BRONZE_COLUMNS: [BronzeColumn; 7] = [
    BronzeColumn {
        name: "patient_id",
        sql_type: "VARCHAR(10)",
    },
    BronzeColumn {
        name: "arrival_time",
        sql_type: "TIMESTAMP",
    },
    BronzeColumn {
        name: "acuity_level",
        sql_type: "SMALLINT",
    },
    BronzeColumn {
        name: "age_group",
        sql_type: "VARCHAR(10)",
    },
    BronzeColumn {
        name: "chief_complaint",
        sql_type: "VARCHAR(50)",
    },
    BronzeColumn {
        name: "wait_time_minutes",
        sql_type: "INTEGER",
    },
    BronzeColumn {
        name: "length_of_stay_hours",
        sql_type: "NUMERIC(4,2)",
    },
];

/// Column names in order.
pub fn column_names() -> Vec<&'static str> {
    BRONZE_COLUMNS.iter().map(|c| c.name).collect()
}

/// Quote a table name for SQL, accepting `table` or `schema.table`.
///
/// Each part must match `[A-Za-z_][A-Za-z0-9_]*`.
pub fn quote_table_name(name: &str) -> Result<String, DomainError> {
    let parts: Vec<&str> = name.split('.').collect();
    if parts.len() > 2 || !parts.iter().all(|p| is_identifier(p)) {
        return Err(DomainError::InvalidTableName(name.to_string()));
    }
    Ok(parts
        .iter()
        .map(|p| format!("\"{p}\""))
        .collect::<Vec<_>>()
        .join("."))
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Generate the CREATE TABLE statement for the bronze table.
///
/// The loader never runs this; the table is expected to exist already.
pub fn create_table_ddl(table: &str) -> Result<String, DomainError> {
    let quoted = quote_table_name(table)?;
    let columns = BRONZE_COLUMNS
        .iter()
        .map(|c| format!("    \"{}\" {} NOT NULL", c.name, c.sql_type))
        .collect::<Vec<_>>()
        .join(",\n");
    Ok(format!("CREATE TABLE IF NOT EXISTS {quoted} (\n{columns}\n)"))
}
