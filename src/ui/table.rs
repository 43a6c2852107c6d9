use crate::storage::{ColumnInfo, DbStats, ResultSet};
use tabled::{builder::Builder, settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Table")]
    pub table: String,
    #[tabled(rename = "Rows")]
    pub rows: String,
}

pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, table: &str, rows: &str) {
        self.rows.push(TableRow {
            table: table.to_string(),
            rows: rows.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn stats_table(stats: &DbStats) -> String {
    let mut builder = TableBuilder::new();
    for count in &stats.tables {
        builder.add_row(&count.table, &count.rows.to_string());
    }
    builder.add_row("Total", &stats.total().to_string());
    builder.build()
}

/// Render a header row plus data rows with the shared style
pub fn grid(headers: &[String], rows: Vec<Vec<String>>) -> String {
    let mut builder = Builder::default();
    builder.push_record(headers.iter().cloned());
    for row in rows {
        builder.push_record(row);
    }
    builder.build().with(Style::rounded()).to_string()
}

/// `SELECT *` output, one line per row
pub fn result_set_table(result: &ResultSet) -> String {
    let rows = result
        .rows
        .iter()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    grid(&result.columns, rows)
}

/// `DESC <table>` output in the familiar Field/Type/Null/Key/Default layout
pub fn columns_table(columns: &[ColumnInfo]) -> String {
    let headers: Vec<String> = ["Field", "Type", "Null", "Key", "Default"]
        .iter()
        .map(|h| h.to_string())
        .collect();
    let rows = columns
        .iter()
        .map(|c| {
            vec![
                c.name.clone(),
                c.decl_type.clone(),
                if c.not_null { "NO" } else { "YES" }.to_string(),
                if c.primary_key { "PRI" } else { "" }.to_string(),
                c.default_value.clone().unwrap_or_else(|| "NULL".to_string()),
            ]
        })
        .collect();
    grid(&headers, rows)
}

fn cell_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "NULL".to_string(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
