pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{banner, caution, database_field, done, failed, field, heading, mismatch, rows_in_set};
pub use table::{columns_table, grid, result_set_table, stats_table, TableBuilder};
pub use theme::{theme, Theme};
