pub mod console;
pub mod json;

pub use console::{hints_block, render_table, verdict_line, HINTS};
pub use json::{CheckReport, ErrorReport, RowsReport};
