pub mod formatter;

pub use formatter::{format_report, format_score, format_stage_detail, should_use_colors};
