pub mod export;
pub mod renderer;

pub use export::{
    build_report, comparison_rows, parse_comparison_csv, write_comparison_csv, write_report_file,
    COMPARISON_HEADERS, REPORT_FILE_NAME,
};
