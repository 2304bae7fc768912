pub mod table;
pub mod loader;
pub mod validation;

pub use table::{Column, ColumnData, ColumnKind, Dataset};
pub use loader::{delimiter_byte, load_dataset, parse_delimited, DEFAULT_DELIMITER};
pub use validation::{default_keywords, validate_dataset, ColumnCatalog, DEFAULT_KEYWORDS};
