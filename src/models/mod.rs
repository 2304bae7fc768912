pub mod rates;
pub mod record;
pub mod summary;
pub mod prediction;
pub mod report;

pub use rates::*;
pub use record::*;
pub use summary::*;
pub use prediction::*;
pub use report::*;
