pub mod commands;
pub mod session;
pub mod inspect;
pub mod analyze;
pub mod compare;
pub mod predict;
pub mod costs;
pub mod serve;

pub use commands::{Cli, Commands};
