pub mod calc;
pub mod models;

pub use models::*;
