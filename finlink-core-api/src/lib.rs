pub mod error;
pub mod requests;
pub mod responses;
pub mod service;

pub use error::*;
pub use requests::*;
pub use responses::*;
pub use service::*;
