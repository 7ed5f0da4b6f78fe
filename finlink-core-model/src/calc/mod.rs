pub mod emi;
pub mod forex;
pub mod spending;

// Re-exports
pub use emi::*;
pub use forex::*;
pub use spending::*;
