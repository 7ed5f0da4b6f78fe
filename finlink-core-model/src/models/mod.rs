pub mod bank;
pub mod chat;
pub mod identifiable;
pub mod kyc;
pub mod loan;
pub mod notification;
pub mod transaction;
pub mod user;
pub mod wallet;

// Re-exports
pub use bank::*;
pub use chat::*;
pub use identifiable::*;
pub use kyc::*;
pub use loan::*;
pub use notification::*;
pub use transaction::*;
pub use user::*;
pub use wallet::*;
