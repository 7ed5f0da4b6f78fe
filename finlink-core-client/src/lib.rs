pub mod chat_log;
pub mod poller;
pub mod session;

pub use chat_log::ChatLog;
pub use poller::NotificationPoller;
pub use session::{Route, SessionGate};
