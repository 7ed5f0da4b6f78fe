pub mod assistant;
pub mod latency;
pub mod seed;
pub mod service;
pub mod store;

pub use latency::LatencyProfile;
pub use service::MemoryBankingService;
pub use store::{InMemoryStore, LoanRecord, StoreState, UserRecord};

#[cfg(test)]
pub mod test_helper;
