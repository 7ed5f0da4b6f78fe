//! Test helpers: a zero-latency service over a fresh seeded store.

use std::sync::Arc;

use crate::latency::LatencyProfile;
use crate::service::MemoryBankingService;
use crate::store::InMemoryStore;

/// Fresh seeded service with no artificial latency
pub fn test_service() -> MemoryBankingService {
    MemoryBankingService::with_store(Arc::new(InMemoryStore::seeded()), LatencyProfile::instant())
}

/// Service sharing an externally held store, for tests that inspect
/// state directly
pub fn test_service_with_store(store: Arc<InMemoryStore>) -> MemoryBankingService {
    MemoryBankingService::with_store(store, LatencyProfile::instant())
}
