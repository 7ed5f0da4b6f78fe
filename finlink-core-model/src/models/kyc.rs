use chrono::NaiveDate;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::identifiable::Identifiable;
use crate::models::loan::RequestStatus;

/// Identity-verification request queued for admin review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KycRequest {
    pub id: String,
    pub user_id: String,
    pub user_name: HeaplessString<100>,
    pub status: RequestStatus,
    pub submission_date: NaiveDate,
}

impl Identifiable for KycRequest {
    fn get_id(&self) -> &str {
        &self.id
    }
}
