use chrono::NaiveDate;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::identifiable::Identifiable;

/// In-app notification. Created by system events or an admin broadcast,
/// mutated only by the bulk mark-all-read operation, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: HeaplessString<100>,
    pub message: HeaplessString<255>,
    pub date: NaiveDate,
    pub read: bool,
}

impl Identifiable for Notification {
    fn get_id(&self) -> &str {
        &self.id
    }
}
