use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::identifiable::Identifiable;

/// Partner bank reference entity. Immutable; users pick one, they never
/// create or edit them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bank {
    pub id: String,
    pub name: HeaplessString<100>,

    /// URL of the bank logo asset
    pub logo_url: HeaplessString<255>,

    pub country: HeaplessString<50>,
}

impl Identifiable for Bank {
    fn get_id(&self) -> &str {
        &self.id
    }
}
