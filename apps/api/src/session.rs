use uuid::Uuid;

use crate::llm_client::{GatewaySettings, ModelGateway};
use crate::sections::store::SectionStore;

/// One interactive drafting session: the configured gateway and the drafts.
///
/// Lives in memory only. Starting a new session replaces the whole value.
pub struct DraftSession {
    pub id: Uuid,
    pub gateway: ModelGateway,
    pub sections: SectionStore,
    /// Last target program submitted; used for the export file name.
    pub target_program: String,
}

impl DraftSession {
    pub fn new(gateway: ModelGateway) -> Self {
        Self {
            id: Uuid::new_v4(),
            gateway,
            sections: SectionStore::new(),
            target_program: String::new(),
        }
    }

    pub fn start(settings: GatewaySettings) -> Self {
        Self::new(ModelGateway::new(settings))
    }
}
