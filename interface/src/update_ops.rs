pub use mux_engine::update_ops::MuxUpdateOps;

/// Whether the engine has caught up with what the user did.
#[derive(Debug, PartialEq, Eq)]
pub enum SyncState {
    Synced,
    // ops are queued but not yet applied
    NotSynced,
    Error(String),
}

impl SyncState {
    pub fn is_synced(&self) -> bool {
        matches!(self, SyncState::Synced)
    }
    pub fn is_error(&self) -> bool {
        matches!(self, SyncState::Error(_))
    }
    pub fn status_text(&self) -> &str {
        match self {
            SyncState::Synced => "Synced",
            SyncState::NotSynced => "Pending",
            SyncState::Error(msg) => msg,
        }
    }
    pub fn error_msg(&self) -> &str {
        if let SyncState::Error(msg) = self {
            msg
        } else {
            ""
        }
    }
}
