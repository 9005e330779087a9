// ABOUTME: Naming and creating a channel list from the current selection
// There is no list storage service yet; a created list is only logged

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::models::{Channel, SelectionList};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("List name is required")]
    EmptyName,

    #[error("Select at least one channel")]
    NoChannels,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListDraft {
    pub name: String,
    pub channels: Vec<Channel>,
    pub created_at: DateTime<Utc>,
}

pub fn validate(name: &str, selection: &SelectionList) -> Result<(), ListError> {
    if name.trim().is_empty() {
        return Err(ListError::EmptyName);
    }
    if selection.is_empty() {
        return Err(ListError::NoChannels);
    }
    Ok(())
}

/// Whether the create action should be offered at all.
pub fn can_create(name: &str, selection: &SelectionList) -> bool {
    validate(name, selection).is_ok()
}

/// Assemble the list, log it, and clear the name and selection.
///
/// On a validation error nothing is cleared.
pub fn create_list(name: &mut String, selection: &mut SelectionList) -> Result<ListDraft, ListError> {
    validate(name, selection)?;

    let draft = ListDraft {
        name: name.trim().to_string(),
        channels: selection.as_slice().to_vec(),
        created_at: Utc::now(),
    };

    match serde_json::to_string(&draft) {
        Ok(json) => info!("Created list: {}", json),
        Err(_) => info!(
            "Created list {:?} with {} channels",
            draft.name,
            draft.channels.len()
        ),
    }

    name.clear();
    selection.clear();
    Ok(draft)
}
