// ABOUTME: Ordered, de-duplicated collection of the channels picked for a new list

use std::collections::HashSet;

use super::Channel;

/// Channels chosen for the list being built, in the order they were picked.
///
/// Keyed by `channel_id`: a channel appears at most once.
#[derive(Debug, Clone, Default)]
pub struct SelectionList {
    channels: Vec<Channel>,
    ids: HashSet<String>,
}

impl SelectionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a channel. Returns `false` if it was already selected.
    pub fn add(&mut self, channel: Channel) -> bool {
        if !self.ids.insert(channel.channel_id.clone()) {
            return false;
        }
        self.channels.push(channel);
        true
    }

    /// Drop every entry with the given id. Removing an absent id is a no-op.
    pub fn remove(&mut self, channel_id: &str) -> bool {
        if !self.ids.remove(channel_id) {
            return false;
        }
        self.channels.retain(|c| c.channel_id != channel_id);
        true
    }

    pub fn contains(&self, channel_id: &str) -> bool {
        self.ids.contains(channel_id)
    }

    pub fn get(&self, index: usize) -> Option<&Channel> {
        self.channels.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Channel> {
        self.channels.iter()
    }

    pub fn as_slice(&self) -> &[Channel] {
        &self.channels
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn clear(&mut self) {
        self.channels.clear();
        self.ids.clear();
    }
}
