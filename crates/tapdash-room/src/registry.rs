//! Room registry: maps room keys to live room handles.

use std::collections::HashMap;
use std::sync::Arc;

use tapdash_clock::Clock;
use tapdash_protocol::RoomKey;

use crate::room::{RoomHandle, spawn_room};
use crate::{ResultsSink, RoomConfig};

/// Owns every live room actor handle and spawns rooms on first reference.
///
/// The registry itself is not thread-safe; callers wrap it in their own
/// lock, which is held only for the map lookup. Spawned rooms run as
/// independent tasks and are talked to through cloned handles outside any
/// lock.
pub struct RoomRegistry {
    rooms: HashMap<RoomKey, RoomHandle>,
    config: RoomConfig,
    clock: Arc<dyn Clock>,
    results_sink: Arc<dyn ResultsSink>,
}

impl RoomRegistry {
    pub fn new(
        config: RoomConfig,
        clock: Arc<dyn Clock>,
        results_sink: Arc<dyn ResultsSink>,
    ) -> Self {
        Self {
            rooms: HashMap::new(),
            config,
            clock,
            results_sink,
        }
    }

    /// Returns the room for `key`, spawning it in the Lobby phase if this
    /// is the first reference. Two callers racing on the same new key get
    /// the same room, not two.
    pub fn get_or_create(&mut self, key: &RoomKey) -> RoomHandle {
        if let Some(handle) = self.rooms.get(key) {
            return handle.clone();
        }
        tracing::info!(room = %key, "creating room");
        let handle = spawn_room(
            key.clone(),
            self.config.clone(),
            Arc::clone(&self.clock),
            Arc::clone(&self.results_sink),
        );
        self.rooms.insert(key.clone(), handle.clone());
        handle
    }

    /// Looks up an existing room without creating one.
    pub fn get(&self, key: &RoomKey) -> Option<RoomHandle> {
        self.rooms.get(key).cloned()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn room_keys(&self) -> Vec<RoomKey> {
        self.rooms.keys().cloned().collect()
    }
}
