//! Bridge to the external renderer's scene graph.
//!
//! The renderer lives outside the process. The simulation allocates opaque
//! `VisualId`s, records spawn/move/despawn instructions and hands them out
//! with each snapshot. The live set is tracked here so a leaked visual shows
//! up as a count that never drops.

use std::collections::BTreeSet;

use cyberstrike_core::state::{MeshKind, SceneCommand};
use cyberstrike_core::types::{Position, VisualId};

#[derive(Debug, Default)]
pub struct Scene {
    next_id: u32,
    live: BTreeSet<VisualId>,
    pending: Vec<SceneCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a visual at the given position.
    pub fn spawn(&mut self, mesh: MeshKind, position: Position) -> VisualId {
        let id = VisualId(self.next_id);
        self.next_id += 1;
        self.live.insert(id);
        self.pending.push(SceneCommand::Spawn {
            id,
            mesh,
            position: position.to_array(),
        });
        id
    }

    /// Move a live visual. Ignored for visuals that were already removed.
    pub fn move_to(&mut self, id: VisualId, position: Position) {
        if self.live.contains(&id) {
            self.pending.push(SceneCommand::Move {
                id,
                position: position.to_array(),
            });
        }
    }

    /// Remove a visual. Returns false if it was not live.
    pub fn despawn(&mut self, id: VisualId) -> bool {
        if self.live.remove(&id) {
            self.pending.push(SceneCommand::Despawn { id });
            true
        } else {
            false
        }
    }

    /// Remove every live visual.
    pub fn clear(&mut self) {
        let ids: Vec<VisualId> = self.live.iter().copied().collect();
        for id in ids {
            self.despawn(id);
        }
    }

    pub fn is_live(&self, id: VisualId) -> bool {
        self.live.contains(&id)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Take the instructions recorded since the last call.
    pub fn drain_commands(&mut self) -> Vec<SceneCommand> {
        std::mem::take(&mut self.pending)
    }
}
