//! Notifications for the rendering layer.

use serde::{Deserialize, Serialize};

use super::state::ColorState;

/// A state transition, recorded after the state changed.
///
/// Each event carries the state as it was right after its transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StateChange {
    /// The embedding environment replaced color and format.
    Set { state: ColorState },
    /// The picker replaced the RGB channels.
    Update { state: ColorState },
}

impl StateChange {
    /// The state right after this transition.
    pub fn state(&self) -> &ColorState {
        match self {
            StateChange::Set { state } | StateChange::Update { state } => state,
        }
    }
}
