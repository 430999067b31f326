//! The color state bridge.
//!
//! The bridge owns the current color and the format it arrived in, and is
//! the only place either changes:
//! - the embedding environment reads with `get` and writes with `set`
//! - the picker widget reports finished interactions with `update`
//! - the rendering layer drains `StateChange` events (coalesced, bounded)
//!   and reads the state
//!
//! The widget never sees formats, so widget edits cannot change them.

mod events;
mod state;
mod state_bridge;

pub use events::StateChange;
pub use state::ColorState;
pub use state_bridge::{MAX_PENDING_EVENTS, StateBridge};
