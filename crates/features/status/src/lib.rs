//! Live status of the game server and the loading sequence shown before the page.
//!
//! * [`StatusProbe`] asks the public server-list API how many players are connected.
//!   It never fails: anything short of a well-formed answer becomes an offline
//!   snapshot with a synthetic player count.
//! * [`StatusMonitor`] runs the probe on a fixed cadence and publishes snapshots
//!   through a `watch` channel. Dropping it stops the polling task.
//! * [`loading`] drives the progress/stage/tip sequence streamed to visitors.

mod error;
pub mod loading;
mod monitor;
mod probe;

pub use crate::error::{StatusError, StatusErrorExt};
pub use crate::monitor::{StatusMonitor, poll_interval};
pub use crate::probe::{StatusProbe, parse_player_count};
