//! The connection capability contract.
//!
//! Command construction is decoupled from transport mechanics: anything that
//! can send a finished [`Command`], answer topic/nick queries from its own
//! cached state, and hang up satisfies [`Transport`]. The production
//! implementation lives in [`crate::connection`]; tests use in-memory
//! doubles.

use crate::command::Command;
use crate::topic::ChannelTopic;

/// Callback invoked synchronously for every raw inbound protocol line.
///
/// Purely diagnostic: no shaping logic may depend on its ordering relative
/// to outbound sends.
pub type RawLineObserver = Box<dyn Fn(&str) + Send + Sync>;

/// Narrow interface the command-shaping layer requires from a live IRC
/// connection.
pub trait Transport {
    /// Transmit one already-formatted command. Transport failures propagate
    /// to the caller unchanged; no retrying happens above this method.
    fn send(&self, command: &Command) -> anyhow::Result<()>;

    /// Snapshot of the cached topic state for `channel`, if any.
    fn channel_topic(&self, channel: &str) -> Option<ChannelTopic>;

    /// The nick this connection currently holds.
    fn current_nick(&self) -> String;

    /// Close the connection, with an optional parting message.
    fn disconnect(&mut self, reason: Option<&str>);

    /// Register a diagnostic observer for raw inbound lines.
    fn observe_raw_lines(&self, observer: RawLineObserver);
}
