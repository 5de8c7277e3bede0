//! Channel topic snapshots and display composition.

/// Cached topic state for one channel, owned by the connection's read loop.
/// The shaping layer only reads clones of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelTopic {
    /// Topic text, absent when the channel has no topic (or RPL_NOTOPIC was
    /// seen).
    pub text: Option<String>,
    /// Nick that set the topic, when the server reported one.
    pub set_by: Option<String>,
}

/// Compose a human-readable topic string from a cached snapshot.
///
/// Returns `None` when there is no snapshot or no topic text. The setter is
/// appended as `" set by {nick}"` only when known.
pub fn compose_topic(snapshot: Option<&ChannelTopic>) -> Option<String> {
    let snapshot = snapshot?;
    let text = snapshot.text.as_ref()?;
    Some(match &snapshot.set_by {
        Some(nick) => format!("{} set by {}", text, nick),
        None => text.clone(),
    })
}
