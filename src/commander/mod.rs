//! High-level command facade.
//!
//! [`Commander`] turns application intents into finished [`Command`] values
//! and hands them to the transport one at a time, strictly in construction
//! order. It performs no retrying, queuing, or rate limiting; pacing and
//! reconnection belong to the connection layer.

use tracing::debug;

use crate::command::Command;
use crate::error::{Error, Result};
use crate::format::{message_lines, MessageBody, NameList};
use crate::modes::{batch_mode_commands, ModeAction, Privilege};
use crate::topic::compose_topic;
use crate::transport::Transport;

/// Shapes outbound commands and dispatches them over a [`Transport`].
pub struct Commander<T: Transport> {
    transport: T,
}

impl<T: Transport> Commander<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    fn dispatch(&self, command: Command) -> Result<()> {
        debug!(command = %command, "dispatch");
        self.transport.send(&command).map_err(Error::Transport)
    }

    /// Join one or more channels, one JOIN command each.
    pub fn join(&self, channels: impl Into<NameList>) -> Result<()> {
        for channel in channels.into().into_vec() {
            self.dispatch(Command::new("JOIN", vec![channel]))?;
        }
        Ok(())
    }

    /// Part one or more channels, one PART command each.
    pub fn part(&self, channels: impl Into<NameList>) -> Result<()> {
        for channel in channels.into().into_vec() {
            self.dispatch(Command::new("PART", vec![channel]))?;
        }
        Ok(())
    }

    /// Kick nicks from a channel, one KICK command each. The reason is
    /// appended as a final token only when provided.
    pub fn kick(
        &self,
        channel: &str,
        nicks: impl Into<NameList>,
        reason: Option<&str>,
    ) -> Result<()> {
        if channel.is_empty() {
            return Err(Error::InvalidArgument(
                "kick requires a channel".to_string(),
            ));
        }
        for nick in nicks.into().into_vec() {
            let mut args = vec![channel.to_string(), nick];
            if let Some(reason) = reason {
                args.push(reason.to_string());
            }
            self.dispatch(Command::new("KICK", args))?;
        }
        Ok(())
    }

    /// Request a nick change and return the nick the connection currently
    /// holds. The server confirms the change asynchronously, so the returned
    /// value reflects the connection's view at call time.
    pub fn set_nick(&self, nick: &str) -> Result<String> {
        if nick.is_empty() {
            return Err(Error::InvalidArgument("nick must not be empty".to_string()));
        }
        self.dispatch(Command::new("NICK", vec![nick.to_string()]))?;
        Ok(self.transport.current_nick())
    }

    /// The nick the connection currently holds.
    pub fn nick(&self) -> String {
        self.transport.current_nick()
    }

    /// Human-readable topic for `channel` from the connection's cached
    /// state, including the setter when known. `None` when no topic is
    /// cached.
    pub fn get_topic(&self, channel: &str) -> Option<String> {
        compose_topic(self.transport.channel_topic(channel).as_ref())
    }

    /// Set the topic of `channel`.
    pub fn set_topic(&self, channel: &str, text: &str) -> Result<()> {
        if channel.is_empty() {
            return Err(Error::InvalidArgument(
                "topic change requires a channel".to_string(),
            ));
        }
        self.dispatch(Command::new(
            "TOPIC",
            vec![channel.to_string(), text.to_string()],
        ))
    }

    /// Send a message to a nick or channel, one PRIVMSG per line of the
    /// body.
    pub fn tell(&self, target: &str, message: impl Into<MessageBody>) -> Result<()> {
        self.send_lines("PRIVMSG", target, message.into())
    }

    /// Send a notice to a nick or channel, one NOTICE per line of the body.
    pub fn notify(&self, target: &str, message: impl Into<MessageBody>) -> Result<()> {
        self.send_lines("NOTICE", target, message.into())
    }

    fn send_lines(&self, verb: &str, target: &str, body: MessageBody) -> Result<()> {
        if target.is_empty() {
            return Err(Error::InvalidArgument(
                "message target must not be empty".to_string(),
            ));
        }
        for line in message_lines(body, None) {
            self.dispatch(Command::new(verb, vec![target.to_string(), line]))?;
        }
        Ok(())
    }

    /// Grant or revoke a privilege for a nick list, batching into MODE
    /// commands of at most [`crate::modes::MODE_BATCH_SIZE`] nicks. All
    /// commands are built (and validated) before the first send.
    pub fn change_modes(
        &self,
        channel: &str,
        action: ModeAction,
        privilege: Privilege,
        nicks: impl Into<NameList>,
    ) -> Result<()> {
        for command in batch_mode_commands(channel, action, privilege, nicks)? {
            self.dispatch(command)?;
        }
        Ok(())
    }

    pub fn give_ops(&self, channel: &str, nicks: impl Into<NameList>) -> Result<()> {
        self.change_modes(channel, ModeAction::Grant, Privilege::Op, nicks)
    }

    pub fn take_ops(&self, channel: &str, nicks: impl Into<NameList>) -> Result<()> {
        self.change_modes(channel, ModeAction::Revoke, Privilege::Op, nicks)
    }

    pub fn give_hops(&self, channel: &str, nicks: impl Into<NameList>) -> Result<()> {
        self.change_modes(channel, ModeAction::Grant, Privilege::HalfOp, nicks)
    }

    pub fn take_hops(&self, channel: &str, nicks: impl Into<NameList>) -> Result<()> {
        self.change_modes(channel, ModeAction::Revoke, Privilege::HalfOp, nicks)
    }

    pub fn give_voices(&self, channel: &str, nicks: impl Into<NameList>) -> Result<()> {
        self.change_modes(channel, ModeAction::Grant, Privilege::Voice, nicks)
    }

    pub fn take_voices(&self, channel: &str, nicks: impl Into<NameList>) -> Result<()> {
        self.change_modes(channel, ModeAction::Revoke, Privilege::Voice, nicks)
    }
}
