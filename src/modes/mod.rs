//! Channel privilege changes batched into MODE commands.
//!
//! Servers cap the number of mode parameters accepted on a single MODE
//! line, so a long nick list is partitioned into fixed-width batches and
//! one command is emitted per batch.

use std::str::FromStr;

use crate::command::Command;
use crate::error::{Error, Result};
use crate::format::NameList;

/// Maximum nicks covered by one MODE command.
pub const MODE_BATCH_SIZE: usize = 6;

/// Whether a privilege is being granted (`+`) or revoked (`-`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeAction {
    Grant,
    Revoke,
}

impl ModeAction {
    pub fn wire_char(self) -> char {
        match self {
            ModeAction::Grant => '+',
            ModeAction::Revoke => '-',
        }
    }
}

impl FromStr for ModeAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(ModeAction::Grant),
            "-" => Ok(ModeAction::Revoke),
            _ if s.eq_ignore_ascii_case("grant") => Ok(ModeAction::Grant),
            _ if s.eq_ignore_ascii_case("revoke") => Ok(ModeAction::Revoke),
            _ => Err(Error::InvalidArgument(format!(
                "unrecognized mode action: {:?}",
                s
            ))),
        }
    }
}

/// Channel-scoped permission level toggled via MODE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privilege {
    Voice,
    HalfOp,
    Op,
}

impl Privilege {
    pub fn wire_char(self) -> char {
        match self {
            Privilege::Voice => 'v',
            Privilege::HalfOp => 'h',
            Privilege::Op => 'o',
        }
    }
}

impl FromStr for Privilege {
    type Err = Error;

    /// Accepts the wire letter (`v`/`h`/`o`, case-insensitive) or the word
    /// forms `voice`, `halfop`/`half-op`, `op`.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "v" | "voice" => Ok(Privilege::Voice),
            "h" | "halfop" | "half-op" => Ok(Privilege::HalfOp),
            "o" | "op" => Ok(Privilege::Op),
            _ => Err(Error::InvalidArgument(format!(
                "unrecognized privilege: {:?}",
                s
            ))),
        }
    }
}

/// Build the MODE commands granting or revoking `privilege` for `nicks` on
/// `channel`, at most [`MODE_BATCH_SIZE`] nicks per command.
///
/// The mode-letter string of each command repeats the privilege letter once
/// per nick in that batch, and nicks keep their input order across batches.
/// An empty nick list builds no commands. Fails before anything is built if
/// `channel` is empty.
pub fn batch_mode_commands(
    channel: &str,
    action: ModeAction,
    privilege: Privilege,
    nicks: impl Into<NameList>,
) -> Result<Vec<Command>> {
    if channel.is_empty() {
        return Err(Error::InvalidArgument(
            "mode change requires a channel".to_string(),
        ));
    }

    let nicks = nicks.into().into_vec();
    let mut commands = Vec::with_capacity(nicks.len().div_ceil(MODE_BATCH_SIZE));
    for batch in nicks.chunks(MODE_BATCH_SIZE) {
        let mut modes = String::with_capacity(batch.len() + 1);
        modes.push(action.wire_char());
        for _ in batch {
            modes.push(privilege.wire_char());
        }

        let mut args = Vec::with_capacity(batch.len() + 2);
        args.push(channel.to_string());
        args.push(modes);
        args.extend(batch.iter().cloned());
        commands.push(Command::new("MODE", args));
    }
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_count_is_ceil_of_six() {
        let nicks: Vec<String> = (0..13).map(|i| format!("nick{}", i)).collect();
        let commands =
            batch_mode_commands("#chan", ModeAction::Grant, Privilege::Op, nicks).unwrap();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0].args[1], "+oooooo");
        assert_eq!(commands[1].args[1], "+oooooo");
        assert_eq!(commands[2].args[1], "+o");
    }

    #[test]
    fn test_batches_preserve_nick_order() {
        let nicks: Vec<String> = (0..8).map(|i| format!("n{}", i)).collect();
        let commands =
            batch_mode_commands("#chan", ModeAction::Revoke, Privilege::Voice, nicks.clone())
                .unwrap();
        let rejoined: Vec<String> = commands
            .iter()
            .flat_map(|c| c.args[2..].iter().cloned())
            .collect();
        assert_eq!(rejoined, nicks);
    }

    #[test]
    fn test_single_batch_command_shape() {
        let commands = batch_mode_commands(
            "#chan",
            ModeAction::Grant,
            Privilege::Voice,
            "alice bob",
        )
        .unwrap();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].verb, "MODE");
        assert_eq!(
            commands[0].args,
            vec!["#chan", "+vv", "alice", "bob"]
        );
    }

    #[test]
    fn test_empty_nick_list_is_noop() {
        let commands =
            batch_mode_commands("#chan", ModeAction::Grant, Privilege::Op, Vec::<String>::new())
                .unwrap();
        assert!(commands.is_empty());
    }

    #[test]
    fn test_empty_channel_rejected() {
        let result = batch_mode_commands("", ModeAction::Grant, Privilege::Op, "alice");
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_privilege_parses_letters_and_words() {
        assert_eq!("v".parse::<Privilege>().unwrap(), Privilege::Voice);
        assert_eq!("O".parse::<Privilege>().unwrap(), Privilege::Op);
        assert_eq!("half-op".parse::<Privilege>().unwrap(), Privilege::HalfOp);
    }

    #[test]
    fn test_unknown_privilege_token_rejected() {
        assert!(matches!(
            "x".parse::<Privilege>(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_action_parses_wire_chars() {
        assert_eq!("+".parse::<ModeAction>().unwrap(), ModeAction::Grant);
        assert_eq!("-".parse::<ModeAction>().unwrap(), ModeAction::Revoke);
        assert!(matches!(
            "?".parse::<ModeAction>(),
            Err(Error::InvalidArgument(_))
        ));
    }
}
