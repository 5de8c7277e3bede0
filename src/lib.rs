//! Command shaping and dispatch for IRC clients.
//!
//! crabwire sits between application logic and a raw IRC connection: it
//! turns high-level intents ("message this target", "grant ops to these
//! nicks", "change my nick") into correctly-formatted wire commands, and
//! turns cached channel-topic state into query-friendly accessors.
//!
//! The shaping core never opens sockets and never parses inbound protocol
//! grammar. It talks to the connection through the narrow [`Transport`]
//! trait; [`IrcTransport`] is the stock implementation backed by the `irc`
//! crate.
//!
//! ```no_run
//! use crabwire::{Commander, IrcTransport, Options};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let mut options = Options::new("irc.libera.chat");
//! options.channels = vec!["#rust".into()];
//! let commander = Commander::new(IrcTransport::connect(&options).await?);
//!
//! commander.tell("#rust", "hello\nfrom crabwire")?;
//! commander.give_voices("#rust", "alice bob carol")?;
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod commander;
pub mod config;
pub mod connection;
pub mod error;
pub mod format;
pub mod logging;
pub mod modes;
pub mod topic;
pub mod transport;

pub use command::Command;
pub use commander::Commander;
pub use config::{load_options, save_options, Options, WireLogConfig};
pub use connection::IrcTransport;
pub use error::{Error, Result};
pub use format::{message_lines, MessageBody, NameList};
pub use logging::WireLogger;
pub use modes::{batch_mode_commands, ModeAction, Privilege, MODE_BATCH_SIZE};
pub use topic::{compose_topic, ChannelTopic};
pub use transport::{RawLineObserver, Transport};
