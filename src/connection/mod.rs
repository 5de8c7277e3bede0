//! Production transport backed by the `irc` crate.
//!
//! Owns the live connection: builds the protocol config from [`Options`],
//! spawns the inbound read loop, and maintains the cached state the shaping
//! layer queries (channel topics, current nick). Raw inbound lines are
//! fanned out to registered observers for diagnostics before any state
//! tracking happens.

use anyhow::Result;
use futures::StreamExt;
use irc::client::prelude::{Client, Config};
use irc::proto::{Command as ProtoCommand, Message, Response};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use tracing::{debug, warn};

use crate::command::Command;
use crate::config::Options;
use crate::topic::ChannelTopic;
use crate::transport::{RawLineObserver, Transport};

type TopicCache = Arc<Mutex<HashMap<String, ChannelTopic>>>;
type Observers = Arc<Mutex<Vec<RawLineObserver>>>;

pub struct IrcTransport {
    sender: irc::client::Sender,
    quit_message: String,
    nick: Arc<RwLock<String>>,
    topics: TopicCache,
    observers: Observers,
}

impl IrcTransport {
    /// Connect, identify, and start the background read loop.
    pub async fn connect(options: &Options) -> Result<Self> {
        let config = Config {
            server: Some(options.host.clone()),
            port: Some(options.port),
            use_tls: Some(options.tls),
            nickname: Some(options.nickname.clone()),
            alt_nicks: options.alt_nicks.clone(),
            username: options.username.clone(),
            realname: options.realname.clone(),
            password: options.password.clone(),
            nick_password: options.nick_password.clone(),
            channels: options.channels.clone(),
            encoding: options.encoding.clone(),
            ping_time: options.ping_time,
            ping_timeout: options.ping_timeout,
            burst_window_length: options.burst_window_length,
            max_messages_in_burst: options.max_messages_in_burst,
            dangerously_accept_invalid_certs: Some(options.accept_invalid_certs),
            ..Config::default()
        };

        let mut client = Client::from_config(config).await?;
        client.identify()?;

        let sender = client.sender();
        let nick = Arc::new(RwLock::new(client.current_nickname().to_string()));
        let topics: TopicCache = Arc::new(Mutex::new(HashMap::new()));
        let observers: Observers = Arc::new(Mutex::new(Vec::new()));
        let mut stream = client.stream()?;

        let loop_nick = Arc::clone(&nick);
        let loop_topics = Arc::clone(&topics);
        let loop_observers = Arc::clone(&observers);
        tokio::spawn(async move {
            while let Some(result) = stream.next().await {
                match result {
                    Ok(message) => {
                        let raw = message.to_string();
                        let line = raw.trim_end_matches(['\r', '\n']);
                        for observer in loop_observers.lock().unwrap().iter() {
                            observer(line);
                        }
                        track_state(&loop_nick, &loop_topics, &message);
                    }
                    Err(e) => {
                        warn!(error = %e, "connection read failed");
                        break;
                    }
                }
            }
            debug!("connection closed");
        });

        Ok(Self {
            sender,
            quit_message: options.quit_message.clone(),
            nick,
            topics,
            observers,
        })
    }
}

impl Transport for IrcTransport {
    fn send(&self, command: &Command) -> Result<()> {
        self.sender
            .send(ProtoCommand::Raw(command.to_line(), vec![]))?;
        Ok(())
    }

    fn channel_topic(&self, channel: &str) -> Option<ChannelTopic> {
        self.topics.lock().unwrap().get(channel).cloned()
    }

    fn current_nick(&self) -> String {
        self.nick.read().unwrap().clone()
    }

    fn disconnect(&mut self, reason: Option<&str>) {
        let _ = self
            .sender
            .send_quit(reason.unwrap_or(&self.quit_message));
    }

    fn observe_raw_lines(&self, observer: RawLineObserver) {
        self.observers.lock().unwrap().push(observer);
    }
}

/// Fold one inbound message into the cached connection state.
fn track_state(
    nick: &RwLock<String>,
    topics: &Mutex<HashMap<String, ChannelTopic>>,
    message: &Message,
) {
    let source = message.source_nickname().map(str::to_string);

    match &message.command {
        ProtoCommand::TOPIC(channel, Some(topic)) => {
            let mut topics = topics.lock().unwrap();
            let entry = topics.entry(channel.clone()).or_default();
            entry.text = Some(topic.clone());
            entry.set_by = source;
        }

        ProtoCommand::NICK(new_nick) => {
            let mut current = nick.write().unwrap();
            if source.as_deref() == Some(current.as_str()) {
                *current = new_nick.clone();
            }
        }

        // Our own departure invalidates the cached topic.
        ProtoCommand::PART(channel, _) => {
            let ours = source.as_deref() == Some(nick.read().unwrap().as_str());
            if ours {
                topics.lock().unwrap().remove(channel);
            }
        }

        ProtoCommand::KICK(channel, user, _) => {
            if user.eq_ignore_ascii_case(&nick.read().unwrap()) {
                topics.lock().unwrap().remove(channel);
            }
        }

        ProtoCommand::Response(response, args) => match response {
            // RPL_TOPIC: <client> <channel> <topic>
            Response::RPL_TOPIC if args.len() >= 3 => {
                let mut topics = topics.lock().unwrap();
                let entry = topics.entry(args[1].clone()).or_default();
                entry.text = Some(args[2].clone());
            }
            // RPL_NOTOPIC: <client> <channel> <text>
            Response::RPL_NOTOPIC if args.len() >= 2 => {
                let mut topics = topics.lock().unwrap();
                let entry = topics.entry(args[1].clone()).or_default();
                entry.text = None;
                entry.set_by = None;
            }
            // RPL_TOPICWHOTIME: <client> <channel> <nick> <setat>
            Response::RPL_TOPICWHOTIME if args.len() >= 3 => {
                let mut topics = topics.lock().unwrap();
                let entry = topics.entry(args[1].clone()).or_default();
                entry.set_by = Some(args[2].clone());
            }
            _ => {}
        },

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> (RwLock<String>, Mutex<HashMap<String, ChannelTopic>>) {
        (RwLock::new("self".to_string()), Mutex::new(HashMap::new()))
    }

    fn message(line: &str) -> Message {
        line.parse().unwrap()
    }

    #[test]
    fn test_topic_command_records_text_and_setter() {
        let (nick, topics) = state();
        track_state(
            &nick,
            &topics,
            &message(":alice!u@h TOPIC #chan :fresh topic"),
        );
        let cached = topics.lock().unwrap().get("#chan").cloned().unwrap();
        assert_eq!(cached.text.as_deref(), Some("fresh topic"));
        assert_eq!(cached.set_by.as_deref(), Some("alice"));
    }

    #[test]
    fn test_numeric_topic_then_whotime() {
        let (nick, topics) = state();
        track_state(
            &nick,
            &topics,
            &message(":server 332 self #chan :welcome all"),
        );
        track_state(
            &nick,
            &topics,
            &message(":server 333 self #chan alice 1700000000"),
        );
        let cached = topics.lock().unwrap().get("#chan").cloned().unwrap();
        assert_eq!(cached.text.as_deref(), Some("welcome all"));
        assert_eq!(cached.set_by.as_deref(), Some("alice"));
    }

    #[test]
    fn test_no_topic_clears_text() {
        let (nick, topics) = state();
        track_state(&nick, &topics, &message(":server 332 self #chan :old"));
        track_state(
            &nick,
            &topics,
            &message(":server 331 self #chan :No topic is set"),
        );
        let cached = topics.lock().unwrap().get("#chan").cloned().unwrap();
        assert_eq!(cached.text, None);
    }

    #[test]
    fn test_own_nick_change_tracked() {
        let (nick, topics) = state();
        track_state(&nick, &topics, &message(":self!u@h NICK :renamed"));
        assert_eq!(*nick.read().unwrap(), "renamed");
    }

    #[test]
    fn test_foreign_nick_change_ignored() {
        let (nick, topics) = state();
        track_state(&nick, &topics, &message(":alice!u@h NICK :bob"));
        assert_eq!(*nick.read().unwrap(), "self");
    }

    #[test]
    fn test_own_part_drops_cached_topic() {
        let (nick, topics) = state();
        track_state(&nick, &topics, &message(":server 332 self #chan :t"));
        track_state(&nick, &topics, &message(":self!u@h PART #chan"));
        assert!(topics.lock().unwrap().get("#chan").is_none());
    }
}
