//! Outbound command values.
//!
//! A [`Command`] is a verb plus ordered argument tokens, built once and sent
//! verbatim to the transport. Rendering to a wire line (trailing-argument
//! colon framing) lives here so transports that speak raw lines do not have
//! to reinvent it.

use std::fmt;

/// A single outbound IRC command: `verb` followed by its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub verb: String,
    pub args: Vec<String>,
}

impl Command {
    pub fn new(verb: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            verb: verb.into(),
            args,
        }
    }

    /// Render the command as a raw protocol line (without CR/LF).
    ///
    /// The final argument is prefixed with `:` when it is empty, contains a
    /// space, or itself starts with `:`, so free text like message bodies and
    /// kick reasons survives the trip. Non-final arguments are emitted as-is;
    /// callers are expected to keep them space-free.
    pub fn to_line(&self) -> String {
        let mut line = self.verb.clone();
        let last = self.args.len().saturating_sub(1);
        for (i, arg) in self.args.iter().enumerate() {
            line.push(' ');
            if i == last && (arg.is_empty() || arg.contains(' ') || arg.starts_with(':')) {
                line.push(':');
            }
            line.push_str(arg);
        }
        line
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}
