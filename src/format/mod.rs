//! Input normalization: message bodies into wire-safe lines, name inputs
//! into token lists.
//!
//! Splitting semantics for message bodies: a `\r\n` pair counts as one line
//! break, as does a lone `\r` or `\n`. String input keeps empty segments
//! (a leading, trailing, or doubled break yields an empty line); byte-buffer
//! input drops them, since trailing delimiter noise is common in buffered
//! reads. The asymmetry is long-standing and callers rely on it, so it is
//! kept as-is rather than unified.

/// A message body accepted by [`message_lines`]: free text, a raw byte
/// buffer, or pre-split lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    Text(String),
    Bytes(Vec<u8>),
    Lines(Vec<String>),
}

impl From<&str> for MessageBody {
    fn from(text: &str) -> Self {
        MessageBody::Text(text.to_string())
    }
}

impl From<String> for MessageBody {
    fn from(text: String) -> Self {
        MessageBody::Text(text)
    }
}

impl From<Vec<u8>> for MessageBody {
    fn from(bytes: Vec<u8>) -> Self {
        MessageBody::Bytes(bytes)
    }
}

impl From<&[u8]> for MessageBody {
    fn from(bytes: &[u8]) -> Self {
        MessageBody::Bytes(bytes.to_vec())
    }
}

impl From<Vec<String>> for MessageBody {
    fn from(lines: Vec<String>) -> Self {
        MessageBody::Lines(lines)
    }
}

impl From<&[&str]> for MessageBody {
    fn from(lines: &[&str]) -> Self {
        MessageBody::Lines(lines.iter().map(|s| s.to_string()).collect())
    }
}

/// Split a body into single lines free of CR/LF, one outbound command each.
///
/// With a `prefix`, every line becomes `"{prefix} {line}"`.
pub fn message_lines(body: MessageBody, prefix: Option<&str>) -> Vec<String> {
    let lines = match body {
        MessageBody::Text(text) => split_breaks(&text).map(str::to_string).collect(),
        MessageBody::Bytes(bytes) => {
            let text = String::from_utf8_lossy(&bytes).into_owned();
            split_breaks(&text)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()
        }
        MessageBody::Lines(lines) => lines,
    };

    match prefix {
        Some(prefix) => lines
            .into_iter()
            .map(|line| format!("{} {}", prefix, line))
            .collect(),
        None => lines,
    }
}

// `\r\n` first so a CRLF pair is one break, then lone `\r` / `\n`.
fn split_breaks(text: &str) -> impl Iterator<Item = &str> {
    text.split("\r\n").flat_map(|chunk| chunk.split(['\r', '\n']))
}

/// One or more nicks or channels: a single whitespace-delimited string, or
/// an already-structured list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameList {
    One(String),
    Many(Vec<String>),
}

impl NameList {
    /// Resolve to an ordered token list. The one-string form splits on runs
    /// of whitespace; the list form passes through untouched.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            NameList::One(s) => s.split_whitespace().map(str::to_string).collect(),
            NameList::Many(v) => v,
        }
    }
}

impl From<&str> for NameList {
    fn from(s: &str) -> Self {
        NameList::One(s.to_string())
    }
}

impl From<String> for NameList {
    fn from(s: String) -> Self {
        NameList::One(s)
    }
}

impl From<Vec<String>> for NameList {
    fn from(v: Vec<String>) -> Self {
        NameList::Many(v)
    }
}

impl From<&[&str]> for NameList {
    fn from(v: &[&str]) -> Self {
        NameList::Many(v.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for NameList {
    fn from(v: [&str; N]) -> Self {
        NameList::Many(v.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_keeps_empty_segments() {
        let lines = message_lines("a\r\nb\r\n\r\nc".into(), None);
        assert_eq!(lines, vec!["a", "b", "", "c"]);
    }

    #[test]
    fn test_bytes_drop_empty_segments() {
        let lines = message_lines(b"a\r\nb\r\n\r\nc".as_slice().into(), None);
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_text_trailing_break_yields_empty_line() {
        let lines = message_lines("hello\n".into(), None);
        assert_eq!(lines, vec!["hello", ""]);
    }

    #[test]
    fn test_bytes_trailing_break_suppressed() {
        let lines = message_lines(b"hello\r\n".as_slice().into(), None);
        assert_eq!(lines, vec!["hello"]);
    }

    #[test]
    fn test_lone_cr_and_lf_both_split() {
        let lines = message_lines("a\rb\nc".into(), None);
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_lines_passed_through_with_prefix() {
        let lines = message_lines(["x", "y"].as_slice().into(), Some("!"));
        assert_eq!(lines, vec!["! x", "! y"]);
    }

    #[test]
    fn test_single_line_text() {
        let lines = message_lines("no breaks here".into(), None);
        assert_eq!(lines, vec!["no breaks here"]);
    }

    #[test]
    fn test_name_list_splits_whitespace_runs() {
        let list: NameList = "alice bob   carol".into();
        assert_eq!(list.into_vec(), vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_name_list_vec_untouched() {
        let list: NameList = vec!["alice".to_string(), "bob".to_string()].into();
        assert_eq!(list.into_vec(), vec!["alice", "bob"]);
    }

    #[test]
    fn test_empty_name_string_yields_no_tokens() {
        let list: NameList = "   ".into();
        assert!(list.into_vec().is_empty());
    }
}
