/// Terminator line closing every server reply.
///
/// Only the server ever sends this. A client line that happens to read
/// `OK` is treated like any other unrecognized command.
pub const TERMINATOR: &str = "OK";

/// Prefix of pushed new-idea notifications.
///
/// Notifications share the connection with replies, so clients collecting
/// a reply skip lines carrying this prefix.
pub const NOTICE_PREFIX: &str = "NEW ";

/// A command received on the wire, one per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `ADD <text>`: trim `<text>` and store it as a new idea.
    Add(String),
    /// `LIST`: reply with every stored idea, one per line.
    List,
}

impl Command {
    /// Parses one line leniently.
    ///
    /// Anything that is not a well-formed command returns `None` and is
    /// ignored by the session with no error reply. A trailing `\r` from
    /// CRLF clients is tolerated.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        if let Some(text) = line.strip_prefix("ADD ") {
            Some(Command::Add(text.trim().to_string()))
        } else if line == "LIST" {
            Some(Command::List)
        } else {
            None
        }
    }
}
