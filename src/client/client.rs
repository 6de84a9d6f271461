use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};

use crate::transport::message::{NOTICE_PREFIX, TERMINATOR};
use crate::utils::error::ClientError;

/// Client for the idea-board line protocol.
///
/// One command per line out, data lines followed by the `OK` terminator
/// back. Pushed `NEW <idea>` notifications share the connection with
/// replies and are skipped while a reply is being collected; use
/// [`next_notice`](Self::next_notice) to wait for them explicitly.
pub struct Client {
    reader: Lines<BufReader<OwnedReadHalf>>,
    writer: OwnedWriteHalf,
}

impl Client {
    /// Connects to a running server.
    pub async fn connect(addr: &str) -> Result<Self, ClientError> {
        let stream = TcpStream::connect(addr)
            .await
            .map_err(|source| ClientError::Connect {
                addr: addr.to_string(),
                source,
            })?;
        let (read_half, writer) = stream.into_split();
        Ok(Self {
            reader: BufReader::new(read_half).lines(),
            writer,
        })
    }

    /// Adds one idea to the board.
    pub async fn add(&mut self, idea: &str) -> Result<(), ClientError> {
        self.send(&format!("ADD {idea}")).await?;
        self.read_reply().await?;
        Ok(())
    }

    /// Fetches the current board, sorted.
    pub async fn list(&mut self) -> Result<Vec<String>, ClientError> {
        self.send("LIST").await?;
        self.read_reply().await
    }

    /// Waits for the next pushed notification and returns the idea text.
    pub async fn next_notice(&mut self) -> Result<String, ClientError> {
        loop {
            match self.reader.next_line().await? {
                Some(line) => {
                    if let Some(idea) = line.strip_prefix(NOTICE_PREFIX) {
                        return Ok(idea.to_string());
                    }
                }
                None => return Err(ClientError::UnexpectedEof),
            }
        }
    }

    async fn send(&mut self, line: &str) -> Result<(), ClientError> {
        self.writer
            .write_all(format!("{line}\n").as_bytes())
            .await?;
        Ok(())
    }

    // Collects data lines until the terminator, skipping pushed
    // notifications that arrive in between.
    async fn read_reply(&mut self) -> Result<Vec<String>, ClientError> {
        let mut items = Vec::new();
        loop {
            match self.reader.next_line().await? {
                Some(line) if line == TERMINATOR => return Ok(items),
                Some(line) if line.starts_with(NOTICE_PREFIX) => continue,
                Some(line) => items.push(line),
                None => return Err(ClientError::UnexpectedEof),
            }
        }
    }
}
