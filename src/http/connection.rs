use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, ReadHalf, WriteHalf};

use crate::config::Config;
use crate::http::parser::parse_request_line;
use crate::http::resource::Resource;
use crate::http::response::{ContentType, Status};
use crate::http::writer;

/// Content type every response is served with. The body writer only defines
/// handling for the `text` category.
const CONTENT_TYPE: &str = "text/html";

/// Handles the full request-to-response lifecycle of one client connection.
///
/// Generic over the stream so tests can drive it with in-memory pipes. Each
/// connection owns its stream pair exclusively; nothing is shared across
/// connections.
pub struct Connection<S> {
    reader: BufReader<ReadHalf<S>>,
    writer: WriteHalf<S>,
    config: Config,
    state: ConnectionState,
}

pub enum ConnectionState {
    ReadingRequest,
    Resolved(Resource),
    Unresolved,
    HeaderWritten(Status, Option<Resource>),
    BodyWritten,
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, config: Config) -> Self {
        let (read_half, write_half) = tokio::io::split(stream);
        Self {
            reader: BufReader::new(read_half),
            writer: write_half,
            config,
            state: ConnectionState::ReadingRequest,
        }
    }

    /// Drives the connection state machine to completion.
    ///
    /// Strictly sequential, single pass: parse request, classify, write
    /// header, write body, flush. Errors propagate to the caller; the
    /// `Closed` placeholder left by `replace` means a failed transition also
    /// leaves the connection closed.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let content_type = ContentType::new(CONTENT_TYPE);

        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::ReadingRequest => {
                    self.state = match self.read_request().await? {
                        Some(resource) => ConnectionState::Resolved(resource),
                        None => ConnectionState::Unresolved,
                    };
                }

                ConnectionState::Resolved(resource) => {
                    let status = Status::classify(Some(&resource)).await;
                    writer::write_header(
                        &mut self.writer,
                        &content_type,
                        status,
                        &self.config.server_name,
                    )
                    .await?;
                    self.state = ConnectionState::HeaderWritten(status, Some(resource));
                }

                ConnectionState::Unresolved => {
                    let status = Status::classify(None).await;
                    writer::write_header(
                        &mut self.writer,
                        &content_type,
                        status,
                        &self.config.server_name,
                    )
                    .await?;
                    self.state = ConnectionState::HeaderWritten(status, None);
                }

                ConnectionState::HeaderWritten(status, resource) => {
                    writer::write_body(
                        &mut self.writer,
                        resource.as_ref(),
                        &content_type,
                        status,
                        &self.config.server_name,
                    )
                    .await?;
                    self.state = ConnectionState::BodyWritten;
                }

                ConnectionState::BodyWritten => {
                    self.writer.flush().await?;
                    tracing::debug!("Done handling connection");
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads the request line and resolves it to a resource.
    ///
    /// One buffered line read; no polling. An empty line, a closed stream,
    /// or a line that does not parse as a supported request all yield
    /// `Ok(None)` (the 501 path downstream). Read errors propagate, which
    /// is what distinguishes a broken stream from an unresolved request.
    async fn read_request(&mut self) -> anyhow::Result<Option<Resource>> {
        let mut line = String::new();

        let n = self.reader.read_line(&mut line).await?;
        if n == 0 {
            // client closed before sending a request
            return Ok(None);
        }

        let line = line.trim_end_matches(['\r', '\n']);
        tracing::debug!("Request line: ({})", line);

        if line.is_empty() {
            return Ok(None);
        }

        let resource = parse_request_line(line)
            .map(|req| Resource::resolve(&req, &self.config.root));

        Ok(resource)
    }
}
