use std::time::SystemTime;

use anyhow::Context;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::http::resource::Resource;
use crate::http::response::{ContentCategory, ContentType, Status};

/// Template token replaced with the server identifier in text bodies.
pub const SERVER_TOKEN: &str = "<cs371server>";

/// Template token replaced with the current date-time in text bodies.
pub const DATE_TOKEN: &str = "<cs371date>";

fn http_date() -> String {
    httpdate::fmt_http_date(SystemTime::now())
}

/// Writes the response header block.
///
/// Lines are emitted in fixed order, each terminated by a single `\n`:
/// status line, `Date`, `Server`, `Connection: close`, `Content-Type`, then
/// a blank line closing the block. No `Content-Length` is sent; the body
/// length is unknown before streaming it, which `Connection: close`
/// tolerates. Must complete before any body bytes are written.
pub async fn write_header<W>(
    out: &mut W,
    content_type: &ContentType,
    status: Status,
    server_name: &str,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let header = format!(
        "HTTP/1.1 {}\nDate: {}\nServer: {}\nConnection: close\nContent-Type: {}\n\n",
        status.text(),
        http_date(),
        server_name,
        content_type.as_str(),
    );

    out.write_all(header.as_bytes()).await?;
    Ok(())
}

/// Writes the response body.
///
/// A non-OK status writes the literal status text and nothing else; no file
/// is opened. An OK status with a `text` content type streams the resource
/// line by line, replacing [`SERVER_TOKEN`] and [`DATE_TOKEN`] in each line
/// before writing it; line terminators are not re-appended. Non-`text`
/// content has no body handling defined and writes nothing.
pub async fn write_body<W>(
    out: &mut W,
    resource: Option<&Resource>,
    content_type: &ContentType,
    status: Status,
    server_name: &str,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    if status != Status::Ok {
        out.write_all(status.text().as_bytes()).await?;
        return Ok(());
    }

    if content_type.category() != ContentCategory::Text {
        return Ok(());
    }

    // classify only yields Ok for a resolved resource
    let Some(resource) = resource else {
        return Ok(());
    };

    let file = File::open(resource.path())
        .await
        .with_context(|| format!("open {}", resource.path().display()))?;

    let date = http_date();
    let mut lines = BufReader::new(file).lines();

    while let Some(line) = lines.next_line().await? {
        let rendered = apply_template(&line, server_name, &date);
        out.write_all(rendered.as_bytes()).await?;
    }

    Ok(())
}

/// Replaces every occurrence of the two template tokens in one line.
///
/// Each occurrence is replaced exactly once and the two substitutions are
/// independent of each other; a line containing neither token comes back
/// unchanged.
pub fn apply_template(line: &str, server_name: &str, date: &str) -> String {
    line.replace(SERVER_TOKEN, server_name)
        .replace(DATE_TOKEN, date)
}
