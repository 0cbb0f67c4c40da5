//! Scene stream reader.
//!
//! A scene is framed by two marker lines:
//!
//! ```text
//! begin scene
//! building b1 0 0 2 1
//! antenna a1 4 4 3
//! end scene
//! ```
//!
//! Lines are numbered from 1, starting with the `begin scene` marker.
//! Reading stops at the end marker; anything after it is left unread.

use std::io::BufRead;

use tracing::{debug, trace};

use crate::error::{KoverError, Result};
use crate::scene::{Scene, SceneBuilder};

use super::line::parse_line;

/// Literal first line of every scene.
pub const BEGIN_MARKER: &str = "begin scene";

/// Literal last line of every scene.
pub const END_MARKER: &str = "end scene";

/// Read and validate a scene from a buffered stream.
///
/// Fails on the first invalid line; no partial scene is returned.
/// Bytes that are not valid UTF-8 are replaced, so they surface as
/// token errors on their line rather than as stream errors.
pub fn read_scene<R: BufRead>(mut reader: R) -> Result<Scene> {
    let mut buf = Vec::new();

    match next_line(&mut reader, &mut buf)? {
        Some(line) if line == BEGIN_MARKER => {}
        _ => return Err(KoverError::MissingStartMarker),
    }
    trace!("found start marker");

    let mut builder = SceneBuilder::new();
    let mut line_num = 1;

    while let Some(line) = next_line(&mut reader, &mut buf)? {
        line_num += 1;

        if line == END_MARKER {
            debug!(
                buildings = builder.building_count(),
                antennas = builder.antenna_count(),
                lines = line_num,
                "scene complete"
            );
            return Ok(builder.build());
        }

        let record = parse_line(&line, line_num)?;
        trace!(line = line_num, kind = %record.kind(), id = record.id(), "parsed record");
        builder.add_record(record)?;
    }

    Err(KoverError::MissingEndMarker)
}

/// Read one line without its `\n` or `\r\n` terminator.
///
/// Returns `None` at end of stream.
fn next_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Read and validate a scene held in memory.
pub fn parse_scene(source: &str) -> Result<Scene> {
    read_scene(source.as_bytes())
}
