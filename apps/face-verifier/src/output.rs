//! Single-line JSON output.
//!
//! The backend that shells out to this stub was written against output of
//! the form `{"status": "verified", "message": "..."}`, so separators carry
//! one space after `,` and `:`.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::Formatter;

/// Compact formatter with spaced separators.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

pub fn to_json_line<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut serializer)?;
    // serde_json only emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `value` followed by a newline and flush.
pub fn write_json_line<T, W>(writer: &mut W, value: &T) -> crate::error::VerifyResult<()>
where
    T: Serialize,
    W: Write,
{
    let line = to_json_line(value)?;
    writeln!(writer, "{line}")?;
    writer.flush()?;
    Ok(())
}
