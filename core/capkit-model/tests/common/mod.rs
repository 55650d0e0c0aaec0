//! Shared test helpers for capturing entity output.

#![allow(dead_code)]

use std::io::{self, Write};

use capkit_model::EmitResult;

/// Runs `f` against an in-memory sink and returns what it wrote.
pub fn capture<F>(f: F) -> String
where
    F: FnOnce(&mut dyn Write) -> EmitResult<()>,
{
    let mut buf: Vec<u8> = Vec::new();
    let sink: &mut dyn Write = &mut buf;
    f(sink).unwrap();
    String::from_utf8(buf).unwrap()
}

/// A sink that rejects every write.
pub struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }
}
