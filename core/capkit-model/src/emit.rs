use std::io::{self, Write};

use crate::EmitResult;

/// Writes `line` followed by a newline and flushes the sink.
pub(crate) fn emit_line(out: &mut dyn Write, line: &str) -> EmitResult<()> {
    writeln!(out, "{line}")?;
    out.flush()?;
    Ok(())
}

/// Runs `f` against locked standard output.
pub(crate) fn with_stdout<F>(f: F) -> EmitResult<()>
where
    F: FnOnce(&mut dyn Write) -> EmitResult<()>,
{
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    let out: &mut dyn Write = &mut lock;
    f(out)
}
