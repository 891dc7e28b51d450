use std::io::{self, Write};

/// Secondary destination for mirrored log lines.
///
/// Lines arrive already newline-terminated.
pub trait DiagnosticSink: Send + Sync {
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Mirrors lines to the process's standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        stderr.write_all(line.as_bytes())?;
        stderr.flush()
    }
}
