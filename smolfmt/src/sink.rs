// Sink adapters: run the engine against a private buffer, then flush
// the finished bytes to a stream.

use std::io::{self, Write};

use colored::Colorize;

use crate::buffer::{Buffer, SmallBuf};
use crate::formatter::Formatter;
use crate::value::FmtValue;

/// Run `body` against an inline buffer sized from the format-string
/// length: short strings rarely outgrow 128 bytes, longer ones get
/// 256 up front.
pub(crate) fn with_estimate<R>(hint: usize, body: impl FnOnce(&mut dyn Buffer) -> R) -> R {
    if hint > 64 {
        let mut buf = SmallBuf::<256>::new();
        body(&mut buf)
    } else {
        let mut buf = SmallBuf::<128>::new();
        body(&mut buf)
    }
}

/// Format into `sink`.
pub fn print<W: Write>(sink: &mut W, fmt: &str, args: &[FmtValue<'_>]) -> io::Result<()> {
    with_estimate(fmt.len(), |buf| {
        let _ = Formatter::new(buf, fmt, false).run(args);
        sink.write_all(buf.as_slice())
    })
}

/// Format into `sink` with a trailing newline.
pub fn println<W: Write>(sink: &mut W, fmt: &str, args: &[FmtValue<'_>]) -> io::Result<()> {
    with_estimate(fmt.len() + 1, |buf| {
        let _ = Formatter::new(buf, fmt, false).run(args);
        buf.push(b'\n');
        sink.write_all(buf.as_slice())
    })
}

/// Format to stderr, painted red when color mode allows it.
pub fn eprint(fmt: &str, args: &[FmtValue<'_>]) -> io::Result<()> {
    eprint_common(fmt, args, false)
}

/// Format to stderr with a trailing newline, painted red when color
/// mode allows it.
pub fn eprintln(fmt: &str, args: &[FmtValue<'_>]) -> io::Result<()> {
    eprint_common(fmt, args, true)
}

fn eprint_common(fmt: &str, args: &[FmtValue<'_>], newline: bool) -> io::Result<()> {
    with_estimate(fmt.len(), |buf| {
        let _ = Formatter::new(buf, fmt, false).run(args);
        let text = String::from_utf8_lossy(buf.as_slice());
        let mut err = io::stderr().lock();
        write!(err, "{}", text.red())?;
        if newline {
            err.write_all(b"\n")?;
        }
        Ok(())
    })
}

/// Run the engine for its checks and diagnostics, discarding the
/// output.
pub fn null(fmt: &str, args: &[FmtValue<'_>]) {
    with_estimate(fmt.len(), |buf| {
        let _ = Formatter::new(buf, fmt, false).run(args);
    })
}
