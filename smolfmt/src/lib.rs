//! Runtime-checked brace formatting with small-buffer output.
//!
//! A format string contains literal text and `{...}` replacement
//! fields; arguments are packed positionally. All spec validation and
//! argument/type matching happens at run time, and every error is
//! local: the engine reports a diagnostic and produces best-effort
//! output instead of panicking.
//!
//! ```
//! use smolfmt::fmt;
//!
//! assert_eq!(fmt!("Testing, {}!", "123"), "Testing, 123!");
//! assert_eq!(fmt!("{%X}", 42), "2A");
//! assert_eq!(fmt!("{: =9}", "123"), "   123   ");
//! ```
//!
//! Fields accept an alignment part (`:pad[side]width`) and an options
//! part (`%base[extra]`), e.g. `{: -10%x}` right-aligns a hex value in
//! a ten-column space-padded field. Output accumulates in a
//! [`SmallBuf`], which stays on the stack until its inline capacity
//! overflows.

pub mod buffer;
pub mod diagnostics;
pub mod formatter;
pub mod parser;
pub mod radix;
pub mod sink;
pub mod value;

pub use buffer::{Buffer, SmallBuf};
pub use diagnostics::{color_mode, set_color_mode, FmtError, Severity};
pub use formatter::Formatter;
pub use parser::{Align, Base, Extra, FieldSpec, Scanner, Segment, Width};
pub use sink::{eprint, eprintln, null, print, println};
pub use value::{AnyFmt, CustomFormat, FmtValue, ToValue};

use sink::with_estimate;

/// Convert one argument into a borrowed [`FmtValue`]. Used by the
/// argument-packing macros; accepts values and references alike.
pub fn to_value<T: ToValue + ?Sized>(value: &T) -> FmtValue<'_> {
    value.to_value()
}

/// Format `args` against `fmt`, returning the output as a string.
/// Errors are reported as diagnostics and the output is best-effort.
pub fn format(fmt: &str, args: &[FmtValue<'_>]) -> String {
    format_with(fmt, args, false)
}

/// [`format`] with an explicit permissive-coercion flag. Permissive
/// mode lets `Char` stand in for integers and strings, and C strings
/// for pointers, without a `c`/`p` extra in the field.
pub fn format_with(fmt: &str, args: &[FmtValue<'_>], permissive: bool) -> String {
    with_estimate(fmt.len(), |buf| {
        let _ = Formatter::new(buf, fmt, permissive).run(args);
        String::from_utf8_lossy(buf.as_slice()).into_owned()
    })
}

/// Strict variant of [`format`]: the first fatal error is returned
/// instead of swallowed. The lost partial output can be recovered by
/// calling [`Formatter::run`] against a caller-owned buffer.
pub fn try_format(fmt: &str, args: &[FmtValue<'_>]) -> Result<String, FmtError> {
    with_estimate(fmt.len(), |buf| {
        Formatter::new(buf, fmt, false).run(args)?;
        Ok(String::from_utf8_lossy(buf.as_slice()).into_owned())
    })
}

/// Format with inline arguments, returning a `String`.
#[macro_export]
macro_rules! fmt {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::format($fmt, &[$($crate::to_value(&$arg)),*])
    };
}

/// Format with inline arguments and write to stdout.
#[macro_export]
macro_rules! print {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {{
        let _ = $crate::print(
            &mut ::std::io::stdout(),
            $fmt,
            &[$($crate::to_value(&$arg)),*],
        );
    }};
}

/// Format with inline arguments and write to stdout with a newline.
#[macro_export]
macro_rules! println {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {{
        let _ = $crate::println(
            &mut ::std::io::stdout(),
            $fmt,
            &[$($crate::to_value(&$arg)),*],
        );
    }};
}

/// Format with inline arguments and write to stderr, colorized when
/// color mode is on.
#[macro_export]
macro_rules! eprintln {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {{
        let _ = $crate::eprintln($fmt, &[$($crate::to_value(&$arg)),*]);
    }};
}

/// Format with inline arguments and discard the output, keeping the
/// engine's checks and diagnostics.
#[macro_export]
macro_rules! null {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::null($fmt, &[$($crate::to_value(&$arg)),*])
    };
}
