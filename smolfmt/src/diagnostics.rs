// Error taxonomy and diagnostic reporting for the formatting engine.
// Every error is local: the engine reports it and keeps producing
// best-effort output instead of panicking.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use thiserror::Error;

/// Everything that can go wrong while formatting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FmtError {
    /// A `{` was never closed. Parsing stops at the offending field.
    #[error("unterminated replacement field, use `{{{{` to escape a brace")]
    TruncatedField,

    /// The bytes between `{` and `}` did not parse.
    #[error("malformed replacement spec `{{{spec}}}`")]
    BadSpec { spec: String },

    /// `r<n>` named a radix outside the supported range.
    #[error("radix {radix} is outside 1..=32")]
    BadBase { radix: u64 },

    /// An argument did not satisfy the category its field required.
    #[error("field expected a {expected} argument, found {found}")]
    CategoryMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A field asked for an argument but none were left.
    #[error("not enough arguments for the format string")]
    ArgUnderflow,

    /// Arguments remained after the last field.
    #[error("{count} argument(s) left over after formatting")]
    ArgOverflow { count: usize },

    /// Pad byte outside printable ASCII, coerced to `' '`.
    #[error("pad byte {pad:#04x} is not printable ASCII, using ' '")]
    UnprintablePad { pad: u8 },
}

impl FmtError {
    /// Stable short code, in the style of compiler diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            FmtError::TruncatedField => "F0001",
            FmtError::BadSpec { .. } => "F0002",
            FmtError::BadBase { .. } => "F0003",
            FmtError::CategoryMismatch { .. } => "F0004",
            FmtError::ArgUnderflow => "F0005",
            FmtError::ArgOverflow { .. } => "F0006",
            // Coerced pads are a flavor of bad spec that keeps the field.
            FmtError::UnprintablePad { .. } => "F0002",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            FmtError::ArgOverflow { .. } | FmtError::UnprintablePad { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Warnings leave the output intact; errors may truncate it.
    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "{}", "error".red().bold()),
            Severity::Warning => write!(f, "{}", "warning".yellow().bold()),
        }
    }
}

/// Report a diagnostic through the `log` facade and, when enabled, to
/// stderr. Release builds stay silent on stderr unless the
/// `stderr-assert` feature is on.
pub(crate) fn report(err: &FmtError) {
    match err.severity() {
        Severity::Error => log::error!(target: "smolfmt", "{}", err),
        Severity::Warning => log::warn!(target: "smolfmt", "{}", err),
    }
    #[cfg(any(debug_assertions, feature = "stderr-assert"))]
    eprintln!("{}[{}]: {}", err.severity(), err.code().cyan(), err);
}

static COLOR_MODE: AtomicBool = AtomicBool::new(false);

/// Enable or disable colored diagnostic output.
///
/// Returns the previous setting. Until the first call, color follows
/// terminal detection.
pub fn set_color_mode(enabled: bool) -> bool {
    colored::control::set_override(enabled);
    COLOR_MODE.swap(enabled, Ordering::Relaxed)
}

/// Last value handed to [`set_color_mode`].
pub fn color_mode() -> bool {
    COLOR_MODE.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(FmtError::TruncatedField.code(), "F0001");
        assert_eq!(
            FmtError::BadSpec {
                spec: ":".to_string()
            }
            .code(),
            "F0002"
        );
        assert_eq!(FmtError::BadBase { radix: 33 }.code(), "F0003");
        assert_eq!(FmtError::ArgUnderflow.code(), "F0005");
    }

    #[test]
    fn test_severity_split() {
        assert!(FmtError::ArgOverflow { count: 1 }.is_warning());
        assert!(FmtError::UnprintablePad { pad: 0x07 }.is_warning());
        assert!(!FmtError::TruncatedField.is_warning());
        assert!(!FmtError::ArgUnderflow.is_warning());
    }

    #[test]
    fn test_color_mode_swap_returns_previous() {
        let initial = set_color_mode(true);
        assert!(set_color_mode(false));
        assert!(!set_color_mode(initial));
        set_color_mode(initial);
    }
}
