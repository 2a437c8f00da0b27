// The formatting engine: scans the format string, dispatches each
// field on its argument's category, predicts widths and pads.

use crate::buffer::{Buffer, SmallBuf};
use crate::diagnostics::{report, FmtError};
use crate::parser::{Align, Base, Extra, FieldSpec, Scanner, Segment, Width};
use crate::radix;
use crate::value::FmtValue;

/// Transient state of one format call. Also the handle passed to
/// [`CustomFormat`](crate::CustomFormat) implementations, which write
/// through the `write_*` methods.
pub struct Formatter<'a> {
    scanner: Scanner<'a>,
    current: FieldSpec,
    buf: &'a mut dyn Buffer,
    permissive: bool,
}

/// Cursor over the argument slice, mirroring left-to-right field
/// consumption.
struct ValueCursor<'s, 'a> {
    values: &'s [FmtValue<'a>],
    at: usize,
}

impl<'s, 'a> ValueCursor<'s, 'a> {
    fn new(values: &'s [FmtValue<'a>]) -> Self {
        Self { values, at: 0 }
    }

    fn take(&mut self) -> Option<&'s FmtValue<'a>> {
        let value = self.values.get(self.at)?;
        self.at += 1;
        Some(value)
    }

    fn remaining(&self) -> usize {
        self.values.len() - self.at
    }
}

/// Category a value formats under, given the current field. Width
/// prediction and the writers dispatch on the same category so the
/// padding always matches the emitted bytes.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Category {
    Pointer,
    CharLike,
    Str,
    SignedInt,
    UnsignedInt,
}

impl<'a> Formatter<'a> {
    pub fn new(buf: &'a mut dyn Buffer, fmt: &'a str, permissive: bool) -> Self {
        Self {
            scanner: Scanner::new(fmt),
            current: FieldSpec::default(),
            buf,
            permissive,
        }
    }

    pub fn is_permissive(&self) -> bool {
        self.permissive
    }

    /// The spec of the field currently being formatted. Custom
    /// formatters may consult it for the requested base or pad.
    pub fn field(&self) -> &FieldSpec {
        &self.current
    }

    /// Format every segment against `values`. Diagnostics are reported
    /// as they occur; the first fatal one stops parsing and is
    /// returned. Output produced up to that point stays in the buffer.
    pub fn run(&mut self, values: &[FmtValue<'_>]) -> Result<(), FmtError> {
        let mut cursor = ValueCursor::new(values);
        while let Some(segment) = self.scanner.next_segment() {
            match segment {
                Err(err) => {
                    report(&err);
                    return Err(err);
                }
                Ok(Segment::Literal(text)) => self.buf.append(text.as_bytes()),
                Ok(Segment::Field(spec)) => {
                    self.current = spec;
                    self.format_field(&mut cursor)?;
                }
            }
        }
        let leftover = cursor.remaining();
        if leftover > 0 {
            report(&FmtError::ArgOverflow { count: leftover });
        }
        Ok(())
    }

    fn format_field(&mut self, cursor: &mut ValueCursor<'_, '_>) -> Result<(), FmtError> {
        // Dynamic width consumes its own argument before the value.
        if self.current.width == Width::Dynamic {
            let Some(width) = cursor.take() else {
                report(&FmtError::ArgUnderflow);
                return Err(FmtError::ArgUnderflow);
            };
            if width.is_int(true) {
                self.current.width = Width::Fixed(width.as_u64(true) as usize);
            } else {
                report(&FmtError::CategoryMismatch {
                    expected: "integer width",
                    found: width.type_name(),
                });
                self.current.width = Width::Fixed(0);
            }
        }
        let Some(value) = cursor.take() else {
            report(&FmtError::ArgUnderflow);
            return Err(FmtError::ArgUnderflow);
        };
        self.format_value(value);
        Ok(())
    }

    /// Format one value with the current field spec.
    fn format_value(&mut self, value: &FmtValue<'_>) {
        if let Some(generic) = value.as_generic() {
            // The callback's output width is unknown, so no alignment.
            generic.format(self);
            return;
        }

        match self.current.extra {
            Extra::Char if !value.is_char(true) => report(&FmtError::CategoryMismatch {
                expected: "character",
                found: value.type_name(),
            }),
            Extra::Ptr if !value.is_ptr(true) => report(&FmtError::CategoryMismatch {
                expected: "pointer",
                found: value.type_name(),
            }),
            _ => {}
        }

        let width = match self.current.width {
            Width::Fixed(w) => w,
            Width::Dynamic => 0,
        };

        if self.current.base == Base::Invalid {
            // The radix was rejected at parse time: pad and move on.
            self.buf.fill(width, self.current.pad);
            return;
        }

        let category = self.categorize(value);
        let len = self.predicted_width(category, value);
        if width <= len {
            self.write_category(category, value);
            return;
        }

        self.buf.reserve_back(width);
        let fill = width - len;
        match self.current.side {
            Align::Left => {
                self.write_category(category, value);
                self.buf.fill(fill, self.current.pad);
            }
            Align::Right => {
                self.buf.fill(fill, self.current.pad);
                self.write_category(category, value);
            }
            Align::Center => {
                // Odd remainder goes to the right.
                let left = fill / 2;
                self.buf.fill(left, self.current.pad);
                self.write_category(category, value);
                self.buf.fill(fill - left, self.current.pad);
            }
        }
    }

    fn categorize(&self, value: &FmtValue<'_>) -> Category {
        if value.is_ptr(false) || (self.current.extra == Extra::Ptr && value.is_ptr(true)) {
            return Category::Pointer;
        }
        if self.current.extra == Extra::Char && value.is_char(true) {
            return Category::CharLike;
        }
        if value.is_str(self.permissive) {
            // Strings take priority over chars; a permissive char is a
            // one-scalar string and routes through the char writer.
            if value.as_str().is_some() {
                return Category::Str;
            }
            return Category::CharLike;
        }
        if value.is_char(false) {
            return Category::CharLike;
        }
        if value.is_signed_int(false) {
            return Category::SignedInt;
        }
        // Every remaining variant is unsigned (or a mismatch already
        // reported above, which falls back to integer zero).
        Category::UnsignedInt
    }

    fn predicted_width(&self, category: Category, value: &FmtValue<'_>) -> usize {
        let base = self.current.base.radix().unwrap_or(10);
        match category {
            Category::Pointer => {
                let addr = value.as_ptr(true) as usize as u64;
                radix::count_digits(addr, base) + 2
            }
            Category::CharLike => value.as_char(true).len_utf8(),
            Category::Str => value.as_str().map_or(0, <[u8]>::len),
            Category::SignedInt => {
                let v = value.as_i64(false);
                radix::count_digits(v.unsigned_abs(), base) + usize::from(v < 0)
            }
            Category::UnsignedInt => radix::count_digits(value.as_u64(self.permissive), base),
        }
    }

    fn write_category(&mut self, category: Category, value: &FmtValue<'_>) {
        match category {
            Category::Pointer => self.write_ptr(value.as_ptr(true)),
            Category::CharLike => self.write_char(value.as_char(true)),
            Category::Str => {
                if let Some(bytes) = value.as_str() {
                    self.buf.append(bytes);
                }
            }
            Category::SignedInt => self.write_int(value.as_i64(false)),
            Category::UnsignedInt => self.write_uint(value.as_u64(self.permissive)),
        }
    }

    fn base_and_case(&self) -> (u8, bool) {
        let base = self.current.base.radix().unwrap_or(10);
        let upper = matches!(self.current.extra, Extra::Uppercase | Extra::Ptr);
        (base, upper)
    }

    /// Append a string verbatim.
    pub fn write_str(&mut self, text: &str) {
        self.buf.append(text.as_bytes());
    }

    /// Append raw bytes verbatim.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.append(bytes);
    }

    /// Append a finished buffer.
    pub fn write_buf<const N: usize>(&mut self, other: &SmallBuf<N>) {
        self.buf.append(other.as_slice());
    }

    pub fn write_char(&mut self, c: char) {
        let mut tmp = [0u8; 4];
        self.buf.append(c.encode_utf8(&mut tmp).as_bytes());
    }

    /// Render an unsigned integer in the current field's base.
    pub fn write_uint(&mut self, v: u64) {
        let (base, upper) = self.base_and_case();
        radix::write_radix(self.buf, v, base, upper);
    }

    /// Render a signed integer: sign first, then the magnitude.
    pub fn write_int(&mut self, v: i64) {
        if v < 0 {
            self.buf.push(b'-');
        }
        self.write_uint(v.unsigned_abs());
    }

    /// Reserve room for `extra` more output bytes.
    pub fn reserve_back(&mut self, extra: usize) {
        self.buf.reserve_back(extra);
    }

    fn write_ptr(&mut self, ptr: *const ()) {
        let (base, upper) = self.base_and_case();
        let marker = match base {
            2 => b'b',
            8 => b'o',
            10 => b'd',
            16 => b'x',
            _ => b'z',
        };
        self.buf.push(b'0');
        self.buf.push(marker);
        radix::write_radix(self.buf, ptr as usize as u64, base, upper);
    }
}
