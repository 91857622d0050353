//! Placeholder scanning and substitution.
//!
//! The scanner walks the query text once, left to right, picking out `$N`
//! tokens (`$` followed by one or more decimal digits). It is not a SQL
//! lexer: it has no notion of quoting context, so a `$N` inside a string
//! literal already present in the query is treated like any other match.
//! The output is for diagnostic logging only.

use alloc::string::{String, ToString};
use core::fmt::Write;

use crate::errors::BindError;
use crate::value::BindValue;

/// A `$N` token found in the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placeholder {
    /// Byte offset of the `$` sign.
    start: usize,
    /// Byte offset one past the last digit.
    end: usize,
    /// The parsed 1-based index, `None` when the digit run overflows `usize`.
    index: Option<usize>,
}

/// Scanner yielding the placeholders of a query in textual order.
struct Placeholders<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Placeholders<'a> {
    /// Create a new scanner for the given query text.
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl Iterator for Placeholders<'_> {
    type Item = Placeholder;

    fn next(&mut self) -> Option<Placeholder> {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() {
            if bytes[self.pos] == b'$' {
                let start = self.pos;
                let mut end = start + 1;
                let mut index = Some(0usize);
                while end < bytes.len() && bytes[end].is_ascii_digit() {
                    let digit = usize::from(bytes[end] - b'0');
                    index = index
                        .and_then(|n: usize| n.checked_mul(10))
                        .and_then(|n| n.checked_add(digit));
                    end += 1;
                }
                // A bare `$` with no digits is ordinary text, not a token
                if end > start + 1 {
                    self.pos = end;
                    return Some(Placeholder { start, end, index });
                }
            }
            self.pos += 1;
        }
        None
    }
}

/// Look up the argument a placeholder refers to, if any.
///
/// Index zero, an index beyond the argument count, and a digit run too long
/// to parse all resolve to `None`.
fn resolve(placeholder: Placeholder, args: &[BindValue]) -> Option<&BindValue> {
    let index = placeholder.index?;
    if index == 0 || index > args.len() {
        return None;
    }
    Some(&args[index - 1])
}

/// Substitute every resolvable `$N` placeholder in `query` with the SQL
/// literal rendering of `args[N - 1]`.
///
/// Placeholders that cannot be resolved (index zero or beyond the argument
/// count) are copied to the output verbatim, so the log shows exactly which
/// positions were not supplied. Substituted literals are never re-scanned:
/// each match resolves against the original argument list only.
///
/// This function has no failure path. Any query text and any argument list
/// produce a best-effort rendering.
///
/// ```
/// use sql_bind_rs::{bind, BindValue};
///
/// let bound = bind(
///     "SELECT * FROM users WHERE id = $1 AND name = $2",
///     &[123.into(), "Alice O'Brien".into()],
/// );
/// assert_eq!(
///     bound,
///     "SELECT * FROM users WHERE id = 123 AND name = 'Alice O''Brien'"
/// );
/// ```
#[must_use]
pub fn bind(query: &str, args: &[BindValue]) -> String {
    let mut out = String::with_capacity(query.len());
    let mut tail = 0;
    for placeholder in Placeholders::new(query) {
        out.push_str(&query[tail..placeholder.start]);
        match resolve(placeholder, args) {
            Some(arg) => write!(out, "{arg}").unwrap(),
            None => out.push_str(&query[placeholder.start..placeholder.end]),
        }
        tail = placeholder.end;
    }
    out.push_str(&query[tail..]);
    out
}

/// Strict variant of [`bind`]: unresolvable placeholders become errors
/// instead of passing through verbatim.
///
/// On fully resolvable input the output is byte-identical to [`bind`]'s.
///
/// # Errors
///
/// Returns [`BindError::UnresolvedPlaceholder`] for the first placeholder
/// whose index is zero or exceeds the number of supplied arguments.
pub fn try_bind(query: &str, args: &[BindValue]) -> Result<String, BindError> {
    let mut out = String::with_capacity(query.len());
    let mut tail = 0;
    for placeholder in Placeholders::new(query) {
        out.push_str(&query[tail..placeholder.start]);
        let Some(arg) = resolve(placeholder, args) else {
            return Err(BindError::UnresolvedPlaceholder {
                placeholder: query[placeholder.start..placeholder.end].to_string(),
                supplied: args.len(),
            });
        };
        write!(out, "{arg}").unwrap();
        tail = placeholder.end;
    }
    out.push_str(&query[tail..]);
    Ok(out)
}
