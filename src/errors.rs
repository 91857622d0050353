//! Submodule defining the errors used across the crate.

use alloc::string::String;

/// Errors that can occur when binding arguments in strict mode.
///
/// The lenient entry point, [`crate::bind`], never produces these: it copies
/// unresolvable placeholders to the output verbatim instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// The query contains a placeholder that no supplied argument covers,
    /// either because its index is zero, exceeds the argument count, or its
    /// digit run does not fit in `usize`.
    #[error("placeholder {placeholder} cannot be resolved against {supplied} bound argument(s)")]
    UnresolvedPlaceholder {
        /// The placeholder text exactly as it appears in the query.
        placeholder: String,
        /// How many arguments were supplied to the call.
        supplied: usize,
    },
}
