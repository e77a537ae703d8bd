use core::fmt;
use thiserror::Error;

/// Failures that abort a whole render call.
///
/// Malformed format strings are not represented here: they degrade to
/// marker text or silent drops inside the engine. Only byte-cursor
/// overruns, supplemental-argument problems and sink write failures are
/// fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A directive asked for more bytes than remain in the buffer.
    #[error("read of {wanted} bytes at offset {at} overruns buffer of {len} bytes")]
    OutOfRange { at: usize, wanted: usize, len: usize },

    /// A supplemental argument exists at the index but has the wrong kind.
    #[error("argument {index} is {found}, expected {expected}")]
    ArgMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    /// A directive addressed a supplemental argument that was not supplied.
    #[error("no argument at index {index}")]
    MissingArg { index: usize },

    /// The output sink refused a write.
    #[error("write to output sink failed")]
    Fmt(#[from] fmt::Error),
}
