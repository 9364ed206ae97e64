//! Error type for the safe layer over raw forwarding methods

use thiserror::Error;

use crate::com::{E_FAIL, E_INVALIDARG, E_POINTER, HRESULT, succeeded};

/// Failure of a call made through a COM table, or of the Rust-side
/// preparation of its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComError {
    /// The native method returned a failure status, kept verbatim.
    #[error("native call failed with HRESULT 0x{code:08X}")]
    Native { code: HRESULT },

    /// The native method reported success but left a required out-pointer null.
    #[error("native call succeeded but produced a null pointer")]
    NullPointer,

    /// A slice is longer than a native `UINT32` count can describe.
    #[error("{len} elements exceed the native UINT32 count range")]
    LengthOverflow { len: usize },

    /// Two slices that share one native count differ in length.
    #[error("paired buffers differ in length: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// A native string is not valid UTF-16.
    #[error("native string is not valid UTF-16")]
    InvalidUtf16,
}

impl ComError {
    /// Status code to report back to native code for this error.
    #[must_use]
    pub fn code(&self) -> HRESULT {
        match self {
            ComError::Native { code } => *code,
            ComError::NullPointer => E_POINTER,
            ComError::LengthOverflow { .. } | ComError::LengthMismatch { .. } => E_INVALIDARG,
            ComError::InvalidUtf16 => E_FAIL,
        }
    }
}

impl From<ComError> for HRESULT {
    fn from(err: ComError) -> Self {
        err.code()
    }
}

/// Result alias for safe wrappers
pub type Result<T, E = ComError> = std::result::Result<T, E>;

/// Turn a status code into a `Result`, keeping the success code (`S_OK`,
/// `S_FALSE`, ...) so callers can still tell them apart.
#[inline]
pub fn check(hr: HRESULT) -> Result<HRESULT> {
    if succeeded(hr) {
        Ok(hr)
    } else {
        Err(ComError::Native { code: hr })
    }
}

/// [`check`] that also logs failures with the native method name.
#[inline]
pub fn check_call(method: &'static str, hr: HRESULT) -> Result<HRESULT> {
    check(hr).inspect_err(|_| log::debug!("{} failed: HRESULT 0x{:08X}", method, hr))
}

/// Convert a Rust length into a native `UINT32` count.
#[inline]
pub fn len_u32(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| ComError::LengthOverflow { len })
}
