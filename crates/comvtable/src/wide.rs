//! UTF-16 string helpers for `WCHAR` parameters

use crate::com::HRESULT;
use crate::error::{ComError, Result, check_call, len_u32};

/// Encode `s` as a NUL-terminated UTF-16 buffer for a `PCWSTR` parameter.
#[must_use]
pub fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Decode UTF-16 up to the first NUL (or the end of the buffer).
pub fn from_wide(buf: &[u16]) -> Result<String> {
    let end = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16(&buf[..end]).map_err(|_| ComError::InvalidUtf16)
}

/// Decode a NUL-terminated UTF-16 string from a raw pointer.
///
/// # Safety
/// `ptr` must be null or point to a readable NUL-terminated `WCHAR` string.
pub unsafe fn from_pcwstr(ptr: *const u16) -> Result<String> {
    if ptr.is_null() {
        return Err(ComError::NullPointer);
    }
    let mut len = 0;
    unsafe {
        while *ptr.add(len) != 0 {
            len += 1;
        }
        from_wide(std::slice::from_raw_parts(ptr, len))
    }
}

/// Read a string through the native "length, then fill a buffer" pair.
///
/// `len` is the length without the terminator, as `Get*Length` methods report
/// it; `fill` receives a buffer of `len + 1` characters and its size.
pub fn read_wide(
    method: &'static str,
    len: u32,
    fill: impl FnOnce(*mut u16, u32) -> HRESULT,
) -> Result<String> {
    let size = len
        .checked_add(1)
        .ok_or(ComError::LengthOverflow { len: len as usize })?;
    let mut buf = vec![0u16; size as usize];
    check_call(method, fill(buf.as_mut_ptr(), len_u32(buf.len())?))?;
    from_wide(&buf)
}
