//! COM (Component Object Model) support types
//!
//! ## Key Types
//! - [`GUID`] - 128-bit identifier for interfaces
//! - [`HRESULT`] - COM status code
//! - [`IUnknown`] / [`IUnknownVTable`] - the three slots every table starts with
//! - [`ComRefCount`] - reference counter for objects implemented in Rust
//! - [`ComInterface`] - IID and name of a handle type

use std::ffi::c_void;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering, fence};

use comvtable_macro::com_interface;
use thiserror::Error;

// =============================================================================
// GUID - Globally Unique Identifier
// =============================================================================

/// 128-bit globally unique identifier (GUID/UUID/IID).
///
/// Memory layout matches the native `GUID`: three little-endian integers
/// followed by eight bytes.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GUID {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl GUID {
    /// Create a new GUID from components
    #[must_use]
    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    /// Create a GUID from its canonical 128-bit big-endian reading, so
    /// `0x28211a43_7d89_476f_8181_2d6159b220ad` is `28211a43-7d89-476f-8181-2d6159b220ad`.
    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        let tail = (value as u64).to_be_bytes();
        Self {
            data1: (value >> 96) as u32,
            data2: (value >> 80) as u16,
            data3: (value >> 64) as u16,
            data4: tail,
        }
    }

    /// Inverse of [`GUID::from_u128`]
    #[must_use]
    pub const fn to_u128(&self) -> u128 {
        ((self.data1 as u128) << 96)
            | ((self.data2 as u128) << 80)
            | ((self.data3 as u128) << 64)
            | (u64::from_be_bytes(self.data4) as u128)
    }

    /// The sixteen bytes exactly as the native structure stores them.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; 16] {
        let d1 = self.data1.to_le_bytes();
        let d2 = self.data2.to_le_bytes();
        let d3 = self.data3.to_le_bytes();
        let d4 = self.data4;
        [
            d1[0], d1[1], d1[2], d1[3], d2[0], d2[1], d3[0], d3[1], d4[0], d4[1], d4[2], d4[3],
            d4[4], d4[5], d4[6], d4[7],
        ]
    }

    /// The nil/zero GUID
    pub const ZERO: GUID = GUID::new(0, 0, 0, [0; 8]);
}

impl fmt::Debug for GUID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.to_string().to_uppercase())
    }
}

impl fmt::Display for GUID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.data1,
            self.data2,
            self.data3,
            self.data4[0],
            self.data4[1],
            self.data4[2],
            self.data4[3],
            self.data4[4],
            self.data4[5],
            self.data4[6],
            self.data4[7]
        )
    }
}

/// Error returned when a string is not a registry-format GUID
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid GUID string '{0}'")]
pub struct ParseGuidError(pub String);

impl FromStr for GUID {
    type Err = ParseGuidError;

    /// Parses `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`, with or without braces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseGuidError(s.to_owned());
        let body = s.trim();
        let body = body
            .strip_prefix('{')
            .and_then(|b| b.strip_suffix('}'))
            .unwrap_or(body);

        let groups: Vec<&str> = body.split('-').collect();
        let lens = [8, 4, 4, 4, 12];
        if groups.len() != lens.len()
            || groups
                .iter()
                .zip(lens)
                .any(|(g, len)| g.len() != len || !g.bytes().all(|b| b.is_ascii_hexdigit()))
        {
            return Err(err());
        }

        let hex: String = groups.concat();
        u128::from_str_radix(&hex, 16)
            .map(GUID::from_u128)
            .map_err(|_| err())
    }
}

// =============================================================================
// HRESULT - COM status codes
// =============================================================================

/// COM status code. Non-negative values are successes, negative values failures.
pub type HRESULT = i32;

/// Success
pub const S_OK: HRESULT = 0;
/// Success, but returned false
pub const S_FALSE: HRESULT = 1;
/// Not implemented
pub const E_NOTIMPL: HRESULT = 0x8000_4001_u32 as i32;
/// No such interface supported
pub const E_NOINTERFACE: HRESULT = 0x8000_4002_u32 as i32;
/// Invalid pointer
pub const E_POINTER: HRESULT = 0x8000_4003_u32 as i32;
/// Operation aborted
pub const E_ABORT: HRESULT = 0x8000_4004_u32 as i32;
/// Unspecified failure
pub const E_FAIL: HRESULT = 0x8000_4005_u32 as i32;
/// Catastrophic failure
pub const E_UNEXPECTED: HRESULT = 0x8000_FFFF_u32 as i32;
/// Out of memory
pub const E_OUTOFMEMORY: HRESULT = 0x8007_000E_u32 as i32;
/// Invalid argument
pub const E_INVALIDARG: HRESULT = 0x8007_0057_u32 as i32;
/// `HRESULT_FROM_WIN32(ERROR_INSUFFICIENT_BUFFER)`
pub const E_NOT_SUFFICIENT_BUFFER: HRESULT = 0x8007_007A_u32 as i32;

/// Check if an HRESULT indicates success (non-negative)
#[inline]
#[must_use]
pub const fn succeeded(hr: HRESULT) -> bool {
    hr >= 0
}

/// Check if an HRESULT indicates failure (negative)
#[inline]
#[must_use]
pub const fn failed(hr: HRESULT) -> bool {
    hr < 0
}

// =============================================================================
// IUnknown - Base COM interface
// =============================================================================

/// IUnknown - base of all COM interfaces.
///
/// Every table starts with these three slots at 0, 1, 2.
#[com_interface("00000000-0000-0000-c000-000000000046", root, internal)]
pub trait IUnknown {
    /// Query for another interface by IID. On success `*ppv_object` holds an
    /// owned reference.
    fn QueryInterface(&self, riid: *const GUID, ppv_object: *mut *mut c_void) -> HRESULT;

    /// Increment reference count. Returns the new count.
    fn AddRef(&self) -> u32;

    /// Decrement reference count. Returns the new count.
    fn Release(&self) -> u32;
}

/// Implemented by Rust objects exposed through COM tables.
///
/// Unlike the generated `Impl` traits these take the object pointer itself,
/// because `Release` may free it. [`impl_iunknown!`](crate::impl_iunknown)
/// writes this impl for heap-allocated objects.
#[allow(non_snake_case)]
pub trait IUnknownImpl: Sized {
    /// # Safety
    /// `this` must point to a live object; `riid` and `ppv_object` follow the
    /// native contract.
    unsafe fn QueryInterface(this: *mut Self, riid: *const GUID, ppv_object: *mut *mut c_void)
    -> HRESULT;

    /// # Safety
    /// `this` must point to a live object.
    unsafe fn AddRef(this: *mut Self) -> u32;

    /// # Safety
    /// `this` must point to a live object; it may be freed before returning.
    unsafe fn Release(this: *mut Self) -> u32;
}

impl IUnknownVTable {
    /// Builds the `IUnknown` slots for `T`, whose pointer to the table sits
    /// `OFFSET` bytes into the object.
    #[allow(non_snake_case)]
    pub const fn new<T: IUnknownImpl, const OFFSET: usize>() -> Self {
        unsafe extern "system" fn QueryInterface<T: IUnknownImpl, const OFFSET: usize>(
            this: *mut c_void,
            riid: *const GUID,
            ppv_object: *mut *mut c_void,
        ) -> HRESULT {
            unsafe {
                let object = this.cast::<u8>().sub(OFFSET).cast::<T>();
                T::QueryInterface(object, riid, ppv_object)
            }
        }

        unsafe extern "system" fn AddRef<T: IUnknownImpl, const OFFSET: usize>(
            this: *mut c_void,
        ) -> u32 {
            unsafe { T::AddRef(this.cast::<u8>().sub(OFFSET).cast::<T>()) }
        }

        unsafe extern "system" fn Release<T: IUnknownImpl, const OFFSET: usize>(
            this: *mut c_void,
        ) -> u32 {
            unsafe { T::Release(this.cast::<u8>().sub(OFFSET).cast::<T>()) }
        }

        Self {
            QueryInterface: QueryInterface::<T, OFFSET>,
            AddRef: AddRef::<T, OFFSET>,
            Release: Release::<T, OFFSET>,
        }
    }
}

// =============================================================================
// ComRefCount - Atomic reference counter for COM objects
// =============================================================================

/// Atomic reference counter for COM objects.
///
/// Starts at one: the reference handed to the creator.
#[repr(transparent)]
pub struct ComRefCount(AtomicU32);

impl ComRefCount {
    /// Create a new reference counter with count = 1
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU32::new(1))
    }

    /// Increment the reference count. Returns the new count.
    #[inline]
    pub fn add_ref(&self) -> u32 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Decrement the reference count. Returns the new count.
    ///
    /// When the count reaches 0 the caller destroys the object; every write
    /// made under earlier references is visible by then.
    #[inline]
    pub fn release(&self) -> u32 {
        let remaining = self.0.fetch_sub(1, Ordering::Release) - 1;
        if remaining == 0 {
            fence(Ordering::Acquire);
        }
        remaining
    }

    /// Get the current reference count.
    #[inline]
    #[must_use]
    pub fn count(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for ComRefCount {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ComRefCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComRefCount").field(&self.count()).finish()
    }
}

// =============================================================================
// ComInterface - handle identification
// =============================================================================

/// A `#[repr(C)]` interface handle: one pointer to a table that starts with
/// the `IUnknown` slots.
///
/// Implemented by `#[com_interface]` and `foreign_interface!`.
///
/// # Safety
/// Implementors must be exactly one table pointer whose table begins with
/// [`IUnknownVTable`], and `IID` must be the native interface identifier.
pub unsafe trait ComInterface: Sized {
    /// The interface ID (IID) for this interface.
    const IID: GUID;

    /// Native interface name
    const NAME: &'static str;

    /// True if an object exposing this interface also answers `iid`
    /// through the same pointer (this interface or one of its bases).
    #[inline]
    fn matches(iid: &GUID) -> bool {
        *iid == Self::IID
    }

    /// View the handle as its `IUnknown` prefix.
    #[inline]
    fn as_unknown(&self) -> &IUnknown {
        unsafe { &*(self as *const Self).cast::<IUnknown>() }
    }
}
