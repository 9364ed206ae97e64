//! Owning interface pointer

use std::ffi::c_void;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;
use std::ptr::{self, NonNull};

use crate::com::{ComInterface, GUID, HRESULT, IUnknown};
use crate::error::{ComError, Result, check};

/// An owned reference to a COM interface.
///
/// Holds exactly one reference: `Clone` calls `AddRef`, `Drop` calls
/// `Release` once. The pointer is neither `Send` nor `Sync`; whether the
/// native object tolerates other threads is its own business.
#[repr(transparent)]
pub struct ComPtr<T: ComInterface> {
    ptr: NonNull<T>,
    _marker: PhantomData<*mut T>,
}

impl<T: ComInterface> ComPtr<T> {
    /// Adopt one reference from a raw pointer. Null gives `None`.
    ///
    /// # Safety
    /// `ptr` must be null or a live interface pointer whose reference the
    /// caller owns and hands over.
    #[inline]
    pub unsafe fn from_raw(ptr: *mut T) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| unsafe { Self::from_non_null(ptr) })
    }

    /// Adopt one reference from a non-null pointer.
    ///
    /// # Safety
    /// Same as [`ComPtr::from_raw`].
    #[inline]
    pub unsafe fn from_non_null(ptr: NonNull<T>) -> Self {
        Self {
            ptr,
            _marker: PhantomData,
        }
    }

    /// Take a new reference on a borrowed handle.
    #[inline]
    pub fn from_ref(iface: &T) -> Self {
        unsafe {
            iface.as_unknown().AddRef();
            Self::from_non_null(NonNull::from(iface))
        }
    }

    /// Run a factory-style native call and adopt the interface it writes.
    ///
    /// Fails with the call's status if it failed, or with
    /// [`ComError::NullPointer`] if it succeeded without producing a pointer.
    ///
    /// # Safety
    /// On success `call` must leave either null or an owned reference in its
    /// out-parameter.
    pub unsafe fn from_out_param<F>(call: F) -> Result<Self>
    where
        F: FnOnce(*mut *mut T) -> HRESULT,
    {
        let mut raw: *mut T = ptr::null_mut();
        check(call(&mut raw))?;
        unsafe { Self::from_raw(raw) }.ok_or(ComError::NullPointer)
    }

    /// The raw interface pointer, still owned by `self`.
    #[inline]
    #[must_use]
    pub fn as_raw(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Give up ownership without releasing.
    #[inline]
    #[must_use = "the reference leaks unless it is handed to native code or re-adopted"]
    pub fn into_raw(self) -> *mut T {
        let raw = self.ptr.as_ptr();
        std::mem::forget(self);
        raw
    }

    /// `QueryInterface` for `U`, returning an owned pointer.
    pub fn cast<U: ComInterface>(&self) -> Result<ComPtr<U>> {
        let mut raw: *mut c_void = ptr::null_mut();
        let iid: GUID = U::IID;
        let hr = unsafe { self.as_unknown().QueryInterface(&iid, &mut raw) };
        match check(hr) {
            Ok(_) => unsafe { ComPtr::from_raw(raw.cast::<U>()) }.ok_or(ComError::NullPointer),
            Err(err) => {
                log::debug!("{} does not expose {} ({})", T::NAME, U::NAME, err);
                Err(err)
            }
        }
    }
}

impl<T: ComInterface> Deref for ComPtr<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        unsafe { self.ptr.as_ref() }
    }
}

impl<T: ComInterface> Clone for ComPtr<T> {
    fn clone(&self) -> Self {
        let count = unsafe { self.as_unknown().AddRef() };
        log::trace!("{}::AddRef {:p} -> {}", T::NAME, self.ptr, count);
        Self {
            ptr: self.ptr,
            _marker: PhantomData,
        }
    }
}

impl<T: ComInterface> Drop for ComPtr<T> {
    fn drop(&mut self) {
        let count = unsafe { self.as_unknown().Release() };
        log::trace!("{}::Release {:p} -> {}", T::NAME, self.ptr, count);
    }
}

impl<T: ComInterface> PartialEq for ComPtr<T> {
    /// Pointer equality of the interface pointers
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T: ComInterface> Eq for ComPtr<T> {}

impl<T: ComInterface> fmt::Debug for ComPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComPtr<{}>({:p})", T::NAME, self.ptr)
    }
}

impl<T: ComInterface> AsRef<IUnknown> for ComPtr<T> {
    fn as_ref(&self) -> &IUnknown {
        self.as_unknown()
    }
}
