//! Declarative macros for native constant sets and COM objects
//!
//! - `native_enum!` - a `u32`-wide constant set with module-level constants
//! - `foreign_interface!` - a handle for an interface whose table lives elsewhere
//! - `impl_iunknown!` - `IUnknownImpl` for a heap-allocated Rust object
//! - `com_object!` - a Rust object exposing one or more interfaces
//!
//! # Example
//! ```ignore
//! native_enum! {
//!     pub struct D2D1_EXTEND_MODE(u32) {
//!         D2D1_EXTEND_MODE_CLAMP = 0,
//!         D2D1_EXTEND_MODE_WRAP = 1,
//!     }
//! }
//!
//! com_object! {
//!     pub struct Offset: ID2D1DrawTransform {
//!         offset: Cell<D2D1_POINT_2L>,
//!     }
//! }
//! ```

/// Define a native enumeration as a transparent integer newtype.
///
/// Values are plain constants at module level, named as in the header, so
/// any integer the native side returns is representable. `Debug` prints the
/// constant name when the value has one.
#[macro_export]
macro_rules! native_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($repr:ty) {
            $(
                $(#[$const_meta:meta])*
                $const_name:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        $vis struct $name(pub $repr);

        $(
            $(#[$const_meta])*
            $vis const $const_name: $name = $name($value);
        )*

        impl $name {
            /// Every named constant, in header order
            pub const VALUES: &'static [($name, &'static str)] = &[
                $(($const_name, stringify!($const_name))),*
            ];

            /// Native constant name of this value, if it has one
            #[must_use]
            pub fn name(self) -> Option<&'static str> {
                Self::VALUES
                    .iter()
                    .find(|(value, _)| *value == self)
                    .map(|(_, name)| *name)
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self.name() {
                    Some(name) => f.write_str(name),
                    None => write!(f, "{}({})", stringify!($name), self.0),
                }
            }
        }

        impl ::core::convert::From<$repr> for $name {
            #[inline]
            fn from(value: $repr) -> Self {
                Self(value)
            }
        }

        impl ::core::convert::From<$name> for $repr {
            #[inline]
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

/// Declare handles for interfaces that are passed around but not transcribed.
///
/// Each gets an `IID_` constant, a one-pointer `#[repr(C)]` handle,
/// `ComInterface`, and `Deref` to `IUnknown` (the only slots it is known to
/// have).
///
/// ```ignore
/// foreign_interface! {
///     /// Bitmap usable as a render target
///     pub ID2D1Bitmap1 = GUID::from_u128(0xa898a84c_3873_4588_b08b_ebbf978df041);
/// }
/// ```
#[macro_export]
macro_rules! foreign_interface {
    ($(
        $(#[$meta:meta])*
        $vis:vis $name:ident = $iid:expr;
    )*) => {
        $(
            $crate::paste! {
                #[doc = concat!("Interface identifier of [`", stringify!($name), "`]")]
                $vis const [<IID_ $name:upper>]: $crate::GUID = $iid;

                $(#[$meta])*
                #[repr(C)]
                $vis struct $name {
                    vtable: *const $crate::IUnknownVTable,
                }

                impl $name {
                    /// Raw interface pointer
                    #[inline]
                    #[must_use]
                    pub fn as_raw(&self) -> *mut Self {
                        self as *const Self as *mut Self
                    }

                    /// The `IUnknown` prefix of this interface's table
                    #[inline]
                    #[must_use]
                    pub fn unknown_vtable(&self) -> &$crate::IUnknownVTable {
                        unsafe { &*self.vtable }
                    }
                }

                impl ::core::ops::Deref for $name {
                    type Target = $crate::IUnknown;

                    #[inline]
                    fn deref(&self) -> &$crate::IUnknown {
                        unsafe { &*(self as *const Self).cast::<$crate::IUnknown>() }
                    }
                }

                unsafe impl $crate::ComInterface for $name {
                    const IID: $crate::GUID = [<IID_ $name:upper>];
                    const NAME: &'static str = stringify!($name);
                }
            }
        )*
    };
}

/// Implement `IUnknownImpl` for a heap-allocated object.
///
/// The object must come from `Box::into_raw`; the final `Release` drops the
/// box. `QueryInterface` answers `IUnknown` with the first listed interface
/// pointer (so every interface of the object yields the same identity) and
/// each listed interface, or any of its bases, with that interface's field.
///
/// ```ignore
/// impl_iunknown!(TintEffect, ref_count, [
///     ID2D1EffectImpl => effect_vtable,
///     ID2D1DrawTransform => transform_vtable,
/// ]);
/// ```
#[macro_export]
macro_rules! impl_iunknown {
    ($ty:ty, $ref_count:ident, [$($iface:ty => $field:ident),+ $(,)?]) => {
        impl $crate::IUnknownImpl for $ty {
            unsafe fn QueryInterface(
                this: *mut Self,
                riid: *const $crate::GUID,
                ppv_object: *mut *mut ::core::ffi::c_void,
            ) -> $crate::HRESULT {
                unsafe {
                    if ppv_object.is_null() {
                        return $crate::E_POINTER;
                    }
                    if riid.is_null() {
                        *ppv_object = ::core::ptr::null_mut();
                        return $crate::E_POINTER;
                    }
                    let iid = &*riid;

                    let mut found: *mut ::core::ffi::c_void = ::core::ptr::null_mut();
                    if *iid == $crate::IID_IUNKNOWN {
                        found = [$(::core::ptr::addr_of_mut!((*this).$field).cast::<::core::ffi::c_void>()),+][0];
                    }
                    $(
                        if found.is_null() && <$iface as $crate::ComInterface>::matches(iid) {
                            found = ::core::ptr::addr_of_mut!((*this).$field).cast::<::core::ffi::c_void>();
                        }
                    )+

                    *ppv_object = found;
                    if found.is_null() {
                        return $crate::E_NOINTERFACE;
                    }
                    (*this).$ref_count.add_ref();
                    $crate::S_OK
                }
            }

            unsafe fn AddRef(this: *mut Self) -> u32 {
                unsafe { (*this).$ref_count.add_ref() }
            }

            unsafe fn Release(this: *mut Self) -> u32 {
                unsafe {
                    let remaining = (*this).$ref_count.release();
                    if remaining == 0 {
                        $crate::log::trace!("destroying {} at {:p}", stringify!($ty), this);
                        drop(::std::boxed::Box::from_raw(this));
                    }
                    remaining
                }
            }
        }
    };
}

/// Define a Rust object that native code can call through COM tables.
///
/// Generates a `#[repr(C)]` struct holding one table pointer per listed
/// interface (the first at offset 0), a `ref_count`, and the given fields;
/// a `'static` table per interface; the `IUnknownImpl`; and
/// `create(fields..) -> ComPtr<FirstInterface>`.
///
/// The object then needs one `{Interface}Impl` impl per listed interface and
/// per base interface between it and `IUnknown`.
///
/// ```ignore
/// com_object! {
///     pub struct Listener: IDWriteFontDownloadListener {
///         completed: Cell<u32>,
///     }
/// }
///
/// impl IDWriteFontDownloadListenerImpl for Listener {
///     fn DownloadCompleted(&self, _: *mut IDWriteFontDownloadQueue, _: *mut IUnknown, _: HRESULT) {
///         self.completed.set(self.completed.get() + 1);
///     }
/// }
///
/// let listener = Listener::create(Cell::new(0));
/// ```
#[macro_export]
macro_rules! com_object {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $first:ident $(, $rest:ident)* {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $field_ty:ty
            ),* $(,)?
        }
    ) => {
        $crate::paste! {
            $(#[$meta])*
            #[repr(C)]
            $vis struct $name {
                [<vtable_ $first:snake>]: *const [<$first VTable>],
                $([<vtable_ $rest:snake>]: *const [<$rest VTable>],)*
                ref_count: $crate::ComRefCount,
                $(
                    $(#[$field_meta])*
                    $field_vis $field: $field_ty,
                )*
            }

            impl $name {
                const [<VTABLE_ $first:upper>]: &'static [<$first VTable>] = &[<$first VTable>]::new::<
                    $name,
                    { ::core::mem::offset_of!($name, [<vtable_ $first:snake>]) },
                >();
                $(
                    const [<VTABLE_ $rest:upper>]: &'static [<$rest VTable>] = &[<$rest VTable>]::new::<
                        $name,
                        { ::core::mem::offset_of!($name, [<vtable_ $rest:snake>]) },
                    >();
                )*

                /// Move a new object to the heap and return the owning pointer
                /// to its first interface.
                #[allow(clippy::too_many_arguments)]
                $vis fn create($($field: $field_ty),*) -> $crate::ComPtr<$first> {
                    let object = ::std::boxed::Box::new($name {
                        [<vtable_ $first:snake>]: Self::[<VTABLE_ $first:upper>],
                        $([<vtable_ $rest:snake>]: Self::[<VTABLE_ $rest:upper>],)*
                        ref_count: $crate::ComRefCount::new(),
                        $($field,)*
                    });
                    let raw = ::std::boxed::Box::into_raw(object);
                    // the first table pointer sits at offset 0
                    unsafe {
                        $crate::ComPtr::from_non_null(::core::ptr::NonNull::new_unchecked(
                            raw.cast::<$first>(),
                        ))
                    }
                }

                /// Borrow the object behind a pointer to its first interface.
                ///
                /// # Safety
                /// `iface` must point at the first table pointer of a live `Self`.
                #[inline]
                $vis unsafe fn from_interface<'a>(iface: *const ::core::ffi::c_void) -> &'a Self {
                    unsafe { &*iface.cast::<Self>() }
                }

                /// Current reference count
                #[inline]
                $vis fn ref_count(&self) -> u32 {
                    self.ref_count.count()
                }
            }

            $crate::impl_iunknown!($name, ref_count, [
                $first => [<vtable_ $first:snake>]
                $(, $rest => [<vtable_ $rest:snake>])*
            ]);
        }
    };
}

#[cfg(test)]
mod tests {
    native_enum! {
        /// Test constant set
        pub struct MODE(u32) {
            MODE_ZERO = 0,
            MODE_ONE = 1,
            MODE_ALIAS = 1,
        }
    }

    #[test]
    fn native_enum_names() {
        assert_eq!(MODE_ONE.0, 1);
        assert_eq!(MODE_ZERO.name(), Some("MODE_ZERO"));
        assert_eq!(MODE(1).name(), Some("MODE_ONE"));
        assert_eq!(format!("{:?}", MODE(7)), "MODE(7)");
        assert_eq!(MODE::VALUES.len(), 3);
        assert_eq!(MODE::default(), MODE_ZERO);
        assert_eq!(u32::from(MODE_ALIAS), 1);
    }
}
