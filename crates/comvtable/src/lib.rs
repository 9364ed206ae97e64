//! COM vtable interop for Rust
//!
//! Native COM interfaces are a pointer to a pointer to a table of
//! `extern "system"` functions. This crate provides the pieces every binding
//! needs on both sides of that table:
//!
//! ## Calling native objects
//! ```ignore
//! use comvtable::*;
//!
//! #[com_interface("cfee3140-1157-47ca-8b85-31bfcf3f2d0e")]
//! pub trait IDWriteStringList {
//!     fn GetCount(&self) -> u32;
//! }
//!
//! let list: ComPtr<IDWriteStringList> = unsafe { ComPtr::from_raw(raw) }.unwrap();
//! let count = unsafe { list.GetCount() };
//! ```
//!
//! ## Exposing Rust objects
//! ```ignore
//! com_object! {
//!     pub struct Strings: IDWriteStringList {
//!         items: Vec<String>,
//!     }
//! }
//!
//! impl IDWriteStringListImpl for Strings {
//!     fn GetCount(&self) -> u32 { self.items.len() as u32 }
//! }
//!
//! let list: ComPtr<IDWriteStringList> = Strings::create(vec![]);
//! ```
//!
//! ## Modules
//! - [`com`] - `GUID`, `HRESULT`, `IUnknown`, `ComRefCount`, `ComInterface`
//! - [`ptr`] - `ComPtr`, the owning pointer
//! - [`error`] - `ComError` and status checks for safe wrappers
//! - [`layout`] - slot maps and struct layouts
//! - [`wide`] - UTF-16 helpers
//! - [`decl`] - `native_enum!`, `foreign_interface!`, `impl_iunknown!`, `com_object!`

pub mod com;
pub mod decl;
pub mod error;
pub mod layout;
pub mod ptr;
pub mod wide;

#[cfg(feature = "windows-compat")]
mod compat;

pub use com::*;
pub use comvtable_macro::com_interface;
pub use error::{ComError, Result, check, check_call, len_u32};
pub use layout::{InterfaceDescriptor, StructLayout, VTableLayout};
pub use ptr::ComPtr;

// Re-exports for macro-generated code
#[doc(hidden)]
pub use log;
#[doc(hidden)]
pub use paste::paste;
