//! Direct2D effect-authoring and DirectWrite font-set bindings
//!
//! Every interface is a literal transcription of its SDK header: the same
//! methods in the same slot order, named as in the header, with
//! `extern "system"` slots. Forwarding methods are `unsafe` and return the
//! native status untouched. Hand-written safe wrappers with snake_case names
//! sit on top and return [`comvtable::Result`].
//!
//! ## Modules
//! - [`foundation`] - Win32, DXGI and D3D value types shared by both APIs
//! - [`d2d1`] - `d2d1effectauthor.h` / `d2d1effectauthor_1.h` (feature `d2d1`)
//! - [`dwrite`] - `dwrite.h` / `dwrite_3.h` font sets and collections (feature `dwrite`)
//! - [`catalog`] - slot maps and struct layouts of everything above

#![allow(non_camel_case_types)]

pub mod catalog;
pub mod foundation;

#[cfg(feature = "d2d1")]
pub mod d2d1;

#[cfg(feature = "dwrite")]
pub mod dwrite;

pub use comvtable::{ComError, ComPtr, GUID, HRESULT, IUnknown, Result};
