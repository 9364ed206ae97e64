//! Virtual table layout metadata
//!
//! Every `#[com_interface]` handle knows its flattened slot list: `IUnknown`
//! first, then each base, then its own methods. [`InterfaceDescriptor`] and
//! [`StructLayout`] turn that (and plain struct layouts) into values that can
//! be listed, printed and compared against native headers.

use std::mem::{align_of, size_of};

use crate::com::{ComInterface, GUID};

/// Slot layout of a COM interface table.
///
/// # Safety
/// `VTable` must be `#[repr(C)]` and consist of exactly `SLOT_COUNT`
/// function pointers, in the order `slot_names` reports.
pub unsafe trait VTableLayout {
    /// The `#[repr(C)]` table type
    type VTable;

    /// Total slots, inherited ones included
    const SLOT_COUNT: usize;

    /// Names of the slots this interface adds, in order
    const OWN_SLOTS: &'static [&'static str];

    /// Names of all slots, base interfaces first
    fn slot_names() -> Vec<&'static str>;

    /// Index of the first slot this interface adds
    #[must_use]
    fn first_own_slot() -> usize {
        Self::SLOT_COUNT - Self::OWN_SLOTS.len()
    }

    /// Slot index of a method by native name.
    ///
    /// A name redeclared by a derived interface resolves to the most-derived
    /// slot, the one the handle's own forwarding method calls.
    #[must_use]
    fn slot_of(method: &str) -> Option<usize> {
        Self::slot_names().iter().rposition(|name| *name == method)
    }
}

/// Name, IID and slot map of one interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDescriptor {
    pub name: &'static str,
    pub iid: GUID,
    pub slots: Vec<&'static str>,
}

impl InterfaceDescriptor {
    /// Describe a `#[com_interface]` handle type.
    #[must_use]
    pub fn of<I: ComInterface + VTableLayout>() -> Self {
        Self {
            name: I::NAME,
            iid: I::IID,
            slots: I::slot_names(),
        }
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// See [`VTableLayout::slot_of`].
    #[must_use]
    pub fn slot_of(&self, method: &str) -> Option<usize> {
        self.slots.iter().rposition(|name| *name == method)
    }
}

/// Size and alignment of a value structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructLayout {
    pub name: &'static str,
    pub size: usize,
    pub align: usize,
}

impl StructLayout {
    /// Layout of `T`, named by its last path segment.
    #[must_use]
    pub fn of<T>() -> Self {
        let full = std::any::type_name::<T>();
        Self {
            name: full.rsplit("::").next().unwrap_or(full),
            size: size_of::<T>(),
            align: align_of::<T>(),
        }
    }
}
