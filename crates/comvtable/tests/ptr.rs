//! Tests for ComPtr ownership

use comvtable::*;
use std::cell::Cell;
use std::ffi::c_void;
use std::rc::Rc;

#[com_interface("6a1b2c3d-0000-4000-8000-000000000021")]
pub trait IValue {
    fn Value(&self) -> u32;
}

com_object! {
    struct Holder: IValue {
        value: u32,
        releases: Rc<Cell<u32>>,
    }
}

impl Drop for Holder {
    fn drop(&mut self) {
        self.releases.set(self.releases.get() + 1);
    }
}

impl IValueImpl for Holder {
    fn Value(&self) -> u32 {
        self.value
    }
}

fn count(ptr: &ComPtr<IValue>) -> u32 {
    unsafe { Holder::from_interface(ptr.as_raw().cast::<c_void>()) }.ref_count()
}

#[test]
fn test_clone_and_drop_balance() {
    let destroyed = Rc::new(Cell::new(0));
    let first = Holder::create(3, destroyed.clone());
    let copies: Vec<_> = (0..4).map(|_| first.clone()).collect();
    assert_eq!(count(&first), 5);
    drop(copies);
    assert_eq!(count(&first), 1);
    assert_eq!(destroyed.get(), 0);
    drop(first);
    assert_eq!(destroyed.get(), 1);
}

#[test]
fn test_into_raw_and_back() {
    let destroyed = Rc::new(Cell::new(0));
    let value = Holder::create(8, destroyed.clone());
    let raw = value.into_raw();
    assert_eq!(destroyed.get(), 0);

    let value = unsafe { ComPtr::from_raw(raw) }.unwrap();
    assert_eq!(unsafe { value.Value() }, 8);
    drop(value);
    assert_eq!(destroyed.get(), 1);
}

#[test]
fn test_from_raw_null() {
    assert!(unsafe { ComPtr::<IValue>::from_raw(std::ptr::null_mut()) }.is_none());
}

#[test]
fn test_from_ref_takes_reference() {
    let destroyed = Rc::new(Cell::new(0));
    let value = Holder::create(1, destroyed.clone());
    let borrowed: &IValue = &value;
    let owned = ComPtr::from_ref(borrowed);
    assert_eq!(count(&value), 2);
    drop(owned);
    assert_eq!(count(&value), 1);
}

#[test]
fn test_from_out_param() {
    let destroyed = Rc::new(Cell::new(0));
    let produced = unsafe {
        ComPtr::<IValue>::from_out_param(|out| {
            *out = Holder::create(42, destroyed.clone()).into_raw();
            S_OK
        })
    }
    .unwrap();
    assert_eq!(unsafe { produced.Value() }, 42);
    drop(produced);
    assert_eq!(destroyed.get(), 1);
}

#[test]
fn test_from_out_param_failure_and_null() {
    let failed = unsafe { ComPtr::<IValue>::from_out_param(|_| E_OUTOFMEMORY) };
    assert_eq!(
        failed.unwrap_err(),
        ComError::Native {
            code: E_OUTOFMEMORY
        }
    );

    let empty = unsafe { ComPtr::<IValue>::from_out_param(|_| S_FALSE) };
    assert_eq!(empty.unwrap_err(), ComError::NullPointer);
}

#[test]
fn test_debug_names_interface() {
    let value = Holder::create(0, Rc::new(Cell::new(0)));
    assert!(format!("{:?}", value).starts_with("ComPtr<IValue>("));
}
