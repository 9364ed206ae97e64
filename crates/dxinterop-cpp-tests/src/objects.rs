//! C++ calling Rust objects through the generated tables

use std::cell::{Cell, RefCell};
use std::ffi::c_void;
use std::rc::Rc;

use comvtable::*;
use dxinterop::d2d1::*;
use dxinterop::dwrite::*;
use dxinterop::foundation::*;

use crate::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn raw<T>(ptr: &ComPtr<T>) -> *mut c_void {
    ptr.as_raw().cast::<c_void>()
}

// -----------------------------------------------------------------------------
// Transforms
// -----------------------------------------------------------------------------

com_object! {
    struct Shift: ID2D1DrawTransform {
        dx: i32,
        dropped: Rc<Cell<bool>>,
    }
}

impl Drop for Shift {
    fn drop(&mut self) {
        self.dropped.set(true);
    }
}

impl ID2D1TransformNodeImpl for Shift {
    fn GetInputCount(&self) -> u32 {
        1
    }
}

impl ID2D1TransformImpl for Shift {
    fn MapOutputRectToInputRects(
        &self,
        _output_rect: *const D2D1_RECT_L,
        _input_rects: *mut D2D1_RECT_L,
        _input_rects_count: u32,
    ) -> HRESULT {
        E_NOTIMPL
    }

    fn MapInputRectsToOutputRect(
        &self,
        _input_rects: *const D2D1_RECT_L,
        _input_opaque_sub_rects: *const D2D1_RECT_L,
        _input_rect_count: u32,
        _output_rect: *mut D2D1_RECT_L,
        _output_opaque_sub_rect: *mut D2D1_RECT_L,
    ) -> HRESULT {
        E_NOTIMPL
    }

    fn MapInvalidRect(
        &self,
        input_index: u32,
        invalid_input_rect: D2D1_RECT_L,
        invalid_output_rect: *mut D2D1_RECT_L,
    ) -> HRESULT {
        if input_index != 0 {
            return E_INVALIDARG;
        }
        let r = invalid_input_rect;
        unsafe {
            *invalid_output_rect = RECT::new(r.left + self.dx, r.top, r.right + self.dx, r.bottom);
        }
        S_OK
    }
}

impl ID2D1DrawTransformImpl for Shift {
    fn SetDrawInfo(&self, draw_info: *mut ID2D1DrawInfo) -> HRESULT {
        if draw_info.is_null() { E_POINTER } else { S_OK }
    }
}

#[test]
fn test_cpp_drives_draw_transform() {
    init();
    let dropped = Rc::new(Cell::new(false));
    let transform = Shift::create(5, dropped.clone());

    let [inputs, status, right, bottom, set_status] = cpp_drive_draw_transform(raw(&transform));
    assert_eq!(inputs, 1);
    assert_eq!(status, S_OK);
    // by-value RECT argument arrived intact
    assert_eq!((right, bottom), (35, 40));
    assert_eq!(set_status, E_POINTER);
}

#[test]
fn test_cpp_query_interface_walks_bases() {
    let transform = Shift::create(0, Rc::new(Cell::new(false)));
    let object = raw(&transform);

    assert_eq!(cpp_query_interface(object, &IID_IUNKNOWN), S_OK);
    assert_eq!(cpp_query_interface(object, &IID_ID2D1TRANSFORMNODE), S_OK);
    assert_eq!(cpp_query_interface(object, &IID_ID2D1TRANSFORM), S_OK);
    assert_eq!(cpp_query_interface(object, &IID_ID2D1DRAWTRANSFORM), S_OK);
    assert_eq!(
        cpp_query_interface(object, &IID_ID2D1COMPUTETRANSFORM),
        E_NOINTERFACE
    );

    let object = unsafe { Shift::from_interface(object) };
    assert_eq!(object.ref_count(), 1);
}

#[test]
fn test_cpp_release_destroys_object() {
    let dropped = Rc::new(Cell::new(false));
    let transform = Shift::create(0, dropped.clone());
    let object = transform.into_raw().cast::<c_void>();

    assert_eq!(cpp_release(object), 0);
    assert!(dropped.get());
}

com_object! {
    struct Offset: ID2D1OffsetTransform {
        offset: Cell<D2D1_POINT_2L>,
    }
}

impl ID2D1TransformNodeImpl for Offset {
    fn GetInputCount(&self) -> u32 {
        1
    }
}

impl ID2D1OffsetTransformImpl for Offset {
    fn SetOffset(&self, offset: D2D1_POINT_2L) {
        self.offset.set(offset);
    }

    fn GetOffset(&self, result: *mut D2D1_POINT_2L) -> *mut D2D1_POINT_2L {
        unsafe { *result = self.offset.get() };
        result
    }
}

#[test]
fn test_cpp_reads_struct_return() {
    let transform = Offset::create(Cell::new(D2D1_POINT_2L::default()));
    transform.set_offset(D2D1_POINT_2L { x: -7, y: 12 });
    assert_eq!(cpp_get_offset(raw(&transform)), (-7, 12));
}

// -----------------------------------------------------------------------------
// Effects
// -----------------------------------------------------------------------------

com_object! {
    struct Counter: ID2D1EffectImpl {
        last_change: Cell<D2D1_CHANGE_TYPE>,
    }
}

impl ID2D1EffectImplImpl for Counter {
    fn Initialize(
        &self,
        _effect_context: *mut ID2D1EffectContext,
        _transform_graph: *mut ID2D1TransformGraph,
    ) -> HRESULT {
        S_OK
    }

    fn PrepareForRender(&self, change_type: D2D1_CHANGE_TYPE) -> HRESULT {
        self.last_change.set(change_type);
        S_OK
    }

    fn SetGraph(&self, _transform_graph: *mut ID2D1TransformGraph) -> HRESULT {
        E_NOTIMPL
    }
}

#[test]
fn test_cpp_drives_effect() {
    let effect = Counter::create(Cell::new(D2D1_CHANGE_TYPE_NONE));
    assert_eq!(cpp_drive_effect(raw(&effect)), [S_OK, E_NOTIMPL]);

    let object = unsafe { Counter::from_interface(raw(&effect)) };
    assert_eq!(object.last_change.get(), D2D1_CHANGE_TYPE_GRAPH);
}

// -----------------------------------------------------------------------------
// DirectWrite
// -----------------------------------------------------------------------------

#[test]
fn test_cpp_notifies_download_listener() {
    init();
    let seen = Rc::new(Cell::new(S_OK));
    let sink = seen.clone();
    let listener = FontDownloadListener::new(move |context, status| {
        sink.set(if context.is_none() { status } else { E_UNEXPECTED });
    });

    cpp_download_completed(raw(&listener), DWRITE_E_DOWNLOADFAILED);
    assert_eq!(seen.get(), DWRITE_E_DOWNLOADFAILED);
}

com_object! {
    struct RecordingSet: IDWriteFontSet {
        calls: RefCell<Vec<String>>,
    }
}

// a panic cannot unwind into C++, so arguments are recorded and checked after
impl RecordingSet {
    fn record(&self, call: impl Into<String>) -> HRESULT {
        self.calls.borrow_mut().push(call.into());
        E_NOTIMPL
    }
}

impl IDWriteFontSetImpl for RecordingSet {
    fn GetFontCount(&self) -> u32 {
        self.record("GetFontCount");
        0
    }

    fn GetFontFaceReference(
        &self,
        _list_index: u32,
        _font_face_reference: *mut *mut IDWriteFontFaceReference,
    ) -> HRESULT {
        self.record("GetFontFaceReference")
    }

    fn FindFontFaceReference(
        &self,
        _font_face_reference: *mut IDWriteFontFaceReference,
        _list_index: *mut u32,
        _exists: *mut BOOL,
    ) -> HRESULT {
        self.record("FindFontFaceReference")
    }

    fn FindFontFace(
        &self,
        _font_face: *mut IDWriteFontFace,
        _list_index: *mut u32,
        _exists: *mut BOOL,
    ) -> HRESULT {
        self.record("FindFontFace")
    }

    fn GetPropertyValues(
        &self,
        _property_id: DWRITE_FONT_PROPERTY_ID,
        _values: *mut *mut IDWriteStringList,
    ) -> HRESULT {
        self.record("GetPropertyValues")
    }

    fn GetPropertyValues2(
        &self,
        _property_id: DWRITE_FONT_PROPERTY_ID,
        preferred_locale_names: PCWSTR,
        _values: *mut *mut IDWriteStringList,
    ) -> HRESULT {
        let locales = unsafe { wide::from_pcwstr(preferred_locale_names) }.unwrap_or_default();
        self.record(format!("GetPropertyValues2({locales})"))
    }

    fn GetPropertyValues3(
        &self,
        list_index: u32,
        _property_id: DWRITE_FONT_PROPERTY_ID,
        _exists: *mut BOOL,
        _values: *mut *mut IDWriteLocalizedStrings,
    ) -> HRESULT {
        self.record(format!("GetPropertyValues3({list_index})"))
    }

    fn GetPropertyOccurrenceCount(
        &self,
        _property: *const DWRITE_FONT_PROPERTY,
        _property_occurrence_count: *mut u32,
    ) -> HRESULT {
        self.record("GetPropertyOccurrenceCount")
    }

    fn GetMatchingFonts(
        &self,
        family_name: PCWSTR,
        font_weight: DWRITE_FONT_WEIGHT,
        _font_stretch: DWRITE_FONT_STRETCH,
        _font_style: DWRITE_FONT_STYLE,
        _filtered_set: *mut *mut IDWriteFontSet,
    ) -> HRESULT {
        let family = unsafe { wide::from_pcwstr(family_name) }.unwrap_or_default();
        self.record(format!("GetMatchingFonts({family}, {})", font_weight.0))
    }

    fn GetMatchingFonts2(
        &self,
        properties: *const DWRITE_FONT_PROPERTY,
        property_count: u32,
        _filtered_set: *mut *mut IDWriteFontSet,
    ) -> HRESULT {
        let id = unsafe { properties.as_ref() }.map_or(0, |property| property.property_id.0);
        self.record(format!("GetMatchingFonts2({id}, {property_count})"))
    }
}

#[test]
fn test_font_set_overloads_match_msvc_slots() {
    init();
    let set = RecordingSet::create(RefCell::new(Vec::new()));
    cpp_call_font_set_overloads(raw(&set));

    let object = unsafe { RecordingSet::from_interface(raw(&set)) };
    assert_eq!(
        *object.calls.borrow(),
        [
            "GetPropertyValues3(0)",
            "GetPropertyValues2(en-us)",
            "GetPropertyValues",
            "GetMatchingFonts(Arial, 400)",
            "GetMatchingFonts2(4, 1)",
        ]
    );
}

com_object! {
    struct RecordingBuilder: IDWriteFontSetBuilder {
        calls: RefCell<Vec<(&'static str, u32)>>,
    }
}

impl IDWriteFontSetBuilderImpl for RecordingBuilder {
    fn AddFontFaceReference(
        &self,
        _font_face_reference: *mut IDWriteFontFaceReference,
        _properties: *const DWRITE_FONT_PROPERTY,
        property_count: u32,
    ) -> HRESULT {
        self.calls
            .borrow_mut()
            .push(("AddFontFaceReference", property_count));
        S_OK
    }

    fn AddFontFaceReference2(&self, _font_face_reference: *mut IDWriteFontFaceReference) -> HRESULT {
        self.calls.borrow_mut().push(("AddFontFaceReference2", 0));
        S_OK
    }

    fn AddFontSet(&self, _font_set: *mut IDWriteFontSet) -> HRESULT {
        self.calls.borrow_mut().push(("AddFontSet", 0));
        S_OK
    }

    fn CreateFontSet(&self, font_set: *mut *mut IDWriteFontSet) -> HRESULT {
        unsafe { *font_set = std::ptr::null_mut() };
        self.calls.borrow_mut().push(("CreateFontSet", 0));
        E_NOTIMPL
    }
}

#[test]
fn test_builder_overloads_match_msvc_slots() {
    let builder = RecordingBuilder::create(RefCell::new(Vec::new()));
    cpp_call_builder_overloads(raw(&builder));

    let object = unsafe { RecordingBuilder::from_interface(raw(&builder)) };
    assert_eq!(
        *object.calls.borrow(),
        [
            ("AddFontFaceReference", 1),
            ("AddFontFaceReference2", 0),
            ("CreateFontSet", 0),
        ]
    );
}
