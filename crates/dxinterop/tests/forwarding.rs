//! Forwarding through generated tables: Rust mock objects stand in for the
//! native implementations, and every call goes through the vtable the way a
//! native caller's would.

#![cfg(all(feature = "d2d1", feature = "dwrite"))]

use comvtable::wide::{from_pcwstr, to_wide};
use comvtable::*;
use dxinterop::d2d1::*;
use dxinterop::dwrite::*;
use dxinterop::foundation::*;
use std::cell::{Cell, RefCell, UnsafeCell};
use std::ffi::c_void;
use std::rc::Rc;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Copy `text` into a native-style `(buffer, size)` pair.
fn write_wide(text: &str, buf: *mut u16, size: u32) -> HRESULT {
    let wide = to_wide(text);
    if wide.len() > size as usize {
        return E_NOT_SUFFICIENT_BUFFER;
    }
    unsafe { std::ptr::copy_nonoverlapping(wide.as_ptr(), buf, wide.len()) };
    S_OK
}

// -----------------------------------------------------------------------------
// IDWriteLocalizedStrings
// -----------------------------------------------------------------------------

com_object! {
    struct Names: IDWriteLocalizedStrings {
        entries: Vec<(&'static str, &'static str)>,
    }
}

impl Names {
    fn entry(&self, index: u32) -> Option<&(&'static str, &'static str)> {
        self.entries.get(index as usize)
    }
}

impl IDWriteLocalizedStringsImpl for Names {
    fn GetCount(&self) -> u32 {
        self.entries.len() as u32
    }

    fn FindLocaleName(&self, locale_name: PCWSTR, index: *mut u32, exists: *mut BOOL) -> HRESULT {
        let Ok(wanted) = (unsafe { from_pcwstr(locale_name) }) else {
            return E_INVALIDARG;
        };
        let found = self
            .entries
            .iter()
            .position(|(locale, _)| locale.eq_ignore_ascii_case(&wanted));
        unsafe {
            *index = found.map_or(u32::MAX, |i| i as u32);
            *exists = to_bool(found.is_some());
        }
        S_OK
    }

    fn GetLocaleNameLength(&self, index: u32, length: *mut u32) -> HRESULT {
        match self.entry(index) {
            Some((locale, _)) => {
                unsafe { *length = locale.encode_utf16().count() as u32 };
                S_OK
            }
            None => E_INVALIDARG,
        }
    }

    fn GetLocaleName(&self, index: u32, locale_name: *mut u16, size: u32) -> HRESULT {
        match self.entry(index) {
            Some((locale, _)) => write_wide(locale, locale_name, size),
            None => E_INVALIDARG,
        }
    }

    fn GetStringLength(&self, index: u32, length: *mut u32) -> HRESULT {
        match self.entry(index) {
            Some((_, text)) => {
                unsafe { *length = text.encode_utf16().count() as u32 };
                S_OK
            }
            None => E_INVALIDARG,
        }
    }

    fn GetString(&self, index: u32, string_buffer: *mut u16, size: u32) -> HRESULT {
        match self.entry(index) {
            Some((_, text)) => write_wide(text, string_buffer, size),
            None => E_INVALIDARG,
        }
    }
}

fn family_names() -> ComPtr<IDWriteLocalizedStrings> {
    init();
    Names::create(vec![("en-us", "Segoe UI"), ("ja-jp", "セゴエ")])
}

#[test]
fn test_localized_strings_read() {
    let names = family_names();
    assert_eq!(names.count(), 2);
    assert_eq!(names.locale_name(1).unwrap(), "ja-jp");
    assert_eq!(names.string(1).unwrap(), "セゴエ");
    assert_eq!(
        names.to_vec().unwrap(),
        [
            ("en-us".to_string(), "Segoe UI".to_string()),
            ("ja-jp".to_string(), "セゴエ".to_string()),
        ]
    );
}

#[test]
fn test_localized_strings_lookup() {
    let names = family_names();
    assert_eq!(names.find_locale_name("EN-US").unwrap(), Some(0));
    assert_eq!(names.find_locale_name("de-de").unwrap(), None);
    assert_eq!(
        names.string_for_locale("de-de").unwrap().as_deref(),
        Some("Segoe UI")
    );

    let empty = Names::create(Vec::new());
    assert_eq!(empty.string_for_locale("en-us").unwrap(), None);
}

#[test]
fn test_failure_status_is_preserved() {
    let names = family_names();
    assert_eq!(
        names.string(7),
        Err(ComError::Native { code: E_INVALIDARG })
    );

    // out-parameters stay as the callee left them, untouched here
    let mut len = 77;
    let hr = unsafe { names.GetStringLength(9, &mut len) };
    assert_eq!(hr, E_INVALIDARG);
    assert_eq!(len, 77);
}

#[test]
fn test_small_buffer_status_passes_through() {
    let names = family_names();
    let mut buf = [0u16; 3];
    let hr = unsafe { names.GetString(0, buf.as_mut_ptr(), buf.len() as u32) };
    assert_eq!(hr, E_NOT_SUFFICIENT_BUFFER);
    assert_eq!(buf, [0; 3]);
}

// -----------------------------------------------------------------------------
// IDWriteFontFaceReference and IDWriteFontSetBuilder
// -----------------------------------------------------------------------------

com_object! {
    struct FaceReference: IDWriteFontFaceReference {
        face_index: u32,
        requested_characters: Cell<u32>,
        requested_fragment: Cell<DWRITE_FILE_FRAGMENT>,
    }
}

impl IDWriteFontFaceReferenceImpl for FaceReference {
    fn CreateFontFace(&self, font_face: *mut *mut IDWriteFontFace3) -> HRESULT {
        unsafe { *font_face = std::ptr::null_mut() };
        DWRITE_E_REMOTEFONT
    }

    fn CreateFontFaceWithSimulations(
        &self,
        _simulations: DWRITE_FONT_SIMULATIONS,
        font_face: *mut *mut IDWriteFontFace3,
    ) -> HRESULT {
        unsafe { *font_face = std::ptr::null_mut() };
        S_OK
    }

    fn Equals(&self, font_face_reference: *mut IDWriteFontFaceReference) -> BOOL {
        let Some(other) = (unsafe { font_face_reference.as_ref() }) else {
            return FALSE;
        };
        to_bool(unsafe { other.GetFontFaceIndex() } == self.face_index)
    }

    fn GetFontFaceIndex(&self) -> u32 {
        self.face_index
    }

    fn GetSimulations(&self) -> DWRITE_FONT_SIMULATIONS {
        DWRITE_FONT_SIMULATIONS::BOLD
    }

    fn GetFontFile(&self, font_file: *mut *mut IDWriteFontFile) -> HRESULT {
        unsafe { *font_file = std::ptr::null_mut() };
        E_NOTIMPL
    }

    fn GetLocalFileSize(&self) -> u64 {
        1024
    }

    fn GetFileSize(&self) -> u64 {
        4096
    }

    fn GetFileTime(&self, last_write_time: *mut FILETIME) -> HRESULT {
        unsafe {
            *last_write_time = FILETIME {
                low_date_time: 5,
                high_date_time: 1,
            }
        };
        S_OK
    }

    fn GetLocality(&self) -> DWRITE_LOCALITY {
        DWRITE_LOCALITY_PARTIAL
    }

    fn EnqueueFontDownloadRequest(&self) -> HRESULT {
        DWRITE_E_TOOMANYDOWNLOADS
    }

    fn EnqueueCharacterDownloadRequest(&self, _characters: *const u16, count: u32) -> HRESULT {
        self.requested_characters.set(count);
        S_OK
    }

    fn EnqueueGlyphDownloadRequest(&self, _glyph_indices: *const u16, _glyph_count: u32) -> HRESULT {
        S_FALSE
    }

    fn EnqueueFileFragmentDownloadRequest(&self, file_offset: u64, fragment_size: u64) -> HRESULT {
        self.requested_fragment.set(DWRITE_FILE_FRAGMENT {
            file_offset,
            fragment_size,
        });
        S_OK
    }
}

fn face_reference(face_index: u32) -> ComPtr<IDWriteFontFaceReference> {
    FaceReference::create(face_index, Cell::new(0), Cell::new(DWRITE_FILE_FRAGMENT::default()))
}

#[test]
fn test_face_reference_values() {
    init();
    let reference = face_reference(3);
    assert_eq!(reference.font_face_index(), 3);
    assert_eq!(reference.simulations(), DWRITE_FONT_SIMULATIONS::BOLD);
    assert_eq!(reference.local_file_size(), 1024);
    assert_eq!(reference.file_size(), 4096);
    assert_eq!(reference.locality(), DWRITE_LOCALITY_PARTIAL);
    assert_eq!(reference.file_time().unwrap().ticks(), (1 << 32) + 5);
    assert!(reference.equals(&face_reference(3)));
    assert!(!reference.equals(&face_reference(4)));
}

#[test]
fn test_face_reference_errors() {
    let reference = face_reference(0);
    assert_eq!(
        reference.create_font_face().unwrap_err(),
        ComError::Native {
            code: DWRITE_E_REMOTEFONT
        }
    );
    // success without a pointer
    assert_eq!(
        reference
            .create_font_face_with_simulations(DWRITE_FONT_SIMULATIONS::NONE)
            .unwrap_err(),
        ComError::NullPointer
    );
    assert_eq!(
        reference.font_file().unwrap_err().code(),
        E_NOTIMPL
    );
    assert_eq!(
        reference.enqueue_font_download(),
        Err(ComError::Native {
            code: DWRITE_E_TOOMANYDOWNLOADS
        })
    );
    assert_eq!(reference.enqueue_glyph_download(&[1, 2, 3]), Ok(()));
}

#[test]
fn test_download_requests_forward_arguments() {
    let reference = face_reference(0);
    reference.enqueue_character_download("a𝄞b").unwrap();
    let object = unsafe { FaceReference::from_interface(reference.as_raw().cast::<c_void>()) };
    // the clef is a surrogate pair
    assert_eq!(object.requested_characters.get(), 4);

    let fragment = DWRITE_FILE_FRAGMENT {
        file_offset: 512,
        fragment_size: 64,
    };
    reference.enqueue_file_fragment_download(fragment).unwrap();
    assert_eq!(object.requested_fragment.get(), fragment);
}

com_object! {
    struct Builder: IDWriteFontSetBuilder {
        added: RefCell<Vec<(u32, usize)>>,
    }
}

impl IDWriteFontSetBuilderImpl for Builder {
    fn AddFontFaceReference(
        &self,
        font_face_reference: *mut IDWriteFontFaceReference,
        _properties: *const DWRITE_FONT_PROPERTY,
        property_count: u32,
    ) -> HRESULT {
        let Some(reference) = (unsafe { font_face_reference.as_ref() }) else {
            return E_INVALIDARG;
        };
        let index = unsafe { reference.GetFontFaceIndex() };
        self.added.borrow_mut().push((index, property_count as usize));
        S_OK
    }

    fn AddFontFaceReference2(&self, font_face_reference: *mut IDWriteFontFaceReference) -> HRESULT {
        self.AddFontFaceReference(font_face_reference, std::ptr::null(), 0)
    }

    fn AddFontSet(&self, _font_set: *mut IDWriteFontSet) -> HRESULT {
        E_NOTIMPL
    }

    fn CreateFontSet(&self, font_set: *mut *mut IDWriteFontSet) -> HRESULT {
        unsafe { *font_set = std::ptr::null_mut() };
        E_OUTOFMEMORY
    }
}

#[test]
fn test_builder_overloads_reach_their_slots() {
    init();
    let builder = Builder::create(RefCell::new(Vec::new()));
    builder.add_font_face_reference(&face_reference(1)).unwrap();

    let family = to_wide("Segoe UI");
    let properties = [DWRITE_FONT_PROPERTY::new(
        DWRITE_FONT_PROPERTY_ID_WIN32_FAMILY_NAME,
        &family,
        None,
    )];
    builder
        .add_font_face_reference_with_properties(&face_reference(2), &properties)
        .unwrap();

    let object = unsafe { Builder::from_interface(builder.as_raw().cast::<c_void>()) };
    assert_eq!(*object.added.borrow(), [(1, 0), (2, 1)]);
    assert_eq!(
        builder.create_font_set().unwrap_err(),
        ComError::Native {
            code: E_OUTOFMEMORY
        }
    );
}

// -----------------------------------------------------------------------------
// IDWriteFontDownloadQueue and FontDownloadListener
// -----------------------------------------------------------------------------

com_object! {
    struct Queue: IDWriteFontDownloadQueue {
        listeners: RefCell<Vec<(u32, ComPtr<IDWriteFontDownloadListener>)>>,
        next_token: Cell<u32>,
        generation: Cell<u64>,
    }
}

impl IDWriteFontDownloadQueueImpl for Queue {
    fn AddListener(&self, listener: *mut IDWriteFontDownloadListener, token: *mut u32) -> HRESULT {
        let Some(listener) = (unsafe { listener.as_ref() }) else {
            return E_INVALIDARG;
        };
        let next = self.next_token.get();
        self.next_token.set(next + 1);
        self.listeners.borrow_mut().push((next, ComPtr::from_ref(listener)));
        unsafe { *token = next };
        S_OK
    }

    fn RemoveListener(&self, token: u32) -> HRESULT {
        let mut listeners = self.listeners.borrow_mut();
        match listeners.iter().position(|(t, _)| *t == token) {
            Some(i) => {
                listeners.remove(i);
                S_OK
            }
            None => E_INVALIDARG,
        }
    }

    fn IsEmpty(&self) -> BOOL {
        TRUE
    }

    fn BeginDownload(&self, context: *mut IUnknown) -> HRESULT {
        self.generation.set(self.generation.get() + 1);
        let this = (self as *const Self).cast_mut().cast::<IDWriteFontDownloadQueue>();
        let listeners: Vec<_> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            unsafe { listener.DownloadCompleted(this, context, DWRITE_E_DOWNLOADFAILED) };
        }
        S_OK
    }

    fn CancelDownload(&self) -> HRESULT {
        DWRITE_E_DOWNLOADCANCELLED
    }

    fn GetGenerationCount(&self) -> u64 {
        self.generation.get()
    }
}

fn queue() -> ComPtr<IDWriteFontDownloadQueue> {
    init();
    Queue::create(RefCell::new(Vec::new()), Cell::new(1), Cell::new(0))
}

#[test]
fn test_listener_receives_status_and_context() {
    let queue = queue();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let listener = {
        let seen = seen.clone();
        FontDownloadListener::new(move |context, status| {
            seen.borrow_mut().push((context.map(|c| c.as_raw() as usize), status));
        })
    };

    let token = queue.add_listener(&listener).unwrap();
    assert_eq!(token, 1);

    let context = family_names();
    queue.begin_download(Some(context.as_unknown())).unwrap();
    queue.begin_download(None).unwrap();

    assert_eq!(
        *seen.borrow(),
        [
            (Some(context.as_raw() as usize), DWRITE_E_DOWNLOADFAILED),
            (None, DWRITE_E_DOWNLOADFAILED),
        ]
    );
    assert_eq!(queue.generation_count(), 2);
    queue.remove_listener(token).unwrap();
}

#[test]
fn test_registration_guard_removes_listener() {
    let queue = queue();
    let calls = Rc::new(Cell::new(0));
    let listener = {
        let calls = calls.clone();
        FontDownloadListener::new(move |_, _| calls.set(calls.get() + 1))
    };

    {
        let registration = queue.register(&listener).unwrap();
        assert_eq!(registration.token(), 1);
        queue.begin_download(None).unwrap();
    }
    queue.begin_download(None).unwrap();
    assert_eq!(calls.get(), 1);
    assert_eq!(
        queue.remove_listener(1),
        Err(ComError::Native { code: E_INVALIDARG })
    );
}

#[test]
fn test_listener_is_released_with_queue() {
    let queue = queue();
    let listener = FontDownloadListener::new(|_, _| {});
    queue.add_listener(&listener).unwrap();
    let object = unsafe { FontDownloadListener::from_interface(listener.as_raw().cast::<c_void>()) };
    assert_eq!(object.ref_count(), 2);
    drop(queue);
    assert_eq!(object.ref_count(), 1);
}

#[test]
fn test_cancel_status_passes_through() {
    let queue = queue();
    assert!(queue.is_empty());
    assert_eq!(
        queue.cancel_download().unwrap_err().code(),
        DWRITE_E_DOWNLOADCANCELLED
    );
}

// -----------------------------------------------------------------------------
// Direct2D: vertex buffer mapping and struct-returning slots
// -----------------------------------------------------------------------------

com_object! {
    struct VertexBuffer: ID2D1VertexBuffer {
        data: UnsafeCell<[u8; 16]>,
        unmapped: Cell<u32>,
    }
}

impl ID2D1VertexBufferImpl for VertexBuffer {
    fn Map(&self, data: *mut *mut u8, buffer_size: u32) -> HRESULT {
        if buffer_size > 16 {
            return E_INVALIDARG;
        }
        unsafe { *data = self.data.get().cast::<u8>() };
        S_OK
    }

    fn Unmap(&self) -> HRESULT {
        self.unmapped.set(self.unmapped.get() + 1);
        S_OK
    }
}

#[test]
fn test_mapped_vertex_buffer_unmaps_on_drop() {
    init();
    let buffer = VertexBuffer::create(UnsafeCell::new([0; 16]), Cell::new(0));
    let object = unsafe { VertexBuffer::from_interface(buffer.as_raw().cast::<c_void>()) };
    {
        let mut mapped = buffer.map(4).unwrap();
        assert_eq!(mapped.len(), 4);
        mapped.copy_from_slice(&[1, 2, 3, 4]);
        assert_eq!(object.unmapped.get(), 0);
    }
    assert_eq!(object.unmapped.get(), 1);
    assert_eq!(unsafe { (&(*object.data.get()))[..5].to_vec() }, [1, 2, 3, 4, 0]);

    assert!(matches!(
        buffer.map(32),
        Err(ComError::Native { code: E_INVALIDARG })
    ));
    assert_eq!(object.unmapped.get(), 1);
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
fn test_struct_return_uses_hidden_pointer() {
    let transform = Offset::create(Cell::new(D2D1_POINT_2L::default()));
    transform.set_offset(D2D1_POINT_2L { x: -3, y: 9 });
    assert_eq!(transform.offset(), D2D1_POINT_2L { x: -3, y: 9 });
    assert_eq!(transform.input_count(), 1);

    let mut slot = D2D1_POINT_2L::default();
    let returned = unsafe { transform.GetOffset(&mut slot) };
    assert_eq!(returned, std::ptr::addr_of_mut!(slot));

    let node: ComPtr<ID2D1TransformNode> = transform.cast().unwrap();
    assert_eq!(node.as_raw() as usize, transform.as_raw() as usize);
    assert!(transform.cast::<ID2D1BlendTransform>().is_err());
}
