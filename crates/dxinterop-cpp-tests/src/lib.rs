//! Conformance of dxinterop against the Windows SDK headers
//!
//! The C++ half is compiled by MSVC against `d2d1effectauthor_1.h` and
//! `dwrite_3.h`. It reports native sizes, offsets, constant values and IIDs,
//! and calls Rust objects through the generated tables as Direct2D and
//! DirectWrite would.
//!
//! Run with: `cargo test -p dxinterop-cpp-tests` (Windows, MSVC)

#![cfg(windows)]

use comvtable::{GUID, HRESULT};
use cpp::cpp;
use std::ffi::c_void;

#[cfg(test)]
mod layout;
#[cfg(test)]
mod objects;

cpp! {{
    #include <windows.h>
    #include <cstddef>
    #include <cstdint>
    #include <d2d1_3.h>
    #include <d2d1effectauthor_1.h>
    #include <dwrite_3.h>
}}

pub const STRUCT_COUNT: usize = 23;
pub const OFFSET_COUNT: usize = 20;
pub const CONSTANT_COUNT: usize = 32;
pub const INTERFACE_COUNT: usize = 35;
pub const FOREIGN_COUNT: usize = 11;

/// `sizeof` of every value structure, foundation first, then Direct2D, then
/// DirectWrite, in header order.
pub fn native_struct_sizes() -> [usize; STRUCT_COUNT] {
    let mut out = [0usize; STRUCT_COUNT];
    let out_ptr = out.as_mut_ptr();
    unsafe {
        cpp!([out_ptr as "size_t*"] {
            size_t* p = out_ptr;
            *p++ = sizeof(RECT);
            *p++ = sizeof(POINT);
            *p++ = sizeof(D2D1_POINT_2U);
            *p++ = sizeof(D2D1_POINT_2F);
            *p++ = sizeof(FILETIME);
            *p++ = sizeof(D2D1_PROPERTY_BINDING);
            *p++ = sizeof(D2D1_RESOURCE_TEXTURE_PROPERTIES);
            *p++ = sizeof(D2D1_INPUT_ELEMENT_DESC);
            *p++ = sizeof(D2D1_VERTEX_BUFFER_PROPERTIES);
            *p++ = sizeof(D2D1_CUSTOM_VERTEX_BUFFER_PROPERTIES);
            *p++ = sizeof(D2D1_VERTEX_RANGE);
            *p++ = sizeof(D2D1_BLEND_DESCRIPTION);
            *p++ = sizeof(D2D1_INPUT_DESCRIPTION);
            *p++ = sizeof(D2D1_FEATURE_DATA_DOUBLES);
            *p++ = sizeof(D2D1_FEATURE_DATA_D3D10_X_HARDWARE_OPTIONS);
            *p++ = sizeof(D2D1_SIMPLE_COLOR_PROFILE);
            *p++ = sizeof(DWRITE_FONT_PROPERTY);
            *p++ = sizeof(DWRITE_LINE_METRICS);
            *p++ = sizeof(DWRITE_LINE_METRICS1);
            *p++ = sizeof(DWRITE_LINE_SPACING);
            *p++ = sizeof(DWRITE_FONT_AXIS_VALUE);
            *p++ = sizeof(DWRITE_FONT_AXIS_RANGE);
            *p++ = sizeof(DWRITE_FILE_FRAGMENT);
        })
    };
    out
}

/// `offsetof` of selected fields, in the order `layout::OFFSETS` lists them.
pub fn native_field_offsets() -> [usize; OFFSET_COUNT] {
    let mut out = [0usize; OFFSET_COUNT];
    let out_ptr = out.as_mut_ptr();
    unsafe {
        cpp!([out_ptr as "size_t*"] {
            size_t* p = out_ptr;
            *p++ = offsetof(D2D1_PROPERTY_BINDING, setFunction);
            *p++ = offsetof(D2D1_PROPERTY_BINDING, getFunction);
            *p++ = offsetof(D2D1_RESOURCE_TEXTURE_PROPERTIES, dimensions);
            *p++ = offsetof(D2D1_RESOURCE_TEXTURE_PROPERTIES, extendModes);
            *p++ = offsetof(D2D1_INPUT_ELEMENT_DESC, format);
            *p++ = offsetof(D2D1_INPUT_ELEMENT_DESC, alignedByteOffset);
            *p++ = offsetof(D2D1_VERTEX_BUFFER_PROPERTIES, data);
            *p++ = offsetof(D2D1_VERTEX_BUFFER_PROPERTIES, byteWidth);
            *p++ = offsetof(D2D1_CUSTOM_VERTEX_BUFFER_PROPERTIES, inputElements);
            *p++ = offsetof(D2D1_CUSTOM_VERTEX_BUFFER_PROPERTIES, stride);
            *p++ = offsetof(D2D1_BLEND_DESCRIPTION, blendOperationAlpha);
            *p++ = offsetof(D2D1_BLEND_DESCRIPTION, blendFactor);
            *p++ = offsetof(D2D1_SIMPLE_COLOR_PROFILE, whitePointXZ);
            *p++ = offsetof(D2D1_SIMPLE_COLOR_PROFILE, gamma);
            *p++ = offsetof(DWRITE_FONT_PROPERTY, propertyValue);
            *p++ = offsetof(DWRITE_FONT_PROPERTY, localeName);
            *p++ = offsetof(DWRITE_LINE_METRICS1, isTrimmed);
            *p++ = offsetof(DWRITE_LINE_METRICS1, leadingAfter);
            *p++ = offsetof(DWRITE_LINE_SPACING, fontLineGapUsage);
            *p++ = offsetof(DWRITE_FILE_FRAGMENT, fragmentSize);
        })
    };
    out
}

/// Values of selected constants, in the order `layout::CONSTANTS` lists them.
pub fn native_constants() -> [u32; CONSTANT_COUNT] {
    let mut out = [0u32; CONSTANT_COUNT];
    let out_ptr = out.as_mut_ptr();
    unsafe {
        cpp!([out_ptr as "uint32_t*"] {
            uint32_t* p = out_ptr;
            *p++ = D2D1_FILTER_MIN_MAG_MIP_LINEAR;
            *p++ = D2D1_FILTER_ANISOTROPIC;
            *p++ = D2D1_FEATURE_D3D10_X_HARDWARE_OPTIONS;
            *p++ = D2D1_CHANNEL_DEPTH_4;
            *p++ = D2D1_CHANGE_TYPE_GRAPH;
            *p++ = D2D1_PIXEL_OPTIONS_TRIVIAL_SAMPLING;
            *p++ = D2D1_VERTEX_OPTIONS_ASSUME_NO_OVERLAP;
            *p++ = D2D1_VERTEX_USAGE_DYNAMIC;
            *p++ = D2D1_BLEND_OPERATION_MAX;
            *p++ = D2D1_BLEND_INV_BLEND_FACTOR;
            *p++ = D2D1_EXTEND_MODE_MIRROR;
            *p++ = D2D1_BUFFER_PRECISION_32BPC_FLOAT;
            *p++ = D2D1_COLOR_SPACE_SCRGB;
            *p++ = D2D1_GAMMA1_G2084;
            *p++ = D3D_FEATURE_LEVEL_11_1;
            *p++ = DXGI_FORMAT_B8G8R8A8_UNORM;
            *p++ = DXGI_COLOR_SPACE_RGB_FULL_G2084_NONE_P2020;
            *p++ = DWRITE_FONT_WEIGHT_SEMI_LIGHT;
            *p++ = DWRITE_FONT_STRETCH_ULTRA_EXPANDED;
            *p++ = DWRITE_FONT_STYLE_ITALIC;
            *p++ = DWRITE_FONT_PROPERTY_ID_TYPOGRAPHIC_FACE_NAME;
            *p++ = DWRITE_LOCALITY_LOCAL;
            *p++ = DWRITE_RENDERING_MODE1_NATURAL_SYMMETRIC_DOWNSAMPLED;
            *p++ = DWRITE_FONT_LINE_GAP_USAGE_ENABLED;
            *p++ = DWRITE_LINE_SPACING_METHOD_PROPORTIONAL;
            *p++ = DWRITE_FONT_FAMILY_MODEL_WEIGHT_STRETCH_STYLE;
            *p++ = DWRITE_FONT_AXIS_TAG_OPTICAL_SIZE;
            *p++ = DWRITE_FONT_SOURCE_TYPE_REMOTE_FONT_PROVIDER;
            *p++ = DWRITE_CONTAINER_TYPE_WOFF2;
            *p++ = DWRITE_FONT_SIMULATIONS_OBLIQUE;
            *p++ = DWRITE_FONT_AXIS_ATTRIBUTES_HIDDEN;
            *p++ = DWRITE_GLYPH_IMAGE_FORMATS_PREMULTIPLIED_B8G8R8A8;
        })
    };
    out
}

/// `__uuidof` of every transcribed interface, in `dxinterop::catalog` order.
pub fn native_interface_iids() -> [GUID; INTERFACE_COUNT] {
    let mut out = [GUID::ZERO; INTERFACE_COUNT];
    let out_ptr = out.as_mut_ptr();
    unsafe {
        cpp!([out_ptr as "GUID*"] {
            GUID* p = out_ptr;
            *p++ = __uuidof(IUnknown);
            *p++ = __uuidof(ID2D1VertexBuffer);
            *p++ = __uuidof(ID2D1ResourceTexture);
            *p++ = __uuidof(ID2D1RenderInfo);
            *p++ = __uuidof(ID2D1DrawInfo);
            *p++ = __uuidof(ID2D1ComputeInfo);
            *p++ = __uuidof(ID2D1TransformNode);
            *p++ = __uuidof(ID2D1TransformGraph);
            *p++ = __uuidof(ID2D1Transform);
            *p++ = __uuidof(ID2D1DrawTransform);
            *p++ = __uuidof(ID2D1ComputeTransform);
            *p++ = __uuidof(ID2D1AnalysisTransform);
            *p++ = __uuidof(ID2D1SourceTransform);
            *p++ = __uuidof(ID2D1ConcreteTransform);
            *p++ = __uuidof(ID2D1BlendTransform);
            *p++ = __uuidof(ID2D1BorderTransform);
            *p++ = __uuidof(ID2D1OffsetTransform);
            *p++ = __uuidof(ID2D1BoundsAdjustmentTransform);
            *p++ = __uuidof(ID2D1EffectImpl);
            *p++ = __uuidof(ID2D1EffectContext);
            *p++ = __uuidof(ID2D1EffectContext1);
            *p++ = __uuidof(ID2D1EffectContext2);
            *p++ = __uuidof(IDWriteLocalizedStrings);
            *p++ = __uuidof(IDWriteFontCollection);
            *p++ = __uuidof(IDWriteFontCollection1);
            *p++ = __uuidof(IDWriteFontList);
            *p++ = __uuidof(IDWriteFontList1);
            *p++ = __uuidof(IDWriteFontFamily);
            *p++ = __uuidof(IDWriteFontFamily1);
            *p++ = __uuidof(IDWriteStringList);
            *p++ = __uuidof(IDWriteFontSet);
            *p++ = __uuidof(IDWriteFontSetBuilder);
            *p++ = __uuidof(IDWriteFontFaceReference);
            *p++ = __uuidof(IDWriteFontDownloadListener);
            *p++ = __uuidof(IDWriteFontDownloadQueue);
        })
    };
    out
}

/// `__uuidof` of the interfaces referenced but not transcribed.
pub fn native_foreign_iids() -> [GUID; FOREIGN_COUNT] {
    let mut out = [GUID::ZERO; FOREIGN_COUNT];
    let out_ptr = out.as_mut_ptr();
    unsafe {
        cpp!([out_ptr as "GUID*"] {
            GUID* p = out_ptr;
            *p++ = __uuidof(ID2D1Effect);
            *p++ = __uuidof(ID2D1Bitmap1);
            *p++ = __uuidof(ID2D1ColorContext);
            *p++ = __uuidof(ID2D1ColorContext1);
            *p++ = __uuidof(ID2D1LookupTable3D);
            *p++ = __uuidof(IWICColorContext);
            *p++ = __uuidof(IDWriteFont);
            *p++ = __uuidof(IDWriteFont3);
            *p++ = __uuidof(IDWriteFontFace);
            *p++ = __uuidof(IDWriteFontFace3);
            *p++ = __uuidof(IDWriteFontFile);
        })
    };
    out
}

// =============================================================================
// C++ callers of Rust objects
// =============================================================================

/// `QueryInterface` for `iid` from C++, releasing the result. Returns the status.
pub fn cpp_query_interface(object: *mut c_void, iid: &GUID) -> HRESULT {
    let iid_ptr: *const GUID = iid;
    unsafe {
        cpp!([object as "IUnknown*", iid_ptr as "const GUID*"] -> HRESULT as "HRESULT" {
            void* out = nullptr;
            HRESULT hr = object->QueryInterface(*iid_ptr, &out);
            if (SUCCEEDED(hr) && out) {
                static_cast<IUnknown*>(out)->Release();
            }
            return hr;
        })
    }
}

pub fn cpp_release(object: *mut c_void) -> u32 {
    unsafe {
        cpp!([object as "IUnknown*"] -> u32 as "ULONG" {
            return object->Release();
        })
    }
}

/// Drive a draw transform: input count, invalid-rect mapping, and
/// `SetDrawInfo(nullptr)`. Returns `[input_count, map_status, right, bottom,
/// set_draw_info_status]`.
pub fn cpp_drive_draw_transform(transform: *mut c_void) -> [i32; 5] {
    let mut out = [0i32; 5];
    let out_ptr = out.as_mut_ptr();
    unsafe {
        cpp!([transform as "ID2D1DrawTransform*", out_ptr as "int32_t*"] {
            D2D1_RECT_L invalid = { 1, 2, 30, 40 };
            D2D1_RECT_L mapped = {};
            out_ptr[0] = (int32_t)transform->GetInputCount();
            out_ptr[1] = transform->MapInvalidRect(0, invalid, &mapped);
            out_ptr[2] = mapped.right;
            out_ptr[3] = mapped.bottom;
            out_ptr[4] = transform->SetDrawInfo(nullptr);
        })
    };
    out
}

/// `GetOffset` as MSVC calls it: a by-value struct return.
pub fn cpp_get_offset(transform: *mut c_void) -> (i32, i32) {
    let mut point = [0i32; 2];
    let point_ptr = point.as_mut_ptr();
    unsafe {
        cpp!([transform as "ID2D1OffsetTransform*", point_ptr as "int32_t*"] {
            D2D1_POINT_2L offset = transform->GetOffset();
            point_ptr[0] = offset.x;
            point_ptr[1] = offset.y;
        })
    };
    (point[0], point[1])
}

/// `PrepareForRender(D2D1_CHANGE_TYPE_GRAPH)` then `SetGraph(nullptr)`.
pub fn cpp_drive_effect(effect: *mut c_void) -> [HRESULT; 2] {
    let mut out = [0; 2];
    let out_ptr = out.as_mut_ptr();
    unsafe {
        cpp!([effect as "ID2D1EffectImpl*", out_ptr as "HRESULT*"] {
            out_ptr[0] = effect->PrepareForRender(D2D1_CHANGE_TYPE_GRAPH);
            out_ptr[1] = effect->SetGraph(nullptr);
        })
    };
    out
}

pub fn cpp_download_completed(listener: *mut c_void, status: HRESULT) {
    unsafe {
        cpp!([listener as "IDWriteFontDownloadListener*", status as "HRESULT"] {
            listener->DownloadCompleted(nullptr, nullptr, status);
        })
    }
}

/// Call every `IDWriteFontSet` overload once, in header declaration order.
pub fn cpp_call_font_set_overloads(font_set: *mut c_void) {
    unsafe {
        cpp!([font_set as "IDWriteFontSet*"] {
            BOOL exists = FALSE;
            IDWriteLocalizedStrings* strings = nullptr;
            IDWriteStringList* list = nullptr;
            IDWriteFontSet* filtered = nullptr;
            DWRITE_FONT_PROPERTY property = { DWRITE_FONT_PROPERTY_ID_FULL_NAME, L"Arial", nullptr };

            font_set->GetPropertyValues(0, DWRITE_FONT_PROPERTY_ID_FULL_NAME, &exists, &strings);
            font_set->GetPropertyValues(DWRITE_FONT_PROPERTY_ID_FULL_NAME, L"en-us", &list);
            font_set->GetPropertyValues(DWRITE_FONT_PROPERTY_ID_FULL_NAME, &list);
            font_set->GetMatchingFonts(L"Arial", DWRITE_FONT_WEIGHT_NORMAL,
                DWRITE_FONT_STRETCH_NORMAL, DWRITE_FONT_STYLE_NORMAL, &filtered);
            font_set->GetMatchingFonts(&property, 1, &filtered);
        })
    }
}

/// Both `IDWriteFontSetBuilder::AddFontFaceReference` overloads, then
/// `CreateFontSet`.
pub fn cpp_call_builder_overloads(builder: *mut c_void) {
    unsafe {
        cpp!([builder as "IDWriteFontSetBuilder*"] {
            DWRITE_FONT_PROPERTY property = { DWRITE_FONT_PROPERTY_ID_WEIGHT, L"700", nullptr };
            IDWriteFontSet* created = nullptr;
            builder->AddFontFaceReference(nullptr, &property, 1);
            builder->AddFontFaceReference(nullptr);
            builder->CreateFontSet(&created);
        })
    }
}
