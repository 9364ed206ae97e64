//! Sizes, offsets, constants and IIDs against the SDK headers

use std::mem::{offset_of, size_of};

use dxinterop::catalog;
use dxinterop::d2d1::*;
use dxinterop::dwrite::*;
use dxinterop::foundation::*;

use crate::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Same order as `native_struct_sizes`
fn rust_struct_sizes() -> [(&'static str, usize); STRUCT_COUNT] {
    [
        ("RECT", size_of::<RECT>()),
        ("POINT", size_of::<POINT>()),
        ("D2D1_POINT_2U", size_of::<D2D1_POINT_2U>()),
        ("D2D1_POINT_2F", size_of::<D2D1_POINT_2F>()),
        ("FILETIME", size_of::<FILETIME>()),
        ("D2D1_PROPERTY_BINDING", size_of::<D2D1_PROPERTY_BINDING>()),
        ("D2D1_RESOURCE_TEXTURE_PROPERTIES", size_of::<D2D1_RESOURCE_TEXTURE_PROPERTIES>()),
        ("D2D1_INPUT_ELEMENT_DESC", size_of::<D2D1_INPUT_ELEMENT_DESC>()),
        ("D2D1_VERTEX_BUFFER_PROPERTIES", size_of::<D2D1_VERTEX_BUFFER_PROPERTIES>()),
        (
            "D2D1_CUSTOM_VERTEX_BUFFER_PROPERTIES",
            size_of::<D2D1_CUSTOM_VERTEX_BUFFER_PROPERTIES>(),
        ),
        ("D2D1_VERTEX_RANGE", size_of::<D2D1_VERTEX_RANGE>()),
        ("D2D1_BLEND_DESCRIPTION", size_of::<D2D1_BLEND_DESCRIPTION>()),
        ("D2D1_INPUT_DESCRIPTION", size_of::<D2D1_INPUT_DESCRIPTION>()),
        ("D2D1_FEATURE_DATA_DOUBLES", size_of::<D2D1_FEATURE_DATA_DOUBLES>()),
        (
            "D2D1_FEATURE_DATA_D3D10_X_HARDWARE_OPTIONS",
            size_of::<D2D1_FEATURE_DATA_D3D10_X_HARDWARE_OPTIONS>(),
        ),
        ("D2D1_SIMPLE_COLOR_PROFILE", size_of::<D2D1_SIMPLE_COLOR_PROFILE>()),
        ("DWRITE_FONT_PROPERTY", size_of::<DWRITE_FONT_PROPERTY>()),
        ("DWRITE_LINE_METRICS", size_of::<DWRITE_LINE_METRICS>()),
        ("DWRITE_LINE_METRICS1", size_of::<DWRITE_LINE_METRICS1>()),
        ("DWRITE_LINE_SPACING", size_of::<DWRITE_LINE_SPACING>()),
        ("DWRITE_FONT_AXIS_VALUE", size_of::<DWRITE_FONT_AXIS_VALUE>()),
        ("DWRITE_FONT_AXIS_RANGE", size_of::<DWRITE_FONT_AXIS_RANGE>()),
        ("DWRITE_FILE_FRAGMENT", size_of::<DWRITE_FILE_FRAGMENT>()),
    ]
}

/// Same order as `native_field_offsets`
const OFFSETS: [(&str, usize); OFFSET_COUNT] = [
    ("setFunction", offset_of!(D2D1_PROPERTY_BINDING, set_function)),
    ("getFunction", offset_of!(D2D1_PROPERTY_BINDING, get_function)),
    ("dimensions", offset_of!(D2D1_RESOURCE_TEXTURE_PROPERTIES, dimensions)),
    ("extendModes", offset_of!(D2D1_RESOURCE_TEXTURE_PROPERTIES, extend_modes)),
    ("format", offset_of!(D2D1_INPUT_ELEMENT_DESC, format)),
    ("alignedByteOffset", offset_of!(D2D1_INPUT_ELEMENT_DESC, aligned_byte_offset)),
    ("data", offset_of!(D2D1_VERTEX_BUFFER_PROPERTIES, data)),
    ("byteWidth", offset_of!(D2D1_VERTEX_BUFFER_PROPERTIES, byte_width)),
    ("inputElements", offset_of!(D2D1_CUSTOM_VERTEX_BUFFER_PROPERTIES, input_elements)),
    ("stride", offset_of!(D2D1_CUSTOM_VERTEX_BUFFER_PROPERTIES, stride)),
    ("blendOperationAlpha", offset_of!(D2D1_BLEND_DESCRIPTION, blend_operation_alpha)),
    ("blendFactor", offset_of!(D2D1_BLEND_DESCRIPTION, blend_factor)),
    ("whitePointXZ", offset_of!(D2D1_SIMPLE_COLOR_PROFILE, white_point_xz)),
    ("gamma", offset_of!(D2D1_SIMPLE_COLOR_PROFILE, gamma)),
    ("propertyValue", offset_of!(DWRITE_FONT_PROPERTY, property_value)),
    ("localeName", offset_of!(DWRITE_FONT_PROPERTY, locale_name)),
    ("isTrimmed", offset_of!(DWRITE_LINE_METRICS1, is_trimmed)),
    ("leadingAfter", offset_of!(DWRITE_LINE_METRICS1, leading_after)),
    ("fontLineGapUsage", offset_of!(DWRITE_LINE_SPACING, font_line_gap_usage)),
    ("fragmentSize", offset_of!(DWRITE_FILE_FRAGMENT, fragment_size)),
];

/// Same order as `native_constants`
const CONSTANTS: [(&str, u32); CONSTANT_COUNT] = [
    ("D2D1_FILTER_MIN_MAG_MIP_LINEAR", D2D1_FILTER_MIN_MAG_MIP_LINEAR.0),
    ("D2D1_FILTER_ANISOTROPIC", D2D1_FILTER_ANISOTROPIC.0),
    ("D2D1_FEATURE_D3D10_X_HARDWARE_OPTIONS", D2D1_FEATURE_D3D10_X_HARDWARE_OPTIONS.0),
    ("D2D1_CHANNEL_DEPTH_4", D2D1_CHANNEL_DEPTH_4.0),
    ("D2D1_CHANGE_TYPE_GRAPH", D2D1_CHANGE_TYPE_GRAPH.0),
    ("D2D1_PIXEL_OPTIONS_TRIVIAL_SAMPLING", D2D1_PIXEL_OPTIONS::TRIVIAL_SAMPLING.bits()),
    ("D2D1_VERTEX_OPTIONS_ASSUME_NO_OVERLAP", D2D1_VERTEX_OPTIONS::ASSUME_NO_OVERLAP.bits()),
    ("D2D1_VERTEX_USAGE_DYNAMIC", D2D1_VERTEX_USAGE_DYNAMIC.0),
    ("D2D1_BLEND_OPERATION_MAX", D2D1_BLEND_OPERATION_MAX.0),
    ("D2D1_BLEND_INV_BLEND_FACTOR", D2D1_BLEND_INV_BLEND_FACTOR.0),
    ("D2D1_EXTEND_MODE_MIRROR", D2D1_EXTEND_MODE_MIRROR.0),
    ("D2D1_BUFFER_PRECISION_32BPC_FLOAT", D2D1_BUFFER_PRECISION_32BPC_FLOAT.0),
    ("D2D1_COLOR_SPACE_SCRGB", D2D1_COLOR_SPACE_SCRGB.0),
    ("D2D1_GAMMA1_G2084", D2D1_GAMMA1_G2084.0),
    ("D3D_FEATURE_LEVEL_11_1", D3D_FEATURE_LEVEL_11_1.0),
    ("DXGI_FORMAT_B8G8R8A8_UNORM", DXGI_FORMAT_B8G8R8A8_UNORM.0),
    (
        "DXGI_COLOR_SPACE_RGB_FULL_G2084_NONE_P2020",
        DXGI_COLOR_SPACE_RGB_FULL_G2084_NONE_P2020.0,
    ),
    ("DWRITE_FONT_WEIGHT_SEMI_LIGHT", DWRITE_FONT_WEIGHT_SEMI_LIGHT.0),
    ("DWRITE_FONT_STRETCH_ULTRA_EXPANDED", DWRITE_FONT_STRETCH_ULTRA_EXPANDED.0),
    ("DWRITE_FONT_STYLE_ITALIC", DWRITE_FONT_STYLE_ITALIC.0),
    (
        "DWRITE_FONT_PROPERTY_ID_TYPOGRAPHIC_FACE_NAME",
        DWRITE_FONT_PROPERTY_ID_TYPOGRAPHIC_FACE_NAME.0,
    ),
    ("DWRITE_LOCALITY_LOCAL", DWRITE_LOCALITY_LOCAL.0),
    (
        "DWRITE_RENDERING_MODE1_NATURAL_SYMMETRIC_DOWNSAMPLED",
        DWRITE_RENDERING_MODE1_NATURAL_SYMMETRIC_DOWNSAMPLED.0,
    ),
    ("DWRITE_FONT_LINE_GAP_USAGE_ENABLED", DWRITE_FONT_LINE_GAP_USAGE_ENABLED.0),
    ("DWRITE_LINE_SPACING_METHOD_PROPORTIONAL", DWRITE_LINE_SPACING_METHOD_PROPORTIONAL.0),
    (
        "DWRITE_FONT_FAMILY_MODEL_WEIGHT_STRETCH_STYLE",
        DWRITE_FONT_FAMILY_MODEL_WEIGHT_STRETCH_STYLE.0,
    ),
    ("DWRITE_FONT_AXIS_TAG_OPTICAL_SIZE", DWRITE_FONT_AXIS_TAG_OPTICAL_SIZE.0),
    (
        "DWRITE_FONT_SOURCE_TYPE_REMOTE_FONT_PROVIDER",
        DWRITE_FONT_SOURCE_TYPE_REMOTE_FONT_PROVIDER.0,
    ),
    ("DWRITE_CONTAINER_TYPE_WOFF2", DWRITE_CONTAINER_TYPE_WOFF2.0),
    ("DWRITE_FONT_SIMULATIONS_OBLIQUE", DWRITE_FONT_SIMULATIONS::OBLIQUE.bits()),
    ("DWRITE_FONT_AXIS_ATTRIBUTES_HIDDEN", DWRITE_FONT_AXIS_ATTRIBUTES::HIDDEN.bits()),
    (
        "DWRITE_GLYPH_IMAGE_FORMATS_PREMULTIPLIED_B8G8R8A8",
        DWRITE_GLYPH_IMAGE_FORMATS::PREMULTIPLIED_B8G8R8A8.bits(),
    ),
];

#[test]
fn test_struct_sizes_match_msvc() {
    init();
    let native = native_struct_sizes();
    for ((name, size), native) in rust_struct_sizes().iter().zip(native) {
        log::debug!("{name}: {size} bytes");
        assert_eq!(*size, native, "sizeof({name})");
    }
}

#[test]
fn test_field_offsets_match_msvc() {
    let native = native_field_offsets();
    for ((field, offset), native) in OFFSETS.iter().zip(native) {
        assert_eq!(*offset, native, "offsetof(.., {field})");
    }
}

#[test]
fn test_constants_match_headers() {
    let native = native_constants();
    for ((name, value), native) in CONSTANTS.iter().zip(native) {
        assert_eq!(*value, native, "{name}");
    }
}

#[test]
fn test_catalog_iids_match_uuidof() {
    init();
    let interfaces = catalog::interfaces();
    assert_eq!(interfaces.len(), INTERFACE_COUNT);
    for (desc, native) in interfaces.iter().zip(native_interface_iids()) {
        assert_eq!(desc.iid, native, "__uuidof({})", desc.name);
    }
}

#[test]
fn test_foreign_iids_match_uuidof() {
    let rust = [
        IID_ID2D1EFFECT,
        IID_ID2D1BITMAP1,
        IID_ID2D1COLORCONTEXT,
        IID_ID2D1COLORCONTEXT1,
        IID_ID2D1LOOKUPTABLE3D,
        IID_IWICCOLORCONTEXT,
        IID_IDWRITEFONT,
        IID_IDWRITEFONT3,
        IID_IDWRITEFONTFACE,
        IID_IDWRITEFONTFACE3,
        IID_IDWRITEFONTFILE,
    ];
    assert_eq!(rust, native_foreign_iids());
}

#[test]
fn test_catalog_structures_match_list() {
    let names: Vec<_> = catalog::structures().iter().map(|layout| layout.name).collect();
    let listed: Vec<_> = rust_struct_sizes().iter().map(|(name, _)| *name).collect();
    assert_eq!(names, listed);
}
