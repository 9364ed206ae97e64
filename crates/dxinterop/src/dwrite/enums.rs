//! DirectWrite constant sets

use bitflags::bitflags;
use comvtable::native_enum;

native_enum! {
    /// Stroke thickness, 1 (thin) to 999 (extra black)
    pub struct DWRITE_FONT_WEIGHT(u32) {
        DWRITE_FONT_WEIGHT_THIN = 100,
        DWRITE_FONT_WEIGHT_EXTRA_LIGHT = 200,
        DWRITE_FONT_WEIGHT_ULTRA_LIGHT = 200,
        DWRITE_FONT_WEIGHT_LIGHT = 300,
        DWRITE_FONT_WEIGHT_SEMI_LIGHT = 350,
        DWRITE_FONT_WEIGHT_NORMAL = 400,
        DWRITE_FONT_WEIGHT_REGULAR = 400,
        DWRITE_FONT_WEIGHT_MEDIUM = 500,
        DWRITE_FONT_WEIGHT_DEMI_BOLD = 600,
        DWRITE_FONT_WEIGHT_SEMI_BOLD = 600,
        DWRITE_FONT_WEIGHT_BOLD = 700,
        DWRITE_FONT_WEIGHT_EXTRA_BOLD = 800,
        DWRITE_FONT_WEIGHT_ULTRA_BOLD = 800,
        DWRITE_FONT_WEIGHT_BLACK = 900,
        DWRITE_FONT_WEIGHT_HEAVY = 900,
        DWRITE_FONT_WEIGHT_EXTRA_BLACK = 950,
        DWRITE_FONT_WEIGHT_ULTRA_BLACK = 950,
    }
}

native_enum! {
    /// Width relative to the normal aspect ratio
    pub struct DWRITE_FONT_STRETCH(u32) {
        DWRITE_FONT_STRETCH_UNDEFINED = 0,
        DWRITE_FONT_STRETCH_ULTRA_CONDENSED = 1,
        DWRITE_FONT_STRETCH_EXTRA_CONDENSED = 2,
        DWRITE_FONT_STRETCH_CONDENSED = 3,
        DWRITE_FONT_STRETCH_SEMI_CONDENSED = 4,
        DWRITE_FONT_STRETCH_NORMAL = 5,
        DWRITE_FONT_STRETCH_MEDIUM = 5,
        DWRITE_FONT_STRETCH_SEMI_EXPANDED = 6,
        DWRITE_FONT_STRETCH_EXPANDED = 7,
        DWRITE_FONT_STRETCH_EXTRA_EXPANDED = 8,
        DWRITE_FONT_STRETCH_ULTRA_EXPANDED = 9,
    }
}

native_enum! {
    pub struct DWRITE_FONT_STYLE(u32) {
        DWRITE_FONT_STYLE_NORMAL = 0,
        DWRITE_FONT_STYLE_OBLIQUE = 1,
        DWRITE_FONT_STYLE_ITALIC = 2,
    }
}

native_enum! {
    /// Font property a font set can be filtered and queried by
    pub struct DWRITE_FONT_PROPERTY_ID(u32) {
        DWRITE_FONT_PROPERTY_ID_NONE = 0,
        DWRITE_FONT_PROPERTY_ID_WEIGHT_STRETCH_STYLE_FAMILY_NAME = 1,
        DWRITE_FONT_PROPERTY_ID_TYPOGRAPHIC_FAMILY_NAME = 2,
        DWRITE_FONT_PROPERTY_ID_WEIGHT_STRETCH_STYLE_FACE_NAME = 3,
        DWRITE_FONT_PROPERTY_ID_FULL_NAME = 4,
        DWRITE_FONT_PROPERTY_ID_WIN32_FAMILY_NAME = 5,
        DWRITE_FONT_PROPERTY_ID_POSTSCRIPT_NAME = 6,
        DWRITE_FONT_PROPERTY_ID_DESIGN_SCRIPT_LANGUAGE_TAG = 7,
        DWRITE_FONT_PROPERTY_ID_SUPPORTED_SCRIPT_LANGUAGE_TAG = 8,
        DWRITE_FONT_PROPERTY_ID_SEMANTIC_TAG = 9,
        DWRITE_FONT_PROPERTY_ID_WEIGHT = 10,
        DWRITE_FONT_PROPERTY_ID_STRETCH = 11,
        DWRITE_FONT_PROPERTY_ID_STYLE = 12,
        DWRITE_FONT_PROPERTY_ID_TYPOGRAPHIC_FACE_NAME = 13,
        DWRITE_FONT_PROPERTY_ID_TOTAL = 13,
        DWRITE_FONT_PROPERTY_ID_TOTAL_RS3 = 14,
        DWRITE_FONT_PROPERTY_ID_PREFERRED_FAMILY_NAME = 2,
        DWRITE_FONT_PROPERTY_ID_FAMILY_NAME = 1,
        DWRITE_FONT_PROPERTY_ID_FACE_NAME = 3,
    }
}

native_enum! {
    /// Where a font's data currently lives
    pub struct DWRITE_LOCALITY(u32) {
        /// Not local; a download is needed
        DWRITE_LOCALITY_REMOTE = 0,
        /// Partially downloaded
        DWRITE_LOCALITY_PARTIAL = 1,
        DWRITE_LOCALITY_LOCAL = 2,
    }
}

native_enum! {
    pub struct DWRITE_RENDERING_MODE1(u32) {
        DWRITE_RENDERING_MODE1_DEFAULT = 0,
        DWRITE_RENDERING_MODE1_ALIASED = 1,
        DWRITE_RENDERING_MODE1_GDI_CLASSIC = 2,
        DWRITE_RENDERING_MODE1_GDI_NATURAL = 3,
        DWRITE_RENDERING_MODE1_NATURAL = 4,
        DWRITE_RENDERING_MODE1_NATURAL_SYMMETRIC = 5,
        DWRITE_RENDERING_MODE1_OUTLINE = 6,
        DWRITE_RENDERING_MODE1_NATURAL_SYMMETRIC_DOWNSAMPLED = 7,
    }
}

native_enum! {
    /// Whether line spacing includes the font's line gap
    pub struct DWRITE_FONT_LINE_GAP_USAGE(u32) {
        DWRITE_FONT_LINE_GAP_USAGE_DEFAULT = 0,
        DWRITE_FONT_LINE_GAP_USAGE_DISABLED = 1,
        DWRITE_FONT_LINE_GAP_USAGE_ENABLED = 2,
    }
}

native_enum! {
    pub struct DWRITE_LINE_SPACING_METHOD(u32) {
        DWRITE_LINE_SPACING_METHOD_DEFAULT = 0,
        DWRITE_LINE_SPACING_METHOD_UNIFORM = 1,
        DWRITE_LINE_SPACING_METHOD_PROPORTIONAL = 2,
    }
}

native_enum! {
    /// How fonts are grouped into families
    pub struct DWRITE_FONT_FAMILY_MODEL(u32) {
        DWRITE_FONT_FAMILY_MODEL_TYPOGRAPHIC = 0,
        DWRITE_FONT_FAMILY_MODEL_WEIGHT_STRETCH_STYLE = 1,
    }
}

/// Four-character OpenType tag packed little-endian, as `DWRITE_MAKE_FONT_AXIS_TAG` does
#[must_use]
pub const fn make_font_axis_tag(a: u8, b: u8, c: u8, d: u8) -> u32 {
    (a as u32) | ((b as u32) << 8) | ((c as u32) << 16) | ((d as u32) << 24)
}

native_enum! {
    /// OpenType variation axis tag
    pub struct DWRITE_FONT_AXIS_TAG(u32) {
        DWRITE_FONT_AXIS_TAG_WEIGHT = make_font_axis_tag(b'w', b'g', b'h', b't'),
        DWRITE_FONT_AXIS_TAG_WIDTH = make_font_axis_tag(b'w', b'd', b't', b'h'),
        DWRITE_FONT_AXIS_TAG_SLANT = make_font_axis_tag(b's', b'l', b'n', b't'),
        DWRITE_FONT_AXIS_TAG_OPTICAL_SIZE = make_font_axis_tag(b'o', b'p', b's', b'z'),
        DWRITE_FONT_AXIS_TAG_ITALIC = make_font_axis_tag(b'i', b't', b'a', b'l'),
    }
}

native_enum! {
    /// Origin of a font in a font set
    pub struct DWRITE_FONT_SOURCE_TYPE(u32) {
        DWRITE_FONT_SOURCE_TYPE_UNKNOWN = 0,
        DWRITE_FONT_SOURCE_TYPE_PER_MACHINE = 1,
        DWRITE_FONT_SOURCE_TYPE_PER_USER = 2,
        DWRITE_FONT_SOURCE_TYPE_APPX_PACKAGE = 3,
        DWRITE_FONT_SOURCE_TYPE_REMOTE_FONT_PROVIDER = 4,
    }
}

native_enum! {
    /// Packaging of font data
    pub struct DWRITE_CONTAINER_TYPE(u32) {
        DWRITE_CONTAINER_TYPE_UNKNOWN = 0,
        DWRITE_CONTAINER_TYPE_WOFF = 1,
        DWRITE_CONTAINER_TYPE_WOFF2 = 2,
    }
}

bitflags! {
    /// Algorithmic styles applied to a font face
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DWRITE_FONT_SIMULATIONS: u32 {
        const NONE = 0;
        const BOLD = 1;
        const OBLIQUE = 2;
    }
}

bitflags! {
    /// Axes DirectWrite may set automatically
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DWRITE_AUTOMATIC_FONT_AXES: u32 {
        const NONE = 0;
        const OPTICAL_SIZE = 1;
    }
}

bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DWRITE_FONT_AXIS_ATTRIBUTES: u32 {
        const NONE = 0;
        /// The axis varies the font rather than being fixed
        const VARIABLE = 1;
        /// Hidden from font pickers
        const HIDDEN = 2;
    }
}

bitflags! {
    /// Glyph data formats a font carries
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DWRITE_GLYPH_IMAGE_FORMATS: u32 {
        const NONE = 0;
        const TRUETYPE = 1;
        const CFF = 2;
        const COLR = 4;
        const SVG = 8;
        const PNG = 0x10;
        const JPEG = 0x20;
        const TIFF = 0x40;
        const PREMULTIPLIED_B8G8R8A8 = 0x80;
        const COLR_PAINT_TREE = 0x100;
    }
}
