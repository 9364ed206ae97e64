//! Direct2D effect-authoring constant sets

use bitflags::bitflags;
use comvtable::native_enum;

native_enum! {
    /// Texture filtering mode of an effect input
    pub struct D2D1_FILTER(u32) {
        D2D1_FILTER_MIN_MAG_MIP_POINT = 0x00,
        D2D1_FILTER_MIN_MAG_POINT_MIP_LINEAR = 0x01,
        D2D1_FILTER_MIN_POINT_MAG_LINEAR_MIP_POINT = 0x04,
        D2D1_FILTER_MIN_POINT_MAG_MIP_LINEAR = 0x05,
        D2D1_FILTER_MIN_LINEAR_MAG_MIP_POINT = 0x10,
        D2D1_FILTER_MIN_LINEAR_MAG_POINT_MIP_LINEAR = 0x11,
        D2D1_FILTER_MIN_MAG_LINEAR_MIP_POINT = 0x14,
        D2D1_FILTER_MIN_MAG_MIP_LINEAR = 0x15,
        D2D1_FILTER_ANISOTROPIC = 0x55,
    }
}

native_enum! {
    /// Optional capability queried through `CheckFeatureSupport`
    pub struct D2D1_FEATURE(u32) {
        D2D1_FEATURE_DOUBLES = 0,
        D2D1_FEATURE_D3D10_X_HARDWARE_OPTIONS = 1,
    }
}

native_enum! {
    /// Channels an effect output carries
    pub struct D2D1_CHANNEL_DEPTH(u32) {
        D2D1_CHANNEL_DEPTH_DEFAULT = 0,
        D2D1_CHANNEL_DEPTH_1 = 1,
        D2D1_CHANNEL_DEPTH_4 = 4,
    }
}

native_enum! {
    /// What changed since the last `PrepareForRender`
    pub struct D2D1_CHANGE_TYPE(u32) {
        D2D1_CHANGE_TYPE_NONE = 0,
        D2D1_CHANGE_TYPE_PROPERTIES = 1,
        D2D1_CHANGE_TYPE_CONTEXT = 2,
        D2D1_CHANGE_TYPE_GRAPH = 3,
    }
}

native_enum! {
    /// How often a vertex buffer is expected to change
    pub struct D2D1_VERTEX_USAGE(u32) {
        D2D1_VERTEX_USAGE_STATIC = 0,
        D2D1_VERTEX_USAGE_DYNAMIC = 1,
    }
}

native_enum! {
    pub struct D2D1_BLEND_OPERATION(u32) {
        D2D1_BLEND_OPERATION_ADD = 1,
        D2D1_BLEND_OPERATION_SUBTRACT = 2,
        D2D1_BLEND_OPERATION_REV_SUBTRACT = 3,
        D2D1_BLEND_OPERATION_MIN = 4,
        D2D1_BLEND_OPERATION_MAX = 5,
    }
}

native_enum! {
    /// Blend factor source
    pub struct D2D1_BLEND(u32) {
        D2D1_BLEND_ZERO = 1,
        D2D1_BLEND_ONE = 2,
        D2D1_BLEND_SRC_COLOR = 3,
        D2D1_BLEND_INV_SRC_COLOR = 4,
        D2D1_BLEND_SRC_ALPHA = 5,
        D2D1_BLEND_INV_SRC_ALPHA = 6,
        D2D1_BLEND_DEST_ALPHA = 7,
        D2D1_BLEND_INV_DEST_ALPHA = 8,
        D2D1_BLEND_DEST_COLOR = 9,
        D2D1_BLEND_INV_DEST_COLOR = 10,
        D2D1_BLEND_SRC_ALPHA_SAT = 11,
        D2D1_BLEND_BLEND_FACTOR = 14,
        D2D1_BLEND_INV_BLEND_FACTOR = 15,
    }
}

native_enum! {
    /// How sampling outside a bitmap behaves
    pub struct D2D1_EXTEND_MODE(u32) {
        D2D1_EXTEND_MODE_CLAMP = 0,
        D2D1_EXTEND_MODE_WRAP = 1,
        D2D1_EXTEND_MODE_MIRROR = 2,
    }
}

native_enum! {
    /// Precision of intermediate buffers
    pub struct D2D1_BUFFER_PRECISION(u32) {
        D2D1_BUFFER_PRECISION_UNKNOWN = 0,
        D2D1_BUFFER_PRECISION_8BPC_UNORM = 1,
        D2D1_BUFFER_PRECISION_8BPC_UNORM_SRGB = 2,
        D2D1_BUFFER_PRECISION_16BPC_UNORM = 3,
        D2D1_BUFFER_PRECISION_16BPC_FLOAT = 4,
        D2D1_BUFFER_PRECISION_32BPC_FLOAT = 5,
    }
}

native_enum! {
    pub struct D2D1_COLOR_SPACE(u32) {
        D2D1_COLOR_SPACE_CUSTOM = 0,
        D2D1_COLOR_SPACE_SRGB = 1,
        D2D1_COLOR_SPACE_SCRGB = 2,
    }
}

native_enum! {
    /// Transfer function of a simple color profile
    pub struct D2D1_GAMMA1(u32) {
        D2D1_GAMMA1_G22 = 0,
        D2D1_GAMMA1_G10 = 1,
        D2D1_GAMMA1_G2084 = 2,
    }
}

bitflags! {
    /// Pixel shader hints for `SetPixelShader`
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct D2D1_PIXEL_OPTIONS: u32 {
        const NONE = 0;
        /// The shader samples each input only at the output pixel position
        const TRIVIAL_SAMPLING = 1;
    }
}

bitflags! {
    /// Vertex processing options for `SetVertexProcessing`
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct D2D1_VERTEX_OPTIONS: u32 {
        const NONE = 0;
        /// Keep the target contents instead of clearing the covered area
        const DO_NOT_CLEAR = 1;
        const USE_DEPTH_BUFFER = 2;
        /// Triangles never overlap, so blending order does not matter
        const ASSUME_NO_OVERLAP = 4;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_values_skip_gap() {
        assert_eq!(D2D1_BLEND_SRC_ALPHA_SAT.0, 11);
        assert_eq!(D2D1_BLEND_BLEND_FACTOR.0, 14);
        assert_eq!(D2D1_BLEND(12).name(), None);
    }

    #[test]
    fn vertex_options_combine() {
        let options = D2D1_VERTEX_OPTIONS::DO_NOT_CLEAR | D2D1_VERTEX_OPTIONS::ASSUME_NO_OVERLAP;
        assert_eq!(options.bits(), 5);
        assert_eq!(D2D1_VERTEX_OPTIONS::from_bits_retain(0x80).bits(), 0x80);
    }
}
