//! Direct2D effect-authoring value structures

use std::ptr;

use crate::foundation::{BOOL, D2D1_POINT_2F, DXGI_FORMAT, FALSE, PCSTR, PCWSTR};

use super::effect::{PD2D1_PROPERTY_GET_FUNCTION, PD2D1_PROPERTY_SET_FUNCTION};
use super::enums::*;

/// Appended after the previous element in `D2D1_INPUT_ELEMENT_DESC::aligned_byte_offset`
pub const D2D1_APPEND_ALIGNED_ELEMENT: u32 = 0xffff_ffff;

/// Binds a named effect property to accessor callbacks at registration
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct D2D1_PROPERTY_BINDING {
    /// Property name as declared in the effect XML
    pub property_name: PCWSTR,
    pub set_function: PD2D1_PROPERTY_SET_FUNCTION,
    pub get_function: PD2D1_PROPERTY_GET_FUNCTION,
}

/// Shape of a resource texture created with `CreateResourceTexture`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct D2D1_RESOURCE_TEXTURE_PROPERTIES {
    /// `dimensions` extents
    pub extents: *const u32,
    pub dimensions: u32,
    pub buffer_precision: D2D1_BUFFER_PRECISION,
    pub channel_depth: D2D1_CHANNEL_DEPTH,
    pub filter: D2D1_FILTER,
    /// `dimensions` extend modes
    pub extend_modes: *const D2D1_EXTEND_MODE,
}

/// One element of a custom vertex layout
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct D2D1_INPUT_ELEMENT_DESC {
    pub semantic_name: PCSTR,
    pub semantic_index: u32,
    pub format: DXGI_FORMAT,
    pub input_slot: u32,
    pub aligned_byte_offset: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct D2D1_VERTEX_BUFFER_PROPERTIES {
    pub input_count: u32,
    pub usage: D2D1_VERTEX_USAGE,
    pub data: *const u8,
    pub byte_width: u32,
}

impl Default for D2D1_VERTEX_BUFFER_PROPERTIES {
    fn default() -> Self {
        Self {
            input_count: 0,
            usage: D2D1_VERTEX_USAGE_STATIC,
            data: ptr::null(),
            byte_width: 0,
        }
    }
}

/// Vertex shader and input layout of a custom vertex buffer
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct D2D1_CUSTOM_VERTEX_BUFFER_PROPERTIES {
    pub shader_buffer_with_input_signature: *const u8,
    pub shader_buffer_size: u32,
    pub input_elements: *const D2D1_INPUT_ELEMENT_DESC,
    pub element_count: u32,
    pub stride: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct D2D1_VERTEX_RANGE {
    pub start_vertex: u32,
    pub vertex_count: u32,
}

/// Blend state of a vertex draw or a blend transform
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct D2D1_BLEND_DESCRIPTION {
    pub source_blend: D2D1_BLEND,
    pub destination_blend: D2D1_BLEND,
    pub blend_operation: D2D1_BLEND_OPERATION,
    pub source_blend_alpha: D2D1_BLEND,
    pub destination_blend_alpha: D2D1_BLEND,
    pub blend_operation_alpha: D2D1_BLEND_OPERATION,
    pub blend_factor: [f32; 4],
}

impl D2D1_BLEND_DESCRIPTION {
    /// Premultiplied source-over, the default Direct2D composite
    pub const SOURCE_OVER: Self = Self {
        source_blend: D2D1_BLEND_ONE,
        destination_blend: D2D1_BLEND_INV_SRC_ALPHA,
        blend_operation: D2D1_BLEND_OPERATION_ADD,
        source_blend_alpha: D2D1_BLEND_ONE,
        destination_blend_alpha: D2D1_BLEND_INV_SRC_ALPHA,
        blend_operation_alpha: D2D1_BLEND_OPERATION_ADD,
        blend_factor: [1.0; 4],
    };
}

/// Sampling of one transform input
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct D2D1_INPUT_DESCRIPTION {
    pub filter: D2D1_FILTER,
    pub level_of_detail_count: u32,
}

/// Result of `CheckFeatureSupport(D2D1_FEATURE_DOUBLES)`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct D2D1_FEATURE_DATA_DOUBLES {
    pub double_precision_float_shader_ops: BOOL,
}

impl Default for D2D1_FEATURE_DATA_DOUBLES {
    fn default() -> Self {
        Self {
            double_precision_float_shader_ops: FALSE,
        }
    }
}

/// Result of `CheckFeatureSupport(D2D1_FEATURE_D3D10_X_HARDWARE_OPTIONS)`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct D2D1_FEATURE_DATA_D3D10_X_HARDWARE_OPTIONS {
    pub compute_shaders_plus_raw_and_structured_buffers_via_shader_4_x: BOOL,
}

impl Default for D2D1_FEATURE_DATA_D3D10_X_HARDWARE_OPTIONS {
    fn default() -> Self {
        Self {
            compute_shaders_plus_raw_and_structured_buffers_via_shader_4_x: FALSE,
        }
    }
}

/// Color profile described by primaries, white point and gamma
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct D2D1_SIMPLE_COLOR_PROFILE {
    pub red_primary: D2D1_POINT_2F,
    pub green_primary: D2D1_POINT_2F,
    pub blue_primary: D2D1_POINT_2F,
    pub white_point_xz: D2D1_POINT_2F,
    pub gamma: D2D1_GAMMA1,
}
