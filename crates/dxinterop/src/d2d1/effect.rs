//! Effect implementation and effect context

use std::ffi::c_void;
use std::mem::size_of;
use std::ptr;

use comvtable::{
    ComPtr, GUID, HRESULT, IUnknown, Result, check_call, com_interface, len_u32, wide::to_wide,
};

use crate::foundation::{
    BOOL, D2D1_POINT_2L, D2D1_RECT_L, D3D_FEATURE_LEVEL, DXGI_COLOR_SPACE_TYPE, PCWSTR, from_bool,
};

use super::enums::*;
use super::foreign::{
    ID2D1ColorContext, ID2D1ColorContext1, ID2D1Effect, ID2D1LookupTable3D, IWICColorContext,
};
use super::render_info::{ID2D1ResourceTexture, ID2D1VertexBuffer};
use super::structs::*;
use super::transform::{
    ID2D1BlendTransform, ID2D1BorderTransform, ID2D1BoundsAdjustmentTransform,
    ID2D1OffsetTransform, ID2D1TransformGraph, ID2D1TransformNode,
};

/// Writes a property value into an effect. `effect` is the effect's
/// `ID2D1EffectImpl` pointer.
pub type PD2D1_PROPERTY_SET_FUNCTION = Option<
    unsafe extern "system" fn(effect: *mut IUnknown, data: *const u8, data_size: u32) -> HRESULT,
>;

/// Reads a property value. With a null `data` only `actual_size` is written.
pub type PD2D1_PROPERTY_GET_FUNCTION = Option<
    unsafe extern "system" fn(
        effect: *mut IUnknown,
        data: *mut u8,
        data_size: u32,
        actual_size: *mut u32,
    ) -> HRESULT,
>;

/// Creates a new effect implementation, returning its `IUnknown`
pub type PD2D1_EFFECT_FACTORY =
    Option<unsafe extern "system" fn(effect_impl: *mut *mut IUnknown) -> HRESULT>;

/// Implemented by custom effects
#[com_interface("a248fd3f-3e6c-4e63-9f03-7f68ecc91db9")]
pub trait ID2D1EffectImpl {
    fn Initialize(
        &self,
        effect_context: *mut ID2D1EffectContext,
        transform_graph: *mut ID2D1TransformGraph,
    ) -> HRESULT;
    fn PrepareForRender(&self, change_type: D2D1_CHANGE_TYPE) -> HRESULT;
    fn SetGraph(&self, transform_graph: *mut ID2D1TransformGraph) -> HRESULT;
}

/// Services Direct2D provides to an effect implementation
#[com_interface("3d9f916b-27dc-4ad7-b4f1-64945340f563")]
pub trait ID2D1EffectContext {
    fn GetDpi(&self, dpi_x: *mut f32, dpi_y: *mut f32);
    fn CreateEffect(&self, effect_id: *const GUID, effect: *mut *mut ID2D1Effect) -> HRESULT;
    fn GetMaximumSupportedFeatureLevel(
        &self,
        feature_levels: *const D3D_FEATURE_LEVEL,
        feature_levels_count: u32,
        maximum_supported_feature_level: *mut D3D_FEATURE_LEVEL,
    ) -> HRESULT;
    fn CreateTransformNodeFromEffect(
        &self,
        effect: *mut ID2D1Effect,
        transform_node: *mut *mut ID2D1TransformNode,
    ) -> HRESULT;
    fn CreateBlendTransform(
        &self,
        num_inputs: u32,
        blend_description: *const D2D1_BLEND_DESCRIPTION,
        transform: *mut *mut ID2D1BlendTransform,
    ) -> HRESULT;
    fn CreateBorderTransform(
        &self,
        extend_mode_x: D2D1_EXTEND_MODE,
        extend_mode_y: D2D1_EXTEND_MODE,
        transform: *mut *mut ID2D1BorderTransform,
    ) -> HRESULT;
    fn CreateOffsetTransform(
        &self,
        offset: D2D1_POINT_2L,
        transform: *mut *mut ID2D1OffsetTransform,
    ) -> HRESULT;
    fn CreateBoundsAdjustmentTransform(
        &self,
        output_rectangle: *const D2D1_RECT_L,
        transform: *mut *mut ID2D1BoundsAdjustmentTransform,
    ) -> HRESULT;
    fn LoadPixelShader(
        &self,
        shader_id: *const GUID,
        shader_buffer: *const u8,
        shader_buffer_count: u32,
    ) -> HRESULT;
    fn LoadVertexShader(
        &self,
        resource_id: *const GUID,
        shader_buffer: *const u8,
        shader_buffer_count: u32,
    ) -> HRESULT;
    fn LoadComputeShader(
        &self,
        resource_id: *const GUID,
        shader_buffer: *const u8,
        shader_buffer_count: u32,
    ) -> HRESULT;
    fn IsShaderLoaded(&self, shader_id: *const GUID) -> BOOL;
    fn CreateResourceTexture(
        &self,
        resource_id: *const GUID,
        resource_texture_properties: *const D2D1_RESOURCE_TEXTURE_PROPERTIES,
        data: *const u8,
        strides: *const u32,
        data_size: u32,
        resource_texture: *mut *mut ID2D1ResourceTexture,
    ) -> HRESULT;
    fn FindResourceTexture(
        &self,
        resource_id: *const GUID,
        resource_texture: *mut *mut ID2D1ResourceTexture,
    ) -> HRESULT;
    fn CreateVertexBuffer(
        &self,
        vertex_buffer_properties: *const D2D1_VERTEX_BUFFER_PROPERTIES,
        resource_id: *const GUID,
        custom_vertex_buffer_properties: *const D2D1_CUSTOM_VERTEX_BUFFER_PROPERTIES,
        buffer: *mut *mut ID2D1VertexBuffer,
    ) -> HRESULT;
    fn FindVertexBuffer(
        &self,
        resource_id: *const GUID,
        buffer: *mut *mut ID2D1VertexBuffer,
    ) -> HRESULT;
    fn CreateColorContext(
        &self,
        space: D2D1_COLOR_SPACE,
        profile: *const u8,
        profile_size: u32,
        color_context: *mut *mut ID2D1ColorContext,
    ) -> HRESULT;
    fn CreateColorContextFromFilename(
        &self,
        filename: PCWSTR,
        color_context: *mut *mut ID2D1ColorContext,
    ) -> HRESULT;
    fn CreateColorContextFromWicColorContext(
        &self,
        wic_color_context: *mut IWICColorContext,
        color_context: *mut *mut ID2D1ColorContext,
    ) -> HRESULT;
    fn CheckFeatureSupport(
        &self,
        feature: D2D1_FEATURE,
        feature_support_data: *mut c_void,
        feature_support_data_size: u32,
    ) -> HRESULT;
    fn IsBufferPrecisionSupported(&self, buffer_precision: D2D1_BUFFER_PRECISION) -> BOOL;
}

/// Adds 3D lookup tables (Windows 10 Creators Update)
#[com_interface("84ab595a-fc81-4546-bacd-e8ef4d8abe7a", extends(ID2D1EffectContext))]
pub trait ID2D1EffectContext1 {
    fn CreateLookupTable3D(
        &self,
        precision: D2D1_BUFFER_PRECISION,
        extents: *const u32,
        data: *const u8,
        data_count: u32,
        strides: *const u32,
        lookup_table: *mut *mut ID2D1LookupTable3D,
    ) -> HRESULT;
}

/// Adds DXGI color space and simple-profile color contexts
#[com_interface("577ad2a0-9fc7-4dda-8b18-dab810140052", extends(ID2D1EffectContext1))]
pub trait ID2D1EffectContext2 {
    fn CreateColorContextFromDxgiColorSpace(
        &self,
        color_space: DXGI_COLOR_SPACE_TYPE,
        color_context: *mut *mut ID2D1ColorContext1,
    ) -> HRESULT;
    fn CreateColorContextFromSimpleColorProfile(
        &self,
        simple_profile: *const D2D1_SIMPLE_COLOR_PROFILE,
        color_context: *mut *mut ID2D1ColorContext1,
    ) -> HRESULT;
}

// =============================================================================
// Safe wrappers
// =============================================================================

impl ID2D1EffectImpl {
    pub fn initialize(
        &self,
        context: &ID2D1EffectContext,
        graph: &ID2D1TransformGraph,
    ) -> Result<()> {
        let hr = unsafe { self.Initialize(context.as_raw(), graph.as_raw()) };
        check_call("ID2D1EffectImpl::Initialize", hr).map(|_| ())
    }

    pub fn prepare_for_render(&self, change: D2D1_CHANGE_TYPE) -> Result<()> {
        let hr = unsafe { self.PrepareForRender(change) };
        check_call("ID2D1EffectImpl::PrepareForRender", hr).map(|_| ())
    }

    pub fn set_graph(&self, graph: &ID2D1TransformGraph) -> Result<()> {
        let hr = unsafe { self.SetGraph(graph.as_raw()) };
        check_call("ID2D1EffectImpl::SetGraph", hr).map(|_| ())
    }
}

impl ID2D1EffectContext {
    /// `(dpi_x, dpi_y)` of the device context rendering the effect
    pub fn dpi(&self) -> (f32, f32) {
        let (mut x, mut y) = (0.0, 0.0);
        unsafe { self.GetDpi(&mut x, &mut y) };
        (x, y)
    }

    pub fn create_effect(&self, effect_id: &GUID) -> Result<ComPtr<ID2D1Effect>> {
        unsafe { ComPtr::from_out_param(|out| self.CreateEffect(effect_id, out)) }
    }

    /// Highest of `levels` the device supports.
    pub fn maximum_supported_feature_level(
        &self,
        levels: &[D3D_FEATURE_LEVEL],
    ) -> Result<D3D_FEATURE_LEVEL> {
        let mut level = D3D_FEATURE_LEVEL::default();
        let hr = unsafe {
            self.GetMaximumSupportedFeatureLevel(levels.as_ptr(), len_u32(levels.len())?, &mut level)
        };
        check_call("ID2D1EffectContext::GetMaximumSupportedFeatureLevel", hr)?;
        Ok(level)
    }

    pub fn create_transform_node_from_effect(
        &self,
        effect: &ID2D1Effect,
    ) -> Result<ComPtr<ID2D1TransformNode>> {
        unsafe {
            ComPtr::from_out_param(|out| self.CreateTransformNodeFromEffect(effect.as_raw(), out))
        }
    }

    pub fn create_blend_transform(
        &self,
        num_inputs: u32,
        description: &D2D1_BLEND_DESCRIPTION,
    ) -> Result<ComPtr<ID2D1BlendTransform>> {
        unsafe {
            ComPtr::from_out_param(|out| self.CreateBlendTransform(num_inputs, description, out))
        }
    }

    pub fn create_border_transform(
        &self,
        extend_mode_x: D2D1_EXTEND_MODE,
        extend_mode_y: D2D1_EXTEND_MODE,
    ) -> Result<ComPtr<ID2D1BorderTransform>> {
        unsafe {
            ComPtr::from_out_param(|out| self.CreateBorderTransform(extend_mode_x, extend_mode_y, out))
        }
    }

    pub fn create_offset_transform(
        &self,
        offset: D2D1_POINT_2L,
    ) -> Result<ComPtr<ID2D1OffsetTransform>> {
        unsafe { ComPtr::from_out_param(|out| self.CreateOffsetTransform(offset, out)) }
    }

    pub fn create_bounds_adjustment_transform(
        &self,
        output_rectangle: &D2D1_RECT_L,
    ) -> Result<ComPtr<ID2D1BoundsAdjustmentTransform>> {
        unsafe {
            ComPtr::from_out_param(|out| self.CreateBoundsAdjustmentTransform(output_rectangle, out))
        }
    }

    /// Register compiled pixel shader bytecode under `shader_id`.
    pub fn load_pixel_shader(&self, shader_id: &GUID, bytecode: &[u8]) -> Result<()> {
        let hr =
            unsafe { self.LoadPixelShader(shader_id, bytecode.as_ptr(), len_u32(bytecode.len())?) };
        check_call("ID2D1EffectContext::LoadPixelShader", hr).map(|_| ())
    }

    pub fn load_vertex_shader(&self, resource_id: &GUID, bytecode: &[u8]) -> Result<()> {
        let hr = unsafe {
            self.LoadVertexShader(resource_id, bytecode.as_ptr(), len_u32(bytecode.len())?)
        };
        check_call("ID2D1EffectContext::LoadVertexShader", hr).map(|_| ())
    }

    pub fn load_compute_shader(&self, resource_id: &GUID, bytecode: &[u8]) -> Result<()> {
        let hr = unsafe {
            self.LoadComputeShader(resource_id, bytecode.as_ptr(), len_u32(bytecode.len())?)
        };
        check_call("ID2D1EffectContext::LoadComputeShader", hr).map(|_| ())
    }

    pub fn is_shader_loaded(&self, shader_id: &GUID) -> bool {
        from_bool(unsafe { self.IsShaderLoaded(shader_id) })
    }

    /// Create a resource texture; `resource_id` makes it findable later.
    pub fn create_resource_texture(
        &self,
        resource_id: Option<&GUID>,
        properties: &D2D1_RESOURCE_TEXTURE_PROPERTIES,
        data: &[u8],
        strides: &[u32],
    ) -> Result<ComPtr<ID2D1ResourceTexture>> {
        let data_size = len_u32(data.len())?;
        unsafe {
            ComPtr::from_out_param(|out| {
                self.CreateResourceTexture(
                    resource_id.map_or(ptr::null(), ptr::from_ref),
                    properties,
                    data.as_ptr(),
                    strides.as_ptr(),
                    data_size,
                    out,
                )
            })
        }
    }

    pub fn find_resource_texture(&self, resource_id: &GUID) -> Result<ComPtr<ID2D1ResourceTexture>> {
        unsafe { ComPtr::from_out_param(|out| self.FindResourceTexture(resource_id, out)) }
    }

    pub fn create_vertex_buffer(
        &self,
        properties: &D2D1_VERTEX_BUFFER_PROPERTIES,
        resource_id: Option<&GUID>,
        custom: Option<&D2D1_CUSTOM_VERTEX_BUFFER_PROPERTIES>,
    ) -> Result<ComPtr<ID2D1VertexBuffer>> {
        unsafe {
            ComPtr::from_out_param(|out| {
                self.CreateVertexBuffer(
                    properties,
                    resource_id.map_or(ptr::null(), ptr::from_ref),
                    custom.map_or(ptr::null(), ptr::from_ref),
                    out,
                )
            })
        }
    }

    pub fn find_vertex_buffer(&self, resource_id: &GUID) -> Result<ComPtr<ID2D1VertexBuffer>> {
        unsafe { ComPtr::from_out_param(|out| self.FindVertexBuffer(resource_id, out)) }
    }

    pub fn create_color_context(
        &self,
        space: D2D1_COLOR_SPACE,
        profile: &[u8],
    ) -> Result<ComPtr<ID2D1ColorContext>> {
        let size = len_u32(profile.len())?;
        let profile = if profile.is_empty() {
            ptr::null()
        } else {
            profile.as_ptr()
        };
        unsafe { ComPtr::from_out_param(|out| self.CreateColorContext(space, profile, size, out)) }
    }

    pub fn create_color_context_from_filename(
        &self,
        filename: &str,
    ) -> Result<ComPtr<ID2D1ColorContext>> {
        let filename = to_wide(filename);
        unsafe {
            ComPtr::from_out_param(|out| self.CreateColorContextFromFilename(filename.as_ptr(), out))
        }
    }

    pub fn create_color_context_from_wic_color_context(
        &self,
        wic: &IWICColorContext,
    ) -> Result<ComPtr<ID2D1ColorContext>> {
        unsafe {
            ComPtr::from_out_param(|out| self.CreateColorContextFromWicColorContext(wic.as_raw(), out))
        }
    }

    fn feature_data<T: Default>(&self, feature: D2D1_FEATURE, method: &'static str) -> Result<T> {
        let mut data = T::default();
        let hr = unsafe {
            self.CheckFeatureSupport(
                feature,
                ptr::from_mut(&mut data).cast::<c_void>(),
                len_u32(size_of::<T>())?,
            )
        };
        check_call(method, hr)?;
        Ok(data)
    }

    /// Whether shaders may use double-precision arithmetic
    pub fn supports_doubles(&self) -> Result<bool> {
        let data: D2D1_FEATURE_DATA_DOUBLES = self.feature_data(
            D2D1_FEATURE_DOUBLES,
            "ID2D1EffectContext::CheckFeatureSupport(DOUBLES)",
        )?;
        Ok(from_bool(data.double_precision_float_shader_ops))
    }

    /// Whether compute shaders run on this Direct3D 10.x device
    pub fn supports_d3d10_x_compute_shaders(&self) -> Result<bool> {
        let data: D2D1_FEATURE_DATA_D3D10_X_HARDWARE_OPTIONS = self.feature_data(
            D2D1_FEATURE_D3D10_X_HARDWARE_OPTIONS,
            "ID2D1EffectContext::CheckFeatureSupport(D3D10_X_HARDWARE_OPTIONS)",
        )?;
        Ok(from_bool(
            data.compute_shaders_plus_raw_and_structured_buffers_via_shader_4_x,
        ))
    }

    pub fn is_buffer_precision_supported(&self, precision: D2D1_BUFFER_PRECISION) -> bool {
        from_bool(unsafe { self.IsBufferPrecisionSupported(precision) })
    }
}

impl ID2D1EffectContext1 {
    /// `extents` holds the table size per axis, `strides` the byte strides of rows and planes.
    pub fn create_lookup_table_3d(
        &self,
        precision: D2D1_BUFFER_PRECISION,
        extents: &[u32; 3],
        data: &[u8],
        strides: &[u32; 2],
    ) -> Result<ComPtr<ID2D1LookupTable3D>> {
        let data_count = len_u32(data.len())?;
        unsafe {
            ComPtr::from_out_param(|out| {
                self.CreateLookupTable3D(
                    precision,
                    extents.as_ptr(),
                    data.as_ptr(),
                    data_count,
                    strides.as_ptr(),
                    out,
                )
            })
        }
    }
}

impl ID2D1EffectContext2 {
    pub fn create_color_context_from_dxgi_color_space(
        &self,
        color_space: DXGI_COLOR_SPACE_TYPE,
    ) -> Result<ComPtr<ID2D1ColorContext1>> {
        unsafe {
            ComPtr::from_out_param(|out| self.CreateColorContextFromDxgiColorSpace(color_space, out))
        }
    }

    pub fn create_color_context_from_simple_color_profile(
        &self,
        profile: &D2D1_SIMPLE_COLOR_PROFILE,
    ) -> Result<ComPtr<ID2D1ColorContext1>> {
        unsafe {
            ComPtr::from_out_param(|out| self.CreateColorContextFromSimpleColorProfile(profile, out))
        }
    }
}
