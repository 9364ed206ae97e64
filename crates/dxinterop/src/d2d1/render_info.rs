//! Render information handed to transforms: vertex buffers, resource
//! textures, draw and compute state

use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};

use comvtable::{ComError, GUID, HRESULT, Result, check_call, com_interface, failed, len_u32};

use crate::foundation::{BOOL, to_bool};

use super::enums::*;
use super::structs::*;

/// Vertex data owned by an effect for custom vertex processing
#[com_interface("9b8b1336-00a5-4668-92b7-ced5d8bf9b28")]
pub trait ID2D1VertexBuffer {
    fn Map(&self, data: *mut *mut u8, buffer_size: u32) -> HRESULT;
    fn Unmap(&self) -> HRESULT;
}

/// Lookup data sampled by shaders
#[com_interface("688d15c3-02b0-438d-b13a-d1b44c32c39a")]
pub trait ID2D1ResourceTexture {
    /// Update part of the texture. The extents hold `dimensions` entries and
    /// the strides `dimensions - 1`; null extents update the whole texture.
    fn Update(
        &self,
        minimum_extents: *const u32,
        maximum_extents: *const u32,
        strides: *const u32,
        dimensions: u32,
        data: *const u8,
        data_count: u32,
    ) -> HRESULT;
}

/// Rendering state shared by draw and compute transforms
#[com_interface("519ae1bd-d19a-420d-b849-364f594776b7")]
pub trait ID2D1RenderInfo {
    fn SetInputDescription(
        &self,
        input_index: u32,
        input_description: D2D1_INPUT_DESCRIPTION,
    ) -> HRESULT;
    fn SetOutputBuffer(
        &self,
        buffer_precision: D2D1_BUFFER_PRECISION,
        channel_depth: D2D1_CHANNEL_DEPTH,
    ) -> HRESULT;
    fn SetCached(&self, is_cached: BOOL);
    fn SetInstructionCountHint(&self, instruction_count: u32);
}

/// Pixel and vertex shader state of a draw transform
#[com_interface("693ce632-7f2f-45de-93fe-18d88b37aa21", extends(ID2D1RenderInfo))]
pub trait ID2D1DrawInfo {
    fn SetPixelShaderConstantBuffer(&self, buffer: *const u8, buffer_count: u32) -> HRESULT;
    fn SetResourceTexture(
        &self,
        texture_index: u32,
        resource_texture: *mut ID2D1ResourceTexture,
    ) -> HRESULT;
    fn SetVertexShaderConstantBuffer(&self, buffer: *const u8, buffer_count: u32) -> HRESULT;
    fn SetPixelShader(&self, shader_id: *const GUID, pixel_options: D2D1_PIXEL_OPTIONS)
    -> HRESULT;
    /// `blend_description`, `vertex_range` and `vertex_shader` may be null.
    fn SetVertexProcessing(
        &self,
        vertex_buffer: *mut ID2D1VertexBuffer,
        vertex_options: D2D1_VERTEX_OPTIONS,
        blend_description: *const D2D1_BLEND_DESCRIPTION,
        vertex_range: *const D2D1_VERTEX_RANGE,
        vertex_shader: *const GUID,
    ) -> HRESULT;
}

/// Compute shader state of a compute transform
#[com_interface("5598b14b-9fd7-48b7-9bdb-8f0964eb38bc", extends(ID2D1RenderInfo))]
pub trait ID2D1ComputeInfo {
    fn SetComputeShaderConstantBuffer(&self, buffer: *const u8, buffer_count: u32) -> HRESULT;
    fn SetComputeShader(&self, shader_id: *const GUID) -> HRESULT;
    fn SetResourceTexture(
        &self,
        texture_index: u32,
        resource_texture: *mut ID2D1ResourceTexture,
    ) -> HRESULT;
}

// =============================================================================
// Safe wrappers
// =============================================================================

/// Writable view of a mapped vertex buffer; unmaps on drop.
pub struct MappedVertexBuffer<'a> {
    buffer: &'a ID2D1VertexBuffer,
    data: NonNull<u8>,
    len: usize,
}

impl Deref for MappedVertexBuffer<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }
}

impl DerefMut for MappedVertexBuffer<'_> {
    fn deref_mut(&mut self) -> &mut [u8] {
        unsafe { std::slice::from_raw_parts_mut(self.data.as_ptr(), self.len) }
    }
}

impl Drop for MappedVertexBuffer<'_> {
    fn drop(&mut self) {
        let hr = unsafe { self.buffer.Unmap() };
        if failed(hr) {
            log::debug!("ID2D1VertexBuffer::Unmap failed: HRESULT 0x{:08X}", hr);
        }
    }
}

impl ID2D1VertexBuffer {
    /// Map `len` bytes for writing. The buffer is unmapped when the view drops.
    pub fn map(&self, len: u32) -> Result<MappedVertexBuffer<'_>> {
        let mut data = ptr::null_mut();
        check_call("ID2D1VertexBuffer::Map", unsafe { self.Map(&mut data, len) })?;
        let data = NonNull::new(data).ok_or(ComError::NullPointer)?;
        Ok(MappedVertexBuffer {
            buffer: self,
            data,
            len: len as usize,
        })
    }
}

impl ID2D1ResourceTexture {
    /// Replace the region `[minimum, maximum)` of a `dimensions`-dimensional
    /// texture with `data`.
    ///
    /// Each extent holds `dimensions` entries; `None` for both covers the
    /// whole texture. `strides` holds the byte pitch of every dimension but
    /// the first, so `dimensions - 1` entries, and may be `None` for a 1-D
    /// texture.
    pub fn update(
        &self,
        dimensions: u32,
        minimum_extents: Option<&[u32]>,
        maximum_extents: Option<&[u32]>,
        strides: Option<&[u32]>,
        data: &[u8],
    ) -> Result<()> {
        let expected = dimensions as usize;
        let checks = [
            (minimum_extents, expected),
            (maximum_extents, expected),
            (strides, expected.saturating_sub(1)),
        ];
        for (slice, expected) in checks {
            if let Some(slice) = slice.filter(|slice| slice.len() != expected) {
                return Err(ComError::LengthMismatch {
                    expected,
                    found: slice.len(),
                });
            }
        }
        let raw = |slice: Option<&[u32]>| slice.map_or(ptr::null(), <[u32]>::as_ptr);
        let hr = unsafe {
            self.Update(
                raw(minimum_extents),
                raw(maximum_extents),
                raw(strides),
                dimensions,
                data.as_ptr(),
                len_u32(data.len())?,
            )
        };
        check_call("ID2D1ResourceTexture::Update", hr).map(|_| ())
    }
}

impl ID2D1RenderInfo {
    pub fn set_input_description(
        &self,
        input_index: u32,
        description: D2D1_INPUT_DESCRIPTION,
    ) -> Result<()> {
        let hr = unsafe { self.SetInputDescription(input_index, description) };
        check_call("ID2D1RenderInfo::SetInputDescription", hr).map(|_| ())
    }

    pub fn set_output_buffer(
        &self,
        precision: D2D1_BUFFER_PRECISION,
        depth: D2D1_CHANNEL_DEPTH,
    ) -> Result<()> {
        let hr = unsafe { self.SetOutputBuffer(precision, depth) };
        check_call("ID2D1RenderInfo::SetOutputBuffer", hr).map(|_| ())
    }

    pub fn set_cached(&self, cached: bool) {
        unsafe { self.SetCached(to_bool(cached)) }
    }

    pub fn set_instruction_count_hint(&self, count: u32) {
        unsafe { self.SetInstructionCountHint(count) }
    }
}

impl ID2D1DrawInfo {
    pub fn set_pixel_shader_constant_buffer(&self, buffer: &[u8]) -> Result<()> {
        let hr = unsafe { self.SetPixelShaderConstantBuffer(buffer.as_ptr(), len_u32(buffer.len())?) };
        check_call("ID2D1DrawInfo::SetPixelShaderConstantBuffer", hr).map(|_| ())
    }

    pub fn set_vertex_shader_constant_buffer(&self, buffer: &[u8]) -> Result<()> {
        let hr =
            unsafe { self.SetVertexShaderConstantBuffer(buffer.as_ptr(), len_u32(buffer.len())?) };
        check_call("ID2D1DrawInfo::SetVertexShaderConstantBuffer", hr).map(|_| ())
    }

    pub fn set_resource_texture(&self, index: u32, texture: &ID2D1ResourceTexture) -> Result<()> {
        let hr = unsafe { self.SetResourceTexture(index, texture.as_raw()) };
        check_call("ID2D1DrawInfo::SetResourceTexture", hr).map(|_| ())
    }

    /// Select a pixel shader previously loaded with `LoadPixelShader`.
    pub fn set_pixel_shader(&self, shader_id: &GUID, options: D2D1_PIXEL_OPTIONS) -> Result<()> {
        let hr = unsafe { self.SetPixelShader(shader_id, options) };
        check_call("ID2D1DrawInfo::SetPixelShader", hr).map(|_| ())
    }

    /// Configure vertex processing; `None` passes null for the optional parts.
    pub fn set_vertex_processing(
        &self,
        vertex_buffer: Option<&ID2D1VertexBuffer>,
        options: D2D1_VERTEX_OPTIONS,
        blend: Option<&D2D1_BLEND_DESCRIPTION>,
        range: Option<&D2D1_VERTEX_RANGE>,
        vertex_shader: Option<&GUID>,
    ) -> Result<()> {
        let hr = unsafe {
            self.SetVertexProcessing(
                vertex_buffer.map_or(ptr::null_mut(), |vb| vb.as_raw()),
                options,
                blend.map_or(ptr::null(), ptr::from_ref),
                range.map_or(ptr::null(), ptr::from_ref),
                vertex_shader.map_or(ptr::null(), ptr::from_ref),
            )
        };
        check_call("ID2D1DrawInfo::SetVertexProcessing", hr).map(|_| ())
    }
}

impl ID2D1ComputeInfo {
    pub fn set_compute_shader_constant_buffer(&self, buffer: &[u8]) -> Result<()> {
        let hr =
            unsafe { self.SetComputeShaderConstantBuffer(buffer.as_ptr(), len_u32(buffer.len())?) };
        check_call("ID2D1ComputeInfo::SetComputeShaderConstantBuffer", hr).map(|_| ())
    }

    pub fn set_compute_shader(&self, shader_id: &GUID) -> Result<()> {
        let hr = unsafe { self.SetComputeShader(shader_id) };
        check_call("ID2D1ComputeInfo::SetComputeShader", hr).map(|_| ())
    }

    pub fn set_resource_texture(&self, index: u32, texture: &ID2D1ResourceTexture) -> Result<()> {
        let hr = unsafe { self.SetResourceTexture(index, texture.as_raw()) };
        check_call("ID2D1ComputeInfo::SetResourceTexture", hr).map(|_| ())
    }
}
