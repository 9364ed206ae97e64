//! Transform nodes and the transform graph an effect builds

use comvtable::{ComError, HRESULT, Result, check_call, com_interface, len_u32};

use crate::foundation::{BOOL, D2D1_POINT_2L, D2D1_POINT_2U, D2D1_RECT_L, to_bool};

use super::enums::*;
use super::foreign::ID2D1Bitmap1;
use super::render_info::{ID2D1ComputeInfo, ID2D1DrawInfo, ID2D1RenderInfo};
use super::structs::*;

/// A node of a transform graph
#[com_interface("b2efe1e7-729f-4102-949f-505fa21bf666")]
pub trait ID2D1TransformNode {
    fn GetInputCount(&self) -> u32;
}

/// The graph of transform nodes that renders an effect
#[com_interface("13d29038-c3e6-4034-9081-13b53a417992")]
pub trait ID2D1TransformGraph {
    fn GetInputCount(&self) -> u32;
    fn SetSingleTransformNode(&self, node: *mut ID2D1TransformNode) -> HRESULT;
    fn AddNode(&self, node: *mut ID2D1TransformNode) -> HRESULT;
    fn RemoveNode(&self, node: *mut ID2D1TransformNode) -> HRESULT;
    fn SetOutputNode(&self, node: *mut ID2D1TransformNode) -> HRESULT;
    fn ConnectNode(
        &self,
        from_node: *mut ID2D1TransformNode,
        to_node: *mut ID2D1TransformNode,
        to_node_input_index: u32,
    ) -> HRESULT;
    fn ConnectToEffectInput(
        &self,
        to_effect_input_index: u32,
        node: *mut ID2D1TransformNode,
        to_node_input_index: u32,
    ) -> HRESULT;
    fn Clear(&self);
    fn SetPassthroughGraph(&self, effect_input_index: u32) -> HRESULT;
}

/// A node that maps rectangles between its inputs and its output
#[com_interface("ef1a287d-342a-4f76-8fdb-da0d6ea9f92b", extends(ID2D1TransformNode))]
pub trait ID2D1Transform {
    fn MapOutputRectToInputRects(
        &self,
        output_rect: *const D2D1_RECT_L,
        input_rects: *mut D2D1_RECT_L,
        input_rects_count: u32,
    ) -> HRESULT;
    fn MapInputRectsToOutputRect(
        &self,
        input_rects: *const D2D1_RECT_L,
        input_opaque_sub_rects: *const D2D1_RECT_L,
        input_rect_count: u32,
        output_rect: *mut D2D1_RECT_L,
        output_opaque_sub_rect: *mut D2D1_RECT_L,
    ) -> HRESULT;
    fn MapInvalidRect(
        &self,
        input_index: u32,
        invalid_input_rect: D2D1_RECT_L,
        invalid_output_rect: *mut D2D1_RECT_L,
    ) -> HRESULT;
}

/// A transform rendered with pixel (and optionally vertex) shaders
#[com_interface("36bfdcb6-9739-435d-a30d-a653beff6a6f", extends(ID2D1Transform))]
pub trait ID2D1DrawTransform {
    fn SetDrawInfo(&self, draw_info: *mut ID2D1DrawInfo) -> HRESULT;
}

/// A transform rendered with a compute shader
#[com_interface("0d85573c-01e3-4f7d-bfd9-0d60608bf3c3", extends(ID2D1Transform))]
pub trait ID2D1ComputeTransform {
    fn SetComputeInfo(&self, compute_info: *mut ID2D1ComputeInfo) -> HRESULT;
    fn CalculateThreadgroups(
        &self,
        output_rect: *const D2D1_RECT_L,
        dimension_x: *mut u32,
        dimension_y: *mut u32,
        dimension_z: *mut u32,
    ) -> HRESULT;
}

/// Receives the output of an analysis pass on the CPU
#[com_interface("0359dc30-95e6-4568-9055-27720d130e93")]
pub trait ID2D1AnalysisTransform {
    fn ProcessAnalysisResults(&self, analysis_data: *const u8, analysis_data_count: u32)
    -> HRESULT;
}

/// A transform that renders on the CPU into a bitmap
#[com_interface("db1800dd-0c34-4cf9-be90-31cc0a5653e1", extends(ID2D1Transform))]
pub trait ID2D1SourceTransform {
    fn SetRenderInfo(&self, render_info: *mut ID2D1RenderInfo) -> HRESULT;
    fn Draw(
        &self,
        target: *mut ID2D1Bitmap1,
        draw_rect: *const D2D1_RECT_L,
        target_origin: D2D1_POINT_2U,
    ) -> HRESULT;
}

/// Base of the built-in transforms
#[com_interface("1a799d8a-69f7-4e4c-9fed-437ccc6684cc", extends(ID2D1TransformNode))]
pub trait ID2D1ConcreteTransform {
    fn SetOutputBuffer(
        &self,
        buffer_precision: D2D1_BUFFER_PRECISION,
        channel_depth: D2D1_CHANNEL_DEPTH,
    ) -> HRESULT;
    fn SetCached(&self, is_cached: BOOL);
}

/// Built-in transform blending its inputs
#[com_interface("63ac0b32-ba44-450f-8806-7f4ca1ff2f1b", extends(ID2D1ConcreteTransform))]
pub trait ID2D1BlendTransform {
    fn SetDescription(&self, description: *const D2D1_BLEND_DESCRIPTION);
    fn GetDescription(&self, description: *mut D2D1_BLEND_DESCRIPTION);
}

/// Built-in transform extending its input beyond its bounds
#[com_interface("4998735c-3a19-473c-9781-656847e3a347", extends(ID2D1ConcreteTransform))]
pub trait ID2D1BorderTransform {
    fn SetExtendModeX(&self, extend_mode: D2D1_EXTEND_MODE);
    fn SetExtendModeY(&self, extend_mode: D2D1_EXTEND_MODE);
    fn GetExtendModeX(&self) -> D2D1_EXTEND_MODE;
    fn GetExtendModeY(&self) -> D2D1_EXTEND_MODE;
}

/// Built-in transform offsetting its input by whole pixels
#[com_interface("3fe6adea-7643-4f53-bd14-a0ce63f24042", extends(ID2D1TransformNode))]
pub trait ID2D1OffsetTransform {
    fn SetOffset(&self, offset: D2D1_POINT_2L);
    /// Returns a structure in C++; the MSVC member-function ABI passes the
    /// result slot after `this` and hands it back.
    fn GetOffset(&self, result: *mut D2D1_POINT_2L) -> *mut D2D1_POINT_2L;
}

/// Built-in transform overriding the output bounds of its input
#[com_interface("90f732e2-5092-4606-a819-8651970baccd", extends(ID2D1TransformNode))]
pub trait ID2D1BoundsAdjustmentTransform {
    fn SetOutputBounds(&self, output_bounds: *const D2D1_RECT_L);
    fn GetOutputBounds(&self, output_bounds: *mut D2D1_RECT_L);
}

// =============================================================================
// Safe wrappers
// =============================================================================

impl ID2D1TransformNode {
    pub fn input_count(&self) -> u32 {
        unsafe { self.GetInputCount() }
    }
}

impl ID2D1TransformGraph {
    /// Number of inputs of the effect owning this graph
    pub fn input_count(&self) -> u32 {
        unsafe { self.GetInputCount() }
    }

    /// Replace the whole graph with one node wired to every effect input.
    pub fn set_single_transform_node(&self, node: &ID2D1TransformNode) -> Result<()> {
        let hr = unsafe { self.SetSingleTransformNode(node.as_raw()) };
        check_call("ID2D1TransformGraph::SetSingleTransformNode", hr).map(|_| ())
    }

    pub fn add_node(&self, node: &ID2D1TransformNode) -> Result<()> {
        let hr = unsafe { self.AddNode(node.as_raw()) };
        check_call("ID2D1TransformGraph::AddNode", hr).map(|_| ())
    }

    pub fn remove_node(&self, node: &ID2D1TransformNode) -> Result<()> {
        let hr = unsafe { self.RemoveNode(node.as_raw()) };
        check_call("ID2D1TransformGraph::RemoveNode", hr).map(|_| ())
    }

    pub fn set_output_node(&self, node: &ID2D1TransformNode) -> Result<()> {
        let hr = unsafe { self.SetOutputNode(node.as_raw()) };
        check_call("ID2D1TransformGraph::SetOutputNode", hr).map(|_| ())
    }

    pub fn connect_node(
        &self,
        from: &ID2D1TransformNode,
        to: &ID2D1TransformNode,
        to_input_index: u32,
    ) -> Result<()> {
        let hr = unsafe { self.ConnectNode(from.as_raw(), to.as_raw(), to_input_index) };
        check_call("ID2D1TransformGraph::ConnectNode", hr).map(|_| ())
    }

    pub fn connect_to_effect_input(
        &self,
        effect_input_index: u32,
        node: &ID2D1TransformNode,
        node_input_index: u32,
    ) -> Result<()> {
        let hr =
            unsafe { self.ConnectToEffectInput(effect_input_index, node.as_raw(), node_input_index) };
        check_call("ID2D1TransformGraph::ConnectToEffectInput", hr).map(|_| ())
    }

    pub fn clear(&self) {
        unsafe { self.Clear() }
    }

    /// Pass one effect input straight through to the output.
    pub fn set_passthrough_graph(&self, effect_input_index: u32) -> Result<()> {
        let hr = unsafe { self.SetPassthroughGraph(effect_input_index) };
        check_call("ID2D1TransformGraph::SetPassthroughGraph", hr).map(|_| ())
    }
}

impl ID2D1Transform {
    /// Fill one input rectangle per entry of `input_rects`.
    pub fn map_output_rect_to_input_rects(
        &self,
        output_rect: &D2D1_RECT_L,
        input_rects: &mut [D2D1_RECT_L],
    ) -> Result<()> {
        let count = len_u32(input_rects.len())?;
        let hr = unsafe {
            self.MapOutputRectToInputRects(output_rect, input_rects.as_mut_ptr(), count)
        };
        check_call("ID2D1Transform::MapOutputRectToInputRects", hr).map(|_| ())
    }

    /// Returns `(output_rect, output_opaque_sub_rect)`.
    pub fn map_input_rects_to_output_rect(
        &self,
        input_rects: &[D2D1_RECT_L],
        input_opaque_sub_rects: &[D2D1_RECT_L],
    ) -> Result<(D2D1_RECT_L, D2D1_RECT_L)> {
        if input_rects.len() != input_opaque_sub_rects.len() {
            return Err(ComError::LengthMismatch {
                expected: input_rects.len(),
                found: input_opaque_sub_rects.len(),
            });
        }
        let mut output = D2D1_RECT_L::default();
        let mut opaque = D2D1_RECT_L::default();
        let hr = unsafe {
            self.MapInputRectsToOutputRect(
                input_rects.as_ptr(),
                input_opaque_sub_rects.as_ptr(),
                len_u32(input_rects.len())?,
                &mut output,
                &mut opaque,
            )
        };
        check_call("ID2D1Transform::MapInputRectsToOutputRect", hr)?;
        Ok((output, opaque))
    }

    pub fn map_invalid_rect(&self, input_index: u32, invalid: D2D1_RECT_L) -> Result<D2D1_RECT_L> {
        let mut output = D2D1_RECT_L::default();
        let hr = unsafe { self.MapInvalidRect(input_index, invalid, &mut output) };
        check_call("ID2D1Transform::MapInvalidRect", hr)?;
        Ok(output)
    }
}

impl ID2D1DrawTransform {
    pub fn set_draw_info(&self, draw_info: &ID2D1DrawInfo) -> Result<()> {
        let hr = unsafe { self.SetDrawInfo(draw_info.as_raw()) };
        check_call("ID2D1DrawTransform::SetDrawInfo", hr).map(|_| ())
    }
}

impl ID2D1ComputeTransform {
    pub fn set_compute_info(&self, compute_info: &ID2D1ComputeInfo) -> Result<()> {
        let hr = unsafe { self.SetComputeInfo(compute_info.as_raw()) };
        check_call("ID2D1ComputeTransform::SetComputeInfo", hr).map(|_| ())
    }

    /// Thread group counts `[x, y, z]` for rendering `output_rect`.
    pub fn calculate_threadgroups(&self, output_rect: &D2D1_RECT_L) -> Result<[u32; 3]> {
        let [mut x, mut y, mut z] = [0u32; 3];
        let hr = unsafe { self.CalculateThreadgroups(output_rect, &mut x, &mut y, &mut z) };
        check_call("ID2D1ComputeTransform::CalculateThreadgroups", hr)?;
        Ok([x, y, z])
    }
}

impl ID2D1AnalysisTransform {
    pub fn process_analysis_results(&self, data: &[u8]) -> Result<()> {
        let hr = unsafe { self.ProcessAnalysisResults(data.as_ptr(), len_u32(data.len())?) };
        check_call("ID2D1AnalysisTransform::ProcessAnalysisResults", hr).map(|_| ())
    }
}

impl ID2D1SourceTransform {
    pub fn set_render_info(&self, render_info: &ID2D1RenderInfo) -> Result<()> {
        let hr = unsafe { self.SetRenderInfo(render_info.as_raw()) };
        check_call("ID2D1SourceTransform::SetRenderInfo", hr).map(|_| ())
    }

    pub fn draw(
        &self,
        target: &ID2D1Bitmap1,
        draw_rect: &D2D1_RECT_L,
        target_origin: D2D1_POINT_2U,
    ) -> Result<()> {
        let hr = unsafe { self.Draw(target.as_raw(), draw_rect, target_origin) };
        check_call("ID2D1SourceTransform::Draw", hr).map(|_| ())
    }
}

impl ID2D1ConcreteTransform {
    pub fn set_output_buffer(
        &self,
        precision: D2D1_BUFFER_PRECISION,
        depth: D2D1_CHANNEL_DEPTH,
    ) -> Result<()> {
        let hr = unsafe { self.SetOutputBuffer(precision, depth) };
        check_call("ID2D1ConcreteTransform::SetOutputBuffer", hr).map(|_| ())
    }

    pub fn set_cached(&self, cached: bool) {
        unsafe { self.SetCached(to_bool(cached)) }
    }
}

impl ID2D1BlendTransform {
    pub fn description(&self) -> D2D1_BLEND_DESCRIPTION {
        let mut description = D2D1_BLEND_DESCRIPTION::default();
        unsafe { self.GetDescription(&mut description) };
        description
    }

    pub fn set_description(&self, description: &D2D1_BLEND_DESCRIPTION) {
        unsafe { self.SetDescription(description) }
    }
}

impl ID2D1BorderTransform {
    pub fn extend_mode_x(&self) -> D2D1_EXTEND_MODE {
        unsafe { self.GetExtendModeX() }
    }

    pub fn extend_mode_y(&self) -> D2D1_EXTEND_MODE {
        unsafe { self.GetExtendModeY() }
    }

    pub fn set_extend_mode_x(&self, mode: D2D1_EXTEND_MODE) {
        unsafe { self.SetExtendModeX(mode) }
    }

    pub fn set_extend_mode_y(&self, mode: D2D1_EXTEND_MODE) {
        unsafe { self.SetExtendModeY(mode) }
    }
}

impl ID2D1OffsetTransform {
    pub fn offset(&self) -> D2D1_POINT_2L {
        let mut offset = D2D1_POINT_2L::default();
        unsafe { self.GetOffset(&mut offset) };
        offset
    }

    pub fn set_offset(&self, offset: D2D1_POINT_2L) {
        unsafe { self.SetOffset(offset) }
    }
}

impl ID2D1BoundsAdjustmentTransform {
    pub fn output_bounds(&self) -> D2D1_RECT_L {
        let mut bounds = D2D1_RECT_L::default();
        unsafe { self.GetOutputBounds(&mut bounds) };
        bounds
    }

    pub fn set_output_bounds(&self, bounds: &D2D1_RECT_L) {
        unsafe { self.SetOutputBounds(bounds) }
    }
}
