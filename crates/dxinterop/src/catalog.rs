//! Registry of every transcribed interface and value structure
//!
//! Used to print slot maps and struct layouts, and by the conformance tests to
//! walk the whole binding surface.

use comvtable::{IUnknown, InterfaceDescriptor, StructLayout};

use crate::foundation::*;

macro_rules! descriptors {
    ($out:ident; $($iface:ty),* $(,)?) => {
        $($out.push(InterfaceDescriptor::of::<$iface>());)*
    };
}

macro_rules! layouts {
    ($out:ident; $($ty:ty),* $(,)?) => {
        $($out.push(StructLayout::of::<$ty>());)*
    };
}

/// Descriptors of `IUnknown` and every interface of the enabled modules, each
/// listed after its base.
#[must_use]
pub fn interfaces() -> Vec<InterfaceDescriptor> {
    let mut out = vec![InterfaceDescriptor::of::<IUnknown>()];

    #[cfg(feature = "d2d1")]
    {
        use crate::d2d1::*;
        descriptors!(out;
            ID2D1VertexBuffer,
            ID2D1ResourceTexture,
            ID2D1RenderInfo,
            ID2D1DrawInfo,
            ID2D1ComputeInfo,
            ID2D1TransformNode,
            ID2D1TransformGraph,
            ID2D1Transform,
            ID2D1DrawTransform,
            ID2D1ComputeTransform,
            ID2D1AnalysisTransform,
            ID2D1SourceTransform,
            ID2D1ConcreteTransform,
            ID2D1BlendTransform,
            ID2D1BorderTransform,
            ID2D1OffsetTransform,
            ID2D1BoundsAdjustmentTransform,
            ID2D1EffectImpl,
            ID2D1EffectContext,
            ID2D1EffectContext1,
            ID2D1EffectContext2,
        );
    }

    #[cfg(feature = "dwrite")]
    {
        use crate::dwrite::*;
        descriptors!(out;
            IDWriteLocalizedStrings,
            IDWriteFontCollection,
            IDWriteFontCollection1,
            IDWriteFontList,
            IDWriteFontList1,
            IDWriteFontFamily,
            IDWriteFontFamily1,
            IDWriteStringList,
            IDWriteFontSet,
            IDWriteFontSetBuilder,
            IDWriteFontFaceReference,
            IDWriteFontDownloadListener,
            IDWriteFontDownloadQueue,
        );
    }

    out
}

/// Look up an interface of [`interfaces`] by name.
#[must_use]
pub fn interface(name: &str) -> Option<InterfaceDescriptor> {
    interfaces().into_iter().find(|desc| desc.name == name)
}

/// Size and alignment of every value structure of the enabled modules.
#[must_use]
pub fn structures() -> Vec<StructLayout> {
    let mut out = Vec::new();
    layouts!(out; RECT, POINT, D2D1_POINT_2U, D2D1_POINT_2F, FILETIME);

    #[cfg(feature = "d2d1")]
    {
        use crate::d2d1::*;
        layouts!(out;
            D2D1_PROPERTY_BINDING,
            D2D1_RESOURCE_TEXTURE_PROPERTIES,
            D2D1_INPUT_ELEMENT_DESC,
            D2D1_VERTEX_BUFFER_PROPERTIES,
            D2D1_CUSTOM_VERTEX_BUFFER_PROPERTIES,
            D2D1_VERTEX_RANGE,
            D2D1_BLEND_DESCRIPTION,
            D2D1_INPUT_DESCRIPTION,
            D2D1_FEATURE_DATA_DOUBLES,
            D2D1_FEATURE_DATA_D3D10_X_HARDWARE_OPTIONS,
            D2D1_SIMPLE_COLOR_PROFILE,
        );
    }

    #[cfg(feature = "dwrite")]
    {
        use crate::dwrite::*;
        layouts!(out;
            DWRITE_FONT_PROPERTY,
            DWRITE_LINE_METRICS,
            DWRITE_LINE_METRICS1,
            DWRITE_LINE_SPACING,
            DWRITE_FONT_AXIS_VALUE,
            DWRITE_FONT_AXIS_RANGE,
            DWRITE_FILE_FRAGMENT,
        );
    }

    out
}
