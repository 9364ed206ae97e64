//! Font collections, families and font lists

use comvtable::{ComPtr, HRESULT, Result, check_call, com_interface, wide::to_wide};

use crate::foundation::{BOOL, FALSE, PCWSTR, from_bool};

use super::enums::*;
use super::font_set::{IDWriteFontFaceReference, IDWriteFontSet};
use super::foreign::{IDWriteFont, IDWriteFont3, IDWriteFontFace};
use super::strings::IDWriteLocalizedStrings;

/// A set of font families
#[com_interface("a84cee02-3eea-4eee-a827-87c1a02a0fcc")]
pub trait IDWriteFontCollection {
    fn GetFontFamilyCount(&self) -> u32;
    fn GetFontFamily(&self, index: u32, font_family: *mut *mut IDWriteFontFamily) -> HRESULT;
    fn FindFamilyName(&self, family_name: PCWSTR, index: *mut u32, exists: *mut BOOL) -> HRESULT;
    fn GetFontFromFontFace(
        &self,
        font_face: *mut IDWriteFontFace,
        font: *mut *mut IDWriteFont,
    ) -> HRESULT;
}

/// A font collection backed by a font set
#[com_interface("53585141-d9f8-4095-8321-d73cf6bd116c", extends(IDWriteFontCollection))]
pub trait IDWriteFontCollection1 {
    fn GetFontSet(&self, font_set: *mut *mut IDWriteFontSet) -> HRESULT;
    fn GetFontFamily(&self, index: u32, font_family: *mut *mut IDWriteFontFamily1) -> HRESULT;
}

/// An ordered list of fonts
#[com_interface("1a0d8438-1d97-4ec1-aef9-a2fb86ed6acb")]
pub trait IDWriteFontList {
    fn GetFontCollection(&self, font_collection: *mut *mut IDWriteFontCollection) -> HRESULT;
    fn GetFontCount(&self) -> u32;
    fn GetFont(&self, index: u32, font: *mut *mut IDWriteFont) -> HRESULT;
}

/// Fonts sharing a family name, differing in weight, stretch and style
#[com_interface("da20d8ef-812a-4c43-9802-62ec4abd7add", extends(IDWriteFontList))]
pub trait IDWriteFontFamily {
    fn GetFamilyNames(&self, names: *mut *mut IDWriteLocalizedStrings) -> HRESULT;
    fn GetFirstMatchingFont(
        &self,
        weight: DWRITE_FONT_WEIGHT,
        stretch: DWRITE_FONT_STRETCH,
        style: DWRITE_FONT_STYLE,
        matching_font: *mut *mut IDWriteFont,
    ) -> HRESULT;
    fn GetMatchingFonts(
        &self,
        weight: DWRITE_FONT_WEIGHT,
        stretch: DWRITE_FONT_STRETCH,
        style: DWRITE_FONT_STYLE,
        matching_fonts: *mut *mut IDWriteFontList,
    ) -> HRESULT;
}

/// Font list whose fonts may be remote
#[com_interface("da20d8ef-812a-4c43-9802-62ec4abd7ade", extends(IDWriteFontList))]
pub trait IDWriteFontList1 {
    fn GetFontLocality(&self, list_index: u32) -> DWRITE_LOCALITY;
    fn GetFont(&self, list_index: u32, font: *mut *mut IDWriteFont3) -> HRESULT;
    fn GetFontFaceReference(
        &self,
        list_index: u32,
        font_face_reference: *mut *mut IDWriteFontFaceReference,
    ) -> HRESULT;
}

/// Font family whose fonts may be remote
#[com_interface("da20d8ef-812a-4c43-9802-62ec4abd7adf", extends(IDWriteFontFamily))]
pub trait IDWriteFontFamily1 {
    fn GetFontLocality(&self, list_index: u32) -> DWRITE_LOCALITY;
    fn GetFont(&self, list_index: u32, font: *mut *mut IDWriteFont3) -> HRESULT;
    fn GetFontFaceReference(
        &self,
        list_index: u32,
        font_face_reference: *mut *mut IDWriteFontFaceReference,
    ) -> HRESULT;
}

impl IDWriteFontCollection {
    pub fn family_count(&self) -> u32 {
        unsafe { self.GetFontFamilyCount() }
    }

    pub fn family(&self, index: u32) -> Result<ComPtr<IDWriteFontFamily>> {
        unsafe { ComPtr::from_out_param(|out| self.GetFontFamily(index, out)) }
    }

    /// Index of the family named `name`, if the collection has it.
    pub fn find_family_name(&self, name: &str) -> Result<Option<u32>> {
        let name = to_wide(name);
        let mut index = 0;
        let mut exists = FALSE;
        check_call("IDWriteFontCollection::FindFamilyName", unsafe {
            self.FindFamilyName(name.as_ptr(), &mut index, &mut exists)
        })?;
        Ok(from_bool(exists).then_some(index))
    }

    pub fn font_from_font_face(&self, font_face: &IDWriteFontFace) -> Result<ComPtr<IDWriteFont>> {
        unsafe { ComPtr::from_out_param(|out| self.GetFontFromFontFace(font_face.as_raw(), out)) }
    }
}

impl IDWriteFontCollection1 {
    pub fn font_set(&self) -> Result<ComPtr<IDWriteFontSet>> {
        unsafe { ComPtr::from_out_param(|out| self.GetFontSet(out)) }
    }

    pub fn family1(&self, index: u32) -> Result<ComPtr<IDWriteFontFamily1>> {
        unsafe { ComPtr::from_out_param(|out| self.GetFontFamily(index, out)) }
    }
}

impl IDWriteFontList {
    pub fn font_collection(&self) -> Result<ComPtr<IDWriteFontCollection>> {
        unsafe { ComPtr::from_out_param(|out| self.GetFontCollection(out)) }
    }

    pub fn font_count(&self) -> u32 {
        unsafe { self.GetFontCount() }
    }

    pub fn font(&self, index: u32) -> Result<ComPtr<IDWriteFont>> {
        unsafe { ComPtr::from_out_param(|out| self.GetFont(index, out)) }
    }
}

impl IDWriteFontFamily {
    pub fn family_names(&self) -> Result<ComPtr<IDWriteLocalizedStrings>> {
        unsafe { ComPtr::from_out_param(|out| self.GetFamilyNames(out)) }
    }

    pub fn first_matching_font(
        &self,
        weight: DWRITE_FONT_WEIGHT,
        stretch: DWRITE_FONT_STRETCH,
        style: DWRITE_FONT_STYLE,
    ) -> Result<ComPtr<IDWriteFont>> {
        unsafe {
            ComPtr::from_out_param(|out| self.GetFirstMatchingFont(weight, stretch, style, out))
        }
    }

    /// Fonts ordered from best to worst match.
    pub fn matching_fonts(
        &self,
        weight: DWRITE_FONT_WEIGHT,
        stretch: DWRITE_FONT_STRETCH,
        style: DWRITE_FONT_STYLE,
    ) -> Result<ComPtr<IDWriteFontList>> {
        unsafe { ComPtr::from_out_param(|out| self.GetMatchingFonts(weight, stretch, style, out)) }
    }
}

impl IDWriteFontList1 {
    pub fn font_locality(&self, list_index: u32) -> DWRITE_LOCALITY {
        unsafe { self.GetFontLocality(list_index) }
    }

    pub fn font3(&self, list_index: u32) -> Result<ComPtr<IDWriteFont3>> {
        unsafe { ComPtr::from_out_param(|out| self.GetFont(list_index, out)) }
    }

    pub fn font_face_reference(&self, list_index: u32) -> Result<ComPtr<IDWriteFontFaceReference>> {
        unsafe { ComPtr::from_out_param(|out| self.GetFontFaceReference(list_index, out)) }
    }
}

impl IDWriteFontFamily1 {
    pub fn font_locality(&self, list_index: u32) -> DWRITE_LOCALITY {
        unsafe { self.GetFontLocality(list_index) }
    }

    pub fn font3(&self, list_index: u32) -> Result<ComPtr<IDWriteFont3>> {
        unsafe { ComPtr::from_out_param(|out| self.GetFont(list_index, out)) }
    }

    pub fn font_face_reference(&self, list_index: u32) -> Result<ComPtr<IDWriteFontFaceReference>> {
        unsafe { ComPtr::from_out_param(|out| self.GetFontFaceReference(list_index, out)) }
    }
}
