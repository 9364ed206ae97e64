//! Font sets, font set builders and font face references

use comvtable::{ComPtr, HRESULT, Result, check_call, com_interface, len_u32, wide::to_wide};

use crate::foundation::{BOOL, FALSE, FILETIME, PCWSTR, WCHAR, from_bool};

use super::enums::*;
use super::foreign::{IDWriteFontFace, IDWriteFontFace3, IDWriteFontFile};
use super::strings::{IDWriteLocalizedStrings, IDWriteStringList};
use super::structs::*;

/// An unordered set of font face references, local or remote
#[com_interface("53585141-d9f8-4095-8321-d73cf6bd116b")]
pub trait IDWriteFontSet {
    fn GetFontCount(&self) -> u32;
    fn GetFontFaceReference(
        &self,
        list_index: u32,
        font_face_reference: *mut *mut IDWriteFontFaceReference,
    ) -> HRESULT;
    fn FindFontFaceReference(
        &self,
        font_face_reference: *mut IDWriteFontFaceReference,
        list_index: *mut u32,
        exists: *mut BOOL,
    ) -> HRESULT;
    fn FindFontFace(
        &self,
        font_face: *mut IDWriteFontFace,
        list_index: *mut u32,
        exists: *mut BOOL,
    ) -> HRESULT;
    /// Distinct values of a property across the set.
    fn GetPropertyValues(
        &self,
        property_id: DWRITE_FONT_PROPERTY_ID,
        values: *mut *mut IDWriteStringList,
    ) -> HRESULT;
    /// Distinct values of a property across the set, preferred locales first.
    /// `preferred_locale_names` is a semicolon-separated list.
    fn GetPropertyValues2(
        &self,
        property_id: DWRITE_FONT_PROPERTY_ID,
        preferred_locale_names: PCWSTR,
        values: *mut *mut IDWriteStringList,
    ) -> HRESULT;
    /// Values of one property of one font. `values` may be left null.
    fn GetPropertyValues3(
        &self,
        list_index: u32,
        property_id: DWRITE_FONT_PROPERTY_ID,
        exists: *mut BOOL,
        values: *mut *mut IDWriteLocalizedStrings,
    ) -> HRESULT;
    fn GetPropertyOccurrenceCount(
        &self,
        property: *const DWRITE_FONT_PROPERTY,
        property_occurrence_count: *mut u32,
    ) -> HRESULT;
    fn GetMatchingFonts(
        &self,
        family_name: PCWSTR,
        font_weight: DWRITE_FONT_WEIGHT,
        font_stretch: DWRITE_FONT_STRETCH,
        font_style: DWRITE_FONT_STYLE,
        filtered_set: *mut *mut IDWriteFontSet,
    ) -> HRESULT;
    fn GetMatchingFonts2(
        &self,
        properties: *const DWRITE_FONT_PROPERTY,
        property_count: u32,
        filtered_set: *mut *mut IDWriteFontSet,
    ) -> HRESULT;
}

/// Accumulates font face references into a new font set
#[com_interface("2f642afe-9c68-4f40-b8be-457401afcb3d")]
pub trait IDWriteFontSetBuilder {
    /// Add a reference with caller-supplied properties instead of those read
    /// from the font.
    fn AddFontFaceReference(
        &self,
        font_face_reference: *mut IDWriteFontFaceReference,
        properties: *const DWRITE_FONT_PROPERTY,
        property_count: u32,
    ) -> HRESULT;
    fn AddFontFaceReference2(&self, font_face_reference: *mut IDWriteFontFaceReference)
    -> HRESULT;
    fn AddFontSet(&self, font_set: *mut IDWriteFontSet) -> HRESULT;
    fn CreateFontSet(&self, font_set: *mut *mut IDWriteFontSet) -> HRESULT;
}

/// A font face within a font file, possibly not yet downloaded
#[com_interface("5e7fa7ca-dde3-424c-89f0-9fcd6fed58cd")]
pub trait IDWriteFontFaceReference {
    fn CreateFontFace(&self, font_face: *mut *mut IDWriteFontFace3) -> HRESULT;
    fn CreateFontFaceWithSimulations(
        &self,
        font_face_simulation_flags: DWRITE_FONT_SIMULATIONS,
        font_face: *mut *mut IDWriteFontFace3,
    ) -> HRESULT;
    fn Equals(&self, font_face_reference: *mut IDWriteFontFaceReference) -> BOOL;
    fn GetFontFaceIndex(&self) -> u32;
    fn GetSimulations(&self) -> DWRITE_FONT_SIMULATIONS;
    fn GetFontFile(&self, font_file: *mut *mut IDWriteFontFile) -> HRESULT;
    /// Bytes of the file already available locally
    fn GetLocalFileSize(&self) -> u64;
    fn GetFileSize(&self) -> u64;
    fn GetFileTime(&self, last_write_time: *mut FILETIME) -> HRESULT;
    fn GetLocality(&self) -> DWRITE_LOCALITY;
    fn EnqueueFontDownloadRequest(&self) -> HRESULT;
    fn EnqueueCharacterDownloadRequest(&self, characters: *const WCHAR, character_count: u32)
    -> HRESULT;
    fn EnqueueGlyphDownloadRequest(&self, glyph_indices: *const u16, glyph_count: u32)
    -> HRESULT;
    fn EnqueueFileFragmentDownloadRequest(&self, file_offset: u64, fragment_size: u64)
    -> HRESULT;
}

impl IDWriteFontSet {
    pub fn font_count(&self) -> u32 {
        unsafe { self.GetFontCount() }
    }

    pub fn font_face_reference(&self, list_index: u32) -> Result<ComPtr<IDWriteFontFaceReference>> {
        unsafe { ComPtr::from_out_param(|out| self.GetFontFaceReference(list_index, out)) }
    }

    pub fn find_font_face_reference(
        &self,
        reference: &IDWriteFontFaceReference,
    ) -> Result<Option<u32>> {
        let mut index = 0;
        let mut exists = FALSE;
        check_call("IDWriteFontSet::FindFontFaceReference", unsafe {
            self.FindFontFaceReference(reference.as_raw(), &mut index, &mut exists)
        })?;
        Ok(from_bool(exists).then_some(index))
    }

    pub fn find_font_face(&self, font_face: &IDWriteFontFace) -> Result<Option<u32>> {
        let mut index = 0;
        let mut exists = FALSE;
        check_call("IDWriteFontSet::FindFontFace", unsafe {
            self.FindFontFace(font_face.as_raw(), &mut index, &mut exists)
        })?;
        Ok(from_bool(exists).then_some(index))
    }

    /// Values of `property` for the font at `list_index`; `None` when the font
    /// lacks the property.
    pub fn font_property_values(
        &self,
        list_index: u32,
        property: DWRITE_FONT_PROPERTY_ID,
    ) -> Result<Option<ComPtr<IDWriteLocalizedStrings>>> {
        let mut exists = FALSE;
        let mut values = std::ptr::null_mut();
        check_call("IDWriteFontSet::GetPropertyValues", unsafe {
            self.GetPropertyValues3(list_index, property, &mut exists, &mut values)
        })?;
        let values = unsafe { ComPtr::from_raw(values) };
        Ok(if from_bool(exists) { values } else { None })
    }

    /// Distinct values of `property` across the set, in `preferred_locales`
    /// (semicolon-separated) when given.
    pub fn property_values(
        &self,
        property: DWRITE_FONT_PROPERTY_ID,
        preferred_locales: Option<&str>,
    ) -> Result<ComPtr<IDWriteStringList>> {
        match preferred_locales {
            Some(locales) => {
                let locales = to_wide(locales);
                unsafe {
                    ComPtr::from_out_param(|out| {
                        self.GetPropertyValues2(property, locales.as_ptr(), out)
                    })
                }
            }
            None => unsafe { ComPtr::from_out_param(|out| self.GetPropertyValues(property, out)) },
        }
    }

    /// Number of fonts matching `property`.
    pub fn property_occurrence_count(&self, property: &DWRITE_FONT_PROPERTY) -> Result<u32> {
        let mut count = 0;
        check_call("IDWriteFontSet::GetPropertyOccurrenceCount", unsafe {
            self.GetPropertyOccurrenceCount(property, &mut count)
        })?;
        Ok(count)
    }

    pub fn matching_fonts(
        &self,
        family_name: &str,
        weight: DWRITE_FONT_WEIGHT,
        stretch: DWRITE_FONT_STRETCH,
        style: DWRITE_FONT_STYLE,
    ) -> Result<ComPtr<IDWriteFontSet>> {
        let family_name = to_wide(family_name);
        unsafe {
            ComPtr::from_out_param(|out| {
                self.GetMatchingFonts(family_name.as_ptr(), weight, stretch, style, out)
            })
        }
    }

    /// Subset of fonts matching every property in `properties`.
    pub fn matching_fonts_by_properties(
        &self,
        properties: &[DWRITE_FONT_PROPERTY],
    ) -> Result<ComPtr<IDWriteFontSet>> {
        let count = len_u32(properties.len())?;
        unsafe {
            ComPtr::from_out_param(|out| self.GetMatchingFonts2(properties.as_ptr(), count, out))
        }
    }
}

impl IDWriteFontSetBuilder {
    pub fn add_font_face_reference(&self, reference: &IDWriteFontFaceReference) -> Result<()> {
        check_call("IDWriteFontSetBuilder::AddFontFaceReference", unsafe {
            self.AddFontFaceReference2(reference.as_raw())
        })?;
        Ok(())
    }

    pub fn add_font_face_reference_with_properties(
        &self,
        reference: &IDWriteFontFaceReference,
        properties: &[DWRITE_FONT_PROPERTY],
    ) -> Result<()> {
        let count = len_u32(properties.len())?;
        check_call("IDWriteFontSetBuilder::AddFontFaceReference", unsafe {
            self.AddFontFaceReference(reference.as_raw(), properties.as_ptr(), count)
        })?;
        Ok(())
    }

    pub fn add_font_set(&self, font_set: &IDWriteFontSet) -> Result<()> {
        check_call("IDWriteFontSetBuilder::AddFontSet", unsafe {
            self.AddFontSet(font_set.as_raw())
        })?;
        Ok(())
    }

    pub fn create_font_set(&self) -> Result<ComPtr<IDWriteFontSet>> {
        unsafe { ComPtr::from_out_param(|out| self.CreateFontSet(out)) }
    }
}

impl IDWriteFontFaceReference {
    pub fn create_font_face(&self) -> Result<ComPtr<IDWriteFontFace3>> {
        unsafe { ComPtr::from_out_param(|out| self.CreateFontFace(out)) }
    }

    pub fn create_font_face_with_simulations(
        &self,
        simulations: DWRITE_FONT_SIMULATIONS,
    ) -> Result<ComPtr<IDWriteFontFace3>> {
        unsafe { ComPtr::from_out_param(|out| self.CreateFontFaceWithSimulations(simulations, out)) }
    }

    /// Whether both references name the same face of the same file.
    pub fn equals(&self, other: &IDWriteFontFaceReference) -> bool {
        from_bool(unsafe { self.Equals(other.as_raw()) })
    }

    pub fn font_face_index(&self) -> u32 {
        unsafe { self.GetFontFaceIndex() }
    }

    pub fn simulations(&self) -> DWRITE_FONT_SIMULATIONS {
        unsafe { self.GetSimulations() }
    }

    pub fn font_file(&self) -> Result<ComPtr<IDWriteFontFile>> {
        unsafe { ComPtr::from_out_param(|out| self.GetFontFile(out)) }
    }

    pub fn local_file_size(&self) -> u64 {
        unsafe { self.GetLocalFileSize() }
    }

    pub fn file_size(&self) -> u64 {
        unsafe { self.GetFileSize() }
    }

    pub fn file_time(&self) -> Result<FILETIME> {
        let mut time = FILETIME::default();
        check_call("IDWriteFontFaceReference::GetFileTime", unsafe {
            self.GetFileTime(&mut time)
        })?;
        Ok(time)
    }

    pub fn locality(&self) -> DWRITE_LOCALITY {
        unsafe { self.GetLocality() }
    }

    /// Queue the whole font for download. Nothing is fetched until the
    /// factory's download queue begins.
    pub fn enqueue_font_download(&self) -> Result<()> {
        check_call("IDWriteFontFaceReference::EnqueueFontDownloadRequest", unsafe {
            self.EnqueueFontDownloadRequest()
        })?;
        Ok(())
    }

    /// Queue the glyphs needed for `text`.
    pub fn enqueue_character_download(&self, text: &str) -> Result<()> {
        let characters: Vec<u16> = text.encode_utf16().collect();
        let count = len_u32(characters.len())?;
        check_call(
            "IDWriteFontFaceReference::EnqueueCharacterDownloadRequest",
            unsafe { self.EnqueueCharacterDownloadRequest(characters.as_ptr(), count) },
        )?;
        Ok(())
    }

    pub fn enqueue_glyph_download(&self, glyph_indices: &[u16]) -> Result<()> {
        let count = len_u32(glyph_indices.len())?;
        check_call("IDWriteFontFaceReference::EnqueueGlyphDownloadRequest", unsafe {
            self.EnqueueGlyphDownloadRequest(glyph_indices.as_ptr(), count)
        })?;
        Ok(())
    }

    pub fn enqueue_file_fragment_download(&self, fragment: DWRITE_FILE_FRAGMENT) -> Result<()> {
        check_call(
            "IDWriteFontFaceReference::EnqueueFileFragmentDownloadRequest",
            unsafe {
                self.EnqueueFileFragmentDownloadRequest(
                    fragment.file_offset,
                    fragment.fragment_size,
                )
            },
        )?;
        Ok(())
    }
}
