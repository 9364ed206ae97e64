//! Localized string sets returned by font queries

use comvtable::{HRESULT, Result, check_call, com_interface, wide::read_wide, wide::to_wide};

use crate::foundation::{BOOL, FALSE, PCWSTR, WCHAR, from_bool};

/// A set of strings indexed by locale name
#[com_interface("08256209-099a-4b34-b86d-c22b110e7771")]
pub trait IDWriteLocalizedStrings {
    fn GetCount(&self) -> u32;
    fn FindLocaleName(&self, locale_name: PCWSTR, index: *mut u32, exists: *mut BOOL) -> HRESULT;
    fn GetLocaleNameLength(&self, index: u32, length: *mut u32) -> HRESULT;
    /// `size` counts the terminating NUL.
    fn GetLocaleName(&self, index: u32, locale_name: *mut WCHAR, size: u32) -> HRESULT;
    fn GetStringLength(&self, index: u32, length: *mut u32) -> HRESULT;
    fn GetString(&self, index: u32, string_buffer: *mut WCHAR, size: u32) -> HRESULT;
}

/// A list of strings, each with its own locale
#[com_interface("cfee3140-1157-47ca-8b85-31bfcf3f2d0e")]
pub trait IDWriteStringList {
    fn GetCount(&self) -> u32;
    fn GetLocaleNameLength(&self, list_index: u32, length: *mut u32) -> HRESULT;
    fn GetLocaleName(&self, list_index: u32, locale_name: *mut WCHAR, size: u32) -> HRESULT;
    fn GetStringLength(&self, list_index: u32, length: *mut u32) -> HRESULT;
    fn GetString(&self, list_index: u32, string_buffer: *mut WCHAR, size: u32) -> HRESULT;
}

impl IDWriteLocalizedStrings {
    pub fn count(&self) -> u32 {
        unsafe { self.GetCount() }
    }

    /// Index of the string for `locale`, or `None` when the set has none.
    pub fn find_locale_name(&self, locale: &str) -> Result<Option<u32>> {
        let locale = to_wide(locale);
        let mut index = 0;
        let mut exists = FALSE;
        check_call("IDWriteLocalizedStrings::FindLocaleName", unsafe {
            self.FindLocaleName(locale.as_ptr(), &mut index, &mut exists)
        })?;
        Ok(from_bool(exists).then_some(index))
    }

    pub fn locale_name(&self, index: u32) -> Result<String> {
        let mut len = 0;
        check_call("IDWriteLocalizedStrings::GetLocaleNameLength", unsafe {
            self.GetLocaleNameLength(index, &mut len)
        })?;
        read_wide("IDWriteLocalizedStrings::GetLocaleName", len, |buf, size| unsafe {
            self.GetLocaleName(index, buf, size)
        })
    }

    pub fn string(&self, index: u32) -> Result<String> {
        let mut len = 0;
        check_call("IDWriteLocalizedStrings::GetStringLength", unsafe {
            self.GetStringLength(index, &mut len)
        })?;
        read_wide("IDWriteLocalizedStrings::GetString", len, |buf, size| unsafe {
            self.GetString(index, buf, size)
        })
    }

    /// The string for `locale`, falling back to the first entry.
    pub fn string_for_locale(&self, locale: &str) -> Result<Option<String>> {
        let index = match self.find_locale_name(locale)? {
            Some(index) => index,
            None if self.count() > 0 => 0,
            None => return Ok(None),
        };
        self.string(index).map(Some)
    }

    /// Every `(locale, string)` pair in index order.
    pub fn to_vec(&self) -> Result<Vec<(String, String)>> {
        (0..self.count())
            .map(|i| Ok((self.locale_name(i)?, self.string(i)?)))
            .collect()
    }
}

impl IDWriteStringList {
    pub fn count(&self) -> u32 {
        unsafe { self.GetCount() }
    }

    pub fn locale_name(&self, list_index: u32) -> Result<String> {
        let mut len = 0;
        check_call("IDWriteStringList::GetLocaleNameLength", unsafe {
            self.GetLocaleNameLength(list_index, &mut len)
        })?;
        read_wide("IDWriteStringList::GetLocaleName", len, |buf, size| unsafe {
            self.GetLocaleName(list_index, buf, size)
        })
    }

    pub fn string(&self, list_index: u32) -> Result<String> {
        let mut len = 0;
        check_call("IDWriteStringList::GetStringLength", unsafe {
            self.GetStringLength(list_index, &mut len)
        })?;
        read_wide("IDWriteStringList::GetString", len, |buf, size| unsafe {
            self.GetString(list_index, buf, size)
        })
    }

    pub fn strings(&self) -> Result<Vec<String>> {
        (0..self.count()).map(|i| self.string(i)).collect()
    }
}
