//! DirectWrite value structures

use crate::foundation::{BOOL, PCWSTR};

use super::enums::*;

/// Property value used to filter or build a font set
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DWRITE_FONT_PROPERTY {
    pub property_id: DWRITE_FONT_PROPERTY_ID,
    /// NUL-terminated value; matched case-insensitively
    pub property_value: PCWSTR,
    /// Locale of the value, or null for any locale
    pub locale_name: PCWSTR,
}

impl DWRITE_FONT_PROPERTY {
    /// A property referring to borrowed NUL-terminated UTF-16 buffers.
    ///
    /// The returned value must not outlive `value` or `locale`.
    #[must_use]
    pub fn new(property_id: DWRITE_FONT_PROPERTY_ID, value: &[u16], locale: Option<&[u16]>) -> Self {
        Self {
            property_id,
            property_value: value.as_ptr(),
            locale_name: locale.map_or(std::ptr::null(), <[u16]>::as_ptr),
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DWRITE_LINE_METRICS {
    /// Text positions in the line, trailing whitespace and newline included
    pub length: u32,
    pub trailing_whitespace_length: u32,
    pub newline_length: u32,
    pub height: f32,
    /// Distance from the top of the line to its baseline
    pub baseline: f32,
    pub is_trimmed: BOOL,
}

/// Line metrics with leading split above and below the line
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DWRITE_LINE_METRICS1 {
    pub length: u32,
    pub trailing_whitespace_length: u32,
    pub newline_length: u32,
    pub height: f32,
    pub baseline: f32,
    pub is_trimmed: BOOL,
    pub leading_before: f32,
    pub leading_after: f32,
}

impl From<DWRITE_LINE_METRICS1> for DWRITE_LINE_METRICS {
    fn from(m: DWRITE_LINE_METRICS1) -> Self {
        Self {
            length: m.length,
            trailing_whitespace_length: m.trailing_whitespace_length,
            newline_length: m.newline_length,
            height: m.height,
            baseline: m.baseline,
            is_trimmed: m.is_trimmed,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DWRITE_LINE_SPACING {
    pub method: DWRITE_LINE_SPACING_METHOD,
    pub height: f32,
    pub baseline: f32,
    /// Share of the leading placed above the line, 0.0 to 1.0
    pub leading_before: f32,
    pub font_line_gap_usage: DWRITE_FONT_LINE_GAP_USAGE,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DWRITE_FONT_AXIS_VALUE {
    pub axis_tag: DWRITE_FONT_AXIS_TAG,
    pub value: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DWRITE_FONT_AXIS_RANGE {
    pub axis_tag: DWRITE_FONT_AXIS_TAG,
    pub min_value: f32,
    pub max_value: f32,
}

impl DWRITE_FONT_AXIS_RANGE {
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        (self.min_value..=self.max_value).contains(&value)
    }
}

/// Byte range of a font file
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DWRITE_FILE_FRAGMENT {
    pub file_offset: u64,
    pub fragment_size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::TRUE;
    use comvtable::wide::to_wide;

    #[test]
    fn font_property_borrows_buffers() {
        let value = to_wide("Segoe UI");
        let property = DWRITE_FONT_PROPERTY::new(
            DWRITE_FONT_PROPERTY_ID_WIN32_FAMILY_NAME,
            &value,
            None,
        );
        assert_eq!(property.property_value, value.as_ptr());
        assert!(property.locale_name.is_null());
    }

    #[test]
    fn line_metrics1_narrows() {
        let metrics = DWRITE_LINE_METRICS1 {
            length: 12,
            height: 16.0,
            is_trimmed: TRUE,
            leading_after: 2.0,
            ..Default::default()
        };
        let narrow = DWRITE_LINE_METRICS::from(metrics);
        assert_eq!(narrow.length, 12);
        assert_eq!(narrow.height, 16.0);
        assert_eq!(narrow.is_trimmed, TRUE);
    }

    #[test]
    fn axis_range_is_inclusive() {
        let range = DWRITE_FONT_AXIS_RANGE {
            axis_tag: DWRITE_FONT_AXIS_TAG_WEIGHT,
            min_value: 100.0,
            max_value: 900.0,
        };
        assert!(range.contains(100.0));
        assert!(range.contains(900.0));
        assert!(!range.contains(950.0));
    }
}
