//! Value types shared by Direct2D and DirectWrite

use comvtable::native_enum;

/// Win32 `BOOL`: four bytes, non-zero is true
pub type BOOL = i32;
pub const TRUE: BOOL = 1;
pub const FALSE: BOOL = 0;

/// UTF-16 code unit
pub type WCHAR = u16;
/// Pointer to a NUL-terminated UTF-16 string
pub type PCWSTR = *const WCHAR;
/// Pointer to a NUL-terminated byte string
pub type PCSTR = *const u8;

/// Convert a native `BOOL` to `bool`.
#[inline]
#[must_use]
pub const fn from_bool(value: BOOL) -> bool {
    value != FALSE
}

/// Convert a `bool` to a native `BOOL`.
#[inline]
#[must_use]
pub const fn to_bool(value: bool) -> BOOL {
    if value { TRUE } else { FALSE }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RECT {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RECT {
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct POINT {
    pub x: i32,
    pub y: i32,
}

/// Integer rectangle (`D2D_RECT_L` is `RECT`)
pub type D2D1_RECT_L = RECT;
/// Signed integer point (`D2D_POINT_2L` is `POINT`)
pub type D2D1_POINT_2L = POINT;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct D2D1_POINT_2U {
    pub x: u32,
    pub y: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct D2D1_POINT_2F {
    pub x: f32,
    pub y: f32,
}

/// 100-nanosecond intervals since January 1, 1601 (UTC), split in two halves
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FILETIME {
    pub low_date_time: u32,
    pub high_date_time: u32,
}

impl FILETIME {
    /// The 64-bit tick count
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        ((self.high_date_time as u64) << 32) | self.low_date_time as u64
    }
}

native_enum! {
    /// Direct3D feature level (`d3dcommon.h`)
    pub struct D3D_FEATURE_LEVEL(u32) {
        D3D_FEATURE_LEVEL_1_0_CORE = 0x1000,
        D3D_FEATURE_LEVEL_9_1 = 0x9100,
        D3D_FEATURE_LEVEL_9_2 = 0x9200,
        D3D_FEATURE_LEVEL_9_3 = 0x9300,
        D3D_FEATURE_LEVEL_10_0 = 0xa000,
        D3D_FEATURE_LEVEL_10_1 = 0xa100,
        D3D_FEATURE_LEVEL_11_0 = 0xb000,
        D3D_FEATURE_LEVEL_11_1 = 0xb100,
        D3D_FEATURE_LEVEL_12_0 = 0xc000,
        D3D_FEATURE_LEVEL_12_1 = 0xc100,
        D3D_FEATURE_LEVEL_12_2 = 0xc200,
    }
}

native_enum! {
    /// Resource data format (`dxgiformat.h`), the values effect code touches
    pub struct DXGI_FORMAT(u32) {
        DXGI_FORMAT_UNKNOWN = 0,
        DXGI_FORMAT_R32G32B32A32_FLOAT = 2,
        DXGI_FORMAT_R32G32B32_FLOAT = 6,
        DXGI_FORMAT_R16G16B16A16_FLOAT = 10,
        DXGI_FORMAT_R16G16B16A16_UNORM = 11,
        DXGI_FORMAT_R32G32_FLOAT = 16,
        DXGI_FORMAT_R8G8B8A8_UNORM = 28,
        DXGI_FORMAT_R8G8B8A8_UNORM_SRGB = 29,
        DXGI_FORMAT_R16G16_FLOAT = 34,
        DXGI_FORMAT_R32_FLOAT = 41,
        DXGI_FORMAT_R8G8_UNORM = 49,
        DXGI_FORMAT_R16_FLOAT = 54,
        DXGI_FORMAT_R8_UNORM = 61,
        DXGI_FORMAT_A8_UNORM = 65,
        DXGI_FORMAT_B8G8R8A8_UNORM = 87,
        DXGI_FORMAT_B8G8R8A8_UNORM_SRGB = 91,
    }
}

native_enum! {
    /// Color space of a swap chain or resource (`dxgicommon.h`)
    pub struct DXGI_COLOR_SPACE_TYPE(u32) {
        DXGI_COLOR_SPACE_RGB_FULL_G22_NONE_P709 = 0,
        DXGI_COLOR_SPACE_RGB_FULL_G10_NONE_P709 = 1,
        DXGI_COLOR_SPACE_RGB_STUDIO_G22_NONE_P709 = 2,
        DXGI_COLOR_SPACE_RGB_STUDIO_G22_NONE_P2020 = 3,
        DXGI_COLOR_SPACE_RESERVED = 4,
        DXGI_COLOR_SPACE_YCBCR_FULL_G22_NONE_P709_X601 = 5,
        DXGI_COLOR_SPACE_YCBCR_STUDIO_G22_LEFT_P601 = 6,
        DXGI_COLOR_SPACE_YCBCR_FULL_G22_LEFT_P601 = 7,
        DXGI_COLOR_SPACE_YCBCR_STUDIO_G22_LEFT_P709 = 8,
        DXGI_COLOR_SPACE_YCBCR_FULL_G22_LEFT_P709 = 9,
        DXGI_COLOR_SPACE_YCBCR_STUDIO_G22_LEFT_P2020 = 10,
        DXGI_COLOR_SPACE_YCBCR_FULL_G22_LEFT_P2020 = 11,
        DXGI_COLOR_SPACE_RGB_FULL_G2084_NONE_P2020 = 12,
        DXGI_COLOR_SPACE_YCBCR_STUDIO_G2084_LEFT_P2020 = 13,
        DXGI_COLOR_SPACE_RGB_STUDIO_G2084_NONE_P2020 = 14,
        DXGI_COLOR_SPACE_YCBCR_STUDIO_G22_TOPLEFT_P2020 = 15,
        DXGI_COLOR_SPACE_YCBCR_STUDIO_G2084_TOPLEFT_P2020 = 16,
        DXGI_COLOR_SPACE_RGB_FULL_G22_NONE_P2020 = 17,
        DXGI_COLOR_SPACE_YCBCR_STUDIO_GHLG_TOPLEFT_P2020 = 18,
        DXGI_COLOR_SPACE_YCBCR_FULL_GHLG_TOPLEFT_P2020 = 19,
        DXGI_COLOR_SPACE_RGB_STUDIO_G24_NONE_P709 = 20,
        DXGI_COLOR_SPACE_RGB_STUDIO_G24_NONE_P2020 = 21,
        DXGI_COLOR_SPACE_YCBCR_STUDIO_G24_LEFT_P709 = 22,
        DXGI_COLOR_SPACE_YCBCR_STUDIO_G24_LEFT_P2020 = 23,
        DXGI_COLOR_SPACE_YCBCR_STUDIO_G24_TOPLEFT_P2020 = 24,
        DXGI_COLOR_SPACE_CUSTOM = 0xFFFF_FFFF,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_conversion() {
        assert!(from_bool(TRUE));
        assert!(from_bool(-1));
        assert!(!from_bool(FALSE));
        assert_eq!(to_bool(true), 1);
    }

    #[test]
    fn filetime_ticks() {
        let time = FILETIME {
            low_date_time: 2,
            high_date_time: 1,
        };
        assert_eq!(time.ticks(), (1 << 32) + 2);
    }

    #[test]
    fn feature_level_names() {
        assert_eq!(D3D_FEATURE_LEVEL_11_0.0, 0xb000);
        assert_eq!(format!("{:?}", D3D_FEATURE_LEVEL_10_1), "D3D_FEATURE_LEVEL_10_1");
    }
}
