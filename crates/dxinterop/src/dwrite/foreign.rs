//! DirectWrite interfaces used by the font set API but transcribed elsewhere

use comvtable::{GUID, foreign_interface};

foreign_interface! {
    /// A physical font in a collection (`dwrite.h`)
    pub IDWriteFont = GUID::from_u128(0xacd16696_8c14_4f5d_877e_fe3fc1d32737);
    /// Font with locality and face-reference support (`dwrite_3.h`)
    pub IDWriteFont3 = GUID::from_u128(0x29748ed6_8c9c_4a6a_be0b_d912e8538944);
    pub IDWriteFontFace = GUID::from_u128(0x5f49804d_7024_4d43_bfa9_d25984f53849);
    pub IDWriteFontFace3 = GUID::from_u128(0xd37d7598_09be_4222_a236_2081341cc1f2);
    /// A font file, local or remote (`dwrite.h`)
    pub IDWriteFontFile = GUID::from_u128(0x739d886a_cef5_47dc_8769_1a8b41bebbb0);
}
