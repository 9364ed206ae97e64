//! Direct2D and WIC interfaces that effect authoring passes around but whose
//! tables live in other headers

use comvtable::{GUID, foreign_interface};

foreign_interface! {
    /// An effect instance (`d2d1_1.h`)
    pub ID2D1Effect = GUID::from_u128(0x28211a43_7d89_476f_8181_2d6159b220ad);
    /// A bitmap usable as a target or effect input (`d2d1_1.h`)
    pub ID2D1Bitmap1 = GUID::from_u128(0xa898a84c_3873_4588_b08b_ebbf978df041);
    pub ID2D1ColorContext = GUID::from_u128(0x1c4820bb_5771_4518_a581_2fe4dd0ec657);
    /// Color context with DXGI color space and simple profile support (`d2d1_3.h`)
    pub ID2D1ColorContext1 = GUID::from_u128(0x1ab42875_c57f_4be9_bd85_9cd78d6f55ee);
    pub ID2D1LookupTable3D = GUID::from_u128(0x53dd9855_a3b0_4d5b_82e1_26e25c5e5797);
    /// WIC color context (`wincodec.h`)
    pub IWICColorContext = GUID::from_u128(0x3c613a02_34b2_44ea_9a7c_45aea9c6fd6d);
}
