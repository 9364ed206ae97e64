//! DirectWrite font set and remote font interfaces (`dwrite.h`, `dwrite_3.h`)

mod collection;
mod download;
mod enums;
mod font_set;
mod foreign;
mod strings;
mod structs;

pub use collection::*;
pub use download::*;
pub use enums::*;
pub use font_set::*;
pub use foreign::*;
pub use strings::*;
pub use structs::*;

use comvtable::HRESULT;

/// The font is remote and must be downloaded before use
pub const DWRITE_E_REMOTEFONT: HRESULT = 0x8898_500Du32 as HRESULT;
/// The download was cancelled
pub const DWRITE_E_DOWNLOADCANCELLED: HRESULT = 0x8898_500Eu32 as HRESULT;
pub const DWRITE_E_DOWNLOADFAILED: HRESULT = 0x8898_500Fu32 as HRESULT;
/// Too many download requests are pending
pub const DWRITE_E_TOOMANYDOWNLOADS: HRESULT = 0x8898_5010u32 as HRESULT;
