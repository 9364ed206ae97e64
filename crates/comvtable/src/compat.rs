//! Conversions to and from `windows-core`, for callers that mix both stacks

use crate::com::GUID;
use crate::error::ComError;

impl From<GUID> for windows_core::GUID {
    fn from(guid: GUID) -> Self {
        windows_core::GUID::from_values(guid.data1, guid.data2, guid.data3, guid.data4)
    }
}

impl From<windows_core::GUID> for GUID {
    fn from(guid: windows_core::GUID) -> Self {
        GUID::new(guid.data1, guid.data2, guid.data3, guid.data4)
    }
}

impl From<ComError> for windows_core::Error {
    fn from(err: ComError) -> Self {
        windows_core::Error::from_hresult(windows_core::HRESULT(err.code()))
    }
}

impl From<windows_core::Error> for ComError {
    fn from(err: windows_core::Error) -> Self {
        ComError::Native {
            code: err.code().0,
        }
    }
}
