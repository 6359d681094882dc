use std::fmt;

/// 32-bit status code returned by the engine. A set high bit means failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct NsResult(pub u32);

impl NsResult {
    pub const OK: NsResult = NsResult(0);
    pub const ERROR_FAILURE: NsResult = NsResult(0x8000_4005);
    pub const ERROR_NULL_POINTER: NsResult = NsResult(0x8000_4003);
    pub const ERROR_OUT_OF_MEMORY: NsResult = NsResult(0x8007_000E);
    pub const ERROR_NOT_AVAILABLE: NsResult = NsResult(0x8004_0111);
    pub const ERROR_NOT_INITIALIZED: NsResult = NsResult(0xC1F3_0001);

    pub fn failed(self) -> bool {
        self.0 & 0x8000_0000 != 0
    }

    pub fn succeeded(self) -> bool {
        !self.failed()
    }

    pub fn into_result(self) -> Result<(), NsError> {
        match self.failed() {
            true => Err(NsError(self)),
            false => Ok(()),
        }
    }
}

impl fmt::Display for NsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("nsresult = {0}")]
pub struct NsError(pub NsResult);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_is_high_bit() {
        assert!(NsResult::OK.succeeded());
        assert!(NsResult(0x0055_0001).succeeded());
        assert!(NsResult::ERROR_FAILURE.failed());
        assert!(NsResult::ERROR_NOT_INITIALIZED.failed());
    }

    #[test]
    fn into_result() {
        assert_eq!(NsResult::OK.into_result(), Ok(()));
        assert_eq!(
            NsResult::ERROR_NULL_POINTER.into_result(),
            Err(NsError(NsResult::ERROR_NULL_POINTER))
        );
    }

    #[test]
    fn displays_as_padded_hex() {
        assert_eq!(NsResult::ERROR_FAILURE.to_string(), "80004005");
        assert_eq!(NsResult(0x1f).to_string(), "0000001f");
        assert_eq!(NsError(NsResult::ERROR_FAILURE).to_string(), "nsresult = 80004005");
    }
}
