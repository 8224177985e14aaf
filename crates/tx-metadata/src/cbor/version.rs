use std::fmt;

/// Ledger protocol version supplied by the caller.
///
/// Metadata never picks its own version; it only changes how strictly
/// the binary form is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProtocolVersion {
    pub major: u64,
    pub minor: u64,
}

impl ProtocolVersion {
    /// First major version whose decoders reject duplicate map keys.
    pub const STRICT_MAPS_MAJOR: u64 = 9;

    pub const fn new(major: u64, minor: u64) -> Self {
        Self { major, minor }
    }

    pub fn rejects_duplicate_keys(&self) -> bool {
        self.major >= Self::STRICT_MAPS_MAJOR
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
