use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// Numeric DNS record type code.
///
/// Any 16-bit value is representable; the well-known codes have associated
/// constants and symbolic names in [`RECORD_TYPES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordType(u16);

/// Symbolic name to numeric code table. Several names share a code
/// (`ALL`, `ANY` and `*` are all 255).
pub static RECORD_TYPES: &[(&str, u16)] = &[
    ("A", 1),
    ("AAAA", 28),
    ("ALL", 255),
    ("AFSDB", 18),
    ("ANY", 255),
    ("APL", 42),
    ("AXFR", 252),
    ("CAA", 257),
    ("CDNSKEY", 60),
    ("CDS", 59),
    ("CERT", 37),
    ("CNAME", 5),
    ("DHCID", 49),
    ("DLV", 32769),
    ("DNAME", 39),
    ("DNSKEY", 48),
    ("DS", 43),
    ("HIP", 55),
    ("IPSECKEY", 45),
    ("IXFR", 251),
    ("KEY", 25),
    ("KX", 36),
    ("LOC", 29),
    ("MAILB", 253),
    ("MAILA", 254),
    ("MX", 15),
    ("NAPTR", 35),
    ("NS", 2),
    ("NSEC", 47),
    ("NSEC3", 50),
    ("NSEC3PARAM", 51),
    ("OPT", 41),
    ("PTR", 12),
    ("RRSIG", 46),
    ("SIG", 24),
    ("SOA", 6),
    ("SRV", 33),
    ("SSHFP", 44),
    ("TA", 32768),
    ("TKEY", 249),
    ("TLSA", 52),
    ("TSIG", 250),
    ("TXT", 16),
    ("*", 255),
];

impl RecordType {
    pub const A: RecordType = RecordType(1);
    pub const NS: RecordType = RecordType(2);
    pub const CNAME: RecordType = RecordType(5);
    pub const SOA: RecordType = RecordType(6);
    pub const PTR: RecordType = RecordType(12);
    pub const MX: RecordType = RecordType(15);
    pub const TXT: RecordType = RecordType(16);
    pub const AAAA: RecordType = RecordType(28);
    pub const SRV: RecordType = RecordType(33);
    pub const ANY: RecordType = RecordType(255);

    pub const fn from_u16(code: u16) -> Self {
        RecordType(code)
    }

    pub const fn to_u16(self) -> u16 {
        self.0
    }

    /// Look up a symbolic name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.to_ascii_uppercase();
        RECORD_TYPES
            .iter()
            .find(|(symbol, _)| *symbol == upper)
            .map(|(_, code)| RecordType(*code))
    }

    /// Validate a caller-supplied numeric code (accepts only 0..=65535).
    pub fn from_code(code: i64) -> Result<Self, DomainError> {
        u16::try_from(code)
            .map(RecordType)
            .map_err(|_| DomainError::InvalidRecordType(code.to_string()))
    }

    /// First symbolic name registered for this code, if any.
    pub fn name(self) -> Option<&'static str> {
        RECORD_TYPES
            .iter()
            .find(|(_, code)| *code == self.0)
            .map(|(symbol, _)| *symbol)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "TYPE{}", self.0),
        }
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| DomainError::InvalidRecordType(s.to_string()))
    }
}

impl From<RecordType> for u16 {
    fn from(value: RecordType) -> Self {
        value.0
    }
}

impl From<u16> for RecordType {
    fn from(value: u16) -> Self {
        RecordType(value)
    }
}
