use ferrous_stub_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

/// Converts between the numeric domain record type and hickory's enum.
///
/// Both sides cover the full 16-bit space, so the mapping is lossless;
/// codes hickory doesn't name travel as `Unknown(code)`.
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }

    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        RecordType::from_u16(u16::from(hickory_type))
    }
}
