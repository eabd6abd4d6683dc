pub mod record;
pub mod record_type;

pub use record::{AnswerRecord, RecordData};
pub use record_type::{RecordType, RECORD_TYPES};
