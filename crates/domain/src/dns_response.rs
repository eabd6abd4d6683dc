use crate::AnswerRecord;

/// Decoded DNS response, owned for the duration of one transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub id: u16,

    pub response_code: u16,

    pub truncated: bool,

    pub answers: Vec<AnswerRecord>,
}

impl Response {
    pub fn new(id: u16, response_code: u16, answers: Vec<AnswerRecord>) -> Self {
        Self {
            id,
            response_code,
            truncated: false,
            answers,
        }
    }

    pub fn is_success(&self) -> bool {
        self.response_code == 0
    }
}

/// Mnemonic for a response code, as printed by dig and friends.
pub fn rcode_name(code: u16) -> &'static str {
    match code {
        0 => "NOERROR",
        1 => "FORMERR",
        2 => "SERVFAIL",
        3 => "NXDOMAIN",
        4 => "NOTIMP",
        5 => "REFUSED",
        6 => "YXDOMAIN",
        7 => "YXRRSET",
        8 => "NXRRSET",
        9 => "NOTAUTH",
        10 => "NOTZONE",
        _ => "UNKNOWN",
    }
}
