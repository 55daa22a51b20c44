use serde::Deserialize;

/// Number of columns in a TidyHQ contacts export row.
pub const RECORD_COLUMNS: usize = 14;

/// Status value marking a current membership.
pub const ACTIVE_STATUS: &str = "Active";

/// One row of the contacts export. The file has no header row, so fields are
/// matched by position in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MemberRecord {
    pub name: String,
    pub member_no: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub first_aid_expiry: String,
    pub first_aid_certificate: String,
    pub hold_accreditation: String,
    pub coaching_level: String,
    pub coaching_expiry: String,
    pub official_level: String,
    pub official_expiry: String,
    pub member_level: String,
    pub status: String,
}

impl MemberRecord {
    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_STATUS
    }
}
