use super::{
    resource::ResourceKind,
    types::{AttendanceDraft, AttendanceRecord},
};

pub struct Attendances;

impl ResourceKind for Attendances {
    type Record = AttendanceRecord;
    type Draft = AttendanceDraft;

    const COLLECTION: &'static str = "/attendances";
    const LIST_SEGMENT: &'static str = "my-attendance";

    fn record_id(record: &AttendanceRecord) -> String {
        record.id.clone()
    }
}
