use super::{resource::ResourceKind, types::Employee};

pub struct Employees;

impl ResourceKind for Employees {
    type Record = Employee;
    type Draft = Employee;

    const COLLECTION: &'static str = "/employees";
    const LIST_SEGMENT: &'static str = "my-employees";

    fn record_id(record: &Employee) -> String {
        record.id.clone()
    }
}
