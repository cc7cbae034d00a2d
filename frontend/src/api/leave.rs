use super::{
    client::ApiClient,
    resource::ResourceKind,
    types::{ApiError, LeaveDraft, LeaveRequest},
};

pub struct LeaveRequests;

impl ResourceKind for LeaveRequests {
    type Record = LeaveRequest;
    type Draft = LeaveDraft;

    const COLLECTION: &'static str = "/leaveRequests";
    const LIST_SEGMENT: &'static str = "my-leaves";

    fn record_id(record: &LeaveRequest) -> String {
        record.id.clone()
    }
}

impl ApiClient {
    pub async fn recent_leave_requests(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        let url = self
            .endpoint(&format!("{}/recent", LeaveRequests::COLLECTION))
            .await;
        let response = self.send_authorized(self.http_client().get(url)).await?;
        self.map_json_response(response).await
    }
}
