use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{de::DeserializeOwned, Serialize};

use super::{client::ApiClient, types::ApiError};

/// Unreserved characters stay readable; everything else is escaped.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// One REST collection of the backend.
pub trait ResourceKind: 'static {
    type Record: DeserializeOwned + Clone + PartialEq + 'static;
    type Draft: Serialize + Clone + 'static;

    /// Collection root, e.g. `/employees`.
    const COLLECTION: &'static str;
    /// Listing endpoint under the collection, scoped to the signed-in user.
    const LIST_SEGMENT: &'static str;

    fn record_id(record: &Self::Record) -> String;
}

pub fn encode_id(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

pub(crate) fn item_path<R: ResourceKind>(id: &str) -> String {
    format!("{}/{}", R::COLLECTION, encode_id(id))
}

impl ApiClient {
    pub async fn list<R: ResourceKind>(&self) -> Result<Vec<R::Record>, ApiError> {
        let url = self
            .endpoint(&format!("{}/{}", R::COLLECTION, R::LIST_SEGMENT))
            .await;
        let response = self.send_authorized(self.http_client().get(url)).await?;
        self.map_json_response(response).await
    }

    /// Any 2xx counts as applied; the body, if any, is not read. Callers re-list.
    pub async fn create<R: ResourceKind>(&self, draft: &R::Draft) -> Result<(), ApiError> {
        let url = self.endpoint(R::COLLECTION).await;
        let response = self
            .send_authorized(self.http_client().post(url).json(draft))
            .await?;
        self.map_empty_response(response).await
    }

    pub async fn update<R: ResourceKind>(&self, id: &str, draft: &R::Draft) -> Result<(), ApiError> {
        let url = self.endpoint(&item_path::<R>(id)).await;
        let response = self
            .send_authorized(self.http_client().put(url).json(draft))
            .await?;
        self.map_empty_response(response).await
    }

    pub async fn remove<R: ResourceKind>(&self, id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&item_path::<R>(id)).await;
        let response = self
            .send_authorized(self.http_client().delete(url))
            .await?;
        self.map_empty_response(response).await
    }
}
