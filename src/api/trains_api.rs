use crate::error::VonatError;
use crate::types::trains::{decode_snapshot, Snapshot, TrainsQuery};
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use tracing::error;
use url::Url;

pub struct TrainsApi;

impl TrainsApi {
    /// Fetch the current snapshot from the map endpoint.
    ///
    /// One POST, no retry. Anything other than a 200 is an error carrying
    /// the upstream status; the body is decoded separately so transport
    /// and decode failures stay distinguishable.
    pub async fn fetch(client: &reqwest::Client, url: Url) -> Result<Snapshot, VonatError> {
        let resp = client
            .post(url)
            .header(ACCEPT, "application/json")
            .json(&TrainsQuery::latest())
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            error!("upstream returned non-200 status: {}", status);
            return Err(VonatError::UpstreamStatus(status));
        }

        let body = resp.bytes().await?;
        Ok(decode_snapshot(&body)?)
    }
}
