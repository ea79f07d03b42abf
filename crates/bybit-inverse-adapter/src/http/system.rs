/*
[INPUT]:  None (public utility endpoints)
[OUTPUT]: Server time, announcements and local clock offset
[POS]:    HTTP layer - API data endpoints and clock skew estimation
[UPDATE]: When adding utility endpoints or changing offset estimation
*/

use crate::http::clock::{estimate_time_offset, now_ms};
use crate::http::{InverseClient, RequestTransport, Result};
use crate::types::ApiResponse;

impl<T: RequestTransport> InverseClient<T> {
    /// GET v2/public/time
    pub async fn get_server_time(&self) -> Result<ApiResponse> {
        self.get("v2/public/time").await
    }

    /// GET v2/public/announcement
    pub async fn get_api_announcements(&self) -> Result<ApiResponse> {
        self.get("v2/public/announcement").await
    }

    /// Milliseconds to add to the local clock to match the server clock
    pub async fn get_time_offset(&self) -> Result<i64> {
        let start = now_ms();
        let response = self.get_server_time().await?;
        let end = now_ms();
        estimate_time_offset(response.server_time_ms()?, start, end)
    }
}
