//! Session Endpoints

use super::{ApiClient, HttpMethod};
use crate::error::ApiResult;

impl ApiClient {
    /// `POST /logout`. The server keeps no session state; callers clear
    /// stored credentials whatever the outcome.
    pub async fn logout(&self) -> ApiResult<()> {
        self.send(HttpMethod::Post, "/logout", None).await?;
        Ok(())
    }
}
