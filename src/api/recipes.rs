//! Recipe Endpoints

use super::{encode_component, ApiClient, HttpMethod};
use crate::error::ApiResult;
use crate::models::RecipeSummary;

impl ApiClient {
    /// `GET /recipesall`
    pub async fn list_all(&self) -> ApiResult<Vec<RecipeSummary>> {
        self.get_json("/recipesall").await
    }

    /// `DELETE /recipes/{id}`. Success means the recipe is gone server-side.
    pub async fn delete_by_id(&self, id: &str) -> ApiResult<()> {
        let path = format!("/recipes/{}", encode_component(id));
        self.send(HttpMethod::Delete, &path, None).await?;
        Ok(())
    }
}
