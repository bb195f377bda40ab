//! Post Endpoints
//!
//! Bookmarked posts and like counters.

use super::{ApiClient, HttpMethod};
use crate::error::ApiResult;
use crate::models::{MessageResponse, Post, PostsEnvelope, SmidArgs};

impl ApiClient {
    /// `GET /posts`, unwrapped from `{ "posts": [...] }`
    pub async fn list_bookmarked(&self) -> ApiResult<Vec<Post>> {
        let envelope: PostsEnvelope = self.get_json("/posts").await?;
        Ok(envelope.posts)
    }

    /// `POST /like_post`
    pub async fn like_post(&self, smid: &str) -> ApiResult<MessageResponse> {
        self.post_smid("/like_post", smid).await
    }

    /// `POST /unlike_post`. The server refuses to go below zero but still answers 2xx.
    pub async fn unlike_post(&self, smid: &str) -> ApiResult<MessageResponse> {
        self.post_smid("/unlike_post", smid).await
    }

    async fn post_smid(&self, path: &str, smid: &str) -> ApiResult<MessageResponse> {
        let body = serde_json::to_value(SmidArgs { smid })?;
        let response = self.send(HttpMethod::Post, path, Some(body)).await?;
        response.json()
    }
}
