//! In-memory HTTP backend for tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use super::{ApiClient, ApiRequest, ApiResponse, HttpBackend};
use crate::config::AppConfig;
use crate::credentials::MemoryCredentials;
use crate::error::{ApiError, ApiResult};
use crate::models::Role;

/// Replies are served in FIFO order; every request is recorded
#[derive(Default)]
pub struct MockBackend {
    replies: RefCell<VecDeque<ApiResult<ApiResponse>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockBackend {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn reply(self: &Rc<Self>, status: u16, body: &str) -> Rc<Self> {
        self.replies.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
        Rc::clone(self)
    }

    pub fn fail(self: &Rc<Self>, error: ApiError) -> Rc<Self> {
        self.replies.borrow_mut().push_back(Err(error));
        Rc::clone(self)
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpBackend for MockBackend {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no reply queued".to_string())))
    }
}

pub fn client_with(backend: &Rc<MockBackend>, credentials: MemoryCredentials) -> ApiClient {
    ApiClient::new(
        AppConfig::new("http://api.test"),
        Rc::clone(backend) as Rc<dyn HttpBackend>,
        Rc::new(credentials),
    )
}

/// Client holding token `tok` with the admin role
pub fn admin_client(backend: &Rc<MockBackend>) -> ApiClient {
    client_with(backend, MemoryCredentials::new(Some("tok"), Some(Role::Admin)))
}
