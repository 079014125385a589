#![allow(dead_code)]

//! Test infrastructure for sb-server route tests

use sb_core::ProjectCatalog;
use sb_mail::{
    DeliveryConfig, EmailSender, MailError, MailResult, SubmissionDispatcher, TemplateMessage,
};
use sb_server::{AppState, build_router};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tokio::sync::Notify;
use tower::ServiceExt;

/// Email sender that records messages instead of sending them
#[derive(Default)]
pub struct MockSender {
    pub sent: Mutex<Vec<TemplateMessage>>,
    pub reject_with: Option<String>,
}

impl MockSender {
    pub fn rejecting(text: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            reject_with: Some(text.to_string()),
        }
    }

    pub fn sent(&self) -> Vec<TemplateMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for MockSender {
    async fn send(&self, message: &TemplateMessage) -> MailResult<()> {
        self.sent.lock().unwrap().push(message.clone());
        match &self.reject_with {
            Some(text) => Err(MailError::provider(400, text.clone())),
            None => Ok(()),
        }
    }
}

/// Email sender that holds every send open until the test releases it
#[derive(Default)]
pub struct GatedSender {
    /// Signalled once a send has started
    pub entered: Notify,
    /// Lets one held send finish
    pub release: Notify,
    calls: AtomicUsize,
}

impl GatedSender {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailSender for GatedSender {
    async fn send(&self, _message: &TemplateMessage) -> MailResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entered.notify_one();
        self.release.notified().await;
        Ok(())
    }
}

/// Create AppState for testing with the bundled catalog
pub fn create_test_app_state(sender: Arc<MockSender>) -> AppState {
    app_state_with_sender(sender)
}

pub fn app_state_with_sender(sender: Arc<dyn EmailSender>) -> AppState {
    let dispatcher = SubmissionDispatcher::new(
        sender,
        DeliveryConfig {
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            to_email: "info@sanjeevinibuilders.com".to_string(),
        },
    );

    AppState::new(
        ProjectCatalog::embedded().expect("bundled catalog should load"),
        dispatcher,
        Duration::from_secs(5),
        true,
    )
}

pub fn default_state() -> AppState {
    create_test_app_state(Arc::new(MockSender::default()))
}

/// Send one request through a fresh router; returns status and body text
pub async fn send(state: AppState, request: Request<Body>) -> (StatusCode, String) {
    let response = build_router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

pub async fn get(state: AppState, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(state, request).await
}

pub async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(state, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

pub async fn post_json(
    state: AppState,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, body) = send(state, request).await;
    (status, serde_json::from_str(&body).unwrap())
}

pub async fn post_form(state: AppState, uri: &str, body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(state, request).await
}
