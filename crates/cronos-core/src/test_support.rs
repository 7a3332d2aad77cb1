//! In-process stand-in for the remote service, used by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::{ApiError, Backend};
use crate::models::{AuthResponse, LoginRequest, PublicTenant, RegisterRequest, UserProfile};

/// Canned answer for one endpoint
pub(crate) enum Reply {
    Json(Value),
    Status(u16, String),
    Transport,
}

impl Reply {
    pub(crate) fn json(value: Value) -> Self {
        Reply::Json(value)
    }

    pub(crate) fn status(code: u16, body: &str) -> Self {
        Reply::Status(code, body.to_string())
    }

    fn answer<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        match self {
            Reply::Json(value) => serde_json::from_value(value.clone())
                .map_err(|e| ApiError::InvalidResponse(e.to_string())),
            Reply::Status(code, body) => {
                let status = StatusCode::from_u16(*code).expect("valid status code");
                Err(ApiError::from_status(status, body))
            }
            Reply::Transport => Err(ApiError::InvalidUrl("connection refused".to_string())),
        }
    }
}

pub(crate) struct StubBackend {
    login: Reply,
    register: Reply,
    me: Reply,
    tenants: HashMap<String, Reply>,
    calls: Mutex<Vec<String>>,
}

impl StubBackend {
    pub(crate) fn new() -> Self {
        Self {
            login: Reply::status(500, ""),
            register: Reply::status(500, ""),
            me: Reply::status(500, ""),
            tenants: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_login(mut self, reply: Reply) -> Self {
        self.login = reply;
        self
    }

    pub(crate) fn with_register(mut self, reply: Reply) -> Self {
        self.register = reply;
        self
    }

    pub(crate) fn with_me(mut self, reply: Reply) -> Self {
        self.me = reply;
        self
    }

    pub(crate) fn with_tenant(mut self, slug: &str, reply: Reply) -> Self {
        self.tenants.insert(slug.to_string(), reply);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

impl Backend for StubBackend {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.record(format!("login {}", request.email));
        self.login.answer()
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.record(format!("register {}", request.email));
        self.register.answer()
    }

    async fn current_user(&self, token: Option<&str>) -> Result<UserProfile, ApiError> {
        match token {
            Some(token) => {
                self.record(format!("me {}", token));
                self.me.answer()
            }
            None => {
                self.record("me".to_string());
                Err(ApiError::from_status(StatusCode::UNAUTHORIZED, ""))
            }
        }
    }

    async fn public_tenant(&self, slug: &str) -> Result<PublicTenant, ApiError> {
        self.record(format!("tenant {}", slug));
        match self.tenants.get(slug) {
            Some(reply) => reply.answer(),
            None => Err(ApiError::from_status(StatusCode::NOT_FOUND, "")),
        }
    }
}
