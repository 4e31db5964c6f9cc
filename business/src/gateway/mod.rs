//! Remote data gateway for the `/patients` resource.
//!
//! The gateway is callback based, like `ehttp::fetch`: the completion runs on
//! whatever thread the transport uses, so callbacks must be `Send`. Callers
//! (the controller) forward results to the UI thread through an updater
//! channel instead of touching shared state from the callback.

mod http;

use std::fmt::Debug;

use thiserror::Error;

use crate::patient::{PatientId, PatientListParams, PatientListResponse};

pub use http::HttpGateway;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The request never produced an HTTP response (DNS, connection, CORS...).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("API returned status: {0}")]
    Status(u16),
    /// The body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

pub type OnList = Box<dyn FnOnce(GatewayResult<PatientListResponse>) + Send + 'static>;
pub type OnDelete = Box<dyn FnOnce(GatewayResult<()>) + Send + 'static>;

pub trait PatientGateway: Send + Sync + Debug {
    /// `GET {base}/patients` with the present parameters.
    fn list(&self, params: &PatientListParams, on_done: OnList);

    /// `DELETE {base}/patients/{id}`.
    fn delete(&self, id: PatientId, on_done: OnDelete);
}
