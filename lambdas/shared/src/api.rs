//! Method routing and response construction shared by the lambdas

use lambda_http::http::Method;
use lambda_http::{Body, Response};
use serde::Serialize;

use crate::errors::Result;
use crate::models::{TimeEvent, OTHERWISE_BODY};

/// What a lambda does with a request, decided by its method alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// GET: report the current time
    Time,
    /// POST: store the item and publish
    Write,
    /// Anything else: fixed 200 reply
    Otherwise,
}

impl Action {
    pub fn for_method(method: &Method) -> Self {
        match *method {
            Method::GET => Action::Time,
            Method::POST => Action::Write,
            _ => Action::Otherwise,
        }
    }
}

pub fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(body)?))?)
}

pub fn text_response(status: u16, body: &str) -> Result<Response<Body>> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .body(Body::from(body.to_string()))?)
}

pub fn empty_response(status: u16) -> Result<Response<Body>> {
    Ok(Response::builder().status(status).body(Body::Empty)?)
}

pub fn time_response() -> Result<Response<Body>> {
    json_response(200, &TimeEvent::now())
}

pub fn otherwise_response() -> Result<Response<Body>> {
    text_response(200, OTHERWISE_BODY)
}
