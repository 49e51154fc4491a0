//! HTTP transport types for delegates.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The façade
//! only ever hands an `HttpMethod` to the delegate; `HttpRequest` and
//! `HttpResponse` are ready-made building blocks a delegate may use to turn
//! `(method, url, parameter)` into a wire request and to carry the result
//! back as its `Response` type. Nothing here touches the network.

use std::fmt;

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::parameter::Parameter;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether request parameters travel in the body rather than the query.
    pub fn has_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Lay a `Parameter` out on the wire for `method`.
    ///
    /// `GET` and `DELETE` carry the parameter as query pairs. `POST`, `PUT`
    /// and `PATCH` carry it as a JSON object body.
    pub fn from_parameter(
        method: HttpMethod,
        url: &str,
        parameter: &Parameter,
    ) -> Result<Self, ApiError> {
        if !method.has_body() {
            return Ok(HttpRequest {
                method,
                url: url.to_string(),
                query: parameter
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                headers: Vec::new(),
                body: None,
            });
        }

        let body = parameter.to_json()?;
        Ok(HttpRequest {
            method,
            url: url.to_string(),
            query: Vec::new(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// First header named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as a JSON envelope.
    pub fn envelope(&self) -> Result<Envelope, ApiError> {
        Envelope::parse(&self.body)
    }
}
