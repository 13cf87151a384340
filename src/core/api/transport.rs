//! Request description and the transports that execute it
//!
//! Operations in this module only *describe* HTTP requests. A [`Transport`]
//! executes them: `gloo-net` in the browser, `reqwest` on the server.

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Content type used for the password-grant token request
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Content type used for JSON bodies
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP methods used by the backend API
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Method {
    #[display("GET")]
    Get,
    #[display("POST")]
    Post,
    #[display("PUT")]
    Put,
    #[display("DELETE")]
    Delete,
}

/// File sent as one part of a multipart upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(field: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    /// Attach a MIME type; blank values are ignored
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        let content_type = content_type.into();
        if !content_type.trim().is_empty() {
            self.content_type = Some(content_type);
        }
        self
    }
}

/// Request payload
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    /// Already encoded `application/x-www-form-urlencoded` content
    Form(String),
    Multipart(FilePart),
}

/// A fully described HTTP request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set a JSON body and the matching content type
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = RequestBody::Json(value);
        Ok(self.header("Content-Type", JSON_CONTENT_TYPE))
    }

    /// Set a URL-form-encoded body and the matching content type
    pub fn form<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let encoded =
            serde_urlencoded::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = RequestBody::Form(encoded);
        Ok(self.header("Content-Type", FORM_CONTENT_TYPE))
    }

    /// Set a multipart body; the transport supplies the boundary header
    pub fn multipart(mut self, part: FilePart) -> Self {
        self.body = RequestBody::Multipart(part);
        self
    }

    /// Look up a header value, ignoring case of the name
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Path and query of the URL (everything after the host)
    pub fn path(&self) -> &str {
        let without_scheme = self
            .url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.url);
        without_scheme
            .find('/')
            .map(|idx| &without_scheme[idx..])
            .unwrap_or("/")
    }
}

/// Raw HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Turn a non-2xx response into [`ApiError::Status`]
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Status {
                status: self.status,
                body: self.text(),
            })
        }
    }

    /// Decode the JSON body; an empty body decodes like `null`
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_str("null")?);
        }
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Executes described requests.
///
/// Implementations report transport failures as [`ApiError::Network`] and
/// return every HTTP response, successful or not, as an [`ApiResponse`].
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// Browser transport built on the Fetch API via `gloo-net`
#[cfg(not(feature = "ssr"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[cfg(not(feature = "ssr"))]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let built = match request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Form(encoded) => builder.body(encoded),
            RequestBody::Multipart(part) => builder.body(form_data(&part)?),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let response = built
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .binary()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(ApiResponse::new(status, body))
    }
}

#[cfg(not(feature = "ssr"))]
fn form_data(part: &FilePart) -> Result<web_sys::FormData, ApiError> {
    use web_sys::{Blob, BlobPropertyBag, FormData};

    let to_error = |e: wasm_bindgen::JsValue| ApiError::Encode(format!("{:?}", e));

    let bytes = js_sys::Uint8Array::from(part.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    if let Some(content_type) = &part.content_type {
        options.set_type(content_type);
    }
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(to_error)?;

    let form = FormData::new().map_err(to_error)?;
    form.append_with_blob_and_filename(&part.field, &blob, &part.file_name)
        .map_err(to_error)?;
    Ok(form)
}

/// Server-side transport built on `reqwest`
#[cfg(feature = "ssr")]
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(feature = "ssr")]
impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "ssr")]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Form(encoded) => builder.body(encoded),
            RequestBody::Multipart(part) => {
                let mut file = reqwest::multipart::Part::bytes(part.bytes).file_name(part.file_name);
                if let Some(content_type) = &part.content_type {
                    file = file
                        .mime_str(content_type)
                        .map_err(|e| ApiError::Encode(e.to_string()))?;
                }
                builder.multipart(reqwest::multipart::Form::new().part(part.field, file))
            }
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(ApiResponse::new(status, body.to_vec()))
    }
}

/// Transport used by the running application on the current target
#[cfg(not(feature = "ssr"))]
pub type PlatformTransport = FetchTransport;

/// Transport used by the running application on the current target
#[cfg(feature = "ssr")]
pub type PlatformTransport = ReqwestTransport;
