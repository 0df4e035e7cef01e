use documentary_core::Method;

use crate::error::{Error, Result};

/// Response captured from the application under test.
///
/// HTTP error statuses are data here, not failures: the recorder documents
/// 4xx and 5xx responses the same way it documents successes.
#[derive(Debug, Clone, Default)]
pub struct RecordedResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedResponse {
    /// Body decoded as text, lossily.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// What actually goes on the wire for one request.
#[derive(Debug, Clone, Default)]
pub struct WireRequest {
    pub params: Vec<(String, String)>,
    /// `(field name, file path)` pairs sent as multipart uploads.
    pub files: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

/// HTTP test client contract.
///
/// Implementations return error statuses as ordinary responses and fail only
/// on transport problems, so failure responses can be documented too.
pub trait HttpClient {
    fn request(&self, method: Method, url: &str, request: &WireRequest) -> Result<RecordedResponse>;
}

/// `reqwest`-backed client issuing requests against a locally served
/// application.
#[derive(Debug)]
pub struct TestClient {
    base_url: String,
    jwt_token: Option<String>,
    http: reqwest::blocking::Client,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            jwt_token: None,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Token sent as `X-JWT-TOKEN` with every request; `None` clears it.
    pub fn set_jwt_token(&mut self, token: Option<String>) {
        self.jwt_token = token;
    }

    pub fn jwt_token(&self) -> Option<&str> {
        self.jwt_token.as_deref()
    }

    /// Metadata-retrieval verb, same contract as the standard ones.
    pub fn metadata(&self, url: &str) -> Result<RecordedResponse> {
        self.request(Method::Metadata, url, &WireRequest::default())
    }

    /// Undelete verb, same contract as the standard ones.
    pub fn undelete(&self, url: &str) -> Result<RecordedResponse> {
        self.request(Method::Undelete, url, &WireRequest::default())
    }
}

impl HttpClient for TestClient {
    fn request(&self, method: Method, url: &str, request: &WireRequest) -> Result<RecordedResponse> {
        let method = reqwest::Method::from_bytes(method.as_str().as_bytes())
            .map_err(|e| Error::Method(e.to_string()))?;
        let url = format!("{}{}", self.base_url, url);
        let mut builder = self.http.request(method, &url);

        if let Some(token) = &self.jwt_token {
            builder = builder.header("X-JWT-TOKEN", token);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if !request.files.is_empty() {
            let mut form = reqwest::blocking::multipart::Form::new();
            for (name, value) in &request.params {
                form = form.text(name.clone(), value.clone());
            }
            for (name, path) in &request.files {
                form = form.file(name.clone(), path)?;
            }
            builder = builder.multipart(form);
        } else if !request.params.is_empty() {
            builder = builder.form(&request.params);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.bytes()?.to_vec();

        Ok(RecordedResponse {
            status,
            headers,
            body,
        })
    }
}
