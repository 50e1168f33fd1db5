//! One blocking HTTP exchange over libcurl.

use curl::easy::{Easy, List};
use std::str;
use std::time::Duration;
use url::Url;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// Per-request transport settings derived from the config.
#[derive(Debug, Clone, Default)]
pub(crate) struct Transport {
    pub headers: Vec<String>,
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
}

/// Status and body of a 2xx response.
#[derive(Debug)]
pub(crate) struct Response {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Performs the request and returns the body of a 2xx response.
///
/// Non-2xx responses become [`ApiError::Http`] with reason phrase and body text.
pub(crate) fn perform(
    transport: &Transport,
    method: Method,
    url: &Url,
    body: Option<&[u8]>,
) -> Result<Response, ApiError> {
    let mut status_line = String::new();
    let mut response_body: Vec<u8> = Vec::new();

    let mut easy = Easy::new();
    easy.url(url.as_str())?;
    match method {
        Method::Get => easy.get(true)?,
        Method::Post => easy.post(true)?,
        Method::Patch | Method::Delete => easy.custom_request(method.as_str())?,
    }
    if let Some(body) = body {
        easy.post_fields_copy(body)?;
        if method == Method::Patch {
            // POSTFIELDS switches curl to POST; keep the verb.
            easy.custom_request(method.as_str())?;
        }
    }
    if let Some(d) = transport.connect_timeout {
        easy.connect_timeout(d)?;
    }
    if let Some(d) = transport.timeout {
        easy.timeout(d)?;
    }

    let mut list = List::new();
    for h in &transport.headers {
        list.append(h)?;
    }
    // Small JSON bodies; skip the 100-continue round trip.
    list.append("Expect:")?;
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                if s.starts_with("HTTP/") {
                    status_line = s.trim_end().to_string();
                }
            }
            true
        })?;
        transfer.write_function(|data| {
            response_body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    if !(200..300).contains(&status) {
        return Err(ApiError::Http {
            status,
            reason: reason_phrase(&status_line).to_string(),
            body: String::from_utf8_lossy(&response_body).into_owned(),
        });
    }

    Ok(Response {
        status,
        body: response_body,
    })
}

/// Reason phrase of a status line (`HTTP/1.1 404 Not Found` -> `Not Found`).
/// HTTP/2 status lines carry none.
fn reason_phrase(status_line: &str) -> &str {
    let mut parts = status_line.splitn(3, ' ');
    let _version = parts.next();
    let _code = parts.next();
    parts.next().map(str::trim).unwrap_or("")
}
