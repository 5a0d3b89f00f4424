// Copyright (C) 2026 The tradeking Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::future::Future;
use std::str::from_utf8;

use http::header::AUTHORIZATION;
use http::request::Builder as HttpRequestBuilder;
use http::HeaderMap;
use http::HeaderValue;
use http::Request;
use http::Response;
use http_body_util::BodyExt;
use http_body_util::Full;

use hyper::body::Bytes;
use hyper::body::Incoming;
use hyper::Error as HyperError;
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Builder as HttpClientBuilder;
use hyper_util::client::legacy::Client as HttpClient;
use hyper_util::rt::TokioExecutor;

use serde_json::Value;

use tracing::debug;
use tracing::field::debug;
use tracing::field::DebugValue;
use tracing::span;
use tracing::trace;
use tracing::Level;
use tracing_futures::Instrument;

use crate::api_info::ApiInfo;
use crate::endpoint::Endpoint;
use crate::oauth::Signer;
use crate::Error;


/// A type providing a debug representation of HTTP headers, with
/// sensitive data being masked out.
struct DebugHeaders<'h> {
  headers: &'h HeaderMap<HeaderValue>,
}

impl Debug for DebugHeaders<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    static MASKED: HeaderValue = HeaderValue::from_static("<masked>");

    f.debug_map()
      .entries(self.headers.iter().map(|(k, v)| {
        if k == AUTHORIZATION {
          (k, &MASKED)
        } else {
          (k, v)
        }
      }))
      .finish()
  }
}


/// A type providing a debug representation of an HTTP request, with
/// sensitive data being masked out.
struct DebugRequest<'r> {
  request: &'r Request<Full<Bytes>>,
}

impl Debug for DebugRequest<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    // Note that we do not print URL and method, because we assume they
    // are already included as identifiers in the span of the usage
    // site.
    f.debug_struct("Request")
      .field("version", &self.request.version())
      .field(
        "headers",
        &DebugHeaders {
          headers: self.request.headers(),
        },
      )
      .field("body", self.request.body())
      .finish()
  }
}


/// Emit a debug representation of an HTTP request.
fn debug_request(request: &Request<Full<Bytes>>) -> DebugValue<DebugRequest<'_>> {
  debug(DebugRequest { request })
}


/// A builder for creating customized `Client` objects.
#[derive(Debug)]
pub struct Builder {
  builder: HttpClientBuilder,
}

impl Builder {
  /// Adjust the maximum number of idle connections per host.
  #[inline]
  pub fn max_idle_per_host(&mut self, max_idle: usize) -> &mut Self {
    let _ = self.builder.pool_max_idle_per_host(max_idle);
    self
  }

  /// Build the final `Client` object.
  pub fn build(&self, api_info: ApiInfo) -> Client {
    let https = HttpsConnector::new();
    let client = self.builder.build(https);
    let signer = Signer::new(&api_info);

    Client {
      api_info,
      signer,
      client,
    }
  }
}

impl Default for Builder {
  #[cfg(test)]
  fn default() -> Self {
    // Tests spin up a fresh server (and runtime) every time. Keeping
    // idle connections around only means that we are holding on to
    // connections to servers that are long gone, so disable them.
    let mut builder = HttpClient::builder(TokioExecutor::new());
    let _ = builder.pool_max_idle_per_host(0);

    Self { builder }
  }

  #[cfg(not(test))]
  #[inline]
  fn default() -> Self {
    Self {
      builder: HttpClient::builder(TokioExecutor::new()),
    }
  }
}


/// A `Client` is the entity used by clients of this module for
/// interacting with the TradeKing API.
///
/// Connections are pooled and reused across requests. A `Client` is
/// `Send` and `Sync` and may be used for concurrent requests.
#[derive(Debug)]
pub struct Client {
  api_info: ApiInfo,
  signer: Signer,
  client: HttpClient<HttpsConnector<HttpConnector>, Full<Bytes>>,
}

impl Client {
  /// Instantiate a new `Builder` which allows for creating a customized `Client`.
  #[inline]
  pub fn builder() -> Builder {
    Builder::default()
  }

  /// Create a new `Client` using the given API information.
  #[inline]
  pub fn new(api_info: ApiInfo) -> Self {
    Builder::default().build(api_info)
  }

  /// Add "gzip" as an accepted encoding to the request.
  #[cfg(feature = "gzip")]
  fn maybe_add_gzip_header(request: &mut Request<Full<Bytes>>) {
    use http::header::ACCEPT_ENCODING;

    let _ = request
      .headers_mut()
      .insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
  }

  /// An implementation stub not actually doing anything.
  #[cfg(not(feature = "gzip"))]
  fn maybe_add_gzip_header(_request: &mut Request<Full<Bytes>>) {}

  /// Create a signed `Request` to the endpoint.
  fn request<R>(&self, input: &R::Input) -> Result<Request<Full<Bytes>>, Error>
  where
    R: Endpoint,
  {
    let mut url = self.api_info.base_url.clone();
    let path = format!(
      "{}/{}.json",
      url.path().trim_end_matches('/'),
      R::path(input)
    );
    url.set_path(&path);

    let query = R::query(input)?;
    url.set_query(query.as_deref().filter(|query| !query.is_empty()));

    let method = R::method();
    let authorization = self.signer.authorization(&method, &url);
    let body = R::body(input).unwrap_or_default();

    let mut request = HttpRequestBuilder::new()
      .method(method)
      .uri(url.as_str())
      // Add required authentication information.
      .header(AUTHORIZATION, authorization)
      .body(Full::new(body))?;

    Self::maybe_add_gzip_header(&mut request);
    Ok(request)
  }

  async fn retrieve_raw_body(response: Incoming) -> Result<Bytes, HyperError> {
    // We unconditionally wait for the full body to be received before
    // evaluating anything. Responses are small and every endpoint
    // needs the complete document anyway.
    let bytes = BodyExt::collect(response).await?.to_bytes();
    Ok(bytes)
  }

  /// Retrieve the HTTP body, possible uncompressing it if it was gzip
  /// encoded.
  #[cfg(feature = "gzip")]
  async fn retrieve_body(response: Response<Incoming>) -> Result<Bytes, Error> {
    use async_compression::futures::bufread::GzipDecoder;
    use futures::AsyncReadExt as _;
    use http::header::CONTENT_ENCODING;

    let (parts, body) = response.into_parts();
    let encoding = parts.headers.get(CONTENT_ENCODING);

    let bytes = Self::retrieve_raw_body(body).await?;
    let bytes = match encoding {
      Some(value) if value.as_bytes().eq_ignore_ascii_case(b"gzip") => {
        let mut buffer = Vec::new();
        let _count = GzipDecoder::new(&*bytes).read_to_end(&mut buffer).await?;
        buffer.into()
      },
      _ => bytes,
    };

    Ok(bytes)
  }

  /// Retrieve the HTTP body.
  #[cfg(not(feature = "gzip"))]
  async fn retrieve_body(response: Response<Incoming>) -> Result<Bytes, Error> {
    let bytes = Self::retrieve_raw_body(response.into_body()).await?;
    Ok(bytes)
  }

  /// Create and issue a request and extract the payload of the
  /// response.
  ///
  /// `Ok(None)` is returned if the response lacks the "response"
  /// member or is not valid JSON, irrespective of the HTTP status.
  pub fn issue<R>(
    &self,
    input: &R::Input,
  ) -> impl Future<Output = Result<Option<Value>, Error>> + '_
  where
    R: Endpoint,
  {
    let result = self.request::<R>(input);
    async move {
      let request = result?;
      let span = span!(
        Level::INFO,
        "issue",
        method = display(request.method()),
        uri = display(request.uri())
      );
      self.issue_::<R>(request).instrument(span).await
    }
  }

  /// Issue a request.
  async fn issue_<R>(&self, request: Request<Full<Bytes>>) -> Result<Option<Value>, Error>
  where
    R: Endpoint,
  {
    debug!("requesting");
    trace!(request = debug_request(&request));

    let result = self.client.request(request).await?;
    let status = result.status();
    debug!(status = debug(&status));
    trace!(response = debug(&result));

    let bytes = Self::retrieve_body(result).await?;
    let body = bytes.as_ref();
    match from_utf8(body) {
      Ok(s) => trace!(body = display(&s)),
      Err(b) => trace!(body = display(&b)),
    }

    let output = R::evaluate(status, body);
    if output.is_none() {
      debug!("response envelope missing");
    }
    Ok(output)
  }

  /// Retrieve the `ApiInfo` object used by this `Client` instance.
  #[inline]
  pub fn api_info(&self) -> &ApiInfo {
    &self.api_info
  }
}
