// Copyright (C) 2026 The tradeking Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;

use http::header::AUTHORIZATION;
use http::header::CONTENT_ENCODING;
use http::Method;
use http::Request;
use http::Response;
use http::StatusCode;
use http_body_util::BodyExt as _;
use http_body_util::Full;

use hyper::body::Bytes;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use tokio::net::TcpListener;

use crate::ApiInfo;


/// A request as received by a `Stub` server.
#[derive(Clone, Debug)]
pub(crate) struct Received {
  pub method: Method,
  pub path: String,
  pub query: Option<String>,
  pub authorization: Option<String>,
  pub body: Bytes,
}

impl Received {
  /// Retrieve the decoded query parameters of the request.
  pub fn query_pairs(&self) -> Vec<(String, String)> {
    let query = self.query.as_deref().unwrap_or("");
    url::form_urlencoded::parse(query.as_bytes())
      .into_owned()
      .collect()
  }
}


/// An HTTP server answering every request with the same canned
/// response, while recording the requests it received.
#[derive(Debug)]
pub(crate) struct Stub {
  addr: SocketAddr,
  received: Arc<Mutex<Vec<Received>>>,
}

impl Stub {
  /// Start a server replying with the given status and body.
  pub async fn serve(status: StatusCode, body: &'static str) -> Self {
    Self::serve_raw(status, None, Bytes::from_static(body.as_bytes())).await
  }

  /// Start a server replying with the given status and a gzip
  /// compressed version of the given body, announced using the
  /// provided content coding token.
  #[cfg(feature = "gzip")]
  pub async fn serve_gzip(status: StatusCode, encoding: &'static str, body: &'static str) -> Self {
    use async_compression::futures::bufread::GzipEncoder;
    use futures::AsyncReadExt as _;

    let mut buffer = Vec::new();
    let _count = GzipEncoder::new(body.as_bytes())
      .read_to_end(&mut buffer)
      .await
      .unwrap();

    Self::serve_raw(status, Some(encoding), Bytes::from(buffer)).await
  }

  async fn serve_raw(status: StatusCode, encoding: Option<&'static str>, body: Bytes) -> Self {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let received = Arc::new(Mutex::new(Vec::new()));
    let requests = received.clone();

    let _handle = tokio::spawn(async move {
      while let Ok((stream, _)) = listener.accept().await {
        let requests = requests.clone();
        let body = body.clone();
        let service = service_fn(move |request: Request<Incoming>| {
          let requests = requests.clone();
          let body = body.clone();
          async move {
            let (parts, incoming) = request.into_parts();
            let request_body = incoming.collect().await?.to_bytes();
            let authorization = parts
              .headers
              .get(AUTHORIZATION)
              .and_then(|value| value.to_str().ok())
              .map(str::to_owned);

            requests.lock().unwrap().push(Received {
              method: parts.method,
              path: parts.uri.path().to_string(),
              query: parts.uri.query().map(str::to_owned),
              authorization,
              body: request_body,
            });

            let mut response = Response::builder().status(status);
            if let Some(encoding) = encoding {
              response = response.header(CONTENT_ENCODING, encoding);
            }
            Ok::<_, hyper::Error>(response.body(Full::new(body)).unwrap())
          }
        });

        let _handle = tokio::spawn(async move {
          let _result = http1::Builder::new()
            .serve_connection(TokioIo::new(stream), service)
            .await;
        });
      }
    });

    Self { addr, received }
  }

  /// Create an `ApiInfo` object pointing to a port nobody is listening
  /// on.
  pub async fn unreachable_api_info() -> ApiInfo {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    ApiInfo::from_parts(format!("http://{addr}/v1"), "key", "secret", "token", "token-secret")
      .unwrap()
  }

  /// Create an `ApiInfo` object pointing to this server.
  pub fn api_info(&self) -> ApiInfo {
    ApiInfo::from_parts(
      format!("http://{}/v1", self.addr),
      "key",
      "secret",
      "token",
      "token-secret",
    )
    .unwrap()
  }

  /// Retrieve all requests received so far.
  pub fn requests(&self) -> Vec<Received> {
    self.received.lock().unwrap().clone()
  }

  /// Retrieve the single request received so far.
  pub fn request(&self) -> Received {
    let requests = self.requests();
    assert_eq!(requests.len(), 1, "{requests:?}");
    requests.into_iter().next().unwrap()
  }
}
