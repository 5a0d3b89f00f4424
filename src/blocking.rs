// Copyright (C) 2026 The tradeking Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use serde_json::Value;

use tokio::runtime::Builder as RuntimeBuilder;
use tokio::runtime::Runtime;

use crate::endpoint::Endpoint;
use crate::ApiInfo;
use crate::Error;


/// A client for the TradeKing API that blocks the calling thread until
/// a request has been completed.
///
/// The client drives an asynchronous [`Client`][crate::Client] on a
/// private single-threaded runtime. It offers the same set of calls.
/// Calls from multiple threads are serialized on that runtime.
///
/// # Notes
/// - a blocking `Client` must not be created, used, or dropped from
///   within an asynchronous context; use [`crate::Client`] there
#[derive(Debug)]
pub struct Client {
  runtime: Runtime,
  client: crate::Client,
}

impl Client {
  /// Create a new `Client` using the given API information.
  ///
  /// # Errors
  /// - [`Error::Io`](crate::Error::Io) If the runtime could not be
  ///   created.
  pub fn new(api_info: ApiInfo) -> Result<Self, Error> {
    Self::with_client(crate::Client::new(api_info))
  }

  /// Create a new `Client` wrapping a customized asynchronous one, as
  /// created by a [`Builder`][crate::Builder].
  pub fn with_client(client: crate::Client) -> Result<Self, Error> {
    let runtime = RuntimeBuilder::new_current_thread().enable_all().build()?;
    Ok(Self { runtime, client })
  }

  /// Create and issue a request and extract the payload of the
  /// response, blocking until done.
  #[inline]
  pub fn issue<R>(&self, input: &R::Input) -> Result<Option<Value>, Error>
  where
    R: Endpoint,
  {
    self.runtime.block_on(self.client.issue::<R>(input))
  }

  /// Retrieve the `ApiInfo` object used by this `Client` instance.
  #[inline]
  pub fn api_info(&self) -> &ApiInfo {
    self.client.api_info()
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  use http::Method;
  use http::StatusCode;

  use serde_json::json;

  use test_log::test;

  use crate::api::quotes::QuotesReq;
  use crate::test_util::Stub;


  /// Start a `Stub` server on a runtime of its own.
  fn serve(status: StatusCode, body: &'static str) -> (Runtime, Stub) {
    let runtime = Runtime::new().unwrap();
    let stub = runtime.block_on(Stub::serve(status, body));
    (runtime, stub)
  }


  /// Check that the blocking client reports the envelope's payload.
  #[test]
  fn blocking_calls() {
    let (_runtime, stub) = serve(StatusCode::OK, r#"{"response": {"foo": "bar"}}"#);
    let client = Client::new(stub.api_info()).unwrap();

    assert_eq!(client.utility_status().unwrap(), Some(json!({"foo": "bar"})));
    assert_eq!(
      client.account_order("12345", "<FIXML/>").unwrap(),
      Some(json!({"foo": "bar"}))
    );
    let quotes = client
      .market_ext_quotes(&QuotesReq::new(["AAPL", "MSFT"]))
      .unwrap();
    assert_eq!(quotes, Some(json!({"foo": "bar"})));

    let requests = stub.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].method, Method::GET);
    assert_eq!(requests[0].path, "/v1/utility/status.json");
    assert_eq!(requests[1].method, Method::POST);
    assert_eq!(requests[1].path, "/v1/accounts/12345/orders.json");
    assert_eq!(requests[1].body, "<FIXML/>".as_bytes());
    assert_eq!(
      requests[2].query_pairs(),
      vec![("symbols".to_string(), "AAPL,MSFT".to_string())]
    );
  }

  /// Check that a missing envelope is reported as `None`.
  #[test]
  fn blocking_missing_envelope() {
    let (_runtime, stub) = serve(StatusCode::OK, "{}");
    let client = Client::new(stub.api_info()).unwrap();

    assert_eq!(client.member_profile().unwrap(), None);
  }

  /// Check that a blocking client can wrap a customized one.
  #[test]
  fn blocking_with_client() {
    let (_runtime, stub) = serve(StatusCode::OK, "{}");
    let api_info = stub.api_info();
    let client = crate::Client::builder().max_idle_per_host(1).build(api_info.clone());
    let client = Client::with_client(client).unwrap();

    assert_eq!(client.api_info(), &api_info);
    assert_eq!(client.market_clock().unwrap(), None);
    assert_eq!(client.market_clock().unwrap(), None);
    assert_eq!(stub.requests().len(), 2);
  }
}
