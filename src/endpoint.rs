// Copyright (C) 2026 The tradeking Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use http::Method;
use http::StatusCode;

use hyper::body::Bytes;

use serde::Deserialize;
use serde_json::from_slice as from_json;
use serde_json::Value;

use crate::Error;
use crate::Str;


/// Extract the payload contained in a TradeKing response envelope.
///
/// `None` is returned if the body is not a JSON object or if it lacks a
/// (non-null) "response" member.
pub(crate) fn unwrap_envelope(body: &[u8]) -> Option<Value> {
  #[derive(Deserialize)]
  struct Envelope {
    #[serde(rename = "response")]
    response: Option<Value>,
  }

  from_json::<Envelope>(body).ok().and_then(|envelope| envelope.response)
}


/// A trait describing an HTTP endpoint.
///
/// An endpoint for our intents and purposes is basically a path and an
/// HTTP request method (GET or POST). The path is relative to the base
/// URL of the API and lacks the ".json" suffix, which is appended when
/// a request is created. Query parameters and a raw request body are
/// supported as well.
pub trait Endpoint {
  /// The type of data being passed in as part of a request to this
  /// endpoint.
  type Input;

  /// Retrieve the HTTP method to use.
  ///
  /// The default method being used is GET.
  #[inline]
  fn method() -> Method {
    Method::GET
  }

  /// Inquire the path the request should go to.
  fn path(input: &Self::Input) -> Str;

  /// Inquire the query the request should use.
  ///
  /// By default no query is emitted.
  #[allow(unused)]
  #[inline]
  fn query(input: &Self::Input) -> Result<Option<Str>, Error> {
    Ok(None)
  }

  /// Retrieve the request's body.
  ///
  /// By default the body is empty.
  #[allow(unused)]
  #[inline]
  fn body(input: &Self::Input) -> Option<Bytes> {
    None
  }

  /// Evaluate the response to a request.
  ///
  /// The status is not taken into account: the server reports errors
  /// as part of the response envelope.
  #[allow(unused)]
  #[inline]
  fn evaluate(status: StatusCode, body: &[u8]) -> Option<Value> {
    unwrap_envelope(body)
  }
}


/// A macro for defining a type representing an HTTP endpoint.
///
/// ```ignore
/// Endpoint! {
///   /// The representation of a GET request to the /foo endpoint.
///   pub Get(()),
///
///   fn path(_input: &Self::Input) -> Str {
///     "foo".into()
///   }
/// }
/// ```
macro_rules! Endpoint {
  ( $(#[$docs:meta])* $pub:vis $name:ident($in:ty),
    $($defs:tt)* ) => {
    $(#[$docs])*
    #[derive(Clone, Copy, Debug)]
    $pub enum $name {}

    impl crate::endpoint::Endpoint for $name {
      type Input = $in;

      $($defs)*
    }
  };
}
