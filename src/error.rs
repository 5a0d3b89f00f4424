// Copyright (C) 2026 The tradeking Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Error as IoError;

use http::Error as HttpError;
use hyper::Error as HyperError;
use hyper_util::client::legacy::Error as HttpClientError;
use serde_urlencoded::ser::Error as QueryError;
use thiserror::Error;
use url::ParseError;

use crate::Str;


/// The error type as used by this crate.
///
/// Note that neither an unsuccessful HTTP status nor a response body
/// that fails to parse is reported as an error. Both surface as an
/// absent response instead.
#[derive(Debug, Error)]
pub enum Error {
  /// An HTTP related error.
  #[error("encountered an HTTP related error")]
  Http(
    #[from]
    #[source]
    HttpError,
  ),
  /// The HTTP client failed to transmit a request or to receive the
  /// response to it.
  #[error("the HTTP client reported an error")]
  HttpClient(
    #[from]
    #[source]
    HttpClientError,
  ),
  /// An error reported by the `hyper` crate.
  #[error("the hyper crate reported an error")]
  Hyper(
    #[from]
    #[source]
    HyperError,
  ),
  /// An I/O error.
  #[error("encountered an I/O error")]
  Io(
    #[from]
    #[source]
    IoError,
  ),
  /// A request's parameters could not be converted into a query
  /// string.
  #[error("failed to serialize query parameters")]
  Query(
    #[from]
    #[source]
    QueryError,
  ),
  /// An error directly originating in this crate.
  #[error("{0}")]
  Str(Str),
  /// An URL parsing error.
  #[error("failed to parse the URL")]
  Url(
    #[from]
    #[source]
    ParseError,
  ),
}
