// Copyright (C) 2026 The tradeking Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;
use serde_urlencoded::to_string as to_query;

use crate::util::string_slice_to_str;
use crate::Error;
use crate::Str;


/// Create the query string for the requests only taking a symbol.
fn symbol_query(symbol: &str) -> Result<Option<Str>, Error> {
  Ok(Some(to_query([("symbol", symbol)])?.into()))
}


/// A GET request to be made to the /market/options/search endpoint.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct SearchReq {
  /// The underlying symbol.
  #[serde(rename = "symbol")]
  pub symbol: String,
  /// A query narrowing down the options to report, e.g.,
  /// "xdate-eq:20130517 AND strikeprice-gte:500".
  #[serde(rename = "query", skip_serializing_if = "Option::is_none")]
  pub query: Option<String>,
  /// The fields to include in the response. All fields are reported
  /// if empty.
  #[serde(rename = "fids", serialize_with = "string_slice_to_str")]
  pub fids: Vec<String>,
}

impl SearchReq {
  /// Create a `SearchReq` for all options of the given symbol.
  #[inline]
  pub fn new(symbol: impl Into<String>) -> Self {
    Self {
      symbol: symbol.into(),
      ..Default::default()
    }
  }
}


Endpoint! {
  /// The representation of a GET request to the
  /// /market/options/search endpoint.
  pub Search(SearchReq),

  #[inline]
  fn path(_input: &Self::Input) -> Str {
    "market/options/search".into()
  }

  fn query(input: &Self::Input) -> Result<Option<Str>, Error> {
    Ok(Some(to_query(input)?.into()))
  }
}


Endpoint! {
  /// The representation of a GET request to the
  /// /market/options/strikes endpoint, listing the available strike
  /// prices for an underlying symbol.
  pub GetStrikes(String),

  #[inline]
  fn path(_input: &Self::Input) -> Str {
    "market/options/strikes".into()
  }

  fn query(input: &Self::Input) -> Result<Option<Str>, Error> {
    symbol_query(input)
  }
}


Endpoint! {
  /// The representation of a GET request to the
  /// /market/options/expirations endpoint, listing the available
  /// expiration dates for an underlying symbol.
  pub GetExpirations(String),

  #[inline]
  fn path(_input: &Self::Input) -> Str {
    "market/options/expirations".into()
  }

  fn query(input: &Self::Input) -> Result<Option<Str>, Error> {
    symbol_query(input)
  }
}
