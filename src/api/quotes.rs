// Copyright (C) 2026 The tradeking Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;
use serde_urlencoded::to_string as to_query;

use crate::util::string_slice_to_str;
use crate::Error;
use crate::Str;


/// A GET request to be made to the /market/ext/quotes endpoint.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct QuotesReq {
  /// The symbols to retrieve quotes for.
  #[serde(rename = "symbols", serialize_with = "string_slice_to_str")]
  pub symbols: Vec<String>,
  /// The fields to include in the response. All fields are reported
  /// if empty.
  #[serde(rename = "fids", serialize_with = "string_slice_to_str")]
  pub fids: Vec<String>,
}

impl QuotesReq {
  /// Create a `QuotesReq` for the given symbols, requesting all fields.
  pub fn new<I, S>(symbols: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      symbols: symbols.into_iter().map(S::into).collect(),
      fids: Vec::new(),
    }
  }
}


Endpoint! {
  /// The representation of a GET request to the /market/ext/quotes
  /// endpoint.
  pub Get(QuotesReq),

  #[inline]
  fn path(_input: &Self::Input) -> Str {
    "market/ext/quotes".into()
  }

  fn query(input: &Self::Input) -> Result<Option<Str>, Error> {
    Ok(Some(to_query(input)?.into()))
  }
}
