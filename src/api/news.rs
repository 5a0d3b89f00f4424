// Copyright (C) 2026 The tradeking Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;
use serde_urlencoded::to_string as to_query;

use crate::util::string_slice_to_str;
use crate::Error;
use crate::Str;


/// A GET request to be made to the /market/news/search endpoint.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SearchReq {
  /// The keywords to search for.
  #[serde(rename = "keywords", skip_serializing_if = "Option::is_none")]
  pub keywords: Option<String>,
  /// The symbols to search news for.
  #[serde(rename = "symbols", serialize_with = "string_slice_to_str")]
  pub symbols: Vec<String>,
  /// The maximum number of headlines to report.
  #[serde(rename = "maxhits")]
  pub max_hits: usize,
  /// The date to start searching at, in a format understood by the
  /// server.
  #[serde(rename = "startdate", skip_serializing_if = "Option::is_none")]
  pub start_date: Option<String>,
  /// The date to stop searching at.
  #[serde(rename = "enddate", skip_serializing_if = "Option::is_none")]
  pub end_date: Option<String>,
}

impl Default for SearchReq {
  fn default() -> Self {
    Self {
      keywords: None,
      symbols: Vec::new(),
      max_hits: 10,
      start_date: None,
      end_date: None,
    }
  }
}


Endpoint! {
  /// The representation of a GET request to the /market/news/search
  /// endpoint, listing news headlines.
  pub Search(SearchReq),

  #[inline]
  fn path(_input: &Self::Input) -> Str {
    "market/news/search".into()
  }

  fn query(input: &Self::Input) -> Result<Option<Str>, Error> {
    Ok(Some(to_query(input)?.into()))
  }
}


Endpoint! {
  /// The representation of a GET request to the /market/news/{id}
  /// endpoint, retrieving a single article.
  pub Get(String),

  fn path(input: &Self::Input) -> Str {
    format!("market/news/{}", input).into()
  }
}
