// Copyright (C) 2026 The tradeking Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

use crate::util::variant_name;
use crate::Str;


/// The kind of ranked list to retrieve.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum ListType {
  /// Top losers by dollar amount.
  #[serde(rename = "toplosers")]
  Losers,
  /// Top losers by percentage.
  #[serde(rename = "toppctlosers")]
  PercentLosers,
  /// Top volume.
  #[serde(rename = "topvolume")]
  Volume,
  /// Top active.
  #[serde(rename = "topactive")]
  Active,
  /// Top gainers by dollar amount.
  #[serde(rename = "topgainers")]
  Gainers,
  /// Top gainers by percentage.
  #[serde(rename = "toppctgainers")]
  PercentGainers,
}

impl AsRef<str> for ListType {
  #[inline]
  fn as_ref(&self) -> &str {
    variant_name(self)
  }
}


Endpoint! {
  /// The representation of a GET request to the
  /// /market/toplists/{type} endpoint.
  pub Get(ListType),

  fn path(input: &Self::Input) -> Str {
    format!("market/toplists/{}", input.as_ref()).into()
  }
}
