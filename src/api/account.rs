// Copyright (C) 2026 The tradeking Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::Str;


Endpoint! {
  /// The representation of a GET request to the /accounts/{id}
  /// endpoint.
  pub Get(String),

  fn path(input: &Self::Input) -> Str {
    format!("accounts/{}", input).into()
  }
}


Endpoint! {
  /// The representation of a GET request to the
  /// /accounts/{id}/balances endpoint.
  pub GetBalances(String),

  fn path(input: &Self::Input) -> Str {
    format!("accounts/{}/balances", input).into()
  }
}


Endpoint! {
  /// The representation of a GET request to the
  /// /accounts/{id}/holdings endpoint.
  pub GetHoldings(String),

  fn path(input: &Self::Input) -> Str {
    format!("accounts/{}/holdings", input).into()
  }
}
