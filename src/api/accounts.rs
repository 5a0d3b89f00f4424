// Copyright (C) 2026 The tradeking Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::Str;


Endpoint! {
  /// The representation of a GET request to the /accounts endpoint.
  ///
  /// The response contains detailed balance and holding information
  /// for each account associated with the user.
  pub Get(()),

  #[inline]
  fn path(_input: &Self::Input) -> Str {
    "accounts".into()
  }
}


Endpoint! {
  /// The representation of a GET request to the /accounts/balances
  /// endpoint.
  ///
  /// The response contains summary balance information for each
  /// account as well as the total value of all accounts.
  pub GetBalances(()),

  #[inline]
  fn path(_input: &Self::Input) -> Str {
    "accounts/balances".into()
  }
}
