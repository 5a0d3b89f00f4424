// Copyright (C) 2026 The tradeking Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::Str;


Endpoint! {
  /// The representation of a GET request to the /market/clock
  /// endpoint.
  ///
  /// The response contains the current state of the market, the time
  /// of the next state change, and the current server time stamp.
  pub Get(()),

  #[inline]
  fn path(_input: &Self::Input) -> Str {
    "market/clock".into()
  }
}
