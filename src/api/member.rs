// Copyright (C) 2026 The tradeking Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::Str;


Endpoint! {
  /// The representation of a GET request to the /member/profile
  /// endpoint.
  ///
  /// Besides general information about the user, the response lists
  /// all of the user's account numbers.
  pub GetProfile(()),

  #[inline]
  fn path(_input: &Self::Input) -> Str {
    "member/profile".into()
  }
}
