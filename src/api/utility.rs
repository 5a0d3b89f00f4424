// Copyright (C) 2026 The tradeking Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::Str;


Endpoint! {
  /// The representation of a GET request to the /utility/status
  /// endpoint, reporting the current server time stamp if the API and
  /// its back end systems are accessible.
  pub GetStatus(()),

  #[inline]
  fn path(_input: &Self::Input) -> Str {
    "utility/status".into()
  }
}


Endpoint! {
  /// The representation of a GET request to the /utility/version
  /// endpoint.
  pub GetVersion(()),

  #[inline]
  fn path(_input: &Self::Input) -> Str {
    "utility/version".into()
  }
}
