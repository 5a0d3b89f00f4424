// Copyright (C) 2026 The tradeking Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use http::Method;

use hyper::body::Bytes;

use crate::Str;


/// A request to place or preview an order.
///
/// The order itself is described by a FIXML document, which is sent
/// verbatim as the request body.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OrderReq {
  /// The account to place the order for.
  pub account_id: String,
  /// The FIXML document describing the order.
  pub fixml: String,
}

impl OrderReq {
  /// Create an `OrderReq` for the given account and FIXML document.
  #[inline]
  pub fn new(account_id: impl Into<String>, fixml: impl Into<String>) -> Self {
    Self {
      account_id: account_id.into(),
      fixml: fixml.into(),
    }
  }
}


Endpoint! {
  /// The representation of a GET request to the /accounts/{id}/orders
  /// endpoint, listing the most recent orders of an account.
  pub Get(String),

  fn path(input: &Self::Input) -> Str {
    format!("accounts/{}/orders", input).into()
  }
}


Endpoint! {
  /// The representation of a POST request to the
  /// /accounts/{id}/orders endpoint, placing an order.
  pub Post(OrderReq),

  #[inline]
  fn method() -> Method {
    Method::POST
  }

  fn path(input: &Self::Input) -> Str {
    format!("accounts/{}/orders", input.account_id).into()
  }

  fn body(input: &Self::Input) -> Option<Bytes> {
    Some(Bytes::from(input.fixml.clone()))
  }
}


Endpoint! {
  /// The representation of a POST request to the
  /// /accounts/{id}/orders/preview endpoint.
  ///
  /// Previewing an order reports estimated costs and commission but
  /// does not place it.
  pub Preview(OrderReq),

  #[inline]
  fn method() -> Method {
    Method::POST
  }

  fn path(input: &Self::Input) -> Str {
    format!("accounts/{}/orders/preview", input.account_id).into()
  }

  fn body(input: &Self::Input) -> Option<Bytes> {
    Some(Bytes::from(input.fixml.clone()))
  }
}
