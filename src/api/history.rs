// Copyright (C) 2026 The tradeking Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;
use serde_urlencoded::to_string as to_query;

use crate::Error;
use crate::Str;


/// The date range to report account activity for.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Range {
  /// All available activity.
  #[serde(rename = "all")]
  All,
  /// Activity of the current day.
  #[serde(rename = "today")]
  Today,
  /// Activity of the current week.
  #[serde(rename = "current_week")]
  CurrentWeek,
  /// Activity of the current month.
  #[serde(rename = "current_month")]
  CurrentMonth,
  /// Activity of the last month.
  #[serde(rename = "last_month")]
  LastMonth,
}


/// The kind of transactions to report.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Transactions {
  /// Transactions of all kinds.
  #[serde(rename = "all")]
  All,
  /// Bookkeeping transactions only.
  #[serde(rename = "bookkeeping")]
  Bookkeeping,
  /// Trades only.
  #[serde(rename = "trade")]
  Trade,
}


/// A GET request to be made to the /accounts/{id}/history endpoint.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct HistoryReq {
  /// The account to retrieve the history for.
  #[serde(skip)]
  pub account_id: String,
  /// The date range to filter by. The server's default applies if not
  /// set.
  #[serde(rename = "range", skip_serializing_if = "Option::is_none")]
  pub range: Option<Range>,
  /// The kind of transactions to filter by. The server's default
  /// applies if not set.
  #[serde(rename = "transactions", skip_serializing_if = "Option::is_none")]
  pub transactions: Option<Transactions>,
}

impl HistoryReq {
  /// Create a `HistoryReq` for the given account, without any filters.
  pub fn new(account_id: impl Into<String>) -> Self {
    Self {
      account_id: account_id.into(),
      ..Default::default()
    }
  }
}


Endpoint! {
  /// The representation of a GET request to the
  /// /accounts/{id}/history endpoint.
  pub Get(HistoryReq),

  fn path(input: &Self::Input) -> Str {
    format!("accounts/{}/history", input.account_id).into()
  }

  fn query(input: &Self::Input) -> Result<Option<Str>, Error> {
    Ok(Some(to_query(input)?.into()))
  }
}
