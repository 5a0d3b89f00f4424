// Copyright (C) 2026 The tradeking Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;
use serde_urlencoded::to_string as to_query;

use crate::util::string_slice_to_str;
use crate::Error;
use crate::Str;


/// The interval of time and sales data points.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum Interval {
  /// Individual ticks.
  #[serde(rename = "tick")]
  Tick,
  /// One minute bars.
  #[serde(rename = "1min")]
  OneMinute,
  /// Five minute bars.
  #[default]
  #[serde(rename = "5min")]
  FiveMinutes,
}


/// A GET request to be made to the /market/timesales endpoint.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TimeSalesReq {
  /// The symbols to retrieve data for.
  #[serde(rename = "symbols", serialize_with = "string_slice_to_str")]
  pub symbols: Vec<String>,
  /// The interval of the data points.
  #[serde(rename = "interval")]
  pub interval: Interval,
  /// The number of data points to report per page.
  #[serde(rename = "rpp")]
  pub per_page: usize,
  /// The page offset to report.
  #[serde(rename = "index", skip_serializing_if = "Option::is_none")]
  pub index: Option<usize>,
  /// The date to start reporting data at, e.g., "2013-04-12".
  #[serde(rename = "startdate", skip_serializing_if = "Option::is_none")]
  pub start_date: Option<String>,
  /// The date to stop reporting data at.
  #[serde(rename = "enddate", skip_serializing_if = "Option::is_none")]
  pub end_date: Option<String>,
  /// The time of day to start reporting data at, e.g., "09:30".
  #[serde(rename = "starttime", skip_serializing_if = "Option::is_none")]
  pub start_time: Option<String>,
}

impl TimeSalesReq {
  /// Create a `TimeSalesReq` for the given symbols, reporting ten five
  /// minute data points.
  pub fn new<I, S>(symbols: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      symbols: symbols.into_iter().map(S::into).collect(),
      interval: Interval::default(),
      per_page: 10,
      index: None,
      start_date: None,
      end_date: None,
      start_time: None,
    }
  }
}


Endpoint! {
  /// The representation of a GET request to the /market/timesales
  /// endpoint.
  pub Get(TimeSalesReq),

  #[inline]
  fn path(_input: &Self::Input) -> Str {
    "market/timesales".into()
  }

  fn query(input: &Self::Input) -> Result<Option<Str>, Error> {
    Ok(Some(to_query(input)?.into()))
  }
}
