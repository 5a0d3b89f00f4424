// Copyright (C) 2026 The tradeking Developers
// SPDX-License-Identifier: GPL-3.0-or-later

/// Definitions pertaining a single account.
pub mod account;
/// Functionality for listing the user's accounts.
pub mod accounts;
/// Functionality for retrieving the market status.
pub mod clock;
/// Functionality for retrieving an account's activity history.
pub mod history;
/// Functionality for retrieving the user's profile.
pub mod member;
/// Functionality for searching and retrieving news articles.
pub mod news;
/// Functionality for retrieving option chain information.
pub mod options;
/// Functionality for listing, placing, and previewing orders.
pub mod orders;
/// Functionality for retrieving quotes.
pub mod quotes;
/// Functionality for retrieving time and sales data.
pub mod timesales;
/// Functionality for retrieving ranked lists of securities.
pub mod toplists;
/// Functionality for inquiring the API's status and version.
pub mod utility;

/// The base URL of the API.
pub(crate) const API_BASE_URL: &str = "https://api.tradeking.com/v1";
