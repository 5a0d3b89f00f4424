// Copyright (C) 2026 The tradeking Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use serde_json::Value;

use crate::api::account;
use crate::api::accounts;
use crate::api::clock;
use crate::api::history;
use crate::api::history::HistoryReq;
use crate::api::member;
use crate::api::news;
use crate::api::options;
use crate::api::orders;
use crate::api::orders::OrderReq;
use crate::api::quotes;
use crate::api::quotes::QuotesReq;
use crate::api::timesales;
use crate::api::timesales::TimeSalesReq;
use crate::api::toplists;
use crate::api::toplists::ListType;
use crate::api::utility;
use crate::blocking;
use crate::Client;
use crate::Error;


/// A macro for defining one convenience method per remote capability,
/// on both the asynchronous and the blocking client.
///
/// Each method merely assembles the input for an endpoint and issues
/// the request.
macro_rules! Calls {
  ( $(
      $(#[$docs:meta])*
      fn $name:ident($($arg:ident: $ty:ty),*) => $endpoint:ty, $input:expr;
    )* ) => {
    impl Client {
      $(
        $(#[$docs])*
        pub async fn $name(&self, $($arg: $ty),*) -> Result<Option<Value>, Error> {
          self.issue::<$endpoint>(&$input).await
        }
      )*
    }

    impl blocking::Client {
      $(
        $(#[$docs])*
        pub fn $name(&self, $($arg: $ty),*) -> Result<Option<Value>, Error> {
          self.issue::<$endpoint>(&$input)
        }
      )*
    }
  };
}


Calls! {
  /// Retrieve detailed balance and holding information for each
  /// account associated with the user.
  fn accounts() => accounts::Get, ();

  /// Retrieve summary balance information for each account associated
  /// with the user, as well as the total value of all accounts.
  fn accounts_balances() => accounts::GetBalances, ();

  /// Retrieve detailed balance and holding information for an
  /// account.
  fn account(account_id: &str) => account::Get, account_id.to_string();

  /// Retrieve detailed balance information for an account.
  fn account_balances(account_id: &str) => account::GetBalances, account_id.to_string();

  /// Retrieve the activity of an account, optionally filtered by date
  /// range and transaction type.
  fn account_history(request: &HistoryReq) => history::Get, *request;

  /// Retrieve information about the holdings of an account.
  fn account_holdings(account_id: &str) => account::GetHoldings, account_id.to_string();

  /// Retrieve the most recent orders of an account.
  fn account_orders(account_id: &str) => orders::Get, account_id.to_string();

  /// Place an order described by a FIXML document.
  fn account_order(account_id: &str, fixml: &str) => orders::Post, OrderReq::new(account_id, fixml);

  /// Preview an order described by a FIXML document, without placing
  /// it.
  fn account_order_preview(account_id: &str, fixml: &str)
    => orders::Preview, OrderReq::new(account_id, fixml);

  /// Retrieve the current state of the market, the time of the next
  /// state change, and the current server time stamp.
  fn market_clock() => clock::Get, ();

  /// Retrieve quotes for one or more symbols.
  fn market_ext_quotes(request: &QuotesReq) => quotes::Get, *request;

  /// Search for news headlines by keyword and/or symbol.
  fn market_news_search(request: &news::SearchReq) => news::Search, *request;

  /// Retrieve a news article.
  fn market_news(news_id: &str) => news::Get, news_id.to_string();

  /// Search for options of an underlying symbol.
  fn market_options_search(request: &options::SearchReq) => options::Search, *request;

  /// Retrieve the available option strike prices for a symbol.
  fn market_options_strikes(symbol: &str) => options::GetStrikes, symbol.to_string();

  /// Retrieve the available option expiration dates for a symbol.
  fn market_options_expirations(symbol: &str)
    => options::GetExpirations, symbol.to_string();

  /// Retrieve time and sales data for one or more symbols.
  fn market_timesales(request: &TimeSalesReq) => timesales::Get, *request;

  /// Retrieve a ranked list of securities.
  fn market_toplists(list_type: ListType) => toplists::Get, list_type;

  /// Retrieve general information about the user, including all of
  /// the user's account numbers.
  fn member_profile() => member::GetProfile, ();

  /// Retrieve the current server time stamp if the API and its back
  /// end systems are accessible.
  fn utility_status() => utility::GetStatus, ();

  /// Retrieve the version of the API.
  fn utility_version() => utility::GetVersion, ();
}


#[cfg(test)]
mod tests {
  use super::*;

  use http::Method;
  use http::StatusCode;

  use serde_json::json;

  use test_log::test;

  use crate::test_util::Stub;


  /// Check that every call reports the payload of the response
  /// envelope.
  #[test(tokio::test)]
  async fn all_calls_unwrap_envelope() {
    let stub = Stub::serve(StatusCode::OK, r#"{"response": {"foo": "bar"}}"#).await;
    let client = Client::new(stub.api_info());
    let expected = Some(json!({"foo": "bar"}));

    assert_eq!(client.accounts().await.unwrap(), expected);
    assert_eq!(client.accounts_balances().await.unwrap(), expected);
    assert_eq!(client.account("1").await.unwrap(), expected);
    assert_eq!(client.account_balances("1").await.unwrap(), expected);
    assert_eq!(client.account_history(&HistoryReq::new("1")).await.unwrap(), expected);
    assert_eq!(client.account_holdings("1").await.unwrap(), expected);
    assert_eq!(client.account_orders("1").await.unwrap(), expected);
    assert_eq!(client.account_order("1", "<FIXML/>").await.unwrap(), expected);
    assert_eq!(client.account_order_preview("1", "<FIXML/>").await.unwrap(), expected);
    assert_eq!(client.market_clock().await.unwrap(), expected);
    assert_eq!(client.market_ext_quotes(&QuotesReq::new(["F"])).await.unwrap(), expected);
    assert_eq!(client.market_news_search(&Default::default()).await.unwrap(), expected);
    assert_eq!(client.market_news("abc").await.unwrap(), expected);
    assert_eq!(client.market_options_search(&options::SearchReq::new("F")).await.unwrap(), expected);
    assert_eq!(client.market_options_strikes("F").await.unwrap(), expected);
    assert_eq!(client.market_options_expirations("F").await.unwrap(), expected);
    assert_eq!(client.market_timesales(&TimeSalesReq::new(["F"])).await.unwrap(), expected);
    assert_eq!(client.market_toplists(ListType::Active).await.unwrap(), expected);
    assert_eq!(client.member_profile().await.unwrap(), expected);
    assert_eq!(client.utility_status().await.unwrap(), expected);
    assert_eq!(client.utility_version().await.unwrap(), expected);

    let paths = stub
      .requests()
      .into_iter()
      .map(|request| (request.method, request.path))
      .collect::<Vec<_>>();
    let expected = [
      (Method::GET, "/v1/accounts.json"),
      (Method::GET, "/v1/accounts/balances.json"),
      (Method::GET, "/v1/accounts/1.json"),
      (Method::GET, "/v1/accounts/1/balances.json"),
      (Method::GET, "/v1/accounts/1/history.json"),
      (Method::GET, "/v1/accounts/1/holdings.json"),
      (Method::GET, "/v1/accounts/1/orders.json"),
      (Method::POST, "/v1/accounts/1/orders.json"),
      (Method::POST, "/v1/accounts/1/orders/preview.json"),
      (Method::GET, "/v1/market/clock.json"),
      (Method::GET, "/v1/market/ext/quotes.json"),
      (Method::GET, "/v1/market/news/search.json"),
      (Method::GET, "/v1/market/news/abc.json"),
      (Method::GET, "/v1/market/options/search.json"),
      (Method::GET, "/v1/market/options/strikes.json"),
      (Method::GET, "/v1/market/options/expirations.json"),
      (Method::GET, "/v1/market/timesales.json"),
      (Method::GET, "/v1/market/toplists/topactive.json"),
      (Method::GET, "/v1/member/profile.json"),
      (Method::GET, "/v1/utility/status.json"),
      (Method::GET, "/v1/utility/version.json"),
    ]
    .into_iter()
    .map(|(method, path)| (method, path.to_string()))
    .collect::<Vec<_>>();
    assert_eq!(paths, expected);
  }

  /// Check that every call reports `None` if the response lacks the
  /// envelope.
  #[test(tokio::test)]
  async fn all_calls_without_envelope() {
    let stub = Stub::serve(StatusCode::OK, "{}").await;
    let client = Client::new(stub.api_info());

    assert_eq!(client.accounts().await.unwrap(), None);
    assert_eq!(client.accounts_balances().await.unwrap(), None);
    assert_eq!(client.account("1").await.unwrap(), None);
    assert_eq!(client.account_balances("1").await.unwrap(), None);
    assert_eq!(client.account_history(&HistoryReq::new("1")).await.unwrap(), None);
    assert_eq!(client.account_holdings("1").await.unwrap(), None);
    assert_eq!(client.account_orders("1").await.unwrap(), None);
    assert_eq!(client.account_order("1", "<FIXML/>").await.unwrap(), None);
    assert_eq!(client.account_order_preview("1", "<FIXML/>").await.unwrap(), None);
    assert_eq!(client.market_clock().await.unwrap(), None);
    assert_eq!(client.market_ext_quotes(&QuotesReq::new(["F"])).await.unwrap(), None);
    assert_eq!(client.market_news_search(&Default::default()).await.unwrap(), None);
    assert_eq!(client.market_news("abc").await.unwrap(), None);
    assert_eq!(client.market_options_search(&options::SearchReq::new("F")).await.unwrap(), None);
    assert_eq!(client.market_options_strikes("F").await.unwrap(), None);
    assert_eq!(client.market_options_expirations("F").await.unwrap(), None);
    assert_eq!(client.market_timesales(&TimeSalesReq::new(["F"])).await.unwrap(), None);
    assert_eq!(client.market_toplists(ListType::Losers).await.unwrap(), None);
    assert_eq!(client.member_profile().await.unwrap(), None);
    assert_eq!(client.utility_status().await.unwrap(), None);
    assert_eq!(client.utility_version().await.unwrap(), None);
  }

  /// Check the request issued when retrieving a single account.
  #[test(tokio::test)]
  async fn account_request() {
    let stub = Stub::serve(StatusCode::OK, "{}").await;
    let client = Client::new(stub.api_info());
    let _account = client.account("12345").await.unwrap();

    let request = stub.request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/v1/accounts/12345.json");
    assert_eq!(request.query, None);
  }

  /// Check the request issued when placing an order.
  #[test(tokio::test)]
  async fn account_order_request() {
    let stub = Stub::serve(StatusCode::OK, "{}").await;
    let client = Client::new(stub.api_info());
    let _order = client.account_order("12345", "<FIXML/>").await.unwrap();

    let request = stub.request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/v1/accounts/12345/orders.json");
    assert_eq!(request.body, "<FIXML/>".as_bytes());
  }

  /// Check the request issued when retrieving quotes.
  #[test(tokio::test)]
  async fn market_ext_quotes_request() {
    let stub = Stub::serve(StatusCode::OK, "{}").await;
    let client = Client::new(stub.api_info());
    let request = QuotesReq::new(["AAPL,MSFT"]);
    let _quotes = client.market_ext_quotes(&request).await.unwrap();

    let request = stub.request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/v1/market/ext/quotes.json");
    assert_eq!(
      request.query_pairs(),
      vec![("symbols".to_string(), "AAPL,MSFT".to_string())]
    );
  }

  /// Check the request issued for a news search without any filters.
  #[test(tokio::test)]
  async fn market_news_search_request() {
    let stub = Stub::serve(StatusCode::OK, "{}").await;
    let client = Client::new(stub.api_info());
    let _news = client.market_news_search(&Default::default()).await.unwrap();

    assert_eq!(
      stub.request().query_pairs(),
      vec![("maxhits".to_string(), "10".to_string())]
    );
  }
}
