// Copyright (C) 2026 The tradeking Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::env::var_os;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

use url::Url;

use crate::api::API_BASE_URL;
use crate::Error;

/// The base URL to the API to use.
const ENV_API_URL: &str = "TK_API_BASE_URL";
/// The environment variable representing the consumer key.
const ENV_CONSUMER_KEY: &str = "TK_CONSUMER_KEY";
/// The environment variable representing the consumer secret.
const ENV_CONSUMER_SECRET: &str = "TK_CONSUMER_SECRET";
/// The environment variable representing the OAuth access token.
const ENV_OAUTH_TOKEN: &str = "TK_OAUTH_TOKEN";
/// The environment variable representing the OAuth access token
/// secret.
const ENV_OAUTH_SECRET: &str = "TK_OAUTH_SECRET";


/// Retrieve the value of an environment variable as a `String`.
///
/// A variable that is not present maps to `None`, one that is present
/// but not valid Unicode to an error.
fn env_string(name: &str) -> Result<Option<String>, Error> {
  var_os(name)
    .map(|value| {
      value
        .into_string()
        .map_err(|_| Error::Str(format!("{} environment variable is not a valid string", name).into()))
    })
    .transpose()
}


/// An object encapsulating the information used for working with the
/// TradeKing API.
#[derive(Clone, PartialEq)]
pub struct ApiInfo {
  /// The base URL for the API.
  pub(crate) base_url: Url,
  /// The OAuth consumer key.
  pub(crate) consumer_key: String,
  /// The OAuth consumer secret.
  pub(crate) consumer_secret: String,
  /// The OAuth access token.
  pub(crate) oauth_token: String,
  /// The OAuth access token secret.
  pub(crate) oauth_secret: String,
}

impl ApiInfo {
  /// Create an `ApiInfo` for the default TradeKing API base URL.
  pub fn new(
    consumer_key: impl ToString,
    consumer_secret: impl ToString,
    oauth_token: impl ToString,
    oauth_secret: impl ToString,
  ) -> Self {
    Self {
      // SANITY: The constant is a valid URL.
      base_url: Url::parse(API_BASE_URL).expect("API base URL is invalid"),
      consumer_key: consumer_key.to_string(),
      consumer_secret: consumer_secret.to_string(),
      oauth_token: oauth_token.to_string(),
      oauth_secret: oauth_secret.to_string(),
    }
  }

  /// Create an `ApiInfo` from the required data.
  ///
  /// No validation of the credentials happens. Wrong ones surface as
  /// an authentication failure reported by the server.
  ///
  /// # Errors
  /// - [`Error::Url`](crate::Error::Url) If `base_url` cannot be parsed
  ///   into a [`url::Url`](url::Url).
  pub fn from_parts(
    base_url: impl AsRef<str>,
    consumer_key: impl ToString,
    consumer_secret: impl ToString,
    oauth_token: impl ToString,
    oauth_secret: impl ToString,
  ) -> Result<Self, Error> {
    Ok(Self {
      base_url: Url::parse(base_url.as_ref())?,
      consumer_key: consumer_key.to_string(),
      consumer_secret: consumer_secret.to_string(),
      oauth_token: oauth_token.to_string(),
      oauth_secret: oauth_secret.to_string(),
    })
  }

  /// Create an `ApiInfo` object with information from the environment.
  ///
  /// The following information is used:
  /// - the consumer key is retrieved from the TK_CONSUMER_KEY variable
  /// - the consumer secret is retrieved from the TK_CONSUMER_SECRET
  ///   variable
  /// - the access token is retrieved from the TK_OAUTH_TOKEN variable
  /// - the access token secret is retrieved from the TK_OAUTH_SECRET
  ///   variable
  /// - the API base URL is retrieved from the TK_API_BASE_URL
  ///   variable, if present
  ///
  /// Credentials that are not set are treated as empty.
  pub fn from_env() -> Result<Self, Error> {
    let base_url = env_string(ENV_API_URL)?.unwrap_or_else(|| API_BASE_URL.to_string());
    let consumer_key = env_string(ENV_CONSUMER_KEY)?.unwrap_or_default();
    let consumer_secret = env_string(ENV_CONSUMER_SECRET)?.unwrap_or_default();
    let oauth_token = env_string(ENV_OAUTH_TOKEN)?.unwrap_or_default();
    let oauth_secret = env_string(ENV_OAUTH_SECRET)?.unwrap_or_default();

    Self::from_parts(
      base_url,
      consumer_key,
      consumer_secret,
      oauth_token,
      oauth_secret,
    )
  }

  /// Retrieve the base URL requests are issued against.
  #[inline]
  pub fn base_url(&self) -> &Url {
    &self.base_url
  }
}

impl Debug for ApiInfo {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    static MASKED: &str = "<masked>";

    f.debug_struct("ApiInfo")
      .field("base_url", &self.base_url.as_str())
      .field("consumer_key", &self.consumer_key)
      .field("consumer_secret", &MASKED)
      .field("oauth_token", &self.oauth_token)
      .field("oauth_secret", &MASKED)
      .finish()
  }
}
