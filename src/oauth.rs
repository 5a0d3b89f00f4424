// Copyright (C) 2026 The tradeking Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! One-legged OAuth1 request signing using HMAC-SHA1.

use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::fmt::Write as _;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use chrono::Utc;

use hmac::Hmac;
use hmac::Mac as _;

use http::Method;

use percent_encoding::utf8_percent_encode;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

use sha1::Sha1;

use url::Url;

use uuid::Uuid;

use crate::api_info::ApiInfo;


/// The characters that are percent-encoded. Everything but the
/// "unreserved" characters of RFC 3986.
const ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
  .remove(b'-')
  .remove(b'.')
  .remove(b'_')
  .remove(b'~');

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const VERSION: &str = "1.0";


type HmacSha1 = Hmac<Sha1>;


/// Percent-encode a string as mandated by the OAuth1 specification.
fn encode(s: &str) -> String {
  utf8_percent_encode(s, ENCODE_SET).to_string()
}


/// Assemble the "base string URI": scheme, authority, and path, but no
/// query or fragment.
fn base_uri(url: &Url) -> String {
  let mut uri = format!("{}://{}", url.scheme(), url.host_str().unwrap_or(""));
  // `Url::port` only reports non-default ports, which is exactly what
  // we are after.
  if let Some(port) = url.port() {
    let _ = write!(uri, ":{}", port);
  }
  uri.push_str(url.path());
  uri
}


/// Create the signature base string for a request.
///
/// All query parameters of `url` as well as the provided OAuth
/// parameters participate in the signature.
fn base_string(method: &Method, url: &Url, oauth_params: &[(&str, &str)]) -> String {
  let mut params = url
    .query_pairs()
    .map(|(k, v)| (encode(&k), encode(&v)))
    .chain(oauth_params.iter().map(|(k, v)| (encode(k), encode(v))))
    .collect::<Vec<_>>();
  params.sort();

  let params = params
    .iter()
    .map(|(k, v)| format!("{}={}", k, v))
    .collect::<Vec<_>>()
    .join("&");

  format!(
    "{}&{}&{}",
    method.as_str().to_ascii_uppercase(),
    encode(&base_uri(url)),
    encode(&params)
  )
}


/// An object signing requests on behalf of a user.
#[derive(Clone)]
pub(crate) struct Signer {
  consumer_key: String,
  oauth_token: String,
  /// The HMAC key, i.e., the encoded consumer secret and token secret
  /// joined by '&'.
  key: String,
}

impl Debug for Signer {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_struct("Signer")
      .field("consumer_key", &self.consumer_key)
      .field("oauth_token", &self.oauth_token)
      .field("key", &"<masked>")
      .finish()
  }
}

impl Signer {
  /// Create a `Signer` for the credentials contained in an `ApiInfo`.
  pub(crate) fn new(api_info: &ApiInfo) -> Self {
    Self {
      consumer_key: api_info.consumer_key.clone(),
      oauth_token: api_info.oauth_token.clone(),
      key: format!(
        "{}&{}",
        encode(&api_info.consumer_secret),
        encode(&api_info.oauth_secret)
      ),
    }
  }

  /// Calculate the base64 encoded HMAC-SHA1 of a signature base string.
  fn sign(&self, base_string: &str) -> String {
    // SANITY: HMAC accepts keys of arbitrary length.
    let mut mac = HmacSha1::new_from_slice(self.key.as_bytes()).expect("HMAC key rejected");
    mac.update(base_string.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
  }

  /// Create the value of the `Authorization` header for a request
  /// using the given nonce and time stamp.
  fn authorization_with(&self, method: &Method, url: &Url, nonce: &str, timestamp: &str) -> String {
    let mut params = vec![
      ("oauth_consumer_key", self.consumer_key.as_str()),
      ("oauth_nonce", nonce),
      ("oauth_signature_method", SIGNATURE_METHOD),
      ("oauth_timestamp", timestamp),
      ("oauth_token", self.oauth_token.as_str()),
      ("oauth_version", VERSION),
    ];

    let signature = self.sign(&base_string(method, url, &params));
    params.push(("oauth_signature", signature.as_str()));

    let params = params
      .iter()
      .map(|(k, v)| format!("{}=\"{}\"", k, encode(v)))
      .collect::<Vec<_>>()
      .join(", ");

    format!("OAuth {}", params)
  }

  /// Create the value of the `Authorization` header for a request.
  pub(crate) fn authorization(&self, method: &Method, url: &Url) -> String {
    let nonce = Uuid::new_v4().simple().to_string();
    let timestamp = Utc::now().timestamp().to_string();
    self.authorization_with(method, url, &nonce, &timestamp)
  }
}
