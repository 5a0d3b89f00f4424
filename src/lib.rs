// Copyright (C) 2026 The tradeking Developers
// SPDX-License-Identifier: GPL-3.0-or-later

#![allow(clippy::unreadable_literal)]
#![warn(
  bad_style,
  dead_code,
  future_incompatible,
  improper_ctypes,
  late_bound_lifetime_arguments,
  missing_copy_implementations,
  missing_debug_implementations,
  missing_docs,
  no_mangle_generic_items,
  non_shorthand_field_patterns,
  nonstandard_style,
  overflowing_literals,
  path_statements,
  patterns_in_fns_without_body,
  proc_macro_derive_resolution_fallback,
  renamed_and_removed_lints,
  rust_2018_compatibility,
  rust_2018_idioms,
  stable_features,
  trivial_bounds,
  trivial_numeric_casts,
  type_alias_bounds,
  tyvar_behind_raw_pointer,
  unconditional_recursion,
  unreachable_code,
  unreachable_patterns,
  unstable_features,
  unstable_name_collisions,
  unused,
  unused_comparisons,
  unused_import_braces,
  unused_lifetimes,
  unused_qualifications,
  unused_results,
  while_true,
)]

//! A crate for interacting with the TradeKing API.
//!
//! Requests are described by types implementing [`Endpoint`] and
//! issued through a [`Client`], which signs them using one-legged
//! OAuth1. Every call yields the JSON document found under the
//! `"response"` key of the server's reply, if any.

#[macro_use]
mod endpoint;

/// A module comprising the definitions of the individual API
/// endpoints.
pub mod api;

/// A module providing a client that blocks the calling thread for the
/// duration of each request.
pub mod blocking;

mod api_info;
mod calls;
mod client;
mod error;
mod oauth;
mod util;

#[cfg(test)]
mod test_util;

use std::borrow::Cow;

pub use crate::api_info::ApiInfo;
pub use crate::client::Builder;
pub use crate::client::Client;
pub use crate::endpoint::Endpoint;
pub use crate::error::Error;

/// The JSON value type used to represent response payloads.
pub use serde_json::Value;

type Str = Cow<'static, str>;
