// Copyright (C) 2026 The tradeking Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;
use serde::Serializer;
use serde_variant::to_variant_name;


/// Serialize a slice of strings into a comma-separated string combining
/// the individual strings.
///
/// An empty slice is serialized as "none", which causes the
/// corresponding parameter to be omitted from a query string.
pub(crate) fn string_slice_to_str<S>(slice: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
  S: Serializer,
{
  if !slice.is_empty() {
    // `serde_urlencoded` seemingly does not know how to handle a
    // `Vec`. So we concatenate the elements ourselves.
    serializer.serialize_str(&slice.join(","))
  } else {
    serializer.serialize_none()
  }
}


/// Retrieve the serialized name of an enum variant.
///
/// # Notes
/// - this function should only be used for cases where `T` is a unit
///   enum variant
pub(crate) fn variant_name<T>(variant: &T) -> &'static str
where
  T: Serialize,
{
  // We know that we are dealing with an enum variant and the function
  // will never return an error for those, so it's fine to unwrap.
  to_variant_name(variant).unwrap()
}
