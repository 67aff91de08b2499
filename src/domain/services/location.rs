// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Country keyword that marks a query as location-flagged on its own.
pub const COUNTRY_KEYWORD: &str = "nigeria";

/// Cities covered by the fallback catalog, lowercase.
pub const KNOWN_CITIES: [&str; 3] = ["lagos", "abuja", "port harcourt"];

/// Whether a query refers to a region the fallback catalog covers.
///
/// Case-insensitive substring match, so "Port Harcourt seafood" and
/// "NIGERIAN food" both qualify.
pub fn is_location_flagged(query: &str) -> bool {
    let normalized = query.to_lowercase();
    normalized.contains(COUNTRY_KEYWORD) || KNOWN_CITIES.iter().any(|city| normalized.contains(city))
}

/// Whether the query names the given city, case-insensitively.
pub fn mentions_city(query: &str, city: &str) -> bool {
    query.to_lowercase().contains(&city.to_lowercase())
}

/// Whether the query names the country keyword.
pub fn mentions_country(query: &str) -> bool {
    query.to_lowercase().contains(COUNTRY_KEYWORD)
}
