//! Domain types shared by the client, the renderer and the mock backend
//!
//! - Coordinates in `[lat, lng]` order
//! - The search form's query
//! - Analysis result items (see [`result`])

pub mod result;

pub use result::{AnalysisResult, Attributes, ResultItem};

use serde::{Deserialize, Serialize};

/// A street label as returned by the street directory
pub type StreetName = String;

/// A geographic coordinate (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Arithmetic mean of a set of coordinates, `None` when empty
    pub fn mean<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinates>,
    {
        let (lat, lng, count) = points
            .into_iter()
            .fold((0.0, 0.0, 0usize), |(lat, lng, n), p| (lat + p.lat, lng + p.lng, n + 1));

        (count > 0).then(|| Self::new(lat / count as f64, lng / count as f64))
    }
}

/// One submission of the address form
///
/// Field values are kept exactly as entered; the backend receives them as
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub street: StreetName,
    #[serde(rename = "houseNumber")]
    pub house_number: String,
    pub radius: String,
}

impl SearchQuery {
    pub fn new(
        street: impl Into<String>,
        house_number: impl Into<String>,
        radius: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            house_number: house_number.into(),
            radius: radius.into(),
        }
    }

    /// Radius in meters if the entered text starts with a positive integer
    ///
    /// Mirrors the lenient integer parse of a web form: leading whitespace
    /// and sign are accepted, anything after the leading digits is ignored.
    /// Digit runs too long for a `u64` saturate instead of being rejected.
    pub fn radius_meters(&self) -> Option<u64> {
        let trimmed = self.radius.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits: Vec<u64> = rest
            .chars()
            .map_while(|c| c.to_digit(10))
            .map(u64::from)
            .collect();
        if digits.is_empty() {
            return None;
        }

        let value = digits
            .into_iter()
            .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(d));

        if negative || value == 0 {
            None
        } else {
            Some(value)
        }
    }
}
