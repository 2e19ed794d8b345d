//! Geographic bounding boxes

use crate::constants::geo::METERS_PER_DEGREE_LAT;
use crate::model::Coordinates;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Axis-aligned lat/lng box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Degenerate box around a single point
    pub fn from_point(point: Coordinates) -> Self {
        Self {
            south: point.lat,
            west: point.lng,
            north: point.lat,
            east: point.lng,
        }
    }

    /// Smallest box containing all points, `None` when empty
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinates>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::from_point(first), |mut bounds, p| {
            bounds.extend_point(p);
            bounds
        }))
    }

    /// Box enclosing a circle of `radius_meters` around `center`
    ///
    /// Uses the equirectangular approximation: a degree of longitude shrinks
    /// with the cosine of the latitude.
    pub fn around_circle(center: Coordinates, radius_meters: f64) -> Self {
        let delta_lat = radius_meters / METERS_PER_DEGREE_LAT;
        let meters_per_deg_lng = METERS_PER_DEGREE_LAT * (center.lat * PI / 180.0).cos();
        let delta_lng = if meters_per_deg_lng > f64::EPSILON {
            radius_meters / meters_per_deg_lng
        } else {
            180.0
        };

        Self {
            south: center.lat - delta_lat,
            west: center.lng - delta_lng,
            north: center.lat + delta_lat,
            east: center.lng + delta_lng,
        }
    }

    pub fn extend_point(&mut self, point: Coordinates) {
        self.south = self.south.min(point.lat);
        self.west = self.west.min(point.lng);
        self.north = self.north.max(point.lat);
        self.east = self.east.max(point.lng);
    }

    pub fn extend(&mut self, other: &Bounds) {
        self.south = self.south.min(other.south);
        self.west = self.west.min(other.west);
        self.north = self.north.max(other.north);
        self.east = self.east.max(other.east);
    }

    /// Grow the box by `ratio` of its height and width on every side
    pub fn pad(&self, ratio: f64) -> Self {
        let height_buffer = (self.north - self.south).abs() * ratio;
        let width_buffer = (self.east - self.west).abs() * ratio;

        Self {
            south: self.south - height_buffer,
            west: self.west - width_buffer,
            north: self.north + height_buffer,
            east: self.east + width_buffer,
        }
    }

    pub fn center(&self) -> Coordinates {
        Coordinates::new((self.south + self.north) / 2.0, (self.west + self.east) / 2.0)
    }

    pub fn contains(&self, other: &Bounds) -> bool {
        other.south >= self.south
            && other.north <= self.north
            && other.west >= self.west
            && other.east <= self.east
    }

    pub fn contains_point(&self, point: Coordinates) -> bool {
        self.contains(&Self::from_point(point))
    }
}
