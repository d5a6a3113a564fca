// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geographic placement
//!
//! Maps WGS84 latitude/longitude/altitude onto the viewer's local Cartesian
//! frame. The frame is anchored to a single geographic origin; `+X` is east,
//! `+Y` is up and `-Z` is north (forward), matching the renderer's camera
//! convention.
//!
//! The projection is equirectangular: accurate to well under a meter for
//! captures within roughly 10 km of the origin. Nothing enforces that range.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Offset from the origin in meters: `(east, up, -north)`.
pub type LocalOffset = Vector3<f64>;

/// A geographic position (degrees, meters)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees, [-90, 90]
    pub latitude: f64,
    /// Longitude in degrees, [-180, 180]
    pub longitude: f64,
    /// Altitude in meters (0 when absent)
    #[serde(default)]
    pub altitude: f64,
}

impl GeoLocation {
    /// Create a location at altitude 0
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: 0.0,
        }
    }

    /// Create a location with an explicit altitude
    pub fn with_altitude(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    /// Check latitude/longitude ranges
    #[inline]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
            && self.altitude.is_finite()
    }

    /// Fail with `InvalidCoordinate` when out of range. Values are never clamped.
    pub fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

/// Converts geographic positions into local offsets around one origin.
#[derive(Debug, Clone, Default)]
pub struct GeospatialProjector {
    origin: Option<GeoLocation>,
}

impl GeospatialProjector {
    /// Create a projector with no origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a projector anchored at `origin`
    pub fn with_origin(origin: GeoLocation) -> Result<Self> {
        let mut projector = Self::new();
        projector.set_origin(origin)?;
        Ok(projector)
    }

    /// Replace the origin unconditionally
    pub fn set_origin(&mut self, origin: GeoLocation) -> Result<()> {
        origin.validate()?;
        tracing::debug!(
            latitude = origin.latitude,
            longitude = origin.longitude,
            altitude = origin.altitude,
            "Origin set"
        );
        self.origin = Some(origin);
        Ok(())
    }

    /// Current origin, if any
    #[inline]
    pub fn origin(&self) -> Option<GeoLocation> {
        self.origin
    }

    /// Clear the origin. The next `to_local` call re-anchors the frame.
    pub fn reset(&mut self) {
        if self.origin.take().is_some() {
            tracing::debug!("Origin cleared");
        }
    }

    /// Project `loc` into the local frame.
    ///
    /// When no origin is set yet, `loc` becomes the origin and the result is
    /// `(0, altitude, 0)`. Every later call leaves the origin untouched.
    pub fn to_local(&mut self, loc: GeoLocation) -> Result<LocalOffset> {
        loc.validate()?;

        let origin = match self.origin {
            Some(origin) => origin,
            None => {
                tracing::debug!(
                    latitude = loc.latitude,
                    longitude = loc.longitude,
                    "No origin yet, anchoring frame at first location"
                );
                self.origin = Some(loc);
                return Ok(Vector3::new(0.0, loc.altitude, 0.0));
            }
        };

        Ok(equirectangular_offset(&origin, &loc))
    }

    /// Haversine distance from the current origin, `None` when unset
    pub fn distance_from_origin(&self, loc: &GeoLocation) -> Option<f64> {
        self.origin.map(|origin| distance(&origin, loc))
    }

    /// Great-circle distance in meters; does not depend on the origin
    #[inline]
    pub fn distance(&self, a: &GeoLocation, b: &GeoLocation) -> f64 {
        distance(a, b)
    }
}

/// Equirectangular offset of `loc` relative to `origin`.
///
/// North is negated: forward in the renderer is `-Z`.
pub fn equirectangular_offset(origin: &GeoLocation, loc: &GeoLocation) -> LocalOffset {
    let mean_lat = ((origin.latitude + loc.latitude) / 2.0).to_radians();
    let east = (loc.longitude - origin.longitude).to_radians() * mean_lat.cos() * EARTH_RADIUS_M;
    let north = (loc.latitude - origin.latitude).to_radians() * EARTH_RADIUS_M;
    let up = loc.altitude - origin.altitude;

    Vector3::new(east, up, -north)
}

/// Haversine great-circle distance in meters (altitude ignored)
pub fn distance(a: &GeoLocation, b: &GeoLocation) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (b.longitude - a.longitude).to_radians();

    let sin_lat = (d_lat / 2.0).sin();
    let sin_lon = (d_lon / 2.0).sin();
    let h = sin_lat * sin_lat + lat1.cos() * lat2.cos() * sin_lon * sin_lon;
    // Rounding can push h marginally past 1 for antipodal points
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}
