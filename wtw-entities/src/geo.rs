use std::fmt;

const LAT_DEG_MAX: f64 = 90.0;
const LAT_DEG_MIN: f64 = -90.0;
const LNG_DEG_MAX: f64 = 180.0;
const LNG_DEG_MIN: f64 = -180.0;

fn is_valid_lat_deg(deg: f64) -> bool {
    (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&deg)
}

fn is_valid_lng_deg(deg: f64) -> bool {
    (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&deg)
}

/// A geographical location given in decimal degrees (WGS 84).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        let res = Self {
            lat: lat.into(),
            lng: lng.into(),
        };
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        let (lat, lng) = (lat.into(), lng.into());
        // NaN fails both range checks
        if is_valid_lat_deg(lat) && is_valid_lng_deg(lng) {
            Some(Self { lat, lng })
        } else {
            None
        }
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        is_valid_lat_deg(self.lat) && is_valid_lng_deg(self.lng)
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub fn from_km(km: f64) -> Self {
        Self(km * 1_000.0)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn to_km(self) -> f64 {
        self.0 / 1_000.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

/// Human readable distance:
/// whole meters below 1 km, one decimal below 10 km,
/// whole kilometers otherwise.
impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // The unit follows the rounded value
        let meters = self.to_meters().round();
        if meters < 1_000.0 {
            return write!(f, "{meters} m");
        }
        let km = (self.to_km() * 10.0).round() / 10.0;
        if km < 10.0 {
            write!(f, "{km:.1} km")
        } else {
            write!(f, "{} km", km.round())
        }
    }
}

const MEAN_EARTH_RADIUS_KM: f64 = 6_371.0;

impl MapPoint {
    /// Calculate the great-circle distance on the surface
    /// of the earth with the haversine formula.
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        debug_assert!(p1.is_valid());
        debug_assert!(p2.is_valid());

        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let dlat_half_sin = ((lat2_rad - lat1_rad) / 2.0).sin();
        let dlng_half_sin = ((lng2_rad - lng1_rad) / 2.0).sin();

        let a = dlat_half_sin * dlat_half_sin
            + lat1_rad.cos() * lat2_rad.cos() * dlng_half_sin * dlng_half_sin;
        // Rounding errors might push `a` slightly above 1 for antipodal points
        let a = a.clamp(0.0, 1.0);

        Distance::from_km(2.0 * MEAN_EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt()))
    }
}
