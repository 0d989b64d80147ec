use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::geo::LatLng;

/// Route search between the user and a dropped pin.
///
/// `added_time_req` is the extra walking time in minutes the user is willing
/// to spend on the leisurely variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteSearchRequest {
    pub user_location: LatLng,
    pub pin_location: LatLng,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_time_req: Option<u32>,
}

impl RouteSearchRequest {
    pub fn new(user_location: LatLng, pin_location: LatLng) -> Self {
        Self {
            user_location,
            pin_location,
            added_time_req: None,
        }
    }

    pub fn with_added_time(mut self, minutes: u32) -> Self {
        self.added_time_req = Some(minutes);
        self
    }
}

/// Which of the two route variants to follow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RouteKind {
    Fastest,
    #[strum(to_string = "leisurely", serialize = "avenue")]
    Leisurely,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FastestSummary {
    /// Minutes.
    pub actual_time: f64,
    pub distance_meter: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FastestPath {
    pub summary: FastestSummary,
    #[serde(default)]
    pub path: Vec<LatLng>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvenueSummary {
    pub req_added_time: f64,
    pub target_total_time: f64,
    pub actual_time: f64,
    pub distance_meter: f64,
    #[serde(default)]
    pub display_msg: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvenuePath {
    pub summary: AvenueSummary,
    #[serde(default)]
    pub path: Vec<LatLng>,
}

/// Both route variants for one search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteRecommendation {
    pub fastest: FastestPath,
    pub avenue: AvenuePath,
}

/// One variant of a [`RouteRecommendation`], flattened for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedRoute<'a> {
    pub kind: RouteKind,
    pub path: &'a [LatLng],
    pub walking_minutes: f64,
    pub distance_meters: f64,
}

impl RouteRecommendation {
    pub fn select(&self, kind: RouteKind) -> SelectedRoute<'_> {
        SelectedRoute {
            kind,
            path: self.path(kind),
            walking_minutes: self.walking_minutes(kind),
            distance_meters: self.distance_meters(kind),
        }
    }

    /// Polyline of the chosen variant.
    pub fn path(&self, kind: RouteKind) -> &[LatLng] {
        match kind {
            RouteKind::Fastest => &self.fastest.path,
            RouteKind::Leisurely => &self.avenue.path,
        }
    }

    /// Walking time in minutes of the chosen variant.
    pub fn walking_minutes(&self, kind: RouteKind) -> f64 {
        match kind {
            RouteKind::Fastest => self.fastest.summary.actual_time,
            RouteKind::Leisurely => self.avenue.summary.actual_time,
        }
    }

    pub fn distance_meters(&self, kind: RouteKind) -> f64 {
        match kind {
            RouteKind::Fastest => self.fastest.summary.distance_meter,
            RouteKind::Leisurely => self.avenue.summary.distance_meter,
        }
    }

    /// Extra minutes the leisurely variant costs over the fastest one.
    pub fn extra_minutes(&self) -> f64 {
        (self.avenue.summary.actual_time - self.fastest.summary.actual_time).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> RouteRecommendation {
        serde_json::from_value(json!({
            "fastest": {
                "type": "FASTEST",
                "summary": { "actual_time": 10.0, "distance_meter": 800.0 },
                "path": [{ "lat": 37.54, "lng": 127.07 }, { "lat": 37.55, "lng": 127.08 }]
            },
            "avenue": {
                "type": "AVENUE",
                "summary": {
                    "req_added_time": 5.0,
                    "target_total_time": 15.0,
                    "actual_time": 14.0,
                    "distance_meter": 1100.0,
                    "display_msg": "4 minutes longer under the trees"
                },
                "path": [{ "lat": 37.54, "lng": 127.07 }]
            }
        }))
        .unwrap()
    }

    #[test]
    fn variant_accessors_pick_the_right_leg() {
        let route = sample();
        assert_eq!(route.path(RouteKind::Fastest).len(), 2);
        assert_eq!(route.path(RouteKind::Leisurely).len(), 1);
        assert_eq!(route.distance_meters(RouteKind::Leisurely), 1100.0);
        assert_eq!(route.extra_minutes(), 4.0);
    }

    #[test]
    fn select_flattens_the_leisurely_leg() {
        let route = sample();
        let selected = route.select(RouteKind::Leisurely);
        assert_eq!(selected.kind, RouteKind::Leisurely);
        assert_eq!(selected.walking_minutes, 14.0);
        assert_eq!(selected.path, route.avenue.path.as_slice());
    }

    #[test]
    fn added_time_is_omitted_when_unset() {
        let request = RouteSearchRequest::new(LatLng::new(1.0, 2.0), LatLng::new(3.0, 4.0));
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("added_time_req").is_none());
        let value = serde_json::to_value(request.with_added_time(10)).unwrap();
        assert_eq!(value["added_time_req"], 10);
    }

    #[test]
    fn route_kind_parses_aliases() {
        assert_eq!("fastest".parse::<RouteKind>().unwrap(), RouteKind::Fastest);
        assert_eq!("avenue".parse::<RouteKind>().unwrap(), RouteKind::Leisurely);
        assert_eq!(RouteKind::Leisurely.to_string(), "leisurely");
    }
}
