//! Route table
//!
//! The six fixed routes and the JSON bodies they produce. Every body is a
//! pure function of a single clock reading taken by the dispatcher.

use chrono::{DateTime, Local};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::http;

pub const GREETING: &str = "Hello World!";
pub const HEALTHY: &str = "healthy";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Hello,
    Health,
    DateTime,
    Time,
    Date,
}

impl Route {
    pub const ALL: [Self; 6] = [
        Self::Root,
        Self::Hello,
        Self::Health,
        Self::DateTime,
        Self::Time,
        Self::Date,
    ];

    /// Exact path match; `/hello/` is not `/hello`
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    pub const fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Hello => "/hello",
            Self::Health => "/health",
            Self::DateTime => "/datetime",
            Self::Time => "/time",
            Self::Date => "/date",
        }
    }

    pub fn respond(self, now: DateTime<Local>) -> Response<Full<Bytes>> {
        match self {
            Self::Root | Self::Hello => http::json_response(StatusCode::OK, &greeting()),
            Self::Health => http::json_response(StatusCode::OK, &health()),
            Self::DateTime => http::json_response(StatusCode::OK, &datetime_body(now)),
            Self::Time => http::json_response(StatusCode::OK, &time_body(now)),
            Self::Date => http::json_response(StatusCode::OK, &date_body(now)),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Greeting {
    pub message: &'static str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Health {
    pub status: &'static str,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct DateTimeBody {
    pub date: String,
    pub time: String,
    pub datetime: String,
    /// Seconds since the Unix epoch with microsecond fraction
    pub timestamp: f64,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TimeBody {
    pub current_time: String,
    pub timezone: &'static str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DateBody {
    pub current_date: String,
    pub day_of_week: String,
    pub month: String,
}

pub const fn greeting() -> Greeting {
    Greeting { message: GREETING }
}

pub const fn health() -> Health {
    Health { status: HEALTHY }
}

pub fn datetime_body(now: DateTime<Local>) -> DateTimeBody {
    DateTimeBody {
        date: now.format(DATE_FORMAT).to_string(),
        time: now.format(TIME_FORMAT).to_string(),
        datetime: now.format(DATETIME_FORMAT).to_string(),
        timestamp: epoch_seconds(now),
    }
}

pub fn time_body(now: DateTime<Local>) -> TimeBody {
    TimeBody {
        current_time: now.format(TIME_FORMAT).to_string(),
        timezone: "local",
    }
}

pub fn date_body(now: DateTime<Local>) -> DateBody {
    DateBody {
        current_date: now.format(DATE_FORMAT).to_string(),
        day_of_week: now.format("%A").to_string(),
        month: now.format("%B").to_string(),
    }
}

#[allow(clippy::cast_precision_loss)]
fn epoch_seconds(now: DateTime<Local>) -> f64 {
    now.timestamp_micros() as f64 / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, TimeZone};

    /// Tuesday 2024-03-05 14:07:09.250 local time
    fn fixed_now() -> DateTime<Local> {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_milli_opt(14, 7, 9, 250)
            .unwrap();
        Local.from_local_datetime(&naive).earliest().unwrap()
    }

    #[test]
    fn test_from_path_exact_match() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/nonexistent"), None);
        assert_eq!(Route::from_path("/hello/"), None);
        assert_eq!(Route::from_path("/HELLO"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn test_static_bodies() {
        assert_eq!(
            serde_json::to_value(greeting()).unwrap(),
            serde_json::json!({"message": "Hello World!"})
        );
        assert_eq!(
            serde_json::to_value(health()).unwrap(),
            serde_json::json!({"status": "healthy"})
        );
    }

    #[test]
    fn test_datetime_body_formats() {
        let body = datetime_body(fixed_now());
        assert_eq!(body.date, "2024-03-05");
        assert_eq!(body.time, "14:07:09");
        assert_eq!(body.datetime, "2024-03-05 14:07:09");
        // Sub-second precision survives
        assert!((body.timestamp.fract() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_timestamp_matches_datetime_within_one_second() {
        let body = datetime_body(fixed_now());
        let parsed = NaiveDateTime::parse_from_str(&body.datetime, DATETIME_FORMAT).unwrap();
        let local = Local.from_local_datetime(&parsed).earliest().unwrap();
        #[allow(clippy::cast_precision_loss)]
        let expected = local.timestamp() as f64;
        assert!((body.timestamp - expected).abs() < 1.0);
    }

    #[test]
    fn test_time_body() {
        let body = time_body(fixed_now());
        assert_eq!(body.current_time, "14:07:09");
        assert_eq!(body.timezone, "local");
    }

    #[test]
    fn test_date_body_full_names() {
        let body = date_body(fixed_now());
        assert_eq!(body.current_date, "2024-03-05");
        assert_eq!(body.day_of_week, "Tuesday");
        assert_eq!(body.month, "March");
    }

    #[test]
    fn test_bodies_consistent_for_one_reading() {
        let now = fixed_now();
        let dt = datetime_body(now);
        assert_eq!(dt.date, date_body(now).current_date);
        assert_eq!(dt.time, time_body(now).current_time);
        assert_eq!(dt.datetime, format!("{} {}", dt.date, dt.time));
    }

    #[test]
    fn test_body_field_sets() {
        let now = fixed_now();
        let keys = |v: serde_json::Value| {
            let mut keys: Vec<String> = v.as_object().unwrap().keys().cloned().collect();
            keys.sort();
            keys
        };
        assert_eq!(
            keys(serde_json::to_value(datetime_body(now)).unwrap()),
            ["date", "datetime", "time", "timestamp"]
        );
        assert_eq!(
            keys(serde_json::to_value(time_body(now)).unwrap()),
            ["current_time", "timezone"]
        );
        assert_eq!(
            keys(serde_json::to_value(date_body(now)).unwrap()),
            ["current_date", "day_of_week", "month"]
        );
    }

    #[test]
    fn test_respond_is_json_200() {
        for route in Route::ALL {
            let resp = route.respond(fixed_now());
            assert_eq!(resp.status(), StatusCode::OK, "{}", route.path());
            assert_eq!(resp.headers()["content-type"], "application/json");
        }
    }
}
