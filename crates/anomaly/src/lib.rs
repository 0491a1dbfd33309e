//! Unusual-point detection for yearly emissions series.
//!
//! A transition between consecutive reported years is flagged when its
//! absolute percentage change exceeds a multiple of the median absolute
//! change across the whole series.
//!
//! # Quick start
//!
//! ```rust
//! use klimat_anomaly::{DetectorConfig, detect_unusual_points};
//! use klimat_regression::DataPoint;
//!
//! let points = [
//!     DataPoint::new(2019, 100.0),
//!     DataPoint::new(2020, 102.0),
//!     DataPoint::new(2021, 104.0),
//!     DataPoint::new(2022, 1040.0),
//!     DataPoint::new(2023, 1060.0),
//! ];
//! let found = detect_unusual_points(&points, &DetectorConfig::default()).unwrap();
//! assert!(found.has_unusual_points);
//! assert_eq!(found.details[0].to_year, 2022);
//! ```

mod config;
mod detect;
mod error;
mod result;

pub use config::DetectorConfig;
pub use detect::detect_unusual_points;
pub use error::AnomalyError;
pub use result::{Direction, UnusualPoint, UnusualPoints};
