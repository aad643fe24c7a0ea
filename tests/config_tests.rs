// Host-side tests for reading nav settings from data-* attributes.

#![allow(dead_code)]
mod site {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod orbit {
        include!("../src/core/orbit.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
}

use site::config::*;
use site::error::SiteError;
use std::collections::HashMap;

fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn read(pairs: &[(&str, &str)]) -> Result<NavSettings, SiteError> {
    let map = attrs(pairs);
    NavSettings::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn no_attributes_gives_defaults() {
    let settings = read(&[]).unwrap();
    assert_eq!(settings, NavSettings::default());
    assert_eq!(settings.orbit.radius, 120.0);
    assert_eq!(settings.orbit.item_half_extent, 30.0);
    assert_eq!(settings.breakpoint, 768.0);
}

#[test]
fn plain_and_px_values_are_accepted() {
    let settings = read(&[
        (ATTR_RADIUS, "140"),
        (ATTR_THRESHOLD, "200px"),
        (ATTR_SCALE_GAIN, " 0.3 "),
        (ATTR_BREAKPOINT, "1024 px"),
    ])
    .unwrap();
    assert_eq!(settings.orbit.radius, 140.0);
    assert_eq!(settings.orbit.attraction_threshold, 200.0);
    assert!((settings.orbit.scale_gain - 0.3).abs() < 1e-6);
    assert_eq!(settings.breakpoint, 1024.0);
    // Untouched fields keep their defaults
    assert_eq!(settings.orbit.wobble_amplitude, 15.0);
}

#[test]
fn item_size_sets_the_half_extent() {
    let settings = read(&[(ATTR_ITEM_SIZE, "80px")]).unwrap();
    assert_eq!(settings.orbit.item_half_extent, 40.0);
}

#[test]
fn blank_values_keep_the_default() {
    let settings = read(&[(ATTR_RADIUS, ""), (ATTR_WOBBLE, "   "), (ATTR_STRENGTH, "px")]).unwrap();
    assert_eq!(settings, NavSettings::default());
}

#[test]
fn zero_is_a_valid_setting() {
    let settings = read(&[(ATTR_WOBBLE, "0")]).unwrap();
    assert_eq!(settings.orbit.wobble_amplitude, 0.0);
}

#[test]
fn malformed_values_are_rejected_with_the_raw_text() {
    for bad in ["abc", "-5", "NaN", "inf", "12em"] {
        let err = read(&[(ATTR_RADIUS, bad)]).unwrap_err();
        assert_eq!(
            err,
            SiteError::InvalidSetting {
                key: ATTR_RADIUS.to_string(),
                value: bad.to_string(),
            }
        );
    }
}

#[test]
fn error_message_names_the_attribute() {
    let err = read(&[(ATTR_BREAKPOINT, "wide")]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("data-breakpoint"), "{}", msg);
    assert!(msg.contains("wide"), "{}", msg);
}

#[test]
fn every_known_attribute_is_a_data_attribute() {
    for name in SETTING_ATTRIBUTES {
        assert!(name.starts_with("data-"), "{}", name);
    }
}
