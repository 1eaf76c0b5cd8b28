//! Easing curves for scroll animations

use serde::Deserialize;

/// Easing curve types, resolved by their registry name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Easing {
    /// Fast start, decelerate: `-t(t - 2)`
    #[default]
    #[serde(rename = "easeOut")]
    EaseOut,
}

impl Easing {
    /// Look up a curve by the name used in configuration
    pub fn from_name(name: &str) -> Option<Easing> {
        match name {
            "easeOut" => Some(Easing::EaseOut),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Easing::EaseOut => "easeOut",
        }
    }
}

/// Sample a curve at progress `t` in range [0, 1].
///
/// Curves receive the run duration in seconds; `EaseOut` ignores it.
pub fn ease(t: f64, _duration: f64, easing: Easing) -> f64 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::EaseOut => -t * (t - 2.0),
    }
}
