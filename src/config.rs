use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};

use crate::animation::Easing;
use crate::error::{Result, ScrollError};

pub const DEFAULT_DURATION: f64 = 0.5;

/// Keys recognized in an options object
pub const OPTION_KEYS: [&str; 2] = ["animate", "duration"];

fn default_duration() -> f64 {
    DEFAULT_DURATION
}

/// Animator options, fixed for the lifetime of an animator
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimatorConfig {
    /// Easing curve, by registry name
    #[serde(default)]
    pub animate: Easing,
    /// Animation duration in seconds
    #[serde(default = "default_duration")]
    pub duration: f64,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            animate: Easing::default(),
            duration: DEFAULT_DURATION,
        }
    }
}

impl AnimatorConfig {
    /// Build from optional raw options, falling back to the defaults
    pub fn new(animate: Option<&str>, duration: Option<f64>) -> Result<Self> {
        let animate = match animate {
            Some(name) => Easing::from_name(name)
                .ok_or_else(|| ScrollError::Config(format!("unknown easing curve '{}'", name)))?,
            None => Easing::default(),
        };

        let config = Self {
            animate,
            duration: duration.unwrap_or(DEFAULT_DURATION),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: AnimatorConfig = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| ScrollError::Config(format!("YAML parse error: {}", e)))?
        };
        config.validate()?;
        Ok(config)
    }

    /// Build from a JavaScript options object `{ animate?, duration? }`.
    ///
    /// `undefined` and `null` give the defaults; missing fields fall back
    /// one by one.
    pub fn from_js(options: &JsValue) -> Result<Self> {
        if options.is_undefined() || options.is_null() {
            return Ok(Self::default());
        }
        if !options.is_object() {
            return Err(ScrollError::Config("options must be an object".to_string()));
        }

        let keys: Vec<String> = js_sys::Object::keys(options.unchecked_ref::<js_sys::Object>())
            .iter()
            .filter_map(|key| key.as_string())
            .collect();
        check_option_keys(&keys)?;

        let animate = js_field(options, "animate")?
            .map(|value| {
                value
                    .as_string()
                    .ok_or_else(|| ScrollError::Config("animate must be a curve name".to_string()))
            })
            .transpose()?;
        let duration = js_field(options, "duration")?
            .map(|value| {
                value
                    .as_f64()
                    .ok_or_else(|| ScrollError::Config("duration must be a number".to_string()))
            })
            .transpose()?;

        Self::new(animate.as_deref(), duration)
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(ScrollError::Config(format!(
                "duration must be a positive number of seconds, got {}",
                self.duration
            )));
        }
        Ok(())
    }
}

/// Reject option names other than `animate` and `duration`
pub fn check_option_keys<S: AsRef<str>>(keys: &[S]) -> Result<()> {
    match keys.iter().find(|key| !OPTION_KEYS.contains(&key.as_ref())) {
        Some(key) => Err(ScrollError::Config(format!("unknown option '{}'", key.as_ref()))),
        None => Ok(()),
    }
}

fn js_field(options: &JsValue, name: &str) -> Result<Option<JsValue>> {
    let value = js_sys::Reflect::get(options, &JsValue::from_str(name))
        .map_err(|e| ScrollError::Config(format!("cannot read option '{}': {:?}", name, e)))?;
    Ok(if value.is_undefined() { None } else { Some(value) })
}
