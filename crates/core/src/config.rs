use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::InsightsError;

/// Root application configuration. Loaded from environment variables
/// with the prefix `WIFI_INSIGHTS__` layered over an optional TOML file.
/// Every default reproduces the showcase's fixed literals.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub restaurant: RestaurantConfig,
    #[serde(default)]
    pub supermarket: SupermarketConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RestaurantConfig {
    #[serde(default = "default_restaurant_visitors")]
    pub visitors: usize,
    #[serde(default = "default_restaurant_base_time")]
    pub base_time: String,
    #[serde(default = "default_restaurant_window")]
    pub window_minutes: u32,
    #[serde(default = "default_restaurant_duration_min")]
    pub duration_min: u32,
    #[serde(default = "default_restaurant_duration_max")]
    pub duration_max: u32,
    #[serde(default = "default_restaurant_frequent")]
    pub frequent_probability: f64,
    /// Weights in `Local, Continental, Both` order.
    #[serde(default = "default_meal_weights")]
    pub meal_preference_weights: Vec<f64>,
    /// Weights in `Lunch, Dinner, Breakfast` order.
    #[serde(default = "default_time_weights")]
    pub time_of_visit_weights: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupermarketConfig {
    #[serde(default = "default_supermarket_visitors")]
    pub visitors: usize,
    #[serde(default = "default_supermarket_base_time")]
    pub base_time: String,
    #[serde(default = "default_supermarket_window")]
    pub window_minutes: u32,
    #[serde(default = "default_supermarket_duration_min")]
    pub duration_min: u32,
    #[serde(default = "default_supermarket_duration_max")]
    pub duration_max: u32,
    #[serde(default = "default_supermarket_frequent")]
    pub frequent_probability: f64,
    /// Weights in `Produce, Groceries, Electronics, Home Goods, Snacks` order.
    #[serde(default = "default_area_weights")]
    pub area_of_interest_weights: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(InsightsError::InvalidValue {
                kind: "output format",
                value: s.to_string(),
            }),
        }
    }
}

// Default functions
fn default_seed() -> u64 {
    42
}
fn default_restaurant_visitors() -> usize {
    300
}
fn default_restaurant_base_time() -> String {
    "2025-05-25 10:00:00".to_string()
}
fn default_restaurant_window() -> u32 {
    540
}
fn default_restaurant_duration_min() -> u32 {
    15
}
fn default_restaurant_duration_max() -> u32 {
    90
}
fn default_restaurant_frequent() -> f64 {
    0.4
}
fn default_meal_weights() -> Vec<f64> {
    vec![0.4, 0.3, 0.3]
}
fn default_time_weights() -> Vec<f64> {
    vec![0.5, 0.3, 0.2]
}
fn default_supermarket_visitors() -> usize {
    350
}
fn default_supermarket_base_time() -> String {
    "2025-05-25 11:00:00".to_string()
}
fn default_supermarket_window() -> u32 {
    720
}
fn default_supermarket_duration_min() -> u32 {
    10
}
fn default_supermarket_duration_max() -> u32 {
    60
}
fn default_supermarket_frequent() -> f64 {
    0.5
}
fn default_area_weights() -> Vec<f64> {
    vec![0.3, 0.4, 0.1, 0.1, 0.1]
}
fn default_preview_rows() -> usize {
    5
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            visitors: default_restaurant_visitors(),
            base_time: default_restaurant_base_time(),
            window_minutes: default_restaurant_window(),
            duration_min: default_restaurant_duration_min(),
            duration_max: default_restaurant_duration_max(),
            frequent_probability: default_restaurant_frequent(),
            meal_preference_weights: default_meal_weights(),
            time_of_visit_weights: default_time_weights(),
        }
    }
}

impl Default for SupermarketConfig {
    fn default() -> Self {
        Self {
            visitors: default_supermarket_visitors(),
            base_time: default_supermarket_base_time(),
            window_minutes: default_supermarket_window(),
            duration_min: default_supermarket_duration_min(),
            duration_max: default_supermarket_duration_max(),
            frequent_probability: default_supermarket_frequent(),
            area_of_interest_weights: default_area_weights(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            preview_rows: default_preview_rows(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            restaurant: RestaurantConfig::default(),
            supermarket: SupermarketConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional TOML file overlaid with
    /// environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_layered(path, None)
    }

    /// `environment` replaces the process environment when given.
    fn load_layered(
        path: Option<&Path>,
        environment: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let builder = builder.add_source(
            config::Environment::with_prefix("WIFI_INSIGHTS")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("restaurant.meal_preference_weights")
                .with_list_parse_key("restaurant.time_of_visit_weights")
                .with_list_parse_key("supermarket.area_of_interest_weights")
                .source(environment),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        tracing::debug!(
            file = ?path,
            seed = config.seed,
            format = ?config.output.format,
            "Configuration resolved"
        );
        Ok(config)
    }

    /// Parse configuration from inline TOML, ignoring the environment.
    pub fn from_toml_str(contents: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
