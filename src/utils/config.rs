use crate::api::blocking::CoveragePlanner;
use crate::api::types::SweepRequest;
use crate::core::{ErrorParameters, GridConfig, Method, Point2D};
use crate::processing::SweepOptions;
use crate::validation::{ParameterValidator, PlanningError, ValidationConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Planner configuration: one setup per method plus sweep settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Differential-range setup
    pub diff_range: SweepRequest,
    /// Direct-range setup
    pub direct_range: SweepRequest,
    /// Angle-measuring setup
    pub angle_measuring: SweepRequest,
    /// Sweep execution options
    #[serde(default)]
    pub sweep: SweepOptions,
    /// Sweeps above this sample count are logged as large
    #[serde(default = "default_sample_budget")]
    pub sample_budget: usize,
}

fn default_sample_budget() -> usize {
    ValidationConfig::default().sample_budget
}

impl Default for PlannerConfig {
    fn default() -> Self {
        let station_a = Point2D::new(-5.0, 0.0);
        let station_b = Point2D::new(5.0, 0.0);
        let grid = GridConfig::default();

        Self {
            diff_range: SweepRequest::new(
                station_a,
                station_b,
                ErrorParameters::DiffRange { sigma_r_allow: 3.0, sigma_t: 1.0 },
                grid,
            ),
            direct_range: SweepRequest::new(
                station_a,
                station_b,
                ErrorParameters::DirectRange { sigma_d: 10.0, sigma_r: 1.0 },
                grid,
            ),
            angle_measuring: SweepRequest::new(
                station_a,
                station_b,
                ErrorParameters::AngleMeasuring { sigma_d: 1.0, sigma_theta: 0.1 },
                grid,
            ),
            sweep: SweepOptions::default(),
            sample_budget: default_sample_budget(),
        }
    }
}

impl PlannerConfig {
    pub fn setup(&self, method: Method) -> &SweepRequest {
        match method {
            Method::DiffRange => &self.diff_range,
            Method::DirectRange => &self.direct_range,
            Method::AngleMeasuring => &self.angle_measuring,
        }
    }

    fn setup_mut(&mut self, method: Method) -> &mut SweepRequest {
        match method {
            Method::DiffRange => &mut self.diff_range,
            Method::DirectRange => &mut self.direct_range,
            Method::AngleMeasuring => &mut self.angle_measuring,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to access config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid {method} setup: {source}")]
    Invalid {
        method: Method,
        #[source]
        source: PlanningError,
    },
}

/// Loads, validates and stores the planner configuration
pub struct ConfigurationManager {
    config: PlannerConfig,
    config_file_path: Option<String>,
    is_modified: bool,
}

impl Default for ConfigurationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationManager {
    /// Create a manager holding the default configuration
    pub fn new() -> Self {
        Self {
            config: PlannerConfig::default(),
            config_file_path: None,
            is_modified: false,
        }
    }

    /// Create a manager and load the configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut manager = Self::new();
        manager.load_from_file(path)?;
        Ok(manager)
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Replace the configuration after validating every setup
    pub fn update_config(&mut self, config: PlannerConfig) -> Result<(), ConfigError> {
        Self::validate(&config)?;
        self.config = config;
        self.is_modified = true;
        Ok(())
    }

    /// Replace the setup of one method
    pub fn set_setup(&mut self, method: Method, request: SweepRequest) -> Result<(), ConfigError> {
        Self::validate_setup(method, &request, &ParameterValidator::new())?;
        *self.config.setup_mut(method) = request;
        self.is_modified = true;
        Ok(())
    }

    /// Change the grid of one method, returning the previous grid
    pub fn set_grid(&mut self, method: Method, grid: GridConfig) -> Result<GridConfig, ConfigError> {
        let mut request = *self.config.setup(method);
        let old = request.grid;
        request.grid = grid;
        self.set_setup(method, request)?;
        Ok(old)
    }

    /// Planner configured with the sweep and validation settings
    pub fn planner(&self) -> CoveragePlanner {
        CoveragePlanner::new()
            .with_options(self.config.sweep)
            .with_validation(ValidationConfig {
                sample_budget: self.config.sample_budget,
            })
    }

    /// Check every method setup
    pub fn validate(config: &PlannerConfig) -> Result<(), ConfigError> {
        let validator = ParameterValidator::new();
        for method in Method::ALL {
            Self::validate_setup(method, config.setup(method), &validator)?;
        }
        Ok(())
    }

    fn validate_setup(
        method: Method,
        request: &SweepRequest,
        validator: &ParameterValidator,
    ) -> Result<(), ConfigError> {
        validator
            .validate(method, request.station_a, request.station_b, &request.params, &request.grid)
            .into_result()
            .map(|_| ())
            .map_err(|source| ConfigError::Invalid { method, source })
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path_str.clone(),
            source,
        })?;
        let config: PlannerConfig = serde_json::from_str(&content)?;

        // Validate before applying
        Self::validate(&config)?;

        self.config = config;
        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let content = serde_json::to_string_pretty(&self.config)?;

        fs::write(&path, content).map_err(|source| ConfigError::Io {
            path: path_str.clone(),
            source,
        })?;

        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save to the currently loaded file path
    pub fn save(&mut self) -> Result<(), ConfigError> {
        match self.config_file_path.clone() {
            Some(path) => self.save_to_file(path),
            None => Err(ConfigError::Io {
                path: String::new(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no file path set for saving configuration",
                ),
            }),
        }
    }

    /// Whether the configuration changed since it was last loaded or saved
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }
}
