//! Configuration validation.

use std::collections::HashSet;

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Convert the first error, if any, into a [`ConfigError`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(ConfigError::InvalidValue {
                field: err.path,
                message: err.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_static_files(config, &mut result);
        Self::validate_activities(config, &mut result);

        result
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }
    }

    fn validate_static_files(config: &Config, result: &mut ValidationResult) {
        let files = &config.static_files;

        if !files.mount.starts_with('/') || files.mount.trim_end_matches('/').is_empty() {
            result.add_error(ValidationError::new(
                "static_files.mount",
                "Mount must start with '/' and name a path segment",
            ));
        }

        if files.index.trim_start_matches('/').is_empty() {
            result.add_error(ValidationError::new(
                "static_files.index",
                "Index document cannot be empty",
            ));
        }

        if !files.dir.is_dir() {
            result.add_warning(ValidationWarning::new(
                "static_files.dir",
                format!("Directory {} does not exist", files.dir.display()),
            ));
        }
    }

    fn validate_activities(config: &Config, result: &mut ValidationResult) {
        let mut names = HashSet::new();

        for (i, activity) in config.activities.iter().enumerate() {
            let path = format!("activities[{}]", i);

            if activity.name.trim().is_empty() {
                result.add_error(ValidationError::new(
                    format!("{}.name", path),
                    "Activity name cannot be empty",
                ));
            } else if !names.insert(activity.name.as_str()) {
                result.add_error(ValidationError::new(
                    format!("{}.name", path),
                    format!("Duplicate activity name '{}'", activity.name),
                ));
            }

            if activity.max_participants == 0 {
                result.add_error(ValidationError::new(
                    format!("{}.max_participants", path),
                    "max_participants must be greater than 0",
                ));
            }

            let mut emails = HashSet::new();
            for email in &activity.participants {
                if !emails.insert(email.as_str()) {
                    result.add_error(ValidationError::new(
                        format!("{}.participants", path),
                        format!("'{}' is listed more than once", email),
                    ));
                }
            }

            // Capacity is informational; an over-full seed is allowed.
            if activity.max_participants > 0
                && activity.participants.len() > activity.max_participants as usize
            {
                result.add_warning(ValidationWarning::new(
                    format!("{}.participants", path),
                    format!(
                        "{} participants exceed capacity of {}",
                        activity.participants.len(),
                        activity.max_participants
                    ),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
