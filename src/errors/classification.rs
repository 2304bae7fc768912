use super::types::FlightRiskError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    /// The user can recover by correcting their input and trying again.
    pub user_fixable: bool,
}

impl FlightRiskError {
    /// Classify this error to determine its type and whether corrected input can fix it.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            FlightRiskError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                user_fixable: true,
            },
            FlightRiskError::Read(_) => ErrorClassification {
                error_type: "ReadError",
                user_fixable: true,
            },
            FlightRiskError::Csv(_) => ErrorClassification {
                error_type: "ReadError",
                user_fixable: true,
            },
            FlightRiskError::Validation(_) => ErrorClassification {
                error_type: "ValidationError",
                user_fixable: true,
            },
            FlightRiskError::Computation(_) => ErrorClassification {
                error_type: "ComputationError",
                user_fixable: true,
            },
            FlightRiskError::Yaml(_) => ErrorClassification {
                error_type: "ConfigError",
                user_fixable: true,
            },
            FlightRiskError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                user_fixable: false,
            },
            FlightRiskError::Io(_) => ErrorClassification {
                error_type: "IoError",
                user_fixable: false,
            },
            FlightRiskError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                user_fixable: false,
            },
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.classify().error_type {
            "ConfigError" => 2,
            "ReadError" => 3,
            "ValidationError" => 4,
            "ComputationError" => 5,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_is_user_fixable() {
        let err = FlightRiskError::Read("unexpected end of file".into());
        let class = err.classify();
        assert!(class.user_fixable);
        assert_eq!(class.error_type, "ReadError");
    }

    #[test]
    fn test_validation_error_classification() {
        let err = FlightRiskError::Validation("not an aviation dataset".into());
        let class = err.classify();
        assert!(class.user_fixable);
        assert_eq!(class.error_type, "ValidationError");
    }

    #[test]
    fn test_computation_error_classification() {
        let err = FlightRiskError::Computation("need at least 2 records".into());
        assert_eq!(err.classify().error_type, "ComputationError");
    }

    #[test]
    fn test_internal_not_user_fixable() {
        let err = FlightRiskError::Internal("bug".into());
        assert!(!err.classify().user_fixable);
    }

    #[test]
    fn test_yaml_counts_as_config() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: [1, 2").unwrap_err();
        let err = FlightRiskError::from(yaml_err);
        assert_eq!(err.classify().error_type, "ConfigError");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(FlightRiskError::Config("x".into()).exit_code(), 2);
        assert_eq!(FlightRiskError::Read("x".into()).exit_code(), 3);
        assert_eq!(FlightRiskError::Validation("x".into()).exit_code(), 4);
        assert_eq!(FlightRiskError::Computation("x".into()).exit_code(), 5);
        assert_eq!(FlightRiskError::Internal("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_display_messages() {
        let err = FlightRiskError::Validation("No valid columns found".into());
        assert_eq!(err.to_string(), "Invalid dataset: No valid columns found");
        let err = FlightRiskError::Computation("singular".into());
        assert_eq!(err.to_string(), "Analysis error: singular");
    }
}
