
    use super::*;
    use crate::schema::ActivitySeed;
    use tempfile::TempDir;

    fn config_with_static_dir() -> (Config, TempDir) {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.static_files.dir = dir.path().to_path_buf();
        (config, dir)
    }

    #[test]
    fn test_default_config_is_valid() {
        let (config, _dir) = config_with_static_dir();
        let result = ConfigValidator::validate(&config);
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_port_zero() {
        let (mut config, _dir) = config_with_static_dir();
        config.server.port = 0;
        let result = ConfigValidator::validate(&config);
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.path == "server.port"));
    }

    #[test]
    fn test_empty_host() {
        let (mut config, _dir) = config_with_static_dir();
        config.server.host = String::new();
        let result = ConfigValidator::validate(&config);
        assert!(result.errors.iter().any(|e| e.path == "server.host"));
    }

    #[test]
    fn test_mount_without_leading_slash() {
        let (mut config, _dir) = config_with_static_dir();
        config.static_files.mount = "static".to_string();
        let result = ConfigValidator::validate(&config);
        assert!(result.errors.iter().any(|e| e.path == "static_files.mount"));
    }

    #[test]
    fn test_mount_root_rejected() {
        let (mut config, _dir) = config_with_static_dir();
        config.static_files.mount = "/".to_string();
        let result = ConfigValidator::validate(&config);
        assert!(result.errors.iter().any(|e| e.path == "static_files.mount"));
    }

    #[test]
    fn test_empty_index() {
        let (mut config, _dir) = config_with_static_dir();
        config.static_files.index = String::new();
        let result = ConfigValidator::validate(&config);
        assert!(result.errors.iter().any(|e| e.path == "static_files.index"));
    }

    #[test]
    fn test_missing_static_dir_is_warning() {
        let mut config = Config::default();
        config.static_files.dir = "/nonexistent/mergington/static".into();
        let result = ConfigValidator::validate(&config);
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.path == "static_files.dir"));
    }

    #[test]
    fn test_duplicate_activity_name() {
        let (mut config, _dir) = config_with_static_dir();
        config.activities = vec![
            ActivitySeed::new("Chess Club", "a", "Fridays", 10),
            ActivitySeed::new("Chess Club", "b", "Mondays", 10),
        ];
        let result = ConfigValidator::validate(&config);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].path, "activities[1].name");
    }

    #[test]
    fn test_empty_activity_name() {
        let (mut config, _dir) = config_with_static_dir();
        config.activities = vec![ActivitySeed::new("  ", "a", "Fridays", 10)];
        let result = ConfigValidator::validate(&config);
        assert!(result.errors.iter().any(|e| e.path == "activities[0].name"));
    }

    #[test]
    fn test_zero_capacity() {
        let (mut config, _dir) = config_with_static_dir();
        config.activities = vec![ActivitySeed::new("Chess Club", "a", "Fridays", 0)];
        let result = ConfigValidator::validate(&config);
        assert!(result
            .errors
            .iter()
            .any(|e| e.path == "activities[0].max_participants"));
    }

    #[test]
    fn test_duplicate_seed_participant() {
        let (mut config, _dir) = config_with_static_dir();
        config.activities = vec![ActivitySeed::new("Chess Club", "a", "Fridays", 10)
            .with_participant("x@mergington.edu")
            .with_participant("x@mergington.edu")];
        let result = ConfigValidator::validate(&config);
        assert!(result.errors[0].message.contains("x@mergington.edu"));
    }

    #[test]
    fn test_over_capacity_is_warning() {
        let (mut config, _dir) = config_with_static_dir();
        config.activities = vec![ActivitySeed::new("Tiny Club", "a", "Fridays", 1)
            .with_participant("a@mergington.edu")
            .with_participant("b@mergington.edu")];
        let result = ConfigValidator::validate(&config);
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].message.contains("exceed capacity"));
    }

    #[test]
    fn test_into_result_reports_first_error() {
        let (mut config, _dir) = config_with_static_dir();
        config.server.port = 0;
        config.server.host = String::new();
        let err = ConfigValidator::validate(&config).into_result().unwrap_err();
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn test_into_result_returns_warnings() {
        let mut config = Config::default();
        config.static_files.dir = "/nonexistent/mergington/static".into();
        let warnings = ConfigValidator::validate(&config).into_result().unwrap();
        assert_eq!(warnings.len(), 1);
    }
