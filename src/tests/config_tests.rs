#[cfg(test)]
mod tests {
    use crate::config::{self, AppConfig};
    use crate::tests::support::test_config;

    #[test]
    fn embedded_defaults_parse() {
        let cfg = AppConfig::default();
        assert!(!cfg.server.host.is_empty());
        assert!(cfg.server.port > 0);
        assert!(cfg.database.url.starts_with("sqlite"));
        assert!(cfg.auth.token_ttl_hours > 0);
    }

    #[test]
    fn validate_rejects_port_zero() {
        let mut cfg = test_config("sqlite://test.db".to_string());
        cfg.server.port = 0;
        assert!(config::validate(&cfg).is_err());
    }

    #[test]
    fn validate_rejects_empty_database_url() {
        let mut cfg = test_config("  ".to_string());
        cfg.database.url = "  ".to_string();
        assert!(config::validate(&cfg).is_err());
    }

    #[test]
    fn validate_rejects_short_jwt_secret() {
        let mut cfg = test_config("sqlite://test.db".to_string());
        cfg.auth.jwt_secret = "too-short".to_string();
        assert!(config::validate(&cfg).is_err());
    }

    #[test]
    fn validate_rejects_bad_token_ttl() {
        let mut cfg = test_config("sqlite://test.db".to_string());
        cfg.auth.token_ttl_hours = 0;
        assert!(config::validate(&cfg).is_err());
        cfg.auth.token_ttl_hours = 1000;
        assert!(config::validate(&cfg).is_err());
    }

    #[test]
    fn validate_accepts_test_config() {
        let cfg = test_config("sqlite://test.db".to_string());
        assert!(config::validate(&cfg).is_ok());
    }

    #[test]
    fn ensure_sqlite_parent_dir_creates_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}/nested/dir/test.db", tmp.path().display());
        config::ensure_sqlite_parent_dir(&url).unwrap();
        assert!(tmp.path().join("nested/dir").is_dir());
    }

    #[test]
    fn ensure_sqlite_parent_dir_ignores_non_sqlite_urls() {
        assert!(config::ensure_sqlite_parent_dir("postgres://localhost/db").is_ok());
    }
}
