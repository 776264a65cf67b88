use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn blank_values_use_defaults() {
    let cfg = ServerConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_values(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn parses_ipv6_host() {
    let cfg = ServerConfig::from_values(Some("::1"), Some("4000")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:4000");
}

#[test]
fn non_numeric_port_errors() {
    let err = ServerConfig::from_values(None, Some("abc")).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "abc".into() });
    assert!(err.to_string().contains("invalid PORT"));
}

#[test]
fn zero_and_out_of_range_ports_error() {
    assert!(matches!(ServerConfig::from_values(None, Some("0")), Err(ConfigError::InvalidPort { .. })));
    assert!(matches!(ServerConfig::from_values(None, Some("70000")), Err(ConfigError::InvalidPort { .. })));
}

#[test]
fn invalid_host_errors() {
    let err = ServerConfig::from_values(Some("localhost"), None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost { value: "localhost".into() });
}

#[test]
fn from_env_reads_port() {
    unsafe {
        std::env::remove_var("FILMCAST_HOST");
        std::env::set_var("PORT", "5050");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 5050);
    assert_eq!(cfg.host, DEFAULT_HOST);

    unsafe { std::env::remove_var("PORT") };
}
