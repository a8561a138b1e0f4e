use pretty_assertions::assert_eq;
use serde_json::json;

use outcome::{err, ok, Outcome};

#[derive(Debug, Clone, PartialEq)]
enum ConfigError {
    Missing(String),
    Malformed(String),
}

fn lookup(key: &str) -> Outcome<&'static str, ConfigError> {
    match key {
        "port" => ok("8080"),
        "host" => ok("localhost"),
        "debug" => ok("yes"),
        _ => err(ConfigError::Missing(key.to_string())),
    }
}

fn parse_port(raw: &str) -> Outcome<u16, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::Malformed(raw.to_string()))
        .into()
}

// exercise a full lookup-parse-recover pipeline through the public API
#[test]
fn test_config_pipeline() {
    // happy path: lookup, parse, transform
    let port = lookup("port").and_then(parse_port).map(|p| p + 1);
    assert_eq!(port, ok(8081));

    // missing key short-circuits before the parse step ever runs
    let port = lookup("missing").and_then(parse_port);
    assert_eq!(port, err(ConfigError::Missing("missing".to_string())));

    // malformed value surfaces the parse failure
    let port = lookup("debug").and_then(parse_port);
    assert_eq!(port, err(ConfigError::Malformed("yes".to_string())));

    // recover with a fallback port, then the chain continues as a success
    let port = lookup("missing")
        .and_then(parse_port)
        .or_else(|_| ok::<_, ConfigError>(8080))
        .map(|p| p + 1);
    assert_eq!(port.ok(), Some(8081));

    // reconcile both branches into a report string
    let report = lookup("missing").and_then(parse_port).map_or_else(
        |e| format!("using default port, lookup failed: {e:?}"),
        |p| format!("listening on {p}"),
    );
    assert!(report.is_ok());
    assert_eq!(
        report.ok(),
        Some("using default port, lookup failed: Missing(\"missing\")".to_string())
    );

    // bridge into std result for `?` style propagation
    let res: Result<u16, ConfigError> = lookup("port").and_then(parse_port).into_result();
    assert_eq!(res, Ok(8080));
}

#[test]
fn test_wire_shape() {
    let success: Outcome<u16, String> = ok(8080);
    assert_eq!(serde_json::to_value(success).unwrap(), json!({ "Ok": 8080 }));

    let failure: Outcome<u16, String> = err("unreachable".to_string());
    assert_eq!(
        serde_json::to_value(failure).unwrap(),
        json!({ "Err": "unreachable" })
    );

    let parsed: Outcome<u16, String> = serde_json::from_value(json!({ "Ok": 8080 })).unwrap();
    assert_eq!(parsed, ok(8080));

    let parsed: Outcome<u16, String> =
        serde_json::from_value(json!({ "Err": "unreachable" })).unwrap();
    assert_eq!(parsed, err("unreachable".to_string()));
}
