#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use gatekeep_core::ErrorCode;
use gatekeep_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
gateway:
  listen: "0.0.0.0:8081"
authz:
  model: "m.conf"
  policy: "p.csv"
  subject_headr: "X-User" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
authz:
  model: "authz_model.conf"
  policy: "authz_policy.csv"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:8081");
    assert_eq!(cfg.authz.subject_header, "x-user");
    assert_eq!(cfg.authz.subject_header_name().unwrap().as_str(), "x-user");
}

#[test]
fn rejects_bad_values() {
    let wrong_version = "version: 2\nauthz: { model: m, policy: p }\n";
    assert_eq!(
        config::load_from_str(wrong_version).unwrap_err().code(),
        ErrorCode::UnsupportedVersion
    );

    let empty_model = "version: 1\nauthz: { model: \"\", policy: p }\n";
    assert_eq!(config::load_from_str(empty_model).unwrap_err().code(), ErrorCode::BadRequest);

    let bad_listen = "version: 1\ngateway: { listen: \"nowhere\" }\nauthz: { model: m, policy: p }\n";
    assert_eq!(config::load_from_str(bad_listen).unwrap_err().code(), ErrorCode::BadRequest);

    let bad_header = "version: 1\nauthz: { model: m, policy: p, subject_header: \"X User\" }\n";
    assert_eq!(config::load_from_str(bad_header).unwrap_err().code(), ErrorCode::BadRequest);

    let missing_authz = "version: 1\n";
    assert!(config::load_from_str(missing_authz).is_err());
}

#[test]
fn missing_config_file() {
    let err = config::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert_eq!(err.code(), ErrorCode::LoadFailed);
}
