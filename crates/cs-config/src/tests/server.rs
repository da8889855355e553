use crate::Config;
use crate::tests::{EnvGuard, clear_secret_vars, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_port_below_1024_when_validate_then_error() {
    // Given
    let _env = setup_config_dir();
    let _secrets = clear_secret_vars();
    let _secret = EnvGuard::set("CS_WEBHOOK_SIGNING_SECRET", "whsec_dGVzdA==");
    let _port = EnvGuard::set("CS_SERVER_PORT", "80");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_port_zero_when_validate_then_ok() {
    // Given
    let _env = setup_config_dir();
    let _secrets = clear_secret_vars();
    let _secret = EnvGuard::set("CS_WEBHOOK_SIGNING_SECRET", "whsec_dGVzdA==");
    let _port = EnvGuard::set("CS_SERVER_PORT", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_port_1024_when_validate_then_ok() {
    // Given
    let _env = setup_config_dir();
    let _secrets = clear_secret_vars();
    let _secret = EnvGuard::set("CS_WEBHOOK_SIGNING_SECRET", "whsec_dGVzdA==");
    let _port = EnvGuard::set("CS_SERVER_PORT", "1024");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}
