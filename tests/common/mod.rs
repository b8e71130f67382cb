#![allow(dead_code)]

use log4shell_detect::{Node, looks_like_jndi_injection, parse, tokenize};

/// Tokenize and build in one step, panicking on the depth guard.
pub fn parse_input(input: &str) -> Node {
    parse(&tokenize(input)).expect("parse failed")
}

pub fn assert_verdict(value: &str, expected: bool) {
    let got = looks_like_jndi_injection(value);
    assert_eq!(
        got, expected,
        "verdict mismatch for {value:?}: got {got}, want {expected}"
    );
}
