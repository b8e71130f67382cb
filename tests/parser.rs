//! Tree-builder shapes and rendering behavior.

mod common;

use common::parse_input;
use log4shell_detect::{
    MAX_NESTING_DEPTH, Node, ParseErrorKind, Token, TokenKind, parse, render, tokenize,
};

fn expr(key: Vec<Node>, value: Vec<Node>) -> Node {
    Node::expression(key, value)
}

fn text(content: &str) -> Node {
    Node::text(content)
}

// -----------------------------------------------------------
// Key/value placement.
// -----------------------------------------------------------

#[test]
fn parse_simple_lookup() {
    let root = parse_input("${b:c}");
    assert_eq!(
        root,
        Node::Root {
            children: vec![expr(vec![text("b")], vec![text("c")])]
        }
    );
}

#[test]
fn parse_key_spans_text_and_nested_lookup() {
    let root = parse_input("a${b${e:f}g:c}d");
    let inner = expr(vec![text("e")], vec![text("f")]);
    assert_eq!(
        root,
        Node::Root {
            children: vec![
                text("a"),
                expr(vec![text("b"), inner, text("g")], vec![text("c")]),
                text("d"),
            ]
        }
    );
}

#[test]
fn parse_value_spans_text_and_nested_lookup() {
    let root = parse_input("${b:c${e:f}g}");
    let inner = expr(vec![text("e")], vec![text("f")]);
    assert_eq!(
        root,
        Node::Root {
            children: vec![expr(vec![text("b")], vec![text("c"), inner, text("g")])]
        }
    );
}

#[test]
fn parse_second_separator_does_not_resplit() {
    // `:-` after an earlier `:` keeps accumulating into value
    let root = parse_input("${z:y:-j}");
    assert_eq!(
        root,
        Node::Root {
            children: vec![expr(vec![text("z")], vec![text("y"), text("j")])]
        }
    );
}

#[test]
fn parse_separator_first_keeps_key_empty() {
    let root = parse_input("${::b${c:d}e}");
    let inner = expr(vec![text("c")], vec![text("d")]);
    assert_eq!(
        root,
        Node::Root {
            children: vec![expr(vec![], vec![text("b"), inner, text("e")])]
        }
    );
}

// -----------------------------------------------------------
// Malformed input never fails.
// -----------------------------------------------------------

#[test]
fn parse_unterminated_lookup() {
    let root = parse_input("x${a:b");
    assert_eq!(
        root,
        Node::Root {
            children: vec![text("x"), expr(vec![text("a")], vec![text("b")])]
        }
    );
}

#[test]
fn parse_deeply_unterminated_chain() {
    let root = parse_input("${${${");
    let innermost = expr(vec![], vec![]);
    let middle = expr(vec![innermost], vec![]);
    let outer = expr(vec![middle], vec![]);
    assert_eq!(
        root,
        Node::Root {
            children: vec![outer]
        }
    );
}

#[test]
fn parse_only_separators_and_braces() {
    // nothing structural outside a lookup: one content leaf
    let root = parse_input(":}:-}");
    assert_eq!(
        root,
        Node::Root {
            children: vec![text(":}:-}")]
        }
    );
}

#[test]
fn parse_stray_end_and_separator_tokens_at_root() {
    let tokens = vec![
        Token::new(TokenKind::Separator, 0, ":".to_string()),
        Token::new(TokenKind::Content, 1, "a".to_string()),
        Token::new(TokenKind::End, 2, "}".to_string()),
        Token::new(TokenKind::Content, 3, "b".to_string()),
    ];
    let root = parse(&tokens).expect("parse failed");
    assert_eq!(
        root,
        Node::Root {
            children: vec![text("a"), text("b")]
        }
    );
}

// -----------------------------------------------------------
// Depth guard.
// -----------------------------------------------------------

#[test]
fn parse_rejects_over_deep_nesting() {
    let input = "${".repeat(MAX_NESTING_DEPTH + 1);
    let err = parse(&tokenize(&input)).expect_err("expected depth error");
    assert_eq!(
        err.kind,
        ParseErrorKind::NestingTooDeep {
            limit: MAX_NESTING_DEPTH
        }
    );
}

#[test]
fn parse_accepts_nesting_at_the_limit() {
    let input = format!(
        "{}x{}",
        "${".repeat(MAX_NESTING_DEPTH),
        "}".repeat(MAX_NESTING_DEPTH)
    );
    assert!(parse(&tokenize(&input)).is_ok());
}

// -----------------------------------------------------------
// Rendering.
// -----------------------------------------------------------

#[test]
fn render_expression_is_its_value() {
    let root = parse_input("${lower:j}");
    assert_eq!(root.to_string(), "j");
}

#[test]
fn render_root_concatenates_children() {
    let root = parse_input("a${b:c}d");
    assert_eq!(root.to_string(), "acd");
}

#[test]
fn render_text_is_literal() {
    assert_eq!(text("hello").to_string(), "hello");
}

#[test]
fn rendered_key_resolves_nested_lookups() {
    let root = parse_input("${${lower:j}ndi:x}");
    let Node::Root { children } = root else {
        panic!("expected root");
    };
    assert_eq!(children[0].rendered_key(), "jndi");
}

#[test]
fn render_node_list() {
    let nodes = vec![text("a"), expr(vec![text("k")], vec![text("v")]), text("b")];
    assert_eq!(render(&nodes), "avb");
}
