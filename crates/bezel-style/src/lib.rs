//! Lexer, parser, and cascade for **bezel style sheets**.
//!
//! This crate is intentionally dependency-free so style sheets can be checked
//! by tooling without pulling in the rasterizer or its thread pool.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`color`] | color literals and CSS named colors |
//! | [`computed`] | `ComputedStyle` |
//! | [`error`] | `ParseError`, `ParseErrorKind` |
//! | [`expand`] | shorthand expansion (`margin`, `border`, ...) |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_str` entry point |
//! | [`selector`] | `Element`, `Selector`, matching |
//! | [`sheet`] | `StyleSheet`, `RuleSet`, `Declaration` |
//! | [`value`] | `Value` |
//!
//! # Quick start
//!
//! ```rust
//! use bezel_style::{Element, StyleSheet};
//!
//! let sheet = StyleSheet::parse(r#"
//!     panel > button.primary {
//!         border: 2 #3060c0;
//!         background: white
//!     }
//! "#).unwrap();
//!
//! let path = [Element::new("panel"), Element::new("button").with_class("primary")];
//! let style = sheet.compute_style(&path, None, None);
//! assert_eq!(style.number("border-width", 0.0), 2.0);
//! ```

pub mod color;
pub mod computed;
pub mod error;
pub mod expand;
pub mod lexer;
pub mod parser;
pub mod selector;
pub mod sheet;
pub mod value;

pub use computed::{ComputedStyle, DEFAULT_COLOR};
pub use error::{ParseError, ParseErrorKind};
pub use parser::parse_str;
pub use selector::{Combinator, Compound, Element, Selector};
pub use sheet::{Declaration, RuleSet, StyleSheet};
pub use value::Value;

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) -> StyleSheet { parse_str(src).unwrap() }
    fn err(src: &str) -> ParseError { parse_str(src).unwrap_err() }

    fn only_value(src: &str) -> Value {
        let sheet = ok(src);
        sheet.rules[0].declarations[0].value.clone()
    }

    #[test] fn empty_sheet() { assert!(ok("").rules.is_empty()); }
    #[test] fn empty_block() { assert!(ok("button { }").rules[0].declarations.is_empty()); }
    #[test] fn comments_anywhere() {
        ok("/* head */ button /* sel */ { /* body */ margin: 2 /* tail */ ; }");
    }
    #[test] fn final_semicolon_optional() {
        assert_eq!(ok("a { margin: 1; padding: 2 }").rules[0].declarations.len(), 2);
    }
    #[test] fn stray_semicolons() {
        assert_eq!(ok("a { ;; margin: 1;; }").rules[0].declarations.len(), 1);
    }
    #[test] fn selector_list() {
        assert_eq!(ok("a, b.c, #d { margin: 0 }").rules[0].selectors.len(), 3);
    }
    #[test] fn several_rules() { assert_eq!(ok("a { margin: 0 } b { margin: 1 }").rules.len(), 2); }

    #[test] fn number_value() { assert_eq!(only_value("a { border-width: 2.5 }"), Value::Number(2.5)); }
    #[test] fn negative_number() { assert_eq!(only_value("a { margin: -3 }"), Value::Number(-3.0)); }
    #[test] fn list_value() {
        assert_eq!(
            only_value("a { margin: 1 2 3 }"),
            Value::List(vec![Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)])
        );
    }
    #[test] fn hex_color() {
        assert_eq!(only_value("a { background: #ff0000 }"), Value::Color([1.0, 0.0, 0.0, 1.0]));
    }
    #[test] fn named_and_transparent() {
        assert_eq!(only_value("a { background: white }"), Value::Color([1.0; 4]));
        assert_eq!(only_value("a { background: transparent }"), Value::Color([0.0; 4]));
    }
    #[test] fn rgba_function() {
        assert_eq!(
            only_value("a { background: rgba(0, 255, 0, 0.5) }"),
            Value::Color([0.0, 1.0, 0.0, 0.5])
        );
    }
    #[test] fn hsl_function() {
        assert_eq!(only_value("a { background: hsl(240, 100%, 50%) }"), Value::Color([0.0, 0.0, 1.0, 1.0]));
    }
    #[test] fn ident_value() {
        assert_eq!(only_value("a { display: none }"), Value::Ident("none".into()));
    }
    #[test] fn border_shorthand_with_colors() {
        let v = only_value("a { border: 1 red rgb(0, 0, 255) }");
        assert_eq!(v.items().len(), 3);
        assert_eq!(v.items()[1], Value::Color([1.0, 0.0, 0.0, 1.0]));
    }

    #[test] fn descendant_with_class_attaches() {
        // `.b` after a type name refines that compound.
        let sheet = ok("a .b { margin: 0 }");
        assert_eq!(sheet.rules[0].selectors[0].parts.len(), 1);
    }
    #[test] fn child_then_class_starts_compound() {
        let sheet = ok("a > .b { margin: 0 }");
        let parts = &sheet.rules[0].selectors[0].parts;
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1].0, Combinator::Child);
        assert_eq!(parts[1].1.tag, None);
        assert_eq!(parts[1].1.classes, vec!["b".to_string()]);
    }
    #[test] fn pseudoclass_and_id() {
        let sheet = ok("button#ok:hover { margin: 0 }");
        let compound = &sheet.rules[0].selectors[0].parts[0].1;
        assert_eq!(compound.id.as_deref(), Some("ok"));
        assert_eq!(compound.pseudoclasses, vec!["hover".to_string()]);
    }

    #[test] fn err_bad_hex() { err("a { background: #xyz }"); }
    #[test] fn err_missing_value() { err("a { margin: ; }"); }
    #[test] fn err_unclosed_block() { err("a { margin: 1"); }
    #[test] fn err_dangling_child() { err("a > { margin: 1 }"); }
    #[test] fn err_leading_child() { err("> a { margin: 1 }"); }
    #[test] fn err_unknown_function() { err("a { background: lab(1, 2, 3) }"); }
    #[test] fn err_wrong_arity() { err("a { background: rgb(1, 2) }"); }
    #[test] fn err_missing_selector() { err("{ margin: 1 }"); }

    #[test] fn error_position() {
        let e = err("a {\n  margin: @ }");
        assert_eq!(e.line, 2);
        assert_eq!(e.kind, ParseErrorKind::Lexical);
        assert!(e.to_string().starts_with("lexical error at 2:"));
    }

    #[test] fn error_kinds() {
        assert_eq!(err("a { background: #xyz }").kind, ParseErrorKind::Value);
        assert_eq!(err("a { background: rgb(1, 2) }").kind, ParseErrorKind::Value);
        assert_eq!(err("a > { margin: 1 }").kind, ParseErrorKind::Syntax);
        assert_eq!(err("/* open").kind, ParseErrorKind::Lexical);
    }
}
