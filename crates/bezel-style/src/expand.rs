use std::collections::BTreeMap;

use crate::sheet::Declaration;
use crate::value::Value;

const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

/// Applies `decls` in order, expanding shorthands into longhand properties.
/// Properties left at `initial` are dropped.
pub fn expand<'a>(decls: impl IntoIterator<Item = &'a Declaration>) -> BTreeMap<String, Value> {
    let mut out = BTreeMap::new();
    for decl in decls {
        expand_one(&decl.property, &decl.value, &mut out);
    }
    out.retain(|_, v| !v.is_initial());
    out
}

fn expand_one(property: &str, value: &Value, out: &mut BTreeMap<String, Value>) {
    match property {
        "margin" | "padding" => {
            for (side, v) in SIDES.iter().zip(trbl(value.items())) {
                out.insert(format!("{property}-{side}"), v.clone());
            }
        }
        "border" => {
            let items = value.items();
            if let Some((width, colors)) = items.split_first() {
                out.insert("border-width".into(), width.clone());
                set_border_colors(colors, out);
            }
        }
        "border-color" => set_border_colors(value.items(), out),
        "background" => {
            out.insert("background-color".into(), value.clone());
        }
        "width" | "height" => {
            out.insert(format!("min-{property}"), value.clone());
            out.insert(format!("max-{property}"), value.clone());
        }
        _ => {
            out.insert(property.to_string(), value.clone());
        }
    }
}

fn set_border_colors(colors: &[Value], out: &mut BTreeMap<String, Value>) {
    for (side, v) in SIDES.iter().zip(trbl(colors)) {
        out.insert(format!("border-{side}-color"), v.clone());
    }
}

/// CSS box shorthand: 1 value sets all sides, 2 set vertical/horizontal,
/// 3 set top/horizontal/bottom, 4 set each side. Empty input sets nothing.
fn trbl(items: &[Value]) -> Vec<&Value> {
    match items {
        [] => Vec::new(),
        [a] => vec![a, a, a, a],
        [a, b] => vec![a, b, a, b],
        [a, b, c] => vec![a, b, c, b],
        [a, b, c, d, ..] => vec![a, b, c, d],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(property: &str, value: Value) -> Declaration {
        Declaration { property: property.into(), value }
    }

    fn nums(ns: &[f32]) -> Value {
        Value::List(ns.iter().copied().map(Value::Number).collect())
    }

    fn side(map: &BTreeMap<String, Value>, key: &str) -> f32 {
        map.get(key).and_then(Value::as_number).unwrap()
    }

    #[test]
    fn margin_single_value_sets_all_sides() {
        let map = expand(&[decl("margin", Value::Number(3.0))]);
        for s in SIDES {
            assert_eq!(side(&map, &format!("margin-{s}")), 3.0);
        }
        assert!(!map.contains_key("margin"));
    }

    #[test]
    fn padding_two_three_four_values() {
        let map = expand(&[decl("padding", nums(&[1.0, 2.0]))]);
        assert_eq!(
            [side(&map, "padding-top"), side(&map, "padding-right"), side(&map, "padding-bottom"), side(&map, "padding-left")],
            [1.0, 2.0, 1.0, 2.0]
        );

        let map = expand(&[decl("padding", nums(&[1.0, 2.0, 3.0]))]);
        assert_eq!(side(&map, "padding-bottom"), 3.0);
        assert_eq!(side(&map, "padding-left"), 2.0);

        let map = expand(&[decl("padding", nums(&[1.0, 2.0, 3.0, 4.0]))]);
        assert_eq!(side(&map, "padding-left"), 4.0);
    }

    #[test]
    fn border_width_and_colors() {
        let red = Value::Color([1.0, 0.0, 0.0, 1.0]);
        let blue = Value::Color([0.0, 0.0, 1.0, 1.0]);
        let map = expand(&[decl(
            "border",
            Value::List(vec![Value::Number(2.0), red.clone(), blue.clone()]),
        )]);
        assert_eq!(side(&map, "border-width"), 2.0);
        assert_eq!(map["border-top-color"], red);
        assert_eq!(map["border-right-color"], blue);
        assert_eq!(map["border-bottom-color"], red);
        assert_eq!(map["border-left-color"], blue);
    }

    #[test]
    fn border_without_colors_keeps_existing_colors() {
        let red = Value::Color([1.0, 0.0, 0.0, 1.0]);
        let map = expand(&[decl("border-color", red.clone()), decl("border", Value::Number(1.0))]);
        assert_eq!(map["border-left-color"], red);
        assert_eq!(side(&map, "border-width"), 1.0);
    }

    #[test]
    fn background_and_size_aliases() {
        let white = Value::Color([1.0; 4]);
        let map = expand(&[decl("background", white.clone()), decl("width", Value::Number(40.0))]);
        assert_eq!(map["background-color"], white);
        assert_eq!(side(&map, "min-width"), 40.0);
        assert_eq!(side(&map, "max-width"), 40.0);
    }

    #[test]
    fn initial_removes_the_property() {
        let map = expand(&[
            decl("border-width", Value::Number(2.0)),
            decl("border-width", Value::Ident("initial".into())),
        ]);
        assert!(!map.contains_key("border-width"));
    }

    #[test]
    fn unknown_properties_pass_through() {
        let map = expand(&[decl("display", Value::Ident("none".into()))]);
        assert_eq!(map["display"].as_ident(), Some("none"));
    }
}
