use crate::computed::ComputedStyle;
use crate::error::ParseError;
use crate::expand::expand;
use crate::parser::parse_str;
use crate::selector::{Element, Selector};
use crate::value::Value;

/// `property: value` inside a rule set.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: Value,
}

/// A selector list and the declarations it applies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    pub selectors: Vec<Selector>,
    pub declarations: Vec<Declaration>,
}

impl RuleSet {
    /// True if any selector in the list matches the last element of `path`.
    pub fn matches(&self, path: &[Element]) -> bool {
        self.selectors.iter().any(|s| s.matches(path))
    }
}

/// An ordered list of rule sets.
///
/// Rules apply top-down and later declarations override earlier ones. There
/// is no specificity and no `!important`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    pub rules: Vec<RuleSet>,
}

impl StyleSheet {
    pub fn parse(src: &str) -> Result<Self, ParseError> {
        parse_str(src)
    }

    /// Parses the body of an inline `style` attribute, e.g. `"border: 2 red"`.
    pub fn inline(declarations: &str) -> Result<Self, ParseError> {
        parse_str(&format!("*{{{declarations};}}"))
    }

    /// Appends the rules of `other` after this sheet's rules.
    pub fn extend(&mut self, other: StyleSheet) {
        self.rules.extend(other.rules);
    }

    /// Every declaration whose rule matches `path`, in cascade order.
    pub fn matching<'a>(&'a self, path: &'a [Element]) -> impl Iterator<Item = &'a Declaration> + 'a {
        self.rules
            .iter()
            .filter(move |rule| rule.matches(path))
            .flat_map(|rule| rule.declarations.iter())
    }

    /// Computes the style of the last element of `path`.
    ///
    /// `initial` supplies the baseline; this sheet's matches and then
    /// `overrides` (typically an inline style) are layered on top.
    pub fn compute_style(
        &self,
        path: &[Element],
        initial: Option<&StyleSheet>,
        overrides: Option<&StyleSheet>,
    ) -> ComputedStyle {
        let mut style = ComputedStyle::from_map(
            initial.map(|sheet| expand(sheet.matching(path))).unwrap_or_default(),
        );
        let layered = self
            .matching(path)
            .chain(overrides.into_iter().flat_map(|sheet| sheet.matching(path)));
        style.update(expand(layered));
        style
    }
}
