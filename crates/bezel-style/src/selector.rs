//! Selectors and the elements they match.

// ── Element ───────────────────────────────────────────────────────────────

/// What a selector sees of one element: its type, id, classes, and active
/// pseudo-classes (`hover`, `active`, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub pseudoclasses: Vec<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), ..Self::default() }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_pseudoclass(mut self, pseudo: impl Into<String>) -> Self {
        self.pseudoclasses.push(pseudo.into());
        self
    }
}

// ── Selector ──────────────────────────────────────────────────────────────

/// One step of a selector chain: `button.primary#ok:hover`.
///
/// `tag == None` is the universal selector `*`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compound {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub pseudoclasses: Vec<String>,
}

impl Compound {
    pub fn matches(&self, el: &Element) -> bool {
        self.tag.as_ref().is_none_or(|t| *t == el.tag)
            && self.id.as_ref().is_none_or(|id| el.id.as_ref() == Some(id))
            && self.classes.iter().all(|c| el.classes.contains(c))
            && self.pseudoclasses.iter().all(|p| el.pseudoclasses.contains(p))
    }
}

/// How a compound relates to the one before it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Combinator {
    /// `a b`: `b` anywhere below `a`.
    Descendant,
    /// `a > b`: `b` directly below `a`.
    Child,
}

/// A chain of compounds, outermost first. The first entry's combinator is
/// ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selector {
    pub parts: Vec<(Combinator, Compound)>,
}

impl Selector {
    /// Tests the selector against `path`, the element's ancestors from the
    /// root down to the element itself (last).
    ///
    /// The last compound must match the element; earlier compounds walk up
    /// the ancestors.
    pub fn matches(&self, path: &[Element]) -> bool {
        let Some(((_, last), rest)) = self.parts.split_last() else { return false };
        let Some((el, ancestors)) = path.split_last() else { return false };
        last.matches(el) && match_ancestors(rest, self.combinator_after(rest.len()), ancestors)
    }

    fn combinator_after(&self, index: usize) -> Combinator {
        self.parts.get(index).map_or(Combinator::Descendant, |(c, _)| *c)
    }
}

/// Matches `parts` against `ancestors` right to left. `link` is the
/// combinator joining the last of `parts` to the element already matched.
fn match_ancestors(parts: &[(Combinator, Compound)], link: Combinator, ancestors: &[Element]) -> bool {
    let Some(((own_link, compound), rest)) = parts.split_last() else { return true };

    match link {
        Combinator::Child => match ancestors.split_last() {
            Some((parent, above)) => compound.matches(parent) && match_ancestors(rest, *own_link, above),
            None => false,
        },
        Combinator::Descendant => (0..ancestors.len()).rev().any(|i| {
            compound.matches(&ancestors[i]) && match_ancestors(rest, *own_link, &ancestors[..i])
        }),
    }
}
