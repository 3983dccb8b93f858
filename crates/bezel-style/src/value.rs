/// A declaration value.
///
/// Colors are straight-alpha RGBA in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f32),
    Color([f32; 4]),
    Ident(String),
    /// Several space-separated values, e.g. `margin: 4 8`.
    List(Vec<Value>),
}

impl Value {
    #[inline]
    pub fn as_number(&self) -> Option<f32> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_color(&self) -> Option<[f32; 4]> {
        match self {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }

    #[inline]
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Value::Ident(s) => Some(s),
            _ => None,
        }
    }

    /// The values of a list, or this value alone.
    #[inline]
    pub fn items(&self) -> &[Value] {
        match self {
            Value::List(items) => items,
            single => std::slice::from_ref(single),
        }
    }

    /// `initial` resets a property to its default.
    #[inline]
    pub fn is_initial(&self) -> bool {
        self.as_ident() == Some("initial")
    }
}
