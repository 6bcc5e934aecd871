/// Represents a runtime value in the interpreter.
///
/// This enum models the two types that can appear in expressions,
/// assignments, and evaluation results: scalar integers and flat vectors of
/// integers. Vector elements are bare `i64`s, so a vector can never nest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A scalar integer (64 bit).
    Int(i64),
    /// An ordered vector of integers, length >= 2.
    ///
    /// Produced by parsing a run of adjacent number literals, by an
    /// element-wise operator applied to two equal-length vectors, or by a
    /// scan. Single-element runs collapse to [`Int`](Self::Int) at
    /// construction, see [`from_elements`](Self::from_elements).
    Vector(Vec<i64>),
}

impl Value {
    /// Builds a value from a run of parsed literal elements, collapsing a
    /// length-1 run to a scalar.
    ///
    /// ## Example
    /// ```
    /// use aplet::interpreter::value::Value;
    ///
    /// assert_eq!(Value::from_elements(vec![5]), Value::Int(5));
    /// assert_eq!(Value::from_elements(vec![1, 2]), Value::Vector(vec![1, 2]));
    /// ```
    #[must_use]
    pub fn from_elements(elements: Vec<i64>) -> Self {
        if let [element] = elements[..] {
            Self::Int(element)
        } else {
            Self::Vector(elements)
        }
    }

    /// Returns `true` if the value is [`Int`](Self::Int).
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(..))
    }

    /// Returns `true` if the value is [`Vector`](Self::Vector).
    #[must_use]
    pub const fn is_vector(&self) -> bool {
        matches!(self, Self::Vector(..))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<Vec<i64>> for Value {
    fn from(v: Vec<i64>) -> Self {
        Self::from_elements(v)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Vector(elements) => {
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }

                    write!(f, "{element}")?;
                }

                Ok(())
            },
        }
    }
}
