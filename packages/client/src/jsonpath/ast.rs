//! Syntax tree of a compiled `JSONPath` expression

/// One segment of a selector chain
#[derive(Debug, Clone, PartialEq)]
pub enum JsonSelector {
    /// `$`, always first in a chain
    Root,

    /// `.name` or `['name']`
    Child { name: String },

    /// `[i]`; negative values count from the end of the array
    Index { index: i64 },

    /// `[start:end:step]`; absent bounds take step-dependent defaults
    Slice {
        start: Option<i64>,
        end: Option<i64>,
        step: Option<i64>,
    },

    /// `.*` or `[*]`: every array element or object member value
    Wildcard,

    /// `..`: the current node followed by all of its descendants
    RecursiveDescent,

    /// `[?expr]`: array elements or object member values the predicate accepts
    Filter { expression: FilterExpression },

    /// `[a,b,...]`: concatenated results of each member selector
    Union { selectors: Vec<JsonSelector> },
}

impl JsonSelector {
    /// Whether the selector can only ever produce a single node
    #[inline]
    #[must_use]
    pub fn is_singular(&self) -> bool {
        matches!(
            self,
            JsonSelector::Root | JsonSelector::Child { .. } | JsonSelector::Index { .. }
        )
    }
}

/// Functions applied to the nodes selected by a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathFunction {
    /// `.length()`: element, member or character count
    Length,
}

/// Predicate inside a filter selector
#[derive(Debug, Clone, PartialEq)]
pub enum FilterExpression {
    /// Bare `@`
    Current,

    /// Singular path relative to `@` (`@.a`, `@['a']`, `@[0]`)
    Property { path: Vec<JsonSelector> },

    Literal { value: FilterValue },

    Comparison {
        left: Box<FilterExpression>,
        operator: ComparisonOp,
        right: Box<FilterExpression>,
    },

    Logical {
        left: Box<FilterExpression>,
        operator: LogicalOp,
        right: Box<FilterExpression>,
    },
}

/// Literal operand of a filter comparison
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    String(String),
    /// Any number written with a fraction or exponent
    Number(f64),
    Integer(i64),
    Boolean(bool),
    Null,
}

/// `==`, `!=`, `<`, `<=`, `>`, `>=`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Equal,
    NotEqual,
    Less,
    LessEq,
    Greater,
    GreaterEq,
}

/// `&&` and `||`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}
