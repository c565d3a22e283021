//! Lexical tokens of a `JSONPath` expression

use std::fmt;

use super::ast::ComparisonOp;

/// One lexical unit produced by the expression tokenizer
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// `$`
    Root,
    /// `@`
    At,
    /// `.`
    Dot,
    /// `..`
    DoubleDot,
    LeftBracket,
    RightBracket,
    LeftParen,
    RightParen,
    Comma,
    Colon,
    /// `?` opening a filter
    Question,
    /// `*`
    Star,

    /// Quoted string, escapes already resolved
    String(String),
    Integer(i64),
    Number(f64),
    True,
    False,
    Null,

    Equal,
    NotEqual,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    /// `&&` or `&`
    LogicalAnd,
    /// `||` or `|`
    LogicalOr,

    /// Bare member name or function name
    Identifier(String),

    /// Sentinel appended after the last real token
    EOF,
}

impl Token {
    /// Token for a single structural character
    pub(crate) fn punctuation(c: char) -> Option<Self> {
        Some(match c {
            '$' => Token::Root,
            '@' => Token::At,
            '[' => Token::LeftBracket,
            ']' => Token::RightBracket,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            ',' => Token::Comma,
            ':' => Token::Colon,
            '?' => Token::Question,
            '*' => Token::Star,
            _ => return None,
        })
    }

    /// Literal keyword for a bare word, or an identifier
    pub(crate) fn word(word: String) -> Self {
        match word.as_str() {
            "true" => Token::True,
            "false" => Token::False,
            "null" => Token::Null,
            _ => Token::Identifier(word),
        }
    }

    /// The comparison this token denotes, if any
    #[must_use]
    pub fn comparison(&self) -> Option<ComparisonOp> {
        Some(match self {
            Token::Equal => ComparisonOp::Equal,
            Token::NotEqual => ComparisonOp::NotEqual,
            Token::Less => ComparisonOp::Less,
            Token::LessEq => ComparisonOp::LessEq,
            Token::Greater => ComparisonOp::Greater,
            Token::GreaterEq => ComparisonOp::GreaterEq,
            _ => return None,
        })
    }

    /// Member name spelled by this token in dot notation
    ///
    /// Keywords count as names so that `$.true` addresses the key `"true"`.
    #[must_use]
    pub fn member_name(&self) -> Option<&str> {
        match self {
            Token::Identifier(name) => Some(name),
            Token::True => Some("true"),
            Token::False => Some("false"),
            Token::Null => Some("null"),
            _ => None,
        }
    }

    /// Same variant, ignoring any carried value
    #[inline]
    #[must_use]
    pub fn same_kind(&self, other: &Token) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Token::Root => "'$'",
            Token::At => "'@'",
            Token::Dot => "'.'",
            Token::DoubleDot => "'..'",
            Token::LeftBracket => "'['",
            Token::RightBracket => "']'",
            Token::LeftParen => "'('",
            Token::RightParen => "')'",
            Token::Comma => "','",
            Token::Colon => "':'",
            Token::Question => "'?'",
            Token::Star => "'*'",
            Token::True => "'true'",
            Token::False => "'false'",
            Token::Null => "'null'",
            Token::Equal => "'=='",
            Token::NotEqual => "'!='",
            Token::Less => "'<'",
            Token::LessEq => "'<='",
            Token::Greater => "'>'",
            Token::GreaterEq => "'>='",
            Token::LogicalAnd => "'&&'",
            Token::LogicalOr => "'||'",
            Token::EOF => "end of input",
            Token::String(value) => return write!(f, "string {value:?}"),
            Token::Integer(value) => return write!(f, "integer {value}"),
            Token::Number(value) => return write!(f, "number {value}"),
            Token::Identifier(name) => return write!(f, "name '{name}'"),
        };
        f.write_str(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_and_punctuation() {
        assert_eq!(Token::word("null".into()), Token::Null);
        assert_eq!(Token::word("price".into()), Token::Identifier("price".into()));
        assert_eq!(Token::punctuation('?'), Some(Token::Question));
        assert_eq!(Token::punctuation('.'), None);
        assert_eq!(Token::True.member_name(), Some("true"));
        assert_eq!(Token::Star.member_name(), None);
    }

    #[test]
    fn test_same_kind_ignores_values() {
        assert!(Token::String("a".into()).same_kind(&Token::String("b".into())));
        assert!(!Token::Integer(1).same_kind(&Token::Number(1.0)));
        assert_eq!(Token::LessEq.comparison(), Some(ComparisonOp::LessEq));
        assert_eq!(Token::Comma.comparison(), None);
    }

    #[test]
    fn test_display_reads_like_source() {
        assert_eq!(Token::RightBracket.to_string(), "']'");
        assert_eq!(Token::String("a b".into()).to_string(), "string \"a b\"");
        assert_eq!(Token::EOF.to_string(), "end of input");
    }
}
