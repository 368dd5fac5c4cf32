//! Rule expression parsing
//!
//! Tests and filters are written as `"<name> <param>"`, for example
//! `"min-length 3"` or `"in red, green, blue"`. The name runs up to the
//! first space; everything after that space is the parameter, verbatim.

use std::fmt;

/// A parsed rule expression borrowing from its source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleExpr<'a> {
    /// Rule name, e.g. `min-length`.
    pub name: &'a str,
    /// Parameter text, `None` when the expression is a bare name.
    pub param: Option<&'a str>,
}

impl<'a> RuleExpr<'a> {
    /// Parses an expression.
    ///
    /// Surrounding whitespace is ignored. Inner spacing of the parameter is
    /// preserved, so `"in a b"` carries the parameter `"a b"`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use fieldcheck_validator::foundation::RuleExpr;
    ///
    /// let expr = RuleExpr::parse(" min 18 ");
    /// assert_eq!(expr.name, "min");
    /// assert_eq!(expr.param, Some("18"));
    /// ```
    #[must_use]
    pub fn parse(source: &'a str) -> Self {
        let trimmed = source.trim();
        match trimmed.split_once(' ') {
            Some((name, param)) => Self {
                name,
                param: Some(param),
            },
            None => Self {
                name: trimmed,
                param: None,
            },
        }
    }
}

impl fmt::Display for RuleExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.param {
            Some(param) => write!(f, "{} {}", self.name, param),
            None => f.write_str(self.name),
        }
    }
}
