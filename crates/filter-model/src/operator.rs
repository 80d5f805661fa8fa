//! The closed set of filter operators and their textual symbols.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Operator {
    // Logical
    And,
    Or,

    // Comparison
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,

    // Membership
    In,
    Nin,
}

impl Operator {
    pub const ALL: [Operator; 10] = [
        Operator::And,
        Operator::Or,
        Operator::Eq,
        Operator::Ne,
        Operator::Lt,
        Operator::Lte,
        Operator::Gt,
        Operator::Gte,
        Operator::In,
        Operator::Nin,
    ];

    /// The infix symbol emitted between the two operands, surrounding
    /// spaces included. Shared by every dialect.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::And => " AND ",
            Operator::Or => " OR ",
            Operator::Eq => " = ",
            Operator::Ne => " != ",
            Operator::Lt => " < ",
            Operator::Lte => " <= ",
            Operator::Gt => " > ",
            Operator::Gte => " >= ",
            Operator::In => " IN ",
            Operator::Nin => " NOT IN ",
        }
    }

    /// Upper-case name as it appears in serialized trees, e.g. `NIN`.
    pub fn name(&self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Eq => "EQ",
            Operator::Ne => "NE",
            Operator::Lt => "LT",
            Operator::Lte => "LTE",
            Operator::Gt => "GT",
            Operator::Gte => "GTE",
            Operator::In => "IN",
            Operator::Nin => "NIN",
        }
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, Operator::And | Operator::Or)
    }

    pub fn is_comparison(&self) -> bool {
        !self.is_logical()
    }

    /// `IN` and `NIN` take a list on the right-hand side.
    pub fn expects_list(&self) -> bool {
        matches!(self, Operator::In | Operator::Nin)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operator {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Operator::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| ModelError::UnsupportedOperator(token.to_string()))
    }
}

impl TryFrom<String> for Operator {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Operator> for &'static str {
    fn from(op: Operator) -> Self {
        op.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_table() {
        let expected = [
            (Operator::And, " AND "),
            (Operator::Or, " OR "),
            (Operator::Eq, " = "),
            (Operator::Ne, " != "),
            (Operator::Lt, " < "),
            (Operator::Lte, " <= "),
            (Operator::Gt, " > "),
            (Operator::Gte, " >= "),
            (Operator::In, " IN "),
            (Operator::Nin, " NOT IN "),
        ];
        for (op, symbol) in expected {
            assert_eq!(op.symbol(), symbol, "symbol for {op}");
        }
    }

    #[test]
    fn test_parse_names_case_insensitive() {
        for op in Operator::ALL {
            assert_eq!(op.name().parse::<Operator>().unwrap(), op);
            assert_eq!(op.name().to_lowercase().parse::<Operator>().unwrap(), op);
        }
    }

    #[test]
    fn test_parse_unknown_operator() {
        let err = "LIKE".parse::<Operator>().unwrap_err();
        assert_eq!(err, ModelError::UnsupportedOperator("LIKE".into()));
        assert_eq!(err.to_string(), "Unsupported operator: LIKE");
    }

    #[test]
    fn test_classification() {
        let logical: Vec<_> = Operator::ALL.into_iter().filter(|op| op.is_logical()).collect();
        assert_eq!(logical, vec![Operator::And, Operator::Or]);
        assert!(Operator::Nin.is_comparison());
        assert!(Operator::In.expects_list());
        assert!(!Operator::Eq.expects_list());
    }

    #[test]
    fn test_serde_uses_upper_case_names() {
        assert_eq!(serde_json::to_string(&Operator::Nin).unwrap(), r#""NIN""#);
        let op: Operator = serde_json::from_str(r#""gte""#).unwrap();
        assert_eq!(op, Operator::Gte);

        let err = serde_json::from_str::<Operator>(r#""BETWEEN""#).unwrap_err();
        assert!(err.to_string().contains("Unsupported operator: BETWEEN"));
    }
}
