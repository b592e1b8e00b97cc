//! The filter type lattice.
//!
//! Operator legality is a per-operator table over concrete types, not a
//! subtyping relation. `Any` stands for an unresolved function parameter and
//! is accepted wherever some concrete substitution would be.

use std::fmt;

use serde::Serialize;

use crate::query::NodeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FilterType {
    Set,
    Numeric,
    String,
    Logical,
    Position,
    Dictionary,
    Any,
}

impl FilterType {
    /// The five types a value filter can have, in matrix order.
    pub const CONCRETE: [FilterType; 5] = [
        FilterType::Set,
        FilterType::Logical,
        FilterType::Numeric,
        FilterType::String,
        FilterType::Position,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FilterType::Set => "Set",
            FilterType::Numeric => "Numeric",
            FilterType::String => "String",
            FilterType::Logical => "Logical",
            FilterType::Position => "Position",
            FilterType::Dictionary => "Dictionary",
            FilterType::Any => "Any",
        }
    }

    /// A set counts its squares wherever a number is expected.
    pub fn is_numeric_like(self) -> bool {
        matches!(self, FilterType::Numeric | FilterType::Set)
    }

    fn candidates(self) -> &'static [FilterType] {
        match self {
            FilterType::Any => &Self::CONCRETE,
            FilterType::Set => &[FilterType::Set],
            FilterType::Numeric => &[FilterType::Numeric],
            FilterType::String => &[FilterType::String],
            FilterType::Logical => &[FilterType::Logical],
            FilterType::Position => &[FilterType::Position],
            FilterType::Dictionary => &[FilterType::Dictionary],
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Binary operators checked against the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    BeforeLt,
    BeforeLe,
    AfterGt,
    AfterGe,
    And,
    Or,
    In,
    Union,
    Intersection,
    AttackArrow,
    AttackedArrow,
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulus,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 22] = [
        BinaryOp::Lt,
        BinaryOp::Le,
        BinaryOp::Gt,
        BinaryOp::Ge,
        BinaryOp::Eq,
        BinaryOp::Ne,
        BinaryOp::BeforeLt,
        BinaryOp::BeforeLe,
        BinaryOp::AfterGt,
        BinaryOp::AfterGe,
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::In,
        BinaryOp::Union,
        BinaryOp::Intersection,
        BinaryOp::AttackArrow,
        BinaryOp::AttackedArrow,
        BinaryOp::Plus,
        BinaryOp::Minus,
        BinaryOp::Multiply,
        BinaryOp::Divide,
        BinaryOp::Modulus,
    ];

    pub fn node_kind(self) -> NodeKind {
        match self {
            BinaryOp::Lt => NodeKind::LT,
            BinaryOp::Le => NodeKind::LE,
            BinaryOp::Gt => NodeKind::GT,
            BinaryOp::Ge => NodeKind::GE,
            BinaryOp::Eq => NodeKind::EQ,
            BinaryOp::Ne => NodeKind::NE,
            BinaryOp::BeforeLt => NodeKind::BeforeLT,
            BinaryOp::BeforeLe => NodeKind::BeforeLE,
            BinaryOp::AfterGt => NodeKind::AfterGT,
            BinaryOp::AfterGe => NodeKind::AfterGE,
            BinaryOp::And => NodeKind::And,
            BinaryOp::Or => NodeKind::Or,
            BinaryOp::In => NodeKind::In,
            BinaryOp::Union => NodeKind::Union,
            BinaryOp::Intersection => NodeKind::Intersection,
            BinaryOp::AttackArrow => NodeKind::AttackArrow,
            BinaryOp::AttackedArrow => NodeKind::AttackedArrow,
            BinaryOp::Plus => NodeKind::Plus,
            BinaryOp::Minus => NodeKind::Minus,
            BinaryOp::Multiply => NodeKind::Multiply,
            BinaryOp::Divide => NodeKind::Divide,
            BinaryOp::Modulus => NodeKind::Modulus,
        }
    }

    /// ASCII spelling, used in diagnostics.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::BeforeLt => "[<]",
            BinaryOp::BeforeLe => "[<=]",
            BinaryOp::AfterGt => "[>]",
            BinaryOp::AfterGe => "[>=]",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::In => "in",
            BinaryOp::Union => "|",
            BinaryOp::Intersection => "&",
            BinaryOp::AttackArrow => "-->",
            BinaryOp::AttackedArrow => "<--",
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulus => "%",
        }
    }

    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Lt
                | BinaryOp::Le
                | BinaryOp::Gt
                | BinaryOp::Ge
                | BinaryOp::Eq
                | BinaryOp::Ne
                | BinaryOp::BeforeLt
                | BinaryOp::BeforeLe
                | BinaryOp::AfterGt
                | BinaryOp::AfterGe
        )
    }

    fn check_concrete(self, left: FilterType, right: FilterType) -> Option<FilterType> {
        use FilterType::*;
        if left == Dictionary || right == Dictionary {
            return None;
        }
        match self {
            op if op.is_comparison() => match (left, right) {
                (Numeric, Numeric)
                | (String, String)
                | (Position, Position)
                | (Set, Numeric)
                | (Numeric, Set)
                | (Set, Set) => Some(Logical),
                _ => None,
            },
            BinaryOp::And | BinaryOp::Or => Some(Logical),
            BinaryOp::In => match (left, right) {
                (Set, Set) | (String, String) => Some(Logical),
                _ => None,
            },
            BinaryOp::Union
            | BinaryOp::Intersection
            | BinaryOp::AttackArrow
            | BinaryOp::AttackedArrow => (left == Set && right == Set).then_some(Set),
            BinaryOp::Plus if left == String && right == String => Some(String),
            _ => (left.is_numeric_like() && right.is_numeric_like()).then_some(Numeric),
        }
    }

    /// Checks an operand pair and returns the result type.
    pub fn check(self, left: FilterType, right: FilterType) -> Result<FilterType, TypeMismatch> {
        let mut result: Option<FilterType> = None;
        let mut mixed = false;
        for &l in left.candidates() {
            for &r in right.candidates() {
                if let Some(ty) = self.check_concrete(l, r) {
                    match result {
                        None => result = Some(ty),
                        Some(prev) if prev != ty => mixed = true,
                        Some(_) => {}
                    }
                }
            }
        }
        match result {
            Some(_) if mixed => Ok(FilterType::Any),
            Some(ty) => Ok(ty),
            None => Err(TypeMismatch {
                op: self.symbol(),
                left: Some(left),
                right,
            }),
        }
    }
}

/// Prefix operators and single-operand keyword filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Not,
    Negate,
    Complement,
    Cardinality,
    Abs,
    Light,
    Dark,
    Power,
}

impl UnaryOp {
    pub fn node_kind(self) -> NodeKind {
        match self {
            UnaryOp::Not => NodeKind::Not,
            UnaryOp::Negate => NodeKind::UnaryMinus,
            UnaryOp::Complement => NodeKind::Complement,
            UnaryOp::Cardinality => NodeKind::Cardinality,
            UnaryOp::Abs => NodeKind::Abs,
            UnaryOp::Light => NodeKind::Light,
            UnaryOp::Dark => NodeKind::Dark,
            UnaryOp::Power => NodeKind::Power,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "not",
            UnaryOp::Negate => "-",
            UnaryOp::Complement => "~",
            UnaryOp::Cardinality => "#",
            UnaryOp::Abs => "abs",
            UnaryOp::Light => "light",
            UnaryOp::Dark => "dark",
            UnaryOp::Power => "power",
        }
    }

    fn check_concrete(self, operand: FilterType) -> Option<FilterType> {
        use FilterType::*;
        match self {
            _ if operand == Dictionary => None,
            UnaryOp::Not => Some(Logical),
            UnaryOp::Negate | UnaryOp::Abs => operand.is_numeric_like().then_some(Numeric),
            UnaryOp::Complement | UnaryOp::Light | UnaryOp::Dark => {
                (operand == Set).then_some(Set)
            }
            UnaryOp::Cardinality | UnaryOp::Power => (operand == Set).then_some(Numeric),
        }
    }

    pub fn check(self, operand: FilterType) -> Result<FilterType, TypeMismatch> {
        // Every unary result is fixed by the operator, so one accepted
        // substitution is enough.
        operand
            .candidates()
            .iter()
            .find_map(|&ty| self.check_concrete(ty))
            .ok_or(TypeMismatch {
                op: self.symbol(),
                left: None,
                right: operand,
            })
    }
}

/// Whether a filter of type `actual` can stand where `expected` is required.
pub fn accepts(expected: FilterType, actual: FilterType) -> bool {
    actual == expected || actual == FilterType::Any || expected == FilterType::Any
}

/// A rejected operand combination. `left` is `None` for prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMismatch {
    pub op: &'static str,
    pub left: Option<FilterType>,
    pub right: FilterType,
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.left {
            Some(left) => write!(f, "{left} {} {}", self.op, self.right),
            None => write!(f, "{} {}", self.op, self.right),
        }
    }
}
