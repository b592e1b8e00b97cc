//! Arena storage for the typed filter tree.
//!
//! Nodes are appended only after their children exist, so a child's id is
//! always smaller than its parent's. Children are referenced by index; the
//! arena owns every node for the lifetime of the query.

use rowan::TextRange;
use serde::Serialize;

use crate::analyze::FilterType;

macro_rules! define_node_kinds {
    (
        $(
            $group:literal => [$($kind:ident),* $(,)?]
        ),* $(,)?
    ) => {
        /// Every node kind a query tree can contain.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum NodeKind {
            $($($kind,)*)*
        }

        impl NodeKind {
            /// All kinds in declaration order.
            pub const ALL: &'static [NodeKind] = &[$($(NodeKind::$kind,)*)*];

            pub fn name(self) -> &'static str {
                match self {
                    $($(NodeKind::$kind => stringify!($kind),)*)*
                }
            }

            /// Coarse family the kind belongs to, as listed in the grammar docs.
            pub fn group(self) -> &'static str {
                match self {
                    $($(NodeKind::$kind => $group,)*)*
                }
            }
        }
    };
}

define_node_kinds! {
    "structure" => [Cql, Parenthesized, BraceCompound, Target],
    "literal" => [
        Integer, String, True, False, PieceDesignator, AnySquare, AnyPiece, AnyKing,
    ],
    "variable" => [
        Variable, Parameter, Dictionary, DictionaryAccess, DictionaryDeclaration,
        Assign, PlusAssign, MinusAssign, MultiplyAssign, DivideAssign, ModulusAssign,
        Unbind, IsBound, IsUnbound,
    ],
    "function" => [Function, FunctionCall],
    "logical" => [Or, And, Not],
    "comparison" => [LT, LE, GT, GE, EQ, NE, BeforeLT, BeforeLE, AfterGT, AfterGE],
    "set" => [Union, Intersection, Complement, In, AttackArrow, AttackedArrow, Cardinality],
    "arithmetic" => [Plus, Minus, Multiply, Divide, Modulus, UnaryMinus, Abs, Max, Min],
    "position" => [Colon, CurrentPosition, InitialPosition, Parent],
    "keyword" => [
        Check, Mate, Stalemate, Wtm, Btm, Initial, Terminal, Mainline, Variation,
        Ply, MoveNumber, GameNumber, Event, Site, Player, PlayerWhite, PlayerBlack,
        Light, Dark, Power,
    ],
    "control" => [If, Square, SquareAll, Piece, PieceAll],
    "move" => [
        DashII, DashLI, DashIR, DashLR, TakeII, TakeLI, TakeIR, TakeLR, Promotion,
    ],
    "move-filter" => [
        Move, From, FromDefault, To, ToDefault, Capture, Promote, Legal, PseudoLegal,
        Previous, NullMove, Primary, Secondary,
    ],
    "pin" => [Pin, Through, ThroughDefault],
    "path" => [
        Path, ConstituentGroup, RepeatPlus, RepeatStar, RepeatOptional, RepeatRange,
        Focus, FocusCapture, PathMax, Title, Quiet, PiecePath, KeepAllBest,
        FirstMatch, LastPosition, NestBan, Verbose,
    ],
    "find" => [Find, FindAll, FindBackward, Range],
}

impl NodeKind {
    /// Move-operator kinds produced by `--` and `[x]`.
    pub fn is_move(self) -> bool {
        matches!(
            self,
            NodeKind::DashII
                | NodeKind::DashLI
                | NodeKind::DashIR
                | NodeKind::DashLR
                | NodeKind::TakeII
                | NodeKind::TakeLI
                | NodeKind::TakeIR
                | NodeKind::TakeLR
        )
    }
}

/// Index of a node in the query arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Leaf payload carried by literal and naming nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeValue {
    None,
    /// Variable, parameter, function and designator names.
    Name(String),
    Integer(i64),
    /// String literal contents, quotes stripped.
    Text(String),
    /// Inclusive bound pair; `None` on a side means unbounded.
    Range { min: Option<i64>, max: Option<i64> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterNode {
    pub kind: NodeKind,
    pub ty: FilterType,
    pub span: TextRange,
    pub value: NodeValue,
    pub children: Vec<NodeId>,
}

impl FilterNode {
    pub fn new(kind: NodeKind, ty: FilterType, span: TextRange) -> Self {
        Self {
            kind,
            ty,
            span,
            value: NodeValue::None,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<NodeId>) -> Self {
        self.children = children;
        self
    }

    pub fn with_value(mut self, value: NodeValue) -> Self {
        self.value = value;
        self
    }

    /// The name carried by a naming node, if any.
    pub fn name(&self) -> Option<&str> {
        match &self.value {
            NodeValue::Name(name) => Some(name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<FilterNode>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn alloc(&mut self, node: FilterNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Attaches a type resolved after the node was allocated.
    pub(crate) fn set_type(&mut self, id: NodeId, ty: FilterType) {
        self.nodes[id.index()].ty = ty;
    }

    pub fn get(&self, id: NodeId) -> &FilterNode {
        &self.nodes[id.index()]
    }

    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.get(id).kind
    }

    pub fn ty(&self, id: NodeId) -> FilterType {
        self.get(id).ty
    }

    pub fn span(&self, id: NodeId) -> TextRange {
        self.get(id).span
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.get(id).children
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes in the subtree rooted at `id`, including `id`.
    pub fn subtree_size(&self, id: NodeId) -> usize {
        self.preorder(id).len()
    }

    /// Depth-first preorder walk yielding `(depth, id)`; iterative, so deep
    /// trees do not grow the call stack.
    pub fn preorder(&self, root: NodeId) -> Vec<(usize, NodeId)> {
        let mut out = Vec::new();
        let mut stack = vec![(0usize, root)];
        while let Some((depth, id)) = stack.pop() {
            out.push((depth, id));
            for &child in self.children(id).iter().rev() {
                stack.push((depth + 1, child));
            }
        }
        out
    }

    /// Copies the subtree rooted at `id`, returning the root of the copy.
    pub(crate) fn copy_subtree(&mut self, id: NodeId) -> NodeId {
        let node = self.get(id).clone();
        let children = node
            .children
            .iter()
            .map(|&child| self.copy_subtree(child))
            .collect();
        self.alloc(node.with_children(children))
    }
}
