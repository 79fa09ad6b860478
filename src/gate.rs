//! Boolean logic gates.
//!
//! `GateKind::ALL` defines the menu order; the 7 menu slots map 1:1 to
//! the 7 variants.

/// A boolean function of one or two inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GateKind {
    And,
    Or,
    Not,
    Nand,
    Nor,
    Xor,
    Xnor,
}

impl GateKind {
    /// Menu order: first four in column 1, remaining three in column 2.
    pub const ALL: [GateKind; 7] = [
        GateKind::And,
        GateKind::Or,
        GateKind::Not,
        GateKind::Nand,
        GateKind::Nor,
        GateKind::Xor,
        GateKind::Xnor,
    ];

    /// Number of menu entries.
    pub const COUNT: usize = Self::ALL.len();

    /// On-screen name.
    pub fn label(self) -> &'static str {
        match self {
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Not => "NOT",
            GateKind::Nand => "NAND",
            GateKind::Nor => "NOR",
            GateKind::Xor => "XOR",
            GateKind::Xnor => "XNOR",
        }
    }

    /// NOT takes only input A; every other gate is binary.
    pub fn is_unary(self) -> bool {
        matches!(self, GateKind::Not)
    }

    /// Evaluate the gate. Total over all inputs; `b` is ignored for NOT.
    pub fn evaluate(self, a: bool, b: bool) -> bool {
        match self {
            GateKind::And => a && b,
            GateKind::Or => a || b,
            GateKind::Not => !a,
            GateKind::Nand => !(a && b),
            GateKind::Nor => !(a || b),
            GateKind::Xor => a ^ b,
            GateKind::Xnor => !(a ^ b),
        }
    }
}
