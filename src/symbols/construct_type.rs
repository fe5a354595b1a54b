use std::fmt;

use bitflags::bitflags;
use serde_json::Value;

use crate::symbols::error::{SymbolError, type_mismatch, unknown_construct_type};

bitflags! {
    /// Role of a construct within the simulated architecture.
    ///
    /// Basic members name a single role; the remaining members are unions
    /// and always equal the OR of their constituents.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ConstructType: u32 {
        /// Empty construct type.
        const NULL_CONSTRUCT = 0;

        /// Feature node.
        const FEATURE = 1 << 0;
        /// Chunk node.
        const CHUNK = 1 << 1;
        /// Activation input to a subsystem.
        const FLOW_IN = 1 << 2;
        /// Flow from top to bottom level.
        const FLOW_TB = 1 << 3;
        /// Flow from bottom to top level.
        const FLOW_BT = 1 << 4;
        /// Flow within the top level.
        const FLOW_TT = 1 << 5;
        /// Flow within the bottom level.
        const FLOW_BB = 1 << 6;
        /// Subsystem output.
        const TERMINUS = 1 << 7;
        /// Temporary store of activations.
        const BUFFER = 1 << 8;
        const SUBSYSTEM = 1 << 9;
        const AGENT = 1 << 10;

        /// A chunk or (micro)feature.
        const NODE = Self::FEATURE.bits() | Self::CHUNK.bits();
        /// Flow originating in the bottom level.
        const FLOW_BX = Self::FLOW_BT.bits() | Self::FLOW_BB.bits();
        /// Flow originating in the top level.
        const FLOW_TX = Self::FLOW_TB.bits() | Self::FLOW_TT.bits();
        /// Flow ending in the bottom level.
        const FLOW_XB = Self::FLOW_TB.bits() | Self::FLOW_BB.bits();
        /// Flow ending in the top level.
        const FLOW_XT = Self::FLOW_BT.bits() | Self::FLOW_TT.bits();
        /// Horizontal (intra-level) flow.
        const FLOW_H = Self::FLOW_BB.bits() | Self::FLOW_TT.bits();
        /// Vertical (inter-level) flow.
        const FLOW_V = Self::FLOW_TB.bits() | Self::FLOW_BT.bits();
        /// Links among feature and/or chunk nodes.
        const FLOW = Self::FLOW_TB.bits()
            | Self::FLOW_BT.bits()
            | Self::FLOW_TT.bits()
            | Self::FLOW_BB.bits()
            | Self::FLOW_IN.bits();
        const BASIC_CONSTRUCT = Self::NODE.bits()
            | Self::FLOW.bits()
            | Self::TERMINUS.bits()
            | Self::BUFFER.bits();
        const CONTAINER_CONSTRUCT = Self::SUBSYSTEM.bits() | Self::AGENT.bits();
    }
}

// Declaration order matters: the first exact match wins when naming a value.
const NAMED: &[(&str, ConstructType)] = &[
    ("null_construct", ConstructType::NULL_CONSTRUCT),
    ("feature", ConstructType::FEATURE),
    ("chunk", ConstructType::CHUNK),
    ("flow_in", ConstructType::FLOW_IN),
    ("flow_tb", ConstructType::FLOW_TB),
    ("flow_bt", ConstructType::FLOW_BT),
    ("flow_tt", ConstructType::FLOW_TT),
    ("flow_bb", ConstructType::FLOW_BB),
    ("terminus", ConstructType::TERMINUS),
    ("buffer", ConstructType::BUFFER),
    ("subsystem", ConstructType::SUBSYSTEM),
    ("agent", ConstructType::AGENT),
    ("node", ConstructType::NODE),
    ("flow_bx", ConstructType::FLOW_BX),
    ("flow_tx", ConstructType::FLOW_TX),
    ("flow_xb", ConstructType::FLOW_XB),
    ("flow_xt", ConstructType::FLOW_XT),
    ("flow_h", ConstructType::FLOW_H),
    ("flow_v", ConstructType::FLOW_V),
    ("flow", ConstructType::FLOW),
    ("basic_construct", ConstructType::BASIC_CONSTRUCT),
    ("container_construct", ConstructType::CONTAINER_CONSTRUCT),
];

impl Default for ConstructType {
    fn default() -> Self {
        ConstructType::NULL_CONSTRUCT
    }
}

impl ConstructType {
    /// Look up a member by its declared snake_case name.
    pub fn from_declared_name(name: &str) -> Result<Self, SymbolError> {
        NAMED
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, ctype)| *ctype)
            .ok_or_else(|| unknown_construct_type(format!("unknown construct type name '{name}'")))
    }

    /// Build a value from raw bits; bits outside the taxonomy are rejected.
    pub fn from_value(bits: u32) -> Result<Self, SymbolError> {
        Self::from_bits(bits).ok_or_else(|| {
            unknown_construct_type(format!("{bits} is not a valid construct type value"))
        })
    }

    /// Declared name of this exact value, if it has one.
    pub fn name(self) -> Option<&'static str> {
        NAMED
            .iter()
            .find(|(_, ctype)| *ctype == self)
            .map(|(name, _)| *name)
    }

    /// Membership of `self` in `mask`.
    ///
    /// Any shared bit counts; the null type is only a member of the null mask.
    pub fn is_in(self, mask: ConstructType) -> bool {
        if self.is_empty() {
            mask.is_empty()
        } else {
            self.intersects(mask)
        }
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        NAMED.iter().map(|(name, _)| *name)
    }
}

impl fmt::Display for ConstructType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "ConstructType({})", self.bits()),
        }
    }
}

/// Accepted spellings of a construct type argument.
pub trait IntoConstructType {
    fn into_construct_type(self) -> Result<ConstructType, SymbolError>;
}

impl IntoConstructType for ConstructType {
    fn into_construct_type(self) -> Result<ConstructType, SymbolError> {
        Ok(self)
    }
}

impl IntoConstructType for &str {
    fn into_construct_type(self) -> Result<ConstructType, SymbolError> {
        ConstructType::from_declared_name(self)
    }
}

impl IntoConstructType for String {
    fn into_construct_type(self) -> Result<ConstructType, SymbolError> {
        ConstructType::from_declared_name(&self)
    }
}

impl IntoConstructType for u32 {
    fn into_construct_type(self) -> Result<ConstructType, SymbolError> {
        ConstructType::from_value(self)
    }
}

impl IntoConstructType for &Value {
    fn into_construct_type(self) -> Result<ConstructType, SymbolError> {
        match self {
            Value::String(name) => ConstructType::from_declared_name(name),
            Value::Number(number) => {
                let bits = number
                    .as_u64()
                    .and_then(|bits| u32::try_from(bits).ok())
                    .ok_or_else(|| {
                        unknown_construct_type(format!(
                            "{number} is not a valid construct type value"
                        ))
                    })?;
                ConstructType::from_value(bits)
            }
            other => Err(type_mismatch(format!(
                "unexpected type {} for arg ctype",
                json_type_name(other)
            ))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
