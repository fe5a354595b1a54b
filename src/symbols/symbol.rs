use std::{cmp::Ordering, fmt, str::FromStr, sync::Arc};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::symbols::{
    construct_type::{ConstructType, IntoConstructType},
    error::{SymbolError, type_mismatch},
    text,
};

/// One component of a construct identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CidPart {
    Int(i64),
    Str(String),
}

impl CidPart {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CidPart::Str(value) => Some(value),
            CidPart::Int(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            CidPart::Int(value) => Some(*value),
            CidPart::Str(_) => None,
        }
    }
}

impl fmt::Display for CidPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CidPart::Int(value) => write!(f, "{value}"),
            CidPart::Str(value) => {
                f.write_str("'")?;
                for ch in value.chars() {
                    match ch {
                        '\\' => f.write_str("\\\\")?,
                        '\'' => f.write_str("\\'")?,
                        other => write!(f, "{other}")?,
                    }
                }
                f.write_str("'")
            }
        }
    }
}

impl From<&str> for CidPart {
    fn from(value: &str) -> Self {
        CidPart::Str(value.to_string())
    }
}

impl From<String> for CidPart {
    fn from(value: String) -> Self {
        CidPart::Str(value)
    }
}

impl From<&String> for CidPart {
    fn from(value: &String) -> Self {
        CidPart::Str(value.clone())
    }
}

impl From<i64> for CidPart {
    fn from(value: i64) -> Self {
        CidPart::Int(value)
    }
}

impl From<i32> for CidPart {
    fn from(value: i32) -> Self {
        CidPart::Int(i64::from(value))
    }
}

impl From<u32> for CidPart {
    fn from(value: u32) -> Self {
        CidPart::Int(i64::from(value))
    }
}

impl PartialEq<str> for CidPart {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for CidPart {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

/// Immutable name of a construct: a construct type plus an identifier tuple.
///
/// Symbols compare and hash structurally. They are ordered only against
/// symbols of the same construct type.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    ctype: ConstructType,
    cid: Arc<[CidPart]>,
}

impl Symbol {
    pub fn new<C, I, P>(ctype: C, cid: I) -> Result<Self, SymbolError>
    where
        C: IntoConstructType,
        I: IntoIterator<Item = P>,
        P: Into<CidPart>,
    {
        let ctype = ctype.into_construct_type()?;
        let cid: Arc<[CidPart]> = cid.into_iter().map(Into::into).collect();

        if ctype == ConstructType::FEATURE && cid.len() < 2 {
            return Err(type_mismatch(format!(
                "feature symbols must specify at least a dim and a val, but only {} objects passed as cid",
                cid.len()
            )));
        }

        Ok(Self { ctype, cid })
    }

    /// Factory path for callers that fix the ctype and arity themselves.
    fn typed(ctype: ConstructType, cid: Vec<CidPart>) -> Self {
        Self {
            ctype,
            cid: cid.into(),
        }
    }

    pub fn ctype(&self) -> ConstructType {
        self.ctype
    }

    pub fn cid(&self) -> &[CidPart] {
        &self.cid
    }

    pub fn is_feature(&self) -> bool {
        self.ctype == ConstructType::FEATURE
    }

    /// Dimension of a feature.
    pub fn dim(&self) -> Result<&CidPart, SymbolError> {
        self.feature_component(0, "dim")
    }

    /// Value of a feature.
    pub fn val(&self) -> Result<&CidPart, SymbolError> {
        self.feature_component(1, "val")
    }

    fn feature_component(&self, index: usize, attribute: &str) -> Result<&CidPart, SymbolError> {
        if !self.is_feature() {
            return Err(type_mismatch(format!(
                "attribute '{attribute}' not defined for {}",
                self.ctype
            )));
        }
        // Feature arity is checked on construction.
        Ok(&self.cid[index])
    }

    /// Compare two symbols of the same construct type.
    pub fn try_cmp(&self, other: &Symbol) -> Result<Ordering, SymbolError> {
        if self.ctype != other.ctype {
            return Err(type_mismatch(format!(
                "'<' not supported between symbols of types {} and {}",
                self.ctype, other.ctype
            )));
        }
        Ok(self.cid.cmp(&other.cid))
    }

    /// Total order over all symbols, by construct type bits first.
    ///
    /// Only meant for deterministic rendering; use `try_cmp` for semantics.
    pub(crate) fn display_order(&self, other: &Symbol) -> Ordering {
        self.ctype
            .bits()
            .cmp(&other.ctype.bits())
            .then_with(|| self.cid.cmp(&other.cid))
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ctype.name() {
            Some(name) => {
                write!(f, "{name}(")?;
                write_cid(f, &self.cid)?;
                f.write_str(")")
            }
            None => {
                write!(f, "Symbol(ConstructType({})", self.ctype.bits())?;
                if !self.cid.is_empty() {
                    f.write_str(", ")?;
                    write_cid(f, &self.cid)?;
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ctype.name() {
            Some(name) => write!(f, "Symbol('{name}'")?,
            None => write!(f, "Symbol(ConstructType({})", self.ctype.bits())?,
        }
        for part in self.cid.iter() {
            write!(f, ", {part}")?;
        }
        f.write_str(")")
    }
}

fn write_cid(f: &mut fmt::Formatter<'_>, cid: &[CidPart]) -> fmt::Result {
    for (index, part) in cid.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{part}")?;
    }
    Ok(())
}

impl FromStr for Symbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = text::parse_symbol(s)?;
        match parsed.ctype {
            text::ParsedCtype::Name(name) => Symbol::new(name, parsed.cid),
            text::ParsedCtype::Bits(bits) => Symbol::new(bits, parsed.cid),
        }
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSymbol {
    Text(String),
    Parts {
        ctype: Value,
        #[serde(default)]
        cid: Vec<CidPart>,
    },
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let symbol = match RawSymbol::deserialize(deserializer)? {
            RawSymbol::Text(text) => text.parse::<Symbol>(),
            RawSymbol::Parts { ctype, cid } => Symbol::new(&ctype, cid),
        };
        symbol.map_err(serde::de::Error::custom)
    }
}

pub fn feature(dim: impl Into<CidPart>, val: impl Into<CidPart>) -> Symbol {
    Symbol::typed(ConstructType::FEATURE, vec![dim.into(), val.into()])
}

pub fn chunk(name: impl Into<CidPart>) -> Symbol {
    Symbol::typed(ConstructType::CHUNK, vec![name.into()])
}

pub fn flow_in(name: impl Into<CidPart>) -> Symbol {
    Symbol::typed(ConstructType::FLOW_IN, vec![name.into()])
}

pub fn flow_bt(name: impl Into<CidPart>) -> Symbol {
    Symbol::typed(ConstructType::FLOW_BT, vec![name.into()])
}

pub fn flow_tb(name: impl Into<CidPart>) -> Symbol {
    Symbol::typed(ConstructType::FLOW_TB, vec![name.into()])
}

pub fn flow_tt(name: impl Into<CidPart>) -> Symbol {
    Symbol::typed(ConstructType::FLOW_TT, vec![name.into()])
}

pub fn flow_bb(name: impl Into<CidPart>) -> Symbol {
    Symbol::typed(ConstructType::FLOW_BB, vec![name.into()])
}

pub fn terminus(name: impl Into<CidPart>) -> Symbol {
    Symbol::typed(ConstructType::TERMINUS, vec![name.into()])
}

pub fn buffer(name: impl Into<CidPart>) -> Symbol {
    Symbol::typed(ConstructType::BUFFER, vec![name.into()])
}

pub fn subsystem(name: impl Into<CidPart>) -> Symbol {
    Symbol::typed(ConstructType::SUBSYSTEM, vec![name.into()])
}

pub fn agent(name: impl Into<CidPart>) -> Symbol {
    Symbol::typed(ConstructType::AGENT, vec![name.into()])
}
