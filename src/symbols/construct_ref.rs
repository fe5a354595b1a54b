use std::fmt;

use serde::{Deserialize, Serialize};

use crate::symbols::symbol::Symbol;

/// Address of a construct, possibly nested inside containers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstructRef {
    Symbol(Symbol),
    Path(Vec<Symbol>),
}

impl ConstructRef {
    pub fn symbols(&self) -> &[Symbol] {
        match self {
            ConstructRef::Symbol(symbol) => std::slice::from_ref(symbol),
            ConstructRef::Path(path) => path,
        }
    }

    /// Innermost construct named by this address.
    pub fn leaf(&self) -> Option<&Symbol> {
        self.symbols().last()
    }

    /// Outermost container named by this address.
    pub fn root(&self) -> Option<&Symbol> {
        self.symbols().first()
    }

    pub fn depth(&self) -> usize {
        self.symbols().len()
    }

    /// Address of `child` nested under `self`.
    pub fn join(&self, child: Symbol) -> ConstructRef {
        let mut path = self.symbols().to_vec();
        path.push(child);
        ConstructRef::Path(path)
    }
}

impl From<Symbol> for ConstructRef {
    fn from(symbol: Symbol) -> Self {
        ConstructRef::Symbol(symbol)
    }
}

impl From<Vec<Symbol>> for ConstructRef {
    fn from(path: Vec<Symbol>) -> Self {
        ConstructRef::Path(path)
    }
}

impl fmt::Display for ConstructRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, symbol) in self.symbols().iter().enumerate() {
            if index > 0 {
                f.write_str(" / ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
