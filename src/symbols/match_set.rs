use std::{
    collections::HashSet,
    fmt,
    hash::{Hash, Hasher},
    ops::{BitOrAssign, SubAssign},
    sync::Arc,
};

use crate::symbols::{construct_type::ConstructType, symbol::Symbol};

type PredicateFn = dyn Fn(&Symbol) -> bool + Send + Sync;

/// Named symbol predicate with identity semantics.
///
/// Two predicates are equal only if they share the same underlying closure,
/// so removing a predicate requires a clone of the one that was added.
#[derive(Clone)]
pub struct Predicate {
    label: Arc<str>,
    test: Arc<PredicateFn>,
}

impl Predicate {
    pub fn new(
        label: impl Into<Arc<str>>,
        test: impl Fn(&Symbol) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            test: Arc::new(test),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn test(&self, symbol: &Symbol) -> bool {
        (self.test)(symbol)
    }

    fn identity(&self) -> *const () {
        Arc::as_ptr(&self.test) as *const ()
    }
}

impl PartialEq for Predicate {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Predicate {}

impl Hash for Predicate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicate({})", self.label)
    }
}

/// Matches construct symbols against OR-combined criteria.
///
/// A symbol is accepted iff its construct type intersects `ctype`, it is a
/// member of `constructs`, or any predicate accepts it.
#[derive(Clone, Default)]
pub struct MatchSet {
    ctype: ConstructType,
    constructs: HashSet<Symbol>,
    predicates: HashSet<Predicate>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ctype(mut self, ctype: ConstructType) -> Self {
        self.ctype |= ctype;
        self
    }

    pub fn with_constructs(mut self, constructs: impl IntoIterator<Item = Symbol>) -> Self {
        self.constructs.extend(constructs);
        self
    }

    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicates.insert(predicate);
        self
    }

    pub fn ctype(&self) -> ConstructType {
        self.ctype
    }

    pub fn constructs(&self) -> &HashSet<Symbol> {
        &self.constructs
    }

    pub fn predicates(&self) -> &HashSet<Predicate> {
        &self.predicates
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        symbol.ctype().intersects(self.ctype)
            || self.constructs.contains(symbol)
            || self.predicates.iter().any(|predicate| predicate.test(symbol))
    }

    /// Extend the accepted set. Empty arguments leave their criterion as is.
    pub fn add(
        &mut self,
        ctype: Option<ConstructType>,
        constructs: impl IntoIterator<Item = Symbol>,
        predicates: impl IntoIterator<Item = Predicate>,
    ) {
        if let Some(ctype) = ctype {
            self.ctype |= ctype;
        }
        self.constructs.extend(constructs);
        self.predicates.extend(predicates);
    }

    /// Contract the accepted set. Empty arguments leave their criterion as is.
    pub fn remove(
        &mut self,
        ctype: Option<ConstructType>,
        constructs: impl IntoIterator<Item = Symbol>,
        predicates: impl IntoIterator<Item = Predicate>,
    ) {
        if let Some(ctype) = ctype {
            self.ctype.remove(ctype);
        }
        for symbol in constructs {
            self.constructs.remove(&symbol);
        }
        for predicate in predicates {
            self.predicates.remove(&predicate);
        }
    }
}

impl BitOrAssign<&MatchSet> for MatchSet {
    fn bitor_assign(&mut self, other: &MatchSet) {
        self.add(
            Some(other.ctype),
            other.constructs.iter().cloned(),
            other.predicates.iter().cloned(),
        );
    }
}

impl SubAssign<&MatchSet> for MatchSet {
    fn sub_assign(&mut self, other: &MatchSet) {
        self.remove(
            Some(other.ctype),
            other.constructs.iter().cloned(),
            other.predicates.iter().cloned(),
        );
    }
}

impl fmt::Debug for MatchSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut constructs: Vec<&Symbol> = self.constructs.iter().collect();
        constructs.sort_by(|lhs, rhs| lhs.display_order(rhs));
        let mut labels: Vec<&str> = self.predicates.iter().map(Predicate::label).collect();
        labels.sort_unstable();

        f.debug_struct("MatchSet")
            .field("ctype", &format_args!("{}", self.ctype))
            .field("constructs", &constructs)
            .field("predicates", &labels)
            .finish()
    }
}
