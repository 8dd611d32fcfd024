//! Symbol Table
//!
//! Per-generation-unit registry mapping semantic type references to reserved nicknames
//! and to the import statements needed to use them. One table is created per sample,
//! filled by the import collector, read by the renderer, then dropped.
//!
//! Nickname allocation is deterministic: the first candidate is the simple name; on a
//! clash with a different type, enclosing namespace segments are prepended one at a time
//! (joined with `_`); once the full identity is used up, a numeric suffix starting at 2
//! is appended. The same reservations in the same order always yield the same names.

use crate::policy::ImportPolicy;
use crate::types::TypeRef;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

pub struct SymbolTable {
    policy: Arc<dyn ImportPolicy>,
    /// Reserved nicknames in reservation order
    entries: Vec<(TypeRef, String)>,
    index: HashMap<TypeRef, usize>,
    taken: HashSet<String>,
    imports: BTreeSet<String>,
    reservation_requests: usize,
}

impl SymbolTable {
    /// Create an empty table that attributes imports through `policy`
    pub fn new(policy: Arc<dyn ImportPolicy>) -> Self {
        Self {
            policy,
            entries: Vec::new(),
            index: HashMap::new(),
            taken: HashSet::new(),
            imports: BTreeSet::new(),
            reservation_requests: 0,
        }
    }

    /// Reserve (or look up) the nickname for `ty`.
    ///
    /// Idempotent for equal references; distinct references never share a nickname.
    /// The imports for a type are recorded only on its first reservation.
    pub fn reserve(&mut self, ty: &TypeRef) -> String {
        self.reservation_requests += 1;
        self.reserve_inner(ty)
    }

    fn reserve_inner(&mut self, ty: &TypeRef) -> String {
        if let Some(&slot) = self.index.get(ty) {
            return self.entries[slot].1.clone();
        }

        let nickname = match ty.element() {
            Some(element) => {
                let element_nickname = self.reserve_inner(element);
                let candidate = self.policy.collection_nickname(&element_nickname);
                if self.taken.contains(&candidate) {
                    self.numbered(&candidate)
                } else {
                    candidate
                }
            }
            None => self.allocate(ty),
        };

        for statement in self.policy.imports_for(ty) {
            self.imports.insert(statement);
        }

        debug!(
            identity = ty.identity(),
            nickname = nickname.as_str(),
            "Reserved nickname"
        );

        self.taken.insert(nickname.clone());
        self.index.insert(ty.clone(), self.entries.len());
        self.entries.push((ty.clone(), nickname.clone()));
        nickname
    }

    fn allocate(&self, ty: &TypeRef) -> String {
        let segments = ty.segments();
        for take in 1..=segments.len() {
            let candidate = segments[segments.len() - take..].join("_");
            if !self.taken.contains(&candidate) {
                return candidate;
            }
        }

        self.numbered(&segments.join("_"))
    }

    /// First free `{base}N`, counting from 2
    fn numbered(&self, base: &str) -> String {
        let mut suffix = 2usize;
        loop {
            let candidate = format!("{}{}", base, suffix);
            if !self.taken.contains(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }

    /// Add a free-standing import statement (e.g. an auxiliary module).
    /// Returns `false` if it was already present.
    pub fn add_import(&mut self, statement: impl Into<String>) -> bool {
        self.imports.insert(statement.into())
    }

    /// Nickname previously reserved for `ty`
    pub fn nickname_for(&self, ty: &TypeRef) -> Option<&str> {
        self.index
            .get(ty)
            .map(|&slot| self.entries[slot].1.as_str())
    }

    /// Accumulated import statements, sorted
    pub fn imports(&self) -> &BTreeSet<String> {
        &self.imports
    }

    /// Reserved (type, nickname) pairs in reservation order
    pub fn entries(&self) -> impl Iterator<Item = (&TypeRef, &str)> {
        self.entries.iter().map(|(ty, name)| (ty, name.as_str()))
    }

    /// Number of `reserve` calls made, repeats included
    pub fn reservation_requests(&self) -> usize {
        self.reservation_requests
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolTable")
            .field("language", &self.policy.language())
            .field("entries", &self.entries)
            .field("imports", &self.imports)
            .finish()
    }
}
