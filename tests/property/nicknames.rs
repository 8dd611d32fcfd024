//! Property-based tests for nickname allocation

use proptest::prelude::*;
use samplegen::policy::{JavaImportPolicy, PythonImportPolicy};
use samplegen::{ImportPolicy, SymbolTable, TypeRef};
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

/// Short dotted identities over a tiny alphabet so clashes are common
fn identity() -> impl Strategy<Value = String> {
    prop::collection::vec("[ab2_]{1,3}", 1..4).prop_map(|segments| segments.join("."))
}

fn type_ref() -> impl Strategy<Value = TypeRef> {
    (identity(), 0u8..4).prop_map(|(id, kind)| match kind {
        0 => TypeRef::enumeration(id).unwrap(),
        1 => TypeRef::collection(TypeRef::message(id).unwrap()),
        _ => TypeRef::message(id).unwrap(),
    })
}

fn policies() -> Vec<Arc<dyn ImportPolicy>> {
    vec![
        Arc::new(JavaImportPolicy::new()),
        Arc::new(PythonImportPolicy::new("google.example.library_v1")),
    ]
}

proptest! {
    #[test]
    fn reserve_is_idempotent(types in prop::collection::vec(type_ref(), 1..24)) {
        for policy in policies() {
            let mut table = SymbolTable::new(policy);
            let first: Vec<String> = types.iter().map(|ty| table.reserve(ty)).collect();
            let entries = table.len();
            let second: Vec<String> = types.iter().map(|ty| table.reserve(ty)).collect();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(table.len(), entries);
            for (ty, name) in types.iter().zip(&first) {
                prop_assert_eq!(table.nickname_for(ty), Some(name.as_str()));
            }
        }
    }

    #[test]
    fn distinct_types_never_share_a_nickname(types in prop::collection::vec(type_ref(), 1..32)) {
        for policy in policies() {
            let mut table = SymbolTable::new(policy);
            for ty in &types {
                table.reserve(ty);
            }
            let identities: HashSet<&str> = table.entries().map(|(ty, _)| ty.identity()).collect();
            let nicknames: HashSet<&str> = table.entries().map(|(_, name)| name).collect();
            prop_assert_eq!(identities.len(), table.len());
            prop_assert_eq!(nicknames.len(), table.len());
        }
    }

    #[test]
    fn reservation_requests_count_every_call(types in prop::collection::vec(type_ref(), 0..24)) {
        let mut table = SymbolTable::new(Arc::new(JavaImportPolicy::new()));
        for ty in &types {
            table.reserve(ty);
        }
        prop_assert_eq!(table.reservation_requests(), types.len());

        // collections also reserve their element, without counting it as a request
        let distinct: BTreeSet<&str> = types
            .iter()
            .flat_map(|ty| std::iter::once(ty.identity()).chain(ty.element().map(TypeRef::identity)))
            .collect();
        prop_assert_eq!(table.len(), distinct.len());
    }
}
