//! Entity registry tests: categorization, deduplication, and the
//! idempotence guarantee.

use planreel_parser::Dialect;
use planreel_timeline::LocationKind;

use crate::common::assembled;

#[test]
fn buckets_are_deduplicated_across_actions() {
    let text = "\
0: (load obj1 tru1 pos1)
1: (load obj2 tru1 pos1)
2: (drive tru1 pos1 pos2)
3: (unload obj1 tru1 pos2)
4: (unload obj2 tru1 pos2)
";
    let (_, registry, _) = assembled(text, Dialect::Classical);

    assert_eq!(registry.movers().len(), 1);
    assert_eq!(registry.cargo_items().len(), 2);
    assert_eq!(registry.locations().len(), 2);
    assert_eq!(registry.len(), 5);
}

#[test]
fn categorization_is_idempotent_across_action_orders() {
    // the same identifiers, introduced by different actions first
    let forward = "\
0: (load obj1 tru1 pos1)
1: (drive tru1 pos1 pos2)
";
    let reversed = "\
0: (drive tru1 pos1 pos2)
1: (load obj1 tru1 pos1)
";
    let (_, registry_a, mut interner_a) = assembled(forward, Dialect::Classical);
    let (_, registry_b, mut interner_b) = assembled(reversed, Dialect::Classical);

    for name in ["tru1", "obj1", "pos1", "pos2"] {
        let a = interner_a.intern(name);
        let b = interner_b.intern(name);
        assert_eq!(registry_a.is_mover(a), registry_b.is_mover(b), "{name}");
        assert_eq!(registry_a.is_cargo(a), registry_b.is_cargo(b), "{name}");
    }
}

#[test]
fn transit_hubs_are_sub_tagged() {
    let text = "\
0: (fly-airplane apn1 airport1 airport2)
1: (drive tru1 pos1 airport1)
";
    let (_, registry, mut interner) = assembled(text, Dialect::Classical);

    assert_eq!(
        registry.location_kind(interner.intern("airport1")),
        Some(LocationKind::TransitHub)
    );
    assert_eq!(
        registry.location_kind(interner.intern("pos1")),
        Some(LocationKind::Waypoint)
    );
}

#[test]
fn first_location_is_deterministic() {
    let text = "\
0: (drive tru1 pos7 pos3)
1: (drive tru2 pos3 pos7)
";
    let (_, registry_a, mut interner) = assembled(text, Dialect::Classical);
    let (_, registry_b, _) = assembled(text, Dialect::Classical);

    let pos7 = interner.intern("pos7");
    assert_eq!(registry_a.first_location(), Some(pos7));
    assert_eq!(registry_a.first_location(), registry_b.first_location());
}

#[test]
fn unknown_identifiers_fall_back_to_their_role_slot() {
    // nothing in the lexicon matches these names; the role slot decides
    let text = "0: (drive zzz-alpha zzz-beta zzz-gamma)\n";
    let (_, registry, mut interner) = assembled(text, Dialect::Classical);

    assert!(registry.is_mover(interner.intern("zzz-alpha")));
    assert_eq!(registry.locations().len(), 2);
}
