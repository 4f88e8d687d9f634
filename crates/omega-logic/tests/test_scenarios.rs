//! Object lifecycle scenarios across the logic crate.
//!
//! Exercises: InventoryObject → Stability → Coolable → InventoryStore
//!
//! All tests are pure logic — no console, no randomness.

use omega_logic::prelude::*;

// ── Analysis drain ─────────────────────────────────────────────────────

#[test]
fn data_packet_survives_four_analyses() {
    let mut packet = InventoryObject::new("OBJ-101", ObjectKind::DataPacket);
    for _ in 0..4 {
        packet.analyze().expect("no collapse within four analyses");
    }
    assert_eq!(packet.stability(), 80.0);
}

#[test]
fn dark_matter_collapses_on_seventh_analysis() {
    let mut dark = InventoryObject::new("OBJ-202", ObjectKind::DarkMatter);
    for _ in 0..6 {
        dark.analyze().expect("first six analyses are safe");
    }
    assert_eq!(dark.stability(), 10.0);

    let fault = dark.analyze().expect_err("seventh analysis collapses");
    assert_eq!(fault.id, "OBJ-202");
    assert_eq!(fault.attempted, -5.0);
}

#[test]
fn anti_matter_collapses_on_fourth_analysis() {
    let mut anti = InventoryObject::new("OBJ-303", ObjectKind::AntiMatter);
    for expected in [75.0, 50.0, 25.0] {
        anti.analyze().unwrap();
        assert_eq!(anti.stability(), expected);
    }
    // 25 - 25 = 0 is already fatal
    assert!(anti.analyze().is_err());
}

#[test]
fn data_packet_collapses_on_twentieth_analysis() {
    let mut packet = InventoryObject::new("OBJ-104", ObjectKind::DataPacket);
    for _ in 0..19 {
        packet.analyze().unwrap();
    }
    assert_eq!(packet.stability(), 5.0);
    assert_eq!(packet.analyze().unwrap_err().id, "OBJ-104");
}

// ── Cooldown ───────────────────────────────────────────────────────────

#[test]
fn anti_matter_cooldown_from_thirty() {
    let mut anti = InventoryObject::new("OBJ-305", ObjectKind::AntiMatter);
    anti.set_stability(30.0).unwrap();
    anti.coolable()
        .expect("anti matter is coolable")
        .emergency_cooldown()
        .unwrap();
    assert_eq!(anti.stability(), 80.0);
}

#[test]
fn anti_matter_cooldown_from_ninety_clamps() {
    let mut anti = InventoryObject::new("OBJ-306", ObjectKind::AntiMatter);
    anti.set_stability(90.0).unwrap();
    anti.coolable().unwrap().emergency_cooldown().unwrap();
    assert_eq!(anti.stability(), 100.0);
}

#[test]
fn data_packet_refuses_cooldown_without_mutation() {
    let mut packet = InventoryObject::new("OBJ-107", ObjectKind::DataPacket);
    packet.analyze().unwrap();
    assert!(packet.coolable().is_none());
    assert_eq!(packet.stability(), 95.0);
}

#[test]
fn cooldown_extends_dark_matter_lifetime() {
    let mut dark = InventoryObject::new("OBJ-208", ObjectKind::DarkMatter);
    for _ in 0..6 {
        dark.analyze().unwrap();
    }
    dark.coolable().unwrap().emergency_cooldown().unwrap();
    assert_eq!(dark.stability(), 60.0);
    for _ in 0..3 {
        dark.analyze().unwrap();
    }
    assert_eq!(dark.stability(), 15.0);
    assert!(dark.analyze().is_err());
}

// ── Store ──────────────────────────────────────────────────────────────

#[test]
fn store_dispatch_depends_on_runtime_variant() {
    let mut store = InventoryStore::new();
    store.add(InventoryObject::new("P", ObjectKind::DataPacket));
    store.add(InventoryObject::new("D", ObjectKind::DarkMatter));
    store.add(InventoryObject::new("A", ObjectKind::AntiMatter));

    for id in ["P", "D", "A"] {
        store.find_by_id_mut(id).unwrap().analyze().unwrap();
    }

    let listed: Vec<_> = store
        .list_all()
        .unwrap()
        .map(|o| (o.id().to_string(), o.stability()))
        .collect();
    assert_eq!(
        listed,
        vec![
            ("P".to_string(), 95.0),
            ("D".to_string(), 85.0),
            ("A".to_string(), 75.0)
        ]
    );
}

#[test]
fn missing_ids_are_not_found() {
    let mut store = InventoryStore::new();
    assert!(store.find_by_id_mut("OBJ-999").is_none());
    store.add(InventoryObject::new("OBJ-500", ObjectKind::DarkMatter));
    assert!(store.find_by_id_mut("OBJ-999").is_none());
}
