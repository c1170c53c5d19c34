//! Layout engine integration tests

use proptest::prelude::*;
use spot_deck::core::types::Symbol;
use spot_deck::{compute_layout, generate_design, layout_deck, Placement};

fn symbols(ids: &[u32]) -> Vec<Symbol> {
    ids.iter().copied().map(Symbol).collect()
}

fn assert_inside_card(placements: &[Placement], diameter: f64) {
    for p in placements {
        assert!(
            p.distance_from_centre(diameter) + p.size / 2.0 <= diameter / 2.0,
            "slot {} pokes past the rim",
            p.slot
        );
    }
}

#[test]
fn test_three_symbol_scenario() {
    let card = symbols(&[5, 12, 3]);
    let placements = compute_layout(&card, 800.0);
    assert_eq!(placements.len(), 3);
    assert!(placements.iter().all(|p| p.size > 0.0));
    for _ in 0..3 {
        assert_eq!(compute_layout(&card, 800.0), placements);
    }
}

#[test]
fn test_deck_slots_do_not_overlap() {
    for n in [2, 3, 4, 5, 7] {
        let design = generate_design(n).unwrap();
        for layout in layout_deck(&design, 800.0) {
            let ps = &layout.placements;
            assert_inside_card(ps, 800.0);
            for (i, a) in ps.iter().enumerate() {
                for b in &ps[i + 1..] {
                    let room = (a.size + b.size) / 2.0 * 0.9;
                    assert!(
                        a.distance_to(b) >= room,
                        "order {} card {}: slots {} and {} overlap",
                        n,
                        layout.card_index,
                        a.slot,
                        b.slot
                    );
                }
            }
        }
    }
}

#[test]
fn test_large_order_stays_on_card() {
    let design = generate_design(31).unwrap();
    let card = design.card(100).unwrap();
    let placements = compute_layout(card.symbols(), 2100.0);
    assert_eq!(placements.len(), 32);
    assert!(placements.iter().all(|p| p.size > 0.0));
    assert_inside_card(&placements, 2100.0);
}

#[test]
fn test_layout_independent_of_generation_order() {
    let design = generate_design(5).unwrap();
    let forward = layout_deck(&design, 640.0);
    let card = design.card(17).unwrap();
    assert_eq!(compute_layout(card.symbols(), 640.0), forward[17].placements);
}

proptest! {
    #[test]
    fn prop_layout_deterministic(
        ids in proptest::collection::vec(0u32..1000, 0..12),
        diameter in 100.0f64..4000.0,
    ) {
        let card = symbols(&ids);
        let a = compute_layout(&card, diameter);
        let b = compute_layout(&card, diameter);
        prop_assert_eq!(a.len(), ids.len());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_layout_aligned_and_positive(
        ids in proptest::collection::vec(0u32..1000, 1..33),
        diameter in 100.0f64..4000.0,
    ) {
        let card = symbols(&ids);
        let placements = compute_layout(&card, diameter);
        for (slot, (p, s)) in placements.iter().zip(&card).enumerate() {
            prop_assert_eq!(p.slot, slot);
            prop_assert_eq!(p.symbol, *s);
            prop_assert!(p.size > 0.0);
            prop_assert!(p.distance_from_centre(diameter) + p.size / 2.0 <= diameter / 2.0);
        }
    }
}
