//! Deterministic symbol layout on a circular card
//!
//! Slot positions come from a seed derived from the card's own symbol
//! tuple; per-slot size and rotation come from a stream seeded by slot
//! index and symbol id. The same symbols at the same diameter always yield
//! the same placements, whatever order cards are laid out in.

use rand::Rng;
use std::f64::consts::{PI, TAU};

use crate::core::config::LayoutConfig;
use crate::core::rng::{card_seed, slot_rng};
use crate::core::types::Symbol;
use crate::layout::placement::Placement;

/// Slot centre before size and rotation are decided
#[derive(Debug, Clone, Copy)]
struct Anchor {
    x: f64,
    y: f64,
    /// Distance to the nearest neighbour on the same ring
    chord: f64,
}

/// Chord between neighbours of `count` slots evenly spaced on a ring
fn ring_chord(radius: f64, count: usize) -> f64 {
    if count < 2 {
        f64::INFINITY
    } else {
        2.0 * radius * (PI / count as f64).sin()
    }
}

#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Place every symbol of a card, in input order
    pub fn layout(&self, symbols: &[Symbol], diameter: f64) -> Vec<Placement> {
        if symbols.is_empty() {
            return Vec::new();
        }

        let seed = card_seed(symbols);
        let anchors = self.anchors(symbols.len(), diameter, seed);

        anchors
            .iter()
            .zip(symbols)
            .enumerate()
            .map(|(slot, (anchor, &symbol))| {
                self.place(slot, symbol, anchor, symbols.len(), diameter)
            })
            .collect()
    }

    fn anchors(&self, count: usize, diameter: f64, seed: u64) -> Vec<Anchor> {
        let cfg = &self.config;
        let centre = diameter / 2.0;
        let safe = diameter * cfg.safe_radius_ratio;
        let offset = (seed % 100) as f64 / 100.0 * TAU;

        let ring = |count: usize, radius: f64, start: f64| -> Vec<Anchor> {
            let chord = ring_chord(radius, count);
            (0..count)
                .map(|i| {
                    let angle = start + i as f64 * TAU / count as f64;
                    Anchor {
                        x: centre + radius * angle.cos(),
                        y: centre + radius * angle.sin(),
                        chord,
                    }
                })
                .collect()
        };

        if count <= 3 {
            let base = safe * cfg.triad_ring_ratio;
            let nudge = (seed % 100) as f64 / 1000.0;
            // Radii vary by up to 10% either way
            let chord = ring_chord(base * 0.9, 3);
            return (0..count)
                .map(|i| {
                    let angle = i as f64 * TAU / 3.0 + nudge;
                    let spread = ((seed + i as u64 * 37) % 50) as f64 - 25.0;
                    let radius = base + spread / 250.0 * base;
                    Anchor {
                        x: centre + radius * angle.cos(),
                        y: centre + radius * angle.sin(),
                        chord,
                    }
                })
                .collect();
        }

        if count <= 5 {
            let unit = diameter / 800.0;
            let mut anchors = vec![Anchor {
                x: centre + ((seed % 10) as f64 - 5.0) * unit,
                y: centre + (((seed / 100) % 10) as f64 - 5.0) * unit,
                chord: f64::INFINITY,
            }];
            anchors.extend(ring(count - 1, safe * cfg.single_ring_ratio, offset));
            return anchors;
        }

        let outer = count.min(cfg.max_outer_slots);
        let inner = count - outer;
        let mut anchors = ring(outer, safe * cfg.outer_ring_ratio, offset);
        match inner {
            0 => {}
            1 => anchors.push(Anchor {
                x: centre,
                y: centre,
                chord: f64::INFINITY,
            }),
            _ => anchors.extend(ring(
                inner,
                safe * cfg.inner_ring_ratio,
                offset + PI / outer as f64,
            )),
        }
        anchors
    }

    fn size_factor(&self, count: usize) -> f64 {
        match count {
            0..=4 => self.config.size_factor_small,
            5..=6 => self.config.size_factor_medium,
            _ => self.config.size_factor_large,
        }
    }

    fn place(
        &self,
        slot: usize,
        symbol: Symbol,
        anchor: &Anchor,
        count: usize,
        diameter: f64,
    ) -> Placement {
        let cfg = &self.config;
        let centre = diameter / 2.0;
        let safe = diameter * cfg.safe_radius_ratio;
        let mut rng = slot_rng(slot, symbol);

        let dx = anchor.x - centre;
        let dy = anchor.y - centre;
        let distance = dx.hypot(dy);

        // Linear shrink from the centre to the safe radius
        let central = self.size_factor(count);
        let edge = central * cfg.edge_scale;
        let factor = central - (distance / safe) * (central - edge);
        let scale = 1.0 - cfg.scale_jitter / 2.0 + rng.gen::<f64>() * cfg.scale_jitter;
        let size = (diameter * factor * scale).min(anchor.chord * cfg.crowding_margin);

        let outward = dy.atan2(dx);
        let roll: f64 = rng.gen();
        let mut rotation = if roll < cfg.outward_probability {
            outward
        } else if roll < cfg.outward_probability + cfg.inward_probability {
            outward + PI
        } else {
            rng.gen::<f64>() * TAU
        };
        rotation += (rng.gen::<f64>() - 0.5) * cfg.rotation_jitter;

        Placement {
            slot,
            symbol,
            x: anchor.x,
            y: anchor.y,
            size,
            rotation,
        }
    }
}

/// Lay out a card with the default configuration
pub fn compute_layout(symbols: &[Symbol], diameter: f64) -> Vec<Placement> {
    LayoutEngine::default().layout(symbols, diameter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(ids: &[u32]) -> Vec<Symbol> {
        ids.iter().copied().map(Symbol).collect()
    }

    #[test]
    fn test_empty_card() {
        assert!(compute_layout(&[], 800.0).is_empty());
    }

    #[test]
    fn test_three_symbol_scenario() {
        let card = symbols(&[5, 12, 3]);
        let first = compute_layout(&card, 800.0);
        let second = compute_layout(&card, 800.0);
        assert_eq!(first.len(), 3);
        assert!(first.iter().all(|p| p.size > 0.0));
        assert_eq!(first, second);
        assert_eq!(
            first.iter().map(|p| p.symbol).collect::<Vec<_>>(),
            card
        );
    }

    #[test]
    fn test_four_and_five_have_centre_slot() {
        for ids in [&[1, 2, 3, 4][..], &[7, 8, 9, 10, 11][..]] {
            let placements = compute_layout(&symbols(ids), 800.0);
            // jitter is at most 5 units at 800
            assert!(placements[0].distance_from_centre(800.0) <= 5.0 * 2f64.sqrt() + 1e-9);
            let ring = placements[1].distance_from_centre(800.0);
            for p in &placements[1..] {
                assert!((p.distance_from_centre(800.0) - ring).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_six_uses_centre_and_outer_ring() {
        let placements = compute_layout(&symbols(&[0, 1, 2, 3, 4, 5]), 1000.0);
        assert_eq!(placements.len(), 6);
        assert!(placements[5].distance_from_centre(1000.0) < 1e-9);
        let outer = 1000.0 * 0.42 * 0.76;
        for p in &placements[..5] {
            assert!((p.distance_from_centre(1000.0) - outer).abs() < 1e-6);
        }
    }

    #[test]
    fn test_inner_ring_staggered() {
        let placements = compute_layout(&symbols(&[0, 8, 16, 24, 32, 40, 48, 56]), 800.0);
        let inner = 800.0 * 0.42 * 0.38;
        for p in &placements[5..] {
            assert!((p.distance_from_centre(800.0) - inner).abs() < 1e-6);
        }
        let angle = |p: &Placement| (p.y - 400.0).atan2(p.x - 400.0);
        let step = (angle(&placements[5]) - angle(&placements[0])).rem_euclid(TAU);
        assert!((step - PI / 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_size_shrinks_toward_rim() {
        let config = LayoutConfig {
            scale_jitter: 0.0,
            ..LayoutConfig::default()
        };
        let engine = LayoutEngine::new(config);
        let placements = engine.layout(&symbols(&[3, 1, 4, 1, 5, 9]), 800.0);
        let centre = &placements[5];
        assert!(placements[..5].iter().all(|p| p.size < centre.size));
        // centre slot gets the full medium factor
        assert!((centre.size - 800.0 * 0.17).abs() < 1e-9);
    }

    #[test]
    fn test_outward_rotation_when_forced() {
        let config = LayoutConfig {
            outward_probability: 1.0,
            inward_probability: 0.0,
            rotation_jitter: 0.0,
            ..LayoutConfig::default()
        };
        let engine = LayoutEngine::new(config);
        for p in engine.layout(&symbols(&[2, 4, 6]), 600.0) {
            let expected = (p.y - 300.0).atan2(p.x - 300.0);
            assert!((p.rotation - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_crowded_ring_sizes_capped() {
        let card: Vec<Symbol> = (0..32).map(Symbol).collect();
        let placements = compute_layout(&card, 800.0);
        let inner = &placements[5..];
        let chord = ring_chord(800.0 * 0.42 * 0.38, inner.len());
        assert!(inner.iter().all(|p| p.size <= chord * 0.9 + 1e-9));
    }

    #[test]
    fn test_layout_depends_on_symbol_order() {
        let a = compute_layout(&symbols(&[1, 2, 3, 4]), 800.0);
        let b = compute_layout(&symbols(&[4, 3, 2, 1]), 800.0);
        assert_ne!(a, b);
    }
}
