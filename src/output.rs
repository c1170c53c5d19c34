//! Deck output and serialization

use serde::{Deserialize, Serialize};

use crate::core::types::{required_symbol_count, Card};
use crate::design::{Generated, GenerationReport};
use crate::layout::{CardLayout, LayoutEngine};

/// Complete deck output: design, report and per-card layouts
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeckOutput {
    pub order: u32,
    pub symbols_required: u64,
    pub card_diameter: f64,
    pub report: GenerationReport,
    pub cards: Vec<CardOutput>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardOutput {
    pub index: usize,
    pub name: String,
    pub symbols: Card,
    pub layout: CardLayout,
}

impl CardOutput {
    fn new(card: &Card, layout: CardLayout) -> Self {
        Self {
            index: layout.card_index,
            name: card.export_name(),
            symbols: card.clone(),
            layout,
        }
    }
}

impl DeckOutput {
    /// Every card of the design, laid out in parallel
    pub fn new(generated: &Generated, engine: &LayoutEngine, card_diameter: f64) -> Self {
        let design = &generated.design;
        let cards = design
            .cards()
            .iter()
            .zip(engine.layout_deck(design, card_diameter))
            .map(|(card, layout)| CardOutput::new(card, layout))
            .collect();
        Self::with_cards(generated, card_diameter, cards)
    }

    /// Only the card at `index`; no other card is laid out
    pub fn single_card(
        generated: &Generated,
        engine: &LayoutEngine,
        card_diameter: f64,
        index: usize,
    ) -> Option<Self> {
        let card = generated.design.card(index)?;
        let layout = CardLayout {
            card_index: index,
            key: card.key(),
            placements: engine.layout(card.symbols(), card_diameter),
        };
        Some(Self::with_cards(
            generated,
            card_diameter,
            vec![CardOutput::new(card, layout)],
        ))
    }

    fn with_cards(generated: &Generated, card_diameter: f64, cards: Vec<CardOutput>) -> Self {
        let order = generated.design.order().get();
        Self {
            order,
            symbols_required: required_symbol_count(order),
            card_diameter,
            report: generated.report.clone(),
            cards,
        }
    }

    pub fn summary(&self) -> String {
        let mut out = format!(
            "order {}: {} cards, {} symbols per card, {} images required\n",
            self.order,
            self.cards.len(),
            self.order + 1,
            self.symbols_required
        );
        out.push_str(&format!(
            "strategy {:?} (attempted {:?}, repair passes {}, randomized {})\n",
            self.report.strategy,
            self.report.attempted,
            self.report.repair_passes,
            self.report.randomized
        ));
        if self.report.is_seed_dependent() {
            out.push_str(&format!(
                "design depends on seed {}; rerun with the same seed to reproduce it\n",
                self.report.seed
            ));
        }
        for card in &self.cards {
            out.push_str(&format!("{:>4}  {}\n", card.index, card.symbols.key()));
            for p in &card.layout.placements {
                out.push_str(&format!(
                    "      slot {:>2} symbol {:>4}  x {:>8.2}  y {:>8.2}  size {:>7.2}  rot {:>7.1}\n",
                    p.slot,
                    p.symbol,
                    p.x,
                    p.y,
                    p.size,
                    p.rotation_degrees()
                ));
            }
        }
        out
    }
}
