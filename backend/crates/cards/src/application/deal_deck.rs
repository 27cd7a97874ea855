//! Deal Deck Use Case

use rand::Rng;
use std::sync::Arc;

use crate::domain::card::Card;
use crate::domain::deck::{DeckName, DeckTable};
use crate::error::CardsResult;

/// Deal Deck Use Case
pub struct DealDeckUseCase {
    decks: Arc<DeckTable>,
}

impl DealDeckUseCase {
    pub fn new(decks: Arc<DeckTable>) -> Self {
        Self { decks }
    }

    /// Deal a shuffled copy of the requested deck, or of the default deck
    /// when no name is given.
    pub fn execute(&self, requested: Option<&str>) -> CardsResult<Vec<Card>> {
        self.execute_with_rng(requested, &mut rand::rng())
    }

    pub fn execute_with_rng<R>(&self, requested: Option<&str>, rng: &mut R) -> CardsResult<Vec<Card>>
    where
        R: Rng + ?Sized,
    {
        let name = match requested {
            Some(requested) => requested.parse()?,
            None => DeckName::default(),
        };

        let cards = self.decks.get(name).deal(rng);

        tracing::info!(deck = %name, cards = cards.len(), "Dealt deck");

        Ok(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CardsError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn decks() -> Arc<DeckTable> {
        let table = DeckTable::new(DeckName::ALL.map(|name| {
            let cards = (1..=4)
                .map(|n| Card::new(format!("{name}-{n}"), format!("/img/{name}/{n}.png")))
                .collect();
            (name, cards)
        }))
        .unwrap();
        Arc::new(table)
    }

    #[test]
    fn test_default_deck() {
        let use_case = DealDeckUseCase::new(decks());
        let cards = use_case.execute(None).unwrap();
        assert_eq!(cards.len(), 8);
        assert!(cards.iter().all(|card| card.id.starts_with("dogs-")));
    }

    #[test]
    fn test_named_deck_case_insensitive() {
        let use_case = DealDeckUseCase::new(decks());
        let cards = use_case.execute(Some("Vacation")).unwrap();
        assert!(cards.iter().all(|card| card.id.starts_with("vacation-")));
    }

    #[test]
    fn test_unknown_deck() {
        let use_case = DealDeckUseCase::new(decks());
        let err = use_case.execute(Some("tarot")).unwrap_err();
        assert!(matches!(err, CardsError::DeckNotFound(_)));
    }

    #[test]
    fn test_deals_vary_between_requests() {
        let use_case = DealDeckUseCase::new(decks());
        let mut rng = StdRng::seed_from_u64(5);
        let first = use_case.execute_with_rng(Some("gcp"), &mut rng).unwrap();
        let orders_differ = (0..20).any(|_| {
            use_case.execute_with_rng(Some("gcp"), &mut rng).unwrap() != first
        });
        assert!(orders_differ);
    }
}
