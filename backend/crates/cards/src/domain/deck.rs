//! Decks and the Deck Table

use rand::Rng;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::domain::card::Card;
use crate::error::{CardsError, CardsResult};

/// Names of the decks the game offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeckName {
    Hipster,
    #[default]
    Dogs,
    Vacation,
    Gcp,
}

impl DeckName {
    pub const ALL: [DeckName; 4] = [
        DeckName::Hipster,
        DeckName::Dogs,
        DeckName::Vacation,
        DeckName::Gcp,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            DeckName::Hipster => "hipster",
            DeckName::Dogs => "dogs",
            DeckName::Vacation => "vacation",
            DeckName::Gcp => "gcp",
        }
    }
}

impl fmt::Display for DeckName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeckName {
    type Err = CardsError;

    /// Case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeckName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CardsError::DeckNotFound(s.to_string()))
    }
}

/// A deck in which every card appears exactly twice
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck from one card per pair.
    ///
    /// The entries are concatenated with themselves, so each id must be
    /// unique among `entries` and there must be at least one.
    pub fn paired(name: DeckName, entries: Vec<Card>) -> CardsResult<Self> {
        if entries.is_empty() {
            return Err(CardsError::InvalidDeck {
                deck: name.to_string(),
                reason: "deck has no cards".to_string(),
            });
        }

        let mut seen = HashSet::with_capacity(entries.len());
        if let Some(dup) = entries.iter().find(|card| !seen.insert(card.id.as_str())) {
            return Err(CardsError::InvalidDeck {
                deck: name.to_string(),
                reason: format!("card id {} listed more than once", dup.id),
            });
        }

        let mut cards = Vec::with_capacity(entries.len() * 2);
        cards.extend(entries.iter().cloned());
        cards.extend(entries);
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Fresh shuffled copy; the deck itself is never reordered
    pub fn deal<R>(&self, rng: &mut R) -> Vec<Card>
    where
        R: Rng + ?Sized,
    {
        platform::shuffle::shuffled(&self.cards, rng)
    }
}

/// All decks, loaded once and shared read-only
#[derive(Debug, Clone)]
pub struct DeckTable {
    decks: HashMap<DeckName, Deck>,
}

impl DeckTable {
    /// Every name in [`DeckName::ALL`] must be supplied.
    pub fn new(decks: impl IntoIterator<Item = (DeckName, Vec<Card>)>) -> CardsResult<Self> {
        let decks = decks
            .into_iter()
            .map(|(name, entries)| Deck::paired(name, entries).map(|deck| (name, deck)))
            .collect::<CardsResult<HashMap<_, _>>>()?;

        if let Some(missing) = DeckName::ALL.iter().find(|name| !decks.contains_key(name)) {
            return Err(CardsError::InvalidDeck {
                deck: missing.to_string(),
                reason: "deck missing from source".to_string(),
            });
        }

        Ok(Self { decks })
    }

    pub fn get(&self, name: DeckName) -> &Deck {
        // Presence of every name is checked in `new`.
        &self.decks[&name]
    }

    /// Case-insensitive lookup by a caller-supplied name
    pub fn find(&self, requested: &str) -> CardsResult<&Deck> {
        let name: DeckName = requested.parse()?;
        Ok(self.get(name))
    }
}
