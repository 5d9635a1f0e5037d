use super::color::Color;
use super::deck::Deck;
use crate::N_CARDS;
use crate::N_PER_COLOR;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// seed-keyed pseudo-random deck generation.
///
/// each seed yields one reproducible permutation of the canonical
/// half-and-half deck; a run over n decks walks n consecutive seeds.
/// shuffling permutes a 26/26 deck, so the composition invariant holds
/// by construction.
pub struct Shuffler;

impl Shuffler {
    const fn base() -> [Color; N_CARDS] {
        let mut cards = [Color::Black; N_CARDS];
        let mut i = N_PER_COLOR;
        while i < N_CARDS {
            cards[i] = Color::Red;
            i += 1;
        }
        cards
    }

    /// the deck belonging to one seed
    pub fn deck(seed: u64) -> Deck {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let mut cards = Self::base();
        cards.shuffle(rng);
        Deck::from(cards)
    }

    /// n seeded decks starting at seed
    pub fn decks(seed: u64, n: usize) -> impl Iterator<Item = (u64, Deck)> {
        (seed..).take(n).map(|s| (s, Self::deck(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_are_deterministic() {
        assert_eq!(Shuffler::deck(42), Shuffler::deck(42));
        assert_ne!(Shuffler::deck(42), Shuffler::deck(43));
    }

    #[test]
    fn shuffles_preserve_composition() {
        // Deck::from asserts 26/26; surviving construction is the test
        for (_, deck) in Shuffler::decks(1, 100) {
            assert_eq!(deck.to_string().chars().filter(|&c| c == '1').count(), 26);
        }
    }

    #[test]
    fn consecutive_seeds() {
        let decks = Shuffler::decks(1, 3).collect::<Vec<_>>();
        assert_eq!(decks[0].0, 1);
        assert_eq!(decks[2].0, 3);
        assert_eq!(decks[1].1, Shuffler::deck(2));
    }
}
