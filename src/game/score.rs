use crate::BASE_PILE;
use crate::N_CARDS;
use crate::N_PATTERN;
use crate::cards::deck::Deck;
use crate::cards::pair::Pair;

/// raw totals from playing one deck against one matchup, before any
/// winner is declared. cards and tricks are tallied for both players
/// in the same single pass.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Score {
    pub p1_cards: u16,
    pub p2_cards: u16,
    pub p1_tricks: u16,
    pub p2_tricks: u16,
}

/// the deck scorer. one deterministic left-to-right scan over a shared
/// cursor: both players watch the same 3-card window. the pile counts
/// cards dealt since the last trick, seeded at BASE_PILE and bumped
/// before each window test; whoever's sequence matches collects the
/// pile and the matched cards leave play (cursor jumps by 3), otherwise
/// the cursor slides by 1. the scan stops where no full window remains,
/// so trailing cards that never complete a match are awarded to no one;
/// that is a rule of the source game, not lost value.
impl From<(Deck, Pair)> for Score {
    fn from((deck, pair): (Deck, Pair)) -> Self {
        let mut score = Self::default();
        let mut pile = BASE_PILE;
        let mut i = 0;
        while i + N_PATTERN <= N_CARDS {
            pile += 1;
            let window = deck.window(i);
            if window == pair.row() {
                score.p1_cards += pile;
                score.p1_tricks += 1;
                pile = BASE_PILE;
                i += N_PATTERN;
            } else if window == pair.col() {
                score.p2_cards += pile;
                score.p2_tricks += 1;
                pile = BASE_PILE;
                i += N_PATTERN;
            } else {
                i += 1;
            }
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::sequence::Sequence;
    use crate::cards::shuffle::Shuffler;

    fn pair(row: &str, col: &str) -> Pair {
        Pair::try_from((
            Sequence::try_from(row).unwrap(),
            Sequence::try_from(col).unwrap(),
        ))
        .unwrap()
    }

    #[test]
    fn split_deck() {
        // 26 zeros then 26 ones, 000 vs 111. player 1 sweeps 8 tricks
        // of 3 off the front; player 2's first trick at i=26 collects a
        // pile of 5 (positions 24 and 25 were slid past), then 7 more
        // tricks of 3; cards 50 and 51 go unawarded.
        let deck = format!("{}{}", "0".repeat(26), "1".repeat(26));
        let deck = Deck::try_from(deck.as_str()).unwrap();
        let score = Score::from((deck, pair("000", "111")));
        assert_eq!(score.p1_cards, 24);
        assert_eq!(score.p2_cards, 26);
        assert_eq!(score.p1_tricks, 8);
        assert_eq!(score.p2_tricks, 8);
    }

    #[test]
    fn alternating_deck() {
        // "01" x 26, 010 vs 101. matches alternate every 3 positions
        // with no slides: p1 at 0,6,..,48 (9 tricks), p2 at 3,9,..,45
        // (8 tricks), every trick worth exactly 3. card 51 is never
        // part of a full window and goes unawarded.
        let deck = "01".repeat(26);
        let deck = Deck::try_from(deck.as_str()).unwrap();
        let score = Score::from((deck, pair("010", "101")));
        assert_eq!(score.p1_cards, 27);
        assert_eq!(score.p2_cards, 24);
        assert_eq!(score.p1_tricks, 9);
        assert_eq!(score.p2_tricks, 8);
    }

    #[test]
    fn scoring_is_pure() {
        let deck = Shuffler::deck(7);
        let matchup = pair("001", "110");
        assert_eq!(Score::from((deck, matchup)), Score::from((deck, matchup)));
    }

    #[test]
    fn conservation() {
        // every awarded pile corresponds to dealt cards, so totals
        // never exceed the deck; tricks cap at ceil(50 / 3)
        for (_, deck) in Shuffler::decks(1, 200) {
            for matchup in Pair::unique() {
                let score = Score::from((deck, matchup));
                assert!(score.p1_cards + score.p2_cards <= 52);
                assert!(score.p1_tricks + score.p2_tricks <= 17);
            }
        }
    }

    #[test]
    fn inverting_deck_and_patterns_is_identity() {
        for (_, deck) in Shuffler::decks(1, 50) {
            let matchup = pair("011", "101");
            assert_eq!(
                Score::from((deck, matchup)),
                Score::from((deck.invert(), matchup.invert()))
            );
        }
    }
}
