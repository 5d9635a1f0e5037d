use super::matrix::Matrix;
use super::tally::Tally;
use crate::Count;
use crate::N_SEQUENCES;
use crate::Probability;
use serde::Deserialize;
use serde::Serialize;

/// the run's sole output artifact: win and tie probability matrices
/// for both scoring rules plus the deck count they were estimated
/// from. plain serializable data, with the field names the downstream
/// results.json consumers expect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub cards: Matrix,
    pub tricks: Matrix,
    pub cards_ties: Matrix,
    pub tricks_ties: Matrix,
    pub n: Count,
}

/// normalization: counts become probabilities by dividing through the
/// deck count. fails on an empty tally rather than emitting NaN-filled
/// matrices. cells whose matchup was never simulated stay zero here
/// and are only meaningful after completion.
impl TryFrom<&Tally> for Report {
    type Error = anyhow::Error;
    fn try_from(tally: &Tally) -> Result<Self, Self::Error> {
        anyhow::ensure!(tally.n() > 0, "aggregation over zero decks is undefined");
        let n = tally.n() as Probability;
        let mut report = Self {
            cards: Matrix::empty(),
            tricks: Matrix::empty(),
            cards_ties: Matrix::empty(),
            tricks_ties: Matrix::empty(),
            n: tally.n(),
        };
        for i in 0..N_SEQUENCES {
            for j in (0..N_SEQUENCES).filter(|&j| j != i) {
                report.cards.set(i, j, tally.cards_wins(i, j) as Probability / n);
                report.tricks.set(i, j, tally.tricks_wins(i, j) as Probability / n);
                report.cards_ties.set(i, j, tally.cards_ties(i, j) as Probability / n);
                report.tricks_ties.set(i, j, tally.tricks_ties(i, j) as Probability / n);
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_decks_fail() {
        assert!(Report::try_from(&Tally::default()).is_err());
    }

    #[test]
    fn json_keys_match_wire_format() {
        let mut tally = Tally::default();
        tally.count();
        let report = Report::try_from(&tally).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        for key in ["cards", "tricks", "cards_ties", "tricks_ties", "n"] {
            assert!(json.get(key).is_some());
        }
        assert_eq!(json["n"], 1);
    }
}
