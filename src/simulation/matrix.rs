use crate::N_SEQUENCES;
use crate::Probability;
use serde::Deserialize;
use serde::Serialize;

/// an 8x8 grid of probabilities indexed [row][col] by sequence index.
///
/// the diagonal is undefined (nobody plays themselves) and held as NaN
/// rather than zero, so "untested" can never be mistaken for
/// "impossible". serialization goes through Option so the sentinel
/// survives JSON as null.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(
    into = "Vec<Vec<Option<Probability>>>",
    try_from = "Vec<Vec<Option<Probability>>>"
)]
pub struct Matrix([[Probability; N_SEQUENCES]; N_SEQUENCES]);

impl Matrix {
    /// zeroed off-diagonal, NaN diagonal
    pub fn empty() -> Self {
        Self(std::array::from_fn(|i| {
            std::array::from_fn(|j| match i == j {
                true => Probability::NAN,
                false => 0.,
            })
        }))
    }
    pub fn get(&self, row: usize, col: usize) -> Probability {
        self.0[row][col]
    }
    pub fn set(&mut self, row: usize, col: usize, p: Probability) {
        assert!(row != col);
        self.0[row][col] = p;
    }
}

impl From<Matrix> for Vec<Vec<Option<Probability>>> {
    fn from(matrix: Matrix) -> Self {
        matrix
            .0
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&p| match p.is_nan() {
                        true => None,
                        false => Some(p),
                    })
                    .collect()
            })
            .collect()
    }
}

impl TryFrom<Vec<Vec<Option<Probability>>>> for Matrix {
    type Error = anyhow::Error;
    fn try_from(rows: Vec<Vec<Option<Probability>>>) -> Result<Self, Self::Error> {
        anyhow::ensure!(rows.len() == N_SEQUENCES, "matrix must be 8x8");
        anyhow::ensure!(rows.iter().all(|r| r.len() == N_SEQUENCES), "matrix must be 8x8");
        Ok(Self(std::array::from_fn(|i| {
            std::array::from_fn(|j| rows[i][j].unwrap_or(Probability::NAN))
        })))
    }
}
