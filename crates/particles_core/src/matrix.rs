use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pairwise interaction coefficients, one per ordered color pair.
///
/// `get(a, b)` is the coefficient applied when a particle of color `a` is
/// influenced by a particle of color `b`; the table is not required to be
/// symmetric. Entries are constrained to [-1, 1] by every constructor and
/// mutator, so a value read from a live matrix is always in range.
///
/// Serialization is a row-major nested array of numbers; deserialization
/// routes through [`InteractionMatrix::from_rows`], so any matrix that
/// parses has already passed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f32>>", into = "Vec<Vec<f32>>")]
pub struct InteractionMatrix {
    size: usize,
    // Row-major: values[a * size + b]
    values: Vec<f32>,
}

/// Rejection reasons at the matrix validation boundary
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Some row's length differs from the row count
    NotSquare { rows: usize, cols: usize },
    /// An entry falls outside [-1, 1]
    OutOfRange { row: usize, col: usize, value: f32 },
    /// An entry is NaN or infinite
    NonFinite { row: usize, col: usize },
    /// A valid matrix whose dimension does not match the live color count
    SizeMismatch { expected: usize, found: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare { rows, cols } => {
                write!(f, "matrix is not square: {rows} rows but a row of length {cols}")
            }
            Self::OutOfRange { row, col, value } => {
                write!(f, "entry [{row}][{col}] = {value} is outside [-1, 1]")
            }
            Self::NonFinite { row, col } => {
                write!(f, "entry [{row}][{col}] is not a finite number")
            }
            Self::SizeMismatch { expected, found } => {
                write!(f, "matrix is {found}x{found} but the simulation has {expected} colors")
            }
        }
    }
}

impl std::error::Error for MatrixError {}

impl InteractionMatrix {
    /// Random matrix: each cell an independent uniform draw from [-1, 1]
    pub fn random(size: usize, rng: &mut impl Rng) -> Self {
        let values = (0..size * size).map(|_| rng.gen_range(-1.0..=1.0)).collect();
        Self { size, values }
    }

    /// Validating constructor for untrusted input (edited text, loaded
    /// file). Rejects empty or non-square tables, non-finite entries, and
    /// entries outside [-1, 1]; nothing is constructed on rejection.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        if size == 0 {
            return Err(MatrixError::NotSquare { rows: 0, cols: 0 });
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(MatrixError::NotSquare { rows: size, cols: row.len() });
            }
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(MatrixError::NonFinite { row: i, col: j });
                }
                if !(-1.0..=1.0).contains(&value) {
                    return Err(MatrixError::OutOfRange { row: i, col: j, value });
                }
            }
        }
        Ok(Self {
            size,
            values: rows.into_iter().flatten().collect(),
        })
    }

    /// Matrix dimension (the number of colors it covers)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Coefficient applied when color `a` is influenced by color `b`
    pub fn get(&self, a: usize, b: usize) -> f32 {
        self.values[a * self.size + b]
    }

    /// Edit a single cell. The new value must satisfy the same constraints
    /// as generation; out-of-range values are an error, not clamped.
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<(), MatrixError> {
        if !value.is_finite() {
            return Err(MatrixError::NonFinite { row, col });
        }
        if !(-1.0..=1.0).contains(&value) {
            return Err(MatrixError::OutOfRange { row, col, value });
        }
        self.values[row * self.size + col] = value;
        Ok(())
    }

    /// Row-major export, the shape serialization and editing work with
    pub fn rows(&self) -> Vec<Vec<f32>> {
        self.values.chunks(self.size).map(|row| row.to_vec()).collect()
    }
}

impl TryFrom<Vec<Vec<f32>>> for InteractionMatrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f32>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<InteractionMatrix> for Vec<Vec<f32>> {
    fn from(matrix: InteractionMatrix) -> Self {
        matrix.rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn random_always_has_full_shape_and_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            let matrix = InteractionMatrix::random(6, &mut rng);
            let rows = matrix.rows();
            assert_eq!(rows.len(), 6);
            for row in &rows {
                assert_eq!(row.len(), 6);
                for &value in row {
                    assert!((-1.0..=1.0).contains(&value));
                }
            }
        }
    }

    #[test]
    fn from_rows_accepts_a_valid_table() {
        let rows = vec![vec![0.5, -1.0], vec![1.0, 0.0]];
        let matrix = InteractionMatrix::from_rows(rows.clone()).unwrap();
        assert_eq!(matrix.size(), 2);
        assert_eq!(matrix.get(0, 1), -1.0);
        assert_eq!(matrix.rows(), rows);
    }

    #[test]
    fn from_rows_rejects_bad_shapes() {
        assert_eq!(
            InteractionMatrix::from_rows(vec![]),
            Err(MatrixError::NotSquare { rows: 0, cols: 0 })
        );
        // Wrong row length
        let ragged = vec![vec![0.0, 0.0], vec![0.0]];
        assert_eq!(
            InteractionMatrix::from_rows(ragged),
            Err(MatrixError::NotSquare { rows: 2, cols: 1 })
        );
        // Rectangular: 1 row of 2 entries
        let wide = vec![vec![0.0, 0.0]];
        assert_eq!(
            InteractionMatrix::from_rows(wide),
            Err(MatrixError::NotSquare { rows: 1, cols: 2 })
        );
    }

    #[test]
    fn from_rows_rejects_bad_entries() {
        let too_big = vec![vec![0.0, 1.5], vec![0.0, 0.0]];
        assert_eq!(
            InteractionMatrix::from_rows(too_big),
            Err(MatrixError::OutOfRange { row: 0, col: 1, value: 1.5 })
        );
        let nan = vec![vec![0.0, f32::NAN], vec![0.0, 0.0]];
        assert_eq!(
            InteractionMatrix::from_rows(nan),
            Err(MatrixError::NonFinite { row: 0, col: 1 })
        );
        let inf = vec![vec![f32::INFINITY]];
        assert_eq!(
            InteractionMatrix::from_rows(inf),
            Err(MatrixError::NonFinite { row: 0, col: 0 })
        );
    }

    #[test]
    fn set_validates_and_leaves_cell_unchanged_on_rejection() {
        let mut matrix = InteractionMatrix::from_rows(vec![vec![0.25]]).unwrap();
        assert!(matrix.set(0, 0, 2.0).is_err());
        assert!(matrix.set(0, 0, f32::NAN).is_err());
        assert_eq!(matrix.get(0, 0), 0.25);

        matrix.set(0, 0, -0.75).unwrap();
        assert_eq!(matrix.get(0, 0), -0.75);
    }
}
