/*!
# Linear Algebra over GF(2)

A dense binary matrix whose rows are packed into `u64` words, so that adding one row to
another is a word-wise XOR. The cycle basis selection builds one matrix per independence test:
rows are edges, columns are the accepted cycles plus a trial column for the candidate.
*/

use std::fmt;

const WORD_BITS: usize = u64::BITS as usize;

/// Dense `rows x columns` matrix over GF(2)
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Gf2Matrix {
    rows: usize,
    columns: usize,
    words_per_row: usize,
    data: Vec<u64>,
}

impl Gf2Matrix {
    /// Creates the all-zero matrix
    pub fn zeros(rows: usize, columns: usize) -> Self {
        let words_per_row = columns.div_ceil(WORD_BITS);
        Self {
            rows,
            columns,
            words_per_row,
            data: vec![0; rows * words_per_row],
        }
    }

    /// Creates the incidence matrix with one column per entry of `columns`; column `c` has a one
    /// in every row listed in `columns[c]`.
    /// ** Panics if a row index is `>= rows` **
    ///
    /// # Example
    /// ```
    /// use ucycles::algo::Gf2Matrix;
    ///
    /// let m = Gf2Matrix::from_columns(3, [vec![0, 1], vec![1, 2]]);
    /// assert!(m.get(1, 0) && m.get(1, 1));
    /// assert!(!m.get(2, 0));
    /// ```
    pub fn from_columns<C, I>(rows: usize, columns: C) -> Self
    where
        C: IntoIterator<Item = I>,
        C::IntoIter: ExactSizeIterator,
        I: IntoIterator<Item = usize>,
    {
        let columns = columns.into_iter();
        let mut matrix = Self::zeros(rows, columns.len());
        for (c, column) in columns.enumerate() {
            for r in column {
                matrix.set(r, c);
            }
        }
        matrix
    }

    pub fn number_of_rows(&self) -> usize {
        self.rows
    }

    pub fn number_of_columns(&self) -> usize {
        self.columns
    }

    #[inline]
    fn position(&self, row: usize, column: usize) -> (usize, u64) {
        assert!(row < self.rows && column < self.columns);
        (
            row * self.words_per_row + column / WORD_BITS,
            1u64 << (column % WORD_BITS),
        )
    }

    /// Returns the entry at `(row, column)`.
    /// ** Panics if out of bounds **
    pub fn get(&self, row: usize, column: usize) -> bool {
        let (word, mask) = self.position(row, column);
        self.data[word] & mask != 0
    }

    /// Sets the entry at `(row, column)` to one.
    /// ** Panics if out of bounds **
    pub fn set(&mut self, row: usize, column: usize) {
        let (word, mask) = self.position(row, column);
        self.data[word] |= mask;
    }

    /// Flips the entry at `(row, column)`.
    /// ** Panics if out of bounds **
    pub fn flip(&mut self, row: usize, column: usize) {
        let (word, mask) = self.position(row, column);
        self.data[word] ^= mask;
    }

    /// Swaps two rows
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let w = self.words_per_row;
        for i in 0..w {
            self.data.swap(a * w + i, b * w + i);
        }
    }

    /// Adds row `src` onto row `dst`
    /// ** Panics if `src == dst` **
    pub fn xor_row_into(&mut self, src: usize, dst: usize) {
        assert_ne!(src, dst);
        self.xor_words_into(src, dst, 0);
    }

    /// Adds the words `first_word..` of row `src` onto row `dst`
    #[inline]
    fn xor_words_into(&mut self, src: usize, dst: usize, first_word: usize) {
        let w = self.words_per_row;
        for i in first_word..w {
            let word = self.data[src * w + i];
            self.data[dst * w + i] ^= word;
        }
    }

    /// Brings the first `pivot_columns` columns into row-echelon form and returns their rank.
    ///
    /// For every column a row with a one at or below the current pivot row is swapped into place
    /// and added onto all rows below that have a one in this column. Columns without such a row
    /// are skipped; the pivot row only advances for columns that received a pivot. Afterwards all
    /// rows at or beyond the returned rank are zero in the first `pivot_columns` columns.
    fn row_echelon(&mut self, pivot_columns: usize) -> usize {
        let w = self.words_per_row;
        let mut pivot_row = 0;

        for column in 0..pivot_columns {
            if pivot_row == self.rows {
                break;
            }

            let (word, mask) = (column / WORD_BITS, 1u64 << (column % WORD_BITS));
            let Some(row) = (pivot_row..self.rows).find(|&r| self.data[r * w + word] & mask != 0)
            else {
                continue;
            };

            // the pivot row is zero left of `column`, so earlier words need no update
            self.swap_rows(pivot_row, row);
            for r in pivot_row + 1..self.rows {
                if self.data[r * w + word] & mask != 0 {
                    self.xor_words_into(pivot_row, r, word);
                }
            }

            pivot_row += 1;
        }

        pivot_row
    }

    /// Returns the rank of the matrix. The matrix is left in row-echelon form.
    ///
    /// # Example
    /// ```
    /// use ucycles::algo::Gf2Matrix;
    ///
    /// // the third column is the sum of the first two
    /// let mut m = Gf2Matrix::from_columns(3, [vec![0, 1], vec![1, 2], vec![0, 2]]);
    /// assert_eq!(m.rank(), 2);
    /// ```
    pub fn rank(&mut self) -> usize {
        self.row_echelon(self.columns)
    }

    /// Returns *true* if the last (trial) column is not in the span of all other columns.
    /// The other columns need not be independent themselves. The matrix is modified.
    ///
    /// # Example
    /// ```
    /// use ucycles::algo::Gf2Matrix;
    ///
    /// let mut dependent = Gf2Matrix::from_columns(3, [vec![0, 1], vec![1, 2], vec![0, 2]]);
    /// assert!(!dependent.compute_linear_independence());
    ///
    /// let mut independent = Gf2Matrix::from_columns(3, [vec![0, 1], vec![1, 2], vec![2]]);
    /// assert!(independent.compute_linear_independence());
    /// ```
    pub fn compute_linear_independence(&mut self) -> bool {
        if self.columns == 0 {
            return false;
        }

        let trial = self.columns - 1;
        let rank = self.row_echelon(trial);
        let (word, mask) = (trial / WORD_BITS, 1u64 << (trial % WORD_BITS));
        (rank..self.rows).any(|r| self.data[r * self.words_per_row + word] & mask != 0)
    }
}

impl fmt::Debug for Gf2Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            let line: String = (0..self.columns)
                .map(|c| if self.get(r, c) { '1' } else { '0' })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    /// Rank by inserting the columns into a xor basis indexed by their highest set bit
    fn xor_basis_rank(columns: &[u128]) -> usize {
        let mut basis = [0u128; 128];
        let mut rank = 0;
        for &column in columns {
            let mut x = column;
            while x != 0 {
                let top = 127 - x.leading_zeros() as usize;
                if basis[top] == 0 {
                    basis[top] = x;
                    rank += 1;
                    break;
                }
                x ^= basis[top];
            }
        }
        rank
    }

    fn matrix_of(rows: usize, columns: &[u128]) -> Gf2Matrix {
        Gf2Matrix::from_columns(
            rows,
            columns
                .iter()
                .map(|&c| (0..rows).filter(move |&r| (c >> r) & 1 == 1)),
        )
    }

    #[test]
    fn set_get_flip() {
        let mut m = Gf2Matrix::zeros(3, 70);
        m.set(2, 69);
        m.set(0, 1);
        assert!(m.get(2, 69));
        assert!(!m.get(2, 68));

        m.flip(2, 69);
        assert!(!m.get(2, 69));

        m.swap_rows(0, 2);
        assert!(m.get(2, 1));
        assert!(!m.get(0, 1));

        m.set(0, 1);
        m.xor_row_into(0, 2);
        assert!(!m.get(2, 1));
    }

    #[test]
    fn skipped_pivot_columns() {
        // column 1 equals column 0 and receives no pivot; the trial column is column 0 + e_2
        let mut m = Gf2Matrix::from_columns(3, [vec![0, 1], vec![0, 1], vec![0, 1, 2]]);
        assert!(m.compute_linear_independence());

        // trial equals the repeated column
        let mut m = Gf2Matrix::from_columns(3, [vec![0, 1], vec![0, 1], vec![0, 1]]);
        assert!(!m.compute_linear_independence());

        // an all-zero trial column is never independent
        let mut m = Gf2Matrix::from_columns(2, [vec![0], Vec::new()]);
        assert!(!m.compute_linear_independence());
    }

    #[test]
    fn single_trial_column() {
        let mut m = Gf2Matrix::from_columns(2, [vec![1]]);
        assert!(m.compute_linear_independence());
    }

    #[test]
    fn wide_matrices_span_several_words() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for _ in 0..100 {
            let rows = rng.random_range(1..=128);
            let num_columns = rng.random_range(60..=200);

            let columns: Vec<u128> = (0..num_columns)
                .map(|_| {
                    (0..rows).fold(0u128, |acc, r| {
                        if rng.random_bool(0.1) {
                            acc | (1 << r)
                        } else {
                            acc
                        }
                    })
                })
                .collect();

            let expected = xor_basis_rank(&columns);
            assert_eq!(matrix_of(rows, &columns).rank(), expected);

            let (_, basis) = columns.split_last().unwrap();
            assert_eq!(
                matrix_of(rows, &columns).compute_linear_independence(),
                xor_basis_rank(basis) < expected
            );
        }

        // the trial column is the only one in the third word
        let mut m =
            Gf2Matrix::from_columns(2, (0..129).map(|c| if c < 128 { vec![0] } else { vec![1] }));
        assert!(m.compute_linear_independence());
        let mut m = Gf2Matrix::from_columns(2, (0..129).map(|_| vec![0, 1]));
        assert!(!m.compute_linear_independence());
    }

    #[test]
    fn rank_matches_xor_basis() {
        let rng = &mut Pcg64Mcg::seed_from_u64(42);

        for _ in 0..500 {
            let rows = rng.random_range(1..=100);
            let num_columns = rng.random_range(1..=20);
            let density = rng.random_range(0.05..0.6);

            let columns: Vec<u128> = (0..num_columns)
                .map(|_| {
                    (0..rows).fold(0u128, |acc, r| {
                        if rng.random_bool(density) {
                            acc | (1 << r)
                        } else {
                            acc
                        }
                    })
                })
                .collect();

            let expected = xor_basis_rank(&columns);
            assert_eq!(matrix_of(rows, &columns).rank(), expected);

            let (_, basis) = columns.split_last().unwrap();
            let independent = xor_basis_rank(basis) < expected;
            assert_eq!(
                matrix_of(rows, &columns).compute_linear_independence(),
                independent
            );
        }
    }
}
