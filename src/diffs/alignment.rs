//! LCS alignment table.
//!
//! * time: `O(MN)`
//! * space `O(MN)`
use std::ops::Index;

/// Dense `(m + 1) × (n + 1)` table where cell `(i, j)` holds the length of
/// the longest common subsequence of `old[..i]` and `new[..j]`. Row 0 and
/// column 0 are always 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentMatrix {
    columns: usize,
    cells: Vec<usize>,
}

impl AlignmentMatrix {
    pub fn new<T>(old: &[T], new: &[T]) -> Self
    where
        T: PartialEq,
    {
        let columns = new.len() + 1;
        let mut cells = vec![0; (old.len() + 1) * columns];

        for i in 1..=old.len() {
            for j in 1..=new.len() {
                cells[i * columns + j] = if old[i - 1] == new[j - 1] {
                    cells[(i - 1) * columns + j - 1] + 1
                } else {
                    cells[(i - 1) * columns + j].max(cells[i * columns + j - 1])
                };
            }
        }

        AlignmentMatrix { columns, cells }
    }

    pub fn rows(&self) -> usize { self.cells.len() / self.columns }

    pub fn columns(&self) -> usize { self.columns }

    /// Length of the longest common subsequence of the full inputs.
    pub fn lcs_len(&self) -> usize { self.cells.last().copied().unwrap_or_default() }
}

impl Index<(usize, usize)> for AlignmentMatrix {
    type Output = usize;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        debug_assert!(j < self.columns, "Column {j} out of bounds");
        &self.cells[i * self.columns + j]
    }
}
