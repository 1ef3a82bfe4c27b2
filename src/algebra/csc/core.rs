#![allow(non_snake_case)]

use crate::algebra::{FloatT, ShapedMatrix};

/// Sparse matrix in standard Compressed Sparse Column (CSC) format
///
/// __Example usage__ : To construct the 3 x 3 upper triangular matrix
/// ```text
/// A = [2.  1.  ⋅ ]
///     [ ⋅  3.  1.]
///     [ ⋅   ⋅  2.]
/// ```
///
/// ```no_run
/// use chordmerge::algebra::CscMatrix;
///
/// let A : CscMatrix<f64> = CscMatrix::new(
///    3,                          // m
///    3,                          // n
///    vec![0, 1, 3, 5],           //colptr
///    vec![0, 0, 1, 1, 2],        //rowval
///    vec![2., 1., 3., 1., 2.],   //nzval
///  );
///
/// assert!(A.is_triu());
/// ```
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CscMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// CSC format column pointer.
    ///
    /// Ths field should have length `n+1`. The last entry corresponds
    /// to the the number of nonzeros and should agree with the lengths
    /// of the `rowval` and `nzval` fields.
    pub colptr: Vec<usize>,
    /// vector of row indices
    pub rowval: Vec<usize>,
    /// vector of non-zero matrix elements
    pub nzval: Vec<T>,
}

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// `CscMatrix` constructor.
    ///
    /// # Panics
    /// Makes rudimentary dimensional compatibility checks and panics on
    /// failure.   This constructor does __not__
    /// ensure that rows indices are all in bounds or that data is arranged
    /// such that entries within each column appear in order of increasing
    /// row index.   Responsibility for ensuring these conditions hold
    /// is left to the caller.
    pub fn new(m: usize, n: usize, colptr: Vec<usize>, rowval: Vec<usize>, nzval: Vec<T>) -> Self {
        assert_eq!(rowval.len(), nzval.len());
        assert_eq!(colptr.len(), n + 1);
        assert_eq!(colptr[n], rowval.len());
        CscMatrix {
            m,
            n,
            colptr,
            rowval,
            nzval,
        }
    }

    /// allocate space for a sparse matrix with `nnz` elements
    pub fn spalloc(size: (usize, usize), nnz: usize) -> Self {
        let (m, n) = size;
        let mut colptr = vec![0; n + 1];
        let rowval = vec![0; nnz];
        let nzval = vec![T::zero(); nnz];
        colptr[n] = nnz;

        CscMatrix::new(m, n, colptr, rowval, nzval)
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.colptr[self.n]
    }

    /// True if the matrix is upper triangular
    pub fn is_triu(&self) -> bool {
        // check lower triangle for any structural entries, regardless
        // of the values that may be assigned to them
        (0..self.ncols()).all(|col| {
            let rows = &self.rowval[self.colptr[col]..self.colptr[col + 1]];
            rows.iter().all(|&row| row <= col)
        })
    }

    /// Row indices of the structural nonzeros in column `col`
    pub fn column_rows(&self, col: usize) -> &[usize] {
        &self.rowval[self.colptr[col]..self.colptr[col + 1]]
    }
}

impl<T> ShapedMatrix for CscMatrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

#[test]
fn test_csc_triu_and_columns() {
    // A =
    //[ ⋅   4.0    ⋅ ]
    //[1.0  5.0    ⋅ ]
    //[ ⋅   6.0  10.0]
    let A = CscMatrix::new(
        3,                           // m
        3,                           // n
        vec![0, 1, 4, 5],            // colptr
        vec![1, 0, 1, 2, 2],         // rowval
        vec![1., 4., 5., 6., 10.],   // nzval
    );
    assert!(!A.is_triu());
    assert_eq!(A.column_rows(1), &[0, 1, 2]);

    let B: CscMatrix<f64> = CscMatrix::new(
        3,
        3,
        vec![0, 1, 3, 5],
        vec![0, 0, 1, 1, 2],
        vec![2., 1., 3., 1., 2.],
    );
    assert!(B.is_triu());
    assert_eq!(B.nnz(), 5);
    assert_eq!(B.column_rows(2), &[1, 2]);

    let empty: CscMatrix<f64> = CscMatrix::spalloc((2, 2), 0);
    assert!(empty.is_triu());
    assert!(empty.column_rows(0).is_empty());
}
