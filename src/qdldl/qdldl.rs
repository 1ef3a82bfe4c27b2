#![allow(non_snake_case)]
use crate::algebra::*;
use core::cmp::{max, min};
use derive_builder::Builder;
use std::iter::zip;
use thiserror::Error;

/// Error codes returnable from [`QDLDLFactorisation`](QDLDLFactorisation) factor operations

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QDLDLError {
    #[error("Matrix dimension fields are incompatible")]
    IncompatibleDimension,
    #[error("Matrix has a zero column")]
    EmptyColumn,
    #[error("Matrix is not upper triangular")]
    NotUpperTriangular,
    #[error("Matrix factorization produced a zero pivot")]
    ZeroPivot,
    #[error("Invalid permutation vector")]
    InvalidPermutation,
    #[error("AMD ordering failed")]
    AmdFailure,
}

/// Required settings for [`QDLDLFactorisation`](QDLDLFactorisation)

#[derive(Builder, Debug, Clone)]
pub struct QDLDLSettings {
    /// scaling applied to AMD's default dense row threshold
    #[builder(default = "1.0")]
    amd_dense_scale: f64,
    /// user supplied elimination ordering.  AMD is used if absent
    #[builder(default = "None", setter(strip_option))]
    perm: Option<Vec<usize>>,
}

impl Default for QDLDLSettings {
    fn default() -> QDLDLSettings {
        QDLDLSettings {
            amd_dense_scale: 1.0,
            perm: None,
        }
    }
}

/// Performs $LDL^T$ factorization of a symmetric matrix given by its upper triangle

#[derive(Debug)]
pub struct QDLDLFactorisation<T = f64> {
    /// permutation vector.  `perm[k]` is the input index eliminated at step `k`
    pub perm: Vec<usize>,
    /// strictly lower triangular factor in the permuted index space.
    /// Row indices increase within each column.
    pub L: CscMatrix<T>,
    /// D in A = LDL^T
    pub D: Vec<T>,
    // number of positive values in D
    positive_inertia: usize,
}

impl<T> QDLDLFactorisation<T>
where
    T: FloatT,
{
    pub fn new(
        Ain: &CscMatrix<T>,
        opts: Option<QDLDLSettings>,
    ) -> Result<QDLDLFactorisation<T>, QDLDLError> {
        //sanity check on structure
        check_structure(Ain)?;
        _qdldl_new(Ain, opts)
    }

    /// number of strictly positive entries in `D`
    pub fn positive_inertia(&self) -> usize {
        self.positive_inertia
    }

    /// true if every pivot of the factorisation is positive
    pub fn is_positive_definite(&self) -> bool {
        self.positive_inertia == self.D.len()
    }
}

fn check_structure<T: FloatT>(A: &CscMatrix<T>) -> Result<(), QDLDLError> {
    if !A.is_square() {
        return Err(QDLDLError::IncompatibleDimension);
    }

    if !A.is_triu() {
        return Err(QDLDLError::NotUpperTriangular);
    }

    //Error if A doesn't have at least one entry in every column
    if !A.colptr.windows(2).all(|c| c[0] < c[1]) {
        return Err(QDLDLError::EmptyColumn);
    }

    Ok(())
}

fn _qdldl_new<T: FloatT>(
    Ain: &CscMatrix<T>,
    opts: Option<QDLDLSettings>,
) -> Result<QDLDLFactorisation<T>, QDLDLError> {
    let n = Ain.nrows();

    //get default values if no options passed at all
    let opts = opts.unwrap_or_default();

    //Use AMD ordering if a user-provided ordering
    //is not supplied.   For no ordering at all, the
    //user would need to pass (0..n).collect() explicitly
    let (perm, iperm);
    if let Some(_perm) = opts.perm {
        if _perm.len() != n {
            return Err(QDLDLError::InvalidPermutation);
        }
        iperm = _invperm(&_perm)?;
        perm = _perm;
    } else {
        (perm, iperm) = _get_amd_ordering(Ain, opts.amd_dense_scale)?;
    }

    //permute to (another) upper triangular matrix
    let A = _permute_symmetric(Ain, &iperm);

    // compute elimination tree and column counts of L
    let mut etree = vec![0; n];
    let mut Lnz = vec![0; n];
    let mut iwork = vec![0; n];
    _etree(n, &A.colptr, &A.rowval, &mut iwork, &mut Lnz, &mut etree);

    //total nonzeros in factorization
    let sumLnz = Lnz.iter().sum();

    // allocate space for the L matrix row indices and data
    let mut L = CscMatrix::spalloc((n, n), sumLnz);
    let mut D = vec![T::zero(); n];

    // factor the matrix into A = LDL^T
    let positive_inertia = _factor_inner(&A, &mut L, &mut D, &Lnz, &etree)?;

    Ok(QDLDLFactorisation {
        perm,
        L,
        D,
        positive_inertia,
    })
}

const QDLDL_UNKNOWN: usize = usize::MAX;
const QDLDL_USED: bool = true;
const QDLDL_UNUSED: bool = false;

// Compute the elimination tree for a symmetric matrix
// in compressed sparse column form.

fn _etree(
    n: usize,
    Ap: &[usize],
    Ai: &[usize],
    work: &mut [usize],
    Lnz: &mut [usize],
    etree: &mut [usize],
) {
    // zero out Lnz and work.  Set all etree values to unknown
    work.fill(0);
    Lnz.fill(0);
    etree.fill(QDLDL_UNKNOWN);

    // compute the elimination tree
    for j in 0..n {
        work[j] = j;
        for istart in Ai.iter().take(Ap[j + 1]).skip(Ap[j]) {
            let mut i = *istart;

            while work[i] != j {
                if etree[i] == QDLDL_UNKNOWN {
                    etree[i] = j;
                }
                Lnz[i] += 1; // nonzeros in this column
                work[i] = j;
                i = etree[i];
            }
        }
    }
}

// Row-by-row up-looking factorisation.  Returns the number of
// positive entries in D, or an error on an exactly zero pivot.

fn _factor_inner<T: FloatT>(
    A: &CscMatrix<T>,
    L: &mut CscMatrix<T>,
    D: &mut [T],
    Lnz: &[usize],
    etree: &[usize],
) -> Result<usize, QDLDLError> {
    let n = A.n;
    let (Ap, Ai, Ax) = (&A.colptr, &A.rowval, &A.nzval);
    let (Lp, Li, Lx) = (&mut L.colptr, &mut L.rowval, &mut L.nzval);

    let mut positive_values_in_D = 0;

    // working memory
    let mut y_markers = vec![QDLDL_UNUSED; n];
    let mut y_idx = vec![0usize; n];
    let mut elim_buffer = vec![0usize; n];
    let mut y_vals = vec![T::zero(); n];
    let mut Dinv = vec![T::zero(); n];

    //set Lp to cumsum(Lnz), starting from zero
    Lp[0] = 0;
    let mut acc = 0;
    for (Lp, Lnz) in zip(&mut Lp[1..], Lnz) {
        *Lp = acc + Lnz;
        acc = *Lp;
    }

    // in each column of L, the next available space
    // to start is just the first space in the column
    let mut next_colspace = Lp[0..n].to_vec();

    for k in 0..n {
        // NB : For each k, we compute a solution to
        // y = L(0:(k-1),0:k-1))\b, where b is the kth
        // column of A that sits above the diagonal.
        // The solution y is then the kth row of L,
        // with an implied '1' at the diagonal entry.

        let mut nnz_y = 0;

        // This loop determines where nonzeros
        // will go in the kth row of L, but doesn't
        // compute the actual values
        for i in Ap[k]..Ap[k + 1] {
            let bidx = Ai[i];

            if bidx == k {
                D[k] = Ax[i];
                continue;
            }

            y_vals[bidx] = Ax[i];

            if y_markers[bidx] == QDLDL_UNUSED {
                y_markers[bidx] = QDLDL_USED;
                elim_buffer[0] = bidx;
                let mut nnz_e = 1;

                let mut next_idx = etree[bidx];

                while next_idx != QDLDL_UNKNOWN && next_idx < k {
                    if y_markers[next_idx] == QDLDL_USED {
                        break;
                    }
                    y_markers[next_idx] = QDLDL_USED;
                    elim_buffer[nnz_e] = next_idx;
                    next_idx = etree[next_idx];
                    nnz_e += 1;
                }

                // now put the buffered elimination list into
                // my current ordering in reverse order
                while nnz_e != 0 {
                    nnz_e -= 1;
                    y_idx[nnz_y] = elim_buffer[nnz_e];
                    nnz_y += 1;
                }
            }
        }

        // This for loop places nonzeros values in the k^th row
        for i in (0..nnz_y).rev() {
            let cidx = y_idx[i];
            let tmp_idx = next_colspace[cidx];

            let y_vals_cidx = y_vals[cidx];
            for j in Lp[cidx]..tmp_idx {
                y_vals[Li[j]] -= Lx[j] * y_vals_cidx;
            }
            Lx[tmp_idx] = y_vals_cidx * Dinv[cidx];
            D[k] -= y_vals_cidx * Lx[tmp_idx];

            // record which row it went into
            Li[tmp_idx] = k;
            next_colspace[cidx] += 1;

            y_vals[cidx] = T::zero();
            y_markers[cidx] = QDLDL_UNUSED;
        }

        // If we hit a zero, we can't factor this matrix, so abort
        if D[k] == T::zero() {
            return Err(QDLDLError::ZeroPivot);
        }
        if D[k] > T::zero() {
            positive_values_in_D += 1;
        }
        Dinv[k] = T::recip(D[k]);
    }

    Ok(positive_values_in_D)
}

// Construct an inverse permutation from a permutation
fn _invperm(p: &[usize]) -> Result<Vec<usize>, QDLDLError> {
    let mut b = vec![QDLDL_UNKNOWN; p.len()];

    for (i, j) in p.iter().enumerate() {
        if *j < p.len() && b[*j] == QDLDL_UNKNOWN {
            b[*j] = i;
        } else {
            return Err(QDLDLError::InvalidPermutation);
        }
    }
    Ok(b)
}

// Given a sparse symmetric matrix `A` (with only upper triangular entries), return
// permuted sparse symmetric matrix `P` (also only upper triangular) given the
// inverse permutation vector `iperm`.
// following the book: Timothy Davis - Direct Methods for Sparse Linear Systems

fn _permute_symmetric<T: FloatT>(A: &CscMatrix<T>, iperm: &[usize]) -> CscMatrix<T> {
    let n = A.nrows();
    let mut P = CscMatrix::<T>::spalloc((n, n), A.nnz());
    let (Ar, Ac, Av) = (&A.rowval, &A.colptr, &A.nzval);

    // 1. count number of entries that each column of P will have
    let mut num_entries = vec![0; n];
    for colA in 0..n {
        let colP = iperm[colA];
        for &rowA in &Ar[Ac[colA]..Ac[colA + 1]] {
            if rowA <= colA {
                num_entries[max(iperm[rowA], colP)] += 1;
            }
        }
    }

    // 2. calculate permuted colptr from number of entries
    P.colptr[0] = 0;
    let mut acc = 0;
    for (Pckp1, ne) in zip(&mut P.colptr[1..], &num_entries) {
        *Pckp1 = acc + ne;
        acc = *Pckp1;
    }

    // reuse this memory to keep track of free entries in rowval
    let mut row_starts = num_entries;
    row_starts.copy_from_slice(&P.colptr[0..n]);

    // 3. permute the row entries and position of corresponding nzval
    for colA in 0..n {
        let colP = iperm[colA];
        for rowA_idx in Ac[colA]..Ac[colA + 1] {
            let rowA = Ar[rowA_idx];
            if rowA <= colA {
                let rowP = iperm[rowA];
                let col_idx = max(colP, rowP);
                let rowP_idx = row_starts[col_idx];

                P.rowval[rowP_idx] = min(colP, rowP);
                P.nzval[rowP_idx] = Av[rowA_idx];
                row_starts[col_idx] += 1;
            }
        }
    }
    P
}

fn _get_amd_ordering<T: FloatT>(
    A: &CscMatrix<T>,
    amd_dense_scale: f64,
) -> Result<(Vec<usize>, Vec<usize>), QDLDLError> {
    // computes a permutation for A using AMD default parameters
    let mut control = amd::Control::default();
    control.dense *= amd_dense_scale;
    let (perm, iperm, _info) = amd::order(A.nrows(), &A.colptr, &A.rowval, &control)
        .map_err(|_| QDLDLError::AmdFailure)?;
    Ok((perm, iperm))
}

//configure tests of internals
#[path = "test.rs"]
#[cfg(test)]
mod test;
