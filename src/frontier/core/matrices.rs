//! core::matrices — index-subset reduction and free-block inversion.
//!
//! Purpose
//! -------
//! Provide the pure numerical utilities the turning-point engine calls once
//! per iteration: reducing the covariance/mean/weight containers to the
//! current free and bounded index subsets, and inverting the free-block
//! covariance.
//!
//! Key behaviors
//! -------------
//! - Reduce a matrix to chosen rows and columns, or a vector to chosen
//!   indices, returning `None` when a subset is empty — an explicit
//!   "no data" sentinel, since the lambda/weight formulas branch on whether
//!   any bounded assets exist.
//! - Invert the free-block covariance by copying it into a
//!   `nalgebra::DMatrix` and calling `try_inverse`; a singular block is
//!   surfaced as a typed error, never a silent degradation.
//! - Bundle the per-iteration sub-matrices in [`FreeBlocks`] so the engine
//!   slices the problem exactly once per trial free-set.
//!
//! Invariants & assumptions
//! ------------------------
//! - Index subsets contain in-range, non-repeating indices; the engine owns
//!   that invariant and violations are programmer errors (panics via
//!   indexing), not recoverable conditions.
//! - The free-set ordering is preserved: row/column `k` of every reduced
//!   container corresponds to `free[k]`.
//!
//! Conventions
//! -----------
//! - `ndarray` containers at the interface; `nalgebra` only inside the
//!   inversion, copied column-by-column to match `DMatrix` storage.
//! - No I/O, no logging, no state.
use crate::frontier::core::problem::FrontierProblem;
use crate::frontier::errors::{FrontierError, FrontierResult};
use nalgebra::DMatrix;
use ndarray::{Array1, Array2};

/// Reduce a matrix to the given rows and columns.
///
/// Returns `None` when either subset is empty, as downstream formulas treat
/// "no bounded assets" as a distinct case rather than a 0-sized matrix.
pub fn reduce_matrix(
    matrix: &Array2<f64>, rows: &[usize], cols: &[usize],
) -> Option<Array2<f64>> {
    if rows.is_empty() || cols.is_empty() {
        return None;
    }
    let mut out = Array2::<f64>::zeros((rows.len(), cols.len()));
    for (i, &row) in rows.iter().enumerate() {
        for (j, &col) in cols.iter().enumerate() {
            out[[i, j]] = matrix[[row, col]];
        }
    }
    Some(out)
}

/// Reduce a vector to the given indices; `None` when the subset is empty.
pub fn reduce_vector(vector: &Array1<f64>, indices: &[usize]) -> Option<Array1<f64>> {
    if indices.is_empty() {
        return None;
    }
    Some(Array1::from_iter(indices.iter().map(|&i| vector[i])))
}

/// Invert a square block via `nalgebra`.
///
/// Parameters
/// ----------
/// - `block`: `&Array2<f64>`
///   Square free-block covariance. Copied into a `DMatrix` column by column,
///   matching its internal storage.
///
/// Returns
/// -------
/// `FrontierResult<Array2<f64>>`
///   The inverse in `ndarray` form.
///
/// Errors
/// ------
/// - `FrontierError::SingularBlock`
///   When `try_inverse` reports the block as non-invertible. Near-singular
///   blocks may still invert; the resulting artifacts are repaired later by
///   the bound-violation purge.
pub fn invert_block(block: &Array2<f64>) -> FrontierResult<Array2<f64>> {
    let n = block.nrows();
    let mut dense = DMatrix::<f64>::zeros(n, n);
    for j in 0..n {
        for i in 0..n {
            dense[(i, j)] = block[[i, j]];
        }
    }
    match dense.try_inverse() {
        Some(inverse) => {
            let mut out = Array2::<f64>::zeros((n, n));
            for j in 0..n {
                for i in 0..n {
                    out[[i, j]] = inverse[(i, j)];
                }
            }
            Ok(out)
        }
        None => Err(FrontierError::SingularBlock { size: n }),
    }
}

/// Complement of the free set in `0..n`, in ascending index order.
///
/// Ascending order keeps case-B candidate scans deterministic.
pub fn bounded_set(n: usize, free: &[usize]) -> Vec<usize> {
    (0..n).filter(|i| !free.contains(i)).collect()
}

/// FreeBlocks — per-iteration sub-matrices for a candidate free set.
///
/// Holds the free-block covariance inverse, the cross-covariance to bounded
/// assets, the free-asset means, and the bounded-asset weights. The two
/// `Option` fields are `None` exactly when no asset is bounded.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeBlocks {
    /// Inverse of the free-block covariance, ordered like the free set.
    pub covar_f_inv: Array2<f64>,
    /// Cross-covariance between free rows and bounded columns.
    pub covar_fb: Option<Array2<f64>>,
    /// Expected returns of the free assets.
    pub mean_f: Array1<f64>,
    /// Current weights of the bounded assets.
    pub w_b: Option<Array1<f64>>,
}

/// Slice the problem to a candidate free set and invert its covariance block.
///
/// Parameters
/// ----------
/// - `problem`: the immutable problem instance.
/// - `free`: ordered candidate free set (non-empty).
/// - `weights`: the full current weight vector, read only at bounded indices.
///
/// Returns
/// -------
/// `FrontierResult<FreeBlocks>`
///   The reduced containers; `covar_fb` / `w_b` are `None` when every asset
///   is free.
///
/// Errors
/// ------
/// - `FrontierError::SingularBlock`
///   Propagated from [`invert_block`] for a non-invertible block; fatal for
///   this trial.
pub fn free_blocks(
    problem: &FrontierProblem, free: &[usize], weights: &Array1<f64>,
) -> FrontierResult<FreeBlocks> {
    let bounded = bounded_set(problem.n_assets(), free);
    // A non-empty free set always yields Some here.
    let covar_f = reduce_matrix(problem.covar(), free, free)
        .ok_or(FrontierError::SingularBlock { size: 0 })?;
    let mean_f = reduce_vector(problem.mean(), free)
        .ok_or(FrontierError::SingularBlock { size: 0 })?;
    let covar_f_inv = invert_block(&covar_f)?;
    let covar_fb = reduce_matrix(problem.covar(), free, &bounded);
    let w_b = reduce_vector(weights, &bounded);
    Ok(FreeBlocks { covar_f_inv, covar_fb, mean_f, w_b })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Subset reduction of matrices/vectors, including the empty-subset
    //   `None` sentinel and ordering preservation.
    // - Block inversion on an invertible matrix and the SingularBlock error.
    // - Bounded-set complement ordering and FreeBlocks assembly.
    //
    // They intentionally DO NOT cover:
    // - The lambda/weight formulas consuming these blocks (tested in their
    //   own modules).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that matrix reduction picks the requested rows/columns in the
    // requested order, and that an empty subset yields the None sentinel.
    //
    // Given
    // -----
    // - A 3x3 matrix with distinct entries.
    // - Row subset [2, 0] and column subset [1].
    //
    // Expect
    // ------
    // - A 2x1 result [[m[2,1]], [m[0,1]]].
    // - `reduce_matrix(m, &[], &[1])` is None.
    fn reduce_matrix_selects_rows_and_columns_in_order() {
        // Arrange
        let m = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];

        // Act
        let reduced = reduce_matrix(&m, &[2, 0], &[1]).expect("non-empty subsets");
        let empty = reduce_matrix(&m, &[], &[1]);

        // Assert
        assert_eq!(reduced, array![[8.0], [2.0]]);
        assert_eq!(empty, None);
    }

    #[test]
    // Purpose
    // -------
    // Verify vector reduction ordering and the empty-subset sentinel.
    //
    // Given
    // -----
    // - A length-4 vector and the index subset [3, 1].
    //
    // Expect
    // ------
    // - The reduction is [v[3], v[1]]; an empty subset yields None.
    fn reduce_vector_selects_indices_in_order() {
        // Arrange
        let v = array![10.0, 11.0, 12.0, 13.0];

        // Act
        let reduced = reduce_vector(&v, &[3, 1]).expect("non-empty subset");
        let empty = reduce_vector(&v, &[]);

        // Assert
        assert_eq!(reduced, array![13.0, 11.0]);
        assert_eq!(empty, None);
    }

    #[test]
    // Purpose
    // -------
    // Check that `invert_block` inverts a diagonal block exactly and that a
    // singular block is reported as SingularBlock rather than degraded.
    //
    // Given
    // -----
    // - diag(0.01, 0.04), whose inverse is diag(100, 25).
    // - A rank-1 2x2 matrix of ones.
    //
    // Expect
    // ------
    // - The diagonal inverse matches to 1e-9.
    // - The singular matrix yields `FrontierError::SingularBlock { size: 2 }`.
    fn invert_block_inverts_diagonal_and_rejects_singular() {
        // Arrange
        let diagonal = array![[0.01, 0.0], [0.0, 0.04]];
        let singular = array![[1.0, 1.0], [1.0, 1.0]];

        // Act
        let inverse = invert_block(&diagonal).expect("diagonal block is invertible");
        let failure = invert_block(&singular);

        // Assert
        assert!((inverse[[0, 0]] - 100.0).abs() < 1e-9);
        assert!((inverse[[1, 1]] - 25.0).abs() < 1e-9);
        assert!(inverse[[0, 1]].abs() < 1e-12);
        assert_eq!(failure.unwrap_err(), FrontierError::SingularBlock { size: 2 });
    }

    #[test]
    // Purpose
    // -------
    // Ensure the bounded-set complement is ascending and disjoint from the
    // free set regardless of free-set insertion order.
    //
    // Given
    // -----
    // - n = 5 and free = [3, 0].
    //
    // Expect
    // ------
    // - bounded = [1, 2, 4].
    fn bounded_set_returns_ascending_complement() {
        // Arrange & Act
        let bounded = bounded_set(5, &[3, 0]);

        // Assert
        assert_eq!(bounded, vec![1, 2, 4]);
    }

    #[test]
    // Purpose
    // -------
    // Verify FreeBlocks assembly: cross containers present when assets are
    // bounded, absent when the free set covers every asset.
    //
    // Given
    // -----
    // - A 3-asset diagonal problem with free = [1] and weights [0, 1, 0].
    // - The same problem with free = [0, 1, 2].
    //
    // Expect
    // ------
    // - With free = [1]: covar_f_inv = [[100]], mean_f = [0.2],
    //   covar_fb is a 1x2 zero matrix, w_b = [0, 0].
    // - With all assets free: covar_fb and w_b are None.
    fn free_blocks_populates_cross_terms_only_when_bounded_assets_exist() {
        // Arrange
        let problem = FrontierProblem::new(
            array![0.10, 0.20, 0.15],
            array![[0.01, 0.0, 0.0], [0.0, 0.01, 0.0], [0.0, 0.0, 0.01]],
            array![0.0, 0.0, 0.0],
            array![1.0, 1.0, 1.0],
        )
        .expect("valid instance");
        let weights = array![0.0, 1.0, 0.0];

        // Act
        let partial = free_blocks(&problem, &[1], &weights).expect("block is invertible");
        let full = free_blocks(&problem, &[0, 1, 2], &weights).expect("block is invertible");

        // Assert
        assert!((partial.covar_f_inv[[0, 0]] - 100.0).abs() < 1e-9);
        assert_eq!(partial.mean_f, array![0.20]);
        assert_eq!(partial.covar_fb, Some(array![[0.0, 0.0]]));
        assert_eq!(partial.w_b, Some(array![0.0, 0.0]));
        assert_eq!(full.covar_fb, None);
        assert_eq!(full.w_b, None);
    }
}
