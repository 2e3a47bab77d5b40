//! Eigendecomposition of real symmetric 3×3 matrices.
//!
//! Cyclic Jacobi rotations over the three off-diagonal pairs. Converges in a
//! handful of sweeps for covariance matrices and never allocates, so it is
//! cheap enough to run on every selection change.

use glam::{DMat3, DVec3};

/// Upper bound on Jacobi sweeps. Symmetric 3×3 input converges long before.
const MAX_SWEEPS: usize = 32;

/// Off-diagonal mass (relative to the diagonal) below which the matrix is
/// treated as diagonal.
const CONVERGENCE_EPSILON: f64 = 1e-24;

/// Off-diagonal index pairs visited by each sweep.
const PAIRS: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];

/// Eigenvalues and unit eigenvectors of a symmetric matrix, sorted by
/// descending eigenvalue.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SymmetricEigen {
    /// Eigenvalues, largest first.
    pub values: [f64; 3],
    /// Orthonormal eigenvectors matching `values`.
    pub vectors: [DVec3; 3],
}

/// Decompose a symmetric matrix. Only the upper triangle is trusted.
pub(crate) fn symmetric_eigen(m: &DMat3) -> SymmetricEigen {
    let cols = m.to_cols_array_2d();
    // Rebuild from the upper triangle so asymmetric round-off cannot leak in.
    let mut a = [[0.0_f64; 3]; 3];
    for i in 0..3 {
        for j in i..3 {
            a[i][j] = cols[j][i];
            a[j][i] = cols[j][i];
        }
    }
    let mut v = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

    for _ in 0..MAX_SWEEPS {
        let off = a[0][1] * a[0][1] + a[0][2] * a[0][2] + a[1][2] * a[1][2];
        let diag = a[0][0] * a[0][0] + a[1][1] * a[1][1] + a[2][2] * a[2][2];
        if off <= CONVERGENCE_EPSILON * diag || off == 0.0 {
            break;
        }
        for &(p, q) in &PAIRS {
            rotate(&mut a, &mut v, p, q);
        }
    }

    let mut order = [0_usize, 1, 2];
    order.sort_by(|&i, &j| a[j][j].total_cmp(&a[i][i]));

    let values = order.map(|i| a[i][i]);
    let vectors = order
        .map(|i| canonical_sign(DVec3::new(v[0][i], v[1][i], v[2][i])));
    SymmetricEigen { values, vectors }
}

/// Apply one Jacobi rotation zeroing `a[p][q]`, accumulating into `v`.
fn rotate(a: &mut [[f64; 3]; 3], v: &mut [[f64; 3]; 3], p: usize, q: usize) {
    let apq = a[p][q];
    if apq == 0.0 {
        return;
    }
    let theta = (a[q][q] - a[p][p]) / (2.0 * apq);
    let t = theta.signum() / (theta.abs() + theta.mul_add(theta, 1.0).sqrt());
    let c = 1.0 / t.mul_add(t, 1.0).sqrt();
    let s = t * c;

    for row in a.iter_mut() {
        let (akp, akq) = (row[p], row[q]);
        row[p] = c * akp - s * akq;
        row[q] = s * akp + c * akq;
    }
    for k in 0..3 {
        let (apk, aqk) = (a[p][k], a[q][k]);
        a[p][k] = c * apk - s * aqk;
        a[q][k] = s * apk + c * aqk;
    }
    a[p][q] = 0.0;
    a[q][p] = 0.0;

    for row in v.iter_mut() {
        let (vkp, vkq) = (row[p], row[q]);
        row[p] = c * vkp - s * vkq;
        row[q] = s * vkp + c * vkq;
    }
}

/// Flip `v` so its largest-magnitude component is positive.
///
/// Eigenvectors are only defined up to sign; pinning it keeps repeated
/// extractions of the same cloud bit-identical.
fn canonical_sign(v: DVec3) -> DVec3 {
    let abs = v.abs();
    let dominant = if abs.x >= abs.y && abs.x >= abs.z {
        v.x
    } else if abs.y >= abs.z {
        v.y
    } else {
        v.z
    };
    if dominant < 0.0 {
        -v
    } else {
        v
    }
}
