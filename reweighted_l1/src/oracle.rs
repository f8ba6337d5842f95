//! Convex-optimization oracle

use num_traits::Float;
use crate::{IneqSystem, ReweightError};

/// Oracle solving a weighted L1-norm minimization over linear inequalities.
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-svg.js"></script>
///
/// \\[
/// \begin{array}{ll}
/// {\rm minimize} & \sum_i W_i |x_i| \\\\
/// {\rm subject \ to} & A x \preceq b
/// \end{array}
/// \\]
///
/// Any `FnMut(&IneqSystem<F>, &[F]) -> Result<Vec<F>, ReweightError>` is an oracle as well.
pub trait WeightedL1Oracle<F: Float>
{
    /// Solves the weighted L1-norm minimization.
    ///
    /// Returns `Ok` with an optimal \\(x\\) of length \\(n\\)
    /// or `Err` with [`ReweightError::Infeasible`], [`ReweightError::Unbounded`] or [`ReweightError::SolverFailure`].
    /// * `sys` is \\(A\\) and \\(b\\).
    /// * `weights` is \\(W\\), non-negative and of length \\(n\\).
    fn solve_weighted_l1(&mut self, sys: &IneqSystem<F>, weights: &[F]) -> Result<Vec<F>, ReweightError>;
}

impl<F, T> WeightedL1Oracle<F> for T
where F: Float, T: FnMut(&IneqSystem<F>, &[F]) -> Result<Vec<F>, ReweightError>
{
    fn solve_weighted_l1(&mut self, sys: &IneqSystem<F>, weights: &[F]) -> Result<Vec<F>, ReweightError>
    {
        self(sys, weights)
    }
}
