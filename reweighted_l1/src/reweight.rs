//! Iterative reweighted L1 heuristic

use num_traits::Float;
use core::fmt::Debug;
use crate::{IneqSystem, ReweightError, WeightedL1Oracle};

//

/// Reweighting parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ReweightParam<F: Float>
{
    /// Sparsity threshold: a coordinate is zero if its magnitude is at most `delta`.
    /// Also the offset of the weight update. Must be positive.
    pub delta: F,
    /// Number of reweighted solves. Must be positive.
    pub iterations: usize,
}

impl<F: Float> Default for ReweightParam<F>
{
    fn default() -> Self
    {
        let ten = F::from(10).unwrap();

        ReweightParam {
            delta: ten.powi(-8),
            iterations: 15,
        }
    }
}

//

/// Result of [`Reweighted::solve`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReweightResult<F>
{
    /// Solution of the last iteration.
    pub x: Vec<F>,
    /// Number of nonzeros of `x`.
    pub nnz: usize,
    /// Number of nonzeros after each iteration.
    pub trace: Vec<usize>,
}

impl<F> ReweightResult<F>
{
    /// Index of the trace from which every following count is equal.
    ///
    /// Returns `None` for an empty trace.
    pub fn plateau(&self) -> Option<usize>
    {
        let last = self.trace.last()?;

        let changed = self.trace.iter().rposition(|c| c != last);
        Some(changed.map_or(0, |i| i + 1))
    }
}

//

/// Counts coordinates whose magnitude exceeds `delta`.
pub fn nonzero_count<F: Float>(x: &[F], delta: F) -> usize
{
    x.iter().filter(|v| v.abs() > delta).count()
}

/// Updates weights by \\(W_i = 1 / (\delta + |x_i|)\\).
///
/// This linearizes \\(\sum_i \log(\delta + |x_i|)\\) around `x`.
/// Returns `Err` with [`ReweightError::SizeMismatch`] leaving `weights` untouched
/// if the lengths of `weights` and `x` differ.
pub fn update_weights<F: Float>(weights: &mut [F], x: &[F], delta: F) -> Result<(), ReweightError>
{
    if weights.len() != x.len() {
        log::error!("Size mismatch: weights {}, x {}", weights.len(), x.len());
        return Err(ReweightError::SizeMismatch);
    }

    for (w, v) in weights.iter_mut().zip(x) {
        *w = (delta + v.abs()).recip();
    }
    Ok(())
}

//

/// Sparse solution search by the iterative reweighted L1 heuristic
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-svg.js"></script>
///
/// Seeks \\(x\\) with \\(A x \preceq b\\) and few nonzeros
/// by repeatedly solving
/// \\[
/// \begin{array}{ll}
/// {\rm minimize} & \sum_i W_i |x_i| \\\\
/// {\rm subject \ to} & A x \preceq b
/// \end{array}
/// \\]
/// with an oracle, starting from \\(W = 1\\).
pub struct Reweighted<F: Float>
{
    /// reweighting parameters.
    pub par: ReweightParam<F>,
}

impl<F: Float> Default for Reweighted<F>
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl<F: Float> Reweighted<F>
{
    /// Creates an instance.
    ///
    /// Returns [`Reweighted`] instance.
    pub fn new() -> Self
    {
        Reweighted {
            par: ReweightParam::default(),
        }
    }

    /// Changes reweighting parameters.
    ///
    /// Returns [`Reweighted`] with its parameters changed.
    /// * `f` is a function to change parameters given by its argument.
    pub fn par<P>(mut self, f: P) -> Self
    where P: FnOnce(&mut ReweightParam<F>)
    {
        f(&mut self.par);
        self
    }

    fn check_delta(&self) -> Result<(), ReweightError>
    {
        let delta = self.par.delta;

        if !(delta > F::zero() && delta.is_finite()) {
            log::error!("Invalid parameter: delta must be positive and finite");
            return Err(ReweightError::InvalidParam);
        }
        Ok(())
    }

    fn call_oracle<O>(oracle: &mut O, sys: &IneqSystem<F>, weights: &[F]) -> Result<Vec<F>, ReweightError>
    where O: WeightedL1Oracle<F>
    {
        let n = sys.size().1;
        let x = oracle.solve_weighted_l1(sys, weights)?;

        if x.len() != n {
            log::error!("Oracle returned length {}, must be {}", x.len(), n);
            return Err(ReweightError::SizeMismatch);
        }
        Ok(x)
    }
}

impl<F: Float + Debug> Reweighted<F>
{
    /// Plain L1-norm minimization with unit weights.
    ///
    /// Returns `Ok` with a tuple of \\(x\\) and its number of nonzeros,
    /// or `Err` with [`ReweightError`].
    pub fn solve_l1<O>(&self, oracle: &mut O, sys: &IneqSystem<F>) -> Result<(Vec<F>, usize), ReweightError>
    where O: WeightedL1Oracle<F>
    {
        self.check_delta()?;

        let weights = vec![F::one(); sys.size().1];
        let x = Self::call_oracle(oracle, sys, &weights)?;
        let nnz = nonzero_count(&x, self.par.delta);

        log::info!("L1: nnz {}", nnz);
        Ok((x, nnz))
    }

    /// Starts the reweighting iterations.
    ///
    /// Returns `Ok` with [`ReweightResult`] of the last iteration,
    /// or `Err` with the first [`ReweightError`] encountered; the run is aborted then.
    /// * `oracle` solves each weighted sub-problem.
    /// * `sys` is \\(A\\) and \\(b\\), assumed to be feasible.
    pub fn solve<O>(&self, oracle: &mut O, sys: &IneqSystem<F>) -> Result<ReweightResult<F>, ReweightError>
    where O: WeightedL1Oracle<F>
    {
        self.check_delta()?;
        if self.par.iterations == 0 {
            log::error!("Invalid parameter: iterations must be positive");
            return Err(ReweightError::InvalidParam);
        }
        log::debug!("{:?}", self.par);

        let (m, n) = sys.size();
        log::info!("----- Started: m {}, n {}", m, n);

        let delta = self.par.delta;
        let mut weights = vec![F::one(); n];
        let mut trace = Vec::with_capacity(self.par.iterations);
        let mut x = Vec::new();

        for i in 0.. self.par.iterations {
            x = Self::call_oracle(oracle, sys, &weights)?;

            let nnz = nonzero_count(&x, delta);
            log::info!("{}: nnz {}", i + 1, nnz);
            trace.push(nnz);

            update_weights(&mut weights, &x, delta)?;

            if log::log_enabled!(log::Level::Debug) {
                let w_min = weights.iter().fold(F::infinity(), |a, w| a.min(*w));
                let w_max = weights.iter().fold(F::zero(), |a, w| a.max(*w));
                log::debug!("weights: min {:?}, max {:?}", w_min, w_max);
            }
        }

        log::info!("----- Finished");
        let nnz = nonzero_count(&x, delta);

        Ok(ReweightResult {
            x,
            nnz,
            trace,
        })
    }
}

//

#[test]
fn test_nonzero_count()
{
    let x = [0., 1e-9, -1e-9, 1e-8, -2e-8, 3.];

    assert_eq!(nonzero_count(&x, 1e-8), 2);
    assert_eq!(nonzero_count(&x, 1e-10), 5);
    assert_eq!(nonzero_count::<f64>(&[], 1e-8), 0);
}

#[test]
fn test_update_weights()
{
    use float_eq::assert_float_eq;

    let delta = 0.5;
    let x = [0., 0.5, -1.5];
    let mut w = [1.; 3];

    update_weights(&mut w, &x, delta).unwrap();
    assert_float_eq!(w, [2., 1., 0.5], abs_all <= 1e-12);

    // larger magnitude, strictly smaller weight
    assert!(w[0] > w[1] && w[1] > w[2]);
    assert!(w.iter().all(|v| *v > 0. && v.is_finite()));
}

#[test]
fn test_plateau()
{
    let rslt = |trace: Vec<usize>| ReweightResult::<f64> {x: Vec::new(), nnz: 0, trace};

    assert_eq!(rslt(vec![46, 40, 37, 35, 35, 35]).plateau(), Some(3));
    assert_eq!(rslt(vec![7]).plateau(), Some(0));
    assert_eq!(rslt(vec![5, 4]).plateau(), Some(1));
    assert_eq!(rslt(Vec::new()).plateau(), None);
}

#[test]
fn test_update_weights_mismatch()
{
    let mut w = [1.; 3];

    assert_eq!(update_weights(&mut w, &[0.5, 0.5], 1e-8), Err(ReweightError::SizeMismatch));
    assert_eq!(w, [1.; 3]);
}
