use core::fmt::{Debug, LowerExp};
use num_traits::{Zero, One};
use totsu::prelude::*;
use totsu::{MatBuild, ProbLP};
use totsu_core::LinAlgEx;
use crate::{IneqSystem, ReweightError, WeightedL1Oracle};

//

/// Oracle backed by the `totsu` first-order conic solver
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-svg.js"></script>
///
/// The weighted L1-norm minimization is solved as an LP
/// splitting \\(x = u - v\\) with \\(u, v \in \mathbb{R}^n\\):
/// \\[
/// \begin{array}{ll}
/// {\rm minimize} & W^T u + W^T v \\\\
/// {\rm subject \ to} & A u - A v \preceq b \\\\
/// & u \succeq 0, \ v \succeq 0
/// \end{array}
/// \\]
/// At an optimum with \\(W \succ 0\\), \\(u_i v_i = 0\\) and \\(|x_i| = u_i + v_i\\).
pub struct TotsuOracle<L: LinAlgEx>
{
    /// solver parameters.
    pub par: SolverParam<L::F>,
}

impl<L: LinAlgEx> TotsuOracle<L>
{
    /// Creates an instance with default [`SolverParam`] except `max_iter`,
    /// which is bounded so that an uncertified problem ends in [`ReweightError::SolverFailure`].
    pub fn new() -> Self
    {
        let mut par = SolverParam::default();
        par.max_iter = Some(1_000_000);

        TotsuOracle {
            par,
        }
    }

    /// Changes solver parameters.
    ///
    /// Returns [`TotsuOracle`] with its parameters changed.
    /// * `f` is a function to change parameters given by its argument.
    pub fn par<P>(mut self, f: P) -> Self
    where P: FnOnce(&mut SolverParam<L::F>)
    {
        f(&mut self.par);
        self
    }

    fn build_lp(sys: &IneqSystem<L::F>, weights: &[L::F]) -> ProbLP<L>
    {
        let (m, n) = sys.size();
        let f0 = L::F::zero();
        let f1 = L::F::one();

        // u, v
        let vec_c = MatBuild::<L>::new(MatType::General(n * 2, 1))
                    .by_fn(|r, _| weights[r % n]);

        let mut mat_g = MatBuild::<L>::new(MatType::General(m + n * 2, n * 2));
        for c in 0.. n {
            for r in 0.. m {
                mat_g[(r, c)] = sys[(r, c)];
                mat_g[(r, n + c)] = -sys[(r, c)];
            }

            mat_g[(m + c, c)] = -f1;
            mat_g[(m + n + c, n + c)] = -f1;
        }

        let vec_h = MatBuild::<L>::new(MatType::General(m + n * 2, 1))
                    .by_fn(|r, _| if r < m {sys.rhs()[r]} else {f0});

        let mat_a = MatBuild::<L>::new(MatType::General(0, n * 2));
        let vec_b = MatBuild::<L>::new(MatType::General(0, 1));

        ProbLP::new(vec_c, mat_g, vec_h, mat_a, vec_b)
    }
}

impl<L: LinAlgEx> Default for TotsuOracle<L>
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl<L: LinAlgEx> WeightedL1Oracle<L::F> for TotsuOracle<L>
where L::F: Debug + LowerExp
{
    fn solve_weighted_l1(&mut self, sys: &IneqSystem<L::F>, weights: &[L::F]) -> Result<Vec<L::F>, ReweightError>
    {
        let (m, n) = sys.size();

        if weights.len() != n {
            log::error!("Size mismatch: weights {}, sys {:?}", weights.len(), (m, n));
            return Err(ReweightError::SizeMismatch);
        }

        let par = self.par.clone();
        let s = Solver::<L>::new().par(|p| *p = par);
        let mut lp = Self::build_lp(sys, weights);

        match s.solve(lp.problem()) {
            Ok((uv, _)) => {
                let (u, v) = uv.split_at(n);
                Ok(u.iter().zip(&v[0.. n]).map(|(ui, vi)| *ui - *vi).collect())
            },
            Err(e) => {
                log::error!("{}", e);
                Err(match e {
                    SolverError::Infeasible => ReweightError::Infeasible,
                    SolverError::Unbounded => ReweightError::Unbounded,
                    _ => ReweightError::SolverFailure,
                })
            },
        }
    }
}
