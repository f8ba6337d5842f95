/*!
Sparse solutions of linear inequalities by the iterative reweighted L1 heuristic.

<script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
<script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>

Finding \\(x\\) with \\(A x \preceq b\\) that has the fewest nonzeros is not convex.
The heuristic instead minimizes the concave surrogate \\(\sum_i \log(\delta + |x_i|)\\)
by successive linearization, each step being a weighted L1-norm minimization
\\[
\begin{array}{ll}
{\rm minimize} & \sum_i W_i |x_i| \\\\
{\rm subject \ to} & A x \preceq b
\end{array}
\\]
followed by the update \\(W_i = 1 / (\delta + |x_i|)\\).

# General usage

1. Build the inequalities with [`IneqSystem`].
1. Choose a [`WeightedL1Oracle`] to solve each step:
   * [`TotsuOracle`] - solves the step as an LP by [`totsu`].
   * any closure `FnMut(&IneqSystem<F>, &[F]) -> Result<Vec<F>, ReweightError>`.
1. Create a [`Reweighted`] instance and optionally set its parameters.
1. Invoke [`Reweighted::solve`] to get a [`ReweightResult`],
   or [`Reweighted::solve_l1`] for a plain L1-norm minimization to compare with.

# Examples

\\(x_0 + 2 x_1 \ge 2\\) with the least L1-norm is \\((0, 1)\\):

```
use reweighted_l1::*;
use totsu::prelude::*;

//env_logger::init(); // Use any logger crate as `reweighted_l1` uses `log` crate.

type La = FloatGeneric<f64>;

let sys = IneqSystem::<f64>::new(1, 2)
          .iter_rowmaj(&[-1., -2.])
          .rhs_iter(&[-2.]);

let mut oracle = TotsuOracle::<La>::new().par(|p| {
    p.max_iter = Some(100_000);
});
let rw = Reweighted::new().par(|p| {
    p.delta = 1e-3;
    p.iterations = 3;
});
let rslt = rw.solve(&mut oracle, &sys).unwrap();

assert_eq!(rslt.nnz, 1);
assert!(sys.max_violation(&rslt.x) < 1e-3);
```
*/

mod error;

pub use error::*;

//

mod ineq;

pub use ineq::*;

//

mod oracle;

pub use oracle::*;

mod totsu_oracle;

pub use totsu_oracle::*;

//

mod reweight;

pub use reweight::*;
