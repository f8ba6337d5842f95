use std::ops::{Index, IndexMut, Deref};
use num_traits::Float;

//

/// System of linear inequalities
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-svg.js"></script>
///
/// Feasible region
/// \\[
/// \lbrace x \in \mathbb{R}^n : A x \preceq b \rbrace
/// \\]
/// with \\(A \in \mathbb{R}^{m \times n}\\), \\(b \in \mathbb{R}^m\\).
/// \\(A\\) is stored in column-major and indexed by `(row, column)`.
#[derive(Debug, Clone)]
pub struct IneqSystem<F: Float>
{
    nrows: usize,
    ncols: usize,
    mat_a: Vec<F>,
    vec_b: Vec<F>,
}

impl<F: Float> IneqSystem<F>
{
    /// Creates an instance.
    ///
    /// Returns the [`IneqSystem`] instance with zero data.
    /// * `m` is a number of inequalities.
    /// * `n` is a number of variables.
    pub fn new(m: usize, n: usize) -> Self
    {
        IneqSystem {
            nrows: m,
            ncols: n,
            mat_a: vec![F::zero(); m * n],
            vec_b: vec![F::zero(); m],
        }
    }

    /// Size of \\(A\\).
    ///
    /// Returns a tuple of a number of inequalities and variables.
    pub fn size(&self) -> (usize, usize)
    {
        (self.nrows, self.ncols)
    }

    /// Right-hand side \\(b\\).
    pub fn rhs(&self) -> &[F]
    {
        &self.vec_b
    }

    /// Mutable right-hand side \\(b\\).
    pub fn rhs_mut(&mut self) -> &mut [F]
    {
        &mut self.vec_b
    }

    /// \\(A\\) data by a function.
    ///
    /// * `func` takes a row and a column and returns data of each element.
    pub fn set_by_fn<M>(&mut self, mut func: M)
    where M: FnMut(usize, usize) -> F
    {
        for c in 0.. self.ncols {
            for r in 0.. self.nrows {
                self[(r, c)] = func(r, c);
            }
        }
    }
    /// Builder pattern of [`IneqSystem::set_by_fn`].
    pub fn by_fn<M>(mut self, func: M) -> Self
    where M: FnMut(usize, usize) -> F
    {
        self.set_by_fn(func);
        self
    }

    /// \\(A\\) data by an iterator in column-major.
    ///
    /// Iteration stops early when `iter` runs out.
    pub fn set_iter_colmaj<T, I>(&mut self, iter: T)
    where T: IntoIterator<Item=I>, I: Deref<Target=F>
    {
        for (e, v) in self.mat_a.iter_mut().zip(iter) {
            *e = *v;
        }
    }
    /// Builder pattern of [`IneqSystem::set_iter_colmaj`].
    pub fn iter_colmaj<T, I>(mut self, iter: T) -> Self
    where T: IntoIterator<Item=I>, I: Deref<Target=F>
    {
        self.set_iter_colmaj(iter);
        self
    }

    /// \\(A\\) data by an iterator in row-major.
    ///
    /// Iteration stops early when `iter` runs out.
    pub fn set_iter_rowmaj<T, I>(&mut self, iter: T)
    where T: IntoIterator<Item=I>, I: Deref<Target=F>
    {
        let mut i = iter.into_iter();

        'rows: for r in 0.. self.nrows {
            for c in 0.. self.ncols {
                if let Some(v) = i.next() {
                    self[(r, c)] = *v;
                }
                else {
                    break 'rows;
                }
            }
        }
    }
    /// Builder pattern of [`IneqSystem::set_iter_rowmaj`].
    pub fn iter_rowmaj<T, I>(mut self, iter: T) -> Self
    where T: IntoIterator<Item=I>, I: Deref<Target=F>
    {
        self.set_iter_rowmaj(iter);
        self
    }

    /// \\(b\\) data by a function of a row.
    pub fn set_rhs_by_fn<M>(&mut self, func: M)
    where M: FnMut(usize) -> F
    {
        self.vec_b.iter_mut()
            .zip((0.. self.nrows).map(func))
            .for_each(|(e, v)| *e = v);
    }
    /// Builder pattern of [`IneqSystem::set_rhs_by_fn`].
    pub fn rhs_by_fn<M>(mut self, func: M) -> Self
    where M: FnMut(usize) -> F
    {
        self.set_rhs_by_fn(func);
        self
    }

    /// \\(b\\) data by an iterator.
    pub fn set_rhs_iter<T, I>(&mut self, iter: T)
    where T: IntoIterator<Item=I>, I: Deref<Target=F>
    {
        for (e, v) in self.vec_b.iter_mut().zip(iter) {
            *e = *v;
        }
    }
    /// Builder pattern of [`IneqSystem::set_rhs_iter`].
    pub fn rhs_iter<T, I>(mut self, iter: T) -> Self
    where T: IntoIterator<Item=I>, I: Deref<Target=F>
    {
        self.set_rhs_iter(iter);
        self
    }

    /// Calculates \\(A x\\).
    ///
    /// Returns a `Vec` of length \\(m\\).
    /// * `x` has to be of length \\(n\\).
    pub fn mul_vec(&self, x: &[F]) -> Vec<F>
    {
        assert_eq!(x.len(), self.ncols);

        let mut y = vec![F::zero(); self.nrows];
        for (c, col) in self.mat_a.chunks(self.nrows.max(1)).take(self.ncols).enumerate() {
            for (yr, a) in y.iter_mut().zip(col) {
                *yr = *yr + *a * x[c];
            }
        }
        y
    }

    /// Largest constraint violation \\(\max_i (A x - b)_i\\).
    ///
    /// Returns a non-positive value if `x` is feasible, `-inf` if there is no inequality.
    pub fn max_violation(&self, x: &[F]) -> F
    {
        self.mul_vec(x).iter().zip(&self.vec_b)
            .map(|(ax, b)| *ax - *b)
            .fold(F::neg_infinity(), F::max)
    }
}

impl<F: Float> Index<(usize, usize)> for IneqSystem<F>
{
    type Output = F;
    fn index(&self, index: (usize, usize)) -> &F
    {
        let (r, c) = index;
        assert!(r < self.nrows && c < self.ncols);

        &self.mat_a[c * self.nrows + r]
    }
}

impl<F: Float> IndexMut<(usize, usize)> for IneqSystem<F>
{
    fn index_mut(&mut self, index: (usize, usize)) -> &mut F
    {
        let (r, c) = index;
        assert!(r < self.nrows && c < self.ncols);

        &mut self.mat_a[c * self.nrows + r]
    }
}

impl<F: Float + core::fmt::LowerExp> core::fmt::Display for IneqSystem<F>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        for r in 0.. self.nrows {
            for c in 0.. self.ncols {
                write!(f, " {:.3e},", self[(r, c)])?;
            }
            writeln!(f, " <= {:.3e}", self.vec_b[r])?;
        }
        Ok(())
    }
}

//

#[test]
fn test_ineq_index()
{
    let sys = IneqSystem::<f64>::new(2, 3)
        .iter_rowmaj(&[
            1., 2., 3.,
            4., 5., 6.,
        ])
        .rhs_iter(&[7., 8.]);

    assert_eq!(sys.size(), (2, 3));
    assert_eq!(sys[(0, 2)], 3.);
    assert_eq!(sys[(1, 0)], 4.);
    assert_eq!(sys.rhs(), &[7., 8.]);
    assert_eq!(sys.mul_vec(&[1., 0., -1.]), vec![-2., -2.]);
}

#[test]
fn test_ineq_violation()
{
    // x0 <= 1, -x0 <= 1
    let sys = IneqSystem::<f64>::new(2, 1)
        .iter_colmaj(&[1., -1.])
        .rhs_by_fn(|_| 1.);

    assert_eq!(sys.max_violation(&[0.5]), -0.5);
    assert_eq!(sys.max_violation(&[-3.]), 2.);

    let empty = IneqSystem::<f64>::new(0, 2);
    assert_eq!(empty.max_violation(&[1., 1.]), f64::NEG_INFINITY);
}
