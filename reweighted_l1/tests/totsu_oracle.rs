use float_eq::assert_float_eq;
use totsu::prelude::*;
use reweighted_l1::*;

type La = FloatGeneric<f64>;

type ASys = IneqSystem<f64>;
type AOracle = TotsuOracle<La>;

fn oracle() -> AOracle
{
    AOracle::new()
}

//

#[test]
fn test_oracle_weighted()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // x0 + x1 >= 1
    let sys = ASys::new(1, 2)
              .iter_rowmaj(&[-1., -1.])
              .rhs_iter(&[-1.]);

    let x = oracle().solve_weighted_l1(&sys, &[1., 2.]).unwrap();
    println!("{:?}", x);
    assert_float_eq!(x.as_slice(), [1., 0.].as_ref(), abs_all <= 1e-3);

    let x = oracle().solve_weighted_l1(&sys, &[2., 1.]).unwrap();
    println!("{:?}", x);
    assert_float_eq!(x.as_slice(), [0., 1.].as_ref(), abs_all <= 1e-3);
}

#[test]
fn test_oracle_infeasible()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // x0 <= -1, x0 >= 1
    let sys = ASys::new(2, 1)
              .iter_rowmaj(&[1., -1.])
              .rhs_iter(&[-1., -1.]);

    let rslt = oracle().solve_weighted_l1(&sys, &[1.]).unwrap_err();
    println!("{}", rslt);
    assert_eq!(rslt, ReweightError::Infeasible);

    let rw = Reweighted::new();
    assert_eq!(rw.solve(&mut oracle(), &sys).unwrap_err(), ReweightError::Infeasible);
    assert_eq!(rw.solve_l1(&mut oracle(), &sys).unwrap_err(), ReweightError::Infeasible);
}

#[test]
fn test_oracle_infeasible2()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // x0 + x1 <= -1, x0 + x1 >= 1, x1 <= 3
    let sys = ASys::new(3, 2)
              .iter_rowmaj(&[
                   1.,  1.,
                  -1., -1.,
                   0.,  1.,
              ])
              .rhs_iter(&[-1., -1., 3.]);

    let rslt = oracle().solve_weighted_l1(&sys, &[1., 5.]).unwrap_err();
    println!("{}", rslt);
    assert_eq!(rslt, ReweightError::Infeasible);
}

#[test]
fn test_oracle_negative()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // x0 <= -2, x1 >= -1
    let sys = ASys::new(2, 2)
              .iter_rowmaj(&[
                  1.,  0.,
                  0., -1.,
              ])
              .rhs_iter(&[-2., 1.]);

    let x = oracle().solve_weighted_l1(&sys, &[1., 1.]).unwrap();
    println!("{:?}", x);
    assert_float_eq!(x.as_slice(), [-2., 0.].as_ref(), abs_all <= 1e-3);
}

#[test]
fn test_oracle_default_par()
{
    let o = AOracle::new();

    assert_eq!(o.par.max_iter, Some(1_000_000));
    assert_eq!(o.par.eps_acc, SolverParam::<f64>::default().eps_acc);

    let o = AOracle::new().par(|p| p.max_iter = None);
    assert_eq!(o.par.max_iter, None);
}

#[test]
fn test_oracle_size_mismatch()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let sys = ASys::new(1, 3);

    let rslt = oracle().solve_weighted_l1(&sys, &[1., 1.]).unwrap_err();
    assert_eq!(rslt, ReweightError::SizeMismatch);
}

//

#[test]
fn test_reweight_sparse()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // x0 + 2 x1 >= 2, the least L1-norm at (0, 1)
    let sys = ASys::new(1, 2)
              .iter_rowmaj(&[-1., -2.])
              .rhs_iter(&[-2.]);

    let rw = Reweighted::new().par(|p| {
        p.delta = 1e-3;
        p.iterations = 4;
    });
    let mut o = oracle();

    let (x_l1, nnz_l1) = rw.solve_l1(&mut o, &sys).unwrap();
    assert_float_eq!(x_l1.as_slice(), [0., 1.].as_ref(), abs_all <= 1e-3);
    assert_eq!(nnz_l1, 1);

    let rslt = rw.solve(&mut o, &sys).unwrap();
    println!("{:?}", rslt);
    assert_eq!(rslt.trace, vec![1; 4]);
    assert_eq!(rslt.plateau(), Some(0));
    assert_float_eq!(rslt.x.as_slice(), [0., 1.].as_ref(), abs_all <= 1e-3);
}

#[test]
fn test_reweight_feasible()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let m = 12;
    let n = 6;

    // deterministic dense data, feasible at x0 = (1, -1, 1, ...)
    let x0: Vec<f64> = (0.. n).map(|i| if i % 2 == 0 {1.} else {-1.}).collect();
    let mut sys = ASys::new(m, n)
                  .by_fn(|r, c| ((r * n + c) as f64 * 0.7).sin());
    let ax0 = sys.mul_vec(&x0);
    sys.set_rhs_by_fn(|r| ax0[r] + 0.1 * (r % 3) as f64);
    assert!(sys.max_violation(&x0) <= 0.);

    let rw = Reweighted::new().par(|p| {
        p.delta = 1e-3;
        p.iterations = 3;
    });
    let mut o = AOracle::new().par(|p| {
        p.max_iter = Some(1_000_000);
        p.eps_acc = 1e-4;
    });

    let rslt = rw.solve(&mut o, &sys).unwrap();
    println!("{:?}", rslt);

    assert_eq!(rslt.trace.len(), 3);
    assert_eq!(rslt.x.len(), n);
    assert_eq!(rslt.nnz, *rslt.trace.last().unwrap());
    assert!(rslt.nnz <= n);
    assert!(sys.max_violation(&rslt.x) <= 1e-2);
}

#[test]
fn test_reweight_single_iter_is_l1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // x0 + x1 + x2 >= 1, x0 - x2 <= 0.5
    let sys = ASys::new(2, 3)
              .iter_rowmaj(&[
                  -1., -1., -1.,
                   1.,  0., -1.,
              ])
              .rhs_iter(&[-1., 0.5]);

    let rw = Reweighted::new().par(|p| {
        p.delta = 1e-3;
        p.iterations = 1;
    });

    let (x_l1, nnz_l1) = rw.solve_l1(&mut oracle(), &sys).unwrap();
    let rslt = rw.solve(&mut oracle(), &sys).unwrap();

    assert_eq!(rslt.x, x_l1);
    assert_eq!(rslt.nnz, nnz_l1);
    assert_eq!(rslt.trace, vec![nnz_l1]);
}

#[test]
fn test_reweight_sparser_than_l1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // 2.5 x0 + x1 >= 1.5, 0.1 x0 + x1 >= 1.02:
    // the least L1-norm at (0.2, 1), a sparser point at (0, 1.5)
    let sys = ASys::new(2, 2)
              .iter_rowmaj(&[
                  -2.5, -1.,
                  -0.1, -1.,
              ])
              .rhs_iter(&[-1.5, -1.02]);

    let iterations = 4;
    let rw = Reweighted::new().par(|p| {
        p.delta = 1e-3;
        p.iterations = iterations;
    });
    let mut o = oracle();

    let (x_l1, nnz_l1) = rw.solve_l1(&mut o, &sys).unwrap();
    println!("{:?}", x_l1);
    assert_float_eq!(x_l1.as_slice(), [0.2, 1.].as_ref(), abs_all <= 1e-3);
    assert_eq!(nnz_l1, 2);

    let rslt = rw.solve(&mut o, &sys).unwrap();
    println!("{:?}", rslt);
    assert_float_eq!(rslt.x.as_slice(), [0., 1.5].as_ref(), abs_all <= 1e-3);
    assert!(sys.max_violation(&rslt.x) <= 1e-3);

    assert_eq!(rslt.trace, vec![2, 1, 1, 1]);
    assert!(rslt.nnz < nnz_l1);
    let mut prev = nnz_l1;
    for nnz in rslt.trace.iter() {
        assert!(*nnz <= prev);
        prev = *nnz;
    }
    assert!(rslt.plateau().unwrap() < iterations - 1);
}
