use totsu::prelude::SolverParam;
use reweighted_l1::ReweightParam;
use num_traits::Float;
use num_traits::Num;

/// Reads a number from the environment variable `e`.
///
/// Returns `None` if `e` is unset or does not parse, the latter with a warning.
pub fn num_by_env<N: Num + std::fmt::Display>(e: &str) -> Option<N>
{
    let s = std::env::var(e).ok()?;

    match N::from_str_radix(s.trim(), 10) {
        Ok(v) => {
            log::info!("{}: {}", e, v);
            Some(v)
        },
        Err(_) => {
            log::warn!("{}: ignored unparsable {:?}", e, s);
            None
        },
    }
}

/// Overrides solver parameters of the oracle by
/// `MAX_ITER`, `EPS_ACC`, `EPS_INF`, `EPS_ZERO` and `LOG_PERIOD`.
pub fn set_par_by_env<F: Float + std::fmt::Display>(p: &mut SolverParam<F>)
{
    p.max_iter = num_by_env("MAX_ITER").or(p.max_iter);
    p.eps_acc = num_by_env("EPS_ACC").unwrap_or(p.eps_acc);
    p.eps_inf = num_by_env("EPS_INF").unwrap_or(p.eps_inf);
    p.eps_zero = num_by_env("EPS_ZERO").unwrap_or(p.eps_zero);
    p.log_period = num_by_env("LOG_PERIOD").unwrap_or(p.log_period);
}

/// Overrides reweighting parameters by `DELTA` and `REWEIGHT_ITER`.
pub fn set_rw_par_by_env<F: Float + std::fmt::Display>(p: &mut ReweightParam<F>)
{
    p.delta = num_by_env("DELTA").unwrap_or(p.delta);
    p.iterations = num_by_env("REWEIGHT_ITER").unwrap_or(p.iterations);
}

//

#[test]
fn test_num_by_env()
{
    std::env::set_var("UTILS_TEST_EPS", "1e-4");
    std::env::set_var("UTILS_TEST_ITER", " 20 ");
    std::env::set_var("UTILS_TEST_BAD", "twenty");

    assert_eq!(num_by_env::<f64>("UTILS_TEST_EPS"), Some(1e-4));
    assert_eq!(num_by_env::<usize>("UTILS_TEST_ITER"), Some(20));
    assert_eq!(num_by_env::<usize>("UTILS_TEST_BAD"), None);
    assert_eq!(num_by_env::<usize>("UTILS_TEST_UNSET"), None);
}

#[test]
fn test_set_rw_par_by_env()
{
    std::env::set_var("DELTA", "1e-3");
    std::env::set_var("REWEIGHT_ITER", "x");

    let mut p = ReweightParam::<f64>::default();
    set_rw_par_by_env(&mut p);

    assert_eq!(p.delta, 1e-3);
    assert_eq!(p.iterations, 15);

    std::env::remove_var("DELTA");
    std::env::remove_var("REWEIGHT_ITER");
}
