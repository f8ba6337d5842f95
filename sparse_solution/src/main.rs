use totsu::prelude::*;
use reweighted_l1::*;

use rand::prelude::*;
use rand_distr::StandardNormal;
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use itertools::Itertools;
use anyhow::Result;

type La = FloatGeneric<f64>;
type ASys = IneqSystem<f64>;
type AOracle = TotsuOracle<La>;

/// random inequalities with a known feasible point
fn gen_sys<R: Rng>(rng: &mut R, m: usize, n: usize) -> ASys
{
    let x0: Vec<f64> = (0.. n).map(|_| rng.sample(StandardNormal)).collect();

    let mut sys = ASys::new(m, n)
                  .by_fn(|_, _| rng.sample(StandardNormal));
    let ax0 = sys.mul_vec(&x0);
    sys.set_rhs_by_fn(|r| ax0[r] + rng.gen::<f64>());

    log::debug!("x0 max violation {:.3e}", sys.max_violation(&x0));
    sys
}

/// main
fn main() -> Result<()> {
    env_logger::init();

    //----- make a random feasible problem

    let m = utils::num_by_env("NUM_ROWS").unwrap_or(100);
    let n = utils::num_by_env("NUM_COLS").unwrap_or(50);
    let seed = utils::num_by_env("SEED").unwrap_or(0);

    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    let sys = gen_sys(&mut rng, m, n);
    //println!("{}", sys);

    //----- oracle and reweighting

    let mut oracle = AOracle::new().par(|p| {
        p.eps_acc = 1e-6;
        utils::set_par_by_env(p);
    });
    let rw = Reweighted::new().par(|p| {
        p.delta = 1e-4; // resolvable by a first-order solver
        p.iterations = 15;
        utils::set_rw_par_by_env(p);
    });

    //----- plain L1-norm minimization

    let (x_l1, nnz_l1) = rw.solve_l1(&mut oracle, &sys)?;
    log::info!("L1 max violation {:.3e}", sys.max_violation(&x_l1));

    println!("Found a feasible x in R^{} that has {} nonzeros.", n, nnz_l1);

    //----- reweighted L1-norm minimization

    let rslt = rw.solve(&mut oracle, &sys)?;
    log::info!("reweighted max violation {:.3e}", sys.max_violation(&rslt.x));

    for (i, nnz) in rslt.trace.iter().enumerate() {
        println!("{:>3}: recovered x is in R^{} with {} nonzeros", i + 1, n, nnz);
    }

    println!();
    println!("nonzeros: {} by L1, {} by reweighted L1", nnz_l1, rslt.nnz);
    println!("trace: [{}]", rslt.trace.iter().join(", "));
    match rslt.plateau() {
        Some(i) => println!("stable from iteration {}", i + 1),
        None => println!("no iteration"),
    }

    Ok(())
}
