mod set_par_by_env;

pub use set_par_by_env::*;
