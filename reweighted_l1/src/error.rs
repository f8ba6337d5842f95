/// Errors of the reweighting procedure.
/// 
/// The first three come from the oracle boundary and abort a run as a whole;
/// no partial trace is returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReweightError
{
    /// No point satisfies the inequalities.
    Infeasible,
    /// The sub-problem has no finite optimum.
    Unbounded,
    /// The oracle failed numerically, e.g. did not converge.
    SolverFailure,

    /// Invalid parameter of the procedure.
    InvalidParam,
    /// Length of a vector does not match the problem dimension.
    SizeMismatch,
}

impl core::fmt::Display for ReweightError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", match &self {
            ReweightError::Infeasible    => "Infeasible: no point satisfies the inequalities",
            ReweightError::Unbounded     => "Unbounded: sub-problem has no finite optimum",
            ReweightError::SolverFailure => "SolverFailure: oracle failed to converge",
            ReweightError::InvalidParam  => "InvalidParam: delta must be positive and iterations nonzero",
            ReweightError::SizeMismatch  => "SizeMismatch: vector length differs from problem dimension",
        })
    }
}

impl std::error::Error for ReweightError {}
