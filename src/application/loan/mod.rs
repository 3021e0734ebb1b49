mod errors;
mod loan_authorizer;

pub use errors::{LoanApplicationError, Result};
pub use loan_authorizer::{ServiceDependencies, request_loan};
