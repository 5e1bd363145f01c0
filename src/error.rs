use thiserror::Error;

use crate::parse::ParseError;
use crate::GenerateError;

/// Unified error type covering input parsing and ACL generation.
#[derive(Debug, Error)]
pub enum AclgenError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}
