use anchor_lang::error::Error;

use crate::errors::DistributorError;

/// Assert that `result` failed with exactly `expected`.
pub fn assert_error<T: std::fmt::Debug>(result: anchor_lang::Result<T>, expected: DistributorError) {
    match result {
        Err(Error::AnchorError(err)) => assert_eq!(err.error_name, expected.name()),
        other => panic!("expected {}, got {:?}", expected.name(), other),
    }
}
