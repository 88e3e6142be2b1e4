use crate::shared::infrastructure::record_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod application_error_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_be_transparent_over_store_errors() {
        let error = ApplicationError::from(StoreError::Backend("Seized item store offline".into()));
        assert_eq!(
            error.to_string(),
            "backend error: Seized item store offline"
        );
    }

    #[rstest]
    fn it_should_prefix_domain_rejections() {
        let error = ApplicationError::Domain("count must be at least 1".into());
        assert_eq!(
            error.to_string(),
            "domain rejected: count must be at least 1"
        );
    }
}
