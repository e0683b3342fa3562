use thiserror::Error;

/// Result alias used by the widget models
pub type PortalResult<T> = Result<T, PortalError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortalError {
    #[error("pager has no pages")]
    EmptyPager,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Carries the selector that matched nothing
    #[error("element not found: {0}")]
    MissingElement(String),
}

impl PortalError {
    pub fn missing(selector: impl Into<String>) -> Self {
        PortalError::MissingElement(selector.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_names_selector() {
        let err = PortalError::missing(".pagination-controls .prev-btn");
        assert_eq!(
            err,
            PortalError::MissingElement(".pagination-controls .prev-btn".to_string())
        );
        assert_eq!(err.to_string(), "element not found: .pagination-controls .prev-btn");
    }
}
