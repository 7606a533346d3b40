//! Two-variant result algebra for API calls.
//!
//! Every API call in Riptide resolves to an [`ApiResult`]: either the
//! decoded domain value or a classified error. Callers consume it with
//! [`ApiResult::when`] or chain dependent calls with
//! [`ApiResult::flat_map`] instead of branching on raw responses.

/// Outcome of an API call: a decoded value or a classified error.
///
/// The two states are mutually exclusive by construction; there is no
/// discriminant to keep in sync and no payload that only sometimes
/// exists. The algebra is fully generic in both parameters; the error
/// side is fixed to [`crate::ApiError`] only at the normalization
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResult<T, E> {
    /// The call succeeded with a decoded value.
    Success(T),
    /// The call failed with a classified error.
    Failure(E),
}

impl<T, E> ApiResult<T, E> {
    /// Wraps a value in the success variant.
    #[must_use]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps an error in the failure variant.
    #[must_use]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns true if this is a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns true if this is a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Folds both variants into a single value.
    ///
    /// Exactly one of the two functions is applied to the held payload;
    /// its return value is returned unchanged.
    pub fn when<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(E) -> R,
    ) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Transforms the success value, leaving a failure untouched.
    ///
    /// The transform is infallible by signature; this operator adds no
    /// failure capture of its own.
    #[must_use]
    pub fn map<R>(self, transform: impl FnOnce(T) -> R) -> ApiResult<R, E> {
        match self {
            Self::Success(value) => ApiResult::Success(transform(value)),
            Self::Failure(error) => ApiResult::Failure(error),
        }
    }

    /// Transforms the failure error, leaving a success untouched.
    #[must_use]
    pub fn map_failure(self, transform: impl FnOnce(E) -> E) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Failure(transform(error)),
        }
    }

    /// Chains a dependent call on success.
    ///
    /// On success the transform's result is returned directly, so
    /// sequential calls compose without nesting. On failure the original
    /// error is re-wrapped unchanged.
    #[must_use]
    pub fn flat_map<R>(
        self,
        transform: impl FnOnce(T) -> ApiResult<R, E>,
    ) -> ApiResult<R, E> {
        match self {
            Self::Success(value) => transform(value),
            Self::Failure(error) => ApiResult::Failure(error),
        }
    }

    /// Chains a recovery call on failure.
    ///
    /// On failure the transform's result is returned directly; a success
    /// passes through unchanged.
    #[must_use]
    pub fn or_else(self, transform: impl FnOnce(E) -> Self) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => transform(error),
        }
    }

    /// Returns the success value, discarding a failure.
    #[must_use]
    pub fn success_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure error, discarding a success.
    #[must_use]
    pub fn failure_value(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrows the payload without consuming the result.
    #[must_use]
    pub const fn as_ref(&self) -> ApiResult<&T, &E> {
        match self {
            Self::Success(value) => ApiResult::Success(value),
            Self::Failure(error) => ApiResult::Failure(error),
        }
    }

    /// Converts into the standard library result type.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for ApiResult<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}
