use serde::Serialize;

/// `{ "data": T }` body returned by every successful `/api/v1` handler.
/// Errors use the `{ "error", "code" }` shape from [`crate::error::AppError`].
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
