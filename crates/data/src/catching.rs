use std::future::Future;

use moim_core::{DataError, DataResult};
use moim_network::NetworkError;

/// Await an API call, logging and classifying its failure.
///
/// `operation` names the repository method in the log line.
pub(crate) async fn catching<T>(
    operation: &'static str,
    call: impl Future<Output = Result<T, NetworkError>>,
) -> DataResult<T> {
    call.await.map_err(|err| {
        let err = DataError::from(err);
        tracing::warn!(operation, kind = ?err.kind(), error = %err, "Repository call failed");
        err
    })
}
