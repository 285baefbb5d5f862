use crate::utils::error::ApiError;

/// Runs CPU-bound work (password hashing) on tokio's blocking pool so the
/// actix workers keep serving other requests.
pub async fn run_blocking<F, R>(f: F) -> Result<R, ApiError>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| {
        log::error!("❌ Blocking task failed: {}", e);
        ApiError::Internal("Internal task failure".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_closure_result() {
        let result = run_blocking(|| {
            std::thread::sleep(std::time::Duration::from_millis(10));
            42
        })
        .await;

        assert_eq!(result.unwrap(), 42);
    }
}
