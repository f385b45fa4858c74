use crate::errors::AppError;
use crate::models::TaskStore;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/state.json"))
}

pub async fn load_store(path: &Path) -> TaskStore {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(store) => store,
            Err(err) => {
                error!("failed to parse data file: {err}");
                TaskStore::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => TaskStore::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            TaskStore::default()
        }
    }
}

pub async fn persist_store(path: &Path, store: &TaskStore) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(store).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
