use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::models::Submission;
use crate::DB;

pub const BLOB_DIR: &str = "submissions";

/// Writes a freshly-named blob under `BLOB_DIR` and returns its path.
/// Filenames are minted from a fresh uuid, so concurrent writers never
/// collide and never need to coordinate.
pub async fn write(language_ext: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
    tokio::fs::create_dir_all(BLOB_DIR).await?;
    let filename = format!("{}{}", Uuid::new_v4(), language_ext);
    let path = Path::new(BLOB_DIR).join(filename);
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}

pub async fn read(path: &str) -> std::io::Result<String> {
    tokio::fs::read_to_string(path).await
}

/// The transactional boundary for one analyze call: the blob is written
/// first, then the submission row. If the DB insert fails the blob is
/// unlinked on a best-effort basis — a leaked blob is acceptable, a
/// dangling row is not.
pub async fn persist_submission(
    db: &DB,
    user_id: i64,
    language: &str,
    extension: &str,
    code: &str,
    file_name: Option<&str>,
    analysis_result_json: &str,
) -> anyhow::Result<Submission> {
    let path = write(extension, code.as_bytes()).await?;
    let path_str = path.to_string_lossy().into_owned();

    let mut tx = db.begin().await?;
    let result = crate::submissions::create(
        &mut tx,
        user_id,
        language,
        &path_str,
        analysis_result_json,
        file_name,
    )
    .await;

    match result {
        Ok(submission) => {
            tx.commit().await?;
            Ok(submission)
        }
        Err(e) => {
            let _ = tokio::fs::remove_file(&path).await;
            Err(e.into())
        }
    }
}
