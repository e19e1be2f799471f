use crate::models::{Submission, SubmissionSummary};
use crate::DB;

/// Submissions are an append-only log: `list_by_user` and `by_id_and_user`
/// are the only reads, `create` the only write. No update, no delete.
const MAX_SUBMISSIONS_PER_PAGE: i64 = 50;

const INSERT_SUBMISSION: &str =
    "INSERT INTO code_submissions (user_id, language, file_path, analysis_result, file_name, created_at) \
     VALUES ($1, $2, $3, $4, $5, now()) \
     RETURNING id, user_id, language, file_path, analysis_result, file_name, created_at";

const LIST_BY_USER: &str = "SELECT id, language, created_at, file_name FROM code_submissions \
     WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2";

/// (user id, id) is the only access key; the filter lives in the query
/// itself rather than as a post-fetch check, so a cross-user lookup never
/// even touches the row.
const BY_ID_AND_USER: &str = "SELECT id, user_id, language, file_path, analysis_result, file_name, created_at \
     FROM code_submissions WHERE id = $1 AND user_id = $2";

pub async fn create(
    tx: &mut sqlx::PgConnection,
    user_id: i64,
    language: &str,
    file_path: &str,
    analysis_result: &str,
    file_name: Option<&str>,
) -> sqlx::Result<Submission> {
    sqlx::query_as::<_, Submission>(INSERT_SUBMISSION)
        .bind(user_id)
        .bind(language)
        .bind(file_path)
        .bind(analysis_result)
        .bind(file_name)
        .fetch_one(tx)
        .await
}

pub async fn list_by_user(db: &DB, user_id: i64) -> sqlx::Result<Vec<SubmissionSummary>> {
    sqlx::query_as::<_, SubmissionSummary>(LIST_BY_USER)
        .bind(user_id)
        .bind(MAX_SUBMISSIONS_PER_PAGE)
        .fetch_all(db)
        .await
}

pub async fn by_id_and_user(db: &DB, id: i64, user_id: i64) -> sqlx::Result<Option<Submission>> {
    sqlx::query_as::<_, Submission>(BY_ID_AND_USER)
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ownership_lookup_filters_by_both_id_and_user_id_in_sql() {
        assert!(BY_ID_AND_USER.contains("id = $1"));
        assert!(BY_ID_AND_USER.contains("user_id = $2"));
    }

    #[test]
    fn listing_is_scoped_to_the_caller_and_ordered_newest_first() {
        assert!(LIST_BY_USER.contains("WHERE user_id = $1"));
        assert!(LIST_BY_USER.contains("ORDER BY created_at DESC"));
    }

    #[test]
    fn listing_caps_at_the_page_size_constant() {
        assert_eq!(MAX_SUBMISSIONS_PER_PAGE, 50);
    }
}
