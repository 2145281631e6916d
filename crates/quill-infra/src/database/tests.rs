#[cfg(test)]
mod tests {
    use crate::database::entity::blog;
    use crate::database::postgres_repo::PostgresBlogRepository;
    use quill_core::error::RepoError;
    use quill_core::ports::BlogRepository;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn test_find_blog_by_id() {
        let blog_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![blog::Model {
                id: blog_id,
                title: "Test Blog".to_owned(),
                content: "Content".to_owned(),
                author: "Author".to_owned(),
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let result = repo.find_by_id(blog_id).await.unwrap();

        assert!(result.is_some());
        let post = result.unwrap();
        assert_eq!(post.title, "Test Blog");
        assert_eq!(post.id, blog_id);
    }

    #[tokio::test]
    async fn test_find_blog_by_id_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blog::Model>::new()])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let result = repo.find_by_id(uuid::Uuid::new_v4()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_zero_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let result = repo.delete_by_id(uuid::Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }
}
