//! PostgreSQL blog repository.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DbConn, EntityTrait, PaginatorTrait, QueryOrder};
use uuid::Uuid;

use quill_core::domain::{BlogPost, Page};
use quill_core::error::RepoError;
use quill_core::ports::BlogRepository;

use super::entity::blog::{self, Entity as BlogEntity};

/// SeaORM-backed [`BlogRepository`].
pub struct PostgresBlogRepository {
    db: DbConn,
}

impl PostgresBlogRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn query_err(e: sea_orm::DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let result = BlogEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_page(&self, page: u64, size: u64) -> Result<Page<BlogPost>, RepoError> {
        // created_at ascending approximates insertion order; uuid keys
        // carry no ordering of their own.
        let paginator = BlogEntity::find()
            .order_by_asc(blog::Column::CreatedAt)
            .paginate(&self.db, size.max(1));

        let total = paginator.num_items().await.map_err(query_err)?;
        let items = paginator.fetch_page(page).await.map_err(query_err)?;

        Ok(Page::new(
            items.into_iter().map(Into::into).collect(),
            total,
            page,
            size,
        ))
    }

    async fn save(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let model: blog::ActiveModel = post.into();

        // Upsert on the primary key so one statement covers both the
        // create and update paths.
        let saved = BlogEntity::insert(model)
            .on_conflict(
                OnConflict::column(blog::Column::Id)
                    .update_columns([
                        blog::Column::Title,
                        blog::Column::Content,
                        blog::Column::Author,
                        blog::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                let err_str = e.to_string();
                if err_str.contains("duplicate") || err_str.contains("unique") {
                    RepoError::Constraint("Blog already exists".to_string())
                } else {
                    RepoError::Query(err_str)
                }
            })?;

        Ok(saved.into())
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepoError> {
        let count = BlogEntity::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(query_err)?;

        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError> {
        let result = BlogEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
