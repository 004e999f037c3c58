#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use crate::database::entity::blog;
    use crate::database::postgres_repo::PostgresBlogRepository;
    use scribe_core::domain::{Blog, BlogPatch, NewBlog};
    use scribe_core::ports::BlogRepository;

    fn row(id: i32, title: &str, content: &str) -> blog::Model {
        let now = Utc::now();
        blog::Model {
            id,
            title: title.to_owned(),
            content: content.to_owned(),
            image: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn insert_returns_stored_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row(1, "First", "Hello")]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);
        let blog = repo
            .insert(NewBlog {
                title: "First".to_owned(),
                content: "Hello".to_owned(),
                image: None,
            })
            .await
            .unwrap();

        assert_eq!(blog.id, 1);
        assert_eq!(blog.title, "First");
        assert_eq!(blog.image, None);
    }

    #[tokio::test]
    async fn find_by_id_returns_match() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row(3, "Found", "Body")]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);
        let result: Option<Blog> = repo.find_by_id(3).await.unwrap();

        let blog = result.unwrap();
        assert_eq!(blog.id, 3);
        assert_eq!(blog.title, "Found");
    }

    #[tokio::test]
    async fn find_by_id_misses_without_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blog::Model>::new()])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);
        assert!(repo.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_all_preserves_store_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row(2, "Second", "B"), row(1, "First", "A")]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);
        let blogs = repo.list_all().await.unwrap();

        assert_eq!(blogs.len(), 2);
        assert_eq!(blogs[0].id, 2);
        assert_eq!(blogs[1].id, 1);
    }

    #[tokio::test]
    async fn update_applies_patch_fields() {
        let existing = row(5, "Old title", "Old content");
        let mut updated = existing.clone();
        updated.title = "New title".to_owned();
        updated.updated_at = Utc::now().into();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![existing], vec![updated]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);
        let blog = repo
            .update(
                5,
                BlogPatch {
                    title: Some("New title".to_owned()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(blog.title, "New title");
        assert_eq!(blog.content, "Old content");
    }

    #[tokio::test]
    async fn update_missing_row_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blog::Model>::new()])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);
        let result = repo
            .update(
                42,
                BlogPatch {
                    content: Some("anything".to_owned()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_returns_last_known_values() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row(7, "Doomed", "Bye")]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);
        let blog = repo.delete_by_id(7).await.unwrap().unwrap();

        assert_eq!(blog.id, 7);
        assert_eq!(blog.title, "Doomed");
    }

    #[tokio::test]
    async fn delete_missing_row_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blog::Model>::new()])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);
        assert!(repo.delete_by_id(404).await.unwrap().is_none());
    }
}
