#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use skola_core::domain::{AdminId, CourseContent, CourseId};
    use skola_core::ports::{AdminRepository, CourseRepository};

    use crate::database::entity::{admin, course};
    use crate::database::repos::{PostgresAdminStore, PostgresCourseStore};

    #[tokio::test]
    async fn find_admin_by_email_maps_model_to_domain() {
        let admin_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![admin::Model {
                id: admin_id,
                email: "jane@example.com".to_owned(),
                password_hash: "$argon2id$stub".to_owned(),
                first_name: "Jane".to_owned(),
                last_name: "Doe".to_owned(),
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let store = PostgresAdminStore::new(db);

        let found = store.find_by_email("jane@example.com").await.unwrap();

        let admin = found.unwrap();
        assert_eq!(admin.id, AdminId(admin_id));
        assert_eq!(admin.email, "jane@example.com");
    }

    #[tokio::test]
    async fn find_courses_by_creator_maps_rows() {
        let creator = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![course::Model {
                id: uuid::Uuid::new_v4(),
                title: "T".to_owned(),
                description: "D".to_owned(),
                price: 10.0,
                image_url: "u".to_owned(),
                creator_id: creator,
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let store = PostgresCourseStore::new(db);

        let courses = store.find_by_creator(AdminId(creator)).await.unwrap();

        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].creator_id, AdminId(creator));
    }

    #[tokio::test]
    async fn update_owned_reports_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let store = PostgresCourseStore::new(db);

        let affected = store
            .update_owned(
                CourseId::generate(),
                AdminId::generate(),
                CourseContent {
                    title: "T".to_owned(),
                    description: "D".to_owned(),
                    price: 10.0,
                    image_url: "u".to_owned(),
                },
            )
            .await
            .unwrap();

        assert_eq!(affected, 0);
    }
}
