//! Ownership guard - the single place where "admin owns course" is enforced.
//!
//! Create stamps the acting admin as creator, update is scoped to the owner
//! and silently affects zero rows otherwise, and listing is a filter on the
//! creator rather than a per-record gate. Handlers go through this guard
//! instead of re-implementing the check.

use std::sync::Arc;

use crate::domain::{AdminId, Course, CourseContent, CourseId};
use crate::error::RepoError;
use crate::ports::CourseRepository;

/// Enforces the ownership relation between admins and courses.
#[derive(Clone)]
pub struct OwnershipGuard {
    courses: Arc<dyn CourseRepository>,
}

impl OwnershipGuard {
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    /// Create a course on behalf of `acting`. Always allowed for an
    /// authenticated admin; the new course is stamped with `creator_id = acting`.
    pub async fn create(
        &self,
        acting: AdminId,
        content: CourseContent,
    ) -> Result<Course, RepoError> {
        let course = Course::new(acting, content);
        self.courses.insert(course).await
    }

    /// Replace the content of `id` if `acting` is its creator.
    ///
    /// Returns whether a row was affected. A denied update is
    /// indistinguishable from a missing course: both return `false`, so
    /// callers cannot probe for the existence of other admins' courses.
    /// Ownership is re-checked against the store on every call, never taken
    /// from the token.
    pub async fn update(
        &self,
        acting: AdminId,
        id: CourseId,
        content: CourseContent,
    ) -> Result<bool, RepoError> {
        let affected = self.courses.update_owned(id, acting, content).await?;
        Ok(affected > 0)
    }

    /// The courses owned by `acting`. This is a query filter, not a gate:
    /// other admins' courses are never fetched in the first place.
    pub async fn owned_courses(&self, acting: AdminId) -> Result<Vec<Course>, RepoError> {
        self.courses.find_by_creator(acting).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// Minimal course store backed by a mutex-guarded map.
    #[derive(Default)]
    struct MapCourseStore {
        courses: Mutex<HashMap<CourseId, Course>>,
    }

    #[async_trait]
    impl CourseRepository for MapCourseStore {
        async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, RepoError> {
            Ok(self.courses.lock().unwrap().get(&id).cloned())
        }

        async fn find_by_ids(&self, ids: &[CourseId]) -> Result<Vec<Course>, RepoError> {
            let courses = self.courses.lock().unwrap();
            Ok(ids.iter().filter_map(|id| courses.get(id).cloned()).collect())
        }

        async fn find_by_creator(&self, creator_id: AdminId) -> Result<Vec<Course>, RepoError> {
            let courses = self.courses.lock().unwrap();
            Ok(courses
                .values()
                .filter(|c| c.creator_id == creator_id)
                .cloned()
                .collect())
        }

        async fn insert(&self, course: Course) -> Result<Course, RepoError> {
            self.courses
                .lock()
                .unwrap()
                .insert(course.id, course.clone());
            Ok(course)
        }

        async fn update_owned(
            &self,
            id: CourseId,
            creator_id: AdminId,
            content: CourseContent,
        ) -> Result<u64, RepoError> {
            let mut courses = self.courses.lock().unwrap();
            match courses.get_mut(&id) {
                Some(course) if course.creator_id == creator_id => {
                    course.title = content.title;
                    course.description = content.description;
                    course.price = content.price;
                    course.image_url = content.image_url;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    fn content(title: &str) -> CourseContent {
        CourseContent {
            title: title.to_string(),
            description: "D".to_string(),
            price: 10.0,
            image_url: "u".to_string(),
        }
    }

    fn guard() -> OwnershipGuard {
        OwnershipGuard::new(Arc::new(MapCourseStore::default()))
    }

    #[tokio::test]
    async fn create_stamps_acting_admin_as_creator() {
        let guard = guard();
        let admin = AdminId::generate();

        let course = guard.create(admin, content("T")).await.unwrap();

        assert_eq!(course.creator_id, admin);
        assert_eq!(course.title, "T");
    }

    #[tokio::test]
    async fn owner_update_is_applied() {
        let guard = guard();
        let admin = AdminId::generate();
        let course = guard.create(admin, content("before")).await.unwrap();

        let applied = guard.update(admin, course.id, content("after")).await.unwrap();

        assert!(applied);
        let courses = guard.owned_courses(admin).await.unwrap();
        assert_eq!(courses[0].title, "after");
    }

    #[tokio::test]
    async fn cross_admin_update_affects_nothing() {
        let guard = guard();
        let owner = AdminId::generate();
        let intruder = AdminId::generate();
        let course = guard.create(owner, content("original")).await.unwrap();

        let applied = guard
            .update(intruder, course.id, content("hijacked"))
            .await
            .unwrap();

        assert!(!applied);
        let courses = guard.owned_courses(owner).await.unwrap();
        assert_eq!(courses[0].title, "original");
    }

    #[tokio::test]
    async fn denied_update_looks_like_missing_course() {
        let guard = guard();
        let owner = AdminId::generate();
        let intruder = AdminId::generate();
        let course = guard.create(owner, content("T")).await.unwrap();

        let denied = guard
            .update(intruder, course.id, content("x"))
            .await
            .unwrap();
        let missing = guard
            .update(intruder, CourseId::generate(), content("x"))
            .await
            .unwrap();

        assert_eq!(denied, missing);
    }

    #[tokio::test]
    async fn listing_is_scoped_to_creator() {
        let guard = guard();
        let a = AdminId::generate();
        let b = AdminId::generate();
        guard.create(a, content("a1")).await.unwrap();
        guard.create(a, content("a2")).await.unwrap();
        guard.create(b, content("b1")).await.unwrap();

        let mine = guard.owned_courses(a).await.unwrap();

        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|c| c.creator_id == a));
    }
}
