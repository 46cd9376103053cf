//! Domain entities - the core business objects.

mod course;

mod principal;

pub use course::{Course, CourseContent, CourseId, Purchase, PurchaseId};
pub use principal::{Admin, AdminId, PrincipalKind, User, UserId};
