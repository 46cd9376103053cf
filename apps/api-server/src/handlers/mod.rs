//! HTTP handlers and route configuration.

mod admin;
mod health;
mod user;


use actix_web::web;

use skola_core::domain::{Course, Purchase};
use skola_shared::dto::{CourseDto, PurchaseDto};

/// Configure all application routes.
///
/// Paths and methods are the published API contract and must not change.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/admin")
                .route("/signup", web::post().to(admin::signup))
                .route("/signin", web::post().to(admin::signin))
                .service(
                    web::resource("/course")
                        .route(web::post().to(admin::create_course))
                        .route(web::put().to(admin::update_course)),
                )
                .route("/course/bulk", web::get().to(admin::my_courses)),
        )
        .service(
            web::scope("/user")
                .route("/signup", web::post().to(user::signup))
                .route("/signin", web::post().to(user::signin))
                .route("/purchases", web::get().to(user::purchases)),
        );
}

pub(crate) fn course_dto(course: &Course) -> CourseDto {
    CourseDto {
        id: course.id.0,
        title: course.title.clone(),
        description: course.description.clone(),
        price: course.price,
        image_url: course.image_url.clone(),
        creator_id: course.creator_id.0,
    }
}

pub(crate) fn purchase_dto(purchase: &Purchase) -> PurchaseDto {
    PurchaseDto {
        id: purchase.id.0,
        user_id: purchase.user_id.0,
        course_id: purchase.course_id.0,
    }
}
