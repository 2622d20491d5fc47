mod download;
mod health;
mod interests;
mod query;
mod responses;


use actix_web::web;

pub(crate) use download::get_download_data;
pub(crate) use health::readiness_check;
pub(crate) use interests::get_interest_detail;

pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(web::resource("/interests/detail").route(web::get().to(get_interest_detail)))
            .service(web::resource("/download").route(web::get().to(get_download_data))),
    )
    .service(web::resource("/health/readiness").route(web::get().to(readiness_check)));
}
