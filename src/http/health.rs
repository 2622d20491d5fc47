use crate::storage::on_disk::OnDiskStorage;
use actix_web::web::Data;
use actix_web::{HttpResponse, Responder};
use std::sync::Arc;
use tracing::error;

pub(crate) async fn readiness_check(storage: Data<Arc<OnDiskStorage>>) -> impl Responder {
    if let Err(error) = storage.check_readable().await {
        error!(?error, "Readiness check failed");
        return HttpResponse::ServiceUnavailable().finish();
    }

    HttpResponse::Ok().finish()
}
