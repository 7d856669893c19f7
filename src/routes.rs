use std::path::PathBuf;

use actix_files::Files;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures::{StreamExt, TryStreamExt};
use log::{error, info};
use serde_json::json;
use uuid::Uuid;

use crate::error::ApiError;
use crate::inference::client::InferenceClient;
use crate::inference::preprocess;
use crate::knowledge;
use crate::media::MediaStore;
use crate::storage::{ScanRecord, ScanStore};

pub fn configure_routes(cfg: &mut web::ServiceConfig, media_root: PathBuf) {
    cfg.service(web::resource("/api/predict").route(web::post().to(predict)))
        .service(web::resource("/api/treatment/{disease}").route(web::get().to(treatment)))
        .service(web::resource("/api/plant-info/{plant_name}").route(web::get().to(plant_info)))
        .service(web::resource("/api/history").route(web::get().to(history)))
        .service(web::resource("/api/history/{id}").route(web::get().to(history_detail)))
        .service(Files::new("/media", media_root));
}

struct Upload {
    bytes: Vec<u8>,
    mime_type: String,
}

/// Pulls the `image` field out of the multipart payload. Rejects the
/// request before anything touches the filesystem.
async fn read_image_field(payload: &mut Multipart) -> Result<Upload, ApiError> {
    while let Ok(Some(mut field)) = payload.try_next().await {
        if field.name() != Some("image") {
            continue;
        }

        let mime_type = field
            .content_type()
            .map(|m| m.essence_str().to_string())
            .ok_or(ApiError::InvalidInputKind)?;
        if !mime_type.starts_with("image/") {
            return Err(ApiError::InvalidInputKind);
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let data = chunk.map_err(|e| ApiError::Internal(e.to_string()))?;
            bytes.extend_from_slice(&data);
        }
        if bytes.is_empty() {
            return Err(ApiError::InvalidInputKind);
        }

        return Ok(Upload { bytes, mime_type });
    }

    Err(ApiError::InvalidInputKind)
}

async fn predict(
    mut payload: Multipart,
    client: web::Data<InferenceClient>,
    store: web::Data<dyn ScanStore>,
    media: web::Data<MediaStore>,
) -> Result<HttpResponse, ApiError> {
    let upload = read_image_field(&mut payload).await?;
    let extension = MediaStore::extension_for(&upload.mime_type);

    // The guard deletes the staged file on every exit path below;
    // promotion moves it out first, which the guard tolerates.
    let staged = media.stage_upload(&upload.bytes, extension)?;

    let tensor = preprocess::preprocess(&upload.bytes)?;
    let outcome = client.predict(&tensor).await.inspect_err(|e| {
        error!("Inference failed for {}: {}", staged.path().display(), e);
    })?;

    let image_url = media.promote(&staged, extension)?;
    let disease_info = knowledge::lookup_disease(outcome.class_index);

    let record = ScanRecord::new(
        image_url,
        disease_info.disease.clone(),
        outcome.confidence,
    );
    store.add(record).await?;

    info!(
        "Prediction: {}, Confidence: {:.4}",
        disease_info.disease, outcome.confidence
    );

    Ok(HttpResponse::Ok().json(json!({
        "disease": disease_info.disease,
        "confidence": outcome.confidence,
        "description": disease_info.description,
        "treatment": disease_info.treatment,
        "sources": knowledge::reference_sources(),
    })))
}

async fn treatment(path: web::Path<String>) -> HttpResponse {
    let disease = path.into_inner();
    HttpResponse::Ok().json(json!({
        "disease": disease,
        "treatment": knowledge::treatment_for(&disease),
        "steps": knowledge::treatment_steps(),
    }))
}

async fn plant_info(path: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok().json(knowledge::plant_info(&path.into_inner()))
}

async fn history(store: web::Data<dyn ScanStore>) -> Result<HttpResponse, ApiError> {
    let scans = store.list().await?;
    Ok(HttpResponse::Ok().json(scans))
}

async fn history_detail(
    store: web::Data<dyn ScanStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = Uuid::parse_str(&path.into_inner()).map_err(|_| ApiError::NotFound)?;
    match store.get_by_id(id).await? {
        Some(scan) => Ok(HttpResponse::Ok().json(scan)),
        None => Err(ApiError::NotFound),
    }
}
