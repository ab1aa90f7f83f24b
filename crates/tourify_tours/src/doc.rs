// File: crates/tourify_tours/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use crate::handlers::BookTourRequest;
use tourify_common::models::{Slot, Tour, TourStats};
use utoipa::OpenApi;

#[utoipa::path(
    get,
    path = "/tour/slots/{property_id}",
    params(
        ("property_id" = String, Path, description = "Property identifier", example = "prop-42")
    ),
    responses(
        (status = 200, description = "Available tour slots", body = Vec<Slot>),
        (status = 400, description = "Property is not available for self-serve tours")
    ),
    tag = "Tours"
)]
fn doc_get_available_slots_handler() {}

#[utoipa::path(
    post,
    path = "/tour",
    request_body(content = BookTourRequest, example = json!({
        "propertyId": "prop-42",
        "tourTime": "2025-06-04T10:00:00Z",
        "userId": "user-7"
    })),
    responses(
        (status = 200, description = "Tour booked", body = Tour),
        (status = 400, description = "Business rule violation (window, gate, or occupied slot)")
    ),
    tag = "Tours"
)]
fn doc_book_tour_handler() {}

#[utoipa::path(
    delete,
    path = "/tour/{tour_id}",
    params(
        ("tour_id" = i64, Path, description = "Tour identifier", example = 1)
    ),
    responses(
        (status = 200, description = "Tour cancelled"),
        (status = 400, description = "Tour unknown or no longer cancellable")
    ),
    tag = "Tours"
)]
fn doc_cancel_tour_handler() {}

#[utoipa::path(
    patch,
    path = "/tour/{tour_id}/reschedule",
    params(
        ("tour_id" = i64, Path, description = "Tour identifier", example = 1),
        ("tourTime" = String, Query, description = "Replacement slot start (RFC 3339)", example = "2025-06-05T10:30:00Z")
    ),
    responses(
        (status = 200, description = "Replacement tour record", body = Tour),
        (status = 400, description = "Tour unknown, started, or target slot unavailable")
    ),
    tag = "Tours"
)]
fn doc_reschedule_tour_handler() {}

#[utoipa::path(
    get,
    path = "/tour/stats",
    responses(
        (status = 200, description = "Aggregate booking counters", body = TourStats)
    ),
    tag = "Tours"
)]
fn doc_get_stats_handler() {}

/// OpenAPI documentation for the tour API
#[derive(OpenApi)]
#[openapi(
    paths(
        doc_get_available_slots_handler,
        doc_book_tour_handler,
        doc_cancel_tour_handler,
        doc_reschedule_tour_handler,
        doc_get_stats_handler
    ),
    components(schemas(BookTourRequest, Slot, Tour, TourStats)),
    tags(
        (name = "Tours", description = "Self-serve property tour scheduling")
    )
)]
pub struct TourApiDoc;
