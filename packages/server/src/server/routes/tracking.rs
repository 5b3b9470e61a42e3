use axum::{
    extract::{Extension, Path},
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::IntoResponse,
};

use crate::domains::emails::actions;
use crate::server::app::AxumAppState;

/// 1x1 fully transparent PNG.
pub static TRACKING_PIXEL: [u8; 68] = [
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f, 0x15, 0xc4,
    0x89, 0x00, 0x00, 0x00, 0x0b, 0x49, 0x44, 0x41, 0x54, 0x78, 0xda, 0x63, 0x60, 0x00, 0x02, 0x00,
    0x00, 0x05, 0x00, 0x01, 0xe9, 0xfa, 0xdc, 0xd8, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4e, 0x44,
    0xae, 0x42, 0x60, 0x82,
];

/// GET /track/:email_id
///
/// Always answers with the pixel, whether or not the id is known.
pub async fn track_open_handler(
    Extension(state): Extension<AxumAppState>,
    Path(email_id): Path<String>,
) -> impl IntoResponse {
    actions::record_open(&state.deps.store, &email_id);

    (
        [
            (CONTENT_TYPE, "image/png"),
            (CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
        ],
        &TRACKING_PIXEL[..],
    )
}
