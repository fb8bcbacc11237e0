pub mod api;
pub mod product;

pub use api::{
    DEFAULT_BASE_URL, ErrorBody, HealthResponse, StartTrackingRequest, StatusResponse,
    StopTrackingRequest, TrackingStarted, routes,
};
pub use product::{ItemId, PreviewResponse, ProductSummary};
