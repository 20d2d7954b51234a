use crate::application::http::{
    groq::router::GroqApiDoc, health::router::HealthApiDoc, twelvelabs::router::TwelveLabsApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FlavorMap API"
    ),
    nest(
        (path = "/api/groq", api = GroqApiDoc),
        (path = "/api/twelvelabs", api = TwelveLabsApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
