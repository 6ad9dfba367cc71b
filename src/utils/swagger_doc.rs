use crate::utils::error::AppError;
use indexmap::IndexMap;
use okapi::openapi3::SchemaObject;
use rocket_okapi::gen::OpenApiGenerator;
use rocket_okapi::okapi::openapi3::{MediaType, RefOr, Response, Responses};
use rocket_okapi::response::OpenApiResponderInner;
use serde_json::json;

impl OpenApiResponderInner for AppError {
    fn responses(_gen: &mut OpenApiGenerator) -> rocket_okapi::Result<Responses> {
        let examples = [
            ("Bad Request", AppError::BadRequest("Invalid departure date 'tomorrow'".to_string())),
            ("Not Found", AppError::NotFound("No flight with id 42".to_string())),
            ("Internal Server Error", AppError::DataSource("flight data unavailable".to_string())),
        ];

        let responses = examples
            .into_iter()
            .map(|(description, error)| (error.status().code.to_string(), json_error(description, &error)))
            .collect();

        Ok(Responses {
            responses,
            ..Default::default()
        })
    }
}

// `{ "error": ... }` body, as rendered by the AppError responder
fn json_error(description: &str, error: &AppError) -> RefOr<Response> {
    let media = MediaType {
        schema: Some(SchemaObject::default()),
        example: Some(json!({ "error": error.to_string() })),
        ..Default::default()
    };

    RefOr::Object(Response {
        description: description.to_string(),
        content: IndexMap::from([("application/json".to_string(), media)]),
        ..Default::default()
    })
}
