//! OpenAPI document covering every REST endpoint.

use utoipa::OpenApi;

use super::handlers::{choice, list, system};

/// Generated OpenAPI description of the service.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Random Choice API",
        description = "Named lists of choices with uniform random picking."
    ),
    paths(
        system::health_handler,
        list::list_lists,
        list::create_list,
        list::get_list,
        list::delete_list,
        list::pick_choice,
        choice::list_choices,
        choice::add_choice,
        choice::get_choice,
        choice::delete_choice,
    ),
    tags(
        (name = "System", description = "Service status"),
        (name = "Lists", description = "List management and random pick"),
        (name = "Choices", description = "Choice management"),
    )
)]
pub struct ApiDoc;
