use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::questions::{CreatedQuestion, NewQuestionRequest, QuestionItem};
use crate::rooms::{CreatedRoom, NewRoomRequest, RoomDetail, RoomSummary};

/// Public contract of the service, derived from the handler annotations
/// and served under `/docs`. Documentation only, no behavioral effect.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Askboard API",
        description = "Discussion rooms and the questions posted within them",
    ),
    paths(
        crate::rooms::list::list_rooms,
        crate::rooms::get::get_room,
        crate::rooms::new::create_room,
        crate::questions::list::list_questions,
        crate::questions::new::create_question,
    ),
    components(schemas(
        RoomSummary,
        RoomDetail,
        NewRoomRequest,
        CreatedRoom,
        QuestionItem,
        NewQuestionRequest,
        CreatedQuestion,
        ErrorBody,
    )),
    tags(
        (name = "Rooms", description = "Create and list discussion rooms"),
        (name = "Questions", description = "Post and list questions within a room"),
    )
)]
pub struct ApiDoc;
