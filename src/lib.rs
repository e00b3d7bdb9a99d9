pub mod config;
pub mod domain;
pub mod global;
pub mod state;
pub mod utils;

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::booking::handler::create_booking,
        domain::booking::handler::get_availability,
        domain::booking::handler::list_my_bookings,
        domain::booking::handler::list_bookings,
        domain::booking::handler::get_booking,
        domain::booking::handler::review_booking,
        domain::booking::handler::delete_booking,
        domain::room::handler::list_rooms,
        domain::room::handler::list_rooms_by_building,
        domain::room::handler::get_room,
        domain::room::handler::create_room,
        domain::room::handler::update_room,
        domain::room::handler::delete_room,
        domain::user::handler::list_users,
        domain::user::handler::get_user,
        domain::user::handler::update_user_role,
    ),
    components(
        schemas(
            domain::booking::dto::CreateBookingRequest,
            domain::booking::dto::ReviewBookingRequest,
            domain::booking::dto::BookingResponse,
            domain::booking::dto::AvailabilityResponse,
            domain::booking::dto::BookingListResponse,
            domain::booking::dto::Pagination,
            domain::booking::dto::SuccessBookingResponse,
            domain::booking::dto::SuccessAvailabilityResponse,
            domain::booking::dto::SuccessBookingListResponse,
            domain::booking::entity::booking_request::BookingStatus,
            domain::room::dto::CreateRoomRequest,
            domain::room::dto::UpdateRoomRequest,
            domain::room::dto::RoomResponse,
            domain::room::dto::SuccessRoomResponse,
            domain::room::dto::SuccessRoomListResponse,
            domain::room::entity::room::Building,
            domain::user::dto::UpdateRoleRequest,
            domain::user::dto::UserResponse,
            domain::user::dto::UserListResponse,
            domain::user::dto::SuccessUserResponse,
            domain::user::dto::SuccessUserListResponse,
            domain::user::entity::user::Role,
            utils::response::ErrorResponse,
        )
    ),
    tags(
        (name = "Booking", description = "예약 요청 및 가용성 API"),
        (name = "Room", description = "방 카탈로그 API"),
        (name = "User", description = "사용자 관리 API")
    )
)]
pub struct ApiDoc;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(|| async { "OK" }))
        // Room
        .route(
            "/api/v1/rooms",
            get(domain::room::handler::list_rooms).post(domain::room::handler::create_room),
        )
        .route(
            "/api/v1/rooms/building/:building",
            get(domain::room::handler::list_rooms_by_building),
        )
        .route(
            "/api/v1/rooms/:id",
            get(domain::room::handler::get_room)
                .put(domain::room::handler::update_room)
                .delete(domain::room::handler::delete_room),
        )
        // Booking
        .route(
            "/api/v1/bookings",
            post(domain::booking::handler::create_booking)
                .get(domain::booking::handler::list_bookings),
        )
        .route(
            "/api/v1/bookings/my-bookings",
            get(domain::booking::handler::list_my_bookings),
        )
        .route(
            "/api/v1/bookings/availability/:building/:room",
            get(domain::booking::handler::get_availability),
        )
        .route(
            "/api/v1/bookings/:id",
            get(domain::booking::handler::get_booking)
                .delete(domain::booking::handler::delete_booking),
        )
        .route(
            "/api/v1/bookings/:id/status",
            patch(domain::booking::handler::review_booking),
        )
        // User
        .route("/api/v1/users", get(domain::user::handler::list_users))
        .route("/api/v1/users/:id", get(domain::user::handler::get_user))
        .route(
            "/api/v1/users/:id/role",
            patch(domain::user::handler::update_user_role),
        )
        .layer(middleware::from_fn(global::middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
