//! REST endpoints shared by every resource.
//!
//! `crud_resource!` expands to a module holding the service functions, the
//! documented handlers, a `router()` and an `openapi()` fragment for one entity.

macro_rules! crud_resource {
    (
        mod $module:ident {
            entity: $entity:ident,
            dto: $dto:ident,
            id: $id:ident,
            name: $name:literal,
            tag: $tag:literal,
            paths: ($collection:literal, $item:literal, $count:literal),
            $(search: ($search_path:literal, [$($search_col:ident),+ $(,)?]),)?
            $(guard: $guard:path,)?
        }
    ) => {
        pub mod $module {
            use axum::{
                Json, Router,
                extract::{Path, State},
                http::{HeaderMap, StatusCode},
                routing::get,
            };
            use serde_json::Value;
            use utoipa::OpenApi;
            #[allow(unused_imports)]
            use uuid::Uuid;

            use crate::{
                db::OrmConn,
                dto::$dto,
                entity::$entity::{Column, Entity},
                error::AppResult,
                extract::{AppJson, QueryParams},
                middleware::auth::Auditor,
                response::{ApiResponse, CountData, ItemList, Meta, alert},
                routes::params::{Pagination, SortOrder},
                services::criteria::{ListQuery, filter_condition},
                state::AppState,
            };

            pub const ENTITY_NAME: &str = $name;

            crate::routes::resource::resource_guard!($dto $(, $guard)?);

            pub mod service {
                use chrono::Utc;
                use sea_orm::{
                    ActiveModelTrait,
                    ActiveValue::{Set, Unchanged},
                    Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
                };
                use serde_json::json;
                use validator::Validate;

                use super::*;
                use crate::{
                    audit,
                    entity::$entity::Model,
                    error::AppError,
                    services::crud::{self, EntityKey},
                };

                pub async fn create(state: &AppState, auditor: &Auditor, dto: $dto) -> AppResult<$dto> {
                    crud::ensure_new(ENTITY_NAME, dto.id)?;
                    dto.validate()?;
                    guard(&*state.orm, &dto).await?;

                    let now = Utc::now();
                    let mut active = dto.into_active();
                    if let Some(id) = <$id as EntityKey>::generate() {
                        active.id = Set(id);
                    }
                    active.created_by = Set(auditor.login().to_string());
                    active.created_date = Set(now.into());
                    active.last_modified_by = Set(Some(auditor.login().to_string()));
                    active.last_modified_date = Set(Some(now.into()));

                    let model = active.insert(&*state.orm).await?;
                    tracing::debug!(entity = ENTITY_NAME, id = %model.id, "created");
                    audit::record(&*state.orm, auditor, "create", ENTITY_NAME, json!({ "id": model.id }))
                        .await;
                    Ok($dto::from(model))
                }

                pub async fn update(
                    state: &AppState,
                    auditor: &Auditor,
                    id: $id,
                    dto: $dto,
                ) -> AppResult<$dto> {
                    crud::ensure_matching_id(ENTITY_NAME, id, dto.id)?;
                    dto.validate()?;
                    let existing = find_existing(state, id).await?;
                    guard(&*state.orm, &dto).await?;
                    save(state, auditor, existing, dto).await
                }

                /// Merge `patch` into the stored record, then validate and save the result.
                pub async fn partial_update(
                    state: &AppState,
                    auditor: &Auditor,
                    id: $id,
                    patch: Value,
                ) -> AppResult<$dto> {
                    let body_id = crud::patch_id::<$id>(ENTITY_NAME, &patch)?;
                    crud::ensure_matching_id(ENTITY_NAME, id, body_id)?;
                    let existing = find_existing(state, id).await?;

                    let mut merged = serde_json::to_value($dto::from(existing.clone()))
                        .map_err(anyhow::Error::from)?;
                    crud::merge_patch(&mut merged, patch);
                    let dto: $dto = crud::from_merged(merged)?;

                    dto.validate()?;
                    guard(&*state.orm, &dto).await?;
                    save(state, auditor, existing, dto).await
                }

                pub async fn list(state: &AppState, query: ListQuery<Column>) -> AppResult<(Vec<$dto>, Meta)> {
                    let sort = query.sort.unwrap_or((Column::Id, SortOrder::Asc));
                    page(state, query.condition, sort, &query.pagination).await
                }

                pub async fn count(state: &AppState, condition: Condition) -> AppResult<u64> {
                    Ok(Entity::find().filter(condition).count(&*state.orm).await?)
                }

                pub async fn get(state: &AppState, id: $id) -> AppResult<$dto> {
                    let model = Entity::find_by_id(id)
                        .one(&*state.orm)
                        .await?
                        .ok_or(AppError::NotFound)?;
                    Ok($dto::from(model))
                }

                pub async fn delete(state: &AppState, auditor: &Auditor, id: $id) -> AppResult<()> {
                    let result = Entity::delete_by_id(id).exec(&*state.orm).await?;
                    if result.rows_affected == 0 {
                        return Err(AppError::NotFound);
                    }
                    tracing::debug!(entity = ENTITY_NAME, %id, "deleted");
                    audit::record(&*state.orm, auditor, "delete", ENTITY_NAME, json!({ "id": id })).await;
                    Ok(())
                }

                /// One page of rows matching `condition`.
                pub async fn page(
                    state: &AppState,
                    condition: Condition,
                    (column, order): (Column, SortOrder),
                    pagination: &Pagination,
                ) -> AppResult<(Vec<$dto>, Meta)> {
                    let (page, per_page, offset) = pagination.normalize();
                    let select = Entity::find().filter(condition);
                    let total = select.clone().count(&*state.orm).await?;
                    let items = select
                        .order_by(column, order.into())
                        .limit(per_page as u64)
                        .offset(offset as u64)
                        .all(&*state.orm)
                        .await?
                        .into_iter()
                        .map($dto::from)
                        .collect();
                    Ok((items, Meta::new(page, per_page, total as i64)))
                }

                async fn find_existing(state: &AppState, id: $id) -> AppResult<Model> {
                    Entity::find_by_id(id)
                        .one(&*state.orm)
                        .await?
                        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME))
                }

                async fn save(
                    state: &AppState,
                    auditor: &Auditor,
                    existing: Model,
                    dto: $dto,
                ) -> AppResult<$dto> {
                    let mut active = dto.into_active();
                    active.id = Unchanged(existing.id);
                    active.last_modified_by = Set(Some(auditor.login().to_string()));
                    active.last_modified_date = Set(Some(Utc::now().into()));

                    let model = active.update(&*state.orm).await?;
                    tracing::debug!(entity = ENTITY_NAME, id = %model.id, "updated");
                    audit::record(&*state.orm, auditor, "update", ENTITY_NAME, json!({ "id": model.id }))
                        .await;
                    Ok($dto::from(model))
                }
            }

            #[utoipa::path(
                post,
                path = $collection,
                operation_id = concat!("create_", stringify!($module)),
                request_body = $dto,
                responses(
                    (status = 201, description = "Created", body = ApiResponse<$dto>),
                    (status = 400, description = "Invalid payload or identifier already set"),
                ),
                security(("bearer_auth" = [])),
                tag = $tag
            )]
            pub async fn create(
                State(state): State<AppState>,
                auditor: Auditor,
                AppJson(dto): AppJson<$dto>,
            ) -> AppResult<(StatusCode, HeaderMap, Json<ApiResponse<$dto>>)> {
                let created = service::create(&state, &auditor, dto).await?;
                let id = created.id.map(|id| id.to_string()).unwrap_or_default();
                Ok((
                    StatusCode::CREATED,
                    alert::created(ENTITY_NAME, &id),
                    Json(ApiResponse::success("Created", created, Some(Meta::empty()))),
                ))
            }

            #[utoipa::path(
                put,
                path = $item,
                operation_id = concat!("update_", stringify!($module)),
                params(("id" = $id, Path, description = "Identifier, must match the body")),
                request_body = $dto,
                responses(
                    (status = 200, description = "Updated", body = ApiResponse<$dto>),
                    (status = 400, description = "Invalid payload or identifier"),
                    (status = 404, description = "Not found"),
                ),
                security(("bearer_auth" = [])),
                tag = $tag
            )]
            pub async fn update(
                State(state): State<AppState>,
                auditor: Auditor,
                Path(id): Path<$id>,
                AppJson(dto): AppJson<$dto>,
            ) -> AppResult<(HeaderMap, Json<ApiResponse<$dto>>)> {
                let updated = service::update(&state, &auditor, id, dto).await?;
                Ok((
                    alert::updated(ENTITY_NAME, &id.to_string()),
                    Json(ApiResponse::success("Updated", updated, Some(Meta::empty()))),
                ))
            }

            #[utoipa::path(
                patch,
                path = $item,
                operation_id = concat!("partial_update_", stringify!($module)),
                params(("id" = $id, Path, description = "Identifier, must match the body")),
                request_body(
                    content = $dto,
                    content_type = "application/merge-patch+json",
                    description = "Members to change; absent or null members keep their value"
                ),
                responses(
                    (status = 200, description = "Updated", body = ApiResponse<$dto>),
                    (status = 400, description = "Invalid payload or identifier"),
                    (status = 404, description = "Not found"),
                ),
                security(("bearer_auth" = [])),
                tag = $tag
            )]
            pub async fn partial_update(
                State(state): State<AppState>,
                auditor: Auditor,
                Path(id): Path<$id>,
                AppJson(patch): AppJson<Value>,
            ) -> AppResult<(HeaderMap, Json<ApiResponse<$dto>>)> {
                let updated = service::partial_update(&state, &auditor, id, patch).await?;
                Ok((
                    alert::updated(ENTITY_NAME, &id.to_string()),
                    Json(ApiResponse::success("Updated", updated, Some(Meta::empty()))),
                ))
            }

            #[utoipa::path(
                get,
                path = $collection,
                operation_id = concat!("list_", stringify!($module)),
                params(
                    Pagination,
                    ("sort_by" = Option<String>, Query, description = "Column to sort by, default id"),
                    ("sort_order" = Option<SortOrder>, Query, description = "asc or desc, default asc"),
                ),
                responses(
                    (status = 200, description = "One page of records", body = ApiResponse<ItemList<$dto>>),
                    (status = 400, description = "Unknown filter, field or value"),
                ),
                tag = $tag
            )]
            pub async fn list(
                State(state): State<AppState>,
                QueryParams(params): QueryParams,
            ) -> AppResult<Json<ApiResponse<ItemList<$dto>>>> {
                let query = ListQuery::<Column>::from_params(&params)?;
                let (items, meta) = service::list(&state, query).await?;
                Ok(Json(ApiResponse::success(ENTITY_NAME, ItemList { items }, Some(meta))))
            }

            #[utoipa::path(
                get,
                path = $count,
                operation_id = concat!("count_", stringify!($module)),
                responses(
                    (status = 200, description = "Number of matching records", body = ApiResponse<CountData>),
                    (status = 400, description = "Unknown filter, field or value"),
                ),
                tag = $tag
            )]
            pub async fn count(
                State(state): State<AppState>,
                QueryParams(params): QueryParams,
            ) -> AppResult<Json<ApiResponse<CountData>>> {
                let condition = filter_condition::<Column>(&params)?;
                let count = service::count(&state, condition).await?;
                Ok(Json(ApiResponse::success(ENTITY_NAME, CountData { count }, None)))
            }

            #[utoipa::path(
                get,
                path = $item,
                operation_id = concat!("get_", stringify!($module)),
                params(("id" = $id, Path, description = "Identifier")),
                responses(
                    (status = 200, description = "The record", body = ApiResponse<$dto>),
                    (status = 404, description = "Not found"),
                ),
                tag = $tag
            )]
            pub async fn get_one(
                State(state): State<AppState>,
                Path(id): Path<$id>,
            ) -> AppResult<Json<ApiResponse<$dto>>> {
                let dto = service::get(&state, id).await?;
                Ok(Json(ApiResponse::success(ENTITY_NAME, dto, None)))
            }

            #[utoipa::path(
                delete,
                path = $item,
                operation_id = concat!("delete_", stringify!($module)),
                params(("id" = $id, Path, description = "Identifier")),
                responses(
                    (status = 204, description = "Deleted"),
                    (status = 400, description = "Still referenced by another record"),
                    (status = 404, description = "Not found"),
                ),
                security(("bearer_auth" = [])),
                tag = $tag
            )]
            pub async fn delete(
                State(state): State<AppState>,
                auditor: Auditor,
                Path(id): Path<$id>,
            ) -> AppResult<(StatusCode, HeaderMap)> {
                service::delete(&state, &auditor, id).await?;
                Ok((StatusCode::NO_CONTENT, alert::deleted(ENTITY_NAME, &id.to_string())))
            }

            crate::routes::resource::resource_search!($module, $dto, $tag; $($search_path, [$($search_col),+])?);

            #[derive(OpenApi)]
            #[openapi(paths(create, update, partial_update, list, count, get_one, delete))]
            struct Doc;

            pub fn router() -> Router<AppState> {
                Router::new()
                    .route($collection, get(list).post(create))
                    .route($count, get(count))
                    .route($item, get(get_one).put(update).patch(partial_update).delete(delete))
                    .merge(search_routes())
            }

            pub fn openapi() -> utoipa::openapi::OpenApi {
                let mut doc = Doc::openapi();
                if let Some(search) = search_doc() {
                    doc.merge(search);
                }
                doc
            }
        }
    };
}

/// Pre-save check for one resource; a no-op unless a guard function is named.
macro_rules! resource_guard {
    ($dto:ident) => {
        async fn guard(_orm: &OrmConn, _dto: &$dto) -> AppResult<()> {
            Ok(())
        }
    };
    ($dto:ident, $guard:path) => {
        async fn guard(orm: &OrmConn, dto: &$dto) -> AppResult<()> {
            $guard(orm, dto).await
        }
    };
}

/// Free-text search over the listed text columns.
macro_rules! resource_search {
    ($module:ident, $dto:ident, $tag:literal;) => {
        fn search_routes() -> Router<AppState> {
            Router::new()
        }

        fn search_doc() -> Option<utoipa::openapi::OpenApi> {
            None
        }
    };
    ($module:ident, $dto:ident, $tag:literal; $path:literal, [$($col:ident),+]) => {
        const SEARCH_COLUMNS: &[Column] = &[$(Column::$col),+];

        #[utoipa::path(
            get,
            path = $path,
            operation_id = concat!("search_", stringify!($module)),
            params(
                ("query" = String, Query, description = "Text to look for, case-insensitive"),
                Pagination,
            ),
            responses(
                (status = 200, description = "Matching records", body = ApiResponse<ItemList<$dto>>),
                (status = 400, description = "Missing query"),
            ),
            tag = $tag
        )]
        pub async fn search(
            State(state): State<AppState>,
            QueryParams(params): QueryParams,
        ) -> AppResult<Json<ApiResponse<ItemList<$dto>>>> {
            let query = params
                .get("query")
                .map(|q| q.trim())
                .filter(|q| !q.is_empty())
                .ok_or_else(|| crate::error::AppError::BadRequest("query is required".into()))?;
            let pagination = Pagination::from_params(&params)?;
            let condition = crate::services::criteria::search_condition(SEARCH_COLUMNS, query);
            let (items, meta) =
                service::page(&state, condition, (Column::Id, SortOrder::Asc), &pagination).await?;
            Ok(Json(ApiResponse::success(ENTITY_NAME, ItemList { items }, Some(meta))))
        }

        #[derive(OpenApi)]
        #[openapi(paths(search))]
        struct SearchDoc;

        fn search_routes() -> Router<AppState> {
            Router::new().route($path, get(search))
        }

        fn search_doc() -> Option<utoipa::openapi::OpenApi> {
            Some(SearchDoc::openapi())
        }
    };
}

pub(crate) use crud_resource;
pub(crate) use resource_guard;
pub(crate) use resource_search;
