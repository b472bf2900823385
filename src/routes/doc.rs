use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    response::{CountData, Meta},
    routes::{audits, health, params, relations, resources},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ordermesh",
        description = "Orders, inventory, invoicing, shipping and messaging API"
    ),
    paths(
        health::health_check,
        health::readiness,
        relations::list_children,
        relations::replace_children,
        relations::list_tags,
        relations::replace_tags,
        audits::list_audits,
    ),
    components(
        schemas(
            Meta,
            CountData,
            params::Pagination,
            params::SortOrder,
            relations::MemberIds,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and readiness"),
        (name = "Users", description = "Users, their details, addresses and staff records"),
        (name = "Catalogue", description = "Products, categories, images, colours and tags"),
        (name = "Inventory", description = "Working units, stock levels and transfers"),
        (name = "Statuses", description = "Order, invoice and shipment lifecycle steps"),
        (name = "Orders", description = "Customer and internal orders"),
        (name = "Invoicing", description = "Invoices and their history"),
        (name = "Shipping", description = "Shipments, items, couriers and history"),
        (name = "Messaging", description = "Conversations, participants and messages"),
        (name = "Audit", description = "Audit events"),
    )
)]
pub struct ApiDoc;

/// The full document: the static paths above plus every resource's fragment.
pub fn api_doc() -> OpenApiSpec {
    let mut doc = ApiDoc::openapi();
    doc.merge(resources::openapi());
    doc
}

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", api_doc())
}
