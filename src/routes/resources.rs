//! Every resource exposed under `/api`.

use axum::Router;
use utoipa::openapi::OpenApi;

use super::resource::crud_resource;
use crate::state::AppState;

crud_resource! {
    mod users {
        entity: users,
        dto: UserDto,
        id: Uuid,
        name: "user",
        tag: "Users",
        paths: ("/api/users", "/api/users/{id}", "/api/users/count"),
        search: ("/api/users/_search", [Login, FirstName, LastName, Email]),
    }
}

crud_resource! {
    mod addresses {
        entity: addresses,
        dto: AddressDto,
        id: Uuid,
        name: "address",
        tag: "Users",
        paths: ("/api/addresses", "/api/addresses/{id}", "/api/addresses/count"),
        search: ("/api/addresses/_search", [Line1, Line2, City, State, Country, Zip]),
    }
}

crud_resource! {
    mod colours {
        entity: colours,
        dto: ColourDto,
        id: Uuid,
        name: "colour",
        tag: "Catalogue",
        paths: ("/api/colours", "/api/colours/{id}", "/api/colours/count"),
        search: ("/api/colours/_search", [Name, HexCode]),
    }
}

crud_resource! {
    mod products {
        entity: products,
        dto: ProductDto,
        id: Uuid,
        name: "product",
        tag: "Catalogue",
        paths: ("/api/products", "/api/products/{id}", "/api/products/count"),
        search: ("/api/products/_search", [Name, Description, Provider]),
    }
}

crud_resource! {
    mod tags {
        entity: tags,
        dto: TagDto,
        id: Uuid,
        name: "tag",
        tag: "Catalogue",
        paths: ("/api/tags", "/api/tags/{id}", "/api/tags/count"),
        search: ("/api/tags/_search", [Name]),
    }
}

crud_resource! {
    mod product_categories {
        entity: product_categories,
        dto: ProductCategoryDto,
        id: Uuid,
        name: "productCategory",
        tag: "Catalogue",
        paths: ("/api/product-categories", "/api/product-categories/{id}", "/api/product-categories/count"),
        search: ("/api/product-categories/_search", [Name]),
    }
}

crud_resource! {
    mod product_images {
        entity: product_images,
        dto: ProductImageDto,
        id: Uuid,
        name: "productImage",
        tag: "Catalogue",
        paths: ("/api/product-images", "/api/product-images/{id}", "/api/product-images/count"),
    }
}

crud_resource! {
    mod working_units {
        entity: working_units,
        dto: WorkingUnitDto,
        id: Uuid,
        name: "workingUnit",
        tag: "Inventory",
        paths: ("/api/working-units", "/api/working-units/{id}", "/api/working-units/count"),
        search: ("/api/working-units/_search", [Name]),
    }
}

crud_resource! {
    mod product_quantities {
        entity: product_quantities,
        dto: ProductQuantityDto,
        id: Uuid,
        name: "productQuantity",
        tag: "Inventory",
        paths: ("/api/product-quantities", "/api/product-quantities/{id}", "/api/product-quantities/count"),
    }
}

crud_resource! {
    mod order_statuses {
        entity: order_statuses,
        dto: OrderStatusDto,
        id: i64,
        name: "orderStatus",
        tag: "Statuses",
        paths: ("/api/order-statuses", "/api/order-statuses/{id}", "/api/order-statuses/count"),
        guard: crate::services::rules::order_status_sequence,
    }
}

crud_resource! {
    mod invoice_statuses {
        entity: invoice_statuses,
        dto: InvoiceStatusDto,
        id: i64,
        name: "invoiceStatus",
        tag: "Statuses",
        paths: ("/api/invoice-statuses", "/api/invoice-statuses/{id}", "/api/invoice-statuses/count"),
        guard: crate::services::rules::invoice_status_sequence,
    }
}

crud_resource! {
    mod shipment_statuses {
        entity: shipment_statuses,
        dto: ShipmentStatusDto,
        id: i64,
        name: "shipmentStatus",
        tag: "Statuses",
        paths: ("/api/shipment-statuses", "/api/shipment-statuses/{id}", "/api/shipment-statuses/count"),
        guard: crate::services::rules::shipment_status_sequence,
    }
}

crud_resource! {
    mod orders {
        entity: orders,
        dto: OrderDto,
        id: Uuid,
        name: "order",
        tag: "Orders",
        paths: ("/api/orders", "/api/orders/{id}", "/api/orders/count"),
        search: ("/api/orders/_search", [InternalNotes, CustomerNotes]),
        guard: crate::services::rules::order_hierarchy,
    }
}

crud_resource! {
    mod order_items {
        entity: order_items,
        dto: OrderItemDto,
        id: Uuid,
        name: "orderItem",
        tag: "Orders",
        paths: ("/api/order-items", "/api/order-items/{id}", "/api/order-items/count"),
    }
}

crud_resource! {
    mod order_histories {
        entity: order_histories,
        dto: OrderHistoryDto,
        id: Uuid,
        name: "orderHistory",
        tag: "Orders",
        paths: ("/api/order-histories", "/api/order-histories/{id}", "/api/order-histories/count"),
    }
}

crud_resource! {
    mod internal_orders {
        entity: internal_orders,
        dto: InternalOrderDto,
        id: Uuid,
        name: "internalOrder",
        tag: "Orders",
        paths: ("/api/internal-orders", "/api/internal-orders/{id}", "/api/internal-orders/count"),
    }
}

crud_resource! {
    mod internal_order_items {
        entity: internal_order_items,
        dto: InternalOrderItemDto,
        id: Uuid,
        name: "internalOrderItem",
        tag: "Orders",
        paths: ("/api/internal-order-items", "/api/internal-order-items/{id}", "/api/internal-order-items/count"),
    }
}

crud_resource! {
    mod internal_order_histories {
        entity: internal_order_histories,
        dto: InternalOrderHistoryDto,
        id: Uuid,
        name: "internalOrderHistory",
        tag: "Orders",
        paths: ("/api/internal-order-histories", "/api/internal-order-histories/{id}", "/api/internal-order-histories/count"),
    }
}

crud_resource! {
    mod invoices {
        entity: invoices,
        dto: InvoiceDto,
        id: Uuid,
        name: "invoice",
        tag: "Invoicing",
        paths: ("/api/invoices", "/api/invoices/{id}", "/api/invoices/count"),
    }
}

crud_resource! {
    mod invoice_histories {
        entity: invoice_histories,
        dto: InvoiceHistoryDto,
        id: Uuid,
        name: "invoiceHistory",
        tag: "Invoicing",
        paths: ("/api/invoice-histories", "/api/invoice-histories/{id}", "/api/invoice-histories/count"),
    }
}

crud_resource! {
    mod shipments {
        entity: shipments,
        dto: ShipmentDto,
        id: Uuid,
        name: "shipment",
        tag: "Shipping",
        paths: ("/api/shipments", "/api/shipments/{id}", "/api/shipments/count"),
    }
}

crud_resource! {
    mod shipment_histories {
        entity: shipment_histories,
        dto: ShipmentHistoryDto,
        id: Uuid,
        name: "shipmentHistory",
        tag: "Shipping",
        paths: ("/api/shipment-histories", "/api/shipment-histories/{id}", "/api/shipment-histories/count"),
    }
}

crud_resource! {
    mod shipment_items {
        entity: shipment_items,
        dto: ShipmentItemDto,
        id: Uuid,
        name: "shipmentItem",
        tag: "Shipping",
        paths: ("/api/shipment-items", "/api/shipment-items/{id}", "/api/shipment-items/count"),
    }
}

crud_resource! {
    mod shipment_assignments {
        entity: shipment_assignments,
        dto: ShipmentAssignmentDto,
        id: Uuid,
        name: "shipmentAssignment",
        tag: "Shipping",
        paths: ("/api/shipment-assignments", "/api/shipment-assignments/{id}", "/api/shipment-assignments/count"),
    }
}

crud_resource! {
    mod warehouse_assignments {
        entity: warehouse_assignments,
        dto: WarehouseAssignmentDto,
        id: Uuid,
        name: "warehouseAssignment",
        tag: "Inventory",
        paths: ("/api/warehouse-assignments", "/api/warehouse-assignments/{id}", "/api/warehouse-assignments/count"),
    }
}

crud_resource! {
    mod staff_infos {
        entity: staff_infos,
        dto: StaffInfoDto,
        id: Uuid,
        name: "staffInfo",
        tag: "Users",
        paths: ("/api/staff-infos", "/api/staff-infos/{id}", "/api/staff-infos/count"),
    }
}

crud_resource! {
    mod user_details {
        entity: user_details,
        dto: UserDetailsDto,
        id: Uuid,
        name: "userDetails",
        tag: "Users",
        paths: ("/api/user-details", "/api/user-details/{id}", "/api/user-details/count"),
    }
}

crud_resource! {
    mod user_addresses {
        entity: user_addresses,
        dto: UserAddressDto,
        id: Uuid,
        name: "userAddress",
        tag: "Users",
        paths: ("/api/user-addresses", "/api/user-addresses/{id}", "/api/user-addresses/count"),
    }
}

crud_resource! {
    mod conversations {
        entity: conversations,
        dto: ConversationDto,
        id: Uuid,
        name: "conversation",
        tag: "Messaging",
        paths: ("/api/conversations", "/api/conversations/{id}", "/api/conversations/count"),
        search: ("/api/conversations/_search", [Title]),
    }
}

crud_resource! {
    mod participants {
        entity: participants,
        dto: ParticipantDto,
        id: Uuid,
        name: "participant",
        tag: "Messaging",
        paths: ("/api/participants", "/api/participants/{id}", "/api/participants/count"),
    }
}

crud_resource! {
    mod messages {
        entity: messages,
        dto: MessageDto,
        id: Uuid,
        name: "message",
        tag: "Messaging",
        paths: ("/api/messages", "/api/messages/{id}", "/api/messages/count"),
        search: ("/api/messages/_search", [Content]),
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(users::router())
        .merge(addresses::router())
        .merge(colours::router())
        .merge(products::router())
        .merge(tags::router())
        .merge(product_categories::router())
        .merge(product_images::router())
        .merge(working_units::router())
        .merge(product_quantities::router())
        .merge(order_statuses::router())
        .merge(invoice_statuses::router())
        .merge(shipment_statuses::router())
        .merge(orders::router())
        .merge(order_items::router())
        .merge(order_histories::router())
        .merge(internal_orders::router())
        .merge(internal_order_items::router())
        .merge(internal_order_histories::router())
        .merge(invoices::router())
        .merge(invoice_histories::router())
        .merge(shipments::router())
        .merge(shipment_histories::router())
        .merge(shipment_items::router())
        .merge(shipment_assignments::router())
        .merge(warehouse_assignments::router())
        .merge(staff_infos::router())
        .merge(user_details::router())
        .merge(user_addresses::router())
        .merge(conversations::router())
        .merge(participants::router())
        .merge(messages::router())
}

pub fn openapi() -> OpenApi {
    let mut doc = users::openapi();
    for part in [
        addresses::openapi(),
        colours::openapi(),
        products::openapi(),
        tags::openapi(),
        product_categories::openapi(),
        product_images::openapi(),
        working_units::openapi(),
        product_quantities::openapi(),
        order_statuses::openapi(),
        invoice_statuses::openapi(),
        shipment_statuses::openapi(),
        orders::openapi(),
        order_items::openapi(),
        order_histories::openapi(),
        internal_orders::openapi(),
        internal_order_items::openapi(),
        internal_order_histories::openapi(),
        invoices::openapi(),
        invoice_histories::openapi(),
        shipments::openapi(),
        shipment_histories::openapi(),
        shipment_items::openapi(),
        shipment_assignments::openapi(),
        warehouse_assignments::openapi(),
        staff_infos::openapi(),
        user_details::openapi(),
        user_addresses::openapi(),
        conversations::openapi(),
        participants::openapi(),
        messages::openapi(),
    ] {
        doc.merge(part);
    }
    doc
}
