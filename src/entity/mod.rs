pub mod addresses;
pub mod audit_logs;
pub mod colours;
pub mod conversations;
pub mod internal_order_histories;
pub mod internal_order_items;
pub mod internal_orders;
pub mod invoice_histories;
pub mod invoice_statuses;
pub mod invoices;
pub mod messages;
pub mod order_histories;
pub mod order_items;
pub mod order_statuses;
pub mod orders;
pub mod participants;
pub mod product_categories;
pub mod product_images;
pub mod product_quantities;
pub mod product_tags;
pub mod products;
pub mod shipment_assignments;
pub mod shipment_histories;
pub mod shipment_items;
pub mod shipment_statuses;
pub mod shipments;
pub mod staff_infos;
pub mod tags;
pub mod user_addresses;
pub mod user_details;
pub mod users;
pub mod warehouse_assignments;
pub mod working_units;

pub use addresses::Entity as Addresses;
pub use audit_logs::Entity as AuditLogs;
pub use colours::Entity as Colours;
pub use conversations::Entity as Conversations;
pub use internal_order_histories::Entity as InternalOrderHistories;
pub use internal_order_items::Entity as InternalOrderItems;
pub use internal_orders::Entity as InternalOrders;
pub use invoice_histories::Entity as InvoiceHistories;
pub use invoice_statuses::Entity as InvoiceStatuses;
pub use invoices::Entity as Invoices;
pub use messages::Entity as Messages;
pub use order_histories::Entity as OrderHistories;
pub use order_items::Entity as OrderItems;
pub use order_statuses::Entity as OrderStatuses;
pub use orders::Entity as Orders;
pub use participants::Entity as Participants;
pub use product_categories::Entity as ProductCategories;
pub use product_images::Entity as ProductImages;
pub use product_quantities::Entity as ProductQuantities;
pub use product_tags::Entity as ProductTags;
pub use products::Entity as Products;
pub use shipment_assignments::Entity as ShipmentAssignments;
pub use shipment_histories::Entity as ShipmentHistories;
pub use shipment_items::Entity as ShipmentItems;
pub use shipment_statuses::Entity as ShipmentStatuses;
pub use shipments::Entity as Shipments;
pub use staff_infos::Entity as StaffInfos;
pub use tags::Entity as Tags;
pub use user_addresses::Entity as UserAddresses;
pub use user_details::Entity as UserDetails;
pub use users::Entity as Users;
pub use warehouse_assignments::Entity as WarehouseAssignments;
pub use working_units::Entity as WorkingUnits;
