pub mod audit_service;
pub mod criteria;
pub mod crud;
pub mod relation_service;
pub mod rules;
