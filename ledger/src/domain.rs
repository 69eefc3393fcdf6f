pub mod models;
pub mod pagination;
pub mod repository;
pub mod summary;
pub mod validation;
