pub mod category_filter;
pub mod company;
pub mod navigation;
pub mod project;
pub mod project_catalog;
pub mod project_category;
pub mod project_status;
