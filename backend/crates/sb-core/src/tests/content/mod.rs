mod category_filter;
mod navigation;
mod project_catalog;
