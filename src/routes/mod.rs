pub mod compare_route;
pub mod index_route;
pub mod reset_route;
pub mod search_route;
