pub mod static_routes;
