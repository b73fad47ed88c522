pub mod auth;
pub mod configuration;
pub mod controllers;
pub mod db;
pub mod error;
pub mod middlewares;
pub mod model;
pub mod routes;
pub mod startup;
pub mod state;
pub mod telemetry;
pub mod view;
