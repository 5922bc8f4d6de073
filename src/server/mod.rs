//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the message board,
//! including API endpoints, business logic, data access, and infrastructure services.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, transactions and token handling
//! - **Data Layer** (`data/`) - Database operations over SeaORM entities
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer-token guard and validating extractors
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, token service)
//! - **Startup** (`startup`) - Database connection, migrations and demo data
//! - **Router** (`router`) - Axum route configuration
//! - **OpenAPI** (`openapi`) - API document and Swagger UI
//! - **Util** (`util/`) - Password hashing
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** authenticates the bearer token and validates input
//! 3. **Controller** converts DTOs to params and calls the service
//! 4. **Service** executes business logic, orchestrates data operations
//! 5. **Data** queries the database and returns entities
//! 6. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod openapi;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
