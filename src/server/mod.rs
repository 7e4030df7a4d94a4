//! HTTP backend for the school administration API.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, transactions and activity logging
//! - **Data Layer** (`data/`) - Repositories converting entities to domain models
//! - **Model Layer** (`model/`) - Domain models and operation parameters
//! - **Error Layer** (`error/`) - Application errors and their HTTP responses
//! - **Middleware** (`middleware/`) - Bearer token authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared database pool, token service and Google verifier
//! - **Startup** (`startup`) - Database connection, migrations and state assembly
//! - **Router** (`router`) - Route table, CORS, tracing and Swagger UI
//! - **Docs** (`docs`) - OpenAPI metadata
//!
//! # Request Flow
//!
//! 1. **Router** matches the request to a controller
//! 2. **Controller** authenticates through `AuthGuard` and validates the input
//! 3. **Service** applies business rules and opens a transaction for writes
//! 4. **Data** reads and writes rows, returning domain models
//! 5. **Controller** converts the result to a DTO

pub mod config;
pub mod controller;
pub mod data;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
