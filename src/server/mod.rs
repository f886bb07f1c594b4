//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application,
//! including API endpoints, business logic, data access, and infrastructure services.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer,
//!   including the scheduling engine (double-booking guard and availability slot generation)
//! - **Data Layer** (`data/`) - Database operations and row-locking primitives
//! - **Model Layer** (`model/`) - Operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB handle, default timezone)
//! - **Startup** (`startup`) - Database connection and migration bootstrap
//! - **Router** (`router`) - Axum route configuration
//! - **Docs** (`doc`) - OpenAPI aggregate
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** validates path/query input, converts DTOs, calls service
//! 3. **Service** executes business logic, owning transactions and retry policy
//! 4. **Data** queries the database, taking row locks where booking
//!    correctness requires them
//! 5. **Service** returns DTOs to the controller
//! 6. **Controller** maps the result onto an HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
