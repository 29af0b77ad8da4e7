//! # campus-db: Database Layer for Campus Coffee
//!
//! SQLite storage for points of sale, using sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Campus Coffee Data Flow                            │
//! │                                                                         │
//! │  PosServiceImpl (campus-core)                                          │
//! │       │  dyn PosDataService                                             │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     campus-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │ PosRepository │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│  (pos.rs)     │    │  (embedded)  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (DATABASE_PATH, default ./campus_coffee.db)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use campus_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("campus_coffee.db")).await?;
//! let all = db.pos().list_all().await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig, DbLocation};
pub use repository::pos::PosRepository;
