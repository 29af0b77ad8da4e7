//! # Repository Module
//!
//! Database repository implementations for Campus Coffee.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  PosServiceImpl                                                        │
//! │       │                                                                 │
//! │       │  data.upsert(pos)            (dyn PosDataService)              │
//! │       ▼                                                                 │
//! │  PosRepository                                                         │
//! │  ├── list_all(&self)                                                   │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── insert(&self, pos)                                                │
//! │  ├── update(&self, pos)                                                │
//! │  └── delete_all(&self)                                                 │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`pos::PosRepository`] - Point of sale CRUD

pub mod pos;
