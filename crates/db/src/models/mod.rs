//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` request DTOs validated with `validator`
//! - `Deserialize` query-parameter DTOs for list endpoints

pub mod pass;
pub mod stats;
