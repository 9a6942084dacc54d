//! Repository layer providing CRUD operations on top of the entity models.
//! - One trait per entity with exactly the get/create/update/delete set.
//! - SeaORM-backed implementations; callers depend on the trait only.
//! - Absence is `Ok(None)`, never an error.

pub mod content;
pub mod errors;
pub mod users;

#[cfg(test)]
mod test_support;
