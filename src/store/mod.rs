//! Orderdesk Store
//!
//! Relational persistence for the records the API serves:
//!
//! - **types**: `OrderConfirmation`, `SpecialRequest`, `SpecialRequestOption`
//! - **database**: SQLite-backed `Store` with the read queries
//! - **error**: Error types
//!
//! Rows are created and mutated by other systems; the HTTP surface only
//! reads. The insert methods exist for seeding and tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use orderdesk::store::{Store, SpecialRequest};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Store::open("./orderdesk.db")?;
//!     store.insert_special_request(&SpecialRequest::new(1, "No onions", "no-onions", 0))?;
//!
//!     for option in store.list_active_special_requests()? {
//!         println!("{} => {}", option.label, option.value);
//!     }
//!     Ok(())
//! }
//! ```

pub mod database;
pub mod error;
pub mod types;

pub use database::Store;
pub use error::{StoreError, StoreResult};
pub use types::{OrderConfirmation, SpecialRequest, SpecialRequestOption};
