//! Post persistence.
//!
//! The whole collection of posts lives as one JSON array under a single
//! key of a [`KeyValueStore`]:
//!
//! ```json
//! [
//!   {
//!     "id": "seed-1",
//!     "title": "Welcome to MindStream",
//!     "excerpt": "...",
//!     "content": "# Welcome ...",
//!     "coverImage": "https://picsum.photos/800/400",
//!     "tags": ["Welcome", "Guide"],
//!     "createdAt": 1718000000000,
//!     "updatedAt": 1718000000000,
//!     "published": true,
//!     "author": "Admin",
//!     "comments": [
//!       { "id": "c1", "author": "MindStream User", "content": "...", "createdAt": 1718000000000 }
//!     ]
//!   }
//! ]
//! ```
//!
//! ## Components
//!
//! - [`PostStore`]: CRUD operations over the collection
//! - [`KeyValueStore`]: The persistence port, with [`FileStore`] and [`MemoryStore`]
//! - [`parse_collection`]: Schema-checked parsing of a stored collection

mod backend;
mod seed;
mod store;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use seed::{SEED_POST_ID, seed_posts};
pub use store::{DEFAULT_KEY, ImportSummary, PostStore, ensure_unique_ids, parse_collection};
