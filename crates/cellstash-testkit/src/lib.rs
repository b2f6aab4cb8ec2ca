//! # cellstash Testkit
//!
//! Testing utilities for cellstash.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: pre-wired workbook/store setups for test scenarios
//! - **Generators**: proptest strategies for keys, scopes, and values
//!
//! ## Test Fixtures
//!
//! ```rust
//! use cellstash_testkit::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let mut store = fixture.store();
//! store.put("answer", 42i64).unwrap();
//! assert_eq!(store.get("answer", 0i64).unwrap(), 42);
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use cellstash_testkit::generators;
//!
//! proptest! {
//!     #[test]
//!     fn cell_roundtrip(v in generators::value()) {
//!         let cell = v.render_cell();
//!         prop_assert_eq!(cellstash::Value::parse_cell(&cell), v);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::TestFixture;
