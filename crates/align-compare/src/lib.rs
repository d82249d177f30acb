//! # Align Compare
//!
//! Measures how far apart two alignments of the same image set are. Each
//! alignment is an XML document with one `<offset x=".." y=".."/>` per image.
//!
//! ```rust
//! use align_compare::{compare, parse_offsets};
//!
//! let a = parse_offsets(r#"<a><offset x="1.0" y="2.0"/><offset x="3.0" y="4.0"/></a>"#).unwrap();
//! let b = parse_offsets(r#"<a><offset x="1.5" y="2.0"/><offset x="3.0" y="5.0"/></a>"#).unwrap();
//!
//! let err = compare(&a, &b);
//! assert_eq!((err.x, err.y), (0.5, 1.0));
//! ```
pub mod compare;
pub mod error;
pub mod offset;

pub use compare::{compare, AlignmentError};
pub use error::{CompareError, Result};
pub use offset::{load_offsets, parse_offsets, Offset};
