//! # shelf-store
//!
//! Execution boundary and fetch layer for the lending-library database.
//!
//! A [`Store`] owns a sqlite pool and a [`DecoderRegistry`] mapping each
//! table to a positional row decoder. Reads hand back decoded
//! [`Record`]s; writes hand back affected-row counts. Execution failures
//! are logged and reported as "no results" / "zero rows affected" rather
//! than propagated — the layers above treat the database as best-effort.
//!
//! Statement text comes from `shelf-sql` and write values are gated by
//! `shelf-validate`; see [`Store::validated_insert`] for the composed
//! flow.

pub mod decode;
pub mod error;
pub mod records;
pub mod store;

pub use decode::{DecoderRegistry, RowDecoder};
pub use error::StoreError;
pub use records::{Author, Book, Borrower, LoanRow, PersonKind, Record, TableId};
pub use store::Store;
