//! Ledger export
//!
//! Serializes the full ledger to downloadable byte formats. Exports are
//! one-way: neither format is an import path.

pub mod csv;
pub mod pdf;

/// File name offered for CSV downloads
pub const CSV_FILE_NAME: &str = "transactions.csv";

/// MIME type for CSV downloads
pub const CSV_MIME_TYPE: &str = "text/csv";

/// File name offered for PDF downloads
pub const PDF_FILE_NAME: &str = "transactions.pdf";

/// MIME type for PDF downloads
pub const PDF_MIME_TYPE: &str = "application/pdf";
