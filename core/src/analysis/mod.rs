//! # Signature Analysis
//!
//! The reason this crate exists. Given a transaction (or fee-bump
//! envelope) and an account directory, produce a per-signature attribution
//! report: which known key produced each attached signature, and which
//! signatures nobody in the candidate set can explain.
//!
//! ## Pipeline
//!
//! ```text
//! collector.rs    — Gather candidate signers from the transaction source
//!                   and every operation override source. Concurrent
//!                   lookups, partial-failure tolerant, set semantics.
//! matcher.rs      — Try each signature against each candidate, in order.
//!                   First match wins; no match is a verdict, not an error.
//! analyzer.rs     — Public entry points and the (small) fatal-error
//!                   taxonomy. Fee-bump composition lives here.
//! report.rs       — The output vocabulary: statuses, verdicts, reports.
//! requirements.rs — Follow-up weight arithmetic: does the verified set
//!                   satisfy an account's signing threshold?
//! ```
//!
//! ## Determinism
//!
//! Candidate order is discovery order (transaction source first, then
//! override sources in operation order), lookups land in a deterministic
//! merge, and the matcher's tie-break is positional. Analysing the same
//! envelope against the same directory snapshot twice yields byte-for-byte
//! identical reports — a property the test suite holds us to.

pub mod analyzer;
pub mod collector;
pub mod matcher;
pub mod report;
pub mod requirements;

pub use analyzer::{AnalysisError, SignatureAnalyzer};
pub use collector::collect_candidate_signers;
pub use matcher::match_signatures;
pub use report::{FeeBumpAttributionReport, SignatureAttribution, SignatureStatus};
pub use requirements::{auth_requirement_met, AccountAuthRequirement, AuthCheck};
