//! Release lookup and version comparison
//!
//! ```text
//! ┌───────────────┐     ┌─────────────┐
//! │ ReleaseSource │────▶│   Checker   │
//! │   (fetch)     │     │  (compose)  │
//! └───────────────┘     └─────────────┘
//!        │                     │
//!        ▼                     ▼
//! ┌───────────────┐     ┌─────────────┐
//! │GitHubRegistry │     │   Semver    │
//! │ (HTTP + JSON) │     │ (compare)   │
//! └───────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Fetch-then-compare update check
//! - [`error`]: Error types for fetching, comparing and checking
//! - [`github`]: GitHub Releases API client
//! - [`semver`]: Version validation and precedence ordering
//! - [`source`]: `ReleaseSource` trait and the decoded release type

pub mod checker;
pub mod error;
pub mod github;
pub mod semver;
pub mod source;
