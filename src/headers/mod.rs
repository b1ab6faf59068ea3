//! Request header handling subsystem.
//!
//! # Data Flow
//! ```text
//! axum request parts (HeaderMap, Uri)
//!     → extract.rs (named header + required/optional/default policy + type conversion)
//!     → multi.rs (ordered name → values view of the whole map)
//!     → host.rs (host/port binding for base URL derivation)
//!     → error.rs (MissingHeader / InvalidFormat → 400 response)
//! ```
//!
//! # Design Decisions
//! - Header names are matched case-insensitively (http::HeaderName is lowercase)
//! - Typed conversion goes through `FromStr`; raw strings have their own accessor
//! - Multi-valued headers have their own type instead of overloading the single-value case

pub mod error;
pub mod extract;
pub mod host;
pub mod multi;

pub use error::HeaderError;
pub use extract::{
    header_or_default, header_str, optional_header, read_header, required_header,
    required_header_str, HeaderPolicy,
};
pub use host::HostBinding;
pub use multi::{HeaderValues, MultiValueHeaders};
