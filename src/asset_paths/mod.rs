//! Helpers for classifying `url()` references and computing asset paths.
//!
//! Classification and path algebra live in separate submodules so the rules for leaving a
//! reference untouched can be tested independently from the lexical path arithmetic used to
//! relocate assets between the source, destination and assets directories.

mod filters;
mod resolve;

pub use filters::is_pass_through;
pub use resolve::{
    make_url_reference, normalize_lexically, relative_path, resolve_against,
    split_query_and_fragment,
};
