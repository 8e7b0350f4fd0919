//! Form schemas and validation rules for the bookmark admin interface.
//!
//! Every form turns raw request input into a plain, serialisable value or
//! a field-keyed [`FormError`]. Nothing here touches storage.

mod api;
mod bookmark;
mod fields;
mod search;
mod tags;
mod validators;

pub use api::*;
pub use bookmark::*;
pub use fields::*;
pub use search::*;
pub use tags::*;
pub use validators::*;
