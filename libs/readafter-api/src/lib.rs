pub mod document;
pub mod error;
pub mod optime;
pub mod value;

pub use document::Document;
pub use error::{ErrorKind, ParseError};
pub use optime::{OpTime, Timestamp};
pub use value::{Value, ValueKind};
