mod error;
mod transport;

pub use error::{BoxError, FetchError};
pub use transport::{HttpTransport, Transport};
