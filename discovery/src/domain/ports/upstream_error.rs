//! Failure taxonomy shared by every upstream provider port.

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while calling a third-party provider.
    ///
    /// Resolvers catch every variant and substitute fallback data; none of
    /// these reach callers of the public discovery operations.
    pub enum UpstreamError {
        /// The request did not complete before its deadline.
        Timeout { message: String } =>
            "upstream timeout: {message}",
        /// The provider answered with a status outside the 2xx range.
        HttpStatus { status: u16 } =>
            "upstream returned HTTP status {status}",
        /// The response body was not the JSON shape the adapter expects.
        Parse { message: String } =>
            "upstream response could not be parsed: {message}",
        /// The provider holds no record for the requested key.
        NotFound { message: String } =>
            "upstream record not found: {message}",
        /// The connection failed before any response arrived.
        Transport { message: String } =>
            "upstream transport failed: {message}",
    }
}
