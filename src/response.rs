//! Raw HTTP response seen by the processors

/// Trait for HTTP response objects returned by a [`crate::request::Request`]
pub trait Response {
    /// HTTP status code
    fn status(&self) -> u16;

    /// Response body
    fn body(&self) -> &str;

    /// Request id echoed by the server, if any
    fn request_id(&self) -> &Option<String>;

    /// True for any 2xx status
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status())
    }
}
