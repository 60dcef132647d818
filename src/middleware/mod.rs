pub mod request_context;
pub mod session;

pub use request_context::{make_request_span, request_id_middleware, RequestId, REQUEST_ID_HEADER};
pub use session::CurrentSession;
