pub mod mock_transport;
pub mod responses;

#[allow(unused_imports)]
pub use mock_transport::{MockTransport, Scripted};
#[allow(unused_imports)]
pub use responses::ResponseBuilder;
