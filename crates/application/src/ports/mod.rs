mod nameserver_transport;

pub use nameserver_transport::NameserverTransport;
