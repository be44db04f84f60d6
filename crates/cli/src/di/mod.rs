use rootwalk_application::use_cases::ResolveDomainUseCase;
use rootwalk_domain::Config;
use rootwalk_infrastructure::dns::transport::UdpTransport;
use std::sync::Arc;

pub fn build_resolver(config: &Config) -> ResolveDomainUseCase {
    let transport = Arc::new(UdpTransport::from_config(&config.resolver));
    ResolveDomainUseCase::from_config(transport, config.root_servers.clone(), &config.resolver)
}
