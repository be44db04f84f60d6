use crate::ports::NameserverTransport;
use futures::future::{BoxFuture, FutureExt};
use rootwalk_domain::wire::{
    decode_message, encode_domain, encode_query_with_rng, validate_response,
};
use rootwalk_domain::{
    DnsMessage, DomainError, FailurePolicy, NameServer, RecordData, ResolverConfig, ResponseCode,
    ServerPool,
};
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

use super::walk::{Depth, Step, WalkState};
use super::ResolutionLimits;

/// Resolves a host name to an IPv4 address by walking the delegation tree
/// from a bootstrap server set.
///
/// Each step draws one candidate at random from the current pool, queries it
/// and acts on the reply:
///
/// 1. an IPv4 answer ends the walk;
/// 2. a CNAME answer restarts the walk for the target from the roots;
/// 3. IPv4 glue in the additional section becomes the next pool;
/// 4. bare NS names are resolved from the roots first, then queried one by one;
/// 5. a reply carrying none of these settles the name as unresolvable.
///
/// Candidates that time out or send malformed or mismatched replies are
/// skipped under [`FailurePolicy::SkipCandidate`] and end the resolution
/// under [`FailurePolicy::Abort`].
pub struct ResolveDomainUseCase {
    transport: Arc<dyn NameserverTransport>,
    root_servers: Vec<NameServer>,
    limits: ResolutionLimits,
    rng: Mutex<fastrand::Rng>,
}

impl ResolveDomainUseCase {
    pub fn new(transport: Arc<dyn NameserverTransport>, root_servers: Vec<NameServer>) -> Self {
        Self {
            transport,
            root_servers,
            limits: ResolutionLimits::default(),
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    pub fn from_config(
        transport: Arc<dyn NameserverTransport>,
        root_servers: Vec<NameServer>,
        config: &ResolverConfig,
    ) -> Self {
        let resolver =
            Self::new(transport, root_servers).with_limits(ResolutionLimits::from(config));
        match config.seed {
            Some(seed) => resolver.with_seed(seed),
            None => resolver,
        }
    }

    pub fn with_limits(mut self, limits: ResolutionLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Fixes query ids and candidate order.
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
            ..self
        }
    }

    pub fn limits(&self) -> &ResolutionLimits {
        &self.limits
    }

    /// Resolves `domain` starting from the root servers.
    pub async fn execute(&self, domain: &str) -> Result<Option<Ipv4Addr>, DomainError> {
        let roots = ServerPool::new(self.root_servers.clone());
        self.resolve(domain, roots).await
    }

    /// Resolves `domain` starting from `pool`.
    ///
    /// `Ok(None)` means no authoritative answer was obtained. Errors are
    /// limited to exceeded bounds, names that cannot be encoded and, under
    /// [`FailurePolicy::Abort`], the first failing candidate.
    pub async fn resolve(
        &self,
        domain: &str,
        pool: ServerPool,
    ) -> Result<Option<Ipv4Addr>, DomainError> {
        encode_domain(domain).map_err(|e| DomainError::InvalidDomainName(e.to_string()))?;

        let mut state = WalkState::default();
        let result = self.walk(domain, pool, Depth::default(), &mut state).await;

        match &result {
            Ok(Step::Answer(ip)) => {
                info!(domain = %domain, address = %ip, queries = state.queries, "Resolved")
            }
            Ok(step) => {
                info!(domain = %domain, outcome = ?step, queries = state.queries, "No answer")
            }
            Err(e) => {
                warn!(domain = %domain, error = %e, queries = state.queries, "Resolution failed")
            }
        }

        result.map(Step::into_address)
    }

    fn walk<'a>(
        &'a self,
        domain: &'a str,
        mut pool: ServerPool,
        depth: Depth,
        state: &'a mut WalkState,
    ) -> BoxFuture<'a, Result<Step, DomainError>> {
        async move {
            loop {
                let Some(server) = self.draw(&mut pool) else {
                    debug!(domain = %domain, "Server pool exhausted");
                    return Ok(Step::Exhausted);
                };

                let response = match self.exchange(domain, &server, state).await {
                    Ok(response) => response,
                    Err(e) if e.is_candidate_failure()
                        && self.limits.failure_policy == FailurePolicy::SkipCandidate =>
                    {
                        warn!(
                            server = %server.address,
                            nameserver = %server.name,
                            domain = %domain,
                            error = %e,
                            remaining = pool.len(),
                            "Discarding candidate"
                        );
                        continue;
                    }
                    Err(e) => return Err(e),
                };

                match self.follow(domain, response, depth, state).await? {
                    Step::Exhausted => {
                        debug!(
                            domain = %domain,
                            server = %server.address,
                            remaining = pool.len(),
                            "Referral led nowhere, trying next candidate"
                        );
                    }
                    decided => return Ok(decided),
                }
            }
        }
        .boxed()
    }

    /// Sends one query for `domain` and returns the validated reply.
    async fn exchange(
        &self,
        domain: &str,
        server: &NameServer,
        state: &mut WalkState,
    ) -> Result<DnsMessage, DomainError> {
        state.spend_query(&self.limits)?;

        let (id, payload) = self.next_query(domain)?;

        debug!(
            server = %server.address,
            nameserver = %server.name,
            domain = %domain,
            id = id,
            "Sending query"
        );

        let bytes = self
            .transport
            .send_and_receive(server.address, &payload)
            .await?;

        let query = decode_message(&payload)?;
        let response = decode_message(&bytes)?;
        validate_response(&response, &query)?;

        debug!(
            server = %server.address,
            rcode = %response.header.response_code,
            answers = response.answers.len(),
            nameservers = response.nameservers.len(),
            additional = response.additional.len(),
            "Response received"
        );

        Ok(response)
    }

    async fn follow(
        &self,
        domain: &str,
        response: DnsMessage,
        depth: Depth,
        state: &mut WalkState,
    ) -> Result<Step, DomainError> {
        let rcode = response.header.response_code;
        if rcode != ResponseCode::NoError {
            debug!(domain = %domain, rcode = %rcode, "Negative response");
            return Ok(Step::NoAnswer);
        }

        if let Some(ip) = response.first_ipv4_answer() {
            return Ok(Step::Answer(ip));
        }

        let alias = response.answers.iter().find_map(|record| match &record.data {
            RecordData::Cname(target) => Some(target.clone()),
            _ => None,
        });
        if let Some(target) = alias {
            return self.follow_alias(domain, &target, depth, state).await;
        }

        let glue: ServerPool = response
            .glue()
            .map(|(name, ip)| NameServer::new(name, ip))
            .collect();
        if !glue.is_empty() {
            let depth = depth.referral(&self.limits)?;
            debug!(
                domain = %domain,
                servers = glue.len(),
                depth = depth.delegation,
                "Following referral with glue"
            );
            return self.walk(domain, glue, depth, state).await;
        }

        let nameservers: Vec<String> = response.nameserver_names().map(str::to_string).collect();
        if !nameservers.is_empty() {
            return self
                .follow_nameserver_names(domain, &nameservers, depth, state)
                .await;
        }

        debug!(domain = %domain, "Response carries no answer and no referral");
        Ok(Step::NoAnswer)
    }

    async fn follow_alias(
        &self,
        domain: &str,
        target: &str,
        depth: Depth,
        state: &mut WalkState,
    ) -> Result<Step, DomainError> {
        let depth = depth.alias(&self.limits)?;
        if let Err(e) = encode_domain(target) {
            warn!(domain = %domain, target = %target, error = %e, "Ignoring unencodable CNAME target");
            return Ok(Step::NoAnswer);
        }
        info!(domain = %domain, target = %target, depth = depth.cname, "Following CNAME");

        let roots = ServerPool::new(self.root_servers.clone());
        match self.walk(target, roots, depth, state).await? {
            Step::Answer(ip) => Ok(Step::Answer(ip)),
            Step::NoAnswer | Step::Exhausted => Ok(Step::NoAnswer),
        }
    }

    /// Referral without glue: look up each nameserver's own address from the
    /// roots, then ask that server alone.
    async fn follow_nameserver_names(
        &self,
        domain: &str,
        nameservers: &[String],
        depth: Depth,
        state: &mut WalkState,
    ) -> Result<Step, DomainError> {
        let depth = depth.referral(&self.limits)?;
        let mut settled_negative = false;

        for ns in nameservers {
            if let Err(e) = encode_domain(ns) {
                warn!(domain = %domain, nameserver = %ns, error = %e, "Skipping unencodable nameserver");
                continue;
            }
            debug!(domain = %domain, nameserver = %ns, "Resolving nameserver without glue");

            let roots = ServerPool::new(self.root_servers.clone());
            let Step::Answer(address) = self.walk(ns, roots, depth, state).await? else {
                debug!(nameserver = %ns, "Nameserver address not found");
                continue;
            };

            let pool = ServerPool::single(NameServer::new(ns.as_str(), address));
            match self.walk(domain, pool, depth, state).await? {
                Step::Answer(ip) => return Ok(Step::Answer(ip)),
                Step::NoAnswer => settled_negative = true,
                Step::Exhausted => {}
            }
        }

        if settled_negative {
            Ok(Step::NoAnswer)
        } else {
            Ok(Step::Exhausted)
        }
    }

    fn draw(&self, pool: &mut ServerPool) -> Option<NameServer> {
        pool.take_random(&mut self.rng())
    }

    fn next_query(&self, domain: &str) -> Result<(u16, Vec<u8>), DomainError> {
        encode_query_with_rng(domain, &mut self.rng())
            .map_err(|e| DomainError::InvalidDomainName(e.to_string()))
    }

    fn rng(&self) -> MutexGuard<'_, fastrand::Rng> {
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
