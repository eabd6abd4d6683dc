#![allow(dead_code)]
#![allow(unused_imports)]

use async_trait::async_trait;
use ferrous_stub_application::ports::{
    AddressResolver, DatagramChannel, DatagramTransport, DnsExecutor, MessageCodec,
    StreamConnector,
};
use ferrous_stub_domain::{
    AnswerRecord, DomainError, Query, QueryOptions, QueryType, RecordData, RecordType,
    ResolveOptions, Response, StreamOptions,
};
use std::collections::{HashSet, VecDeque};
use std::net::{IpAddr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ── codec ───────────────────────────────────────────────────────────────────

/// Plain-text stand-in for the wire format.
///
/// Queries encode as `id|name|type`; responses decode from
/// `id|rcode|type=value;type=value`.
#[derive(Default)]
pub struct TextCodec;

impl TextCodec {
    pub fn query_id(bytes: &[u8]) -> Option<u16> {
        std::str::from_utf8(bytes).ok()?.split('|').next()?.parse().ok()
    }

    pub fn reply(id: u16, rcode: u16, answers: &[(RecordType, &str)]) -> Vec<u8> {
        let body = answers
            .iter()
            .map(|(rt, value)| format!("{}={}", rt.to_u16(), value))
            .collect::<Vec<_>>()
            .join(";");
        format!("{}|{}|{}", id, rcode, body).into_bytes()
    }
}

impl MessageCodec for TextCodec {
    fn encode(&self, query: &Query) -> Result<Vec<u8>, DomainError> {
        Ok(format!("{}|{}|{}", query.id(), query.name(), query.record_type().to_u16()).into_bytes())
    }

    fn decode(&self, bytes: &[u8]) -> Result<Response, DomainError> {
        let bad = || DomainError::DecodeFailure("malformed text message".to_string());
        let text = std::str::from_utf8(bytes).map_err(|_| bad())?;
        let mut parts = text.splitn(3, '|');
        let id: u16 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let rcode: u16 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let body = parts.next().ok_or_else(bad)?;

        let mut answers = Vec::new();
        for entry in body.split(';').filter(|e| !e.is_empty()) {
            let (code, value) = entry.split_once('=').ok_or_else(bad)?;
            let record_type = RecordType::from_u16(code.parse().map_err(|_| bad())?);
            let data = match value.parse::<IpAddr>() {
                Ok(ip) => RecordData::Address(ip),
                Err(_) => RecordData::Name(value.to_string()),
            };
            answers.push(AnswerRecord::new("mock.test", record_type, 300, data));
        }
        Ok(Response::new(id, rcode, answers))
    }
}

// ── datagram transport ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyId {
    /// Reuse the transaction id of the most recently sent query.
    Echo,
    Fixed(u16),
}

/// What the mock server does in response to one receive call.
#[derive(Debug, Clone)]
pub enum RecvStep {
    Timeout,
    Reply {
        id: ReplyId,
        rcode: u16,
        answers: Vec<(RecordType, String)>,
    },
    Garbage,
    Error(DomainError),
    /// Never completes; the caller has to give up on its own.
    Hang,
}

impl RecvStep {
    pub fn ok(answers: &[(RecordType, &str)]) -> Self {
        RecvStep::Reply {
            id: ReplyId::Echo,
            rcode: 0,
            answers: answers
                .iter()
                .map(|(rt, v)| (*rt, v.to_string()))
                .collect(),
        }
    }

    pub fn rcode(rcode: u16) -> Self {
        RecvStep::Reply {
            id: ReplyId::Echo,
            rcode,
            answers: vec![],
        }
    }
}

#[derive(Default)]
struct TransportState {
    opened: Vec<SocketAddr>,
    sent: Vec<Vec<u8>>,
    receives: usize,
    closes: usize,
    drops: usize,
    script: VecDeque<RecvStep>,
    fail_open: bool,
}

/// Scripted datagram transport. Once the script runs out every receive
/// times out.
#[derive(Clone, Default)]
pub struct MockDatagramTransport {
    state: Arc<Mutex<TransportState>>,
}

impl MockDatagramTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scripted(steps: Vec<RecvStep>) -> Self {
        let transport = Self::new();
        transport.state.lock().unwrap().script = steps.into();
        transport
    }

    pub fn always_timing_out() -> Self {
        Self::new()
    }

    pub fn failing_open() -> Self {
        let transport = Self::new();
        transport.state.lock().unwrap().fail_open = true;
        transport
    }

    pub fn open_count(&self) -> usize {
        self.state.lock().unwrap().opened.len()
    }

    pub fn opened(&self) -> Vec<SocketAddr> {
        self.state.lock().unwrap().opened.clone()
    }

    pub fn send_count(&self) -> usize {
        self.state.lock().unwrap().sent.len()
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.state.lock().unwrap().sent.clone()
    }

    pub fn receive_count(&self) -> usize {
        self.state.lock().unwrap().receives
    }

    pub fn close_count(&self) -> usize {
        self.state.lock().unwrap().closes
    }

    /// Channels released by `Drop`, whether or not `close` ran first.
    pub fn drop_count(&self) -> usize {
        self.state.lock().unwrap().drops
    }

    pub fn sent_ids(&self) -> Vec<u16> {
        self.state
            .lock()
            .unwrap()
            .sent
            .iter()
            .filter_map(|bytes| TextCodec::query_id(bytes))
            .collect()
    }

    pub fn was_touched(&self) -> bool {
        let state = self.state.lock().unwrap();
        !state.opened.is_empty() || !state.sent.is_empty()
    }
}

#[async_trait]
impl DatagramTransport for MockDatagramTransport {
    async fn open(&self, server: SocketAddr) -> Result<Box<dyn DatagramChannel>, DomainError> {
        let mut state = self.state.lock().unwrap();
        state.opened.push(server);
        if state.fail_open {
            return Err(DomainError::IoError("mock open failure".to_string()));
        }
        Ok(Box::new(MockChannel {
            state: Arc::clone(&self.state),
        }))
    }
}

struct MockChannel {
    state: Arc<Mutex<TransportState>>,
}

#[async_trait]
impl DatagramChannel for MockChannel {
    async fn send(&mut self, bytes: &[u8]) -> Result<(), DomainError> {
        self.state.lock().unwrap().sent.push(bytes.to_vec());
        Ok(())
    }

    async fn receive(
        &mut self,
        _max_bytes: usize,
        _timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        let (step, last_id) = {
            let mut state = self.state.lock().unwrap();
            state.receives += 1;
            let last_id = state
                .sent
                .last()
                .and_then(|bytes| TextCodec::query_id(bytes))
                .unwrap_or(0);
            (state.script.pop_front().unwrap_or(RecvStep::Timeout), last_id)
        };

        match step {
            RecvStep::Timeout => Err(DomainError::QueryTimeout),
            RecvStep::Garbage => Ok(b"\x00\x01garbage".to_vec()),
            RecvStep::Error(e) => Err(e),
            RecvStep::Hang => std::future::pending().await,
            RecvStep::Reply { id, rcode, answers } => {
                let id = match id {
                    ReplyId::Echo => last_id,
                    ReplyId::Fixed(id) => id,
                };
                let answers: Vec<(RecordType, &str)> =
                    answers.iter().map(|(rt, v)| (*rt, v.as_str())).collect();
                Ok(TextCodec::reply(id, rcode, &answers))
            }
        }
    }

    async fn close(&mut self) {
        self.state.lock().unwrap().closes += 1;
    }
}

impl Drop for MockChannel {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            state.drops += 1;
        }
    }
}

// ── executors ───────────────────────────────────────────────────────────────

/// Executor with a fixed outcome that records the order it was called in.
pub struct MockExecutor {
    label: String,
    outcome: Result<Response, DomainError>,
    calls: AtomicUsize,
    call_log: Arc<Mutex<Vec<String>>>,
}

impl MockExecutor {
    pub fn succeeding(label: &str, answers: Vec<AnswerRecord>) -> Self {
        Self::with_outcome(label, Ok(Response::new(1, 0, answers)))
    }

    pub fn failing(label: &str, error: DomainError) -> Self {
        Self::with_outcome(label, Err(error))
    }

    pub fn with_outcome(label: &str, outcome: Result<Response, DomainError>) -> Self {
        Self {
            label: label.to_string(),
            outcome,
            calls: AtomicUsize::new(0),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn sharing_log(mut self, log: &Arc<Mutex<Vec<String>>>) -> Self {
        self.call_log = Arc::clone(log);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsExecutor for MockExecutor {
    async fn execute(
        &self,
        _name: &str,
        record_type: &QueryType,
        _options: &QueryOptions,
    ) -> Result<Response, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.call_log.lock().unwrap().push(self.label.clone());
        record_type.resolve()?;
        self.outcome.clone()
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}

/// Executor that records the record type it was asked for.
#[derive(Default)]
pub struct RecordingExecutor {
    pub answers: Vec<AnswerRecord>,
    pub requested: Mutex<Vec<(String, RecordType)>>,
}

impl RecordingExecutor {
    pub fn with_answers(answers: Vec<AnswerRecord>) -> Self {
        Self {
            answers,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requested.lock().unwrap().len()
    }
}

#[async_trait]
impl DnsExecutor for RecordingExecutor {
    async fn execute(
        &self,
        name: &str,
        record_type: &QueryType,
        _options: &QueryOptions,
    ) -> Result<Response, DomainError> {
        let record_type = record_type.resolve()?;
        self.requested
            .lock()
            .unwrap()
            .push((name.to_string(), record_type));
        Ok(Response::new(1, 0, self.answers.clone()))
    }

    fn label(&self) -> String {
        "recording".to_string()
    }
}

// ── resolver ────────────────────────────────────────────────────────────────

pub struct MockAddressResolver {
    outcome: Result<Vec<IpAddr>, DomainError>,
    calls: AtomicUsize,
}

impl MockAddressResolver {
    pub fn returning(addresses: &[&str]) -> Self {
        Self {
            outcome: Ok(addresses.iter().map(|a| a.parse().unwrap()).collect()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AddressResolver for MockAddressResolver {
    async fn resolve(
        &self,
        _domain: &str,
        _options: &ResolveOptions,
    ) -> Result<Vec<IpAddr>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

// ── stream connector ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockStream {
    pub address: IpAddr,
    pub port: u16,
    pub verification_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectAttempt {
    pub address: IpAddr,
    pub port: u16,
    pub options: StreamOptions,
}

/// Accepts only the listed addresses; hanging addresses never answer;
/// everything else is refused.
#[derive(Clone, Default)]
pub struct MockStreamConnector {
    accepting: HashSet<IpAddr>,
    hanging: HashSet<IpAddr>,
    attempts: Arc<Mutex<Vec<ConnectAttempt>>>,
}

impl MockStreamConnector {
    pub fn accepting(addresses: &[&str]) -> Self {
        Self {
            accepting: addresses.iter().map(|a| a.parse().unwrap()).collect(),
            ..Self::default()
        }
    }

    pub fn refusing_all() -> Self {
        Self::default()
    }

    pub fn hanging_on(mut self, addresses: &[&str]) -> Self {
        self.hanging = addresses.iter().map(|a| a.parse().unwrap()).collect();
        self
    }

    pub fn attempts(&self) -> Vec<ConnectAttempt> {
        self.attempts.lock().unwrap().clone()
    }

    pub fn attempted_addresses(&self) -> Vec<IpAddr> {
        self.attempts().into_iter().map(|a| a.address).collect()
    }
}

#[async_trait]
impl StreamConnector for MockStreamConnector {
    type Stream = MockStream;

    async fn connect(
        &self,
        address: IpAddr,
        port: u16,
        options: &StreamOptions,
    ) -> Result<MockStream, DomainError> {
        self.attempts.lock().unwrap().push(ConnectAttempt {
            address,
            port,
            options: options.clone(),
        });

        if self.hanging.contains(&address) {
            std::future::pending::<()>().await;
        }

        if self.accepting.contains(&address) {
            Ok(MockStream {
                address,
                port,
                verification_name: options.verification_name.clone(),
            })
        } else {
            Err(DomainError::TransportConnectionRefused {
                server: SocketAddr::new(address, port).to_string(),
            })
        }
    }
}
