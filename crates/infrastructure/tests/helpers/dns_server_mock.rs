#![allow(dead_code)]
use std::net::{IpAddr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock server answers every query it receives.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// NOERROR with an optional CNAME followed by A/AAAA records.
    Answer {
        cname: Option<String>,
        addresses: Vec<IpAddr>,
    },
    Rcode(u8),
    /// Reply with the query id plus one.
    WrongId,
    Garbage,
    Silent,
}

impl MockBehavior {
    pub fn addresses(addresses: &[&str]) -> Self {
        MockBehavior::Answer {
            cname: None,
            addresses: addresses.iter().map(|a| a.parse().unwrap()).collect(),
        }
    }
}

pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Binds an ephemeral port on 127.0.0.1.
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let local_addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&queries);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            let reply = Self::build_mock_response(&buf[..len], &behavior);
                            if let Some(response) = reply {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr: local_addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn queries_received(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn build_mock_response(query: &[u8], behavior: &MockBehavior) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        let (rcode, cname, addresses) = match behavior {
            MockBehavior::Silent => return None,
            MockBehavior::Garbage => return Some(vec![0xde, 0xad, 0xbe]),
            MockBehavior::Rcode(code) => (*code, None, &[][..]),
            MockBehavior::WrongId => (0, None, &[][..]),
            MockBehavior::Answer { cname, addresses } => (0, cname.as_deref(), &addresses[..]),
        };

        let mut response = Vec::with_capacity(512);

        let id = u16::from_be_bytes([query[0], query[1]]);
        let id = match behavior {
            MockBehavior::WrongId => id.wrapping_add(1),
            _ => id,
        };
        response.extend_from_slice(&id.to_be_bytes());

        // QR + RD, RA + rcode
        response.push(0x81);
        response.push(0x80 | (rcode & 0x0f));

        // QDCOUNT copied from the query
        response.extend_from_slice(&query[4..6]);

        let ancount = addresses.len() as u16 + u16::from(cname.is_some());
        response.extend_from_slice(&ancount.to_be_bytes());

        // NSCOUNT, ARCOUNT
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&query[12..]);

        if let Some(target) = cname {
            let rdata = encode_name(target);
            response.extend_from_slice(&[0xc0, 0x0c, 0x00, 0x05, 0x00, 0x01]);
            response.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]);
            response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
            response.extend_from_slice(&rdata);
        }

        for address in addresses {
            let (rtype, rdata): (u16, Vec<u8>) = match address {
                IpAddr::V4(v4) => (1, v4.octets().to_vec()),
                IpAddr::V6(v6) => (28, v6.octets().to_vec()),
            };
            response.extend_from_slice(&[0xc0, 0x0c]);
            response.extend_from_slice(&rtype.to_be_bytes());
            response.extend_from_slice(&[0x00, 0x01]);
            response.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]);
            response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
            response.extend_from_slice(&rdata);
        }

        Some(response)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.trim_end_matches('.').split('.') {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_server_responds() {
        let server = MockDnsServer::start(MockBehavior::addresses(&["93.184.216.34"]))
            .await
            .unwrap();

        let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();

        let query = vec![
            0x12, 0x34,
            0x01, 0x00,
            0x00, 0x01,
            0x00, 0x00,
            0x00, 0x00,
            0x00, 0x00,
        ];

        client.send_to(&query, server.addr()).await.unwrap();

        let mut buf = vec![0u8; 512];
        let (len, _) = client.recv_from(&mut buf).await.unwrap();

        assert!(len > 12, "Response should have at least header");
        assert_eq!(buf[0..2], query[0..2], "Transaction ID should match");
        assert_eq!(buf[2] & 0x80, 0x80, "QR bit should be set (response)");
        assert_eq!(server.queries_received(), 1);

        server.shutdown();
    }

    #[test]
    fn test_mock_response_builder() {
        let query = vec![
            0xab, 0xcd,
            0x01, 0x00,
            0x00, 0x01,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];

        let response = MockDnsServer::build_mock_response(&query, &MockBehavior::Rcode(3)).unwrap();

        assert_eq!(response[0..2], [0xab, 0xcd]);
        assert_eq!(response[3] & 0x0f, 3);
    }
}
