//! Throwaway HTTP endpoint for exercising the fetcher without the network.

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use api::fetch::TelemetryClient;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

pub struct StubEndpoint {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl StubEndpoint {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn client(&self, timeout: Duration) -> TelemetryClient {
        let http = reqwest::Client::builder()
            .no_proxy()
            .timeout(timeout)
            .build()
            .expect("test http client");
        TelemetryClient::with_http(http, self.url.clone())
    }
}

/// Answer every request with `status` and `body`, after `delay`.
pub async fn serve(status: &'static str, body: &'static str, delay: Duration) -> StubEndpoint {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub address");
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            tokio::spawn(async move {
                let mut request = [0u8; 4096];
                let _ = socket.read(&mut request).await;
                tokio::time::sleep(delay).await;
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    StubEndpoint {
        url: format!("http://{addr}/playtesting1_analytics.json"),
        hits,
    }
}

pub const PLAYTEST_JSON: &str = r#"{
  "-Nx01": {
    "level": 1, "scoreLeft": 10, "scoreRight": 4, "reasonforFinshingLevel": 1,
    "totalCtrlSwitchPropCollectedLeft": 2, "totalCtrlSwitchPropCollectedRight": 1,
    "collisionDueToCtrlFlipLeft": 1, "collisionDueToCtrlFlipRight": 0
  },
  "-Nx02": {
    "level": "1", "scoreLeft": 20, "scoreRight": 6, "reasonforFinshingLevel": 2,
    "totalCtrlSwitchPropCollectedLeft": 0, "totalCtrlSwitchPropCollectedRight": 3,
    "collisionDueToCtrlFlipLeft": 0, "collisionDueToCtrlFlipRight": 2
  },
  "-Nx03": {
    "level": 2, "scoreLeft": 7, "scoreRight": 7, "reasonforFinshingLevel": 1
  }
}"#;
