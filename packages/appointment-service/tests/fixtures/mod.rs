//! Test fixtures for HTTP API integration tests.

use std::{net::TcpStream, thread, time::Duration};

/// Test server running the real appointment service on a dedicated port.
pub struct TestServer {
    port: u16,
}

impl TestServer {
    /// Start the service on `port` in a background thread and wait until
    /// it accepts connections.
    pub fn start(port: u16) -> Self {
        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");
            runtime.block_on(async {
                if let Err(e) = karte_appointment_service::run_server(port).await {
                    panic!("Test server error: {e}");
                }
            });
        });

        // サーバーが接続を受け付けるまで待機
        for _ in 0..50 {
            if TcpStream::connect(("127.0.0.1", port)).is_ok() {
                break;
            }
            thread::sleep(Duration::from_millis(100));
        }

        Self { port }
    }

    /// Base URL of the running server.
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }
}
