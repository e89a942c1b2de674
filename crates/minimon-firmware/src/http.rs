//! HTTP status page, served only while connected.

use std::time::Instant;

use esp_idf_svc::http::server::{Configuration, EspHttpServer};
use esp_idf_svc::http::Method;
use esp_idf_svc::io::Write;

use minimon_ui::StatusService;

const SERVER_STACK_SIZE: usize = 6 * 1024;

pub struct HttpStatusService {
    server: Option<EspHttpServer<'static>>,
    booted: Instant,
}

impl HttpStatusService {
    pub fn new() -> Self {
        Self {
            server: None,
            booted: Instant::now(),
        }
    }

    fn start_server(&mut self) -> Result<(), String> {
        let mut server = EspHttpServer::new(&Configuration {
            stack_size: SERVER_STACK_SIZE,
            ..Default::default()
        })
        .map_err(|err| format!("http server start failed: {}", err))?;

        let booted = self.booted;
        server
            .fn_handler::<(), _>("/", Method::Get, move |req| {
                let uptime = booted.elapsed().as_secs();
                let body = format!(
                    "<html><body><h1>Device Status</h1>\
                     <p>Uptime: {} seconds</p></body></html>",
                    uptime
                );
                let mut resp = req.into_ok_response().map_err(|_| ())?;
                let _ = resp.write_all(body.as_bytes());
                Ok(())
            })
            .map_err(|err| format!("http route register failed: {}", err))?;

        self.server = Some(server);
        Ok(())
    }
}

impl StatusService for HttpStatusService {
    fn start(&mut self) {
        if self.server.is_some() {
            return;
        }
        match self.start_server() {
            Ok(()) => log::info!("[HTTP] status server up on port 80"),
            Err(err) => log::warn!("[HTTP] {}", err),
        }
    }

    fn stop(&mut self) {
        if self.server.take().is_some() {
            log::info!("[HTTP] status server stopped");
        }
    }

    fn pump(&mut self) {
        // Requests are handled on the server's own tasks.
    }
}
