//! WiFi radio backed by the ESP-IDF driver.
//!
//! Association is non-blocking: `begin_association` kicks the driver off
//! and the outcome arrives through system event subscriptions, so the UI
//! loop keeps ticking while the driver negotiates.

use core::convert::TryInto;
use std::sync::{Arc, Mutex};

use embedded_svc::wifi::{AuthMethod, ClientConfiguration, Configuration};
use esp_idf_svc::eventloop::{EspSubscription, EspSystemEventLoop, System};
use esp_idf_svc::hal::modem::Modem;
use esp_idf_svc::netif::IpEvent;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::wifi::{EspWifi, WifiEvent};

use minimon_ui::{ConnectivityStatus, NetworkInfo, Radio};

pub struct EspRadio {
    wifi: EspWifi<'static>,
    status: Arc<Mutex<ConnectivityStatus>>,
    last_ssid: Option<String>,
    _wifi_events: EspSubscription<'static, System>,
    _ip_events: EspSubscription<'static, System>,
}

impl EspRadio {
    pub fn new(
        modem: Modem,
        sys_loop: EspSystemEventLoop,
        nvs: EspDefaultNvsPartition,
    ) -> Result<Self, String> {
        let wifi = EspWifi::new(modem, sys_loop.clone(), Some(nvs))
            .map_err(|err| format!("wifi init failed: {}", err))?;
        let status = Arc::new(Mutex::new(ConnectivityStatus::Disconnected));

        let wifi_status = status.clone();
        let wifi_events = sys_loop
            .subscribe::<WifiEvent, _>(move |event| {
                if let WifiEvent::StaDisconnected(_) = event {
                    if let Ok(mut status) = wifi_status.lock() {
                        // A drop while still associating is a failed attempt;
                        // a drop while up is a plain disconnect.
                        *status = match *status {
                            ConnectivityStatus::Connecting => ConnectivityStatus::ConnectFailed,
                            _ => ConnectivityStatus::Disconnected,
                        };
                    }
                }
            })
            .map_err(|err| format!("wifi event subscribe failed: {}", err))?;

        let ip_status = status.clone();
        let ip_events = sys_loop
            .subscribe::<IpEvent, _>(move |event| {
                if let IpEvent::DhcpIpAssigned(_) = event {
                    if let Ok(mut status) = ip_status.lock() {
                        *status = ConnectivityStatus::Connected;
                    }
                }
            })
            .map_err(|err| format!("ip event subscribe failed: {}", err))?;

        Ok(Self {
            wifi,
            status,
            last_ssid: None,
            _wifi_events: wifi_events,
            _ip_events: ip_events,
        })
    }

    fn set_status(&self, status: ConnectivityStatus) {
        if let Ok(mut guard) = self.status.lock() {
            *guard = status;
        }
    }

    fn associate(&mut self, ssid: &str, secret: Option<&str>) -> Result<(), String> {
        let ssid_h = ssid
            .try_into()
            .map_err(|_| String::from("SSID too long (max 32)"))?;

        let (auth_method, password_h) = match secret {
            None | Some("") => (AuthMethod::None, Default::default()),
            Some(secret) => (
                AuthMethod::WPA2Personal,
                secret
                    .try_into()
                    .map_err(|_| String::from("password too long (max 64)"))?,
            ),
        };

        let conf = Configuration::Client(ClientConfiguration {
            ssid: ssid_h,
            bssid: None,
            auth_method,
            password: password_h,
            channel: None,
            ..Default::default()
        });

        self.wifi
            .set_configuration(&conf)
            .map_err(|err| format!("wifi config failed: {}", err))?;
        self.wifi
            .start()
            .map_err(|err| format!("wifi start failed: {}", err))?;
        self.wifi
            .connect()
            .map_err(|err| format!("wifi connect failed: {}", err))?;
        Ok(())
    }
}

impl Radio for EspRadio {
    fn scan(&mut self) -> Vec<NetworkInfo> {
        if let Err(err) = self.wifi.start() {
            log::warn!("[WIFI] start before scan failed: {}", err);
            return Vec::new();
        }
        match self.wifi.scan() {
            Ok(points) => points
                .into_iter()
                .filter(|ap| !ap.ssid.is_empty())
                .map(|ap| NetworkInfo {
                    ssid: ap.ssid.as_str().to_string(),
                    open: ap.auth_method == Some(AuthMethod::None),
                })
                .collect(),
            Err(err) => {
                log::warn!("[WIFI] scan failed: {}", err);
                Vec::new()
            }
        }
    }

    fn begin_association(&mut self, ssid: &str, secret: Option<&str>) {
        log::info!("[WIFI] associating with {:?}", ssid);
        self.last_ssid = Some(ssid.to_string());
        self.set_status(ConnectivityStatus::Connecting);
        if let Err(err) = self.associate(ssid, secret) {
            log::warn!("[WIFI] association with {:?} did not start: {}", ssid, err);
            self.set_status(ConnectivityStatus::ConnectFailed);
        }
    }

    fn status(&self) -> ConnectivityStatus {
        self.status
            .lock()
            .map(|guard| *guard)
            .unwrap_or(ConnectivityStatus::Disconnected)
    }

    fn disconnect(&mut self) {
        if let Err(err) = self.wifi.disconnect() {
            log::warn!("[WIFI] disconnect failed: {}", err);
        }
        self.set_status(ConnectivityStatus::Disconnected);
    }

    fn local_address(&self) -> Option<String> {
        if self.status() != ConnectivityStatus::Connected {
            return None;
        }
        self.wifi
            .sta_netif()
            .get_ip_info()
            .ok()
            .map(|info| info.ip.to_string())
    }

    fn connected_ssid(&self) -> Option<String> {
        if self.status() == ConnectivityStatus::Connected {
            self.last_ssid.clone()
        } else {
            None
        }
    }
}
