//! Credentials persistence in the default NVS partition.

use esp_idf_svc::nvs::{EspDefaultNvsPartition, EspNvs, NvsDefault};

use minimon_ui::{CredentialsStore, StoredCredentials};

const NVS_NAMESPACE: &str = "wifi-creds";
const KEY_SSID: &str = "ssid";
const KEY_PASSWORD: &str = "password";

// SSID max 32, password max 64, plus the NUL the C API appends.
const MAX_VALUE_LEN: usize = 65;

pub struct NvsCredentialsStore {
    nvs: EspNvs<NvsDefault>,
}

impl NvsCredentialsStore {
    pub fn new(partition: EspDefaultNvsPartition) -> Result<Self, String> {
        let nvs = EspNvs::new(partition, NVS_NAMESPACE, true)
            .map_err(|err| format!("nvs namespace open failed: {}", err))?;
        Ok(Self { nvs })
    }

    fn read_key(&mut self, key: &str) -> Option<String> {
        let mut buf = [0u8; MAX_VALUE_LEN];
        match self.nvs.get_str(key, &mut buf) {
            Ok(Some(value)) => Some(value.to_string()),
            Ok(None) => None,
            Err(err) => {
                log::warn!("[NVS] read of {:?} failed: {}", key, err);
                None
            }
        }
    }
}

impl CredentialsStore for NvsCredentialsStore {
    fn load(&mut self) -> Option<StoredCredentials> {
        let ssid = self.read_key(KEY_SSID)?;
        if ssid.is_empty() {
            return None;
        }
        let secret = self.read_key(KEY_PASSWORD).unwrap_or_default();
        Some(StoredCredentials { ssid, secret })
    }

    fn save(&mut self, credentials: &StoredCredentials) {
        if let Err(err) = self.nvs.set_str(KEY_SSID, &credentials.ssid) {
            log::warn!("[NVS] ssid write failed: {}", err);
            return;
        }
        if let Err(err) = self.nvs.set_str(KEY_PASSWORD, &credentials.secret) {
            log::warn!("[NVS] password write failed: {}", err);
            return;
        }
        log::info!("[NVS] credentials for {:?} saved", credentials.ssid);
    }
}
