//! Encrypted storage for the Toggl API token.
//!
//! The token is encrypted with AES-256-CBC (PKCS7 padding) using a key and
//! IV embedded at build time by `build.rs`, base64-encoded and written to a
//! file in the data directory. This keeps the token out of `config.json`
//! and out of shell history after `tsheet login`.

use super::data_storage::DataStorage;
use aes::Aes256;
use anyhow::Result;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use std::fs;
use std::path::{Path, PathBuf};

// Include generated metadata with encryption keys
include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

pub const TOKEN_FILE_NAME: &str = ".toggl_token";

#[derive(Clone, Debug)]
pub struct Secret {
    secret_file_path: PathBuf,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl Secret {
    pub fn new(secret_name: &str) -> Self {
        Self::in_storage(&DataStorage::new(), secret_name)
    }

    /// The data directory is created by [`Secret::store`], not here.
    pub fn in_storage(storage: &DataStorage, secret_name: &str) -> Self {
        Self {
            secret_file_path: storage.base_path().join(secret_name),
            key: APP_METADATA_ENCRYPTION_KEY.to_vec(),
            iv: APP_METADATA_ENCRYPTION_IV.to_vec(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.secret_file_path
    }

    pub fn exists(&self) -> bool {
        self.secret_file_path.is_file()
    }

    pub fn store(&self, value: &str) -> Result<()> {
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let ciphertext = cipher.encrypt_vec(value.as_bytes());
        let encoded = BASE64_STANDARD.encode(&ciphertext);

        if let Some(parent) = self.secret_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.secret_file_path, encoded)?;

        Ok(())
    }

    /// Decrypted value, `None` when nothing was stored.
    pub fn load(&self) -> Result<Option<String>> {
        if !self.exists() {
            return Ok(None);
        }

        let encoded = fs::read_to_string(&self.secret_file_path)?;
        let ciphertext = BASE64_STANDARD.decode(encoded.trim())?;
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let decrypted = cipher.decrypt_vec(&ciphertext)?;

        Ok(Some(String::from_utf8(decrypted)?))
    }

    /// Removes the stored value. Returns `false` when there was none.
    pub fn delete(&self) -> Result<bool> {
        if !self.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.secret_file_path)?;

        Ok(true)
    }
}
