//! Encrypted storage for RTM credentials.
//!
//! Values are looked up in the environment first, then in an AES-256-CBC
//! encrypted file in the data directory, and finally requested interactively.
//! Prompted values are written back to the encrypted file.

use super::data_storage::DataStorage;
use aes::Aes256;
use anyhow::Result;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use dialoguer::{theme::ColorfulTheme, Password};
use std::env;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;

// Include generated metadata with encryption keys
include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

#[derive(Clone, Debug)]
pub struct Secret {
    value: Option<String>,
    prompt: String,
    env_var: Option<String>,
    secret_file_path: PathBuf,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl Secret {
    pub fn new(secret_name: &str, prompt: &str) -> Self {
        let key = APP_METADATA_ENCRYPTION_KEY.to_vec();
        let iv = APP_METADATA_ENCRYPTION_IV.to_vec();

        let secret_file_path = DataStorage::new().get_path(secret_name).unwrap_or_else(|_| PathBuf::from(secret_name));

        Self {
            value: None,
            prompt: prompt.to_owned(),
            env_var: None,
            secret_file_path,
            key,
            iv,
        }
    }

    /// Lets an environment variable (or `.env` entry) take precedence over the stored value.
    pub fn with_env(self, env_var: &str) -> Self {
        Self {
            env_var: Some(env_var.to_owned()),
            ..self
        }
    }

    fn set_value(&self, value: &str) -> Self {
        Self {
            value: Some(value.to_owned()),
            ..self.clone()
        }
    }

    pub fn get_or_prompt(&self) -> Result<String> {
        if let Some(value) = self.env_var.as_ref().and_then(|name| env::var(name).ok()) {
            if !value.is_empty() {
                return Ok(value);
            }
        }
        if fs::metadata(&self.secret_file_path).is_ok() {
            if let Ok(value) = self.decrypt() {
                return Ok(value);
            }
        }
        self.prompt()
    }

    pub fn prompt(&self) -> Result<String> {
        let value = Password::with_theme(&ColorfulTheme::default()).with_prompt(&self.prompt).interact()?;
        self.store(&value)?;
        Ok(value)
    }

    /// Encrypts `value` and writes it to the secret file.
    pub fn store(&self, value: &str) -> Result<()> {
        self.set_value(value).encrypt()?;
        Ok(())
    }

    pub fn delete(&self) -> Result<bool> {
        if !self.secret_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.secret_file_path)?;
        Ok(true)
    }

    fn encrypt(&self) -> Result<Self> {
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let value = self.value.clone().unwrap_or_default();
        let ciphertext = cipher.encrypt_vec(value.as_bytes());
        let encoded = BASE64_STANDARD.encode(&ciphertext);

        if let Some(parent) = self.secret_file_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        let mut file = File::create(&self.secret_file_path)?;
        file.write_all(encoded.as_bytes())?;

        Ok(self.clone())
    }

    fn decrypt(&self) -> Result<String> {
        let mut file = File::open(&self.secret_file_path)?;
        let mut encoded = String::new();
        file.read_to_string(&mut encoded)?;
        let ciphertext = BASE64_STANDARD.decode(encoded)?;
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let decrypted = cipher.decrypt_vec(&ciphertext)?;

        Ok(String::from_utf8(decrypted)?)
    }
}
