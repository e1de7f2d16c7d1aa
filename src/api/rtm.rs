//! Remember The Milk REST client.
//!
//! Tasks are fetched with `rtm.tasks.getList`, passing the report filter
//! through unchanged. Every request is signed: `api_sig` is the MD5 digest of
//! the shared secret followed by all parameters sorted by name and
//! concatenated as `name` + `value`.
//!
//! ## Credentials
//!
//! The API key lives in the configuration file. The shared secret and the
//! auth token are read from `RTM_SHARED_SECRET` / `RTM_AUTH_TOKEN` (a `.env`
//! file works too), then from encrypted secret files, and are prompted for
//! when neither is available.
//!
//! ## Response shape
//!
//! ```text
//! rsp.tasks.list[]            one entry per RTM list
//!   .taskseries[]             a task with its name
//!     .task[]                 one entry per occurrence (recurring tasks)
//! ```
//!
//! Each occurrence becomes one [`Task`], in the order the service returns them.

use super::TaskService;
use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use crate::libs::task::Task;
use crate::{msg_debug, msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use md5::{Digest, Md5};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_API_URL: &str = "https://api.rememberthemilk.com/services/rest/";
const GET_LIST_METHOD: &str = "rtm.tasks.getList";
const API_VERSION: &str = "2";
const SHARED_SECRET_FILE: &str = ".rtm_shared_secret";
const AUTH_TOKEN_FILE: &str = ".rtm_auth_token";
const SHARED_SECRET_ENV: &str = "RTM_SHARED_SECRET";
const AUTH_TOKEN_ENV: &str = "RTM_AUTH_TOKEN";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RtmConfig {
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl RtmConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "rtm".to_string(),
            name: "Remember The Milk".to_string(),
        }
    }

    /// Prompts for the API settings, then for the credentials, which are stored encrypted.
    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            api_key: "".to_string(),
            api_url: default_api_url(),
        });
        msg_print!(Message::ConfigModuleRtm);

        let config = Self {
            api_key: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRtmApiKey.to_string())
                .default(config.api_key)
                .interact_text()?,
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRtmApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        };
        Rtm::shared_secret().prompt()?;
        Rtm::auth_token().prompt()?;

        Ok(config)
    }
}

#[derive(Clone, Debug)]
struct Credentials {
    shared_secret: String,
    auth_token: String,
}

#[derive(Debug)]
pub struct Rtm {
    client: Client,
    config: RtmConfig,
    credentials: Option<Credentials>,
}

impl TaskService for Rtm {
    async fn query_tasks(&mut self, filter: &str) -> Result<Vec<Task>> {
        let credentials = self.credentials()?;
        let params = signed_params(
            &credentials.shared_secret,
            vec![
                ("method", GET_LIST_METHOD.to_string()),
                ("api_key", self.config.api_key.clone()),
                ("auth_token", credentials.auth_token.clone()),
                ("filter", filter.to_string()),
                ("format", "json".to_string()),
                ("v", API_VERSION.to_string()),
            ],
        );

        let res = self.client.get(&self.config.api_url).query(&params).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(msg_error_anyhow!(Message::RtmRequestFailed(status.to_string())));
        }

        let body = res.text().await?;
        let tasks = parse_task_list(&body)?;
        msg_debug!(Message::TasksReceived(tasks.len(), filter.to_string()));
        Ok(tasks)
    }
}

impl Rtm {
    pub fn new(config: &RtmConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            credentials: None,
        }
    }

    /// Creates a client with explicit credentials, bypassing the secret store.
    pub fn with_credentials(config: &RtmConfig, shared_secret: &str, auth_token: &str) -> Self {
        Self {
            credentials: Some(Credentials {
                shared_secret: shared_secret.to_string(),
                auth_token: auth_token.to_string(),
            }),
            ..Self::new(config)
        }
    }

    pub fn shared_secret() -> Secret {
        Secret::new(SHARED_SECRET_FILE, &Message::PromptRtmSharedSecret.to_string()).with_env(SHARED_SECRET_ENV)
    }

    pub fn auth_token() -> Secret {
        Secret::new(AUTH_TOKEN_FILE, &Message::PromptRtmAuthToken.to_string()).with_env(AUTH_TOKEN_ENV)
    }

    /// Removes both stored credentials, returning how many files were deleted.
    pub fn delete_credentials() -> Result<usize> {
        let mut deleted = 0;
        for secret in [Self::shared_secret(), Self::auth_token()] {
            if secret.delete()? {
                deleted += 1;
            }
        }
        Ok(deleted)
    }

    fn credentials(&mut self) -> Result<Credentials> {
        if let Some(credentials) = &self.credentials {
            return Ok(credentials.clone());
        }
        let credentials = Credentials {
            shared_secret: Self::shared_secret().get_or_prompt()?,
            auth_token: Self::auth_token().get_or_prompt()?,
        };
        self.credentials = Some(credentials.clone());
        Ok(credentials)
    }
}

/// Computes the RTM request signature for `params`.
pub fn sign(shared_secret: &str, params: &[(&str, String)]) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let mut hasher = Md5::new();
    hasher.update(shared_secret.as_bytes());
    for (key, value) in sorted {
        hasher.update(key.as_bytes());
        hasher.update(value.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Appends `api_sig` to `params`.
pub fn signed_params<'a>(shared_secret: &str, mut params: Vec<(&'a str, String)>) -> Vec<(&'a str, String)> {
    let signature = sign(shared_secret, &params);
    params.push(("api_sig", signature));
    params
}

#[derive(Deserialize, Debug)]
struct Envelope {
    rsp: Rsp,
}

#[derive(Deserialize, Debug)]
struct Rsp {
    stat: String,
    err: Option<RtmError>,
    tasks: Option<TaskLists>,
}

#[derive(Deserialize, Debug)]
struct RtmError {
    #[serde(default)]
    code: Value,
    #[serde(default)]
    msg: String,
}

#[derive(Deserialize, Debug)]
struct TaskLists {
    #[serde(default)]
    list: OneOrMany<TaskList>,
}

#[derive(Deserialize, Debug)]
struct TaskList {
    #[serde(default)]
    taskseries: OneOrMany<TaskSeries>,
}

#[derive(Deserialize, Debug)]
struct TaskSeries {
    #[serde(default)]
    id: String,
    name: String,
    #[serde(default)]
    task: OneOrMany<TaskInstance>,
}

#[derive(Deserialize, Debug)]
struct TaskInstance {
    #[serde(default)]
    id: String,
    #[serde(default)]
    due: String,
    #[serde(default)]
    completed: String,
}

/// RTM collapses single-element arrays into objects in some responses.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Decodes an `rtm.tasks.getList` JSON response into tasks, in service order.
pub fn parse_task_list(body: &str) -> Result<Vec<Task>> {
    let envelope: Envelope = serde_json::from_str(body).map_err(|e| msg_error_anyhow!(Message::RtmResponseInvalid(e.to_string())))?;
    let rsp = envelope.rsp;

    if rsp.stat != "ok" {
        let err = rsp.err.unwrap_or(RtmError {
            code: Value::Null,
            msg: format!("stat={}", rsp.stat),
        });
        let code = match err.code {
            Value::String(code) => code,
            Value::Null => "unknown".to_string(),
            other => other.to_string(),
        };
        return Err(msg_error_anyhow!(Message::RtmServiceError(code, err.msg)));
    }

    let mut tasks = Vec::new();
    let lists = rsp.tasks.map(|tasks| tasks.list.into_vec()).unwrap_or_default();
    for list in lists {
        for series in list.taskseries.into_vec() {
            let instances = series.task.into_vec();
            if instances.is_empty() {
                tasks.push(Task {
                    id: non_empty(series.id.clone()),
                    ..Task::new(&series.name)
                });
                continue;
            }
            for instance in instances {
                tasks.push(Task {
                    id: non_empty(instance.id),
                    name: series.name.clone(),
                    due: non_empty(instance.due),
                    completed: non_empty(instance.completed),
                });
            }
        }
    }
    Ok(tasks)
}
