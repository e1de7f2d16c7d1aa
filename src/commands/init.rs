//! Interactive configuration setup.
//!
//! Walks through the Remember The Milk, calendar and report settings and
//! saves them. With `--delete` the configuration file and the stored
//! credentials are removed instead.

use crate::{
    api::rtm::Rtm,
    libs::{config::Config, messages::Message},
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration and stored credentials
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        let config_deleted = Config::delete()?;
        let secrets_deleted = Rtm::delete_credentials()?;

        if !config_deleted && secrets_deleted == 0 {
            msg_warning!(Message::ConfigNothingToDelete);
            return Ok(());
        }
        if config_deleted {
            msg_success!(Message::ConfigDeleted);
        }
        if secrets_deleted > 0 {
            msg_success!(Message::SecretsDeleted(secrets_deleted));
        }
        return Ok(());
    }

    Config::init()?.save()?;
    msg_success!(Message::ConfigSaved);
    Ok(())
}
