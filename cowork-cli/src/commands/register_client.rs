//! Register-client command implementation.

use clap::Args;

use cowork::operations::RegisterClient;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Register a new client.
#[derive(Args)]
pub struct RegisterClientCommand {
    /// First name
    #[arg(long, value_name = "NAME")]
    pub first_name: String,

    /// Last name
    #[arg(long, value_name = "NAME")]
    pub last_name: String,
}

impl RegisterClientCommand {
    /// Execute the register-client command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let client = RegisterClient {
            first_name: self.first_name,
            last_name: self.last_name,
        }
        .execute(&mut db)?;

        println!("Registered client {} with id {}", client.full_name(), client.id());
        Ok(())
    }
}
