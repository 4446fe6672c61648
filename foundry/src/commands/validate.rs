// foundry/src/commands/validate.rs
//
// USE CASE: Run only the init_deploy_config step.

use std::path::PathBuf;

use foundry_core::application::init_deploy_config;

use crate::cli::resolve_config_file;

pub fn execute(project_dir: PathBuf, config_file: PathBuf) -> anyhow::Result<()> {
    let config_file = resolve_config_file(&project_dir, config_file);

    match init_deploy_config(&config_file) {
        Ok(_) => {
            println!("✨ Config is valid.");
            Ok(())
        }
        Err(e) => {
            // Fancy diagnostic output (error codes + help texts).
            eprintln!("{:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    }
}
