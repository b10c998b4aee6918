//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `salesdesk_core` wiring end to end: config, logging, store.
//! - Print department and seller listings in a stable plain-text layout.
//!
//! Usage: `salesdesk_cli [config.toml]`. Without a config file an empty
//! in-memory store is used.

use log::info;
use salesdesk_core::{
    core_version, init_logging_from_config, AppConfig, DaoFactory, DepartmentService,
    SellerService, Store,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("salesdesk: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    init_logging_from_config(&config.logging)?;

    println!("salesdesk_core version={}", core_version());

    let mut store = Store::new(config.database.clone());
    {
        let factory = DaoFactory::new(&store);
        let departments = DepartmentService::new(factory.department_dao()?).find_all()?;
        let sellers = SellerService::new(factory.seller_dao()?).find_all()?;

        println!("departments={}", departments.len());
        for department in &departments {
            println!(
                "  {:>4}  {}",
                department.id.unwrap_or_default(),
                department.name
            );
        }

        println!("sellers={}", sellers.len());
        for seller in &sellers {
            println!(
                "  {:>4}  {:<30} {:<30} {:>10}  {:>10}  {}",
                seller.id.unwrap_or_default(),
                seller.name,
                seller.email,
                seller.birth_date_display(),
                seller.base_salary_display(),
                seller
                    .department
                    .as_ref()
                    .map(|department| department.name.as_str())
                    .unwrap_or("-")
            );
        }
        info!(
            "event=cli_list module=cli status=ok departments={} sellers={}",
            departments.len(),
            sellers.len()
        );
    }
    store.close_connection()?;
    Ok(())
}
