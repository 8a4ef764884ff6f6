use api_smoke::config::RunSettings;
use api_smoke::utils::logger;
use api_smoke::{CliConfig, DeckClient, DeckFlow, FlowSequence, UserCrudFlow, UsersClient};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting api-smoke");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match RunSettings::from_cli(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let mut sequence = FlowSequence::new("api-smoke".to_string());
    for flow_name in &settings.execution_order {
        match flow_name.as_str() {
            UserCrudFlow::NAME => {
                let client =
                    UsersClient::new(settings.users_base_url.clone()).with_timeout(settings.timeout);
                sequence.add_flow(Box::new(UserCrudFlow::new(client)));
            }
            DeckFlow::NAME => {
                let client =
                    DeckClient::new(settings.deck_base_url.clone()).with_timeout(settings.timeout);
                sequence.add_flow(Box::new(DeckFlow::new(client)));
            }
            // RunSettings already rejected unknown names.
            other => unreachable!("unvalidated flow name: {}", other),
        }
    }

    match sequence.execute_all().await {
        Ok(reports) => {
            let summary = FlowSequence::execution_summary(&reports);
            println!("✅ All checks passed!");
            println!(
                "📊 {} flow(s), {} step(s), {} ms total",
                summary.get("total_flows").unwrap(),
                summary.get("total_steps").unwrap(),
                summary.get("total_duration_ms").unwrap()
            );
            for report in &reports {
                println!(
                    "  - {}: {} step(s) in {:?}",
                    report.flow_name,
                    report.steps.len(),
                    report.duration
                );
            }
        }
        Err(e) => {
            tracing::error!("❌ Check run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
