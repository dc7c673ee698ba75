use std::process::ExitCode;

use hub::{run_hub, ExitStatus, HubConfig};
use tracing::info;

mod telemetry;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    telemetry::init_tracing();

    let result = match HubConfig::try_parse_from(std::env::args_os()) {
        Ok(config) => {
            let mut stdout = std::io::stdout().lock();
            run_hub(&config, &mut stdout).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(scores) => {
            info!(?scores, "Hub finished");
            ExitStatus::Ok.into()
        }
        Err(e) => {
            eprintln!("{}", e.diagnostic());
            ExitCode::from(e.exit_code())
        }
    }
}
