use std::env;

use immo_rechner::api::CliError;

#[tokio::main]
async fn main() {
    immo_rechner::logging::init();

    let raw_args: Vec<String> = env::args().collect();
    if raw_args.get(1).map(|s| s.as_str()) == Some("serve") {
        let port = raw_args
            .get(2)
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);
        if let Err(e) = immo_rechner::api::run_http_server(port).await {
            tracing::error!(error = %e, "Server error");
            std::process::exit(1);
        }
        return;
    }

    match immo_rechner::api::simulate_from_args(raw_args) {
        Ok(json) => println!("{json}"),
        Err(CliError::Args(e)) => e.exit(),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
