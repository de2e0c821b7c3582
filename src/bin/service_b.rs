// Lambda bootstrap entry point for Service B

use hello_services::service_b::handler;
use lambda_runtime::{Error, run, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    hello_services::setup_logging();
    run(service_fn(handler)).await
}
