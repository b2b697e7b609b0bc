use lambda_runtime::{service_fn, Error, LambdaEvent};
use preprocess_lambda::handlers::preprocess::{handle_preprocess_event, ApiGatewayResponse};
use serde_json::Value;

async fn handle_request(event: LambdaEvent<Value>) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_preprocess_event(event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
