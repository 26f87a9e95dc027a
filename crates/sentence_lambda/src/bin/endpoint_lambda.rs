use lambda_runtime::{service_fn, Error, LambdaEvent};
use sentence_lambda::adapters::sentence_source::LoremSentenceSource;
use sentence_lambda::handlers::endpoint::{handle_endpoint_event, EndpointResponse};
use serde_json::Value;

async fn handle_request(event: LambdaEvent<Value>) -> Result<EndpointResponse, Error> {
    handle_endpoint_event(&event.payload, &LoremSentenceSource)
        .map_err(|error| Error::from(error.message))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
