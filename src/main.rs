use hello_ip::{GreetingHandler, HandlerConfig, logging};
use lambda_http::{Error, Request, run, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init_logging();

    let handler = GreetingHandler::new(HandlerConfig::default())?;
    let handler = &handler;

    run(service_fn(move |event: Request| async move {
        handler.handle(&event).await.map_err(Error::from)
    }))
    .await
}
