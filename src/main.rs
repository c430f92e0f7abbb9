use lamedh_runtime::{handler_fn, run, Context, Error};
use stats_lambda::init::{init_runtime, RuntimeLayout};
use stats_lambda::{handle, StatsRequest, StatsResponse};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();
    init_runtime(&RuntimeLayout::default())?;
    run(handler_fn(func)).await?;
    Ok(())
}

async fn func(event: StatsRequest, ctx: Context) -> Result<StatsResponse, Error> {
    handle(event, &ctx.request_id).await.map_err(Error::from)
}
