//! "Bare" Lambda version of the resource directory.
//!
//! The invocation payload is an API Gateway proxy event document and the
//! result is a proxy result document, but all of the (de)serialization is
//! ours rather than `lambda_http`'s. This is the easiest variant to poke at
//! locally. The cloud deployment uses the "proxy event" version.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};

use resource_directory::{event::ProxyEvent, init_logging, Services};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging(false);
    let svcs = Services::init();
    let ref_svcs = &svcs;

    run(service_fn(|event: LambdaEvent<ProxyEvent>| async move {
        let (payload, _context) = event.into_parts();
        ref_svcs.handle_event(payload)
    }))
    .await?;
    Ok(())
}
