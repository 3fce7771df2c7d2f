//! "Proxy event" version of the resource directory Lambda.
//!
//! This executable expects to be driven by AWS API Gateway's "proxy event"
//! protocol, with `lambda_http` doing the translation into ordinary HTTP
//! requests and back.

use lambda_http::{run, service_fn, Body, Error, Request, Response};

use resource_directory::{init_logging, Services};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging(false);
    let svcs = Services::init();
    let ref_svcs = &svcs;

    run(service_fn(|req: Request| async move {
        Ok::<Response<Body>, Error>(ref_svcs.handle_request(&req))
    }))
    .await?;
    Ok(())
}
