//! DDNS 更新入口
//!
//! `GET|POST /{provider}?id=&key=&domain=&record=&ip=[&type=&ttl=&debug=1]`
//!
//! 参数也可以放在 JSON 请求体里，与查询参数同名时以请求体为准。

mod config;
mod handlers;
mod logging;
mod request;

use std::process::ExitCode;

use actix_web::{App, HttpServer, web};
use clap::Parser;
use ddns_core::DdnsService;

use config::{Args, Config};

#[actix_web::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ddns-web: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load(&args.config)?;
    let _log_guard = logging::init(&config.log)?;

    let service = web::Data::new(DdnsService::default());
    let (host, port) = config.bind_addr();
    tracing::info!("Listening on {host}:{port}");

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?;

    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    server.run().await?;
    tracing::info!("Server stopped");
    Ok(())
}
