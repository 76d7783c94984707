use actix_cors::Cors;
use actix_web::{
    middleware::{self, Condition},
    web::Data,
    App, HttpServer,
};
use clap::Parser;
use registry::repository::sqlite::SqlitePersonRepository;
use registry::service::service::NationalRegistryService;
use std::io;

mod routes;

/// 🗂 National Registry HTTP server, provides the /api/nationalregistry REST surface over the record store
#[derive(Parser, Debug)]
struct Cli {
    /// Location of the record store database file. Note: Does not support shell paths, e.g. ~
    #[clap(short, long, default_value = "nationalregistry.db")]
    data: std::path::PathBuf,

    /// Run against an in-memory record store that is dropped on exit
    #[clap(long)]
    ephemeral: bool,

    /// Port the server will run on
    #[clap(short, long, default_value = "9000")]
    port: u16,

    /// Address the server will run on
    #[clap(short, long, default_value = "0.0.0.0")]
    address: String,

    /// Log each HTTP request
    #[clap(long)]
    log_http: bool,

    #[clap(long, default_value_t = 2)]
    http_workers: usize,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let repository = if args.ephemeral {
        SqlitePersonRepository::open_in_memory()
    } else {
        SqlitePersonRepository::open(&args.data)
    }
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    // One service shared by every worker, the repository is the only state
    let service = Data::new(NationalRegistryService::new(repository));

    log::info!("starting HTTP server on port {}.", args.port);

    HttpServer::new(move || {
        let app = App::new()
            .app_data(service.clone())
            .service(routes::find_all)
            .service(routes::save)
            .service(routes::find_by_identification_number)
            .service(routes::delete_by_identification_number)
            .wrap(Cors::permissive())
            .wrap(Condition::new(args.log_http, middleware::Logger::default()));

        app
    })
    .workers(args.http_workers)
    .bind((args.address, args.port))?
    .run()
    .await
}
