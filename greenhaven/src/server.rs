use crate::config::{ConfigError, ServerConfig};
use actix_files::{Files, NamedFile};
use actix_web::dev::Server;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use greenhaven_leptos::app::App as GreenHaven;
use leptos::leptos_config::ConfFile;
use leptos::{get_configuration, LeptosOptions};
use leptos_actix::{generate_route_list, LeptosRoutes};
use std::net::SocketAddr;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const OUTPUT_NAME: &str = "greenhaven";

#[derive(Clone, Debug)]
struct SiteRoot(String);

pub fn fallback_options() -> LeptosOptions {
    LeptosOptions::builder()
        .output_name(OUTPUT_NAME)
        .site_root("target/site")
        .site_pkg_dir("pkg")
        .site_addr(SocketAddr::from(([0, 0, 0, 0], 3000)))
        .reload_port(3001)
        .build()
}

pub async fn create_server(config: &ServerConfig) -> Result<Server, ServerError> {
    let conf = get_configuration(Some("Cargo.toml"))
        .await
        .unwrap_or_else(|err| {
            warn!("leptos config in Cargo.toml was not loaded: {}", err);
            ConfFile {
                leptos_options: fallback_options(),
            }
        });

    let mut leptos_options = conf.leptos_options;
    if let Some(site_addr) = config.site_addr {
        leptos_options.site_addr = site_addr;
    }
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(GreenHaven);
    debug!("routes: {:?}", routes.iter().map(|r| r.path()).collect::<Vec<_>>());

    let assets_root_dir = config.assets_root_dir.clone();

    let server = HttpServer::new(move || {
        let site_root = leptos_options.site_root.clone();
        let pkg_dir = format!("{}/{}", site_root, leptos_options.site_pkg_dir);

        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(SiteRoot(site_root)))
            .route("/favicon.ico", web::get().to(favicon))
            .service(Files::new("/pkg", pkg_dir))
            .service(Files::new("/assets", &assets_root_dir))
            .leptos_routes(leptos_options.to_owned(), routes.to_owned(), GreenHaven)
    });

    let server = match config.workers {
        Some(workers) => server.workers(workers),
        None => server,
    };

    let server = server
        .bind(addr)
        .map_err(|source| ServerError::Bind { addr, source })?
        .run();

    info!("listening on http://{}", &addr);
    Ok(server)
}

async fn favicon(site_root: web::Data<SiteRoot>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open(format!("{}/favicon.ico", site_root.0))?)
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("server stopped: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::{fallback_options, ServerError, OUTPUT_NAME};
    use crate::config::ConfigError;
    use std::net::SocketAddr;

    #[test]
    fn fallback_matches_workspace_metadata() {
        let options = fallback_options();
        assert_eq!(options.output_name, OUTPUT_NAME);
        assert_eq!(options.site_root, "target/site");
        assert_eq!(options.site_pkg_dir, "pkg");
        assert_eq!(options.site_addr, SocketAddr::from(([0, 0, 0, 0], 3000)));
        assert_eq!(options.reload_port, 3001);
    }

    #[test]
    fn errors_name_their_cause() {
        let err = ServerError::from(ConfigError::ZeroWorkers);
        assert_eq!(err.to_string(), "config: SERVER_WORKERS must be at least 1");

        let err = ServerError::Bind {
            addr: SocketAddr::from(([127, 0, 0, 1], 80)),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().starts_with("failed to bind 127.0.0.1:80: "));
    }
}
