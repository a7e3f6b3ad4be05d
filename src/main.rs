#[cfg(feature = "ssr")]
mod web;

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::middleware::Logger;
    use actix_web::{web::Data, App, HttpServer};
    use leptos::config::get_configuration;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use tracing_subscriber::{fmt, EnvFilter};

    use tourbook::common::ServerConfig;
    use tourbook::frontend::{shell, App as TourbookApp};

    let config = ServerConfig::from_env();

    fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    let conf = get_configuration(None).map_err(std::io::Error::other)?;
    let addr = conf.leptos_options.site_addr;

    log::info!("Serving Tourbook on http://{addr} (API at {})", config.api.base_url());

    HttpServer::new(move || {
        let routes = generate_route_list(TourbookApp);
        let leptos_options = conf.leptos_options.clone();
        let site_root = leptos_options.site_root.to_string();

        App::new()
            .wrap(Logger::default())
            .wrap(web::middleware::SecurityHeaders::new(&config.api))
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .service(Files::new("/static", format!("{site_root}/static")).prefer_utf8(true))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(Data::new(leptos_options))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
fn main() {}
