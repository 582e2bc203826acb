//! nebula-web - Web frontend for the Nebula Motors site using Leptos + Axum

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod components;
pub mod dom;
pub mod hooks;
pub mod sections;

#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;
#[cfg(feature = "ssr")]
pub use router::create_router;

#[cfg(feature = "ssr")]
pub use server::{run, ServeOptions};

#[cfg(feature = "ssr")]
mod server {
    use anyhow::{Context, Result};
    use nebula_core::SiteConfig;
    use std::net::{IpAddr, SocketAddr};
    use std::path::PathBuf;
    use tokio::net::TcpListener;
    use tracing::info;

    use crate::router::create_router;

    /// Where and what to serve
    #[derive(Debug, Clone)]
    pub struct ServeOptions {
        pub host: IpAddr,
        pub port: u16,
        /// Directory holding the trunk build (index.html + wasm bundle)
        pub dist: Option<PathBuf>,
    }

    impl ServeOptions {
        pub fn addr(&self) -> SocketAddr {
            SocketAddr::new(self.host, self.port)
        }
    }

    /// Run the web server until Ctrl-C
    pub async fn run(config: SiteConfig, options: ServeOptions) -> Result<()> {
        let router = create_router(config, options.dist.as_deref());

        let addr = options.addr();
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!("Web server listening on http://{}", addr);
        println!("Web server listening on http://{}", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Web server failed")?;

        info!("Web server stopped");
        Ok(())
    }

    async fn shutdown_signal() {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
