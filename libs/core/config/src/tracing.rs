use crate::Environment;
use tracing_error::ErrorLayer;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in main(), before any fallible operations, so errors
/// render with file:line locations. Safe to call multiple times.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize tracing with environment-aware output.
///
/// - Production (`APP_ENV=production`): JSON format without module targets,
///   for log aggregation tooling.
/// - Development (default): pretty-printed, with module targets.
///
/// `RUST_LOG` overrides the default filter in either mode. Includes
/// `ErrorLayer` so span traces are captured when errors surface.
///
/// Safe to call multiple times (later calls are ignored), which keeps it
/// usable from tests.
pub fn init_tracing(environment: &Environment) {
    let is_production = environment.is_production();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if is_production {
            EnvFilter::new("info,sqlx=warn,sea_orm=warn,tower_http=info")
        } else {
            EnvFilter::new("debug,hyper=info,sqlx=info,sea_orm=info")
        }
    });

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());

    if is_production {
        let _ = registry
            .with(tracing_subscriber::fmt::layer().json().with_target(false))
            .try_init();
    } else {
        let _ = registry
            .with(tracing_subscriber::fmt::layer().pretty().with_target(true))
            .try_init();
    }
}
