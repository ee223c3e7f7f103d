use figment::{Figment, providers::Env};
use serde::de::DeserializeOwned;

pub trait ContextProvider<Config> {
    fn new(config: Config) -> impl Future<Output = Self>;
}

/// Install the JSON tracing subscriber used by every AutoShort process.
///
/// The log level can be overridden with the `RUST_LOG` environment variable.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        // this needs to be set to remove duplicated information in the log.
        .with_current_span(false)
        .with_ansi(false)
        // remove the name of the function from every log entry
        .with_target(false)
        .init();
}

/// Extract the configuration from raw environment variables.
///
/// Variable names are matched case-insensitively against the field names,
/// so `OPENAI_MODEL` populates `openai_model`.
///
/// # Errors
/// If a variable cannot be converted into the type of its field.
pub fn load_config<Config: DeserializeOwned>() -> Result<Config, figment::Error> {
    let figment = Figment::new().merge(Env::raw());

    figment.extract()
}

/// Initialize the application context with configuration from environment variables.
/// The configuration is extracted using figment.
///
/// # Returns
/// The application context built from the configuration as specified by the
/// trait.
///
/// # Errors
/// If the configuration cannot be extracted from the environment variables.
///
pub async fn create_app_context<A, Config: DeserializeOwned>()
-> Result<A, figment::Error>
where
    A: ContextProvider<Config>,
{
    init_tracing();

    let config: Config = load_config()?;

    tracing::debug!("configuration loaded");

    let context = A::new(config).await;

    Ok(context)
}
