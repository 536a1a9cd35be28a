use {
    reqwest::{Client, ClientBuilder},
    std::{
        fmt::{self, Display, Formatter},
        time::Duration,
    },
};

const USER_AGENT: &str = concat!("token-tooling/", env!("CARGO_PKG_VERSION"));

/// Builds the `reqwest` client the entity service is queried with, so every
/// request carries the toolkit's user agent and the configured timeout.
#[derive(Clone, Debug)]
pub struct HttpClientFactory {
    timeout: Duration,
}

impl HttpClientFactory {
    pub fn new(args: &Arguments) -> Self {
        Self {
            timeout: args.http_timeout,
        }
    }

    pub fn create(&self) -> Client {
        self.builder()
            .build()
            .expect("TLS backend and resolver are available")
    }

    /// Starting point for clients that need more than timeout and user agent.
    pub fn builder(&self) -> ClientBuilder {
        ClientBuilder::new()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
    }
}

impl Default for HttpClientFactory {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP settings of commands that talk to the entity service.
#[derive(clap::Parser)]
#[group(skip)]
pub struct Arguments {
    /// Upper bound for a whole entity service request, e.g. `10s` or `1m 30s`.
    #[clap(
        long,
        env,
        default_value = "10s",
        value_parser = humantime::parse_duration,
    )]
    pub http_timeout: Duration,
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Self { http_timeout } = self;

        writeln!(f, "http_timeout: {http_timeout:?}")
    }
}
