use std::net::IpAddr;

/// The configuration parameters for the application
///
/// These can either be loaded from command-line, or pulled from environment variables.
///
/// Environment variables are preferred. Container platforms hand the listening port
/// to the process through `PORT`.
///
/// For development convenience, these can also be read from a `.env` file in the working
/// directory where the application is started.
///
/// See `.env.example` in the repository root for details
#[derive(clap::Parser, Debug, Clone)]
#[clap(name = "server", version, about = "Greeting and health-check HTTP service")]
pub struct Config {
    #[clap(long, env, default_value = "0.0.0.0")]
    pub address: IpAddr,

    #[clap(long, env, default_value_t = 8080)]
    pub port: u16,

    /// Whether `GET /` reports the API version alongside the greeting
    ///
    /// Accepts the usual spellings (`true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`).
    #[clap(
        long,
        env,
        default_value_t = true,
        action = clap::ArgAction::Set,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub root_version: bool,

    /// Log filter directives, e.g. `server=debug,tower_http=info`
    #[clap(long, env = "RUST_LOG", default_value = "server=info,tower_http=info")]
    pub log: String,
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use clap::Parser;

    use super::Config;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        for var in ["ADDRESS", "PORT", "ROOT_VERSION", "RUST_LOG"] {
            std::env::remove_var(var);
        }

        Config::try_parse_from(std::iter::once("server").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let config = parse(&[]).unwrap();

        assert_eq!(config.address, Ipv4Addr::UNSPECIFIED);
        assert_eq!(config.port, 8080);
        assert!(config.root_version);
        assert_eq!(config.log, "server=info,tower_http=info");
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&["--port", "9000", "--root-version", "false"]).unwrap();

        assert_eq!(config.port, 9000);
        assert!(!config.root_version);
    }

    #[test]
    fn root_version_accepts_common_spellings() {
        for value in ["false", "FALSE", "0", "no", "off"] {
            assert!(!parse(&["--root-version", value]).unwrap().root_version, "{value}");
        }

        for value in ["true", "1", "yes", "on"] {
            assert!(parse(&["--root-version", value]).unwrap().root_version, "{value}");
        }

        assert!(parse(&["--root-version", "maybe"]).is_err());
    }
}
