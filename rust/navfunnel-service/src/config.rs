use std::env;

use navfunnel_core::ShrinkRange;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Applied by `/route/jitter` when the request carries no range of its own.
    pub shrink: ShrinkRange,
}

impl Default for Config {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 8080, shrink: ShrinkRange::default() }
    }
}

impl Config {
    /// Load from environment variables. Missing or invalid values fall back to defaults.
    ///
    /// Variables:
    /// - NAVFUNNEL_HOST (default 127.0.0.1)
    /// - NAVFUNNEL_PORT (default 8080)
    /// - NAVFUNNEL_SHRINK_MIN / NAVFUNNEL_SHRINK_MAX (default 0.6 / 1.0)
    pub fn from_env() -> Self { Self::from_lookup(|name| env::var(name).ok()) }

    /// Same as [`Config::from_env`], reading variables through `lookup`.
    /// A shrink pair that fails validation is replaced by the default range as a whole.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let host = lookup("NAVFUNNEL_HOST").unwrap_or(defaults.host);
        let port = lookup("NAVFUNNEL_PORT")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .unwrap_or(defaults.port);
        let parse_f64 = |name: &str| lookup(name).and_then(|s| s.trim().parse::<f64>().ok());
        let min = parse_f64("NAVFUNNEL_SHRINK_MIN").unwrap_or(defaults.shrink.min);
        let max = parse_f64("NAVFUNNEL_SHRINK_MAX").unwrap_or(defaults.shrink.max);
        let shrink = ShrinkRange::new(min, max).validated().unwrap_or(defaults.shrink);
        Self { host, port, shrink }
    }

    pub fn addr(&self) -> String { format!("{}:{}", self.host, self.port) }
}
