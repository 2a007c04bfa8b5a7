use env_logger::Env;

/// Start the logger. `RUST_LOG` overrides the default `info` filter.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let env = Env::default().default_filter_or("info");
    if env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init()
        .is_err()
    {
        log::debug!("Logger was already initialized");
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_twice_is_harmless() {
        super::init();
        super::init();
        log::info!("still logging");
    }
}
