pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .format_target(false)
        .format_timestamp(None)
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();
}
