use {
    clap::Parser,
    coin_forecast::{Cli, run_app},
    std::panic,
};

fn init_log(debug: bool) {
    let (global_level, my_code_level) = match (debug, cfg!(debug_assertions)) {
        (true, _) => (log::LevelFilter::Info, log::LevelFilter::Debug),
        (false, true) => (log::LevelFilter::Warn, log::LevelFilter::Info),
        (false, false) => (log::LevelFilter::Error, log::LevelFilter::Info),
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("coin_forecast"), my_code_level)
        .init();
}

fn main() -> anyhow::Result<()> {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let args = Cli::parse();
    init_log(args.debug);

    // One request recomputes one chart at a time; a single thread is plenty.
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run_app(args))
}
