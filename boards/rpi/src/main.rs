use std::{future::Future, process::ExitCode, time::Duration};

use anyhow::Context;
use blinkpixie_app::{
    core::{
        config::{DEFAULT_BRIGHTNESS, DEFAULT_DMA_CHANNEL, DEFAULT_LED_COUNT, DEFAULT_PIN},
        ColorOrder, Strip, StripConfig,
    },
    App, BlinkpixieError, RunStats,
};
use blinkpixie_rpi::{DryRunStrip, RpiStrip};
use clap::{CommandFactory, Parser, Subcommand};

/// Parity blink for WS2812 LED strips
///
/// Lights even LEDs green and odd LEDs red, alternating once per interval until the process
/// receives SIGINT or SIGTERM.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// GPIO pin the strip data line is connected to (10 for SPI0, 20 for SPI1)
    #[arg(long, default_value_t = DEFAULT_PIN)]
    pin: u8,
    /// DMA channel
    #[arg(long = "dma", default_value_t = DEFAULT_DMA_CHANNEL)]
    dma_channel: u8,
    /// The number of LEDs in the strip (at most 341 with the default 4096 bytes spidev buffer)
    #[arg(short = 'n', long = "leds", default_value_t = DEFAULT_LED_COUNT)]
    led_count: u16,
    /// Channel order expected by the strip
    #[arg(long, default_value_t = ColorOrder::default(), value_name = "ORDER")]
    color_order: ColorOrder,
    /// Global brightness
    #[arg(short, long, default_value_t = DEFAULT_BRIGHTNESS)]
    brightness: u8,
    /// Delay between two frames
    #[arg(long = "interval-ms", default_value_t = 1_000, value_name = "MS")]
    interval_ms: u64,
    /// Print frames to the log instead of driving the strip
    #[arg(long)]
    dry_run: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate shell completions
    Completions {
        /// The shell to generate the completions for
        #[arg(value_enum)]
        shell: clap_complete_command::Shell,
    },
}

impl Cli {
    fn strip_config(&self) -> StripConfig {
        StripConfig {
            pin: self.pin,
            dma_channel: self.dma_channel,
            led_count: self.led_count,
            color_order: self.color_order,
            brightness: self.brightness,
            interval: Duration::from_millis(self.interval_ms),
        }
    }
}

/// Subscribes to the signal right away, so it is not lost before the returned future is polled.
#[cfg(unix)]
fn listen(kind: tokio::signal::unix::SignalKind, name: &'static str) -> impl Future<Output = ()> {
    let stream = tokio::signal::unix::signal(kind)
        .map_err(|err| log::warn!("Unable to listen for {name}: {err}"))
        .ok();
    async move {
        match stream {
            Some(mut stream) => {
                stream.recv().await;
                log::info!("Received {name}");
            }
            None => std::future::pending().await,
        }
    }
}

/// Installs the SIGINT and SIGTERM handlers and returns a future that resolves once either
/// of them arrives.
///
/// Must be called within the tokio runtime context.
#[cfg(unix)]
fn shutdown_signal() -> impl Future<Output = ()> {
    use tokio::signal::unix::SignalKind;

    let interrupt = listen(SignalKind::interrupt(), "SIGINT");
    let terminate = listen(SignalKind::terminate(), "SIGTERM");
    async move {
        tokio::select! {
            () = interrupt => {},
            () = terminate => {},
        }
    }
}

#[cfg(not(unix))]
fn shutdown_signal() -> impl Future<Output = ()> {
    async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            log::warn!("Unable to listen for Ctrl-C: {err}");
            std::future::pending::<()>().await;
        }
    }
}

fn blink<S: Strip>(config: &StripConfig) -> anyhow::Result<RunStats> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    // Install the signal handlers before the strip is lit.
    let shutdown = {
        let _guard = runtime.enter();
        shutdown_signal()
    };

    let strip = S::init(config).context("Unable to initialize LED strip")?;
    let app = App::new(strip, config)?;
    let stats = runtime.block_on(app.run(shutdown))?;
    Ok(stats)
}

/// Maps the error to the process exit status.
fn exit_status(err: &anyhow::Error) -> u8 {
    let code = err
        .downcast_ref::<BlinkpixieError>()
        .map_or(1, |err| err.into_code());
    u8::try_from(code).unwrap_or(u8::MAX)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Some(Command::Completions { shell }) = cli.command {
        shell.generate(&mut Cli::command(), &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    let config = cli.strip_config();
    log::info!("Starting blinkpixie with {:?}", config);
    let outcome = if cli.dry_run {
        blink::<DryRunStrip>(&config)
    } else {
        blink::<RpiStrip>(&config)
    };

    match outcome {
        Ok(stats) => {
            log::info!(
                "Finished after {} ticks, {} frames failed to flush",
                stats.ticks,
                stats.render_failures
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::from(exit_status(&err))
        }
    }
}
