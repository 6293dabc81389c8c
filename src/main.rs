use digit_marquee::config::Config;
use digit_marquee::{Marquee, Renderer};

#[cfg(not(target_os = "espidf"))]
mod cli;

#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    use esp_idf_svc::hal::delay::FreeRtos;
    use esp_idf_svc::hal::peripherals::Peripherals;

    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();
    log::info!("Digit Marquee - ESP32");

    let peripherals = Peripherals::take()?;
    let mut strip = digit_marquee::esp32::Esp32LedStrip::new(
        peripherals.rmt.channel0,
        peripherals.pins.gpio18,
    )?;

    let config = Config::with_defaults(None, &mut rand::rng());
    run(&config, &mut strip, &mut FreeRtos)
}

#[cfg(not(target_os = "espidf"))]
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = <cli::Cli as clap::Parser>::parse();
    let config = cli.config(&mut rand::rng())?;
    let mut strip = digit_marquee::mock::TerminalStrip::stdout();
    run(&config, &mut strip, &mut digit_marquee::mock::ThreadDelay)
}

fn run<S, D>(config: &Config, strip: &mut S, delay: &mut D) -> anyhow::Result<()>
where
    S: digit_marquee::PixelStrip,
    S::Error: std::error::Error + Send + Sync + 'static,
    D: embedded_hal::delay::DelayNs,
{
    let marquee = Marquee::new(&config.digits);
    log::info!(
        "scrolling \"{}\" over {} frames",
        config.digits,
        marquee.len()
    );
    Renderer::new(config.render).play(strip, delay, &marquee)?;
    Ok(())
}
