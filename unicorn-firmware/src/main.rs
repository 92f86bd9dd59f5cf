//! Unicorn HD demo firmware
//!
//! Drives one or more Unicorn HD panels from an RP2040 over SPI0 and plays
//! a scrolling rainbow. The panel layout comes from panels.toml, checked
//! and compiled in at build time.
//!
//! Wiring: SCK = GPIO18, MOSI = GPIO19, CS = GPIO17.

#![no_std]
#![no_main]

extern crate alloc;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::{self, Spi};
use embassy_time::{Delay, Timer};
use embedded_alloc::LlffHeap as Heap;
use {defmt_rtt as _, panic_probe as _};

use unicorn_core::Session;
use unicorn_drivers::SpiTransport;
use unicorn_graphics::{hsv_to_rgb, Draw, NamedColor};
use unicorn_hal::{Phase, Polarity, SpiConfig};

mod layout;

// Heap allocator for pixel buffers and frames
#[global_allocator]
static HEAP: Heap = Heap::empty();

// Heap size: 32KB
const HEAP_SIZE: usize = 32 * 1024;

/// Time between animation steps
const STEP_MS: u64 = 20;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Unicorn HD firmware starting...");

    init_heap();

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let bus_config = SpiConfig::default();
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config(&bus_config));
    let cs = Output::new(p.PIN_17, Level::High);

    let transport = match SpiTransport::new(spi, cs) {
        Ok(transport) => transport,
        Err(e) => defmt::panic!("chip select failed: {}", e),
    };
    info!("SPI0 initialized at {} Hz", bus_config.frequency);

    let mut session = Session::new(transport, Delay);
    let config = layout::display_config();
    if let Err(e) = session.apply_config(&config) {
        defmt::panic!("invalid panel layout: {}", e);
    }
    let (width, height) = session.shape();
    info!(
        "Layout: {}x{} buffer, {} panel(s), addressing={}",
        width,
        height,
        session.chain().enabled_count(),
        session.is_addressing_enabled()
    );

    if let Err(e) = session.off() {
        error!("Failed to blank panels: {}", e);
    }

    let mut step: u32 = 0;
    loop {
        draw_frame(session.buffer_mut(), step);

        if let Err(e) = session.show() {
            error!("Frame output failed: {}", e);
        }

        step = step.wrapping_add(1);
        Timer::after_millis(STEP_MS).await;
    }
}

/// Diagonal rainbow with a white ring bouncing along the first axis
fn draw_frame(buffer: &mut unicorn_core::PixelBuffer, step: u32) {
    let (width, height) = buffer.shape();
    let span = (width + height).max(1) as f32;
    let phase = (step % 256) as f32 / 256.0;

    buffer.shade(|x, y| hsv_to_rgb(phase + (x + y) as f32 / span, 1.0, 0.8));

    let travel = width.saturating_sub(1).max(1) as u32;
    let pos = step % (2 * travel);
    let cx = if pos < travel { pos } else { 2 * travel - pos };
    buffer.draw_circle(cx as i32, (height / 2) as i32, 3, NamedColor::White);
}

/// Translate the bus settings into the RP2040 SPI config
fn spi_config(config: &SpiConfig) -> spi::Config {
    let mut spi_config = spi::Config::default();
    spi_config.frequency = config.frequency;
    spi_config.polarity = match config.polarity {
        Polarity::IdleLow => spi::Polarity::IdleLow,
        Polarity::IdleHigh => spi::Polarity::IdleHigh,
    };
    spi_config.phase = match config.phase {
        Phase::CaptureOnFirstTransition => spi::Phase::CaptureOnFirstTransition,
        Phase::CaptureOnSecondTransition => spi::Phase::CaptureOnSecondTransition,
    };
    spi_config
}

/// Initialize the heap allocator
fn init_heap() {
    use core::mem::MaybeUninit;
    static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];
    #[allow(static_mut_refs)]
    unsafe {
        HEAP.init(HEAP_MEM.as_ptr() as usize, HEAP_SIZE)
    }
}
