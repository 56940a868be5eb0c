#![deny(unsafe_code)]
#![deny(warnings)]
#![no_main]
#![no_std]

use cortex_m::peripheral::syst::SystClkSource;
use heartbeat::Heartbeat;
use nb::block;
use panic_rtt_target as _;
use rtic::app;
use rtt_target::{rprintln, rtt_init_print};
use stm32f1xx_hal::gpio::{Output, PinState, PushPull, PC13};
use stm32f1xx_hal::pac::USART1;
use stm32f1xx_hal::prelude::*;
use stm32f1xx_hal::serial::{Config, Serial, Tx};

/// SysTick rate: one tick is one millisecond.
const TICK_HZ: u32 = 1_000;
/// Ticks between beats: toggle the LED and transmit once per second.
const TICKS_PER_BEAT: u32 = 1_000;

const MESSAGE: &[u8] = b"Hello world!!\r\n";
const CLEAR_SCREEN: &[u8] = b"\x1b[2J\x1b[;H";

#[app(device = stm32f1xx_hal::pac, peripherals = true)]
mod app {
    use super::*;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        led: PC13<Output<PushPull>>,
        tx: Tx<USART1>,
        beat: Heartbeat,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local) {
        rtt_init_print!();
        rprintln!("init");

        // Setup clocks
        let mut flash = cx.device.FLASH.constrain();
        let rcc = cx.device.RCC.constrain();
        let clocks = rcc
            .cfgr
            .use_hse(8.MHz())
            .sysclk(36.MHz())
            .pclk1(36.MHz())
            .freeze(&mut flash.acr);

        // Setup LED. The Blue Pill LED is active low, so start high = off.
        let mut gpioc = cx.device.GPIOC.split();
        let led = gpioc
            .pc13
            .into_push_pull_output_with_state(&mut gpioc.crh, PinState::High);

        // Start USART1: TX on PA9, RX on PA10 (unused).
        let mut afio = cx.device.AFIO.constrain();
        let mut gpioa = cx.device.GPIOA.split();
        let tx_pin = gpioa.pa9.into_alternate_push_pull(&mut gpioa.crh);
        let rx_pin = gpioa.pa10;
        let serial = Serial::new(
            cx.device.USART1,
            (tx_pin, rx_pin),
            &mut afio.mapr,
            Config::default().baudrate(115_200.bps()),
            &clocks,
        );
        let (mut tx, _rx) = serial.split();

        // Clear the terminal before the first greeting.
        send(&mut tx, CLEAR_SCREEN);

        // SysTick at TICK_HZ, clocked from the core.
        let reload = clocks.sysclk().raw() / TICK_HZ - 1;
        assert!(reload > 0);
        assert!(reload <= 0x00ff_ffff);

        let mut systick = cx.core.SYST;
        systick.disable_counter();
        systick.set_clock_source(SystClkSource::Core);
        systick.set_reload(reload);
        systick.clear_current();
        systick.enable_interrupt();
        systick.enable_counter();

        (
            Shared {},
            Local {
                led,
                tx,
                beat: Heartbeat::new(TICKS_PER_BEAT),
            },
        )
    }

    #[idle]
    fn idle(_: idle::Context) -> ! {
        loop {
            cortex_m::asm::nop();
        }
    }

    #[task(binds = SysTick, local = [led, tx, beat])]
    fn tick(cx: tick::Context) {
        if cx.local.beat.tick() {
            cx.local.led.toggle();
            send(cx.local.tx, MESSAGE);
            rprintln!("beat");
        }
    }
}

/// Transmits `bytes` one at a time, blocking on the TX register per byte.
fn send(tx: &mut Tx<USART1>, bytes: &[u8]) {
    for byte in bytes {
        // The TX error type is `Infallible`; only the ready-wait matters.
        let _ = block!(tx.write(*byte));
    }
}
