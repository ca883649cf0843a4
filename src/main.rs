#![no_std]
#![no_main]

use defmt_rtt as _;
use max7219::MAX7219;
use panic_probe as _;
use rtic::app;

use danibot_time::clock::Clock;
use danibot_time::display;
use danibot_time::Time;

const XTAL_FREQ_HZ: u32 = 12_000_000;
const SPI_FREQ_HZ: u32 = 2_000_000;
const TICK_US: u32 = 1_000_000;
/// First auto-repeat delay while the button is held.
const REPEAT_START_US: u32 = 500_000;
const REPEAT_MIN_US: u32 = 20_000;
const DISPLAY_INTENSITY: u8 = 0x0;

#[app(device = rp_pico::hal::pac, peripherals = true, dispatchers = [I2C0_IRQ])]
mod app {
    use super::*;
    use embedded_hal::digital::v2::{InputPin, ToggleableOutputPin};
    use rp_pico::hal::{
        clocks::{init_clocks_and_plls, Clock as _},
        fugit::{ExtU32, RateExtU32},
        gpio::{bank0::Gpio15, FunctionSio, Interrupt, Pin, PullUp, SioInput},
        sio::Sio,
        spi::Spi,
        timer::{Alarm, Alarm0, Alarm1, Timer},
        watchdog::Watchdog,
    };

    type Spi0 = Spi<
        rp_pico::hal::spi::Enabled,
        rp_pico::hal::pac::SPI0,
        (
            Pin<rp_pico::hal::gpio::bank0::Gpio19, rp_pico::hal::gpio::FunctionSpi, rp_pico::hal::gpio::PullDown>,
            Pin<rp_pico::hal::gpio::bank0::Gpio16, rp_pico::hal::gpio::FunctionSpi, rp_pico::hal::gpio::PullDown>,
            Pin<rp_pico::hal::gpio::bank0::Gpio18, rp_pico::hal::gpio::FunctionSpi, rp_pico::hal::gpio::PullDown>,
        ),
    >;
    type CsPin = Pin<
        rp_pico::hal::gpio::bank0::Gpio17,
        rp_pico::hal::gpio::FunctionSio<rp_pico::hal::gpio::SioOutput>,
        rp_pico::hal::gpio::PullDown,
    >;
    type LedPin = Pin<
        rp_pico::hal::gpio::bank0::Gpio25,
        rp_pico::hal::gpio::FunctionSio<rp_pico::hal::gpio::SioOutput>,
        rp_pico::hal::gpio::PullDown,
    >;
    type DisplayType = MAX7219<max7219::connectors::SpiConnectorSW<Spi0, CsPin>>;

    #[shared]
    struct Shared {
        clock: Clock,
        button: Pin<Gpio15, FunctionSio<SioInput>, PullUp>,
        alarm1: Alarm1,
        repeat_delay: u32,
    }

    #[local]
    struct Local {
        display: DisplayType,
        led: LedPin,
        alarm: Alarm0,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        let mut pac = ctx.device;
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let clocks = init_clocks_and_plls(
            XTAL_FREQ_HZ,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
        let mut alarm = timer.alarm_0().unwrap();
        alarm.schedule(TICK_US.micros()).unwrap();
        alarm.enable_interrupt();

        let mut alarm1 = timer.alarm_1().unwrap();
        alarm1.enable_interrupt();

        let pins = rp_pico::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let led = pins.led.into_push_pull_output();
        let button = pins.gpio15.into_pull_up_input();
        button.set_interrupt_enabled(Interrupt::EdgeLow, true);

        let mosi = pins.gpio19.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let sck = pins.gpio18.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let miso = pins.gpio16.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let cs = pins.gpio17.into_push_pull_output();

        let spi = Spi::<_, _, _, 8>::new(pac.SPI0, (mosi, miso, sck));
        let spi = spi.init(
            &mut pac.RESETS,
            clocks.peripheral_clock.freq(),
            SPI_FREQ_HZ.Hz(),
            &embedded_hal::spi::MODE_0,
        );

        let mut matrix = MAX7219::from_spi_cs(display::DEVICES, spi, cs).unwrap();
        matrix.power_on().unwrap();
        for i in 0..display::DEVICES {
            matrix.set_intensity(i, DISPLAY_INTENSITY).unwrap();
            matrix.clear_display(i).unwrap();
        }

        // No time source yet, the matrices show 99:99:99 until the button is used.
        let clock = Clock::new(Time::empty());
        defmt::info!("clock started, time {}", clock.time());
        update_display::spawn().ok();

        (
            Shared {
                clock,
                button,
                alarm1,
                repeat_delay: REPEAT_START_US,
            },
            Local {
                display: matrix,
                led,
                alarm,
            },
            init::Monotonics(),
        )
    }

    #[task(binds = TIMER_IRQ_0, priority = 1, shared = [clock], local = [alarm, led])]
    fn timer_tick(mut ctx: timer_tick::Context) {
        ctx.local.alarm.clear_interrupt();
        ctx.local.alarm.schedule(TICK_US.micros()).ok();

        ctx.local.led.toggle().ok();

        let time = ctx.shared.clock.lock(|c| {
            c.tick();
            c.time()
        });
        if time.is_set() && time.seconds() == 0 {
            defmt::debug!("minute {}", time);
        }

        update_display::spawn().ok();
    }

    #[task(binds = IO_IRQ_BANK0, priority = 1, shared = [clock, button, alarm1, repeat_delay])]
    fn button_press(mut ctx: button_press::Context) {
        // Masked until release so contact bounce does not re-enter.
        ctx.shared.button.lock(|b| {
            b.set_interrupt_enabled(Interrupt::EdgeLow, false);
            b.clear_interrupt(Interrupt::EdgeLow);
        });

        let time = ctx.shared.clock.lock(|c| {
            c.add_minute();
            c.time()
        });
        defmt::info!("time set to {}", time);

        update_display::spawn().ok();

        ctx.shared.repeat_delay.lock(|d| *d = REPEAT_START_US);
        ctx.shared.alarm1.lock(|a| {
            a.clear_interrupt();
            a.schedule(REPEAT_START_US.micros()).ok();
        });
    }

    #[task(binds = TIMER_IRQ_1, priority = 1, shared = [clock, button, alarm1, repeat_delay])]
    fn button_repeat(mut ctx: button_repeat::Context) {
        ctx.shared.alarm1.lock(|a| a.clear_interrupt());

        let is_held = ctx.shared.button.lock(|b| b.is_low().unwrap_or(false));
        if !is_held {
            ctx.shared.button.lock(|b| {
                b.clear_interrupt(Interrupt::EdgeLow);
                b.set_interrupt_enabled(Interrupt::EdgeLow, true);
            });
            let time = ctx.shared.clock.lock(|c| c.time());
            defmt::info!("button released at {}", time);
            return;
        }

        ctx.shared.clock.lock(|c| c.add_minute());
        update_display::spawn().ok();

        // 20% faster each repeat, down to REPEAT_MIN_US.
        let delay = ctx.shared.repeat_delay.lock(|d| {
            *d = (*d as u64 * 8 / 10).max(REPEAT_MIN_US as u64) as u32;
            *d
        });
        ctx.shared.alarm1.lock(|a| {
            a.schedule(delay.micros()).ok();
        });
    }

    #[task(shared = [clock], local = [display])]
    fn update_display(mut ctx: update_display::Context) {
        let buffers = ctx.shared.clock.lock(|c| display::render(&c.time()));

        let matrix = ctx.local.display;
        for (dev_idx, buffer) in buffers.iter().enumerate() {
            if matrix.write_raw(dev_idx, buffer).is_err() {
                defmt::warn!("display write failed on device {}", dev_idx);
            }
        }
    }
}
