#![no_std]
#![no_main]

use defmt::{info, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART1;
use embassy_rp::uart::{Config as UartConfig, Uart};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::Ticker;
use static_cell::StaticCell;
use trim_firmware::config::{BAUDRATE, CHANNEL_COUNT, CHANNEL_TABLE, DIAGNOSTICS, POLL_INTERVAL};
use trim_firmware::{
    CommandForwarder, CommandMailbox, Console, PinBank, TrimController, UartCommandSource,
};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    UART1_IRQ => embassy_rp::uart::InterruptHandler<UART1>;
});

type Mailbox = CommandMailbox<CriticalSectionRawMutex>;
type Channels = PinBank<Output<'static>, CHANNEL_COUNT>;

/// Mailbox for passing commands from the input task to the apply task.
/// Latest command wins; a command is applied at most once.
static MAILBOX: StaticCell<Mailbox> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Trim controller starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    let mailbox: &'static Mailbox = MAILBOX.init(CommandMailbox::new());

    // --- UART Setup ---
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = BAUDRATE;

    let uart = Uart::new(
        p.UART1,
        p.PIN_8, // TX
        p.PIN_9, // RX
        Irqs,
        p.DMA_CH0,
        p.DMA_CH1,
        uart_config,
    );
    let (tx, rx) = uart.split();

    let mut console = Console::new(tx);
    console.banner().await;

    // --- Output Setup ---
    // Channel order must match CHANNEL_TABLE: BG_VDD, then bit 0..15.
    let channels: Channels = PinBank::new([
        Output::new(p.PIN_2, Level::Low),  // BG_VDD
        Output::new(p.PIN_3, Level::Low),  // R3_IN0
        Output::new(p.PIN_4, Level::Low),  // R3_IN1
        Output::new(p.PIN_5, Level::Low),  // R3_IN2
        Output::new(p.PIN_6, Level::Low),  // R3_IN3
        Output::new(p.PIN_7, Level::Low),  // R2_IN0
        Output::new(p.PIN_10, Level::Low), // R2_IN1
        Output::new(p.PIN_11, Level::Low), // R2_IN2
        Output::new(p.PIN_12, Level::Low), // R2_IN3
        Output::new(p.PIN_13, Level::Low), // R1_IN0
        Output::new(p.PIN_14, Level::Low), // R1_IN1
        Output::new(p.PIN_15, Level::Low), // R1_IN2
        Output::new(p.PIN_16, Level::Low), // R1_IN3
        Output::new(p.PIN_17, Level::Low), // LDO0
        Output::new(p.PIN_18, Level::Low), // LDO1
        Output::new(p.PIN_19, Level::Low), // LDO2
        Output::new(p.PIN_20, Level::Low), // LDO3
    ]);
    let controller = TrimController::new(channels, CHANNEL_TABLE);

    let forwarder = CommandForwarder::new(UartCommandSource::new(rx), mailbox);

    // Spawn tasks (unwrap the SpawnToken, then spawn)
    spawner.spawn(input_task(forwarder).unwrap());
    spawner.spawn(apply_task(controller, mailbox, console).unwrap());

    info!("Trim controller initialized, waiting for commands...");
}

/// Input task - reads commands from UART and publishes the latest one.
#[embassy_executor::task]
async fn input_task(
    mut forwarder: CommandForwarder<'static, UartCommandSource<'static>, CriticalSectionRawMutex>,
) {
    forwarder.run().await
}

/// Apply task - polls the mailbox and drives the trim outputs.
#[embassy_executor::task]
async fn apply_task(
    mut controller: TrimController<Channels>,
    mailbox: &'static Mailbox,
    mut console: Console<'static>,
) {
    let mut ticker = Ticker::every(POLL_INTERVAL);

    loop {
        ticker.next().await;

        let Some(cmd) = mailbox.try_take() else {
            continue;
        };

        if DIAGNOSTICS {
            console.echo(&cmd).await;
        }

        let result = controller.handle(&cmd);
        if let Err(e) = &result {
            warn!("Command dropped: {:?}", e);
        }

        if DIAGNOSTICS {
            console.outcome(&cmd, &result).await;
        }
    }
}
