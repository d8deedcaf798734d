#![no_std]
#![no_main]

static HELLO: &[u8] = b"uart printf on frameless osca\n    type to echo\n\n";

mod board {
    pub mod constants;
    pub mod mmio;
    pub mod uart;
}

use board::mmio::{led_set, memory_end, memory_heap_start, memory_stack_pointer, uart_read_byte};
use board::uart::Uart;
use core::arch::global_asm;
use core::fmt::Write;
use core::panic::PanicInfo;
use log::{LevelFilter, info, warn};
use uart_printf::{CONSOLE, PrinterWriter, UartLogger, printf};

const CHAR_CARRIAGE_RETURN: u8 = 0xd;

static LOGGER: UartLogger = UartLogger::new(&CONSOLE, LevelFilter::Info);

static mut UART: Uart = Uart;

// setup stack and jump to 'run()'
global_asm!(include_str!("startup.s"));

#[unsafe(no_mangle)]
pub extern "C" fn run() -> ! {
    led_set(0b0000); // turn all leds on

    // the only reference to 'UART' handed out
    CONSOLE.install(unsafe { &mut *(&raw mut UART) });

    // nothing else runs yet
    if unsafe { uart_printf::logger::init(&LOGGER) }.is_err() {
        let _ = printf!("logger already registered\n");
    }

    let _ = printf!("%s", HELLO);
    info!("console ready");

    memory_info();

    loop {
        let ch = uart_read_byte();
        led_set(!ch);

        let _ = if ch == CHAR_CARRIAGE_RETURN {
            printf!("\n")
        } else {
            printf!("%c", ch)
        };
    }
}

fn memory_info() {
    let heap_start = memory_heap_start();
    let stack_pointer = memory_stack_pointer();

    let _ = printf!("   heap start: %#010x\n", heap_start);
    let _ = printf!("stack pointer: %#010x\n", stack_pointer);
    let _ = printf!("   memory end: %#010x\n", memory_end());

    if stack_pointer <= heap_start {
        warn!("stack pointer below heap start");
        return;
    }
    let _ = printf!("         free: %u bytes\n\n", stack_pointer - heap_start);
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    // bypass the console lock, the panic may have happened while holding it
    let mut uart = Uart;
    let mut writer = PrinterWriter::new(&mut uart);
    let _ = writeln!(writer, "PANIC!!! {info}");
    loop {}
}
