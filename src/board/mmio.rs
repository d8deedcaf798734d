use super::constants::{LED, MEMORY_END, UART_IN_ADDR, UART_OUT_ADDR};
use core::arch::asm;
use core::ptr::{read_volatile, write_volatile};

unsafe extern "C" {
    // declared in 'linker.ld'
    pub unsafe static __heap_start__: u8;
}

pub const fn memory_end() -> u32 {
    MEMORY_END
}

pub fn memory_heap_start() -> u32 {
    &raw const __heap_start__ as u32
}

/// Busy-waits until the transmitter is idle, then sends `ch`.
pub fn uart_send_byte(ch: u8) {
    unsafe {
        // reads -1 while idle
        while read_volatile(UART_OUT_ADDR as *const i32) != -1 {}
        write_volatile(UART_OUT_ADDR as *mut u8, ch);
    }
}

/// Busy-waits until a byte arrives.
#[allow(clippy::cast_possible_truncation, reason = "register holds one byte")]
#[allow(clippy::cast_sign_loss, reason = "-1 handled above")]
pub fn uart_read_byte() -> u8 {
    unsafe {
        loop {
            let input = read_volatile(UART_IN_ADDR as *const i32);
            if input != -1 {
                return input as u8;
            }
        }
    }
}

pub fn led_set(low_being_on_bits: u8) {
    unsafe { write_volatile(LED as *mut u8, low_being_on_bits) }
}

pub fn memory_stack_pointer() -> u32 {
    let sp: u32;
    unsafe {
        asm!(
            "mv {0}, sp",
            out(reg) sp,
        );
    }
    sp
}
