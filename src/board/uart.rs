use super::mmio::uart_send_byte;
use uart_printf::Printer;

/// The memory-mapped UART transmitter.
pub struct Uart;

impl Printer for Uart {
    fn pb(&mut self, byte: u8) {
        uart_send_byte(byte);
    }
}
