//
// memory map of the fpga soc
//
pub(super) const MEMORY_END: u32 = 0x0020_0000;
pub(super) const LED: u32 = 0xffff_fffc;
pub(super) const UART_OUT_ADDR: u32 = 0xffff_fff8;
pub(super) const UART_IN_ADDR: u32 = 0xffff_fff4;
