//! Cycle-counted busy-wait for the Cortex-M0+

use lapwatch_hal::BusyWait;

/// Busy-wait using `cortex_m::asm::delay`
///
/// Spins the core without touching timers or interrupts, so it is safe to
/// call from the tick context at interrupt priority. Accuracy is within a
/// few cycles per call at the configured core clock; flash wait states
/// can stretch it.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleDelay;

impl BusyWait for CycleDelay {
    fn wait_cycles(&mut self, cycles: u32) {
        cortex_m::asm::delay(cycles);
    }
}
