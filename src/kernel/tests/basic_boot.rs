#![no_std]
#![no_main]
#![feature(custom_test_frameworks)]
#![test_runner(bones_kernel::testutil::test_runner)]
#![reexport_test_harness_main = "test_main"]

use bones_kernel::println;
use core::panic::PanicInfo;

#[no_mangle]
pub extern "C" fn _start() -> ! {
    bones_kernel::init();
    test_main();
    bones_kernel::arch::x86_64::halt_loop()
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    bones_kernel::testutil::test_panic_handler(info)
}

#[test_case]
fn println_after_init() {
    println!("println_after_init output");
}

#[test_case]
fn logger_is_installed() {
    assert!(log::max_level() >= log::LevelFilter::Info);
    log::info!("logged from basic_boot");
}
