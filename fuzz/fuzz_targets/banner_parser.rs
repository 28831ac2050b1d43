#![no_main]

use libfuzzer_sys::fuzz_target;
use epwrap::version::parse_banner;

fuzz_target!(|data: &[u8]| {
    // Banners are read lossily from the runtime's output
    let banner = String::from_utf8_lossy(data);
    let _ = parse_banner(&banner);
});
