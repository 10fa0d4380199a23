#![no_main]
use libfuzzer_sys::fuzz_target;

use printfc_core::{Argument, ArgumentList, vformat_to};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as the format string against a fixed argument list.
    // Any outcome is fine as long as the engine never panics.
    let backing = [
        Argument::I32(-42),
        Argument::U64(u64::MAX),
        Argument::F64(6.25),
        Argument::Str("fuzz"),
        Argument::CStr(None),
        Argument::Char('x'),
        Argument::Bool(true),
        Argument::Pointer(0),
        Argument::I128(i128::MIN),
    ];
    let args = ArgumentList::new(&backing);
    let mut out = Vec::new();
    let _ = vformat_to(&mut out, data, &args);
});
