//! Binary for building WASM contracts from odra modules.
#![doc = "Binary for building WASM contracts from odra modules."]

#[allow(unused_imports)]
use fractional_dividends;

fn main() {
    // Invoked by the Odra build system; compilation itself lives in odra-build
}
