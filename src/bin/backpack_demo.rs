//! Decorator: assembling a backpack feature by feature.
//!
//! Run with: cargo run --bin backpack_demo

use colored::Colorize;
use structural_patterns::decorator::backpack::{
    Backpack, BackpackDecorator, PlainBackpack, WithLaptopSlot, WithUsbCharge, WithWaterBottle,
};

fn main() {
    pretty_env_logger::init();

    // Read inside out:
    // 1. a plain backpack
    // 2. handed to the pass-through decorator
    // 3. which gets a laptop slot
    // 4. then a USB charger
    // 5. and finally a water bottle holder
    let backpack = WithWaterBottle::new(Box::new(      // 5
        WithUsbCharge::new(Box::new(                    // 4
            WithLaptopSlot::new(Box::new(               // 3
                BackpackDecorator::new(Box::new(        // 2
                    PlainBackpack,                      // 1
                )),
            )),
        )),
    ));

    println!("{}", "=== Assembled backpack ===".bold());
    println!("{}", backpack.description().green());
}
