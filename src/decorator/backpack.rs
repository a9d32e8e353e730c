//! Backpacks with optional features.
//!
//! "Wrap a gift, put it in a box, wrap the box": read the construction
//! inside out.
//!
//! ```
//! use structural_patterns::decorator::backpack::*;
//!
//! let backpack = WithWaterBottle::new(Box::new(
//!     WithUsbCharge::new(Box::new(
//!         WithLaptopSlot::new(Box::new(
//!             BackpackDecorator::new(Box::new(PlainBackpack)),
//!         )),
//!     )),
//! ));
//! assert_eq!(
//!     backpack.description(),
//!     "ShoulderStraps and mainCompartment + LaptopSlot + USBCharge + WaterBottle"
//! );
//! ```

use std::fmt;

use log::trace;
use serde::Deserialize;

pub trait Backpack {
    fn assemble(&self, out: &mut String);

    fn description(&self) -> String {
        let mut out = String::new();
        self.assemble(&mut out);
        out
    }
}

/// Only shoulder straps and the main compartment.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainBackpack;

impl Backpack for PlainBackpack {
    fn assemble(&self, out: &mut String) {
        out.push_str("ShoulderStraps and mainCompartment");
    }
}

/// Forwards to the wrapped backpack and adds nothing.
pub struct BackpackDecorator {
    inner: Box<dyn Backpack>,
}

impl BackpackDecorator {
    pub fn new(inner: Box<dyn Backpack>) -> Self {
        BackpackDecorator { inner }
    }
}

impl Backpack for BackpackDecorator {
    fn assemble(&self, out: &mut String) {
        self.inner.assemble(out);
    }
}

// The three features only differ in what they append.
macro_rules! feature_decorator {
    ($name:ident, $label:literal) => {
        pub struct $name {
            inner: BackpackDecorator,
        }

        impl $name {
            pub fn new(inner: Box<dyn Backpack>) -> Self {
                $name {
                    inner: BackpackDecorator::new(inner),
                }
            }
        }

        impl Backpack for $name {
            fn assemble(&self, out: &mut String) {
                self.inner.assemble(out);
                trace!("adding {}", $label);
                out.push_str(concat!(" + ", $label));
            }
        }
    };
}

feature_decorator!(WithLaptopSlot, "LaptopSlot");
feature_decorator!(WithUsbCharge, "USBCharge");
feature_decorator!(WithWaterBottle, "WaterBottle");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    LaptopSlot,
    UsbCharge,
    WaterBottle,
}

impl Feature {
    pub fn wrap(self, inner: Box<dyn Backpack>) -> Box<dyn Backpack> {
        match self {
            Feature::LaptopSlot => Box::new(WithLaptopSlot::new(inner)),
            Feature::UsbCharge => Box::new(WithUsbCharge::new(inner)),
            Feature::WaterBottle => Box::new(WithWaterBottle::new(inner)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Feature::LaptopSlot => "LaptopSlot",
            Feature::UsbCharge => "USBCharge",
            Feature::WaterBottle => "WaterBottle",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Wraps `base` in each feature, first feature innermost.
pub fn assemble_with(base: Box<dyn Backpack>, features: &[Feature]) -> Box<dyn Backpack> {
    features
        .iter()
        .fold(base, |backpack, feature| feature.wrap(backpack))
}
