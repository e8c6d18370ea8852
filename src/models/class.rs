//! Legacy (classful) address classes.

use serde::Serialize;
use std::net::Ipv4Addr;

/// Address class derived from the leading bits of the first octet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum AddressClass {
    /// `0xxxxxxx`
    A,
    /// `10xxxxxx`
    B,
    /// `110xxxxx`
    C,
    /// `1110xxxx`, multicast
    D,
    /// `1111xxxx`, reserved (240.0.0.0 - 255.255.255.255)
    E,
}

impl AddressClass {
    /// Classify an address. Every address has a class.
    pub fn of(addr: Ipv4Addr) -> AddressClass {
        match addr.octets()[0].leading_ones() {
            0 => AddressClass::A,
            1 => AddressClass::B,
            2 => AddressClass::C,
            3 => AddressClass::D,
            _ => AddressClass::E,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddressClass::A => "Class A",
            AddressClass::B => "Class B",
            AddressClass::C => "Class C",
            AddressClass::D => "Class D",
            AddressClass::E => "Class E",
        }
    }
}

impl std::fmt::Display for AddressClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
