// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Shared fixtures for integration tests.

#![allow(dead_code)]

use flatbytes::{inspect_record, Inspect, Record, Scalar, Shape, Value};

/// Gender stored as a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Gender {
    Female = 0,
    Male = 1,
}

impl Inspect for Gender {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::UInt8(*self as u8))
    }
}

#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
}

inspect_record!(Person { name, age, gender });

#[derive(Debug, Clone)]
pub struct Hotel {
    pub manager: Person,
    pub guests: Vec<Person>,
}

inspect_record!(Hotel { manager, guests });

pub fn person(name: &str, age: u8, gender: Gender) -> Person {
    Person {
        name: name.to_string(),
        age,
        gender,
    }
}

/// Manager Alex, guests Thomas and Dan.
pub fn hotel() -> Hotel {
    Hotel {
        manager: person("Alex", 32, Gender::Female),
        guests: vec![
            person("Thomas", 40, Gender::Male),
            person("Dan", 18, Gender::Male),
        ],
    }
}

/// Big-endian encoding of [`hotel`].
pub const HOTEL_BIG_ENDIAN: [u8; 35] = [
    0x00, 0x00, 0x00, 0x04, 0x41, 0x6C, 0x65, 0x78, 0x20, 0x00, // manager
    0x00, 0x00, 0x00, 0x02, // guest count
    0x00, 0x00, 0x00, 0x06, 0x54, 0x68, 0x6F, 0x6D, 0x61, 0x73, 0x28, 0x01, // Thomas
    0x00, 0x00, 0x00, 0x03, 0x44, 0x61, 0x6E, 0x12, 0x01, // Dan
];

/// [`hotel`] as a dynamic value tree.
pub fn hotel_value() -> Value {
    let person = |name: &str, age: u8, gender: u8| {
        Value::Record(
            Record::new("Person")
                .with_field("name", name)
                .with_field("age", age)
                .with_field("gender", gender),
        )
    };
    Value::Record(
        Record::new("Hotel")
            .with_field("manager", person("Alex", 32, 0))
            .with_field(
                "guests",
                Value::Sequence(vec![person("Thomas", 40, 1), person("Dan", 18, 1)]),
            ),
    )
}
