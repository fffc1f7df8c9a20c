// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::person::Person;

pub fn person_alice() -> Person {
    Person::new("Alice".to_string(), 25)
}

pub fn person_bob() -> Person {
    Person::new("Bob".to_string(), 30)
}

pub fn person_charlie() -> Person {
    Person::new("Charlie".to_string(), 35)
}

pub fn person_diane() -> Person {
    Person::new("Diane".to_string(), 40)
}

pub fn person_dave() -> Person {
    Person::new("Dave".to_string(), 28)
}

/// Alice, Bob, Charlie, Diane and Dave, in that order.
pub fn people() -> Vec<Person> {
    vec![
        person_alice(),
        person_bob(),
        person_charlie(),
        person_diane(),
        person_dave(),
    ]
}

/// `0..len` as `i64`, handy for arithmetic transforms.
pub fn numbers(len: usize) -> Vec<i64> {
    (0..len as i64).collect()
}
