//! Each experiment drives a named [`Reporting`] wrapper and hands it back for inspection.
//!
//! Failed lookups are reported by the wrapper and otherwise ignored.

use assoc_array::Reporting;

/// Associative arrays with strings as both keys and values.
pub fn strings_to_strings() -> Reporting<&'static str, &'static str> {
    let mut s2s = Reporting::new("s2s");
    s2s.size();
    let _ = s2s.set("a", "apple");
    let _ = s2s.set("A", "aardvark");
    s2s.size();
    s2s.has_key("a");
    s2s.has_key("A");
    let _ = s2s.get("a");
    let _ = s2s.get("A");
    s2s.remove("a");
    s2s.size();
    let _ = s2s.get("a");
    let _ = s2s.get("A");
    s2s.remove("aardvark");
    s2s.size();
    let _ = s2s.get("a");
    let _ = s2s.get("A");
    s2s
}

/// Associative arrays with integers as both keys and values.
pub fn integers_to_integers() -> Reporting<u128, u128> {
    let mut i2i = Reporting::new("i2i");

    for i in 0..11_u128 {
        let _ = i2i.set(i, i * i);
    }
    for i in 0..11_u128 {
        let _ = i2i.get(&i);
    }

    for i in (1..11_u128).step_by(2) {
        i2i.remove(&i);
    }
    for i in 0..11_u128 {
        let _ = i2i.get(&i);
    }

    for i in (0..11_u128).step_by(3) {
        let _ = i2i.set(i, i + 10);
    }
    for i in 0..11_u128 {
        let _ = i2i.get(&i);
    }
    i2i
}

/// Associative arrays with integers as keys and strings as values: vertices of a graph.
pub fn integers_to_strings() -> Reporting<u128, &'static str> {
    let mut i2s = Reporting::new("i2s");
    i2s.size();
    let _ = i2s.set(1, "Vertex A");
    let _ = i2s.set(2, "Vertex B");
    i2s.size();
    i2s.has_key(&1);
    i2s.has_key(&2);
    let _ = i2s.get(&1);
    let _ = i2s.get(&2);
    i2s.remove(&1);
    i2s.size();
    let _ = i2s.get(&1);
    let _ = i2s.get(&2);
    i2s.remove(&4);
    i2s.size();
    let _ = i2s.get(&1);
    let _ = i2s.get(&2);
    i2s
}
