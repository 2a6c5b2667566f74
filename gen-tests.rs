// SPDX-License-Identifier: MIT OR Apache-2.0
//! cargo script :)
//!
//! round_trip expectations start out as the normalized text and need a hand
//! pass wherever string forms or numbers survive a round trip
use std::fs::{read_dir, read_to_string};
use std::path::Path;

fn main() {
	let mut files = read_dir("kdl/tests/test_cases/input")
		.unwrap()
		.map(|file| file.unwrap().path())
		.collect::<Vec<_>>();
	files.sort();
	for path in files {
		println!("test_case! {{ {},", path.file_stem().unwrap().to_str().unwrap());
		println!("\t{:?},", read_to_string(&path).unwrap());
		let expected = Path::new("kdl/tests/test_cases/expected_kdl/").join(path.file_name().unwrap());
		match read_to_string(expected) {
			Ok(text) => {
				println!("\tref: Accept,\n\tdom: Equal({text:?}),\n\tround_trip: Equal({text:?}),");
			}
			Err(_) => println!("\tref: Reject,\n\tdom: Panic,\n\tround_trip: Panic,"),
		}
		println!("}}");
	}
}
