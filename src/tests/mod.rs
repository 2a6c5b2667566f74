// SPDX-License-Identifier: MIT OR Apache-2.0
//! kdl spec conformance testing
use std::panic::{UnwindSafe, catch_unwind};

use kdl::KdlDocument;

use crate::dom::Document;
use crate::options::WriteOptions;


/// Whether the reference implementation accepts the input
enum Reference {
	Accept,
	Reject,
}

use Reference::{Accept, Reject};

fn run_test_ref(input: &str, expected: Reference) {
	let accepted = KdlDocument::parse_v2(input).is_ok();
	match expected {
		Accept => assert!(accepted, "Sub-test ref: reference rejected the input"),
		Reject => assert!(!accepted, "Sub-test ref: reference accepted the input"),
	}
}

fn run_test_dom(input: &str, output: Test) {
	output.run("dom", input, || {
		let doc = Document::parse(input).expect("Sub-test dom");
		doc.normalized().to_string()
	});
}

fn run_test_round_trip(input: &str, output: Test) {
	output.run("round_trip", input, || {
		let doc = Document::parse(input).expect("Sub-test round_trip");
		let options = WriteOptions::round_trip();
		let text = doc.to_string_with(&options);
		// whatever was written must read back as the same document, and write
		// out unchanged
		let again = Document::parse(&text).expect("Sub-test round_trip reparse");
		assert_eq!(again, doc, "Sub-test round_trip reparse");
		assert_eq!(again.to_string_with(&options), text, "Sub-test round_trip rewrite");
		text
	});
}

enum Test {
	Panic,
	Equal(&'static str),
	/// output is exactly the input
	Same,
}

use Test::{Equal, Panic, Same};

impl Test {
	fn run(&self, label: &str, input: &str, inner: impl FnOnce() -> String + UnwindSafe) {
		match self {
			Test::Panic => assert_eq!(catch_unwind(inner).ok(), None, "Sub-test {label}"),
			Test::Equal(output) => assert_eq!(&inner(), output, "Sub-test {label}"),
			Test::Same => assert_eq!(inner(), input, "Sub-test {label}"),
		}
	}
}

macro_rules! test_case {
	($(#[ignore $($ignore:lifetime)?])? $name:ident, $input:literal, ref: $ref:expr, dom: $dom:expr, round_trip: $round_trip:expr,) => {
		#[test]
		$(#[ignore $($ignore)?])?
		fn $name() {
			run_test_ref($input, $ref);
			run_test_dom($input, $dom);
			run_test_round_trip($input, $round_trip);
		}
	};
}

// own test cases
test_case! { custom_hex_int,
	"node 0xABCDEF 0x0123456789 0xabcdef\n",
	ref: Accept,
	dom: Equal("node 11259375 4886718345 11259375\n"),
	round_trip: Equal("node 11259375 4886718345 11259375\n"),
}
test_case! { custom_raw_string_fence,
	"node ##\"a\"#b\"##\n",
	ref: Accept,
	dom: Equal("node \"a\\\"#b\"\n"),
	round_trip: Same,
}
test_case! { custom_reserved_bare_arg_fail,
	"node true\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { custom_reserved_quoted_arg,
	"node \"true\" \"-inf\"\n",
	ref: Accept,
	dom: Equal("node \"true\" \"-inf\"\n"),
	round_trip: Same,
}
test_case! { custom_signed_ident_vs_number,
	"node -42 -foo - +.bar\n",
	ref: Accept,
	dom: Equal("node -42 -foo - +.bar\n"),
	round_trip: Same,
}
test_case! { custom_unterminated_child_fail,
	"node { child",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { custom_wide_integers,
	"node 0x1_0000_0000_0000_0000 -0b1111111111111111111111111111111111111111111111111111111111111111\n",
	ref: Accept,
	dom: Equal("node 18446744073709551616 -18446744073709551615\n"),
	round_trip: Equal("node 18446744073709551616 -18446744073709551615\n"),
}
test_case! { custom_exponent_kept,
	"node 1.23E+100 1e10 -0.5e-3\n",
	ref: Accept,
	dom: Equal("node 1.23E+100 1e10 -0.5e-3\n"),
	round_trip: Same,
}
test_case! { custom_semicolons_round_trip,
	"a 1;\nb {\n    c;\n    d\n};\ne\n",
	ref: Accept,
	dom: Equal("a 1\nb {\n    c\n    d\n}\ne\n"),
	round_trip: Same,
}
test_case! { custom_multi_line_nested_round_trip,
	"outer {\n    inner \"\"\"\n        first\n\n          second\n        \"\"\"\n}\n",
	ref: Accept,
	dom: Equal("outer {\n    inner \"first\\n\\n  second\"\n}\n"),
	round_trip: Same,
}
test_case! { custom_control_chars_escaped,
	"node \"\\u{7f}\\u{2028}\\u{85}\"\n",
	ref: Accept,
	dom: Equal("node \"\\u{7f}\\u{2028}\\u{85}\"\n"),
	round_trip: Same,
}
// test cases from main
test_case! { braces_in_bare_id,
	// the reference accepts this, but children blocks need a space before them
	"foo123{bar}\n",
	ref: Accept,
	dom: Panic,
	round_trip: Panic,
}
test_case! { multiline_raw_string_empty,
	"node #\"\"\"\n\"\"\"#",
	ref: Accept,
	dom: Equal("node \"\"\n"),
	round_trip: Equal("node #\"\"\"\n    \"\"\"#\n"),
}
test_case! { multiline_raw_string_empty_indented,
	"node #\"\"\"\n\t\"\"\"#",
	ref: Accept,
	dom: Equal("node \"\"\n"),
	round_trip: Equal("node #\"\"\"\n    \"\"\"#\n"),
}
test_case! { multiline_string_empty,
	"node \"\"\"\n\"\"\"",
	ref: Accept,
	dom: Equal("node \"\"\n"),
	round_trip: Equal("node \"\"\"\n    \"\"\"\n"),
}
test_case! { multiline_string_wrapped_binary,
	"node \"\"\"\n    dead\\\n    beef\n    \"\"\"\n",
	ref: Accept,
	dom: Equal("node deadbeef\n"),
	round_trip: Equal("node \"\"\"\n    deadbeef\n    \"\"\"\n"),
}
test_case! { semicolon_missing_after_children_fail,
	"foo123{bar}foo weeee\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { unicode_escaped_above_max_fail,
	"no \"Higher than max Unicode Scalar Value \\u{10FFFF} \\u{11FFFF}\"\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { unicode_escaped_h1_fail,
	"no \"Surrogates high\\u{D800}\"\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { unicode_escaped_l3_fail,
	"eno \"Surrogates low\\u{DFFF}\"\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { unicode_escaped_too_long_lead0_fail,
	"no \"Even with leading 0s escapes must be at most 6 digits: \\u{0012345}\"\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { zero_space_before_slashdash_arg,
	"node \"string\"/-1\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { zero_space_before_slashdash_children,
	"node \"string\"/-{}\nnode \"string\" {}/-{}\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { zero_space_before_slashdash_prop,
	"node \"string\"/-foo=1\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
// tests from v2.0.0
test_case! { all_escapes,
	"node \"\\\"\\\\\\b\\f\\n\\r\\t\\s\"\n",
	ref: Accept,
	dom: Equal("node \"\\\"\\\\\\b\\f\\n\\r\\t \"\n"),
	round_trip: Equal("node \"\\\"\\\\\\b\\f\\n\\r\\t \"\n"),
}
test_case! { all_node_fields,
	"node arg prop=val {\n    inner_node\n}\n",
	ref: Accept,
	dom: Equal("node arg prop=val {\n    inner_node\n}\n"),
	round_trip: Same,
}
test_case! { arg_and_prop_same_name,
	"node arg arg=val\n",
	ref: Accept,
	dom: Equal("node arg arg=val\n"),
	round_trip: Same,
}
test_case! { arg_float_type,
	"node (type)2.5",
	ref: Accept,
	dom: Equal("node (type)2.5\n"),
	round_trip: Equal("node (type)2.5\n"),
}
test_case! { arg_hex_type,
	"node (type)0x10\n",
	ref: Accept,
	dom: Equal("node (type)16\n"),
	round_trip: Equal("node (type)16\n"),
}
test_case! { arg_raw_string_type,
	"node (type)#\"str\"#\n",
	ref: Accept,
	dom: Equal("node (type)str\n"),
	round_trip: Same,
}
test_case! { asterisk_in_block_comment,
	"node /* * */",
	ref: Accept,
	dom: Equal("node\n"),
	round_trip: Equal("node\n"),
}
test_case! { bare_ident_dot,
	"node .",
	ref: Accept,
	dom: Equal("node .\n"),
	round_trip: Equal("node .\n"),
}
test_case! { bare_ident_numeric_dot_fail,
	"node .0n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { bare_ident_numeric_fail,
	"node 0n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { bare_ident_numeric_sign_fail,
	"node +0n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { bare_ident_sign_dot,
	"node +.",
	ref: Accept,
	dom: Equal("node +.\n"),
	round_trip: Equal("node +.\n"),
}
test_case! { binary,
	"node 0b10",
	ref: Accept,
	dom: Equal("node 2\n"),
	round_trip: Equal("node 2\n"),
}
test_case! { binary_trailing_underscore,
	// the reference allows a trailing `_`, digit runs here must end on a digit
	"node 0b10_",
	ref: Accept,
	dom: Panic,
	round_trip: Panic,
}
test_case! { blank_arg_type,
	"node (\"\")10",
	ref: Accept,
	dom: Equal("node (\"\")10\n"),
	round_trip: Equal("node (\"\")10\n"),
}
test_case! { blank_prop_type,
	"node key=(\"\")#true\n",
	ref: Accept,
	dom: Equal("node key=(\"\")#true\n"),
	round_trip: Same,
}
test_case! { block_comment_before_node_no_space,
	"/* hey*/node\n",
	ref: Accept,
	dom: Equal("node\n"),
	round_trip: Equal("node\n"),
}
test_case! { block_comment_newline,
	"/* hey */\n",
	ref: Accept,
	dom: Equal(""),
	round_trip: Equal(""),
}
test_case! { bom_initial,
	"\u{feff}node arg\n",
	ref: Accept,
	dom: Equal("node arg\n"),
	round_trip: Equal("node arg\n"),
}
test_case! { bom_later_fail,
	"node \u{feff}arg\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { boolean_prop,
	"node prop1=#true prop2=#false\n",
	ref: Accept,
	dom: Equal("node prop1=#true prop2=#false\n"),
	round_trip: Same,
}
test_case! { chevrons_in_bare_id,
	"foo123<bar>foo weeee\n",
	ref: Accept,
	dom: Equal("foo123<bar>foo weeee\n"),
	round_trip: Same,
}
test_case! { comma_in_bare_id,
	"foo123,bar weeee\n",
	ref: Accept,
	dom: Equal("foo123,bar weeee\n"),
	round_trip: Same,
}
test_case! { comment_after_prop_type,
	"node key=(type)/*hey*/10\n",
	ref: Accept,
	dom: Equal("node key=(type)10\n"),
	round_trip: Equal("node key=(type)10\n"),
}
test_case! { comment_and_newline,
	"node1 //\nnode2\n",
	ref: Accept,
	dom: Equal("node1\nnode2\n"),
	round_trip: Equal("node1\nnode2\n"),
}
test_case! { comment_in_node_type,
	"(type/*hey*/)node\n",
	ref: Accept,
	dom: Equal("(type)node\n"),
	round_trip: Equal("(type)node\n"),
}
test_case! { commented_arg,
	"node /- arg1 arg2\n",
	ref: Accept,
	dom: Equal("node arg2\n"),
	round_trip: Same,
}
test_case! { commented_child,
	"node arg /- {\n     inner_node\n}\n",
	ref: Accept,
	dom: Equal("node arg\n"),
	round_trip: Equal("node arg\n"),
}
test_case! { commented_node,
	"/- node_1\nnode_2\n/- node_3\n",
	ref: Accept,
	dom: Equal("node_2\n"),
	round_trip: Equal("node_2\n"),
}
test_case! { commented_prop,
	"node /- prop=val arg\n",
	ref: Accept,
	dom: Equal("node arg\n"),
	round_trip: Same,
}
test_case! { crlf_between_nodes,
	"node1\r\nnode2\r\n",
	ref: Accept,
	dom: Equal("node1\nnode2\n"),
	round_trip: Equal("node1\nnode2\n"),
}
test_case! { dash_dash,
	"node --\n",
	ref: Accept,
	dom: Equal("node --\n"),
	round_trip: Same,
}
test_case! { dot_but_no_fraction_before_exponent_fail,
	"node 1.e7",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { dot_but_no_fraction_fail,
	"node 1.",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { dot_zero_fail,
	"node .0",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { empty,
	"",
	ref: Accept,
	dom: Equal(""),
	round_trip: Same,
}
test_case! { empty_arg_type_fail,
	"node ()10\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { empty_child,
	"node {\n}",
	ref: Accept,
	dom: Equal("node\n"),
	round_trip: Equal("node {}\n"),
}
test_case! { empty_child_same_line,
	"node {}\n",
	ref: Accept,
	dom: Equal("node\n"),
	round_trip: Same,
}
test_case! { empty_node_type_fail,
	"()node\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { empty_quoted_node_id,
	"\"\" arg\n",
	ref: Accept,
	dom: Equal("\"\" arg\n"),
	round_trip: Same,
}
test_case! { empty_quoted_prop_key,
	"node \"\"=empty\n",
	ref: Accept,
	dom: Equal("node \"\"=empty\n"),
	round_trip: Same,
}
test_case! { eof_after_escape,
	"node \\",
	ref: Accept,
	dom: Equal("node\n"),
	round_trip: Equal("node\n"),
}
test_case! { err_backslash_in_bare_id_fail,
	"foo123\\bar weeee\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { esc_multiple_newlines,
	"node \"1\\\n\n\n2\"\n",
	ref: Accept,
	dom: Equal("node \"12\"\n"),
	round_trip: Equal("node \"12\"\n"),
}
test_case! { esc_unicode_in_string,
	"node \"hello\\u{0a}world\"\n",
	ref: Accept,
	dom: Equal("node \"hello\\nworld\"\n"),
	round_trip: Equal("node \"hello\\nworld\"\n"),
}
test_case! { escaped_whitespace,
	"// All of these strings are the same\nnode \\\n\t\"Hello\\n\\tWorld\" \\\n\t\"\"\"\n\tHello\n\t\tWorld\n\t\"\"\" \\\n\t\"Hello\\n\\      \\tWorld\" \\\n\t\"Hello\\n\\\n    \\tWorld\" \\\n\t\"Hello\\n\\t\\\n        World\"\n\n// Note that this file deliberately mixes space and newline indentation for\n// test purposes\n",
	ref: Accept,
	dom: Equal("node \"Hello\\n\\tWorld\" \"Hello\\n\\tWorld\" \"Hello\\n\\tWorld\" \"Hello\\n\\tWorld\" \"Hello\\n\\tWorld\"\n"),
	round_trip: Equal("node \"Hello\\n\\tWorld\" \"\"\"\n    Hello\n    \tWorld\n    \"\"\" \"Hello\\n\\tWorld\" \"Hello\\n\\tWorld\" \"Hello\\n\\tWorld\"\n"),
}
test_case! { escline,
	"node \\\n    arg\n",
	ref: Accept,
	dom: Equal("node arg\n"),
	round_trip: Equal("node arg\n"),
}
test_case! { escline_after_semicolon,
	"node; \\\nnode\n",
	ref: Accept,
	dom: Equal("node\nnode\n"),
	round_trip: Equal("node;\nnode\n"),
}
test_case! { escline_in_child_block,
	"parent {\n    child\n    \\ // comment\n    child\n}\n",
	ref: Accept,
	dom: Equal("parent {\n    child\n    child\n}\n"),
	round_trip: Equal("parent {\n    child\n    child\n}\n"),
}
test_case! { escline_line_comment,
	"node \\   // comment\n    arg \\// comment\n    arg2\n",
	ref: Accept,
	dom: Equal("node arg arg2\n"),
	round_trip: Equal("node arg arg2\n"),
}
test_case! { escline_slashdash,
	"node\n\\\n/-\nnode\n",
	ref: Accept,
	dom: Equal("node\n"),
	round_trip: Equal("node\n"),
}
test_case! { false_prefix_in_prop_key,
	"node false_id=1\n",
	ref: Accept,
	dom: Equal("node false_id=1\n"),
	round_trip: Same,
}
test_case! { false_prop_key_fail,
	"node false=1\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { floating_point_keyword_identifier_strings_fail,
	"floats inf -inf nan\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { floating_point_keywords,
	"floats #inf #-inf #nan\n",
	ref: Accept,
	dom: Equal("floats #inf #-inf #nan\n"),
	round_trip: Same,
}
test_case! { hash_in_id_fail,
	"foo#bar weee\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { hex,
	"node 0xabcdef1234567890",
	ref: Accept,
	dom: Equal("node 12379813812177893520\n"),
	round_trip: Equal("node 12379813812177893520\n"),
}
test_case! { hex_int,
	"node 0xABCDEF0123456789abcdef\n",
	ref: Accept,
	dom: Equal("node 207698809136909011942886895\n"),
	round_trip: Equal("node 207698809136909011942886895\n"),
}
test_case! { hex_int_underscores,
	"node 0xABC_def_0123",
	ref: Accept,
	dom: Equal("node 737894400291\n"),
	round_trip: Equal("node 737894400291\n"),
}
test_case! { illegal_char_in_binary_fail,
	"node 0bx01\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { illegal_char_in_hex_fail,
	"node 0x10g10",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { illegal_char_in_octal_fail,
	"node 0o45678",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { initial_slashdash,
	"/-node here\nanother-node\n",
	ref: Accept,
	dom: Equal("another-node\n"),
	round_trip: Equal("another-node\n"),
}
test_case! { int_multiple_underscore,
	"node 1_2_3_4",
	ref: Accept,
	dom: Equal("node 1234\n"),
	round_trip: Equal("node 1234\n"),
}
test_case! { just_child,
	"node {\n    inner_node     \n}",
	ref: Accept,
	dom: Equal("node {\n    inner_node\n}\n"),
	round_trip: Equal("node {\n    inner_node\n}\n"),
}
test_case! { just_space_in_arg_type_fail,
	"node ( )false\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { just_type_no_arg_fail,
	"node (type)\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { just_type_no_node_id_fail,
	"(type)\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { just_type_no_prop_fail,
	"node key=(type)\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { leading_zero_binary,
	"node 0b01\n",
	ref: Accept,
	dom: Equal("node 1\n"),
	round_trip: Equal("node 1\n"),
}
test_case! { legacy_raw_string_fail,
	"node r\"foo\"\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { legacy_raw_string_hash_fail,
	"node r#\"foo\"#\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { multiline_comment,
	"node /*\nsome\ncomments\n*/ arg\n",
	ref: Accept,
	dom: Equal("node arg\n"),
	round_trip: Equal("node arg\n"),
}
test_case! { multiline_raw_string,
	"node #\"\"\"\nhey\neveryone\nhow goes?\n\"\"\"#\n",
	ref: Accept,
	dom: Equal("node \"hey\\neveryone\\nhow goes?\"\n"),
	round_trip: Equal("node #\"\"\"\n    hey\n    everyone\n    how goes?\n    \"\"\"#\n"),
}
test_case! { multiline_raw_string_containing_quotes,
	"node ##\"\"\"\n\"\"\"triple-quote\"\"\"\n##\"too few quotes\"##\n#\"\"\"too few #\"\"\"#\n\"\"\"##\n",
	ref: Accept,
	dom: Equal("node \"\\\"\\\"\\\"triple-quote\\\"\\\"\\\"\\n##\\\"too few quotes\\\"##\\n#\\\"\\\"\\\"too few #\\\"\\\"\\\"#\"\n"),
	round_trip: Equal("node ###\"\"\"\n    \"\"\"triple-quote\"\"\"\n    ##\"too few quotes\"##\n    #\"\"\"too few #\"\"\"#\n    \"\"\"###\n"),
}
test_case! { multiline_raw_string_indented,
	"node #\"\"\"\n    hey\n   everyone\n     how goes?\n  \"\"\"#\n",
	ref: Accept,
	dom: Equal("node \"  hey\\n everyone\\n   how goes?\"\n"),
	round_trip: Equal("node #\"\"\"\n      hey\n     everyone\n       how goes?\n    \"\"\"#\n"),
}
test_case! { multiline_raw_string_non_matching_prefix_character_error_fail,
	"node #\"\"\"\n    hey\n   everyone\n\t   how goes?\n  \"\"\"#\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { multiline_raw_string_single_line_err_fail,
	// the reference reads this as a raw string holding `""one line""`
	"node #\"\"\"one line\"\"\"#",
	ref: Accept,
	dom: Panic,
	round_trip: Panic,
}
test_case! { multiline_raw_string_single_quote_err_fail,
	"node #\"\nhey\neveryone\nhow goes?\n\"#\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { multiline_string,
	"node \"\"\"\nhey\neveryone\nhow goes?\n\"\"\"\n",
	ref: Accept,
	dom: Equal("node \"hey\\neveryone\\nhow goes?\"\n"),
	round_trip: Equal("node \"\"\"\n    hey\n    everyone\n    how goes?\n    \"\"\"\n"),
}
test_case! { multiline_string_containing_quotes,
	"node \"\"\"\nthis string contains \"quotes\", twice\"\"\n\"\"\"\n",
	ref: Accept,
	dom: Equal("node \"this string contains \\\"quotes\\\", twice\\\"\\\"\"\n"),
	round_trip: Equal("node \"\"\"\n    this string contains \"quotes\", twice\"\"\n    \"\"\"\n"),
}
test_case! { multiline_string_double_backslash,
	"node \"\"\"\na\\\\ b\na\\\\\\ b\n\"\"\"\n",
	ref: Accept,
	dom: Equal("node \"a\\\\ b\\na\\\\b\"\n"),
	round_trip: Equal("node \"\"\"\n    a\\\\ b\n    a\\\\b\n    \"\"\"\n"),
}
test_case! { multiline_string_escape_delimiter,
	"node \"\"\"\n\\\"\"\"\n\"\"\"\n",
	ref: Accept,
	dom: Equal("node \"\\\"\\\"\\\"\"\n"),
	round_trip: Equal("node \"\"\"\n    \"\"\\\"\n    \"\"\"\n"),
}
test_case! { multiline_string_escape_in_closing_line,
	"node \"\"\"\n  foo \\\nbar\n  baz\n  \\   \"\"\"\n",
	ref: Accept,
	dom: Equal("node \"foo bar\\nbaz\"\n"),
	round_trip: Equal("node \"\"\"\n    foo bar\n    baz\n    \"\"\"\n"),
}
test_case! { multiline_string_escape_in_closing_line_shallow,
	"node \"\"\"\n  foo \\\nbar\n  baz\n\\   \"\"\"\n",
	ref: Accept,
	dom: Equal("node \"  foo bar\\n  baz\"\n"),
	round_trip: Equal("node \"\"\"\n      foo bar\n      baz\n    \"\"\"\n"),
}
test_case! { multiline_string_escape_newline_at_end,
	"node \"\"\"\n    a\n   \\\n\"\"\"\n",
	ref: Accept,
	dom: Equal("node \" a\"\n"),
	round_trip: Equal("node \"\"\"\n     a\n    \"\"\"\n"),
}
test_case! { multiline_string_escape_newline_at_end_fail,
	"node \"\"\"\na\n   \\\n\"\"\"\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { multiline_string_final_whitespace_escape_fail,
	"node \"\"\"\n  foo\n  bar\\\n  \"\"\"",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { multiline_string_indented,
	"node \"\"\"\n    hey\n   everyone\n     how goes?\n  \"\"\"\n",
	ref: Accept,
	dom: Equal("node \"  hey\\n everyone\\n   how goes?\"\n"),
	round_trip: Equal("node \"\"\"\n      hey\n     everyone\n       how goes?\n    \"\"\"\n"),
}
test_case! { multiline_string_non_literal_prefix_fail,
	"node \"\"\"\n\\s escaped prefix\n  literal prefix\n  \"\"\"\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { multiline_string_non_matching_prefix_count_error_fail,
	"node \"\"\"\n    hey\n everyone\n     how goes?\n  \"\"\"\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { multiline_string_single_line_err_fail,
	"node \"\"\"one line\"\"\"",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { multiline_string_single_quote_err_fail,
	"node \"\nhey\neveryone\nhow goes?\n\"\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { multiple_dots_in_float_fail,
	"node 1.0.0",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { multiple_es_in_float_fail,
	"node 1.0E10e10\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { multiple_x_in_hex_fail,
	"node 0xx10",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { negative_float,
	"node -1.0 key=-10.0",
	ref: Accept,
	dom: Equal("node -1.0 key=-10.0\n"),
	round_trip: Equal("node -1.0 key=-10.0\n"),
}
test_case! { nested_block_comment,
	"node /* hi /* there */ everyone */ arg\n",
	ref: Accept,
	dom: Equal("node arg\n"),
	round_trip: Equal("node arg\n"),
}
test_case! { nested_children,
	"node1 {\n    node2 {\n        node\n    }\n}",
	ref: Accept,
	dom: Equal("node1 {\n    node2 {\n        node\n    }\n}\n"),
	round_trip: Equal("node1 {\n    node2 {\n        node\n    }\n}\n"),
}
test_case! { nested_multiline_block_comment,
	"node /*\nhey /*\nhow's\n*/\n    it going\n    */ arg\n",
	ref: Accept,
	dom: Equal("node arg\n"),
	round_trip: Equal("node arg\n"),
}
test_case! { no_digits_in_hex_fail,
	"node 0x",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { no_integer_digit_fail,
	"node .1",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { no_solidus_escape_fail,
	"node \"\\/\"\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { null_prop_key_fail,
	"node null=1\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { octal,
	"node 0o76543210",
	ref: Accept,
	dom: Equal("node 16434824\n"),
	round_trip: Equal("node 16434824\n"),
}
test_case! { only_cr,
	"\r",
	ref: Accept,
	dom: Equal(""),
	round_trip: Equal(""),
}
test_case! { only_line_comment,
	"// hi",
	ref: Accept,
	dom: Equal(""),
	round_trip: Equal(""),
}
test_case! { optional_child_semicolon,
	"node {foo;bar;baz}\n",
	ref: Accept,
	dom: Equal("node {\n    foo\n    bar\n    baz\n}\n"),
	round_trip: Equal("node {\n    foo;\n    bar;\n    baz\n}\n"),
}
test_case! { parens_in_bare_id_fail,
	"foo123(bar)foo weeee\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { parse_all_arg_types,
	"node 1 1.0 1.0e10 1.0e-10 0x01 0o07 0b10 arg \"arg\" #\"arg\\\"# #true #false #null\n",
	ref: Accept,
	dom: Equal("node 1 1.0 1.0e10 1.0e-10 1 7 2 arg arg \"arg\\\\\" #true #false #null\n"),
	round_trip: Equal("node 1 1.0 1.0e10 1.0e-10 1 7 2 arg \"arg\" #\"arg\\\"# #true #false #null\n"),
}
test_case! { positive_int,
	"node +10",
	ref: Accept,
	dom: Equal("node 10\n"),
	round_trip: Equal("node 10\n"),
}
test_case! { preserve_node_order,
	"node2\nnode5\nnode1",
	ref: Accept,
	dom: Equal("node2\nnode5\nnode1\n"),
	round_trip: Equal("node2\nnode5\nnode1\n"),
}
test_case! { prop_float_type,
	"node key=(type)2.5E10\n",
	ref: Accept,
	dom: Equal("node key=(type)2.5E10\n"),
	round_trip: Same,
}
test_case! { question_mark_before_number,
	"node ?15\n",
	ref: Accept,
	dom: Equal("node ?15\n"),
	round_trip: Same,
}
test_case! { quote_in_bare_id_fail,
	"foo123\"bar weeee\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { quoted_node_type,
	"(\"type/\")node\n",
	ref: Accept,
	dom: Equal("(\"type/\")node\n"),
	round_trip: Same,
}
test_case! { quoted_numeric,
	"node prop=\"10.0\"",
	ref: Accept,
	dom: Equal("node prop=\"10.0\"\n"),
	round_trip: Equal("node prop=\"10.0\"\n"),
}
test_case! { quoted_prop_name,
	"node \"0prop\"=val\n",
	ref: Accept,
	dom: Equal("node \"0prop\"=val\n"),
	round_trip: Same,
}
test_case! { r_node,
	"r \"arg\"\n",
	ref: Accept,
	dom: Equal("r arg\n"),
	round_trip: Same,
}
test_case! { raw_node_name,
	"#\"\\node\"#\n",
	ref: Accept,
	dom: Equal("\"\\\\node\"\n"),
	round_trip: Same,
}
test_case! { raw_string_arg,
	"node_1 #\"\"arg\\n\"and #stuff\"#\nnode_2 ##\"#\"arg\\n\"#and #stuff\"##\n",
	ref: Accept,
	dom: Equal("node_1 \"\\\"arg\\\\n\\\"and #stuff\"\nnode_2 \"#\\\"arg\\\\n\\\"#and #stuff\"\n"),
	round_trip: Same,
}
test_case! { raw_string_hash_no_esc,
	"node #\"#\"#\n",
	ref: Accept,
	dom: Equal("node \"#\"\n"),
	round_trip: Same,
}
test_case! { raw_string_just_quote_fail,
	"// This fails because `\"\"\"` MUST be followed by a newline.\nnode #\"\"\"#\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { raw_string_multiple_hash,
	"node ###\"\"#\"##\"###\n",
	ref: Accept,
	dom: Equal("node \"\\\"#\\\"##\"\n"),
	round_trip: Same,
}
test_case! { raw_string_prop,
	"node_1 prop=#\"\"arg#\"\\n\"#\nnode_2 prop=##\"#\"arg#\"#\\n\"##\n",
	ref: Accept,
	dom: Equal("node_1 prop=\"\\\"arg#\\\"\\\\n\"\nnode_2 prop=\"#\\\"arg#\\\"#\\\\n\"\n"),
	round_trip: Same,
}
test_case! { raw_string_quote,
	"node #\"a\"b\"#\n",
	ref: Accept,
	dom: Equal("node \"a\\\"b\"\n"),
	round_trip: Same,
}
test_case! { repeated_prop,
	"node prop=10 prop=11",
	ref: Accept,
	dom: Equal("node prop=11\n"),
	round_trip: Equal("node prop=10 prop=11\n"),
}
test_case! { semicolon_after_child,
	"node {\n     childnode\n};\n",
	ref: Accept,
	dom: Equal("node {\n    childnode\n}\n"),
	round_trip: Equal("node {\n    childnode\n};\n"),
}
test_case! { semicolon_separated_nodes,
	"node1; node2; ",
	ref: Accept,
	dom: Equal("node1\nnode2\n"),
	round_trip: Equal("node1;\nnode2;\n"),
}
test_case! { slash_in_bare_id_fail,
	"foo123/bar weeee\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { slashdash_after_arg_type_fail,
	"node (ty)/-arg1 arg2\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { slashdash_after_node_type_fail,
	"(ty)/-node\nother-node\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { slashdash_after_prop_key_fail,
	"node key /- = value\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { slashdash_arg_after_newline_esc,
	"node \\\n    /- arg arg2\n",
	ref: Accept,
	dom: Equal("node arg2\n"),
	round_trip: Equal("node /- arg arg2\n"),
}
test_case! { slashdash_arg_before_newline_esc,
	"node /-    \\\n    arg\n",
	ref: Accept,
	dom: Equal("node\n"),
	round_trip: Equal("node /- arg\n"),
}
test_case! { slashdash_before_children_end_fail,
	"node {\n    child1\n    /-\n}\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { slashdash_before_eof_fail,
	"node foo /-\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { slashdash_before_prop_value_fail,
	"node key = /-val etc\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { slashdash_before_semicolon_fail,
	"node foo /-;\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { slashdash_between_child_blocks_fail,
	"node { one } /- { two } { three }\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { slashdash_child_block_before_entry_err_fail,
	"node /-{\n    child\n} foo {\n    bar\n}\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { slashdash_escline_before_arg_type,
	"node /-\\\n(ty)arg1 arg2\n",
	ref: Accept,
	dom: Equal("node arg2\n"),
	round_trip: Equal("node /- (ty)arg1 arg2\n"),
}
test_case! { slashdash_escline_before_children,
	"node arg1 /-\\\n{\n}\n",
	ref: Accept,
	dom: Equal("node arg1\n"),
	round_trip: Equal("node arg1\n"),
}
test_case! { slashdash_false_node,
	"node foo /-\nnot-a-node bar\n",
	ref: Accept,
	dom: Equal("node foo bar\n"),
	round_trip: Equal("node foo /- not-a-node bar\n"),
}
test_case! { slashdash_full_node,
	"/- node 1.0 \"a\" b=\"\"\"\nb\n\"\"\"\n",
	ref: Accept,
	dom: Equal(""),
	round_trip: Equal(""),
}
test_case! { slashdash_in_slashdash,
	"/- node1 /- 1.0\nnode2",
	ref: Accept,
	dom: Equal("node2\n"),
	round_trip: Equal("node2\n"),
}
test_case! { slashdash_inside_node_type_fail,
	"(/-ty)node\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { slashdash_multi_line_comment_inline,
	"node 1 /-/*two*/2 3\n",
	ref: Accept,
	dom: Equal("node 1 3\n"),
	round_trip: Equal("node 1 /- 2 3\n"),
}
test_case! { slashdash_multiple_child_blocks,
	"node foo /-{\n    one\n} \\\n/-{\n    two\n} {\n    three\n} /-{\n    four\n}\n",
	ref: Accept,
	dom: Equal("node foo {\n    three\n}\n"),
	round_trip: Equal("node foo {\n    three\n}\n"),
}
test_case! { slashdash_negative_number,
	"node /--1.0 2.0",
	ref: Accept,
	dom: Equal("node 2.0\n"),
	round_trip: Equal("node /- -1.0 2.0\n"),
}
test_case! { slashdash_node_in_child,
	"node1 {\n    /- node2\n}",
	ref: Accept,
	dom: Equal("node1\n"),
	round_trip: Equal("node1 {}\n"),
}
test_case! { slashdash_repeated_prop,
	"node arg=correct /- arg=wrong\n",
	ref: Accept,
	dom: Equal("node arg=correct\n"),
	round_trip: Same,
}
test_case! { slashdash_single_line_comment_node,
	"/- // this is a comment\nnode1\nnode2\n",
	ref: Accept,
	dom: Equal("node2\n"),
	round_trip: Equal("node2\n"),
}
test_case! { space_around_prop_marker,
	"node foo = bar\n",
	ref: Accept,
	dom: Equal("node foo=bar\n"),
	round_trip: Equal("node foo=bar\n"),
}
test_case! { space_in_node_type,
	"( type)node\n",
	ref: Accept,
	dom: Equal("(type)node\n"),
	round_trip: Equal("(type)node\n"),
}
test_case! { square_bracket_in_bare_id_fail,
	"foo123[bar]foo weeee\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { string_arg,
	"node \"arg\"",
	ref: Accept,
	dom: Equal("node arg\n"),
	round_trip: Equal("node \"arg\"\n"),
}
test_case! { string_escaped_literal_whitespace,
	"node \"Hello \\\nWorld \\          Stuff\"\n",
	ref: Accept,
	dom: Equal("node \"Hello World Stuff\"\n"),
	round_trip: Equal("node \"Hello World Stuff\"\n"),
}
test_case! { trailing_crlf,
	"node\r\n",
	ref: Accept,
	dom: Equal("node\n"),
	round_trip: Equal("node\n"),
}
test_case! { trailing_underscore_hex,
	"node 0x123abc_",
	ref: Accept,
	dom: Panic,
	round_trip: Panic,
}
test_case! { true_prop_key_fail,
	"node true=1\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { type_before_prop_key_fail,
	"node (type)key=10\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { unbalanced_raw_hashes_fail,
	"node ##\"foo\"#\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { underscore_at_start_of_fraction_fail,
	"node 1._7",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { underscore_at_start_of_hex_fail,
	"node 0x_10",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { underscore_before_number,
	"node _15\n",
	ref: Accept,
	dom: Equal("node _15\n"),
	round_trip: Same,
}
test_case! { underscore_in_exponent,
	"node 1.0e-10_0\n",
	ref: Accept,
	dom: Equal("node 1.0e-100\n"),
	round_trip: Equal("node 1.0e-100\n"),
}
test_case! { underscore_in_float,
	"node 1_1.0\n",
	ref: Accept,
	dom: Equal("node 11.0\n"),
	round_trip: Equal("node 11.0\n"),
}
test_case! { underscore_in_octal,
	"node 0o012_3456_7",
	ref: Accept,
	dom: Equal("node 342391\n"),
	round_trip: Equal("node 342391\n"),
}
test_case! { unicode_delete_fail,
	// the reference lets U+007F through
	"// 0x007F (Delete)\nnode1 \u{7f}arg\n",
	ref: Accept,
	dom: Panic,
	round_trip: Panic,
}
test_case! { unicode_fsi_fail,
	"// 0x2068\nnode1 \u{2068}arg\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { unicode_rlo_fail,
	"// 0x202E\nnode \u{202e}arg\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { unicode_silly,
	"\u{30ce}\u{30fc}\u{30c9}\u{3000}\u{304a}\u{540d}\u{524d}=\u{0e05}^\u{2022}\u{fecc}\u{2022}^\u{0e05}\n",
	ref: Accept,
	dom: Equal("\u{30ce}\u{30fc}\u{30c9} \u{304a}\u{540d}\u{524d}=\u{0e05}^\u{2022}\u{fecc}\u{2022}^\u{0e05}\n"),
	round_trip: Equal("\u{30ce}\u{30fc}\u{30c9} \u{304a}\u{540d}\u{524d}=\u{0e05}^\u{2022}\u{fecc}\u{2022}^\u{0e05}\n"),
}
test_case! { unicode_under_0x20_fail,
	"// 0x0019\nnode1 \u{19}arg\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { unterminated_empty_node_fail,
	"node {\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { unusual_bare_id_chars_in_quoted_id,
	"\"foo123~!@$%^&*.:'|?+<>,`-_\" weeee\n",
	ref: Accept,
	dom: Equal("foo123~!@$%^&*.:'|?+<>,`-_ weeee\n"),
	round_trip: Same,
}
test_case! { vertical_tab_whitespace,
	"node\u{b}arg\n",
	ref: Accept,
	dom: Equal("node\narg\n"),
	round_trip: Equal("node\narg\n"),
}
test_case! { zero_float,
	"node 0.0\n",
	ref: Accept,
	dom: Equal("node 0.0\n"),
	round_trip: Same,
}
test_case! { zero_space_before_first_arg_fail,
	"node\"string\"\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { zero_space_before_prop_fail,
	"node foo=\"value\"bar=5\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
test_case! { zero_space_before_second_arg_fail,
	"node \"string\"1\n",
	ref: Reject,
	dom: Panic,
	round_trip: Panic,
}
