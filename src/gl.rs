
#![allow(clippy::all, non_upper_case_globals, non_snake_case, non_camel_case_types, dead_code, unused_imports)]

include!(concat!(env!("OUT_DIR"), "/bindings.rs"));
