// Code points emitted verbatim inside quoted strings
pub const PRINTABLE_START: u32 = 32;
pub const PRINTABLE_END: u32 = 176;
