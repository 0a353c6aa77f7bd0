/// Inspection domain - records, join/filter engine and response policies
///
/// Everything in this module is free of I/O. Remote pages are handed in
/// through closures or ports, which keeps the engine testable against
/// in-memory backends.
pub mod domain;
pub mod policies;
pub mod services;
