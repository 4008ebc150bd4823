/// State management module
///
/// All mutable application state lives in one `Session` value and is written
/// only through the reducer in session.rs.

pub mod session;
