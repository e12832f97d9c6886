use std::fmt::Write;

use super::case::TestSuite;

/// Human-readable summary of every test case. Never touches query state or
/// the network.
#[must_use]
pub fn render_listing(suite: &TestSuite) -> String {
    let mut out = String::from("Available tests cases:\n\n");
    for case in suite.cases() {
        let params: Vec<&str> = case.fields.keys().map(String::as_str).collect();
        // Writing into a String cannot fail.
        drop(writeln!(
            out,
            "Name: {}\nDescription: {}\nPath: {}\nQuery params: {}\n",
            case.name,
            case.description.as_deref().unwrap_or_default(),
            case.path,
            params.join(" ")
        ));
    }
    out
}
