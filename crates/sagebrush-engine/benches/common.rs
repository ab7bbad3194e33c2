// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_post_body(sections: usize) -> String {
    let mut body = String::from("Digital asset markets operate continuously across venues.\n\n");

    for section in 0..sections {
        body.push_str(&format!("## Section {section}\n"));
        body.push_str("Liquidity is fragmented. Pricing can vary across venues.\n");
        body.push_str("### Custody\n");
        body.push_str("Secure custody and controls are central to risk management.\n\n");
        body.push_str("- Defined allocation bands\n- Structured rebalancing\n- Suitability assessment\n");
        body.push_str("Volatility is a structural reality.\n\n");
    }

    body
}
