//! Research stub.
//!
//! Stands in for a real search integration; returns canned advisory text
//! so prompt construction has a stable seam to hang research output on.

use indoc::formatdoc;
use tracing::debug;

/// Simulated online research for an agenda topic.
pub fn perform_research(query: &str) -> String {
    debug!(query, "performing research");
    formatdoc! {"
        [Research Result for '{query}']
        - Standard agendas for this topic usually include: Introduction, Main Discussion, Action Items.
        - Recommended time allocation: 10% Intro, 70% Discussion, 20% Conclusion.
        - Consider including a 'Parking Lot' for off-topic items.
    "}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn research_echoes_the_query() {
        let advice = perform_research("quarterly planning");
        assert!(advice.contains("'quarterly planning'"));
        assert!(advice.contains("Parking Lot"));
    }
}
